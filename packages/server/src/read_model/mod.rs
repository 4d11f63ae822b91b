//! Read-model core: show classification, display aggregation and show
//! validation, plus the [`Booking`] service that feeds them from a store.

pub mod aggregator;
pub mod classifier;
pub mod service;
pub mod validator;

pub use service::{Booking, BookingError};
pub use validator::{ShowProposal, ShowRejection};
