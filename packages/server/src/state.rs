use std::sync::Arc;

use crate::config::AppConfig;
use crate::read_model::Booking;
use crate::store::EntityStore;

#[derive(Clone)]
pub struct AppState {
    pub booking: Booking,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn EntityStore>, config: AppConfig) -> Self {
        Self {
            booking: Booking::new(store),
            config,
        }
    }
}
