pub mod artist;
pub mod search;
pub mod shared;
pub mod show;
pub mod venue;
