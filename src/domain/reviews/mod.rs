//! Reviews

pub mod errors;
pub mod models;
pub mod service;
pub mod store;

pub use errors::{ReviewStoreError, ReviewsServiceError};
pub use service::*;
