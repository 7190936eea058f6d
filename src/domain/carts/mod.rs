//! Carts

pub mod errors;
pub mod models;
pub mod service;

pub use errors::{CartError, CartsServiceError};
pub use service::*;
