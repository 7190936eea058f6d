//! Orders service errors.

use thiserror::Error;

use crate::domain::orders::status::InvalidStatusValue;

/// Failures at the order storage boundary.
#[derive(Debug, Error)]
pub enum OrderStoreError {
    #[error("order not found")]
    NotFound,

    #[error("order already exists")]
    AlreadyExists,

    #[error("order was modified by another writer")]
    VersionConflict,

    #[error("order storage error: {0}")]
    Backend(String),
}

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("order not found")]
    NotFound,

    #[error("the order's current status does not allow this action")]
    InvalidState,

    #[error("a cancellation reason is required")]
    MissingReason,

    #[error(transparent)]
    InvalidStatus(#[from] InvalidStatusValue),

    #[error("order storage error")]
    Storage(#[source] OrderStoreError),
}

impl From<OrderStoreError> for OrdersServiceError {
    fn from(error: OrderStoreError) -> Self {
        match error {
            OrderStoreError::NotFound => Self::NotFound,
            // A competing writer got there first; by the time the caller
            // re-reads, the requested transition is no longer legal.
            OrderStoreError::VersionConflict => Self::InvalidState,
            other => Self::Storage(other),
        }
    }
}
