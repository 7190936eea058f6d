//! Reviews service errors.

use thiserror::Error;

use crate::domain::orders::{errors::OrderStoreError, status::InvalidStatusValue};

/// Failures at the review storage boundary.
#[derive(Debug, Error)]
pub enum ReviewStoreError {
    #[error("a review already exists for this order")]
    AlreadyExists,

    #[error("review storage error: {0}")]
    Backend(String),
}

#[derive(Debug, Error)]
pub enum ReviewsServiceError {
    #[error("order not found")]
    OrderNotFound,

    #[error("only completed orders can be reviewed")]
    OrderNotComplete,

    #[error("rating must be between 1 and 5")]
    InvalidRating,

    #[error("a review comment is required")]
    EmptyComment,

    #[error("this order has already been reviewed")]
    AlreadyReviewed,

    #[error(transparent)]
    InvalidStatus(#[from] InvalidStatusValue),

    #[error("review storage error")]
    Storage(#[source] ReviewStoreError),

    #[error("order storage error")]
    OrderStorage(#[source] OrderStoreError),
}

impl From<ReviewStoreError> for ReviewsServiceError {
    fn from(error: ReviewStoreError) -> Self {
        match error {
            ReviewStoreError::AlreadyExists => Self::AlreadyReviewed,
            other => Self::Storage(other),
        }
    }
}

impl From<OrderStoreError> for ReviewsServiceError {
    fn from(error: OrderStoreError) -> Self {
        match error {
            OrderStoreError::NotFound => Self::OrderNotFound,
            other => Self::OrderStorage(other),
        }
    }
}
