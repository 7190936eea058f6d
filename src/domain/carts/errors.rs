//! Cart errors.

use thiserror::Error;

use crate::domain::products::errors::CatalogError;

/// Errors raised by cart aggregate operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("quantity must be at least 1")]
    InvalidQuantity,
}

/// Errors raised by the carts service.
#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("product not found")]
    ProductNotFound,

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
