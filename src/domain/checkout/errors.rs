//! Checkout errors.

use thiserror::Error;

use crate::domain::{
    identity::IdentityError,
    orders::{errors::OrderStoreError, status::InvalidStatusValue},
};

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("contact name and email are required")]
    IncompleteContact,

    #[error("street address, city and province are required")]
    IncompleteAddress,

    #[error("a contact phone number is required")]
    MissingPhone,

    #[error("a supported payment method is required")]
    MissingPaymentMethod,

    #[error("the cart is empty")]
    EmptyCart,

    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error(transparent)]
    InvalidStatus(#[from] InvalidStatusValue),

    #[error("order storage error")]
    Storage(#[source] OrderStoreError),
}

impl From<OrderStoreError> for CheckoutError {
    fn from(error: OrderStoreError) -> Self {
        Self::Storage(error)
    }
}
