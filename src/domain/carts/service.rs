//! Carts service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::{
        carts::{errors::CartsServiceError, models::Cart},
        products::catalog::ProductCatalog,
    },
    ids::ProductUuid,
};

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Resolve a product through the catalog and add it to the cart.
    async fn add_to_cart(
        &self,
        cart: &mut Cart,
        product: ProductUuid,
        quantity: u32,
    ) -> Result<(), CartsServiceError>;
}

/// Carts service backed by the product catalog collaborator.
#[derive(Clone)]
pub struct DefaultCartsService {
    catalog: Arc<dyn ProductCatalog>,
}

impl DefaultCartsService {
    #[must_use]
    pub fn new(catalog: Arc<dyn ProductCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl CartsService for DefaultCartsService {
    async fn add_to_cart(
        &self,
        cart: &mut Cart,
        product: ProductUuid,
        quantity: u32,
    ) -> Result<(), CartsServiceError> {
        let product = self
            .catalog
            .get(product)
            .await?
            .ok_or(CartsServiceError::ProductNotFound)?;

        cart.add_item(&product, quantity)?;

        Ok(())
    }
}
