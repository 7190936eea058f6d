//! Product catalog collaborator.

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;
use tokio::sync::RwLock;

use crate::{
    domain::products::{errors::CatalogError, models::Product},
    ids::ProductUuid,
};

/// Read-only view of the product catalog.
///
/// The catalog itself lives outside this subsystem; the order core only
/// looks products up when a customer adds one to a cart.
#[automock]
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Fetch a product by id. `None` when the product does not exist.
    async fn get(&self, product: ProductUuid) -> Result<Option<Product>, CatalogError>;
}

/// In-memory catalog used for wiring and tests.
#[derive(Debug, Default)]
pub struct InMemoryProductCatalog {
    products: RwLock<FxHashMap<ProductUuid, Product>>,
}

impl InMemoryProductCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a product.
    pub async fn insert(&self, product: Product) {
        self.products.write().await.insert(product.uuid, product);
    }

    /// Overwrite the selling price of an existing product.
    pub async fn set_price(&self, product: ProductUuid, price: u64) {
        if let Some(existing) = self.products.write().await.get_mut(&product) {
            existing.price = price;
        }
    }
}

#[async_trait]
impl ProductCatalog for InMemoryProductCatalog {
    async fn get(&self, product: ProductUuid) -> Result<Option<Product>, CatalogError> {
        Ok(self.products.read().await.get(&product).cloned())
    }
}
