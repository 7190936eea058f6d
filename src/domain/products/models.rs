//! Product Models

use jiff::Timestamp;

use crate::ids::ProductUuid;

/// Product Model
///
/// The slice of the catalog the order core consumes: enough to render a
/// line item and snapshot its price.
#[derive(Debug, Clone)]
pub struct Product {
    pub uuid: ProductUuid,
    pub name: String,
    pub image: String,
    /// Current selling price in minor units.
    pub price: u64,
    /// Pre-discount price when the product is on sale.
    pub original_price: Option<u64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Product {
    /// The price the product sold for before any discount.
    #[must_use]
    pub fn undiscounted_price(&self) -> u64 {
        self.original_price.unwrap_or(self.price).max(self.price)
    }
}
