//! Cart Models

use indexmap::IndexMap;

use crate::{
    domain::{carts::errors::CartError, products::models::Product},
    ids::ProductUuid,
};

/// One product line in a cart.
///
/// Prices are snapshotted from the catalog when the product is first added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineItem {
    pub product_uuid: ProductUuid,
    pub name: String,
    pub image: String,
    /// Sale price charged per unit, minor units.
    pub unit_price: u64,
    /// Per-unit price before any discount; never below `unit_price`.
    pub original_unit_price: u64,
    pub quantity: u32,
}

impl CartLineItem {
    /// Amount charged for the whole line.
    #[must_use]
    pub fn line_total(&self) -> u64 {
        self.unit_price * u64::from(self.quantity)
    }

    /// Total amount deducted for the line versus its undiscounted price.
    #[must_use]
    pub fn line_discount(&self) -> u64 {
        self.original_unit_price.saturating_sub(self.unit_price) * u64::from(self.quantity)
    }
}

/// Derived cart totals, recomputed from the lines on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    pub total_items: u32,
    pub total_price: u64,
}

/// Cart Aggregate
///
/// An ordered mapping of product id to line item: one line per product,
/// insertion order preserved. Mutations are in-memory and do not suspend.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: IndexMap<ProductUuid, CartLineItem>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product to the cart.
    ///
    /// An already-present product has its quantity incremented; the line
    /// keeps the price snapshot taken when it was first added.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] when `quantity` is zero.
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        if let Some(line) = self.items.get_mut(&product.uuid) {
            line.quantity += quantity;
        } else {
            self.items.insert(
                product.uuid,
                CartLineItem {
                    product_uuid: product.uuid,
                    name: product.name.clone(),
                    image: product.image.clone(),
                    unit_price: product.price,
                    original_unit_price: product.undiscounted_price(),
                    quantity,
                },
            );
        }

        Ok(())
    }

    /// Set a line's quantity exactly; zero removes the line.
    ///
    /// A product that is not in the cart is left untouched.
    pub fn update_quantity(&mut self, product: ProductUuid, quantity: u32) {
        if quantity == 0 {
            self.items.shift_remove(&product);
        } else if let Some(line) = self.items.get_mut(&product) {
            line.quantity = quantity;
        }
    }

    /// Remove a product's line entirely.
    pub fn remove_item(&mut self, product: ProductUuid) {
        self.items.shift_remove(&product);
    }

    /// Empty the cart. Called only once an order has been durably created.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Recompute the item count and subtotal from the current lines.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            total_items: self.items.values().map(|line| line.quantity).sum(),
            total_price: self.items.values().map(CartLineItem::line_total).sum(),
        }
    }

    /// Line items in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &CartLineItem> {
        self.items.values()
    }

    #[must_use]
    pub fn get(&self, product: ProductUuid) -> Option<&CartLineItem> {
        self.items.get(&product)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
