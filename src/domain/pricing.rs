//! Shipping fee and grand total calculation.
//!
//! All amounts are in minor units (centavos).

/// Pricing configuration for a storefront.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingConfig {
    /// Subtotals at or above this amount ship for free.
    pub free_shipping_threshold: u64,
    /// Flat fee charged below the threshold.
    pub flat_shipping_fee: u64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            free_shipping_threshold: 1_000_000,
            flat_shipping_fee: 10_000,
        }
    }
}

/// Calculates the shipping fee for a cart subtotal.
///
/// The threshold is inclusive: a subtotal exactly at the threshold ships free.
#[must_use]
pub fn shipping_fee(subtotal: u64, config: &PricingConfig) -> u64 {
    if subtotal >= config.free_shipping_threshold {
        0
    } else {
        config.flat_shipping_fee
    }
}

/// Combines the items subtotal and the shipping fee into the amount due.
#[must_use]
pub fn grand_total(subtotal: u64, shipping_fee: u64) -> u64 {
    subtotal.saturating_add(shipping_fee)
}
