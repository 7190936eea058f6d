//! Order Models

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    domain::orders::status::OrderStatus,
    ids::{OrderUuid, ProductUuid, UserUuid},
};

/// Structured delivery address.
///
/// Components are stored discretely; the display string is derived on
/// demand instead of being persisted as a concatenation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingAddress {
    pub recipient_name: String,
    pub phone: String,
    pub address_line: String,
    pub barangay: String,
    pub city: String,
    pub province: String,
    pub postal_code: Option<String>,
}

impl ShippingAddress {
    /// Single-line delivery address: non-empty components joined by `", "`.
    #[must_use]
    pub fn display_string(&self) -> String {
        let postal_code = self.postal_code.as_deref().unwrap_or("");

        [
            self.address_line.as_str(),
            self.barangay.as_str(),
            self.city.as_str(),
            self.province.as_str(),
            postal_code,
        ]
        .iter()
        .map(|component| component.trim())
        .filter(|component| !component.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

/// An unsupported payment method selector.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unsupported payment method {0:?}")]
pub struct UnsupportedPaymentMethod(pub String);

/// Supported payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CashOnDelivery,
    Gcash,
    Maya,
    Card,
}

impl PaymentMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CashOnDelivery => "cash_on_delivery",
            Self::Gcash => "gcash",
            Self::Maya => "maya",
            Self::Card => "card",
        }
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = UnsupportedPaymentMethod;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "cash_on_delivery" => Ok(Self::CashOnDelivery),
            "gcash" => Ok(Self::Gcash),
            "maya" => Ok(Self::Maya),
            "card" => Ok(Self::Card),
            other => Err(UnsupportedPaymentMethod(other.to_string())),
        }
    }
}

/// One line of an order's frozen snapshot.
///
/// Invariant: the per-unit price before discounting equals
/// `unit_price + discount / quantity` whenever `discount > 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLineItem {
    pub product_uuid: ProductUuid,
    pub name: String,
    pub image: String,
    /// Price actually charged per unit, minor units.
    pub unit_price: u64,
    /// Total amount deducted for this line versus its original price.
    pub discount: u64,
    pub quantity: u32,
}

impl OrderLineItem {
    #[must_use]
    pub fn line_total(&self) -> u64 {
        self.unit_price * u64::from(self.quantity)
    }
}

/// Order Model
///
/// Identity and snapshot fields never change after creation; fulfillment
/// fields mutate under the status engine's guard.
#[derive(Debug, Clone)]
pub struct Order {
    pub uuid: OrderUuid,
    pub order_number: String,
    pub user_uuid: UserUuid,
    pub status: OrderStatus,
    /// Optimistic concurrency counter, bumped on every status write.
    pub version: u64,
    pub items: Vec<OrderLineItem>,
    /// Items subtotal, minor units. Excludes the shipping fee.
    pub total_amount: u64,
    pub shipping_fee: u64,
    pub shipping_address: ShippingAddress,
    pub payment_method: PaymentMethod,
    pub customer_notes: Option<String>,
    pub tracking_number: Option<String>,
    pub cancellation_reason: Option<String>,
    pub admin_notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Order {
    /// Amount due for the order including shipping.
    #[must_use]
    pub fn amount_due(&self) -> u64 {
        self.total_amount.saturating_add(self.shipping_fee)
    }
}

/// New Order Model
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub uuid: OrderUuid,
    pub order_number: String,
    pub user_uuid: UserUuid,
    pub items: Vec<OrderLineItem>,
    pub total_amount: u64,
    pub shipping_fee: u64,
    pub shipping_address: ShippingAddress,
    pub payment_method: PaymentMethod,
    pub customer_notes: Option<String>,
}

/// Listing filter for the order store.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub user: Option<UserUuid>,
    pub status: Option<OrderStatus>,
    pub limit: Option<usize>,
    pub offset: usize,
}

impl OrderFilter {
    #[must_use]
    pub fn for_user(user: UserUuid) -> Self {
        Self {
            user: Some(user),
            ..Self::default()
        }
    }
}

/// Side data carried by a fulfillment status update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusUpdateMeta {
    pub tracking_number: Option<String>,
    pub admin_notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn address() -> ShippingAddress {
        ShippingAddress {
            recipient_name: "Maria Santos".to_string(),
            phone: "+63 917 555 0101".to_string(),
            address_line: "12 Sampaguita St".to_string(),
            barangay: "Barangay Malinis".to_string(),
            city: "Quezon City".to_string(),
            province: "Metro Manila".to_string(),
            postal_code: Some("1100".to_string()),
        }
    }

    #[test]
    fn display_string_joins_components() {
        assert_eq!(
            address().display_string(),
            "12 Sampaguita St, Barangay Malinis, Quezon City, Metro Manila, 1100"
        );
    }

    #[test]
    fn display_string_skips_empty_components() {
        let mut address = address();
        address.barangay = String::new();
        address.postal_code = None;

        assert_eq!(
            address.display_string(),
            "12 Sampaguita St, Quezon City, Metro Manila"
        );
    }

    #[test]
    fn display_string_trims_whitespace_components() {
        let mut address = address();
        address.barangay = "  ".to_string();

        assert_eq!(
            address.display_string(),
            "12 Sampaguita St, Quezon City, Metro Manila, 1100"
        );
    }

    #[test]
    fn payment_method_round_trips() -> TestResult {
        for method in [
            PaymentMethod::CashOnDelivery,
            PaymentMethod::Gcash,
            PaymentMethod::Maya,
            PaymentMethod::Card,
        ] {
            assert_eq!(method.as_str().parse::<PaymentMethod>()?, method);
        }

        Ok(())
    }

    #[test]
    fn payment_method_rejects_unknown_selector() {
        let result = "barter".parse::<PaymentMethod>();

        assert_eq!(
            result,
            Err(UnsupportedPaymentMethod("barter".to_string()))
        );
    }

    #[test]
    fn line_discount_invariant_holds() {
        // 3 units sold at 600.00 each, 150.00 off per unit.
        let line = OrderLineItem {
            product_uuid: ProductUuid::new(),
            name: "Abaca Rug".to_string(),
            image: "abaca-rug.webp".to_string(),
            unit_price: 600_00,
            discount: 450_00,
            quantity: 3,
        };

        let original_unit_price = line.unit_price + line.discount / u64::from(line.quantity);

        assert_eq!(original_unit_price, 750_00);
        assert_eq!(line.line_total(), 1_800_00);
    }
}
