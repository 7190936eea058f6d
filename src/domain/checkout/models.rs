//! Checkout Models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{domain::orders::models::ShippingAddress, ids::OrderUuid};

/// Customer contact details submitted with the checkout form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Validated-side input to [`submit_checkout`].
///
/// [`submit_checkout`]: crate::domain::checkout::service::CheckoutService::submit_checkout
#[derive(Debug, Clone)]
pub struct CheckoutForm {
    pub contact: ContactInfo,
    pub shipping: ShippingAddress,
    /// Raw payment-method selector; validated against the supported set.
    pub payment_method: String,
    /// Opaque passthrough, persisted on the order verbatim.
    pub customer_notes: Option<String>,
    /// Idempotency key for the checkout attempt. A retry carrying the same
    /// key after a mid-flight failure cannot create a duplicate order.
    pub attempt_uuid: Option<OrderUuid>,
}

/// One item of the checkout request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequestItem {
    pub product_id: Uuid,
    pub quantity: u32,
}

/// Wire shape of the checkout submission.
///
/// The items and fee are displayed client-side but the server-side cart
/// and pricing calculator are authoritative for what gets charged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub items: Vec<CheckoutRequestItem>,
    pub shipping_address: String,
    pub shipping_city: String,
    pub shipping_province: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_postal_code: Option<String>,
    pub shipping_phone: String,
    pub recipient_name: String,
    pub payment_method: String,
    pub shipping_fee: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_notes: Option<String>,
}

impl CheckoutRequest {
    /// Pair the request with the submitting customer's contact details.
    ///
    /// The flat `shippingAddress` line maps onto the structured address's
    /// street component; transports that carry discrete components build
    /// a [`CheckoutForm`] directly instead.
    #[must_use]
    pub fn into_form(self, contact: ContactInfo) -> CheckoutForm {
        CheckoutForm {
            contact,
            shipping: ShippingAddress {
                recipient_name: self.recipient_name,
                phone: self.shipping_phone,
                address_line: self.shipping_address,
                barangay: String::new(),
                city: self.shipping_city,
                province: self.shipping_province,
                postal_code: self.shipping_postal_code,
            },
            payment_method: self.payment_method,
            customer_notes: self.customer_notes,
            attempt_uuid: None,
        }
    }
}

/// Wire shape of a successful checkout response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutReceipt {
    pub order_number: String,
}
