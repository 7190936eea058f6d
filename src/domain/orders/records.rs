//! Order Records
//!
//! Storage-shaped order data. The status is kept as the raw persisted
//! string; parsing and legacy normalization happen when a record crosses
//! into the domain model.

use jiff::Timestamp;

use crate::{
    domain::orders::{
        models::{NewOrder, Order, OrderLineItem, PaymentMethod, ShippingAddress},
        status::{InvalidStatusValue, OrderStatus},
    },
    ids::{OrderUuid, UserUuid},
};

/// Order Record
#[derive(Debug, Clone)]
pub struct OrderRecord {
    pub uuid: OrderUuid,
    pub order_number: String,
    pub user_uuid: UserUuid,
    /// Raw persisted status value. May hold legacy synonyms.
    pub status: String,
    pub version: u64,
    pub items: Vec<OrderLineItem>,
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

impl From<NewOrder> for OrderRecord {
    fn from(order: NewOrder) -> Self {
        let now = Timestamp::now();

        Self {
            uuid: order.uuid,
            order_number: order.order_number,
            user_uuid: order.user_uuid,
            status: OrderStatus::Pending.as_str().to_string(),
            version: 0,
            items: order.items,
            total_amount: order.total_amount,
            shipping_fee: order.shipping_fee,
            shipping_address: order.shipping_address,
            payment_method: order.payment_method,
            customer_notes: order.customer_notes,
            tracking_number: None,
            cancellation_reason: None,
            admin_notes: None,
            created_at: now,
            updated_at: now,
        }
    }
}

impl TryFrom<OrderRecord> for Order {
    type Error = InvalidStatusValue;

    fn try_from(record: OrderRecord) -> Result<Self, Self::Error> {
        let status = record.status.parse::<OrderStatus>()?;

        Ok(Self {
            uuid: record.uuid,
            order_number: record.order_number,
            user_uuid: record.user_uuid,
            status,
            version: record.version,
            items: record.items,
            total_amount: record.total_amount,
            shipping_fee: record.shipping_fee,
            shipping_address: record.shipping_address,
            payment_method: record.payment_method,
            customer_notes: record.customer_notes,
            tracking_number: record.tracking_number,
            cancellation_reason: record.cancellation_reason,
            admin_notes: record.admin_notes,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}
