//! Review Models

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::ids::{OrderUuid, ProductUuid, ReviewUuid, UserUuid};

/// A product referenced by a review, copied from the order's snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewedProduct {
    pub product_id: ProductUuid,
    pub product_name: String,
}

/// Review Model
///
/// References the order by id; never mutates the order's fulfillment
/// state.
#[derive(Debug, Clone)]
pub struct Review {
    pub uuid: ReviewUuid,
    pub order_uuid: OrderUuid,
    pub user_uuid: UserUuid,
    /// 1 to 5, inclusive.
    pub rating: u8,
    pub comment: String,
    pub products: Vec<ReviewedProduct>,
    pub created_at: Timestamp,
}

/// New Review Model
#[derive(Debug, Clone)]
pub struct NewReview {
    pub uuid: ReviewUuid,
    pub order_uuid: OrderUuid,
    pub user_uuid: UserUuid,
    pub rating: u8,
    pub comment: String,
    pub products: Vec<ReviewedProduct>,
}
