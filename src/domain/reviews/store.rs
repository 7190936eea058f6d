//! Review store collaborator.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use rustc_hash::{FxHashMap, FxHashSet};
use tokio::sync::RwLock;

use crate::{
    domain::reviews::{
        errors::ReviewStoreError,
        models::{NewReview, Review},
    },
    ids::{OrderUuid, ReviewUuid},
};

/// Persistence boundary for reviews.
///
/// One review per order. Reviewed-ness lives in a side index keyed by
/// order id, deliberately separate from the order's fulfillment status.
#[automock]
#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// Persist a review. Fails with [`ReviewStoreError::AlreadyExists`]
    /// when the order already has one; the check and the insert are a
    /// single atomic step, so concurrent submissions for the same order
    /// produce exactly one review.
    async fn create(&self, review: NewReview) -> Result<Review, ReviewStoreError>;

    async fn exists_for_order(&self, order: OrderUuid) -> Result<bool, ReviewStoreError>;
}

#[derive(Debug, Default)]
struct ReviewTables {
    reviews: FxHashMap<ReviewUuid, Review>,
    reviewed_orders: FxHashSet<OrderUuid>,
}

/// In-memory review store used for wiring and tests.
#[derive(Debug, Default)]
pub struct InMemoryReviewStore {
    tables: RwLock<ReviewTables>,
}

impl InMemoryReviewStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReviewStore for InMemoryReviewStore {
    async fn create(&self, review: NewReview) -> Result<Review, ReviewStoreError> {
        let mut tables = self.tables.write().await;

        // Claiming the order id in the side index is the uniqueness gate.
        if !tables.reviewed_orders.insert(review.order_uuid) {
            return Err(ReviewStoreError::AlreadyExists);
        }

        let review = Review {
            uuid: review.uuid,
            order_uuid: review.order_uuid,
            user_uuid: review.user_uuid,
            rating: review.rating,
            comment: review.comment,
            products: review.products,
            created_at: Timestamp::now(),
        };

        tables.reviews.insert(review.uuid, review.clone());

        Ok(review)
    }

    async fn exists_for_order(&self, order: OrderUuid) -> Result<bool, ReviewStoreError> {
        Ok(self.tables.read().await.reviewed_orders.contains(&order))
    }
}
