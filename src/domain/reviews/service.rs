//! Reviews service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    domain::{
        orders::{models::Order, status::OrderStatus, store::OrderStore},
        reviews::{
            errors::ReviewsServiceError,
            models::{NewReview, Review, ReviewedProduct},
            store::ReviewStore,
        },
    },
    ids::{OrderUuid, ReviewUuid, UserUuid},
};

const MIN_RATING: u8 = 1;
const MAX_RATING: u8 = 5;

#[automock]
#[async_trait]
pub trait ReviewsService: Send + Sync {
    /// Submit a review for a completed, not-yet-reviewed order.
    async fn submit_review(
        &self,
        user: UserUuid,
        order: OrderUuid,
        rating: u8,
        comment: &str,
        products: Vec<ReviewedProduct>,
    ) -> Result<Review, ReviewsServiceError>;

    /// Whether the order already has a review.
    async fn has_reviewed(&self, order: OrderUuid) -> Result<bool, ReviewsServiceError>;
}

/// Reviews service over the review and order store collaborators.
#[derive(Clone)]
pub struct DefaultReviewsService {
    reviews: Arc<dyn ReviewStore>,
    orders: Arc<dyn OrderStore>,
}

impl DefaultReviewsService {
    #[must_use]
    pub fn new(reviews: Arc<dyn ReviewStore>, orders: Arc<dyn OrderStore>) -> Self {
        Self { reviews, orders }
    }
}

#[async_trait]
impl ReviewsService for DefaultReviewsService {
    #[tracing::instrument(
        name = "reviews.service.submit_review",
        skip(self, comment, products),
        fields(user_uuid = %user, order_uuid = %order, rating = rating),
        err
    )]
    async fn submit_review(
        &self,
        user: UserUuid,
        order: OrderUuid,
        rating: u8,
        comment: &str,
        products: Vec<ReviewedProduct>,
    ) -> Result<Review, ReviewsServiceError> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(ReviewsServiceError::InvalidRating);
        }

        let comment = comment.trim();

        if comment.is_empty() {
            return Err(ReviewsServiceError::EmptyComment);
        }

        let record = self.orders.get(order).await?;

        if record.user_uuid != user {
            return Err(ReviewsServiceError::OrderNotFound);
        }

        let current = Order::try_from(record)?;

        if current.status != OrderStatus::Complete {
            return Err(ReviewsServiceError::OrderNotComplete);
        }

        if self.reviews.exists_for_order(order).await? {
            return Err(ReviewsServiceError::AlreadyReviewed);
        }

        // The store re-checks uniqueness atomically; the pre-check above
        // only exists to answer the common case without an insert attempt.
        let review = self
            .reviews
            .create(NewReview {
                uuid: ReviewUuid::new(),
                order_uuid: order,
                user_uuid: user,
                rating,
                comment: comment.to_string(),
                products,
            })
            .await?;

        info!(review_uuid = %review.uuid, "created review");

        Ok(review)
    }

    async fn has_reviewed(&self, order: OrderUuid) -> Result<bool, ReviewsServiceError> {
        Ok(self.reviews.exists_for_order(order).await?)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::{
        orders::{
            models::{NewOrder, PaymentMethod, ShippingAddress, StatusUpdateMeta},
            store::InMemoryOrderStore,
        },
        reviews::store::InMemoryReviewStore,
    };

    use super::*;

    struct Harness {
        orders: Arc<InMemoryOrderStore>,
        service: DefaultReviewsService,
        user: UserUuid,
    }

    impl Harness {
        fn new() -> Self {
            let orders = Arc::new(InMemoryOrderStore::new());

            Self {
                service: DefaultReviewsService::new(
                    Arc::new(InMemoryReviewStore::new()),
                    orders.clone(),
                ),
                orders,
                user: UserUuid::new(),
            }
        }

        async fn order_at(&self, status: OrderStatus) -> Result<OrderUuid, ReviewsServiceError> {
            let order = NewOrder {
                uuid: OrderUuid::new(),
                order_number: "SO-TEST".to_string(),
                user_uuid: self.user,
                items: Vec::new(),
                total_amount: 300_000,
                shipping_fee: 10_000,
                shipping_address: ShippingAddress {
                    recipient_name: "Maria Santos".to_string(),
                    phone: "+63 917 555 0101".to_string(),
                    address_line: "12 Sampaguita St".to_string(),
                    barangay: String::new(),
                    city: "Quezon City".to_string(),
                    province: "Metro Manila".to_string(),
                    postal_code: None,
                },
                payment_method: PaymentMethod::Gcash,
                customer_notes: None,
            };
            let uuid = order.uuid;
            self.orders.create(order).await?;

            let mut current = OrderStatus::Pending;
            let mut version = 0;

            while current != status {
                let next = match current.next() {
                    Some(next) => next,
                    None => break,
                };
                self.orders
                    .update_status(uuid, version, next, StatusUpdateMeta::default())
                    .await?;
                current = next;
                version += 1;
            }

            Ok(uuid)
        }
    }

    #[tokio::test]
    async fn review_on_completed_order_succeeds() -> TestResult {
        let harness = Harness::new();
        let order = harness.order_at(OrderStatus::Complete).await?;

        let review = harness
            .service
            .submit_review(harness.user, order, 5, "Great product", Vec::new())
            .await?;

        assert_eq!(review.rating, 5);
        assert_eq!(review.comment, "Great product");
        assert!(harness.service.has_reviewed(order).await?);

        Ok(())
    }

    #[tokio::test]
    async fn second_review_fails_regardless_of_content() -> TestResult {
        let harness = Harness::new();
        let order = harness.order_at(OrderStatus::Complete).await?;

        harness
            .service
            .submit_review(harness.user, order, 5, "Great product", Vec::new())
            .await?;

        let result = harness
            .service
            .submit_review(harness.user, order, 1, "Actually terrible", Vec::new())
            .await;

        assert!(
            matches!(result, Err(ReviewsServiceError::AlreadyReviewed)),
            "expected AlreadyReviewed, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn review_before_completion_fails() -> TestResult {
        let harness = Harness::new();

        for status in [
            OrderStatus::Pending,
            OrderStatus::Approved,
            OrderStatus::InTransit,
        ] {
            let order = harness.order_at(status).await?;

            let result = harness
                .service
                .submit_review(harness.user, order, 4, "looks promising", Vec::new())
                .await;

            assert!(
                matches!(result, Err(ReviewsServiceError::OrderNotComplete)),
                "expected OrderNotComplete for {status}, got {result:?}"
            );
        }

        Ok(())
    }

    #[tokio::test]
    async fn rating_outside_range_fails() -> TestResult {
        let harness = Harness::new();
        let order = harness.order_at(OrderStatus::Complete).await?;

        for rating in [0, 6, u8::MAX] {
            let result = harness
                .service
                .submit_review(harness.user, order, rating, "fine", Vec::new())
                .await;

            assert!(
                matches!(result, Err(ReviewsServiceError::InvalidRating)),
                "expected InvalidRating for {rating}, got {result:?}"
            );
        }

        Ok(())
    }

    #[tokio::test]
    async fn blank_comment_fails() -> TestResult {
        let harness = Harness::new();
        let order = harness.order_at(OrderStatus::Complete).await?;

        for comment in ["", "   ", "\n\t"] {
            let result = harness
                .service
                .submit_review(harness.user, order, 4, comment, Vec::new())
                .await;

            assert!(
                matches!(result, Err(ReviewsServiceError::EmptyComment)),
                "expected EmptyComment for {comment:?}, got {result:?}"
            );
        }

        Ok(())
    }

    #[tokio::test]
    async fn unknown_order_fails() {
        let harness = Harness::new();

        let result = harness
            .service
            .submit_review(harness.user, OrderUuid::new(), 5, "nice", Vec::new())
            .await;

        assert!(
            matches!(result, Err(ReviewsServiceError::OrderNotFound)),
            "expected OrderNotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn someone_elses_order_cannot_be_reviewed() -> TestResult {
        let harness = Harness::new();
        let order = harness.order_at(OrderStatus::Complete).await?;

        let result = harness
            .service
            .submit_review(UserUuid::new(), order, 5, "not mine", Vec::new())
            .await;

        assert!(
            matches!(result, Err(ReviewsServiceError::OrderNotFound)),
            "expected OrderNotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn review_does_not_touch_the_order_status() -> TestResult {
        let harness = Harness::new();
        let order = harness.order_at(OrderStatus::Complete).await?;

        harness
            .service
            .submit_review(harness.user, order, 5, "Great product", Vec::new())
            .await?;

        let record = harness.orders.get(order).await?;
        assert_eq!(record.status, "complete");

        Ok(())
    }

    #[tokio::test]
    async fn review_carries_the_product_snapshot() -> TestResult {
        let harness = Harness::new();
        let order = harness.order_at(OrderStatus::Complete).await?;

        let products = vec![ReviewedProduct {
            product_id: crate::ids::ProductUuid::new(),
            product_name: "Abaca Rug".to_string(),
        }];

        let review = harness
            .service
            .submit_review(harness.user, order, 4, "sturdy weave", products.clone())
            .await?;

        assert_eq!(review.products, products);

        Ok(())
    }
}
