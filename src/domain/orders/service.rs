//! Orders service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    domain::orders::{
        errors::OrdersServiceError,
        models::{Order, OrderFilter, StatusUpdateMeta},
        status::OrderStatus,
        store::OrderStore,
    },
    ids::{OrderUuid, UserUuid},
};

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// List a customer's orders, newest first, optionally filtered by
    /// status. Legacy status values are normalized on the way out.
    async fn list_orders(
        &self,
        user: UserUuid,
        status: Option<OrderStatus>,
        limit: Option<usize>,
        offset: usize,
    ) -> Result<Vec<Order>, OrdersServiceError>;

    /// Retrieve one of the customer's orders.
    async fn get_order(&self, user: UserUuid, order: OrderUuid)
    -> Result<Order, OrdersServiceError>;

    /// Cancel a pending order on the customer's behalf. Irreversible.
    async fn cancel_order(
        &self,
        user: UserUuid,
        order: OrderUuid,
        reason: &str,
    ) -> Result<Order, OrdersServiceError>;

    /// Apply a fulfillment-side transition. Only the single next step on
    /// the fulfillment path is accepted.
    async fn advance_status(
        &self,
        order: OrderUuid,
        target: OrderStatus,
        meta: StatusUpdateMeta,
    ) -> Result<Order, OrdersServiceError>;
}

/// Orders service over the order store collaborator.
#[derive(Clone)]
pub struct DefaultOrdersService {
    store: Arc<dyn OrderStore>,
}

impl DefaultOrdersService {
    #[must_use]
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    async fn get_scoped(
        &self,
        user: UserUuid,
        order: OrderUuid,
    ) -> Result<Order, OrdersServiceError> {
        let record = self.store.get(order).await?;

        if record.user_uuid != user {
            return Err(OrdersServiceError::NotFound);
        }

        Ok(Order::try_from(record)?)
    }
}

#[async_trait]
impl OrdersService for DefaultOrdersService {
    async fn list_orders(
        &self,
        user: UserUuid,
        status: Option<OrderStatus>,
        limit: Option<usize>,
        offset: usize,
    ) -> Result<Vec<Order>, OrdersServiceError> {
        let records = self
            .store
            .list(OrderFilter {
                user: Some(user),
                status,
                limit,
                offset,
            })
            .await?;

        records
            .into_iter()
            .map(|record| Order::try_from(record).map_err(OrdersServiceError::from))
            .collect()
    }

    async fn get_order(
        &self,
        user: UserUuid,
        order: OrderUuid,
    ) -> Result<Order, OrdersServiceError> {
        self.get_scoped(user, order).await
    }

    #[tracing::instrument(
        name = "orders.service.cancel_order",
        skip(self, reason),
        fields(user_uuid = %user, order_uuid = %order),
        err
    )]
    async fn cancel_order(
        &self,
        user: UserUuid,
        order: OrderUuid,
        reason: &str,
    ) -> Result<Order, OrdersServiceError> {
        let reason = reason.trim();

        if reason.is_empty() {
            return Err(OrdersServiceError::MissingReason);
        }

        let current = self.get_scoped(user, order).await?;

        if !current.status.can_cancel() {
            return Err(OrdersServiceError::InvalidState);
        }

        let record = self
            .store
            .append_cancellation(order, current.version, reason.to_string())
            .await?;

        info!(order_uuid = %order, "cancelled order");

        Ok(Order::try_from(record)?)
    }

    #[tracing::instrument(
        name = "orders.service.advance_status",
        skip(self, meta),
        fields(order_uuid = %order, target = %target),
        err
    )]
    async fn advance_status(
        &self,
        order: OrderUuid,
        target: OrderStatus,
        meta: StatusUpdateMeta,
    ) -> Result<Order, OrdersServiceError> {
        let record = self.store.get(order).await?;
        let current = record.status.parse::<OrderStatus>()?;

        if current.next() != Some(target) {
            return Err(OrdersServiceError::InvalidState);
        }

        let updated = self
            .store
            .update_status(order, record.version, target, meta)
            .await?;

        info!(order_uuid = %order, status = %target, "advanced order status");

        Ok(Order::try_from(updated)?)
    }
}
