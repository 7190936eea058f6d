//! Order store collaborator.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use rustc_hash::FxHashMap;
use tokio::sync::RwLock;

use crate::{
    domain::orders::{
        errors::OrderStoreError,
        models::{NewOrder, OrderFilter, StatusUpdateMeta},
        records::OrderRecord,
        status::OrderStatus,
    },
    ids::OrderUuid,
};

/// Persistence boundary for orders.
///
/// Status writes are compare-and-swap on the record version: a writer that
/// read version `n` only succeeds if the record is still at version `n`,
/// so a customer cancellation and a fulfillment advancement racing on the
/// same order produce exactly one winner.
#[automock]
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persist a new order. Fails with [`OrderStoreError::AlreadyExists`]
    /// when the id has been used before.
    async fn create(&self, order: NewOrder) -> Result<OrderRecord, OrderStoreError>;

    async fn get(&self, order: OrderUuid) -> Result<OrderRecord, OrderStoreError>;

    /// List records matching the filter, newest first.
    async fn list(&self, filter: OrderFilter) -> Result<Vec<OrderRecord>, OrderStoreError>;

    /// Write a new status, guarded by the expected record version.
    async fn update_status(
        &self,
        order: OrderUuid,
        expected_version: u64,
        status: OrderStatus,
        meta: StatusUpdateMeta,
    ) -> Result<OrderRecord, OrderStoreError>;

    /// Mark the order cancelled and persist the customer's reason,
    /// guarded by the expected record version.
    async fn append_cancellation(
        &self,
        order: OrderUuid,
        expected_version: u64,
        reason: String,
    ) -> Result<OrderRecord, OrderStoreError>;
}

/// In-memory order store used for wiring and tests.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<FxHashMap<OrderUuid, OrderRecord>>,
}

impl InMemoryOrderStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record verbatim, bypassing the create path.
    ///
    /// Fixture hook for seeding historical data, e.g. records carrying the
    /// legacy `delivering` status value.
    pub async fn seed(&self, record: OrderRecord) {
        self.orders.write().await.insert(record.uuid, record);
    }

    async fn write_guarded<F>(
        &self,
        order: OrderUuid,
        expected_version: u64,
        apply: F,
    ) -> Result<OrderRecord, OrderStoreError>
    where
        F: FnOnce(&mut OrderRecord),
    {
        let mut orders = self.orders.write().await;

        let record = orders.get_mut(&order).ok_or(OrderStoreError::NotFound)?;

        if record.version != expected_version {
            return Err(OrderStoreError::VersionConflict);
        }

        apply(record);
        record.version += 1;
        record.updated_at = Timestamp::now();

        Ok(record.clone())
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn create(&self, order: NewOrder) -> Result<OrderRecord, OrderStoreError> {
        let mut orders = self.orders.write().await;

        if orders.contains_key(&order.uuid) {
            return Err(OrderStoreError::AlreadyExists);
        }

        let record = OrderRecord::from(order);
        orders.insert(record.uuid, record.clone());

        Ok(record)
    }

    async fn get(&self, order: OrderUuid) -> Result<OrderRecord, OrderStoreError> {
        self.orders
            .read()
            .await
            .get(&order)
            .cloned()
            .ok_or(OrderStoreError::NotFound)
    }

    async fn list(&self, filter: OrderFilter) -> Result<Vec<OrderRecord>, OrderStoreError> {
        let orders = self.orders.read().await;

        let mut matches: Vec<OrderRecord> = orders
            .values()
            .filter(|record| filter.user.is_none_or(|user| record.user_uuid == user))
            .filter(|record| {
                filter.status.is_none_or(|wanted| {
                    record
                        .status
                        .parse::<OrderStatus>()
                        .is_ok_and(|status| status == wanted)
                })
            })
            .cloned()
            .collect();

        // v7 ids are time-ordered, which keeps ties deterministic.
        matches.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.uuid.cmp(&a.uuid))
        });

        let page: Vec<OrderRecord> = matches
            .into_iter()
            .skip(filter.offset)
            .take(filter.limit.unwrap_or(usize::MAX))
            .collect();

        Ok(page)
    }

    async fn update_status(
        &self,
        order: OrderUuid,
        expected_version: u64,
        status: OrderStatus,
        meta: StatusUpdateMeta,
    ) -> Result<OrderRecord, OrderStoreError> {
        self.write_guarded(order, expected_version, |record| {
            record.status = status.as_str().to_string();

            if let Some(tracking_number) = meta.tracking_number {
                record.tracking_number = Some(tracking_number);
            }

            if let Some(admin_notes) = meta.admin_notes {
                record.admin_notes = Some(admin_notes);
            }
        })
        .await
    }

    async fn append_cancellation(
        &self,
        order: OrderUuid,
        expected_version: u64,
        reason: String,
    ) -> Result<OrderRecord, OrderStoreError> {
        self.write_guarded(order, expected_version, |record| {
            record.status = OrderStatus::Cancelled.as_str().to_string();
            record.cancellation_reason = Some(reason);
        })
        .await
    }
}
