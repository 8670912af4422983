//! Orders service.

use std::collections::HashMap;

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        orders::{
            errors::OrdersServiceError,
            records::{OrderItemRecord, OrderRecord, OrderUuid},
            repositories::{PgOrderItemsRepository, PgOrdersRepository},
        },
        users::records::UserUuid,
    },
};

/// Order history backed by `PostgreSQL`.
#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    orders_repository: PgOrdersRepository,
    items_repository: PgOrderItemsRepository,
}

impl PgOrdersService {
    /// Build the service over a shared pool.
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            orders_repository: PgOrdersRepository::new(),
            items_repository: PgOrderItemsRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn list_orders(&self, user: UserUuid) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let mut orders = self.orders_repository.list_orders(&mut tx, user).await?;

        let uuids: Vec<OrderUuid> = orders.iter().map(|order| order.uuid).collect();

        let items = self
            .items_repository
            .list_order_items(&mut tx, &uuids)
            .await?;

        tx.commit().await?;

        attach_items(&mut orders, items);

        Ok(orders)
    }

    async fn get_order(
        &self,
        user: UserUuid,
        order: OrderUuid,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let mut order = self
            .orders_repository
            .get_order(&mut tx, user, order)
            .await?;

        let items = self
            .items_repository
            .list_order_items(&mut tx, &[order.uuid])
            .await?;

        tx.commit().await?;

        order.items = items;

        Ok(order)
    }
}

fn attach_items(orders: &mut [OrderRecord], items: Vec<OrderItemRecord>) {
    let mut by_order: HashMap<OrderUuid, Vec<OrderItemRecord>> = HashMap::new();

    for item in items {
        by_order.entry(item.order_uuid).or_default().push(item);
    }

    for order in orders {
        order.items = by_order.remove(&order.uuid).unwrap_or_default();
    }
}

/// A user's placed orders.
#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Retrieves the user's orders, newest first, each with its items.
    async fn list_orders(&self, user: UserUuid) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// Retrieve a single order owned by the user.
    async fn get_order(
        &self,
        user: UserUuid,
        order: OrderUuid,
    ) -> Result<OrderRecord, OrdersServiceError>;
}
