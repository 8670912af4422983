//! Order Items Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::{
    database::{to_db_integer, try_get_amount, try_get_quantity},
    domain::{
        items::records::ItemUuid,
        orders::{
            data::NewOrderItem,
            records::{OrderItemRecord, OrderItemUuid, OrderUuid},
        },
    },
};

const CREATE_ORDER_ITEM_SQL: &str = include_str!("../sql/create_order_item.sql");
const LIST_ORDER_ITEMS_SQL: &str = include_str!("../sql/list_order_items.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrderItemsRepository;

impl PgOrderItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_order_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        position: usize,
        item: &NewOrderItem,
    ) -> Result<OrderItemRecord, sqlx::Error> {
        let position: i32 = to_db_integer(position, "position")?;
        let quantity: i32 = to_db_integer(item.quantity, "quantity")?;
        let price: i64 = to_db_integer(item.price, "price")?;

        query_as::<Postgres, OrderItemRecord>(CREATE_ORDER_ITEM_SQL)
            .bind(item.uuid.into_uuid())
            .bind(order.into_uuid())
            .bind(item.item_uuid.into_uuid())
            .bind(position)
            .bind(quantity)
            .bind(price)
            .fetch_one(&mut **tx)
            .await
    }

    /// Items for all of `orders`, grouped by order and kept in line order.
    pub(crate) async fn list_order_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        orders: &[OrderUuid],
    ) -> Result<Vec<OrderItemRecord>, sqlx::Error> {
        let orders: Vec<Uuid> = orders.iter().copied().map(OrderUuid::into_uuid).collect();

        query_as::<Postgres, OrderItemRecord>(LIST_ORDER_ITEMS_SQL)
            .bind(orders)
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for OrderItemRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: OrderItemUuid::from_uuid(row.try_get("uuid")?),
            order_uuid: OrderUuid::from_uuid(row.try_get("order_uuid")?),
            item_uuid: ItemUuid::from_uuid(row.try_get("item_uuid")?),
            quantity: try_get_quantity(row, "quantity")?,
            price: try_get_amount(row, "price")?,
        })
    }
}
