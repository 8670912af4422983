//! Items Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::{
    database::{to_db_integer, try_get_amount},
    domain::items::{
        data::NewItem,
        records::{ItemRecord, ItemUuid},
    },
};

const LIST_ITEMS_SQL: &str = include_str!("sql/list_items.sql");
const GET_ITEM_SQL: &str = include_str!("sql/get_item.sql");
const CREATE_ITEM_SQL: &str = include_str!("sql/create_item.sql");
const UPDATE_ITEM_SQL: &str = include_str!("sql/update_item.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgItemsRepository;

impl PgItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<ItemRecord>, sqlx::Error> {
        query_as::<Postgres, ItemRecord>(LIST_ITEMS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: ItemUuid,
    ) -> Result<ItemRecord, sqlx::Error> {
        query_as::<Postgres, ItemRecord>(GET_ITEM_SQL)
            .bind(item.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: NewItem,
    ) -> Result<ItemRecord, sqlx::Error> {
        let price: i64 = to_db_integer(item.price, "price")?;

        query_as::<Postgres, ItemRecord>(CREATE_ITEM_SQL)
            .bind(item.uuid.into_uuid())
            .bind(item.name)
            .bind(item.description)
            .bind(price)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_price(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: ItemUuid,
        price: u64,
    ) -> Result<ItemRecord, sqlx::Error> {
        let price: i64 = to_db_integer(price, "price")?;

        query_as::<Postgres, ItemRecord>(UPDATE_ITEM_SQL)
            .bind(item.into_uuid())
            .bind(price)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ItemRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ItemUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: try_get_amount(row, "price")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
