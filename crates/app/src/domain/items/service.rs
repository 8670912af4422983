//! Items service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        checkout::pricing::MAX_AMOUNT,
        items::{
            data::{ItemUpdate, NewItem},
            errors::ItemsServiceError,
            records::{ItemRecord, ItemUuid},
            repository::PgItemsRepository,
        },
    },
};

/// Catalog backed by `PostgreSQL`.
#[derive(Debug, Clone)]
pub struct PgItemsService {
    db: Db,
    repository: PgItemsRepository,
}

impl PgItemsService {
    /// Build the service over a shared pool.
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgItemsRepository::new(),
        }
    }
}

#[async_trait]
impl ItemsService for PgItemsService {
    async fn list_items(&self) -> Result<Vec<ItemRecord>, ItemsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let items = self.repository.list_items(&mut tx).await?;

        tx.commit().await?;

        Ok(items)
    }

    async fn get_item(&self, item: ItemUuid) -> Result<ItemRecord, ItemsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let item = self.repository.get_item(&mut tx, item).await?;

        tx.commit().await?;

        Ok(item)
    }

    async fn create_item(&self, item: NewItem) -> Result<ItemRecord, ItemsServiceError> {
        if item.name.trim().is_empty() {
            return Err(ItemsServiceError::MissingRequiredData);
        }

        check_price(item.price)?;

        let mut tx = self.db.begin_transaction().await?;

        let created = self.repository.create_item(&mut tx, item).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_item(
        &self,
        item: ItemUuid,
        update: ItemUpdate,
    ) -> Result<ItemRecord, ItemsServiceError> {
        check_price(update.price)?;

        let mut tx = self.db.begin_transaction().await?;

        let updated = self
            .repository
            .update_price(&mut tx, item, update.price)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }
}

/// Prices must fit the signed `BIGINT` column.
fn check_price(price: u64) -> Result<(), ItemsServiceError> {
    if price > MAX_AMOUNT {
        return Err(ItemsServiceError::InvalidData);
    }

    Ok(())
}

/// Catalog reads and writes.
#[automock]
#[async_trait]
pub trait ItemsService: Send + Sync {
    /// Retrieves all catalog items ordered by name.
    async fn list_items(&self) -> Result<Vec<ItemRecord>, ItemsServiceError>;

    /// Retrieve a single item.
    async fn get_item(&self, item: ItemUuid) -> Result<ItemRecord, ItemsServiceError>;

    /// Adds a new item to the catalog.
    async fn create_item(&self, item: NewItem) -> Result<ItemRecord, ItemsServiceError>;

    /// Replaces the price of an existing item.
    async fn update_item(
        &self,
        item: ItemUuid,
        update: ItemUpdate,
    ) -> Result<ItemRecord, ItemsServiceError>;
}
