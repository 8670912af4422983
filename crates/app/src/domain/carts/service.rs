//! Carts service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        carts::{
            errors::CartsServiceError,
            records::{CartItemRecord, CartLineRecord, CartRecord},
            repositories::{PgCartItemsRepository, PgCartsRepository},
        },
        items::records::ItemUuid,
        users::records::UserUuid,
    },
};

/// Carts backed by `PostgreSQL`.
#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    carts_repository: PgCartsRepository,
    items_repository: PgCartItemsRepository,
}

impl PgCartsService {
    /// Build the service over a shared pool.
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            carts_repository: PgCartsRepository::new(),
            items_repository: PgCartItemsRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn get_cart(&self, user: UserUuid) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let cart = self.carts_repository.get_user_cart(&mut tx, user).await?;

        tx.commit().await?;

        Ok(cart)
    }

    #[tracing::instrument(
        name = "carts.service.add_item",
        skip(self, user, item),
        fields(user_uuid = %user, item_uuid = %item),
        err
    )]
    async fn add_item(
        &self,
        user: UserUuid,
        item: ItemUuid,
    ) -> Result<CartItemRecord, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let cart = self.carts_repository.lock_user_cart(&mut tx, user).await?;

        let cart_item = self
            .items_repository
            .add_item(&mut tx, cart.uuid, item)
            .await
            .map_err(|error| match error {
                sqlx::Error::RowNotFound => CartsServiceError::ItemNotFound,
                error => error.into(),
            })?;

        tx.commit().await?;

        Ok(cart_item)
    }

    async fn list_items(&self, user: UserUuid) -> Result<Vec<CartLineRecord>, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let cart = self.carts_repository.get_user_cart(&mut tx, user).await?;

        let lines = self.items_repository.list_lines(&mut tx, cart.uuid).await?;

        tx.commit().await?;

        Ok(lines)
    }

    #[tracing::instrument(
        name = "carts.service.clear",
        skip(self, user),
        fields(user_uuid = %user),
        err
    )]
    async fn clear(&self, user: UserUuid) -> Result<u64, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let cart = self.carts_repository.lock_user_cart(&mut tx, user).await?;

        let removed = self.items_repository.clear(&mut tx, cart.uuid).await?;

        tx.commit().await?;

        Ok(removed)
    }
}

/// The signed-in user's cart.
#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieve the user's active cart.
    async fn get_cart(&self, user: UserUuid) -> Result<CartRecord, CartsServiceError>;

    /// Add one unit of `item` to the user's cart.
    async fn add_item(
        &self,
        user: UserUuid,
        item: ItemUuid,
    ) -> Result<CartItemRecord, CartsServiceError>;

    /// List the user's cart lines with current item names and prices.
    async fn list_items(&self, user: UserUuid) -> Result<Vec<CartLineRecord>, CartsServiceError>;

    /// Remove every line from the user's cart, returning how many were removed.
    async fn clear(&self, user: UserUuid) -> Result<u64, CartsServiceError>;
}
