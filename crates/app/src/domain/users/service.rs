//! Users service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    auth::hash_password,
    database::Db,
    domain::{
        carts::{records::CartUuid, repositories::PgCartsRepository},
        users::{
            data::NewUser,
            errors::UsersServiceError,
            records::{UserRecord, UserUuid},
            repository::PgUsersRepository,
        },
    },
};

/// User accounts backed by `PostgreSQL`.
#[derive(Debug, Clone)]
pub struct PgUsersService {
    db: Db,
    repository: PgUsersRepository,
    carts_repository: PgCartsRepository,
}

impl PgUsersService {
    /// Build the service over a shared pool.
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgUsersRepository::new(),
            carts_repository: PgCartsRepository::new(),
        }
    }
}

#[async_trait]
impl UsersService for PgUsersService {
    #[tracing::instrument(
        name = "users.service.register_user",
        skip(self, user),
        fields(user_uuid = %user.uuid, username = %user.username),
        err
    )]
    async fn register_user(&self, user: NewUser) -> Result<UserRecord, UsersServiceError> {
        if user.username.trim().is_empty() || user.password.is_empty() {
            return Err(UsersServiceError::MissingRequiredData);
        }

        let password_hash = hash_password(&user.password)?;

        let mut tx = self.db.begin_transaction().await?;

        let created = self
            .repository
            .create_user(&mut tx, user.uuid, &user.username, &password_hash)
            .await?;

        self.carts_repository
            .create_cart(&mut tx, CartUuid::new(), created.uuid)
            .await?;

        tx.commit().await?;

        info!(user_uuid = %created.uuid, "registered user with empty cart");

        Ok(created)
    }

    async fn get_user(&self, user: UserUuid) -> Result<UserRecord, UsersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let user = self.repository.get_user(&mut tx, user).await?;

        tx.commit().await?;

        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>, UsersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let users = self.repository.list_users(&mut tx).await?;

        tx.commit().await?;

        Ok(users)
    }
}

/// User registration and lookup.
#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Registers a user together with their empty active cart.
    async fn register_user(&self, user: NewUser) -> Result<UserRecord, UsersServiceError>;

    /// Retrieve a single user.
    async fn get_user(&self, user: UserUuid) -> Result<UserRecord, UsersServiceError>;

    /// Retrieves all users in registration order.
    async fn list_users(&self) -> Result<Vec<UserRecord>, UsersServiceError>;
}
