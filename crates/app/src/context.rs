//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;

use crate::{
    auth::{AuthService, PgAuthService},
    database::{self, Db},
    domain::{
        carts::{CartsService, PgCartsService},
        checkout::{CheckoutService, PgCheckoutService},
        items::{ItemsService, PgItemsService},
        orders::{OrdersService, PgOrdersService},
        users::{PgUsersService, UsersService},
    },
};

/// Failures while building an [`AppContext`].
#[derive(Debug, Error)]
pub enum AppInitError {
    /// The database could not be reached.
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    /// A bundled migration failed to apply.
    #[error("failed to apply database migrations")]
    Migration(#[source] MigrateError),
}

/// Service handles shared by every request.
#[derive(Clone)]
pub struct AppContext {
    /// User accounts.
    pub users: Arc<dyn UsersService>,
    /// Catalog items.
    pub items: Arc<dyn ItemsService>,
    /// Per-user carts.
    pub carts: Arc<dyn CartsService>,
    /// Placed orders.
    pub orders: Arc<dyn OrdersService>,
    /// Cart to order conversion.
    pub checkout: Arc<dyn CheckoutService>,
    /// Login and bearer-token sessions.
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// When `migrate` is set the bundled migrations are applied first.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or migrating fails.
    pub async fn from_database_url(url: &str, migrate: bool) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        if migrate {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migration)?;
        }

        let db = Db::new(pool.clone());

        Ok(Self {
            users: Arc::new(PgUsersService::new(db.clone())),
            items: Arc::new(PgItemsService::new(db.clone())),
            carts: Arc::new(PgCartsService::new(db.clone())),
            orders: Arc::new(PgOrdersService::new(db.clone())),
            checkout: Arc::new(PgCheckoutService::new(db)),
            auth: Arc::new(PgAuthService::new(pool)),
        })
    }
}
