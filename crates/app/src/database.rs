//! Database connection management

use std::num::TryFromIntError;

use sqlx::{PgPool, Postgres, Row, Transaction, migrate::MigrateError, postgres::PgRow};

/// Shared `PostgreSQL` pool handle.
#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    /// Wrap an existing pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Begin a transaction.
    ///
    /// # Errors
    ///
    /// Returns an error when starting the transaction fails.
    pub async fn begin_transaction(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }

    /// The underlying pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPool::connect(database_url).await
}

/// Apply the bundled schema migrations.
///
/// # Errors
///
/// Returns an error if any migration fails to apply.
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}

/// Read a non-negative `BIGINT` money column as minor units.
pub(crate) fn try_get_amount(row: &PgRow, column: &str) -> Result<u64, sqlx::Error> {
    let amount: i64 = row.try_get(column)?;

    u64::try_from(amount).map_err(|e| decode_error(column, e))
}

/// Read a positive `INTEGER` quantity column.
pub(crate) fn try_get_quantity(row: &PgRow, column: &str) -> Result<u32, sqlx::Error> {
    let quantity: i32 = row.try_get(column)?;

    u32::try_from(quantity).map_err(|e| decode_error(column, e))
}

/// Convert an unsigned value into the signed integer type used for binding.
pub(crate) fn to_db_integer<T, U>(value: T, column: &str) -> Result<U, sqlx::Error>
where
    U: TryFrom<T, Error = TryFromIntError>,
{
    U::try_from(value).map_err(|e| decode_error(column, e))
}

fn decode_error(column: &str, error: TryFromIntError) -> sqlx::Error {
    sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(error),
    }
}
