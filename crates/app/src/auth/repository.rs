//! Auth repository.

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::{
    auth::{
        SessionTokenVersion,
        models::{ActiveSessionToken, NewSessionToken, UserCredentials},
    },
    domain::users::records::UserUuid,
};

const FIND_USER_CREDENTIALS_SQL: &str = include_str!("sql/find_user_credentials.sql");
const CREATE_SESSION_TOKEN_SQL: &str = include_str!("sql/create_session_token.sql");
const FIND_ACTIVE_SESSION_TOKEN_SQL: &str = include_str!("sql/find_active_session_token.sql");
const TOUCH_SESSION_TOKEN_SQL: &str = include_str!("sql/touch_session_token.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn find_user_credentials(
        &self,
        username: &str,
    ) -> Result<Option<UserCredentials>, sqlx::Error> {
        query_as::<Postgres, UserCredentials>(FIND_USER_CREDENTIALS_SQL)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
    }

    pub(crate) async fn create_session_token(
        &self,
        token: &NewSessionToken,
    ) -> Result<(), sqlx::Error> {
        query(CREATE_SESSION_TOKEN_SQL)
            .bind(token.uuid)
            .bind(token.user_uuid.into_uuid())
            .bind(token.version.as_i16())
            .bind(&token.token_hash)
            .bind(SqlxTimestamp::from(token.expires_at))
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub(crate) async fn find_active_session_token(
        &self,
        token_uuid: Uuid,
        version: SessionTokenVersion,
    ) -> Result<Option<ActiveSessionToken>, sqlx::Error> {
        query_as::<Postgres, ActiveSessionToken>(FIND_ACTIVE_SESSION_TOKEN_SQL)
            .bind(token_uuid)
            .bind(version.as_i16())
            .fetch_optional(&self.pool)
            .await
    }

    pub(crate) async fn touch_session_token(&self, token_uuid: Uuid) -> Result<u64, sqlx::Error> {
        let rows_affected = query(TOUCH_SESSION_TOKEN_SQL)
            .bind(token_uuid)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for UserCredentials {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: UserUuid::from_uuid(row.try_get("uuid")?),
            password_hash: row.try_get("password_hash")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for ActiveSessionToken {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let version: i16 = row.try_get("version")?;

        let version =
            SessionTokenVersion::try_from(version).map_err(|e| sqlx::Error::ColumnDecode {
                index: "version".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            version,
            token_hash: row.try_get("token_hash")?,
        })
    }
}
