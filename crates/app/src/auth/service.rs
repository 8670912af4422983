//! Auth service.

use async_trait::async_trait;
use jiff::{SignedDuration, Timestamp};
use mockall::automock;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    auth::{
        AuthServiceError, IssuedSessionToken, SessionTokenSecret, SessionTokenVersion,
        format_session_token,
        models::NewSessionToken,
        parse_session_token,
        password::verify_password,
        repository::PgAuthRepository,
        session_token_digest,
    },
    domain::users::records::UserUuid,
};

/// Session auth backed by `PostgreSQL`.
#[derive(Debug, Clone)]
pub struct PgAuthService {
    repository: PgAuthRepository,
}

impl PgAuthService {
    /// Build the service over a pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgAuthRepository::new(pool),
        }
    }

    async fn issue_session_token(
        &self,
        user_uuid: UserUuid,
        ttl: SignedDuration,
    ) -> Result<IssuedSessionToken, AuthServiceError> {
        let token_uuid = Uuid::now_v7();
        let version = SessionTokenVersion::V1;
        let secret = SessionTokenSecret::generate();
        let token = format_session_token(token_uuid, version, &secret);

        let expires_at = Timestamp::now()
            .checked_add(ttl)
            .map_err(AuthServiceError::Expiry)?;

        self.repository
            .create_session_token(&NewSessionToken {
                uuid: token_uuid,
                user_uuid,
                version,
                token_hash: session_token_digest(&token_uuid, version, &user_uuid, &secret),
                expires_at,
            })
            .await?;

        Ok(IssuedSessionToken {
            token,
            user_uuid,
            expires_at,
        })
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn login(
        &self,
        username: &str,
        password: &str,
        ttl: SignedDuration,
    ) -> Result<IssuedSessionToken, AuthServiceError> {
        let credentials = self
            .repository
            .find_user_credentials(username)
            .await?
            .ok_or(AuthServiceError::InvalidCredentials)?;

        if !verify_password(password, &credentials.password_hash)? {
            return Err(AuthServiceError::InvalidCredentials);
        }

        self.issue_session_token(credentials.uuid, ttl).await
    }

    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserUuid, AuthServiceError> {
        let parsed_token = parse_session_token(bearer_token)
            .ok()
            .ok_or(AuthServiceError::NotFound)?;

        let token = self
            .repository
            .find_active_session_token(parsed_token.token_uuid, parsed_token.version)
            .await?
            .ok_or(AuthServiceError::NotFound)?;

        let digest = session_token_digest(
            &parsed_token.token_uuid,
            parsed_token.version,
            &token.user_uuid,
            &parsed_token.secret,
        );

        if token.version != parsed_token.version || digest != token.token_hash {
            return Err(AuthServiceError::NotFound);
        }

        // Best-effort metadata update; auth success does not depend on this write.
        if let Err(error) = self
            .repository
            .touch_session_token(parsed_token.token_uuid)
            .await
        {
            tracing::warn!(error = %error, "failed to record session token use");
        }

        Ok(token.user_uuid)
    }
}

/// Password login and bearer-token sessions.
#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Verify a username and password and issue a session token valid for `ttl`.
    async fn login(
        &self,
        username: &str,
        password: &str,
        ttl: SignedDuration,
    ) -> Result<IssuedSessionToken, AuthServiceError>;

    /// Resolve a bearer token to the user that owns it.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserUuid, AuthServiceError>;
}
