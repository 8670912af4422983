//! Auth data models.

use jiff::Timestamp;
use uuid::Uuid;

use crate::{auth::SessionTokenVersion, domain::users::records::UserUuid};

/// Stored credential used to check a login attempt.
#[derive(Debug, Clone)]
pub(crate) struct UserCredentials {
    pub uuid: UserUuid,
    pub password_hash: String,
}

/// Session data used during bearer authentication.
#[derive(Debug, Clone)]
pub(crate) struct ActiveSessionToken {
    /// User that owns this session.
    pub user_uuid: UserUuid,

    /// Token format/digest version.
    pub version: SessionTokenVersion,

    /// SHA-256 digest of the token secret material.
    pub token_hash: String,
}

/// New session token persistence payload.
#[derive(Debug, Clone)]
pub(crate) struct NewSessionToken {
    pub uuid: Uuid,
    pub user_uuid: UserUuid,
    pub version: SessionTokenVersion,
    pub token_hash: String,
    pub expires_at: Timestamp,
}

/// Session issued on login, carrying the one-time raw token.
#[derive(Debug, Clone, PartialEq)]
pub struct IssuedSessionToken {
    /// Raw `sc_v1_...` bearer value, shown to the client once.
    pub token: String,

    /// The user now signed in.
    pub user_uuid: UserUuid,

    /// When the token stops authenticating.
    pub expires_at: Timestamp,
}
