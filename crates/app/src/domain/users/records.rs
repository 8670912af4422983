//! User Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// User UUID
pub type UserUuid = TypedUuid<UserRecord>;

/// User Record
#[derive(Debug, Clone)]
pub struct UserRecord {
    /// Identifier.
    pub uuid: UserUuid,
    /// Unique login name.
    pub username: String,
    /// Registration time.
    pub created_at: Timestamp,
}
