//! Users Data

use std::fmt;

use crate::domain::users::records::UserUuid;

/// New User Data
#[derive(Clone, PartialEq)]
pub struct NewUser {
    /// Identifier chosen by the caller.
    pub uuid: UserUuid,
    /// Login name, must be unique and not blank.
    pub username: String,
    /// Plain password, hashed before storage.
    pub password: String,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("uuid", &self.uuid)
            .field("username", &self.username)
            .field("password", &"**redacted**")
            .finish()
    }
}
