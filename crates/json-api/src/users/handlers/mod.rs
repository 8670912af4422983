//! User Handlers

pub(crate) mod create;
pub(crate) mod index;
pub(crate) mod login;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shopcart_app::domain::users::records::UserRecord;

/// User Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserResponse {
    /// The unique identifier of the user
    pub uuid: Uuid,

    /// The user's login name
    pub username: String,

    /// The date and time the user registered
    pub created_at: String,
}

impl From<UserRecord> for UserResponse {
    fn from(user: UserRecord) -> Self {
        UserResponse {
            uuid: user.uuid.into(),
            username: user.username,
            created_at: user.created_at.to_string(),
        }
    }
}
