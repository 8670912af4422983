//! Login Handler

use std::{fmt, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shopcart_app::auth::IssuedSessionToken;

use crate::{extensions::*, state::State, users::errors::login_into_status_error};

/// Login Request
#[derive(Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"**redacted**")
            .finish()
    }
}

/// Login Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginResponse {
    /// Bearer token for the `Authorization` header
    pub token: String,

    /// The authenticated user
    pub user_uuid: Uuid,

    /// The date and time the token stops being accepted
    pub expires_at: String,
}

impl From<IssuedSessionToken> for LoginResponse {
    fn from(issued: IssuedSessionToken) -> Self {
        LoginResponse {
            token: issued.token,
            user_uuid: issued.user_uuid.into(),
            expires_at: issued.expires_at.to_string(),
        }
    }
}

/// Login Handler
///
/// Exchanges a username and password for a session token.
#[endpoint(
    tags("users"),
    summary = "Login",
    responses(
        (status_code = StatusCode::OK, description = "Session issued"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Invalid username or password"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "users.login",
    skip(json, depot),
    fields(user_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<LoginRequest>,
    depot: &mut Depot,
) -> Result<Json<LoginResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let issued = state
        .app
        .auth
        .login(&request.username, &request.password, state.session_ttl)
        .await
        .map_err(login_into_status_error)?;

    tracing::Span::current().record("user_uuid", tracing::field::display(issued.user_uuid));

    Ok(Json(issued.into()))
}
