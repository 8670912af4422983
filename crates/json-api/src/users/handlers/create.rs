//! Register User Handler

use std::{fmt, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use shopcart_app::domain::users::{data::NewUser, records::UserUuid};

use crate::{
    extensions::*,
    state::State,
    users::{errors::into_status_error, handlers::UserResponse},
};

/// Register User Request
#[derive(Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateUserRequest {
    /// Unique login name
    pub username: String,

    /// Plain-text password, hashed before storage
    pub password: String,
}

impl fmt::Debug for CreateUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateUserRequest")
            .field("username", &self.username)
            .field("password", &"**redacted**")
            .finish()
    }
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        NewUser {
            uuid: UserUuid::new(),
            username: request.username,
            password: request.password,
        }
    }
}

/// Register User Handler
///
/// Creates a user together with their empty cart.
#[endpoint(
    tags("users"),
    summary = "Register User",
    responses(
        (status_code = StatusCode::CREATED, description = "User registered"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "users.create",
    skip(json, depot, res),
    fields(user_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateUserRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user = state
        .app
        .users
        .register_user(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    tracing::Span::current().record("user_uuid", tracing::field::display(user.uuid));

    res.status_code(StatusCode::CREATED);

    tracing::info!(user_uuid = %user.uuid, "registered user");

    Ok(Json(user.into()))
}
