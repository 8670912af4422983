//! User Errors

use salvo::http::StatusError;
use tracing::error;

use shopcart_app::{auth::AuthServiceError, domain::users::UsersServiceError};

pub(crate) fn into_status_error(error: UsersServiceError) -> StatusError {
    match error {
        UsersServiceError::AlreadyExists => {
            StatusError::bad_request().brief("Username is already taken")
        }
        UsersServiceError::InvalidReference
        | UsersServiceError::MissingRequiredData
        | UsersServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid user payload")
        }
        UsersServiceError::NotFound => StatusError::not_found(),
        UsersServiceError::PasswordHash(source) => {
            error!("failed to hash password: {source}");

            StatusError::internal_server_error()
        }
        UsersServiceError::Sql(source) => {
            error!("failed to store user: {source}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn login_into_status_error(error: AuthServiceError) -> StatusError {
    match error {
        AuthServiceError::InvalidCredentials | AuthServiceError::NotFound => {
            StatusError::unauthorized().brief("Invalid username or password")
        }
        AuthServiceError::Sql(source) => {
            error!("failed to issue session token: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::Token(source) => {
            error!("failed to process session token: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::Password(source) => {
            error!("failed to verify password: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::Expiry(source) => {
            error!("failed to compute session expiry: {source}");

            StatusError::internal_server_error()
        }
    }
}
