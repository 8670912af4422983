//! Cart Errors

use salvo::http::StatusError;
use tracing::error;

use shopcart_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::AlreadyExists => StatusError::conflict().brief("Cart already exists"),
        CartsServiceError::InvalidReference
        | CartsServiceError::MissingRequiredData
        | CartsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid cart payload")
        }
        CartsServiceError::Sql(source) => {
            error!("failed to access cart: {source}");

            StatusError::internal_server_error()
        }
        CartsServiceError::NotFound => {
            error!("authenticated user has no cart");

            StatusError::not_found().brief("Cart not found")
        }
        CartsServiceError::ItemNotFound => StatusError::not_found().brief("Item not found"),
        CartsServiceError::QuantityOutOfRange => {
            StatusError::conflict().brief("Cart line quantity limit reached")
        }
    }
}
