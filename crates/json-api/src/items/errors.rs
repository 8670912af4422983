//! Item Errors

use salvo::http::StatusError;
use tracing::error;

use shopcart_app::domain::items::ItemsServiceError;

pub(crate) fn into_status_error(error: ItemsServiceError) -> StatusError {
    match error {
        ItemsServiceError::AlreadyExists => StatusError::conflict().brief("Item already exists"),
        ItemsServiceError::InvalidReference
        | ItemsServiceError::MissingRequiredData
        | ItemsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid item payload")
        }
        ItemsServiceError::Sql(source) => {
            error!("failed to access items: {source}");

            StatusError::internal_server_error()
        }
        ItemsServiceError::NotFound => StatusError::not_found().brief("Item not found"),
    }
}
