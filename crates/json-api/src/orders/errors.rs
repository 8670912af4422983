//! Order Errors

use salvo::http::StatusError;
use tracing::error;

use shopcart_app::domain::{checkout::CheckoutServiceError, orders::OrdersServiceError};

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::NotFound => StatusError::not_found().brief("Order not found"),
        OrdersServiceError::InvalidData => {
            error!("stored order failed to decode");

            StatusError::internal_server_error()
        }
        OrdersServiceError::Sql(source) => {
            error!("failed to fetch orders: {source}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn checkout_into_status_error(error: CheckoutServiceError) -> StatusError {
    match error {
        CheckoutServiceError::CartNotFound => StatusError::not_found().brief("Cart not found"),
        CheckoutServiceError::EmptyCart => StatusError::bad_request().brief("Cart is empty"),
        CheckoutServiceError::InvalidReference | CheckoutServiceError::InvalidData => {
            error!("checkout hit a constraint violation on stored rows: {error}");

            StatusError::internal_server_error()
        }
        CheckoutServiceError::TotalOutOfRange => {
            error!("order total exceeds the storable amount");

            StatusError::internal_server_error()
        }
        CheckoutServiceError::Sql(source) => {
            error!("failed to check out cart: {source}");

            StatusError::internal_server_error()
        }
    }
}
