//! Checkout Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shopcart_app::domain::checkout::CheckoutServiceError;

use crate::{
    extensions::*,
    observability::{CheckoutOutcome, record_checkout},
    orders::{errors::checkout_into_status_error, handlers::OrderResponse},
    state::State,
};

/// Checkout Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutRequest {
    /// The caller's cart to convert into an order
    pub cart_uuid: Uuid,
}

/// Checkout Handler
///
/// Turns the cart into an order at current prices and empties the cart.
#[endpoint(
    tags("orders"),
    summary = "Checkout",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Order placed"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Cart is empty or payload invalid"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "orders.create",
    skip(json, depot, res),
    fields(
        user_uuid = tracing::field::Empty,
        cart_uuid = tracing::field::Empty,
        order_uuid = tracing::field::Empty,
        total_amount = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CheckoutRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;
    let cart = json.into_inner().cart_uuid;

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(user));
    span.record("cart_uuid", tracing::field::display(cart));

    let order = match state.app.checkout.checkout(user, cart.into()).await {
        Ok(order) => order,
        Err(error) => {
            record_checkout(match error {
                CheckoutServiceError::CartNotFound | CheckoutServiceError::EmptyCart => {
                    CheckoutOutcome::Rejected
                }
                CheckoutServiceError::InvalidReference
                | CheckoutServiceError::InvalidData
                | CheckoutServiceError::TotalOutOfRange
                | CheckoutServiceError::Sql(_) => CheckoutOutcome::Failed,
            });

            return Err(checkout_into_status_error(error));
        }
    };

    record_checkout(CheckoutOutcome::Completed);

    span.record("order_uuid", tracing::field::display(order.uuid));
    span.record("total_amount", order.total_amount);

    res.add_header(LOCATION, format!("/orders/{}", order.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(
        order_uuid = %order.uuid,
        total_amount = order.total_amount,
        items = order.items.len(),
        "checked out cart"
    );

    Ok(Json(order.into()))
}
