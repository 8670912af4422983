//! Add Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shopcart_app::domain::carts::records::CartItemRecord;

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Add Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddCartItemRequest {
    /// The catalog item to add one unit of
    pub item_uuid: Uuid,
}

/// Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemResponse {
    pub cart_uuid: Uuid,
    pub item_uuid: Uuid,

    /// Quantity after the add
    pub quantity: u32,
}

impl From<CartItemRecord> for CartItemResponse {
    fn from(cart_item: CartItemRecord) -> Self {
        Self {
            cart_uuid: cart_item.cart_uuid.into(),
            item_uuid: cart_item.item_uuid.into(),
            quantity: cart_item.quantity,
        }
    }
}

/// Add Cart Item Handler
///
/// Adds one unit of an item to the caller's cart.
#[endpoint(
    tags("carts"),
    summary = "Add Item To Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Item added"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart or item not found"),
        (status_code = StatusCode::CONFLICT, description = "Line quantity limit reached"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.add_item",
    skip(json, depot),
    fields(
        user_uuid = tracing::field::Empty,
        item_uuid = tracing::field::Empty,
        quantity = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<AddCartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<CartItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;
    let item = json.into_inner().item_uuid;

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(user));
    span.record("item_uuid", tracing::field::display(item));

    let cart_item = state
        .app
        .carts
        .add_item(user, item.into())
        .await
        .map_err(into_status_error)?;

    span.record("quantity", cart_item.quantity);

    Ok(Json(cart_item.into()))
}
