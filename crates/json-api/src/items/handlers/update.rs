//! Update Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shopcart_app::domain::items::data::ItemUpdate;

use crate::{
    extensions::*,
    items::{errors::into_status_error, get::ItemResponse},
    state::State,
};

/// Update Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateItemRequest {
    /// New price in pence/cents
    pub price: u64,
}

impl From<UpdateItemRequest> for ItemUpdate {
    fn from(request: UpdateItemRequest) -> Self {
        ItemUpdate {
            price: request.price,
        }
    }
}

/// Item Update Handler
///
/// Changes the catalog price. Orders already placed keep their snapshotted prices.
#[endpoint(
    tags("items"),
    summary = "Update Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Item updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Item not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "items.update",
    skip(item, json, depot),
    fields(
        user_uuid = tracing::field::Empty,
        item_uuid = tracing::field::Empty,
        price = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    item: PathParam<Uuid>,
    json: JsonBody<UpdateItemRequest>,
    depot: &mut Depot,
) -> Result<Json<ItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;
    let request = json.into_inner();
    let item = item.into_inner();

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(user));
    span.record("item_uuid", tracing::field::display(item));
    span.record("price", request.price);

    let updated = state
        .app
        .items
        .update_item(item.into(), request.into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(item_uuid = %item, price = updated.price, "updated item price");

    Ok(Json(updated.into()))
}
