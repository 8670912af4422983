//! Get Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shopcart_app::domain::items::records::ItemRecord;

use crate::{extensions::*, items::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ItemResponse {
    /// The unique identifier of the item
    pub uuid: Uuid,

    /// Display name
    pub name: String,

    /// Free-form description, empty when not provided
    pub description: String,

    /// The price of the item in pence/cents
    pub price: u64,

    /// The date and time the item was created
    pub created_at: String,

    /// The date and time the item was last updated
    pub updated_at: String,
}

impl From<ItemRecord> for ItemResponse {
    fn from(item: ItemRecord) -> Self {
        ItemResponse {
            uuid: item.uuid.into(),
            name: item.name,
            description: item.description,
            price: item.price,
            created_at: item.created_at.to_string(),
            updated_at: item.updated_at.to_string(),
        }
    }
}

/// Get Item Handler
///
/// Returns an item.
#[endpoint(
    tags("items"),
    summary = "Get Item",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    item: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let item = state
        .app
        .items
        .get_item(item.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(item.into()))
}
