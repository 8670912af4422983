//! Item Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, items::get::ItemResponse, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ItemsResponse {
    /// The catalog, ordered by name
    pub items: Vec<ItemResponse>,
}

/// Item Index Handler
///
/// Returns the catalog.
#[endpoint(
    tags("items"),
    summary = "List Items",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ItemsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let items = state
        .app
        .items
        .list_items()
        .await
        .or_500("failed to fetch items")?;

    Ok(Json(ItemsResponse {
        items: items.into_iter().map(Into::into).collect(),
    }))
}
