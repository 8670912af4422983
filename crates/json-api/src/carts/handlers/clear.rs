//! Clear Cart Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Cart Cleared Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartClearedResponse {
    /// Number of cart lines removed
    pub removed: u64,
}

/// Clear Cart Handler
///
/// Removes every line from the caller's cart.
#[endpoint(
    tags("carts"),
    summary = "Clear Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart cleared"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.clear",
    skip(depot),
    fields(user_uuid = tracing::field::Empty, removed = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartClearedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(user));

    let removed = state
        .app
        .carts
        .clear(user)
        .await
        .map_err(into_status_error)?;

    span.record("removed", removed);

    Ok(Json(CartClearedResponse { removed }))
}
