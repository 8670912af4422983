//! Create Item Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shopcart_app::domain::items::{data::NewItem, records::ItemUuid};

use crate::{
    extensions::*,
    items::{errors::into_status_error, get::ItemResponse},
    state::State,
};

/// Create Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateItemRequest {
    /// Optional client-chosen identifier; generated when omitted
    #[serde(default)]
    pub uuid: Option<Uuid>,

    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Price in pence/cents
    pub price: u64,
}

impl From<CreateItemRequest> for NewItem {
    fn from(request: CreateItemRequest) -> Self {
        NewItem {
            uuid: request.uuid.map_or_else(ItemUuid::new, ItemUuid::from_uuid),
            name: request.name,
            description: request.description,
            price: request.price,
        }
    }
}

/// Create Item Handler
#[endpoint(
    tags("items"),
    summary = "Create Item",
    responses(
        (status_code = StatusCode::CREATED, description = "Item created"),
        (status_code = StatusCode::CONFLICT, description = "Item already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "items.create",
    skip(json, depot, res),
    fields(item_uuid = tracing::field::Empty, price = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let new_item: NewItem = json.into_inner().into();

    let span = tracing::Span::current();

    span.record("item_uuid", tracing::field::display(new_item.uuid));
    span.record("price", new_item.price);

    let item = state
        .app
        .items
        .create_item(new_item)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/items/{}", item.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(item_uuid = %item.uuid, price = item.price, "created item");

    Ok(Json(item.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use shopcart_app::domain::items::{ItemsServiceError, MockItemsService};

    use crate::test_helpers::{items_service, make_item};

    use super::*;

    fn make_service(items: MockItemsService) -> Service {
        items_service(items, Router::with_path("items").post(handler))
    }

    #[tokio::test]
    async fn test_create_item_success() -> TestResult {
        let uuid = ItemUuid::new();

        let mut items = MockItemsService::new();

        items
            .expect_create_item()
            .once()
            .withf(move |new| {
                *new == NewItem {
                    uuid,
                    name: "Widget".to_string(),
                    description: String::new(),
                    price: 999,
                }
            })
            .return_once(move |_| Ok(make_item(uuid, "Widget", 999)));

        items.expect_list_items().never();
        items.expect_get_item().never();
        items.expect_update_item().never();

        let mut res = TestClient::post("http://example.com/items")
            .json(&json!({ "uuid": uuid.into_uuid(), "name": "Widget", "price": 999 }))
            .send(&make_service(items))
            .await;

        let body: ItemResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/items/{uuid}").as_str()));
        assert_eq!(body.uuid, uuid.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_create_item_conflict_returns_409() -> TestResult {
        let uuid = ItemUuid::new();

        let mut items = MockItemsService::new();

        items
            .expect_create_item()
            .once()
            .withf(move |new| new.uuid == uuid)
            .return_once(|_| Err(ItemsServiceError::AlreadyExists));

        items.expect_list_items().never();
        items.expect_get_item().never();
        items.expect_update_item().never();

        let res = TestClient::post("http://example.com/items")
            .json(&json!({ "uuid": uuid.into_uuid(), "name": "Widget", "price": 999 }))
            .send(&make_service(items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_item_blank_name_returns_400() -> TestResult {
        let mut items = MockItemsService::new();

        items
            .expect_create_item()
            .once()
            .withf(|new| new.name.is_empty())
            .return_once(|_| Err(ItemsServiceError::MissingRequiredData));

        items.expect_list_items().never();
        items.expect_get_item().never();
        items.expect_update_item().never();

        let res = TestClient::post("http://example.com/items")
            .json(&json!({ "name": "", "price": 999 }))
            .send(&make_service(items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_item_price_beyond_storage_range_returns_400() -> TestResult {
        let mut items = MockItemsService::new();

        items
            .expect_create_item()
            .once()
            .withf(|new| new.price == 9_223_372_036_854_775_808)
            .return_once(|_| Err(ItemsServiceError::InvalidData));

        items.expect_list_items().never();
        items.expect_get_item().never();
        items.expect_update_item().never();

        let res = TestClient::post("http://example.com/items")
            .json(&json!({ "name": "Yacht", "price": 9_223_372_036_854_775_808_u64 }))
            .send(&make_service(items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_item_negative_price_returns_400() -> TestResult {
        let mut items = MockItemsService::new();

        items.expect_create_item().never();
        items.expect_list_items().never();
        items.expect_get_item().never();
        items.expect_update_item().never();

        let res = TestClient::post("http://example.com/items")
            .json(&json!({ "name": "Widget", "price": -1 }))
            .send(&make_service(items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
