//! Get Cart Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shopcart_app::domain::carts::records::CartLineRecord;

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The unique identifier of the cart
    pub cart_uuid: Uuid,

    /// The lines in the cart, priced at the items' current prices
    pub items: Vec<CartLineResponse>,
}

/// Cart Line Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartLineResponse {
    /// The unique identifier of the cart line
    pub uuid: Uuid,

    pub item_uuid: Uuid,

    /// The item's current name
    pub name: String,

    /// The item's current price in pence/cents
    pub price: u64,

    pub quantity: u32,
}

impl From<CartLineRecord> for CartLineResponse {
    fn from(line: CartLineRecord) -> Self {
        Self {
            uuid: line.uuid.into(),
            item_uuid: line.item_uuid.into(),
            name: line.name,
            price: line.price,
            quantity: line.quantity,
        }
    }
}

/// Get Cart Handler
///
/// Returns the caller's cart.
#[endpoint(
    tags("carts"),
    summary = "Get Cart",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let cart = state
        .app
        .carts
        .get_cart(user)
        .await
        .map_err(into_status_error)?;

    let lines = state
        .app
        .carts
        .list_items(user)
        .await
        .map_err(into_status_error)?;

    Ok(Json(CartResponse {
        cart_uuid: cart.uuid.into(),
        items: lines.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use shopcart_app::domain::{
        carts::{
            CartsServiceError, MockCartsService,
            records::{CartItemUuid, CartUuid},
        },
        items::records::ItemUuid,
    };

    use crate::{
        carts::handlers::tests::make_cart,
        test_helpers::{TEST_USER_UUID, carts_service},
    };

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("carts").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_lines() -> TestResult {
        let cart = CartUuid::new();
        let item = ItemUuid::new();

        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .withf(|user| *user == TEST_USER_UUID)
            .return_once(move |_| Ok(make_cart(cart)));

        carts
            .expect_list_items()
            .once()
            .withf(|user| *user == TEST_USER_UUID)
            .return_once(move |_| {
                Ok(vec![CartLineRecord {
                    uuid: CartItemUuid::new(),
                    item_uuid: item,
                    name: "Widget".to_string(),
                    price: 10,
                    quantity: 2,
                }])
            });

        carts.expect_add_item().never();
        carts.expect_clear().never();

        let mut res = TestClient::get("http://example.com/carts")
            .send(&make_service(carts))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.cart_uuid, cart.into_uuid());
        assert_eq!(body.items.len(), 1);
        assert_eq!(
            body.items.first().map(|line| (line.item_uuid, line.quantity)),
            Some((item.into_uuid(), 2))
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_get_empty_cart_returns_no_lines() -> TestResult {
        let cart = CartUuid::new();

        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .return_once(move |_| Ok(make_cart(cart)));

        carts
            .expect_list_items()
            .once()
            .return_once(|_| Ok(Vec::new()));

        carts.expect_add_item().never();
        carts.expect_clear().never();

        let mut res = TestClient::get("http://example.com/carts")
            .send(&make_service(carts))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.items.is_empty(), "expected no lines");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_cart_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .return_once(|_| Err(CartsServiceError::NotFound));

        carts.expect_list_items().never();
        carts.expect_add_item().never();
        carts.expect_clear().never();

        let res = TestClient::get("http://example.com/carts")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
