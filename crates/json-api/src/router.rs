//! App Router

use salvo::Router;

use crate::{auth, carts, items, orders, users};

/// Routes reachable without a session.
fn public_router() -> Router {
    Router::new()
        .push(
            Router::with_path("users")
                .get(users::index::handler)
                .post(users::create::handler)
                .push(Router::with_path("login").post(users::login::handler)),
        )
        .push(Router::with_path("items").post(items::create::handler))
}

/// Routes that require `Authorization: Bearer <token>`.
fn authenticated_router() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .push(
            Router::with_path("items")
                .get(items::index::handler)
                .push(
                    Router::with_path("{item}")
                        .get(items::get::handler)
                        .put(items::update::handler),
                ),
        )
        .push(
            Router::with_path("carts")
                .get(carts::get::handler)
                .post(carts::add::handler)
                .delete(carts::clear::handler),
        )
        .push(
            Router::with_path("orders")
                .get(orders::index::handler)
                .post(orders::create::handler)
                .push(Router::with_path("{order}").get(orders::get::handler)),
        )
}

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(public_router())
        .push(authenticated_router())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use jiff::Timestamp;
    use salvo::{
        Service,
        affix_state::inject,
        http::StatusCode,
        test::{ResponseExt, TestClient},
        trailing_slash::remove_slash,
    };
    use serde_json::json;
    use testresult::TestResult;

    use shopcart_app::{
        auth::{AuthServiceError, MockAuthService},
        context::AppContext,
        domain::{
            carts::{
                MockCartsService,
                records::{CartItemRecord, CartItemUuid, CartUuid},
            },
            items::{MockItemsService, records::ItemUuid},
            users::{MockUsersService, records::UserRecord},
        },
    };

    use crate::{
        carts::add::CartItemResponse,
        items::{get::ItemResponse, index::ItemsResponse},
        state::State,
        test_helpers::{
            TEST_USER_UUID, make_item, state_with, state_with_auth, state_with_users,
            strict_context,
        },
        users::index::UsersResponse,
    };

    const VALID_TOKEN: &str = "Bearer sc_v1_valid";

    use super::*;

    fn make_service(state: Arc<State>) -> Service {
        Service::new(
            Router::new()
                .hoop(remove_slash())
                .hoop(inject(state))
                .push(app_router()),
        )
    }

    fn rejecting_auth() -> MockAuthService {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer().never();
        auth.expect_login().never();

        auth
    }

    fn accepting_auth(times: usize) -> MockAuthService {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer()
            .times(times)
            .withf(|token| token == "sc_v1_valid")
            .returning(|_| Ok(TEST_USER_UUID));
        auth.expect_login().never();

        auth
    }

    #[tokio::test]
    async fn test_protected_routes_require_bearer_token() -> TestResult {
        let service = make_service(state_with_auth(rejecting_auth()));

        let requests = [
            TestClient::get("http://example.com/items"),
            TestClient::get(format!("http://example.com/items/{TEST_USER_UUID}")),
            TestClient::put(format!("http://example.com/items/{TEST_USER_UUID}")),
            TestClient::get("http://example.com/carts"),
            TestClient::post("http://example.com/carts"),
            TestClient::delete("http://example.com/carts"),
            TestClient::get("http://example.com/orders"),
            TestClient::post("http://example.com/orders"),
            TestClient::get(format!("http://example.com/orders/{TEST_USER_UUID}")),
        ];

        for request in requests {
            let res = request.send(&service).await;

            assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_user_listing_is_public() -> TestResult {
        let mut users = MockUsersService::new();

        users.expect_list_users().once().return_once(|| {
            Ok(vec![UserRecord {
                uuid: TEST_USER_UUID,
                username: "alice".to_string(),
                created_at: Timestamp::UNIX_EPOCH,
            }])
        });

        users.expect_register_user().never();
        users.expect_get_user().never();

        let mut res = TestClient::get("http://example.com/users")
            .send(&make_service(state_with_users(users)))
            .await;

        let body: UsersResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.users.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_login_is_public() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer().never();
        auth.expect_login()
            .once()
            .return_once(|_, _, _| Err(AuthServiceError::InvalidCredentials));

        let res = TestClient::post("http://example.com/users/login")
            .json(&json!({ "username": "alice", "password": "nope" }))
            .send(&make_service(state_with_auth(auth)))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_valid_bearer_reaches_catalog() -> TestResult {
        let item = ItemUuid::new();

        let mut items = MockItemsService::new();

        items
            .expect_list_items()
            .once()
            .return_once(move || Ok(vec![make_item(item, "Widget", 999)]));

        items.expect_get_item().never();
        items.expect_create_item().never();
        items.expect_update_item().never();

        let state = state_with(AppContext {
            auth: Arc::new(accepting_auth(1)),
            items: Arc::new(items),
            ..strict_context()
        });

        let mut res = TestClient::get("http://example.com/items")
            .add_header("authorization", VALID_TOKEN, true)
            .send(&make_service(state))
            .await;

        let body: ItemsResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.items.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_item_creation_is_public() -> TestResult {
        let mut items = MockItemsService::new();

        items
            .expect_create_item()
            .once()
            .withf(|new| new.name == "Widget" && new.price == 999)
            .return_once(|new| Ok(make_item(new.uuid, "Widget", 999)));

        items.expect_list_items().never();
        items.expect_get_item().never();
        items.expect_update_item().never();

        let state = state_with(AppContext {
            auth: Arc::new(rejecting_auth()),
            items: Arc::new(items),
            ..strict_context()
        });

        let mut res = TestClient::post("http://example.com/items")
            .json(&json!({ "name": "Widget", "price": 999 }))
            .send(&make_service(state))
            .await;

        let body: ItemResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.name, "Widget");

        Ok(())
    }

    #[tokio::test]
    async fn test_trailing_slash_cart_add_is_routed() -> TestResult {
        let cart = CartUuid::new();
        let item = ItemUuid::new();

        let mut carts = MockCartsService::new();

        carts
            .expect_add_item()
            .once()
            .withf(move |user, i| *user == TEST_USER_UUID && *i == item)
            .return_once(move |_, _| {
                Ok(CartItemRecord {
                    uuid: CartItemUuid::new(),
                    cart_uuid: cart,
                    item_uuid: item,
                    quantity: 1,
                    created_at: Timestamp::UNIX_EPOCH,
                    updated_at: Timestamp::UNIX_EPOCH,
                })
            });

        carts.expect_get_cart().never();
        carts.expect_list_items().never();
        carts.expect_clear().never();

        let state = state_with(AppContext {
            auth: Arc::new(accepting_auth(1)),
            carts: Arc::new(carts),
            ..strict_context()
        });

        let mut res = TestClient::post("http://example.com/carts/")
            .add_header("authorization", VALID_TOKEN, true)
            .json(&json!({ "item_uuid": item.into_uuid() }))
            .send(&make_service(state))
            .await;

        let body: CartItemResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.cart_uuid, cart.into_uuid());
        assert_eq!(body.quantity, 1);

        Ok(())
    }
}
