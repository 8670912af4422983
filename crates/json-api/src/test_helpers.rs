//! Test helpers.

use std::sync::Arc;

use jiff::{SignedDuration, Timestamp};
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use shopcart_app::{
    auth::MockAuthService,
    context::AppContext,
    domain::{
        carts::MockCartsService,
        checkout::MockCheckoutService,
        items::{
            MockItemsService,
            records::{ItemRecord, ItemUuid},
        },
        orders::{
            MockOrdersService,
            records::{OrderItemRecord, OrderItemUuid, OrderRecord, OrderStatus, OrderUuid},
        },
        users::{MockUsersService, records::UserUuid},
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::nil());

pub(crate) const TEST_SESSION_TTL: SignedDuration = SignedDuration::from_hours(24);

#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_user_uuid(TEST_USER_UUID);
    ctrl.call_next(req, depot, res).await;
}

pub(crate) fn make_item(uuid: ItemUuid, name: &str, price: u64) -> ItemRecord {
    ItemRecord {
        uuid,
        name: name.to_string(),
        description: String::new(),
        price,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

/// An order with one line per `(item, quantity, price)`.
pub(crate) fn make_order(uuid: OrderUuid, lines: &[(ItemUuid, u32, u64)]) -> OrderRecord {
    let items: Vec<OrderItemRecord> = lines
        .iter()
        .map(|&(item_uuid, quantity, price)| OrderItemRecord {
            uuid: OrderItemUuid::new(),
            order_uuid: uuid,
            item_uuid,
            quantity,
            price,
        })
        .collect();

    OrderRecord {
        uuid,
        user_uuid: TEST_USER_UUID,
        status: OrderStatus::Completed,
        total_amount: items
            .iter()
            .map(|item| u64::from(item.quantity) * item.price)
            .sum(),
        items,
        created_at: Timestamp::UNIX_EPOCH,
    }
}

fn strict_users_mock() -> MockUsersService {
    let mut users = MockUsersService::new();

    users.expect_register_user().never();
    users.expect_get_user().never();
    users.expect_list_users().never();

    users
}

fn strict_items_mock() -> MockItemsService {
    let mut items = MockItemsService::new();

    items.expect_list_items().never();
    items.expect_get_item().never();
    items.expect_create_item().never();
    items.expect_update_item().never();

    items
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_get_cart().never();
    carts.expect_add_item().never();
    carts.expect_list_items().never();
    carts.expect_clear().never();

    carts
}

fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_list_orders().never();
    orders.expect_get_order().never();

    orders
}

fn strict_checkout_mock() -> MockCheckoutService {
    let mut checkout = MockCheckoutService::new();

    checkout.expect_checkout().never();

    checkout
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_login().never();
    auth.expect_authenticate_bearer().never();

    auth
}

pub(crate) fn strict_context() -> AppContext {
    AppContext {
        users: Arc::new(strict_users_mock()),
        items: Arc::new(strict_items_mock()),
        carts: Arc::new(strict_carts_mock()),
        orders: Arc::new(strict_orders_mock()),
        checkout: Arc::new(strict_checkout_mock()),
        auth: Arc::new(strict_auth_mock()),
    }
}

pub(crate) fn state_with(app: AppContext) -> Arc<State> {
    State::from_app_context(app, TEST_SESSION_TTL)
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    state_with(AppContext {
        auth: Arc::new(auth),
        ..strict_context()
    })
}

fn authenticated_service(state: Arc<State>, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state))
            .hoop(inject_user)
            .push(route),
    )
}

fn public_service(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}

pub(crate) fn state_with_users(users: MockUsersService) -> Arc<State> {
    state_with(AppContext {
        users: Arc::new(users),
        ..strict_context()
    })
}

pub(crate) fn users_service(users: MockUsersService, route: Router) -> Service {
    public_service(state_with_users(users), route)
}

pub(crate) fn auth_service(auth: MockAuthService, route: Router) -> Service {
    public_service(state_with_auth(auth), route)
}

pub(crate) fn items_service(items: MockItemsService, route: Router) -> Service {
    authenticated_service(
        state_with(AppContext {
            items: Arc::new(items),
            ..strict_context()
        }),
        route,
    )
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    authenticated_service(
        state_with(AppContext {
            carts: Arc::new(carts),
            ..strict_context()
        }),
        route,
    )
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    authenticated_service(
        state_with(AppContext {
            orders: Arc::new(orders),
            ..strict_context()
        }),
        route,
    )
}

pub(crate) fn checkout_service(checkout: MockCheckoutService, route: Router) -> Service {
    authenticated_service(
        state_with(AppContext {
            checkout: Arc::new(checkout),
            ..strict_context()
        }),
        route,
    )
}
