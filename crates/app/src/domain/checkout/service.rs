//! Checkout service.

use async_trait::async_trait;
use mockall::automock;
use tracing::{Span, info};

use crate::{
    database::Db,
    domain::{
        carts::{
            records::CartUuid,
            repositories::{PgCartItemsRepository, PgCartsRepository},
        },
        checkout::{errors::CheckoutServiceError, pricing::order_total},
        orders::{
            data::{NewOrder, NewOrderItem},
            records::{OrderItemUuid, OrderRecord, OrderStatus, OrderUuid},
            repositories::{PgOrderItemsRepository, PgOrdersRepository},
        },
        users::records::UserUuid,
    },
};

/// Checkout backed by `PostgreSQL`.
#[derive(Debug, Clone)]
pub struct PgCheckoutService {
    db: Db,
    carts_repository: PgCartsRepository,
    cart_items_repository: PgCartItemsRepository,
    orders_repository: PgOrdersRepository,
    order_items_repository: PgOrderItemsRepository,
}

impl PgCheckoutService {
    /// Build the service over a shared pool.
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            carts_repository: PgCartsRepository::new(),
            cart_items_repository: PgCartItemsRepository::new(),
            orders_repository: PgOrdersRepository::new(),
            order_items_repository: PgOrderItemsRepository::new(),
        }
    }
}

#[async_trait]
impl CheckoutService for PgCheckoutService {
    #[tracing::instrument(
        name = "checkout.service.checkout",
        skip(self, user, cart),
        fields(
            user_uuid = %user,
            cart_uuid = %cart,
            order_uuid = tracing::field::Empty,
            line_count = tracing::field::Empty,
            total_amount = tracing::field::Empty
        ),
        err
    )]
    async fn checkout(
        &self,
        user: UserUuid,
        cart: CartUuid,
    ) -> Result<OrderRecord, CheckoutServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let cart = self.carts_repository.lock_cart(&mut tx, cart, user).await?;

        let lines = self
            .cart_items_repository
            .list_lines(&mut tx, cart.uuid)
            .await?;

        if lines.is_empty() {
            return Err(CheckoutServiceError::EmptyCart);
        }

        let total_amount = order_total(&lines)?;

        let span = Span::current();

        span.record("line_count", lines.len());
        span.record("total_amount", total_amount);

        let mut order = self
            .orders_repository
            .create_order(
                &mut tx,
                &NewOrder {
                    uuid: OrderUuid::new(),
                    user_uuid: user,
                    status: OrderStatus::Completed,
                    total_amount,
                },
            )
            .await?;

        for (position, line) in lines.iter().enumerate() {
            let item = self
                .order_items_repository
                .create_order_item(
                    &mut tx,
                    order.uuid,
                    position,
                    &NewOrderItem {
                        uuid: OrderItemUuid::new(),
                        item_uuid: line.item_uuid,
                        quantity: line.quantity,
                        price: line.price,
                    },
                )
                .await?;

            order.items.push(item);
        }

        self.cart_items_repository.clear(&mut tx, cart.uuid).await?;

        tx.commit().await?;

        span.record("order_uuid", tracing::field::display(order.uuid));

        info!(order_uuid = %order.uuid, total_amount, "checked out cart");

        Ok(order)
    }
}

/// Turns a cart into an order.
#[automock]
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Convert the user's cart into a completed order and empty the cart.
    async fn checkout(
        &self,
        user: UserUuid,
        cart: CartUuid,
    ) -> Result<OrderRecord, CheckoutServiceError>;
}
