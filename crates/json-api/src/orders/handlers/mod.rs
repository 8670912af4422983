//! Order Handlers

pub(crate) mod create;
pub(crate) mod get;
pub(crate) mod index;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shopcart_app::domain::orders::records::{OrderItemRecord, OrderRecord};

/// Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    /// The unique identifier of the order
    pub uuid: Uuid,

    /// The user who placed the order
    pub user_uuid: Uuid,

    /// Order status (`completed`)
    pub status: String,

    /// Sum of quantity × price over the items, in pence/cents
    pub total_amount: u64,

    /// The items, priced as they were at checkout
    pub items: Vec<OrderItemResponse>,

    /// The date and time the order was placed
    pub created_at: String,
}

impl From<OrderRecord> for OrderResponse {
    fn from(order: OrderRecord) -> Self {
        OrderResponse {
            uuid: order.uuid.into(),
            user_uuid: order.user_uuid.into(),
            status: order.status.to_string(),
            total_amount: order.total_amount,
            items: order.items.into_iter().map(Into::into).collect(),
            created_at: order.created_at.to_string(),
        }
    }
}

/// Order Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderItemResponse {
    pub uuid: Uuid,
    pub item_uuid: Uuid,
    pub quantity: u32,

    /// Unit price captured at checkout
    pub price: u64,
}

impl From<OrderItemRecord> for OrderItemResponse {
    fn from(item: OrderItemRecord) -> Self {
        Self {
            uuid: item.uuid.into(),
            item_uuid: item.item_uuid.into(),
            quantity: item.quantity,
            price: item.price,
        }
    }
}
