//! Order Records

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use serde::Serialize;
use thiserror::Error;

use crate::{
    domain::{items::records::ItemUuid, users::records::UserUuid},
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Placed and paid for at checkout.
    Completed,
}

impl OrderStatus {
    /// Database representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An `orders.status` value this build does not know.
#[derive(Debug, Error)]
#[error("unknown order status: {0}")]
pub struct UnknownOrderStatus(String);

impl FromStr for OrderStatus {
    type Err = UnknownOrderStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "completed" => Ok(Self::Completed),
            other => Err(UnknownOrderStatus(other.to_string())),
        }
    }
}

/// Order Record
#[derive(Debug, Clone)]
pub struct OrderRecord {
    /// Identifier.
    pub uuid: OrderUuid,
    /// Customer who checked out.
    pub user_uuid: UserUuid,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// Sum of quantity times price over `items`.
    pub total_amount: u64,
    /// Lines in insertion order.
    pub items: Vec<OrderItemRecord>,
    /// Checkout time.
    pub created_at: Timestamp,
}

/// Order Item UUID
pub type OrderItemUuid = TypedUuid<OrderItemRecord>;

/// Order Item Record
///
/// `price` is the unit price captured at checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItemRecord {
    /// Identifier.
    pub uuid: OrderItemUuid,
    /// Owning order.
    pub order_uuid: OrderUuid,
    /// Catalog item.
    pub item_uuid: ItemUuid,
    /// Units ordered.
    pub quantity: u32,
    /// Unit price at checkout.
    pub price: u64,
}
