//! Orders Data

use crate::domain::{
    items::records::ItemUuid,
    orders::records::{OrderItemUuid, OrderStatus, OrderUuid},
    users::records::UserUuid,
};

/// New Order Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    /// Identifier.
    pub uuid: OrderUuid,
    /// Customer checking out.
    pub user_uuid: UserUuid,
    /// Initial status.
    pub status: OrderStatus,
    /// Precomputed order total.
    pub total_amount: u64,
}

/// New Order Item Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderItem {
    /// Identifier.
    pub uuid: OrderItemUuid,
    /// Catalog item.
    pub item_uuid: ItemUuid,
    /// Units ordered.
    pub quantity: u32,
    /// Unit price snapshot.
    pub price: u64,
}
