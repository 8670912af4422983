//! Cart Records

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use serde::Serialize;
use thiserror::Error;

use crate::{
    domain::{items::records::ItemUuid, users::records::UserUuid},
    uuids::TypedUuid,
};

/// Cart UUID
pub type CartUuid = TypedUuid<CartRecord>;

/// Cart lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CartStatus {
    /// Open for adding items; the only state a cart has.
    Active,
}

impl CartStatus {
    /// Database representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
        }
    }
}

impl fmt::Display for CartStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `carts.status` value this build does not know.
#[derive(Debug, Error)]
#[error("unknown cart status: {0}")]
pub struct UnknownCartStatus(String);

impl FromStr for CartStatus {
    type Err = UnknownCartStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "active" => Ok(Self::Active),
            other => Err(UnknownCartStatus(other.to_string())),
        }
    }
}

/// Cart Record
#[derive(Debug, Clone)]
pub struct CartRecord {
    /// Identifier.
    pub uuid: CartUuid,
    /// Owner; each user has exactly one cart.
    pub user_uuid: UserUuid,
    /// Lifecycle status.
    pub status: CartStatus,
    /// Creation time.
    pub created_at: Timestamp,
}

/// Cart Item UUID
pub type CartItemUuid = TypedUuid<CartItemRecord>;

/// Cart Item Record
#[derive(Debug, Clone)]
pub struct CartItemRecord {
    /// Identifier.
    pub uuid: CartItemUuid,
    /// Owning cart.
    pub cart_uuid: CartUuid,
    /// Catalog item.
    pub item_uuid: ItemUuid,
    /// Units in the cart, at least one.
    pub quantity: u32,
    /// First add.
    pub created_at: Timestamp,
    /// Most recent add.
    pub updated_at: Timestamp,
}

/// A cart item joined with the catalog item's current name and price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineRecord {
    /// Cart item identifier.
    pub uuid: CartItemUuid,
    /// Catalog item.
    pub item_uuid: ItemUuid,
    /// Current catalog name.
    pub name: String,
    /// Current catalog unit price.
    pub price: u64,
    /// Units in the cart.
    pub quantity: u32,
}
