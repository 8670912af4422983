//! Items Data

use crate::domain::items::records::ItemUuid;

/// New Item Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    /// Identifier chosen by the caller.
    pub uuid: ItemUuid,
    /// Display name, must not be blank.
    pub name: String,
    /// Free text, may be empty.
    pub description: String,
    /// Unit price in minor units, at most `i64::MAX`.
    pub price: u64,
}

/// Item Update Data
#[derive(Debug, Clone, PartialEq)]
pub struct ItemUpdate {
    /// Replacement unit price in minor units.
    pub price: u64,
}
