//! Item Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Item UUID
pub type ItemUuid = TypedUuid<ItemRecord>;

/// Item Record
#[derive(Debug, Clone)]
pub struct ItemRecord {
    /// Identifier.
    pub uuid: ItemUuid,
    /// Display name, never blank.
    pub name: String,
    /// Free text, may be empty.
    pub description: String,
    /// Current unit price in minor units.
    pub price: u64,
    /// Creation time.
    pub created_at: Timestamp,
    /// Last price change.
    pub updated_at: Timestamp,
}
