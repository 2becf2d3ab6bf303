use serde::{Deserialize, Serialize};

/// Maximum number of tasks a single player may define.
pub const MAX_TASKS: usize = 1000;

/// First id in the reward-location block.
pub const BASE_LOCATION_ID: i64 = 910_000;

/// First id in the reward-item block.
pub const BASE_ITEM_ID: i64 = 911_000;

/// First id in the completion-token block.
pub const BASE_TOKEN_ID: i64 = 912_000;

/// Identifies a location on the wire. Cheap to copy and compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LocationId(pub i64);

/// Identifies an item on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub i64);

/// The single allocation rule: ids are assigned contiguously from a block
/// base by 1-based task position. Every id this crate hands out comes
/// through here.
fn allocate(base: i64, position: usize) -> i64 {
    base + (position as i64 - 1)
}

/// Id of the reward location for the task at `position` (1-based).
pub fn location_id(position: usize) -> LocationId {
    LocationId(allocate(BASE_LOCATION_ID, position))
}

/// Id of the filler reward item for the task at `position` (1-based).
pub fn reward_item_id(position: usize) -> ItemId {
    ItemId(allocate(BASE_ITEM_ID, position))
}

/// Id of the completion token for the task at `position` (1-based).
pub fn token_item_id(position: usize) -> ItemId {
    ItemId(allocate(BASE_TOKEN_ID, position))
}

/// Display name of the reward location for `position` (1-based).
pub fn location_name(position: usize) -> String {
    format!("Task {position}")
}

/// Display name of the filler reward item for `position` (1-based).
pub fn reward_item_name(position: usize) -> String {
    format!("Reward {position}")
}

/// Display name of the completion token for `position` (1-based).
pub fn token_item_name(position: usize) -> String {
    format!("Task {position} (Complete)")
}

/// The full datapackage over the bounded id space: every location and item
/// name the game can ever use, with its stable id, independent of any
/// particular run's options. Hosts publish this so clients can resolve ids
/// before player options exist.
///
/// Entries are ordered by task position, so `locations[p - 1]` is the entry
/// for position `p`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub locations: Vec<(String, LocationId)>,
    pub reward_items: Vec<(String, ItemId)>,
    pub token_items: Vec<(String, ItemId)>,
}

/// Build the complete catalog for all `MAX_TASKS` positions.
pub fn full_catalog() -> Catalog {
    let mut locations = Vec::with_capacity(MAX_TASKS);
    let mut reward_items = Vec::with_capacity(MAX_TASKS);
    let mut token_items = Vec::with_capacity(MAX_TASKS);
    for position in 1..=MAX_TASKS {
        locations.push((location_name(position), location_id(position)));
        reward_items.push((reward_item_name(position), reward_item_id(position)));
        token_items.push((token_item_name(position), token_item_id(position)));
    }
    Catalog {
        locations,
        reward_items,
        token_items,
    }
}
