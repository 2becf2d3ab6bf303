//! Per-player slot data.
//!
//! The payload the host stores for the runtime client: the player's original
//! (uncompiled) configuration plus the id bases the client needs to resolve
//! location and item ids. Field names are the wire contract; existing client
//! tooling matches on them exactly.

use crate::id::{BASE_ITEM_ID, BASE_LOCATION_ID, BASE_TOKEN_ID};
use crate::options::WorldOptions;
use serde::{Deserialize, Serialize};

/// Slot data published for one player.
///
/// Built from the options alone: the client re-derives anything it needs
/// from the same ingested text the generator parsed, so the compiled graph
/// is not duplicated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotData {
    pub tasks: Vec<String>,
    pub rewards: Vec<String>,
    /// Prerequisite lines as ingested: trimmed, one line per task.
    pub task_prereqs: Vec<String>,
    pub lock_prereqs: bool,
    pub death_link_pool: Vec<String>,
    pub death_link_enabled: bool,
    pub base_location_id: i64,
    pub base_item_id: i64,
    pub base_token_id: i64,
}

impl SlotData {
    /// Assemble the payload. Every list is normalized the same way
    /// generation normalizes it, so the client sees exactly what the
    /// prerequisite parser saw: one trimmed line per task.
    pub fn from_options(options: &WorldOptions) -> SlotData {
        let normalized = options.normalized();
        SlotData {
            tasks: normalized.tasks,
            rewards: normalized.rewards,
            task_prereqs: normalized.task_prereqs,
            lock_prereqs: options.lock_prereqs,
            death_link_pool: normalized.death_link_pool,
            death_link_enabled: options.death_link,
            base_location_id: BASE_LOCATION_ID,
            base_item_id: BASE_ITEM_ID,
            base_token_id: BASE_TOKEN_ID,
        }
    }

    /// Serialize for the host's slot-data store.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
