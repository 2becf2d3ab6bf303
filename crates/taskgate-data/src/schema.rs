//! Serde structs for the on-disk player document.
//!
//! A player document is the file an editor writes and the host's option
//! loader reads: slot metadata at the top level, world options in a section
//! keyed by the game name. Documents are accepted in RON, JSON, or TOML.

use serde::{Deserialize, Serialize};
use taskgate_core::options::WorldOptions;

/// The game identifier. The host routes a document to this world when the
/// document's `game` field matches, and the options section is keyed by it.
pub const GAME_NAME: &str = "Taskgate";

/// Sentinel reward text meaning "let the host pick". Opaque to generation;
/// resolved at fill time.
pub const RANDOM_REWARD: &str = "RANDOM";

// ===========================================================================
// Player document
// ===========================================================================

/// A per-player configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerDocument {
    /// Free text shown in host tooling. Not used by generation.
    #[serde(default)]
    pub description: String,

    /// The player's slot name. Must be non-empty.
    #[serde(default)]
    pub name: String,

    /// Must equal [`GAME_NAME`] for this world to claim the document.
    #[serde(default)]
    pub game: String,

    /// The world options section, keyed by the game name.
    #[serde(rename = "Taskgate", skip_serializing_if = "Option::is_none")]
    pub section: Option<GameSection>,
}

/// The game-keyed options section of a player document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSection {
    /// Host-common knob: how strongly fill favors early progression.
    /// Valid range 0..=99.
    #[serde(default = "default_progression_balancing")]
    pub progression_balancing: u32,

    /// Host-common knob: which locations logic may require.
    #[serde(default)]
    pub accessibility: Accessibility,

    #[serde(default)]
    pub tasks: Vec<String>,

    #[serde(default)]
    pub rewards: Vec<String>,

    #[serde(default)]
    pub task_prereqs: Vec<String>,

    #[serde(default)]
    pub lock_prereqs: bool,

    #[serde(default)]
    pub death_link: bool,

    #[serde(default)]
    pub death_link_pool: Vec<String>,
}

fn default_progression_balancing() -> u32 {
    50
}

impl Default for GameSection {
    fn default() -> Self {
        Self {
            progression_balancing: default_progression_balancing(),
            accessibility: Accessibility::default(),
            tasks: Vec::new(),
            rewards: Vec::new(),
            task_prereqs: Vec::new(),
            lock_prereqs: false,
            death_link: false,
            death_link_pool: Vec::new(),
        }
    }
}

impl GameSection {
    /// Extract the generation-relevant options. Host-common knobs stay
    /// behind; the host consumes those itself.
    pub fn to_world_options(&self) -> WorldOptions {
        WorldOptions {
            tasks: self.tasks.clone(),
            rewards: self.rewards.clone(),
            task_prereqs: self.task_prereqs.clone(),
            lock_prereqs: self.lock_prereqs,
            death_link: self.death_link,
            death_link_pool: self.death_link_pool.clone(),
        }
    }
}

/// Which locations the host's logic may require the player to reach.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accessibility {
    /// Every location must be reachable.
    #[default]
    Full,
    /// Every item must be obtainable; some locations may be unreachable.
    Items,
    /// Only completion must be possible.
    Minimal,
}
