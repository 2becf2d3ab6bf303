//! Rule emission for the Taskgate world.
//!
//! Turns a compiled [`TaskGraph`] into the entities a multiworld host works
//! with: reward locations, the filler item pool, locked completion tokens,
//! per-location access rules, and the completion predicate.
//!
//! # Overview
//!
//! [`WorldBlueprint::assemble`] walks the graph once and emits, for each
//! task at 1-based position `p`:
//!
//! - a reward location `Task {p}`,
//! - a filler reward item `Reward {p}` that goes into the fill pool,
//! - a progression token `Task {p} (Complete)` pre-placed (locked) at the
//!   task's own location, never in the pool,
//! - in lock mode, an [`AccessRule`] gating the location behind the tokens
//!   of the task's prerequisites.
//!
//! Each rule owns its required token ids outright, resolved while the
//! blueprint is built. Evaluating a rule later cannot observe any change to
//! the graph or to other rules.
//!
//! The game is complete when every reward location has been visited. Since
//! each token sits locked at its own location, this is the same condition
//! as owning every completion token.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use taskgate_core::graph::TaskGraph;
use taskgate_core::id::{self, ItemId, LocationId};

// ---------------------------------------------------------------------------
// Item classification
// ---------------------------------------------------------------------------

/// How the host's fill algorithm treats an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemClass {
    /// Freely placeable; logic never depends on it. All rewards are filler.
    Filler,
    /// Logic-relevant. All completion tokens are progression.
    Progression,
}

// ---------------------------------------------------------------------------
// World entities
// ---------------------------------------------------------------------------

/// A reward location emitted for one task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    /// 0-based index of the task this location rewards.
    pub task_index: usize,
}

/// An item definition emitted for one task (a reward or a token).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDef {
    pub id: ItemId,
    pub name: String,
    pub class: ItemClass,
}

/// A completion token pinned to its own task's location before fill runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LockedPlacement {
    pub location: LocationId,
    pub item: ItemDef,
}

// ---------------------------------------------------------------------------
// Player state
// ---------------------------------------------------------------------------

/// The set of items a player's state has claimed so far.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClaimedItems {
    owned: HashSet<ItemId>,
}

impl ClaimedItems {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record ownership of an item.
    pub fn claim(&mut self, item: ItemId) {
        self.owned.insert(item);
    }

    pub fn has(&self, item: ItemId) -> bool {
        self.owned.contains(&item)
    }

    pub fn count(&self) -> usize {
        self.owned.len()
    }
}

/// The set of locations a player has visited (checked) so far.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisitedLocations {
    visited: HashSet<LocationId>,
}

impl VisitedLocations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visit.
    pub fn visit(&mut self, location: LocationId) {
        self.visited.insert(location);
    }

    pub fn has(&self, location: LocationId) -> bool {
        self.visited.contains(&location)
    }

    pub fn count(&self) -> usize {
        self.visited.len()
    }
}

// ---------------------------------------------------------------------------
// Access rules
// ---------------------------------------------------------------------------

/// The gate on one reward location: the player must own every listed token.
///
/// The token ids are copied in at assembly time; the rule carries no
/// reference back to the graph it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessRule {
    required: Vec<ItemId>,
}

impl AccessRule {
    /// The token ids this rule demands, in prerequisite order.
    pub fn required(&self) -> &[ItemId] {
        &self.required
    }

    /// True iff every required token has been claimed.
    pub fn is_satisfied(&self, items: &ClaimedItems) -> bool {
        self.required.iter().all(|id| items.has(*id))
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from blueprint queries.
#[derive(Debug, thiserror::Error)]
pub enum BlueprintError {
    #[error("location not part of this world: {0:?}")]
    UnknownLocation(LocationId),
}

// ---------------------------------------------------------------------------
// WorldBlueprint
// ---------------------------------------------------------------------------

/// Everything the host needs to instantiate one player's world. Immutable
/// once assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldBlueprint {
    locations: Vec<Location>,
    pool: Vec<ItemDef>,
    locked: Vec<LockedPlacement>,
    rules: BTreeMap<LocationId, AccessRule>,
}

impl WorldBlueprint {
    /// Emit entities and rules from a compiled graph.
    ///
    /// Rules are attached only when the graph was compiled in lock mode,
    /// and only to locations whose task has at least one prerequisite.
    pub fn assemble(graph: &TaskGraph) -> WorldBlueprint {
        let n = graph.task_count();
        let mut locations = Vec::with_capacity(n);
        let mut pool = Vec::with_capacity(n);
        let mut locked = Vec::with_capacity(n);
        let mut rules = BTreeMap::new();

        for index in 0..n {
            let position = index + 1;
            let location_id = id::location_id(position);

            locations.push(Location {
                id: location_id,
                name: id::location_name(position),
                task_index: index,
            });

            pool.push(ItemDef {
                id: id::reward_item_id(position),
                name: id::reward_item_name(position),
                class: ItemClass::Filler,
            });

            locked.push(LockedPlacement {
                location: location_id,
                item: ItemDef {
                    id: id::token_item_id(position),
                    name: id::token_item_name(position),
                    class: ItemClass::Progression,
                },
            });

            if graph.lock_enabled() {
                let prereqs = graph.prereqs_of(index).unwrap_or(&[]);
                if !prereqs.is_empty() {
                    // Resolve prerequisite indices to token ids now; the
                    // rule keeps its own copy.
                    let required = prereqs.iter().map(|&p| id::token_item_id(p + 1)).collect();
                    rules.insert(location_id, AccessRule { required });
                }
            }
        }

        WorldBlueprint {
            locations,
            pool,
            locked,
            rules,
        }
    }

    // -- Query API --

    /// All reward locations, in task order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// The items handed to the host's fill: the reward items, nothing else.
    pub fn pool(&self) -> &[ItemDef] {
        &self.pool
    }

    /// Pre-placed completion tokens, one per location, in task order.
    pub fn locked_placements(&self) -> &[LockedPlacement] {
        &self.locked
    }

    /// The access rule on a location, if it has one.
    pub fn rule_for(&self, location: LocationId) -> Option<&AccessRule> {
        self.rules.get(&location)
    }

    /// Number of gated locations.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Whether a location is reachable given the claimed items. Locations
    /// without a rule are always reachable.
    pub fn reachable(
        &self,
        location: LocationId,
        items: &ClaimedItems,
    ) -> Result<bool, BlueprintError> {
        if !self.locations.iter().any(|l| l.id == location) {
            return Err(BlueprintError::UnknownLocation(location));
        }
        Ok(self
            .rules
            .get(&location)
            .is_none_or(|rule| rule.is_satisfied(items)))
    }

    /// The completion predicate: every reward location has been visited.
    pub fn is_complete(&self, visited: &VisitedLocations) -> bool {
        self.locations.iter().all(|l| visited.has(l.id))
    }
}

// ===========================================================================
// Tests
// ===========================================================================
