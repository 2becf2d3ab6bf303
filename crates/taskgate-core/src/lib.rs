//! Taskgate Core -- option ingestion and prerequisite graph compilation for
//! the Taskgate multiworld world.
//!
//! Players define an ordered list of free-text tasks, a reward per task, and
//! optionally a comma-separated prerequisite line per task ("3, 1" on task 5
//! means task 5 needs tasks 3 and 1 done first). This crate validates that
//! input and compiles it into the immutable per-run model everything else
//! consumes.
//!
//! # Generation Pipeline
//!
//! One synchronous pass per player per generation run:
//!
//! 1. **Ingestion** -- [`options::WorldOptions`] arrives from the host's
//!    option loader; normalization trims entries and drops blanks.
//! 2. **Compilation** -- [`graph::TaskGraph::compile`] validates shape,
//!    parses every prerequisite line ([`prereq::parse_prereqs`]), and in
//!    lock mode proves the graph acyclic. First error aborts the run; a
//!    [`graph::TaskGraph`] value only exists on success.
//! 3. **Emission** -- downstream crates turn the graph into locations,
//!    items, and access rules (see `taskgate-rules`).
//! 4. **Publishing** -- [`slot::SlotData`] packages the raw configuration
//!    and id bases for the runtime client.
//!
//! # Wire Contract
//!
//! Ids allocate as `base + (position - 1)` from the blocks in [`id`]
//! (910_000 locations, 911_000 reward items, 912_000 completion tokens),
//! and names follow the fixed `Task {p}` / `Reward {p}` /
//! `Task {p} (Complete)` formats. Existing client tooling depends on both,
//! so they never change between runs or versions.
//!
//! # Key Types
//!
//! - [`options::WorldOptions`] -- raw per-player configuration.
//! - [`graph::TaskGraph`] -- compiled, validated prerequisite graph.
//! - [`error::GenerateError`] -- every way a generation run can fail.
//! - [`id::Catalog`] -- the full name/id datapackage over the bounded space.
//! - [`slot::SlotData`] -- the per-player client payload.

pub mod error;
pub mod graph;
pub mod id;
pub mod options;
pub mod prereq;
pub mod slot;
