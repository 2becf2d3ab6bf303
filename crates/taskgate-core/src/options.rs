//! Per-player world options as handed over by the host's option loader.

use serde::{Deserialize, Serialize};

/// Raw per-player configuration. All fields default to empty/off so a
/// partial document still deserializes.
///
/// Lists are positional: `tasks[i]` pairs with `rewards[i]`, and
/// `task_prereqs[i]` is the comma-separated prerequisite text for the task
/// at position `i + 1`. The prereq list may be shorter or longer than the
/// task list; [`WorldOptions::normalized`] pads with blanks or truncates
/// to fit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldOptions {
    #[serde(default)]
    pub tasks: Vec<String>,

    #[serde(default)]
    pub rewards: Vec<String>,

    #[serde(default)]
    pub task_prereqs: Vec<String>,

    /// When on, prerequisites become hard access gates and the graph must
    /// be acyclic.
    #[serde(default)]
    pub lock_prereqs: bool,

    #[serde(default)]
    pub death_link: bool,

    #[serde(default)]
    pub death_link_pool: Vec<String>,
}

impl WorldOptions {
    /// Trim every task, reward, and death link entry and drop the blanks.
    ///
    /// Prereq lines are positional, so blank entries survive: each line is
    /// trimmed in place, and the list is padded with blanks or truncated to
    /// end up one line per task.
    pub fn normalized(&self) -> WorldOptions {
        let tasks = trim_and_drop_blanks(&self.tasks);
        let task_prereqs = (0..tasks.len())
            .map(|i| {
                self.task_prereqs
                    .get(i)
                    .map(|line| line.trim().to_string())
                    .unwrap_or_default()
            })
            .collect();
        WorldOptions {
            tasks,
            rewards: trim_and_drop_blanks(&self.rewards),
            task_prereqs,
            lock_prereqs: self.lock_prereqs,
            death_link: self.death_link,
            death_link_pool: trim_and_drop_blanks(&self.death_link_pool),
        }
    }
}

fn trim_and_drop_blanks(entries: &[String]) -> Vec<String> {
    entries
        .iter()
        .map(|e| e.trim())
        .filter(|e| !e.is_empty())
        .map(str::to_string)
        .collect()
}
