use crate::id::MAX_TASKS;

/// Errors that abort a generation run for one player.
///
/// Every variant is fatal: there is no retry and no partial model. Messages
/// carry enough context (1-based task numbers, the offending token, valid
/// ranges) for a player to locate and fix the input line.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// No tasks remained after trimming and dropping blank entries.
    #[error("task list is empty; define at least one task")]
    EmptyTaskList,

    /// Tasks and rewards must pair 1:1 by position.
    #[error("task/reward count mismatch: {tasks} tasks but {rewards} rewards")]
    TaskRewardLengthMismatch { tasks: usize, rewards: usize },

    /// DeathLink is on but there is nothing to draw from.
    #[error("death link is enabled but the death link pool is empty")]
    EmptyDeathLinkPool,

    /// The task count exceeds the bounded id space.
    #[error("too many tasks: {count} exceeds the limit of {}", MAX_TASKS)]
    TooManyTasks { count: usize },

    /// A prerequisite token failed to parse as an integer.
    #[error("invalid prereq '{token}' on task {task}. Use comma-separated integers like '1,2'")]
    MalformedPrerequisite { task: usize, token: String },

    /// A prerequisite referenced a task number outside `1..=n`.
    #[error("prereq '{reference}' on task {task} is out of range (1..{max})")]
    OutOfRangeReference {
        task: usize,
        reference: i64,
        max: usize,
    },

    /// A task listed its own number as a prerequisite.
    #[error("task {task} cannot require itself")]
    SelfReference { task: usize },

    /// The prerequisite graph has a directed cycle (lock mode only).
    #[error("prereq graph contains a cycle (task {task} is on it)")]
    PrerequisiteCycle { task: usize },
}
