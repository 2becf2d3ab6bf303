use crate::error::GenerateError;
use crate::id::MAX_TASKS;
use crate::options::WorldOptions;
use crate::prereq;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TaskGraph
// ---------------------------------------------------------------------------

/// The compiled per-run model: normalized task and reward names plus the
/// validated prerequisite lists, indexed by 0-based task position.
///
/// A `TaskGraph` only exists on successful validation; there is no partially
/// compiled state. It is immutable after [`TaskGraph::compile`] returns and
/// is rebuilt from scratch each generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskGraph {
    tasks: Vec<String>,
    rewards: Vec<String>,
    prereqs: Vec<Vec<usize>>,
    lock_prereqs: bool,
}

impl TaskGraph {
    /// Validate the options and compile the prerequisite graph.
    ///
    /// Checks run in a fixed order, first failure wins:
    /// 1. at least one task,
    /// 2. task and reward counts match,
    /// 3. the death link pool is non-empty when death link is on,
    /// 4. the task count fits the bounded id space,
    /// 5. every prerequisite line parses ([`prereq::parse_prereqs`]),
    /// 6. lock mode only: the graph is acyclic.
    pub fn compile(options: &WorldOptions) -> Result<TaskGraph, GenerateError> {
        let options = options.normalized();

        if options.tasks.is_empty() {
            return Err(GenerateError::EmptyTaskList);
        }
        if options.tasks.len() != options.rewards.len() {
            return Err(GenerateError::TaskRewardLengthMismatch {
                tasks: options.tasks.len(),
                rewards: options.rewards.len(),
            });
        }
        if options.death_link && options.death_link_pool.is_empty() {
            return Err(GenerateError::EmptyDeathLinkPool);
        }

        let n = options.tasks.len();
        if n > MAX_TASKS {
            return Err(GenerateError::TooManyTasks { count: n });
        }

        let prereqs = prereq::parse_prereqs(&options.task_prereqs, n)?;

        if options.lock_prereqs {
            check_acyclic(&prereqs)?;
        }

        Ok(TaskGraph {
            tasks: options.tasks,
            rewards: options.rewards,
            prereqs,
            lock_prereqs: options.lock_prereqs,
        })
    }

    // -- Query API --

    /// Number of tasks in the run.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// All task names, in position order.
    pub fn tasks(&self) -> &[String] {
        &self.tasks
    }

    /// All reward names, in position order.
    pub fn rewards(&self) -> &[String] {
        &self.rewards
    }

    /// All prerequisite lists, in position order. Each entry holds 0-based
    /// task indices, de-duplicated, first-occurrence order.
    pub fn prereqs(&self) -> &[Vec<usize>] {
        &self.prereqs
    }

    /// The prerequisite list for the task at 0-based `index`.
    pub fn prereqs_of(&self, index: usize) -> Option<&[usize]> {
        self.prereqs.get(index).map(Vec::as_slice)
    }

    /// Whether prerequisites are enforced as access gates this run.
    pub fn lock_enabled(&self) -> bool {
        self.lock_prereqs
    }

    /// Whether `task` directly requires `prereq` (both 0-based).
    pub fn requires(&self, task: usize, prereq: usize) -> bool {
        self.prereqs
            .get(task)
            .is_some_and(|list| list.contains(&prereq))
    }

    /// Total number of prerequisite edges.
    pub fn edge_count(&self) -> usize {
        self.prereqs.iter().map(Vec::len).sum()
    }
}

// ---------------------------------------------------------------------------
// Acyclicity check
// ---------------------------------------------------------------------------

/// Visitation state of one node during the depth-first cycle scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Unvisited,
    InProgress,
    Done,
}

/// Verify the prerequisite graph has no directed cycle.
///
/// Depth-first over roots `0..n` in order; within a node, prerequisites are
/// followed in stored order. The traversal state lives in the `colors`
/// array passed down explicitly, so the scan has no hidden shared state and
/// each call is independent.
fn check_acyclic(prereqs: &[Vec<usize>]) -> Result<(), GenerateError> {
    let mut colors = vec![Color::Unvisited; prereqs.len()];
    for node in 0..prereqs.len() {
        if colors[node] == Color::Unvisited {
            visit(prereqs, &mut colors, node)?;
        }
    }
    Ok(())
}

/// Explore `node` depth-first. Finding an edge into an in-progress node
/// means a back edge, i.e. a cycle; the error names that node (1-based).
fn visit(prereqs: &[Vec<usize>], colors: &mut [Color], node: usize) -> Result<(), GenerateError> {
    colors[node] = Color::InProgress;
    for &next in &prereqs[node] {
        match colors[next] {
            Color::InProgress => {
                return Err(GenerateError::PrerequisiteCycle { task: next + 1 });
            }
            Color::Unvisited => visit(prereqs, colors, next)?,
            Color::Done => {}
        }
    }
    colors[node] = Color::Done;
    Ok(())
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn raw(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    /// Options with `n` numbered tasks/rewards and the given prereq lines.
    fn numbered_options(n: usize, prereqs: &[&str]) -> WorldOptions {
        WorldOptions {
            tasks: (1..=n).map(|i| format!("Task name {i}")).collect(),
            rewards: (1..=n).map(|i| format!("Reward name {i}")).collect(),
            task_prereqs: raw(prereqs),
            ..WorldOptions::default()
        }
    }

    fn locked(mut options: WorldOptions) -> WorldOptions {
        options.lock_prereqs = true;
        options
    }

    // -----------------------------------------------------------------------
    // Test 1: Empty task list rejected, including all-blank lists
    // -----------------------------------------------------------------------
    #[test]
    fn empty_task_list_rejected() {
        let err = TaskGraph::compile(&WorldOptions::default()).unwrap_err();
        assert!(matches!(err, GenerateError::EmptyTaskList));

        let options = WorldOptions {
            tasks: raw(&["  ", ""]),
            rewards: raw(&[]),
            ..WorldOptions::default()
        };
        let err = TaskGraph::compile(&options).unwrap_err();
        assert!(matches!(err, GenerateError::EmptyTaskList));
    }

    // -----------------------------------------------------------------------
    // Test 2: Task/reward length mismatch reports both lengths
    // -----------------------------------------------------------------------
    #[test]
    fn length_mismatch_reports_both_lengths() {
        let options = WorldOptions {
            tasks: raw(&["A", "B"]),
            rewards: raw(&["X"]),
            ..WorldOptions::default()
        };
        let err = TaskGraph::compile(&options).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::TaskRewardLengthMismatch {
                tasks: 2,
                rewards: 1
            }
        ));
    }

    // -----------------------------------------------------------------------
    // Test 3: Blank rewards can cause a mismatch after normalization
    // -----------------------------------------------------------------------
    #[test]
    fn blank_rewards_count_after_normalization() {
        let options = WorldOptions {
            tasks: raw(&["A", "B"]),
            rewards: raw(&["X", "   "]),
            ..WorldOptions::default()
        };
        let err = TaskGraph::compile(&options).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::TaskRewardLengthMismatch {
                tasks: 2,
                rewards: 1
            }
        ));
    }

    // -----------------------------------------------------------------------
    // Test 4: Death link pool required only when death link is on
    // -----------------------------------------------------------------------
    #[test]
    fn death_link_pool_required_only_when_enabled() {
        let mut options = numbered_options(2, &[]);
        options.death_link = true;
        let err = TaskGraph::compile(&options).unwrap_err();
        assert!(matches!(err, GenerateError::EmptyDeathLinkPool));

        options.death_link_pool = raw(&["Task name 1"]);
        assert!(TaskGraph::compile(&options).is_ok());

        options.death_link = false;
        options.death_link_pool = raw(&[]);
        assert!(TaskGraph::compile(&options).is_ok());
    }

    // -----------------------------------------------------------------------
    // Test 5: Compiled graph stores normalized names and parsed prereqs
    // -----------------------------------------------------------------------
    #[test]
    fn compile_stores_model() {
        let options = WorldOptions {
            tasks: raw(&[" Run 5k ", "Read a book", "Cook dinner"]),
            rewards: raw(&["New shoes", "Sequel", " Dessert "]),
            task_prereqs: raw(&["", "1", "1, 2"]),
            ..WorldOptions::default()
        };
        let graph = TaskGraph::compile(&options).unwrap();

        assert_eq!(graph.task_count(), 3);
        assert_eq!(graph.tasks()[0], "Run 5k");
        assert_eq!(graph.rewards()[2], "Dessert");
        assert_eq!(graph.prereqs(), &[vec![], vec![0], vec![0, 1]]);
        assert_eq!(graph.prereqs_of(2), Some(&[0, 1][..]));
        assert_eq!(graph.prereqs_of(3), None);
        assert!(graph.requires(1, 0));
        assert!(!graph.requires(0, 1));
        assert_eq!(graph.edge_count(), 3);
        assert!(!graph.lock_enabled());
    }

    // -----------------------------------------------------------------------
    // Test 6: Two-task cycle caught in lock mode, accepted otherwise
    // -----------------------------------------------------------------------
    #[test]
    fn two_task_cycle() {
        let options = numbered_options(2, &["2", "1"]);

        let graph = TaskGraph::compile(&options).unwrap();
        assert_eq!(graph.prereqs(), &[vec![1], vec![0]]);

        let err = TaskGraph::compile(&locked(options)).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::PrerequisiteCycle { task: 1 | 2 }
        ));
    }

    // -----------------------------------------------------------------------
    // Test 7: Longer cycle detected through a chain
    // -----------------------------------------------------------------------
    #[test]
    fn three_task_cycle_detected() {
        // 1 needs 3, 3 needs 2, 2 needs 1.
        let options = locked(numbered_options(3, &["3", "1", "2"]));
        let err = TaskGraph::compile(&options).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::PrerequisiteCycle { task: 1..=3 }
        ));
    }

    // -----------------------------------------------------------------------
    // Test 8: Diamond dependency is a DAG and passes lock mode
    // -----------------------------------------------------------------------
    #[test]
    fn diamond_is_acyclic() {
        // 4 needs 2 and 3; both need 1.
        let options = locked(numbered_options(4, &["", "1", "1", "2, 3"]));
        let graph = TaskGraph::compile(&options).unwrap();
        assert!(graph.lock_enabled());
        assert_eq!(graph.prereqs_of(3), Some(&[1, 2][..]));
    }

    // -----------------------------------------------------------------------
    // Test 9: Cycle in a later component still found
    // -----------------------------------------------------------------------
    #[test]
    fn cycle_in_disconnected_component() {
        // Tasks 1-2 form a clean chain; tasks 4-5 form a cycle.
        let options = locked(numbered_options(5, &["", "1", "", "5", "4"]));
        let err = TaskGraph::compile(&options).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::PrerequisiteCycle { task: 4 | 5 }
        ));
    }

    // -----------------------------------------------------------------------
    // Test 10: Shared prerequisite is not a false cycle
    // -----------------------------------------------------------------------
    #[test]
    fn shared_prereq_not_reported_as_cycle() {
        // 2 and 3 both need 1; node 1 is finished on the first visit and
        // only revisited as Done, never InProgress.
        let options = locked(numbered_options(3, &["", "1", "1"]));
        assert!(TaskGraph::compile(&options).is_ok());
    }

    // -----------------------------------------------------------------------
    // Test 11: Task count boundary at the id-space limit
    // -----------------------------------------------------------------------
    #[test]
    fn task_count_boundary() {
        let at_limit = numbered_options(MAX_TASKS, &[]);
        assert!(TaskGraph::compile(&at_limit).is_ok());

        let over = numbered_options(MAX_TASKS + 1, &[]);
        let err = TaskGraph::compile(&over).unwrap_err();
        assert!(matches!(err, GenerateError::TooManyTasks { count: 1001 }));
    }

    // -----------------------------------------------------------------------
    // Test 12: Validation order is fixed
    // -----------------------------------------------------------------------
    #[test]
    fn validation_order_is_fixed() {
        // Empty task list wins over reward mismatch.
        let options = WorldOptions {
            tasks: raw(&[]),
            rewards: raw(&["X"]),
            ..WorldOptions::default()
        };
        assert!(matches!(
            TaskGraph::compile(&options).unwrap_err(),
            GenerateError::EmptyTaskList
        ));

        // Mismatch wins over the death link pool check.
        let options = WorldOptions {
            tasks: raw(&["A", "B"]),
            rewards: raw(&["X"]),
            death_link: true,
            ..WorldOptions::default()
        };
        assert!(matches!(
            TaskGraph::compile(&options).unwrap_err(),
            GenerateError::TaskRewardLengthMismatch { .. }
        ));

        // Pool check wins over prereq parsing.
        let mut options = numbered_options(2, &["bogus"]);
        options.death_link = true;
        assert!(matches!(
            TaskGraph::compile(&options).unwrap_err(),
            GenerateError::EmptyDeathLinkPool
        ));

        // Parsing wins over the cycle check: the malformed token on task 1
        // is reported even though tasks 2 and 3 form a cycle.
        let options = locked(numbered_options(3, &["bogus", "3", "2"]));
        assert!(matches!(
            TaskGraph::compile(&options).unwrap_err(),
            GenerateError::MalformedPrerequisite { task: 1, .. }
        ));
    }

    // -----------------------------------------------------------------------
    // Test 13: Compiling twice yields identical models
    // -----------------------------------------------------------------------
    #[test]
    fn compile_is_deterministic() {
        let options = locked(numbered_options(4, &["", "1", "1, 2", "3"]));
        let first = TaskGraph::compile(&options).unwrap();
        let second = TaskGraph::compile(&options).unwrap();
        assert_eq!(first, second);
    }

    // -----------------------------------------------------------------------
    // Test 14: Long chain at the limit terminates in lock mode
    // -----------------------------------------------------------------------
    #[test]
    fn full_length_chain_terminates() {
        // Task i requires task i+1, so the scan starting at task 1 descends
        // through all 1000 tasks in one pass.
        let prereq_lines: Vec<String> = (1..=MAX_TASKS)
            .map(|i| {
                if i == MAX_TASKS {
                    String::new()
                } else {
                    (i + 1).to_string()
                }
            })
            .collect();
        let mut options = numbered_options(MAX_TASKS, &[]);
        options.task_prereqs = prereq_lines;
        options.lock_prereqs = true;

        let graph = TaskGraph::compile(&options).unwrap();
        assert_eq!(graph.edge_count(), MAX_TASKS - 1);
    }

    // -----------------------------------------------------------------------
    // Test 15: Dense graph terminates in lock mode
    // -----------------------------------------------------------------------
    #[test]
    fn dense_graph_terminates() {
        // Every task requires all earlier tasks: n(n-1)/2 edges, no cycle.
        let n = 300;
        let prereq_lines: Vec<String> = (1..=n)
            .map(|i| {
                (1..i)
                    .map(|p| p.to_string())
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect();
        let mut options = numbered_options(n, &[]);
        options.task_prereqs = prereq_lines;
        options.lock_prereqs = true;

        let graph = TaskGraph::compile(&options).unwrap();
        assert_eq!(graph.edge_count(), n * (n - 1) / 2);
    }

    // ===================================================================
    // Mutation-testing targeted tests
    // ===================================================================

    // Kill: "replace > with >=" in compile's task-count check.
    // Exactly MAX_TASKS tasks must be accepted.
    #[test]
    fn limit_is_inclusive() {
        let options = numbered_options(MAX_TASKS, &[]);
        let graph = TaskGraph::compile(&options).unwrap();
        assert_eq!(graph.task_count(), MAX_TASKS);
    }

    // Kill: "delete the lock_prereqs guard" around check_acyclic.
    // A cyclic graph with lock off must compile.
    #[test]
    fn cycle_check_gated_on_lock_mode() {
        let options = numbered_options(2, &["2", "1"]);
        assert!(!options.lock_prereqs);
        assert!(TaskGraph::compile(&options).is_ok());
    }

    // Kill: "delete the death_link guard" around the pool check.
    // An empty pool with death link off must compile.
    #[test]
    fn pool_check_gated_on_death_link() {
        let options = numbered_options(1, &[]);
        assert!(options.death_link_pool.is_empty());
        assert!(TaskGraph::compile(&options).is_ok());
    }

    // Kill: "swap tasks/rewards" in the mismatch error fields.
    // The reported counts must keep their meaning.
    #[test]
    fn mismatch_fields_not_swapped() {
        let options = WorldOptions {
            tasks: raw(&["A", "B", "C"]),
            rewards: raw(&["X"]),
            ..WorldOptions::default()
        };
        let err = TaskGraph::compile(&options).unwrap_err();
        assert_eq!(
            err.to_string(),
            "task/reward count mismatch: 3 tasks but 1 rewards"
        );
    }

    // Kill: "replace colors[node] = Done with Unvisited" in visit.
    // A finished node revisited through a second path must not loop forever
    // or be reported as a cycle.
    #[test]
    fn done_nodes_not_revisited() {
        // 3 needs 1 and 2; 2 needs 1. Node 1 is reached twice.
        let options = locked(numbered_options(3, &["", "1", "1, 2"]));
        assert!(TaskGraph::compile(&options).is_ok());
    }
}
