//! Greedy round-robin reallocation planning.
//!
//! For each overloaded user, in the order given, the planner picks their most
//! urgent pending task that is safe to hand off and proposes it to the least
//! loaded user in the capacity pool. That recipient then moves to the back of
//! the pool. Each overloaded user yields at most one suggestion per call.
//!
//! A task is safe to hand off when:
//! - every task it depends on is done (a prerequisite missing from the task
//!   table counts as not done), and
//! - its owner has not already been sent a reminder about it.

use std::collections::{HashMap, HashSet, VecDeque};

use ballast_core::entities::{Dependency, Notification, Task};
use ballast_core::enums::TaskStatus;
use ballast_core::ids::{TaskId, UserId};
use ballast_core::responses::{ReallocationSuggestion, WorkloadEntry};

use crate::stats;

/// Why a pending task was passed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ineligible {
    /// A prerequisite is not done, or is unknown.
    Blocked { prerequisite: TaskId },
    /// The owner already has a reminder for this task.
    AlreadyReminded,
}

/// Lookup tables for the two eligibility gates, built once per call.
struct EligibilityGate {
    status_by_task: HashMap<TaskId, TaskStatus>,
    prerequisites: HashMap<TaskId, Vec<TaskId>>,
    reminded: HashSet<(UserId, TaskId)>,
}

impl EligibilityGate {
    fn new(tasks: &[Task], dependencies: &[Dependency], notifications: &[Notification]) -> Self {
        let status_by_task = tasks.iter().map(|t| (t.task_id, t.status)).collect();

        let mut prerequisites: HashMap<TaskId, Vec<TaskId>> = HashMap::new();
        for dependency in dependencies {
            prerequisites
                .entry(dependency.task_id)
                .or_default()
                .push(dependency.depends_on_task_id);
        }

        let reminded = notifications
            .iter()
            .filter_map(Notification::reminder_key)
            .collect();

        Self {
            status_by_task,
            prerequisites,
            reminded,
        }
    }

    fn check(&self, owner: UserId, task: &Task) -> Result<(), Ineligible> {
        if let Some(prerequisites) = self.prerequisites.get(&task.task_id) {
            let unmet = prerequisites.iter().find(|id| {
                !self
                    .status_by_task
                    .get(*id)
                    .is_some_and(|status| status.is_done())
            });
            if let Some(&prerequisite) = unmet {
                return Err(Ineligible::Blocked { prerequisite });
            }
        }

        if self.reminded.contains(&(owner, task.task_id)) {
            return Err(Ineligible::AlreadyReminded);
        }

        Ok(())
    }
}

/// Under-loaded users eligible to receive work, least loaded first.
///
/// Members score strictly below the team median and are not overloaded.
fn capacity_pool<'e>(
    overloaded: &[WorkloadEntry],
    all_entries: &'e [WorkloadEntry],
) -> VecDeque<&'e WorkloadEntry> {
    let scores: Vec<f64> = all_entries.iter().map(|e| e.workload_score).collect();
    let Some(median) = stats::median(&scores) else {
        return VecDeque::new();
    };

    let overloaded_ids: HashSet<UserId> = overloaded.iter().map(|e| e.user_id).collect();

    let mut pool: Vec<&WorkloadEntry> = all_entries
        .iter()
        .filter(|e| e.workload_score < median && !overloaded_ids.contains(&e.user_id))
        .collect();
    pool.sort_by(|a, b| a.workload_score.total_cmp(&b.workload_score));

    tracing::debug!(median, pool = pool.len(), "built capacity pool");

    pool.into()
}

/// The owner's outstanding tasks, highest priority first, then earliest due.
fn handoff_candidates(owner: UserId, tasks: &[Task]) -> Vec<&Task> {
    let mut candidates: Vec<&Task> = tasks
        .iter()
        .filter(|task| task.assigned_user_id == owner && task.is_pending())
        .collect();
    candidates.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| a.due_date.cmp(&b.due_date))
    });
    candidates
}

/// Propose at most one task handoff per overloaded user.
///
/// `overloaded` is processed in the order given; callers wanting the busiest
/// users served first should sort it by descending score beforehand. The
/// result is advisory and nothing passed in is modified.
#[must_use]
pub fn plan_reallocation(
    overloaded: &[WorkloadEntry],
    all_entries: &[WorkloadEntry],
    tasks: &[Task],
    dependencies: &[Dependency],
    notifications: &[Notification],
) -> Vec<ReallocationSuggestion> {
    let gate = EligibilityGate::new(tasks, dependencies, notifications);
    let mut pool = capacity_pool(overloaded, all_entries);
    let mut suggestions = Vec::new();

    for owner in overloaded {
        if pool.is_empty() {
            tracing::trace!(user_id = owner.user_id, "no capacity left; skipping");
            continue;
        }

        let candidate = handoff_candidates(owner.user_id, tasks)
            .into_iter()
            .find(|task| match gate.check(owner.user_id, task) {
                Ok(()) => true,
                Err(reason) => {
                    tracing::trace!(
                        user_id = owner.user_id,
                        task_id = task.task_id,
                        ?reason,
                        "task not eligible for handoff"
                    );
                    false
                }
            });

        let Some(task) = candidate else {
            continue;
        };
        let Some(recipient) = pool.pop_front() else {
            continue;
        };

        suggestions.push(ReallocationSuggestion {
            task_id: task.task_id,
            task_title: task.title.clone(),
            from_user_id: owner.user_id,
            from_user_name: owner.name.clone(),
            to_user_id: recipient.user_id,
            to_user_name: recipient.name.clone(),
            priority: task.priority,
            due_date: task.due_date,
        });
        pool.push_back(recipient);
    }

    tracing::debug!(
        overloaded = overloaded.len(),
        suggestions = suggestions.len(),
        "planned reallocation"
    );

    suggestions
}
