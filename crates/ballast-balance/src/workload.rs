//! Per-user workload aggregation.
//!
//! Joins tasks and time logs onto the user table. Every user gets exactly one
//! [`WorkloadEntry`]; users with no tasks or logs get zeroes. Tasks and logs
//! pointing at unknown users are ignored.

use std::collections::HashMap;

use ballast_core::entities::{Task, TimeLog, User};
use ballast_core::errors::CoreError;
use ballast_core::ids::UserId;
use ballast_core::responses::WorkloadEntry;

/// Default weight of each pending task.
pub const DEFAULT_PENDING_WEIGHT: f64 = 3.0;
/// Default weight of each assigned task, pending or not.
pub const DEFAULT_ASSIGNED_WEIGHT: f64 = 1.0;
/// Default number of logged minutes worth one score point.
pub const DEFAULT_MINUTES_PER_UNIT: f64 = 60.0;

/// Weights of the workload score formula.
///
/// `score = pending * pending_weight + assigned * assigned_weight + minutes / minutes_per_unit`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub pending_weight: f64,
    pub assigned_weight: f64,
    pub minutes_per_unit: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            pending_weight: DEFAULT_PENDING_WEIGHT,
            assigned_weight: DEFAULT_ASSIGNED_WEIGHT,
            minutes_per_unit: DEFAULT_MINUTES_PER_UNIT,
        }
    }
}

impl ScoreWeights {
    #[must_use]
    pub fn score(&self, pending_tasks: u32, tasks_assigned: u32, minutes: f64) -> f64 {
        f64::from(pending_tasks) * self.pending_weight
            + f64::from(tasks_assigned) * self.assigned_weight
            + minutes / self.minutes_per_unit
    }

    /// Reject weights that would break score monotonicity.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidArgument`] for a negative or non-finite
    /// weight, or a `minutes_per_unit` that is not strictly positive.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (name, value) in [
            ("pending_weight", self.pending_weight),
            ("assigned_weight", self.assigned_weight),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::invalid_argument(
                    name,
                    format!("must be a non-negative number, got {value}"),
                ));
            }
        }

        if !self.minutes_per_unit.is_finite() || self.minutes_per_unit <= 0.0 {
            return Err(CoreError::invalid_argument(
                "minutes_per_unit",
                format!("must be greater than zero, got {}", self.minutes_per_unit),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    assigned: u32,
    pending: u32,
    minutes: f64,
}

/// Compute one workload entry per user with the default weights.
#[must_use]
pub fn compute_workload(users: &[User], tasks: &[Task], time_logs: &[TimeLog]) -> Vec<WorkloadEntry> {
    compute_workload_with(&ScoreWeights::default(), users, tasks, time_logs)
}

/// Compute one workload entry per user, in the order of `users`.
#[must_use]
pub fn compute_workload_with(
    weights: &ScoreWeights,
    users: &[User],
    tasks: &[Task],
    time_logs: &[TimeLog],
) -> Vec<WorkloadEntry> {
    let mut tallies: HashMap<UserId, Tally> = HashMap::with_capacity(users.len());

    for task in tasks {
        let tally = tallies.entry(task.assigned_user_id).or_default();
        tally.assigned += 1;
        if task.is_pending() {
            tally.pending += 1;
        }
    }

    for log in time_logs {
        tallies.entry(log.user_id).or_default().minutes += log.duration_minutes;
    }

    let entries: Vec<WorkloadEntry> = users
        .iter()
        .map(|user| {
            let tally = tallies.get(&user.user_id).copied().unwrap_or_default();
            WorkloadEntry {
                user_id: user.user_id,
                name: user.name.clone(),
                role: user.role.clone(),
                tasks_assigned: tally.assigned,
                pending_tasks: tally.pending,
                total_time_spent: tally.minutes,
                workload_score: weights.score(tally.pending, tally.assigned, tally.minutes),
            }
        })
        .collect();

    tracing::debug!(
        users = entries.len(),
        tasks = tasks.len(),
        time_logs = time_logs.len(),
        "computed workload table"
    );

    entries
}

/// Users that own at least one task, busiest first.
///
/// Ties keep their table order.
#[must_use]
pub fn active_entries(entries: &[WorkloadEntry]) -> Vec<WorkloadEntry> {
    let mut active: Vec<WorkloadEntry> = entries
        .iter()
        .filter(|entry| entry.tasks_assigned > 0)
        .cloned()
        .collect();
    active.sort_by(|a, b| b.workload_score.total_cmp(&a.workload_score));
    active
}
