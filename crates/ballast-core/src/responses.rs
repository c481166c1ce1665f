//! Derived records produced by the analysis.
//!
//! None of these are persisted. They are recomputed from a snapshot on every
//! call and returned as JSON by the `ballast` commands.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Task;
use crate::enums::Priority;
use crate::ids::{TaskId, UserId};

/// Per-user workload aggregate. Exactly one per input user.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct WorkloadEntry {
    pub user_id: UserId,
    pub name: String,
    pub role: String,
    pub tasks_assigned: u32,
    /// Tasks not yet done. Never exceeds `tasks_assigned`.
    pub pending_tasks: u32,
    /// Sum of logged minutes.
    pub total_time_spent: f64,
    pub workload_score: f64,
}

/// Result of thresholding a workload table.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct OverloadPartition {
    /// Entries scoring strictly above `threshold`, in input order.
    pub overloaded: Vec<WorkloadEntry>,
    pub threshold: f64,
}

/// A proposed handoff of one task from an overloaded user.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReallocationSuggestion {
    pub task_id: TaskId,
    pub task_title: String,
    pub from_user_id: UserId,
    pub from_user_name: String,
    pub to_user_id: UserId,
    pub to_user_name: String,
    pub priority: Priority,
    pub due_date: DateTime<Utc>,
}

/// An overloaded user together with the work still on their plate.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct OverloadedUserDetail {
    pub entry: WorkloadEntry,
    /// Pending tasks, earliest due first.
    pub pending: Vec<Task>,
}

/// Response from `ballast report`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct WorkloadReport {
    pub percentile: f64,
    pub threshold: f64,
    pub entries: Vec<WorkloadEntry>,
    pub overloaded: Vec<OverloadedUserDetail>,
    pub suggestions: Vec<ReallocationSuggestion>,
}
