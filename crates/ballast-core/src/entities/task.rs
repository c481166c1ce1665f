use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Priority, TaskStatus};
use crate::ids::{TaskId, UserId};

/// A unit of work owned by exactly one user.
///
/// `assigned_user_id` is not guaranteed to name a known user; orphaned tasks
/// are dropped from per-user aggregates rather than rejected.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Task {
    pub task_id: TaskId,
    pub title: String,
    pub assigned_user_id: UserId,
    pub status: TaskStatus,
    pub priority: Priority,
    pub due_date: DateTime<Utc>,
}

impl Task {
    /// Whether the task still counts against its owner.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        !self.status.is_done()
    }
}
