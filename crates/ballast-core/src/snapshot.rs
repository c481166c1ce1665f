//! The five input tables as one consistent snapshot.
//!
//! Every analysis runs against a single `Snapshot`. Callers that read the
//! tables from a live source must capture them together; the analysis does
//! not guard against tables that change underneath it.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Dependency, Notification, Task, TimeLog, User};
use crate::errors::CoreError;

/// Materialized input tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Snapshot {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub time_logs: Vec<TimeLog>,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

impl Snapshot {
    /// Check key uniqueness and per-record invariants.
    ///
    /// Dangling references (a task owned by an unknown user, a dependency on
    /// an unknown task) are accepted; the analysis handles them.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] on a duplicate `user_id` or
    /// `task_id`, or on an invalid time log.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut user_ids = HashSet::with_capacity(self.users.len());
        for user in &self.users {
            if !user_ids.insert(user.user_id) {
                return Err(CoreError::Validation(format!(
                    "duplicate user_id {}",
                    user.user_id
                )));
            }
        }

        let mut task_ids = HashSet::with_capacity(self.tasks.len());
        for task in &self.tasks {
            if !task_ids.insert(task.task_id) {
                return Err(CoreError::Validation(format!(
                    "duplicate task_id {}",
                    task.task_id
                )));
            }
        }

        self.time_logs.iter().try_for_each(TimeLog::validate)
    }
}
