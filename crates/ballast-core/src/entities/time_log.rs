use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::ids::{TaskId, UserId};

/// Time a user logged against their work.
///
/// Only `user_id` and `duration_minutes` feed the workload score. The task
/// and span fields are carried when the log was recorded as a start/end pair.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TimeLog {
    pub user_id: UserId,
    pub duration_minutes: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<TaskId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
}

impl TimeLog {
    /// A log with a bare duration and no span.
    #[must_use]
    pub const fn minutes(user_id: UserId, duration_minutes: f64) -> Self {
        Self {
            user_id,
            duration_minutes,
            task_id: None,
            started_at: None,
            ended_at: None,
        }
    }

    /// Build a log from a start/end span, deriving the duration.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if `ended_at` is not after `started_at`.
    pub fn from_span(
        user_id: UserId,
        task_id: Option<TaskId>,
        started_at: DateTime<Utc>,
        ended_at: DateTime<Utc>,
    ) -> Result<Self, CoreError> {
        if ended_at <= started_at {
            return Err(CoreError::Validation(format!(
                "time log for user {user_id}: end time {ended_at} must be after start time {started_at}"
            )));
        }

        Ok(Self {
            user_id,
            duration_minutes: span_minutes(started_at, ended_at),
            task_id,
            started_at: Some(started_at),
            ended_at: Some(ended_at),
        })
    }

    /// Check the log's invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for a negative or non-finite duration,
    /// or a span whose end does not follow its start.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.duration_minutes.is_finite() || self.duration_minutes < 0.0 {
            return Err(CoreError::Validation(format!(
                "time log for user {}: duration must be a non-negative number of minutes, got {}",
                self.user_id, self.duration_minutes
            )));
        }

        if let (Some(start), Some(end)) = (self.started_at, self.ended_at) {
            if end <= start {
                return Err(CoreError::Validation(format!(
                    "time log for user {}: end time {end} must be after start time {start}",
                    self.user_id
                )));
            }
        }

        Ok(())
    }
}

#[allow(clippy::cast_precision_loss)]
fn span_minutes(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    (end - start).num_milliseconds() as f64 / 60_000.0
}
