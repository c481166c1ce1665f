//! Status, priority, and notification enums for Ballast.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `Priority` derives `Ord` so that task queues can sort on it directly.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// TaskStatus
// ---------------------------------------------------------------------------

/// Status of a task.
///
/// ```text
/// pending → in_progress → done
///                       → blocked → in_progress (unblocked)
/// ```
///
/// Only `done` counts as complete. Every other state is outstanding work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Blocked,
    Done,
}

impl TaskStatus {
    /// Whether the task is finished.
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Blocked => "blocked",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Priority of a task. Variants are declared lowest first, so the derived
/// `Ord` puts `Critical` at the top.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// NotificationType
// ---------------------------------------------------------------------------

/// Kind of notice previously sent to a user about a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    Reminder,
    Assignment,
    Overdue,
    Reallocation,
}

impl NotificationType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reminder => "reminder",
            Self::Assignment => "assignment",
            Self::Overdue => "overdue",
            Self::Reallocation => "reallocation",
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(status_pending, TaskStatus, TaskStatus::Pending, "pending");
    test_serde_roundtrip!(
        status_in_progress,
        TaskStatus,
        TaskStatus::InProgress,
        "in_progress"
    );
    test_serde_roundtrip!(status_done, TaskStatus, TaskStatus::Done, "done");
    test_serde_roundtrip!(priority_critical, Priority, Priority::Critical, "critical");
    test_serde_roundtrip!(
        notification_reminder,
        NotificationType,
        NotificationType::Reminder,
        "reminder"
    );

    #[test]
    fn only_done_is_complete() {
        assert!(TaskStatus::Done.is_done());
        assert!(!TaskStatus::Pending.is_done());
        assert!(!TaskStatus::InProgress.is_done());
        assert!(!TaskStatus::Blocked.is_done());
    }

    #[test]
    fn priority_orders_low_to_critical() {
        let mut priorities = vec![
            Priority::High,
            Priority::Low,
            Priority::Critical,
            Priority::Medium,
        ];
        priorities.sort();
        assert_eq!(
            priorities,
            vec![
                Priority::Low,
                Priority::Medium,
                Priority::High,
                Priority::Critical
            ]
        );
    }

    #[test]
    fn unknown_status_is_rejected() {
        let parsed = serde_json::from_str::<TaskStatus>("\"archived\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("{}", TaskStatus::InProgress), "in_progress");
        assert_eq!(format!("{}", Priority::Medium), "medium");
        assert_eq!(format!("{}", NotificationType::Overdue), "overdue");
    }
}
