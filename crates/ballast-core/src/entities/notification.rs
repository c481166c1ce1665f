use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::NotificationType;
use crate::ids::{TaskId, UserId};

/// A notice already sent to a user about one of their tasks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct Notification {
    pub user_id: UserId,
    pub task_id: TaskId,
    #[serde(rename = "type")]
    pub kind: NotificationType,
}

impl Notification {
    #[must_use]
    pub const fn reminder(user_id: UserId, task_id: TaskId) -> Self {
        Self {
            user_id,
            task_id,
            kind: NotificationType::Reminder,
        }
    }

    /// The (user, task) pair this notification reminds about, if it is a
    /// reminder. Used to build reminder dedup sets.
    #[must_use]
    pub fn reminder_key(&self) -> Option<(UserId, TaskId)> {
        (self.kind == NotificationType::Reminder).then_some((self.user_id, self.task_id))
    }
}
