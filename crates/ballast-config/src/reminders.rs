//! Due-date reminder configuration.

use serde::{Deserialize, Serialize};

const fn default_lead_hours() -> i64 {
    24
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReminderConfig {
    /// How long before a task's due date its reminder goes out.
    #[serde(default = "default_lead_hours")]
    pub lead_hours: i64,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            lead_hours: default_lead_hours(),
        }
    }
}
