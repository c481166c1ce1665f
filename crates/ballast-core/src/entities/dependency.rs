use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::TaskId;

/// Directed edge: `task_id` cannot be handed off until `depends_on_task_id` is done.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct Dependency {
    pub task_id: TaskId,
    pub depends_on_task_id: TaskId,
}
