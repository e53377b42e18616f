//! Service model definition.

use serde::{Deserialize, Serialize};

use super::TaskNode;

/// Represents one planned service inside a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceNode {
    /// Unique identifier for the service
    pub id: u64,

    /// Name of the service
    pub service_name: String,

    /// Tasks planned under this service (absent in the source counts
    /// as empty)
    #[serde(default)]
    pub tasks: Vec<TaskNode>,
}

impl ServiceNode {
    /// The subset of tasks whose status is in the active set.
    pub fn active_tasks(&self) -> Vec<TaskNode> {
        self.tasks
            .iter()
            .filter(|task| task.is_active())
            .cloned()
            .collect()
    }
}
