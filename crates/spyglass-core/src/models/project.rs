//! Project model definition.

use serde::{Deserialize, Serialize};

use super::ServiceNode;

/// Represents one tracked project: the root of a service/task tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier for the project
    pub id: u64,

    /// Name of the project
    pub name: String,

    /// Planned services (absent in the source counts as empty)
    #[serde(default)]
    pub services: Vec<ServiceNode>,
}

impl Project {
    /// Whether any task anywhere in this project has an active status.
    pub fn has_active_task(&self) -> bool {
        self.services
            .iter()
            .flat_map(|service| &service.tasks)
            .any(|task| task.is_active())
    }
}
