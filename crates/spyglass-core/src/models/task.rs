//! Task model definition.

use serde::{Deserialize, Serialize};

use super::TaskStatus;

/// Represents an individual task within a project service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskNode {
    /// Unique identifier for the task
    pub id: u64,

    /// Name of the task
    pub name: String,

    /// Current status of the task (free-text label)
    pub task_status: TaskStatus,
}

impl TaskNode {
    /// Create a task with the given status label.
    pub fn new(id: u64, name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            task_status: TaskStatus::new(status),
        }
    }

    /// Whether this task's status is in the active set.
    pub fn is_active(&self) -> bool {
        self.task_status.is_active()
    }
}
