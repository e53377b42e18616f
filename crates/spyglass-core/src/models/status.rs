//! Task status labels and the active-status set.

use serde::{Deserialize, Serialize};

/// Status labels that count as active work.
///
/// Both compound filter stages and the display icons go through
/// [`TaskStatus::is_active`], so this set is the single place where
/// "active" is defined.
pub const ACTIVE_STATUS_LABELS: [&str; 2] = ["in progress", "pending"];

/// Free-text status label attached to a task.
///
/// Trackers report arbitrary labels ("In Progress", "Blocked", "Won't
/// Fix"); the pipeline only distinguishes active from inactive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskStatus {
    /// Status label as reported by the tracker
    pub name: String,
}

impl TaskStatus {
    /// Create a status from any label-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Whether this label is in the active set.
    ///
    /// Case-insensitive exact match against [`ACTIVE_STATUS_LABELS`];
    /// `"In Progress"` and `"PENDING"` are active, `"Completed"` is not.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spyglass_core::models::TaskStatus;
    ///
    /// assert!(TaskStatus::new("In Progress").is_active());
    /// assert!(TaskStatus::new("pending").is_active());
    /// assert!(!TaskStatus::new("Completed").is_active());
    /// ```
    pub fn is_active(&self) -> bool {
        let label = self.name.to_lowercase();
        ACTIVE_STATUS_LABELS.contains(&label.as_str())
    }

    /// Get the label with a consistent icon prefix for display.
    ///
    /// - `➤` for in-progress tasks
    /// - `○` for pending tasks
    /// - `·` for everything else
    pub fn with_icon(&self) -> String {
        let icon = match self.name.to_lowercase().as_str() {
            "in progress" => "➤",
            "pending" => "○",
            _ => "·",
        };
        format!("{} {}", icon, self.name)
    }
}
