//! Display implementations for the filtered tree.
//!
//! Formatting lives here rather than on the model definitions so the
//! same data can render differently by context (a whole result list vs.
//! a single project). All output is markdown, suitable for the CLI's
//! terminal renderer or plain-text display.

use std::fmt;

use crate::models::{FilteredProject, FilteredService, TaskNode, TaskStatus};

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for TaskNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {}. {} ({})", self.id, self.name, self.task_status.with_icon())
    }
}

impl fmt::Display for FilteredService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({}/{} tasks)",
            self.id,
            self.service_name,
            self.filtered_tasks.len(),
            self.tasks.len()
        )?;
        writeln!(f)?;

        if self.filtered_tasks.is_empty() {
            writeln!(f, "No tasks matched in this service.")?;
        } else {
            for task in &self.filtered_tasks {
                writeln!(f, "{task}")?;
            }
        }
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for FilteredProject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        if self.services.is_empty() {
            writeln!(f, "No services in this project.")?;
        } else {
            writeln!(f, "## Services")?;
            writeln!(f)?;
            for service in &self.services {
                write!(f, "{service}")?;
            }
        }

        Ok(())
    }
}

/// Newtype wrapper for displaying a whole filter result.
///
/// Handles the empty case gracefully so callers never special-case it.
///
/// # Examples
///
/// ```rust
/// use spyglass_core::display::FilteredProjects;
///
/// let results = FilteredProjects(vec![]);
/// assert_eq!(format!("{}", results), "No matching projects.\n");
/// ```
pub struct FilteredProjects(pub Vec<FilteredProject>);

impl FilteredProjects {
    /// Check if the result is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of surviving projects.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the project at the given index.
    pub fn get(&self, index: usize) -> Option<&FilteredProject> {
        self.0.get(index)
    }
}

impl fmt::Display for FilteredProjects {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No matching projects.")?;
            return Ok(());
        }
        for project in &self.0 {
            write!(f, "{project}")?;
            writeln!(f)?;
        }
        Ok(())
    }
}
