//! Data models for the project/service/task tree.
//!
//! This module contains the domain models the filter pipeline consumes
//! and the output-only shapes it produces. Display implementations for
//! these models live in [`crate::display`] to keep data structures and
//! presentation logic separate.
//!
//! The tree is three levels deep:
//!
//! - [`Project`]: the root record
//! - [`ServiceNode`]: a planned service inside a project
//! - [`TaskNode`]: a task inside a service, carrying a free-text
//!   [`TaskStatus`] label
//!
//! The pipeline emits [`FilteredProject`] / [`FilteredService`] wrappers
//! rather than mutating the source tree; see [`crate::pipeline`].
//!
//! All models round-trip through JSON with camelCase field names,
//! matching the shape the query layer hands to the dashboard. Missing
//! `services`/`tasks` arrays deserialize as empty collections rather
//! than failing, so a malformed record degrades to exclusion instead of
//! an error.

pub mod filtered;
pub mod project;
pub mod service;
pub mod status;
pub mod task;


use crate::error::Result;

// Re-export all public types at the models level
pub use filtered::{FilteredProject, FilteredService};
pub use project::Project;
pub use service::ServiceNode;
pub use status::{TaskStatus, ACTIVE_STATUS_LABELS};
pub use task::TaskNode;

/// Parse a project list from the JSON shape produced by the query layer.
///
/// # Examples
///
/// ```rust
/// use spyglass_core::models::projects_from_json;
///
/// let projects = projects_from_json(
///     r#"[{"id": 1, "name": "Website Redesign", "services": []}]"#,
/// )?;
/// assert_eq!(projects[0].name, "Website Redesign");
/// # Ok::<(), spyglass_core::SpyglassError>(())
/// ```
pub fn projects_from_json(input: &str) -> Result<Vec<Project>> {
    Ok(serde_json::from_str(input)?)
}
