//! Core library for the Spyglass dashboard filter.
//!
//! This crate narrows a Project → Service → Task tree to what the user
//! is currently looking for: a free-text search term and an optional
//! "only active work" toggle. The narrowing is a pure, synchronous
//! chain of filter stages with cascading match semantics; see
//! [`pipeline`] for the full rules.
//!
//! # Quick Start
//!
//! ```rust
//! use spyglass_core::{
//!     models::projects_from_json,
//!     pipeline::{filter_projects, FilterOptions},
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let projects = projects_from_json(
//!     r#"[{
//!         "id": 1,
//!         "name": "Website Redesign",
//!         "services": [{
//!             "id": 10,
//!             "serviceName": "Design",
//!             "tasks": [{
//!                 "id": 100,
//!                 "name": "Draft homepage",
//!                 "taskStatus": { "name": "In Progress" }
//!             }]
//!         }]
//!     }]"#,
//! )?;
//!
//! let options = FilterOptions {
//!     search_term: "website".to_string(),
//!     active_only: true,
//! };
//! let filtered = filter_projects(&projects, &options);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].services[0].filtered_tasks.len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! # Display Architecture
//!
//! Domain and output models implement [`std::fmt::Display`] in
//! [`display`], producing markdown the CLI renders richly or as plain
//! text. The data structures themselves stay presentation-free.

pub mod display;
pub mod error;
pub mod models;
pub mod pipeline;

// Re-export commonly used types
pub use display::FilteredProjects;
pub use error::{Result, SpyglassError};
pub use models::{
    projects_from_json, FilteredProject, FilteredService, Project, ServiceNode, TaskNode,
    TaskStatus,
};
pub use pipeline::{filter_projects, FilterOptions, FilterPipeline, SearchMatcher};
