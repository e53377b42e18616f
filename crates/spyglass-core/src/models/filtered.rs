//! Output-only model shapes produced by the filter pipeline.
//!
//! The pipeline never mutates the source tree. Surviving projects are
//! re-emitted as [`FilteredProject`] values whose services are
//! [`FilteredService`] wrappers: shallow copies of the source service
//! carrying the additional `filtered_tasks` field that the rendering
//! layer displays.

use serde::{Deserialize, Serialize};

use super::{Project, ServiceNode, TaskNode};

/// A service as it survived filtering.
///
/// Invariant: `filtered_tasks` is always a subset of `tasks`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FilteredService {
    /// Unique identifier of the source service
    pub id: u64,

    /// Name of the source service
    pub service_name: String,

    /// Full task list of the source service
    pub tasks: Vec<TaskNode>,

    /// Tasks that survived filtering (the subset to render)
    pub filtered_tasks: Vec<TaskNode>,
}

impl FilteredService {
    /// Wrap a source service with the tasks that survived filtering.
    pub fn new(service: &ServiceNode, filtered_tasks: Vec<TaskNode>) -> Self {
        Self {
            id: service.id,
            service_name: service.service_name.clone(),
            tasks: service.tasks.clone(),
            filtered_tasks,
        }
    }

    /// Wrap a source service with every task surviving.
    pub fn passthrough(service: &ServiceNode) -> Self {
        Self::new(service, service.tasks.clone())
    }
}

/// A project as it survived filtering, with `services` replaced by the
/// surviving [`FilteredService`] entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FilteredProject {
    /// Unique identifier of the source project
    pub id: u64,

    /// Name of the source project
    pub name: String,

    /// Services that survived filtering
    pub services: Vec<FilteredService>,
}

impl FilteredProject {
    /// Re-emit a project with the given surviving services.
    pub fn new(project: &Project, services: Vec<FilteredService>) -> Self {
        Self {
            id: project.id,
            name: project.name.clone(),
            services,
        }
    }

    /// Re-emit a project unchanged, every service passing all tasks.
    ///
    /// This is the identity element of the filter chain: a chain that
    /// ends without a terminal stage returns its input this way.
    pub fn passthrough(project: &Project) -> Self {
        let services = project
            .services
            .iter()
            .map(FilteredService::passthrough)
            .collect();
        Self::new(project, services)
    }
}
