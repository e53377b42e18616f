//! Terminal compound stage for search-only mode: cascading search
//! matching over every task, without status gating.

use super::{select_service_tasks, AnnotatedProject, FilterStage, SearchMatcher, StageOutcome};
use crate::models::{FilteredProject, FilteredService};

/// Filters a project by search term alone.
///
/// Same cascading tie-break as [`super::ActiveServiceFilter`] but every
/// task is a candidate and there is no existence pre-check.
///
/// When no service survives and the project's own name did not match,
/// the project is excluded. When no service survives but the project
/// DID match, the stage falls back to emitting every original service
/// unfiltered. The tie-break already emits every service on a project
/// match, so the fallback is only reachable for a matching project with
/// no services at all; it is kept for parity with the dashboard's
/// observed behavior.
#[derive(Debug, Clone)]
pub struct ServiceNameFilter {
    matcher: SearchMatcher,
}

impl ServiceNameFilter {
    /// Create the stage for a normalized matcher.
    pub fn new(matcher: SearchMatcher) -> Self {
        Self { matcher }
    }
}

impl FilterStage for ServiceNameFilter {
    fn apply(&self, input: AnnotatedProject) -> StageOutcome {
        let AnnotatedProject {
            project,
            matches_search,
        } = input;

        let mut survivors = Vec::new();
        for service in &project.services {
            if let Some(tasks) = select_service_tasks(
                &self.matcher,
                matches_search,
                service,
                service.tasks.clone(),
            ) {
                survivors.push(FilteredService::new(service, tasks));
            }
        }

        if survivors.is_empty() {
            if matches_search {
                return StageOutcome::Emit(FilteredProject::passthrough(&project));
            }
            return StageOutcome::Exclude;
        }

        StageOutcome::Emit(FilteredProject::new(&project, survivors))
    }
}
