//! Terminal compound stage for active-only mode: status gating plus
//! cascading search matching.

use super::{select_service_tasks, AnnotatedProject, FilterStage, SearchMatcher, StageOutcome};
use crate::models::{FilteredProject, FilteredService};

/// Filters a project down to its active, matching work.
///
/// Per service, only the active tasks are candidates; a service whose
/// active set is empty is dropped before any matching happens. The
/// cascading tie-break then decides what each surviving service emits:
/// a project-level or service-level match reveals the full active set,
/// a task-level match preserves only the matching active tasks.
///
/// The stage is the final arbiter for active-only mode: it always
/// terminates the chain with an emit or an exclusion.
#[derive(Debug, Clone)]
pub struct ActiveServiceFilter {
    matcher: SearchMatcher,
}

impl ActiveServiceFilter {
    /// Create the stage for a normalized matcher.
    pub fn new(matcher: SearchMatcher) -> Self {
        Self { matcher }
    }
}

impl FilterStage for ActiveServiceFilter {
    fn apply(&self, input: AnnotatedProject) -> StageOutcome {
        let AnnotatedProject {
            project,
            matches_search,
        } = input;

        if !project.has_active_task() {
            return StageOutcome::Exclude;
        }

        let mut survivors = Vec::new();
        for service in &project.services {
            let active_tasks = service.active_tasks();
            if active_tasks.is_empty() {
                continue;
            }
            if let Some(tasks) =
                select_service_tasks(&self.matcher, matches_search, service, active_tasks)
            {
                survivors.push(FilteredService::new(service, tasks));
            }
        }

        if survivors.is_empty() {
            StageOutcome::Exclude
        } else {
            StageOutcome::Emit(FilteredProject::new(&project, survivors))
        }
    }
}
