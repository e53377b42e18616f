//! The filter pipeline: narrowing a project tree to a search term.
//!
//! Dashboards render a Project → Service → Task tree. Before rendering,
//! the tree is narrowed to what the user is looking for: a free-text
//! search term and an optional "only active work" toggle. This module
//! implements that narrowing as an ordered chain of independent filter
//! stages.
//!
//! # Matching semantics
//!
//! Matches cascade: a match at an ancestor reveals everything beneath
//! it, while a match found only at a descendant preserves just that
//! descendant. Per service the tie-break runs in priority order:
//!
//! 1. the project name matched → emit the service with its full
//!    candidate task set
//! 2. the service name matches → emit with the full candidate set
//! 3. some task name matches → emit with only the matching tasks
//! 4. nothing matches → drop the service
//!
//! In active-only mode the candidate set is the service's active tasks
//! and a project without any active task is excluded outright; otherwise
//! every task is a candidate.
//!
//! # Chain shape
//!
//! Every run annotates the project once ([`NameMatchAnnotator`]) and
//! hands the [`AnnotatedProject`] through the stage list. A stage either
//! continues to the next link, emits a final [`FilteredProject`], or
//! excludes the project. The stages are pure values: identical input
//! and options always produce structurally identical output, so a run
//! per keystroke is safe.
//!
//! ```rust
//! use spyglass_core::pipeline::{FilterOptions, FilterPipeline};
//! use spyglass_core::models::Project;
//!
//! let projects: Vec<Project> = vec![];
//! let pipeline = FilterPipeline::build(&FilterOptions {
//!     search_term: "website".to_string(),
//!     active_only: true,
//! });
//! let filtered = pipeline.run(&projects);
//! assert!(filtered.is_empty());
//! ```

pub mod active_gate;
pub mod active_search;
pub mod annotate;
pub mod search;


use serde::{Deserialize, Serialize};

use crate::models::{FilteredProject, Project, ServiceNode, TaskNode};

pub use active_gate::ActiveTaskGate;
pub use active_search::ActiveServiceFilter;
pub use annotate::NameMatchAnnotator;
pub use search::ServiceNameFilter;

/// Case-insensitive substring matcher for a search term.
///
/// The term is trimmed and lowercased once at construction, not per
/// candidate. An empty normalized term matches every candidate, which
/// gives the "show all" behavior when the search box is empty.
#[derive(Debug, Clone)]
pub struct SearchMatcher {
    term: String,
}

impl SearchMatcher {
    /// Create a matcher, normalizing the term.
    pub fn new(term: &str) -> Self {
        Self {
            term: term.trim().to_lowercase(),
        }
    }

    /// Whether the candidate contains the normalized term.
    pub fn matches(&self, candidate: &str) -> bool {
        candidate.to_lowercase().contains(&self.term)
    }

    /// Whether the normalized term is empty (matches everything).
    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }
}

/// A project paired with its per-run search annotation.
///
/// The annotation is recomputed at the start of every run and consumed
/// by later stages in the same run; it never outlives one traversal and
/// is never persisted on the entity.
#[derive(Debug, Clone)]
pub struct AnnotatedProject {
    /// The project being filtered
    pub project: Project,

    /// Whether the project's own name satisfied the search term
    pub matches_search: bool,
}

/// What a stage decided for one project.
#[derive(Debug)]
pub enum StageOutcome {
    /// Hand the project to the next stage unchanged or re-annotated
    Continue(AnnotatedProject),

    /// Terminal: the project survives with this filtered shape
    Emit(FilteredProject),

    /// Terminal: the project is excluded from the output
    Exclude,
}

/// One link in the filter chain.
///
/// Stages are pure: the outcome is a function of the input and the
/// stage's fixed configuration only.
pub trait FilterStage {
    /// Process one annotated project.
    fn apply(&self, input: AnnotatedProject) -> StageOutcome;
}

/// Caller-facing configuration for one filter run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    /// Free-text search term (may be empty)
    #[serde(default)]
    pub search_term: String,

    /// Restrict the output to active work
    #[serde(default)]
    pub active_only: bool,
}

/// Per-service tie-break shared by both compound stages.
///
/// `candidates` is the task set under consideration: the active subset
/// in active-only mode, every task otherwise. Returns the tasks to emit
/// for this service, or `None` to drop it.
pub(crate) fn select_service_tasks(
    matcher: &SearchMatcher,
    project_matches: bool,
    service: &ServiceNode,
    candidates: Vec<TaskNode>,
) -> Option<Vec<TaskNode>> {
    if project_matches {
        return Some(candidates);
    }
    if matcher.matches(&service.service_name) {
        return Some(candidates);
    }
    let matching: Vec<TaskNode> = candidates
        .into_iter()
        .filter(|task| matcher.matches(&task.name))
        .collect();
    if matching.is_empty() {
        None
    } else {
        Some(matching)
    }
}

/// An assembled filter chain for one set of options.
///
/// Build once per `(search_term, active_only)` pair and run any number
/// of project lists through it.
pub struct FilterPipeline {
    annotator: NameMatchAnnotator,
    stages: Vec<Box<dyn FilterStage>>,
}

impl FilterPipeline {
    /// Assemble the chain appropriate for the given options.
    ///
    /// Active-only mode chains the existence gate in front of the
    /// active+search compound stage; otherwise the search-only compound
    /// stage runs alone. Both chains end in a terminal stage.
    pub fn build(options: &FilterOptions) -> Self {
        let matcher = SearchMatcher::new(&options.search_term);
        let stages: Vec<Box<dyn FilterStage>> = if options.active_only {
            vec![
                Box::new(ActiveTaskGate),
                Box::new(ActiveServiceFilter::new(matcher.clone())),
            ]
        } else {
            vec![Box::new(ServiceNameFilter::new(matcher.clone()))]
        };
        Self {
            annotator: NameMatchAnnotator::new(matcher),
            stages,
        }
    }

    /// Run every project through the chain, collecting survivors in
    /// input order.
    pub fn run(&self, projects: &[Project]) -> Vec<FilteredProject> {
        projects
            .iter()
            .filter_map(|project| self.filter_project(project))
            .collect()
    }

    /// Run a single project through the chain.
    ///
    /// A chain that runs off the end without a terminal outcome returns
    /// the input unchanged, every service passing all of its tasks.
    pub fn filter_project(&self, project: &Project) -> Option<FilteredProject> {
        let mut current = self.annotator.annotate(project.clone());
        for stage in &self.stages {
            match stage.apply(current) {
                StageOutcome::Continue(next) => current = next,
                StageOutcome::Emit(filtered) => return Some(filtered),
                StageOutcome::Exclude => return None,
            }
        }
        Some(FilteredProject::passthrough(&current.project))
    }
}

/// Convenience wrapper: build a chain for `options` and run `projects`
/// through it.
///
/// # Examples
///
/// ```rust
/// use spyglass_core::pipeline::{filter_projects, FilterOptions};
/// use spyglass_core::models::Project;
///
/// let projects = vec![Project {
///     id: 1,
///     name: "Website Redesign".to_string(),
///     services: vec![],
/// }];
/// let options = FilterOptions {
///     search_term: "website".to_string(),
///     active_only: false,
/// };
/// let filtered = filter_projects(&projects, &options);
/// assert_eq!(filtered.len(), 1);
/// ```
pub fn filter_projects(projects: &[Project], options: &FilterOptions) -> Vec<FilteredProject> {
    FilterPipeline::build(options).run(projects)
}
