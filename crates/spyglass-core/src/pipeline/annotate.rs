//! Entry stage: annotate a project with its own name match.

use super::{AnnotatedProject, SearchMatcher};
use crate::models::Project;

/// Computes whether a project's own name satisfies the search term.
///
/// Runs once at the head of every chain. It never excludes a project;
/// it only records the match for the downstream stages, which treat a
/// project-level match as revealing the whole subtree.
#[derive(Debug, Clone)]
pub struct NameMatchAnnotator {
    matcher: SearchMatcher,
}

impl NameMatchAnnotator {
    /// Create the annotator for a normalized matcher.
    pub fn new(matcher: SearchMatcher) -> Self {
        Self { matcher }
    }

    /// Annotate one project.
    ///
    /// An empty search term matches every name, so every project is
    /// annotated as matching when the search box is empty.
    pub fn annotate(&self, project: Project) -> AnnotatedProject {
        let matches_search = self.matcher.matches(&project.name);
        AnnotatedProject {
            project,
            matches_search,
        }
    }
}
