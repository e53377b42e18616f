//! Existence gate: projects with no active task are excluded.

use super::{AnnotatedProject, FilterStage, StageOutcome};

/// Drops any project containing no task in an active status.
///
/// A pure existence pre-check: it performs no restructuring and carries
/// no configuration. Projects with at least one active task pass
/// through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActiveTaskGate;

impl FilterStage for ActiveTaskGate {
    fn apply(&self, input: AnnotatedProject) -> StageOutcome {
        if input.project.has_active_task() {
            StageOutcome::Continue(input)
        } else {
            StageOutcome::Exclude
        }
    }
}
