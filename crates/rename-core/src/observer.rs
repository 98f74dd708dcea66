//! Progress reporting for rename execution
//!
//! The executor does not log or print on its own; callers pass an observer
//! that decides what to do with each step.

use crate::Error;
use crate::plan::RenameStep;

/// Receives notifications as a plan is applied
pub trait RenameObserver {
    /// Called right before the rename for `step` is attempted.
    fn step_started(&self, _step: &RenameStep) {}

    /// Called after `step` was applied on disk.
    fn step_applied(&self, _step: &RenameStep) {}

    /// Called when `step` failed; no further steps will run.
    fn step_failed(&self, _step: &RenameStep, _error: &Error) {}
}

/// Ignores every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RenameObserver for NoopObserver {}

/// Forwards notifications to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl RenameObserver for TracingObserver {
    fn step_started(&self, step: &RenameStep) {
        tracing::debug!(index = step.index(), "Renaming {}", step);
    }

    fn step_applied(&self, step: &RenameStep) {
        tracing::info!(
            index = step.index(),
            from = %step.source().display(),
            to = %step.destination().display(),
            "Renamed"
        );
    }

    fn step_failed(&self, step: &RenameStep, error: &Error) {
        tracing::error!(index = step.index(), %error, "Rename failed: {}", step);
    }
}
