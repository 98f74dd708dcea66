//! One complete rename round trip
//!
//! Selected paths become a manifest, the manifest text goes through an
//! editor, and the edited text is decoded and reconciled against the
//! original. If the editor fails nothing is planned and nothing on disk
//! changes.

use std::path::PathBuf;

use serde::Serialize;

use crate::observer::RenameObserver;
use crate::plan::{ReconcileReport, RenamePlan};
use crate::{Error, Manifest, Result};

/// Edits manifest text, typically by handing it to a person
pub trait ManifestEditor {
    /// Return the edited text, or an error if the edit was abandoned.
    fn edit(&mut self, manifest: &str) -> Result<String>;
}

impl<F> ManifestEditor for F
where
    F: FnMut(&str) -> Result<String>,
{
    fn edit(&mut self, manifest: &str) -> Result<String> {
        self(manifest)
    }
}

/// Result of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SessionOutcome {
    /// Dry run: the renames that would have been applied
    Planned(RenamePlan),
    /// The renames were applied
    Applied(ReconcileReport),
}

/// Drives the list → edit → reconcile flow
pub struct RenameSession<'a> {
    observer: &'a dyn RenameObserver,
    dry_run: bool,
}

impl<'a> RenameSession<'a> {
    pub fn new(observer: &'a dyn RenameObserver) -> Self {
        Self {
            observer,
            dry_run: false,
        }
    }

    /// Stop after planning instead of renaming.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Run the session over `files`, numbered from 0 in the given order.
    pub fn run<I, P>(&self, files: I, editor: &mut dyn ManifestEditor) -> Result<SessionOutcome>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let original = Manifest::from_paths(files)?;
        if original.is_empty() {
            return Err(Error::NoFiles);
        }
        tracing::debug!(entries = original.len(), "Built original manifest");

        let edited_text = editor.edit(&original.to_string()).map_err(|e| match e {
            Error::EditorAborted { .. } => e,
            other => Error::editor_aborted(other.to_string()),
        })?;

        let edited = Manifest::parse(&edited_text)?;
        let plan = RenamePlan::new(&original, &edited)?;

        if self.dry_run {
            tracing::info!(steps = plan.steps().len(), "Dry run, leaving files untouched");
            return Ok(SessionOutcome::Planned(plan));
        }

        plan.execute(self.observer).map(SessionOutcome::Applied)
    }
}
