//! The rename command
//!
//! Runs one session with the resolved editor and reports the outcome.

use std::path::PathBuf;

use rename_core::{RenameObserver, RenameSession, SessionOutcome, TracingObserver};

use crate::config::EditorSpec;
use crate::editor::ExternalEditor;
use crate::error::Result;
use crate::output::{self, ConsoleObserver};

/// Options that shape how a session runs and reports
#[derive(Debug, Clone, Copy, Default)]
pub struct RenameOptions {
    pub dry_run: bool,
    pub json: bool,
}

/// Let the user edit `files` in `editor` and apply the result.
pub fn run_rename(files: &[PathBuf], editor: EditorSpec, options: RenameOptions) -> Result<SessionOutcome> {
    let observer: &dyn RenameObserver = if options.json {
        &TracingObserver
    } else {
        &ConsoleObserver
    };

    let mut editor = ExternalEditor::new(editor);
    let outcome = RenameSession::new(observer)
        .dry_run(options.dry_run)
        .run(files.iter().cloned(), &mut editor)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        match &outcome {
            SessionOutcome::Planned(plan) => output::print_plan(plan),
            SessionOutcome::Applied(report) => output::print_report(report),
        }
    }

    Ok(outcome)
}
