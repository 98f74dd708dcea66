//! External editor round trip
//!
//! The manifest is written to a fresh temporary directory, the editor is run
//! on it and waited for, and the file is read back once the editor exits.

use std::process::Command;

use rename_core::{Error, ManifestEditor};
use rename_fs::io;

use crate::config::EditorSpec;

/// Name of the manifest file handed to the editor
const MANIFEST_FILE_NAME: &str = "rename.txt";

/// Runs `<command> <manifest> [args...]` and blocks until it exits
#[derive(Debug, Clone)]
pub struct ExternalEditor {
    spec: EditorSpec,
}

impl ExternalEditor {
    pub fn new(spec: EditorSpec) -> Self {
        Self { spec }
    }
}

impl ManifestEditor for ExternalEditor {
    fn edit(&mut self, manifest: &str) -> rename_core::Result<String> {
        let dir = tempfile::Builder::new()
            .prefix("rename-in-editor-")
            .tempdir()
            .map_err(|e| Error::editor_aborted(format!("cannot create manifest directory: {e}")))?;
        let path = dir.path().join(MANIFEST_FILE_NAME);
        io::write_text(&path, manifest)?;

        tracing::debug!(
            command = %self.spec.command,
            args = ?self.spec.args,
            manifest = %path.display(),
            "Launching editor"
        );

        let status = Command::new(&self.spec.command)
            .arg(&path)
            .args(&self.spec.args)
            .status()
            .map_err(|e| {
                Error::editor_aborted(format!("failed to launch `{}`: {e}", self.spec.command))
            })?;

        if !status.success() {
            let reason = match status.code() {
                Some(code) => format!("call to editor returned {code} instead of 0"),
                None => "editor was terminated by a signal".to_string(),
            };
            tracing::warn!(command = %self.spec.command, "{}", reason);
            return Err(Error::editor_aborted(reason));
        }

        Ok(io::read_text(&path)?)
    }
}
