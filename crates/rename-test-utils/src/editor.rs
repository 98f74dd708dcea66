//! Non-interactive stand-ins for an external editor.
//!
//! Each [`ScriptedEditor`] is a small `/bin/sh` script in its own temporary
//! directory. It is invoked the way a real editor is, `<script> <manifest>
//! [args...]`, and edits the manifest in place without user input.

use std::fs::{self, Permissions};
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// An executable script acting as the user's editor.
pub struct ScriptedEditor {
    dir: TempDir,
    script: PathBuf,
}

impl ScriptedEditor {
    /// Editor that replaces the manifest with `edited`.
    ///
    /// The manifest it was handed is saved and readable through
    /// [`ScriptedEditor::received_manifest`], its extra arguments through
    /// [`ScriptedEditor::received_args`].
    pub fn replacing(edited: &str) -> Self {
        let dir = TempDir::new().expect("ScriptedEditor: failed to create temp dir");
        let root = dir.path();
        fs::write(root.join("edited.txt"), edited).expect("ScriptedEditor: failed to write edit");

        let body = format!(
            "cp \"$1\" '{received}'\nshift\nprintf '%s\\n' \"$@\" > '{args}'\ncat '{edited}' > \"$RENAME_MANIFEST\"\n",
            received = root.join("received.txt").display(),
            args = root.join("args.txt").display(),
            edited = root.join("edited.txt").display(),
        );
        Self::install(dir, &format!("RENAME_MANIFEST=\"$1\"\n{body}"))
    }

    /// Editor that exits with `code` without touching the manifest.
    pub fn failing(code: i32) -> Self {
        let dir = TempDir::new().expect("ScriptedEditor: failed to create temp dir");
        Self::install(dir, &format!("exit {code}\n"))
    }

    fn install(dir: TempDir, body: &str) -> Self {
        let script = dir.path().join("editor.sh");
        fs::write(&script, format!("#!/bin/sh\n{body}"))
            .expect("ScriptedEditor: failed to write script");
        fs::set_permissions(&script, Permissions::from_mode(0o755))
            .expect("ScriptedEditor: failed to make script executable");
        Self { dir, script }
    }

    /// Path to pass as the editor command.
    pub fn command(&self) -> &Path {
        &self.script
    }

    /// Manifest text the editor was invoked on.
    ///
    /// # Panics
    /// Panics if the editor has not run.
    pub fn received_manifest(&self) -> String {
        fs::read_to_string(self.dir.path().join("received.txt"))
            .expect("ScriptedEditor: editor was never invoked")
    }

    /// Arguments after the manifest path, one per line.
    ///
    /// # Panics
    /// Panics if the editor has not run.
    pub fn received_args(&self) -> Vec<String> {
        fs::read_to_string(self.dir.path().join("args.txt"))
            .expect("ScriptedEditor: editor was never invoked")
            .lines()
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect()
    }
}
