//! User configuration and editor resolution

use std::path::{Path, PathBuf};

use rename_fs::ConfigStore;
use serde::Deserialize;

use crate::error::{CliError, Result};

/// Directory name under the platform config dir
pub const APP_DIR: &str = "rename-in-editor";
const CONFIG_FILE: &str = "config.toml";

/// Settings read from the config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub editor: EditorSettings,
}

/// `[editor]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    pub command: Option<String>,
    pub args: Vec<String>,
}

/// The editor invocation that was settled on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSpec {
    pub command: String,
    pub args: Vec<String>,
}

/// Default config location:
/// - Linux: `~/.config/rename-in-editor/config.toml`
/// - macOS: `~/Library/Application Support/rename-in-editor/config.toml`
/// - Windows: `%APPDATA%\rename-in-editor\config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join(CONFIG_FILE))
}

/// Load settings from `explicit`, or from the default location.
///
/// An explicit path must exist. A missing default file yields defaults.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    let store = ConfigStore::new();

    if let Some(path) = explicit {
        tracing::debug!(path = %path.display(), "Loading config");
        return Ok(store.load(path)?);
    }

    match default_config_path() {
        Some(path) if path.is_file() => {
            tracing::debug!(path = %path.display(), "Loading default config");
            Ok(store.load(&path)?)
        }
        _ => Ok(Settings::default()),
    }
}

/// Decide which editor to run.
///
/// The command comes from, in order: `--editor-command`, the config file,
/// `$VISUAL`, `$EDITOR`. Environment values may carry their own arguments
/// (`EDITOR="code --wait"`). `--editor-args` replaces whatever arguments the
/// chosen source provided.
pub fn resolve_editor(
    cli_command: Option<&str>,
    cli_args: Option<&str>,
    settings: &Settings,
    env: impl Fn(&str) -> Option<String>,
) -> Result<EditorSpec> {
    let (command, args) = if let Some(command) = cli_command {
        (command.to_string(), Vec::new())
    } else if let Some(command) = &settings.editor.command {
        (command.clone(), settings.editor.args.clone())
    } else {
        let from_env = ["VISUAL", "EDITOR"]
            .into_iter()
            .filter_map(|key| env(key))
            .find(|value| !value.trim().is_empty())
            .ok_or_else(|| {
                CliError::user(
                    "No editor configured. Pass --editor-command, set [editor] command in the config file, or set $EDITOR.",
                )
            })?;
        let mut words = from_env.split_whitespace().map(str::to_string);
        let command = words.next().unwrap_or_default();
        (command, words.collect())
    };

    if command.trim().is_empty() {
        return Err(CliError::user("Editor command is empty"));
    }

    let args = match cli_args {
        Some(raw) => raw.split_whitespace().map(str::to_string).collect(),
        None => args,
    };

    Ok(EditorSpec { command, args })
}
