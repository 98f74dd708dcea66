//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Batch file renaming tool using an external text editor.
///
/// The selected files are written to a manifest of `index; path` lines and
/// opened in your editor. Change the paths, save, and close the editor; the
/// files are then renamed to match. Lines that are not `index; path` entries
/// are ignored.
#[derive(Parser, Debug)]
#[command(name = "rename-in-editor")]
#[command(author, version, about)]
#[command(after_help = "Example usage:\n  rename-in-editor --editor-command code --editor-args=\"--wait\" --files file1 file2")]
pub struct Cli {
    /// Command to launch the external text editor
    ///
    /// Falls back to the config file, then $VISUAL, then $EDITOR.
    #[arg(long, alias = "editor_command", value_name = "CMD")]
    pub editor_command: Option<String>,

    /// Extra editor arguments as a single space-separated string
    ///
    /// Pass it quoted: --editor-args="--arg1 --arg2"
    #[arg(
        long,
        alias = "editor_args",
        value_name = "ARGS",
        allow_hyphen_values = true
    )]
    pub editor_args: Option<String>,

    /// Files to be renamed
    #[arg(long, required = true, num_args = 1.., value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Show the renames without applying them
    #[arg(long)]
    pub dry_run: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Config file (toml, json or yaml)
    #[arg(long, value_name = "PATH", env = "RENAME_IN_EDITOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Append logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
