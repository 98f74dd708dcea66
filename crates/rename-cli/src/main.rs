//! rename-in-editor
//!
//! Batch-rename files by editing their paths in a text editor.

mod cli;
mod config;
mod editor;
mod error;
mod logging;
mod output;
mod rename;

use clap::Parser;
use colored::Colorize;

use cli::Cli;
use error::Result;
use rename::RenameOptions;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.log_file.as_deref())?;

    let settings = config::load_settings(cli.config.as_deref())?;
    let editor = config::resolve_editor(
        cli.editor_command.as_deref(),
        cli.editor_args.as_deref(),
        &settings,
        |key| std::env::var(key).ok(),
    )?;

    let options = RenameOptions {
        dry_run: cli.dry_run,
        json: cli.json,
    };
    rename::run_rename(&cli.files, editor, options)?;
    Ok(())
}
