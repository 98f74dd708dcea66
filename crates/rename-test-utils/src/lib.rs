//! Shared test utilities for the rename-in-editor workspace.
//!
//! This crate provides standardised fixtures so each crate's tests don't
//! rebuild them. It is a dev-dependency only and is never published.
//!
//! # Modules
//!
//! - [`dir`]: [`dir::TestDir`], a scratch directory of files to rename
//! - [`editor`]: shell scripts that stand in for an interactive editor (unix)

pub mod dir;
#[cfg(unix)]
pub mod editor;
