//! Filesystem layer for rename-in-editor
//!
//! Provides the guarded rename primitive, atomic text I/O, deterministic
//! temporary names for collision mangling, and format-agnostic config loading.

pub mod config;
pub mod error;
pub mod io;
pub mod mangle;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use mangle::{mangled_path, path_digest};
