//! Manifest codec and rename reconciliation for rename-in-editor
//!
//! This crate holds the logic of the tool:
//!
//! - **Manifest**: index → path mapping with a line-oriented text form the
//!   user edits
//! - **RenamePlan**: joins an original and an edited manifest on their
//!   indices and orders the renames, routing colliding targets through
//!   temporary names
//! - **RenameSession**: the list → edit → reconcile round trip
//!
//! # Architecture
//!
//! ```text
//!        rename-cli
//!            |
//!       rename-core
//!            |
//!        rename-fs
//! ```
//!
//! # Example
//!
//! ```no_run
//! use rename_core::{Manifest, TracingObserver, reconcile};
//!
//! fn example() -> rename_core::Result<()> {
//!     let original = Manifest::from_paths(["a.txt", "b.txt"])?;
//!     let edited = Manifest::parse("0; b.txt\n1; a.txt\n")?;
//!     let report = reconcile(&original, &edited, &TracingObserver)?;
//!     assert_eq!(report.renamed(), 2);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod manifest;
pub mod observer;
pub mod plan;
pub mod session;

pub use error::{Error, Result};
pub use manifest::Manifest;
pub use observer::{NoopObserver, RenameObserver, TracingObserver};
pub use plan::{ReconcileReport, RenamePlan, RenameStep, reconcile};
pub use session::{ManifestEditor, RenameSession, SessionOutcome};
