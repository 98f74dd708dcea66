//! Rename planning and execution
//!
//! Two manifests are joined on their indices. Every index whose path changed
//! becomes one primary step, either a direct rename or, when the new path is
//! still held by another entry of the original manifest, a rename to a
//! mangled temporary name. Restore steps for the mangled entries follow all
//! primary steps, in the order they were recorded.
//!
//! Planning only reads the two manifests. Execution checks the filesystem
//! right before each rename and stops at the first failure; renames already
//! applied are not rolled back.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use rename_fs::{io, mangled_path};

use crate::observer::RenameObserver;
use crate::{Error, Manifest, Result};

/// A single filesystem rename in a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenameStep {
    /// Straight to the final name
    Direct {
        index: usize,
        from: PathBuf,
        to: PathBuf,
    },
    /// To a temporary name, because `target` is still occupied
    Mangle {
        index: usize,
        from: PathBuf,
        temp: PathBuf,
        target: PathBuf,
    },
    /// From a temporary name to the final name
    Restore {
        index: usize,
        temp: PathBuf,
        to: PathBuf,
    },
}

impl RenameStep {
    pub fn index(&self) -> usize {
        match self {
            Self::Direct { index, .. } | Self::Mangle { index, .. } | Self::Restore { index, .. } => {
                *index
            }
        }
    }

    /// Path renamed by this step.
    pub fn source(&self) -> &Path {
        match self {
            Self::Direct { from, .. } | Self::Mangle { from, .. } => from,
            Self::Restore { temp, .. } => temp,
        }
    }

    /// Path this step renames to.
    pub fn destination(&self) -> &Path {
        match self {
            Self::Direct { to, .. } | Self::Restore { to, .. } => to,
            Self::Mangle { temp, .. } => temp,
        }
    }
}

impl fmt::Display for RenameStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct { from, to, .. } => write!(f, "{} -> {}", from.display(), to.display()),
            Self::Mangle {
                from, temp, target, ..
            } => write!(
                f,
                "{} -> {} (temporary, for {})",
                from.display(),
                temp.display(),
                target.display()
            ),
            Self::Restore { temp, to, .. } => {
                write!(f, "{} -> {} (restore)", temp.display(), to.display())
            }
        }
    }
}

/// Final name and the temporary name used to reach it
#[derive(Debug, Clone)]
struct TempNameRecord {
    index: usize,
    name: PathBuf,
    temp_name: PathBuf,
}

/// Ordered renames that turn one manifest into another
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenamePlan {
    steps: Vec<RenameStep>,
    unchanged: usize,
}

impl RenamePlan {
    /// Plan the renames from `original` to `edited`.
    ///
    /// Fails with `KeySetMismatch` unless both manifests have exactly the
    /// same indices.
    pub fn new(original: &Manifest, edited: &Manifest) -> Result<Self> {
        if !original.same_indices(edited) {
            let (missing, unexpected) = original.index_diff(edited);
            return Err(Error::KeySetMismatch {
                missing,
                unexpected,
            });
        }

        // Who holds each path before anything moves
        let holders: HashMap<&Path, usize> = original.iter().map(|(i, p)| (p, i)).collect();

        let mut steps = Vec::new();
        let mut temp_names: Vec<TempNameRecord> = Vec::new();
        let mut unchanged = 0;

        for (index, old_name) in original.iter() {
            let Some(new_name) = edited.get(index) else {
                continue;
            };

            if new_name == old_name {
                unchanged += 1;
                continue;
            }

            let collides = holders
                .get(new_name)
                .is_some_and(|&holder| holder != index);

            if collides {
                let temp_name = mangled_path(new_name);
                steps.push(RenameStep::Mangle {
                    index,
                    from: old_name.to_path_buf(),
                    temp: temp_name.clone(),
                    target: new_name.to_path_buf(),
                });
                temp_names.push(TempNameRecord {
                    index,
                    name: new_name.to_path_buf(),
                    temp_name,
                });
            } else {
                steps.push(RenameStep::Direct {
                    index,
                    from: old_name.to_path_buf(),
                    to: new_name.to_path_buf(),
                });
            }
        }

        steps.extend(temp_names.into_iter().map(|record| RenameStep::Restore {
            index: record.index,
            temp: record.temp_name,
            to: record.name,
        }));

        tracing::debug!(steps = steps.len(), unchanged, "Planned renames");
        Ok(Self { steps, unchanged })
    }

    pub fn steps(&self) -> &[RenameStep] {
        &self.steps
    }

    /// Entries whose path did not change.
    pub fn unchanged(&self) -> usize {
        self.unchanged
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Entries that go through a temporary name.
    pub fn mangled(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s, RenameStep::Mangle { .. }))
            .count()
    }

    /// Apply every step in order.
    ///
    /// Each target is checked right before its rename; an occupied target
    /// fails with `FileExists` and nothing after it runs.
    pub fn execute(&self, observer: &dyn RenameObserver) -> Result<ReconcileReport> {
        let mut report = ReconcileReport {
            unchanged: self.unchanged,
            ..ReconcileReport::default()
        };

        for step in &self.steps {
            observer.step_started(step);

            if let Err(err) = io::rename_no_clobber(step.source(), step.destination()) {
                let err = Error::from(err);
                observer.step_failed(step, &err);
                return Err(err);
            }

            observer.step_applied(step);
            match step {
                RenameStep::Direct { .. } => report.direct += 1,
                RenameStep::Mangle { .. } => report.mangled += 1,
                RenameStep::Restore { .. } => {}
            }
            report.applied.push(step.clone());
        }

        Ok(report)
    }
}

/// What a completed reconciliation did
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileReport {
    /// Steps applied, in order
    pub applied: Vec<RenameStep>,
    /// Entries renamed straight to their final name
    pub direct: usize,
    /// Entries renamed through a temporary name
    pub mangled: usize,
    /// Entries left alone
    pub unchanged: usize,
}

impl ReconcileReport {
    /// Entries that ended up with a new name.
    pub fn renamed(&self) -> usize {
        self.direct + self.mangled
    }
}

/// Plan and apply the renames turning `original` into `edited`.
pub fn reconcile(
    original: &Manifest,
    edited: &Manifest,
    observer: &dyn RenameObserver,
) -> Result<ReconcileReport> {
    RenamePlan::new(original, edited)?.execute(observer)
}
