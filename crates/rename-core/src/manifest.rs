//! Manifest model and its line-oriented text codec
//!
//! A manifest maps caller-chosen indices to file paths. Its text form is one
//! `"{index}; {path}"` line per entry, which is what the user edits.
//!
//! Decoding is lenient: any line that does not look like an entry is
//! skipped, so users can leave blank lines or notes in the file. There is no
//! escaping: a manifest refuses paths that are not UTF-8, contain a line
//! break, or start or end with whitespace, since their lines would decode to
//! a different path.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::{Error, Result};

/// An index, optional whitespace, `;`, optional whitespace, then the path up
/// to its last non-whitespace character.
static ENTRY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([0-9]+)\s*;\s*(.*\S)").unwrap());

/// Mapping from index to path with no two indices sharing a path.
///
/// Iteration is in ascending index order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: BTreeMap<usize, PathBuf>,
}

impl Manifest {
    /// Build a manifest, rejecting repeated paths and paths the text form
    /// cannot carry.
    ///
    /// Leading `./` components are dropped, so `./a.txt` and `a.txt` are the
    /// same entry.
    pub fn new(entries: BTreeMap<usize, PathBuf>) -> Result<Self> {
        let entries: BTreeMap<usize, PathBuf> = entries
            .into_iter()
            .map(|(index, path)| (index, strip_leading_cur_dir(path)))
            .collect();

        let mut seen: HashMap<&Path, usize> = HashMap::with_capacity(entries.len());
        for (&index, path) in &entries {
            if let Err(reason) = encodable(path) {
                return Err(Error::UnencodablePath {
                    index,
                    path: path.clone(),
                    reason,
                });
            }
            if let Some(&first) = seen.get(path.as_path()) {
                return Err(Error::DuplicatePath {
                    path: path.clone(),
                    first,
                    second: index,
                });
            }
            seen.insert(path.as_path(), index);
        }

        Ok(Self { entries })
    }

    /// Build a manifest from an ordered list, numbering entries from 0.
    pub fn from_paths<I, P>(paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self::new(
            paths
                .into_iter()
                .enumerate()
                .map(|(index, path)| (index, path.into()))
                .collect(),
        )
    }

    /// Decode manifest text, skipping lines that are not entries.
    ///
    /// When an index appears on several lines the last one wins.
    pub fn parse(text: &str) -> Result<Self> {
        let mut entries = BTreeMap::new();

        for (line_no, line) in text.lines().enumerate() {
            let Some(caps) = ENTRY_PATTERN.captures(line) else {
                if !line.trim().is_empty() {
                    tracing::trace!(line = line_no + 1, "Skipping non-entry line");
                }
                continue;
            };

            let Ok(index) = caps[1].parse::<usize>() else {
                tracing::debug!(line = line_no + 1, index = &caps[1], "Index out of range, skipping line");
                continue;
            };

            if let Some(previous) = entries.insert(index, PathBuf::from(&caps[2])) {
                tracing::debug!(index, previous = %previous.display(), "Index repeated, keeping the later line");
            }
        }

        Self::new(entries)
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        self.entries.get(&index).map(PathBuf::as_path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Path)> {
        self.entries.iter().map(|(&i, p)| (i, p.as_path()))
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether both manifests carry exactly the same indices.
    pub fn same_indices(&self, other: &Manifest) -> bool {
        self.entries.len() == other.entries.len() && self.indices().eq(other.indices())
    }

    /// Indices present here but not in `other`, and those only in `other`.
    pub fn index_diff(&self, other: &Manifest) -> (Vec<usize>, Vec<usize>) {
        let missing = self
            .indices()
            .filter(|i| !other.entries.contains_key(i))
            .collect();
        let unexpected = other
            .indices()
            .filter(|i| !self.entries.contains_key(i))
            .collect();
        (missing, unexpected)
    }

    /// Whether the edited path for `index` is currently held by another entry
    /// of this manifest.
    ///
    /// Only the pre-rename state is consulted; the entry for `index` itself
    /// is ignored.
    pub fn has_collision(&self, edited: &Manifest, index: usize) -> bool {
        let Some(target) = edited.get(index) else {
            return false;
        };
        self.iter().any(|(i, path)| i != index && path == target)
    }
}

/// Check that `path` survives an encode/decode round trip unchanged.
fn encodable(path: &Path) -> std::result::Result<(), &'static str> {
    let text = path.to_str().ok_or("not valid UTF-8")?;
    if text.is_empty() {
        return Err("empty path");
    }
    if text.contains(['\n', '\r']) {
        return Err("contains a line break");
    }
    if text.trim() != text {
        return Err("leading or trailing whitespace");
    }
    Ok(())
}

fn strip_leading_cur_dir(path: PathBuf) -> PathBuf {
    let mut components = path.components().peekable();
    if components.peek() != Some(&Component::CurDir) {
        return path;
    }
    let stripped: PathBuf = components
        .skip_while(|c| *c == Component::CurDir)
        .collect();
    if stripped.as_os_str().is_empty() {
        path
    } else {
        stripped
    }
}

impl fmt::Display for Manifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, path) in &self.entries {
            // Every path was checked by `encodable` on construction
            let text = path.to_str().ok_or(fmt::Error)?;
            writeln!(f, "{index}; {text}")?;
        }
        Ok(())
    }
}

impl FromStr for Manifest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
