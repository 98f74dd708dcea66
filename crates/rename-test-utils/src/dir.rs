//! [`TestDir`] builder for rename scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory of files with helpers for setup and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use rename_test_utils::dir::TestDir;
///
/// let dir = TestDir::new();
/// dir.write("a.txt", "alpha");
/// dir.assert_file_contains("a.txt", "alpha");
/// assert_eq!(dir.file_names(), ["a.txt"]);
/// ```
pub struct TestDir {
    temp_dir: TempDir,
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDir {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("TestDir::new: failed to create temp dir"),
        }
    }

    /// Create a directory holding one file per name, each containing its own
    /// name, so moved contents are easy to trace.
    pub fn with_files(names: &[&str]) -> Self {
        let dir = Self::new();
        for name in names {
            dir.write(name, name);
        }
        dir
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `name` inside the directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Absolute paths of `names`, in the given order.
    pub fn paths(&self, names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(|n| self.path(n)).collect()
    }

    /// Write `content` to `name`, creating parent directories.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("TestDir::write: failed to create {parent:?}: {e}"));
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("TestDir::write: failed to write {path:?}: {e}"));
        path
    }

    /// Read the file at `name`.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read(&self, name: &str) -> String {
        let path = self.path(name);
        fs::read_to_string(&path).unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
    }

    /// Sorted names of the entries directly inside the directory.
    pub fn file_names(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.root())
            .expect("TestDir::file_names: failed to list directory")
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Assert that `name` exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, name: &str) {
        let full_path = self.path(name);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `name` does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, name: &str) {
        let full_path = self.path(name);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `name` contains exactly `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or its content differs.
    pub fn assert_file_contains(&self, name: &str, content: &str) {
        let actual = self.read(name);
        assert!(
            actual == content,
            "File {} has unexpected content.\nExpected: {}\nActual: {}",
            name,
            content,
            actual
        );
    }
}
