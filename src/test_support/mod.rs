//! Test utilities for projscope unit tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use projscope::test_support::ProjectFixture;
//!
//! #[test]
//! fn test_example() {
//!     let fx = ProjectFixture::new()
//!         .manifest("app", r#"{"main": "index.js"}"#)
//!         .dir("app/src/views");
//!
//!     let found = resolve_manifest_path(&fx.path("app/src/views")).unwrap();
//!     assert_eq!(found, fx.path("app/package.json"));
//! }
//! ```

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::core::locator::MANIFEST_NAME;

/// A directory tree in a temporary directory, removed on drop.
#[derive(Debug)]
pub struct ProjectFixture {
    tmp: TempDir,
}

impl ProjectFixture {
    /// Create an empty fixture.
    pub fn new() -> Self {
        ProjectFixture {
            tmp: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Root of the fixture.
    pub fn root(&self) -> &Path {
        self.tmp.path()
    }

    /// Absolute path of `rel` inside the fixture.
    pub fn path(&self, rel: impl AsRef<Path>) -> PathBuf {
        let rel = rel.as_ref();
        if rel.as_os_str().is_empty() {
            self.root().to_path_buf()
        } else {
            self.root().join(rel)
        }
    }

    /// Create a directory (and its parents).
    pub fn dir(self, rel: impl AsRef<Path>) -> Self {
        std::fs::create_dir_all(self.path(rel)).expect("failed to create fixture dir");
        self
    }

    /// Write a file, creating parent directories.
    pub fn file(self, rel: impl AsRef<Path>, content: &str) -> Self {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create fixture dir");
        }
        std::fs::write(&path, content).expect("failed to write fixture file");
        self
    }

    /// Write a package.json into directory `dir` (`""` for the root).
    pub fn manifest(self, dir: impl AsRef<Path>, content: &str) -> Self {
        let rel = dir.as_ref().join(MANIFEST_NAME);
        self.file(rel, content)
    }
}

impl Default for ProjectFixture {
    fn default() -> Self {
        Self::new()
    }
}
