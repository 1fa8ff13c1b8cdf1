//! Upward search for the nearest `package.json`.
//!
//! Starting from a directory, each ancestor (the start directory included) is
//! checked for a regular file named [`MANIFEST_NAME`]. The walk stops at the
//! first match, at the configured ceiling, or at the filesystem root.

use std::path::{Path, PathBuf};

use crate::core::errors::ManifestError;
use crate::util::fs::absolutize;

/// File name of the package manifest.
pub const MANIFEST_NAME: &str = "package.json";

/// Options for the upward manifest search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocateOptions {
    /// Highest directory to check. The ceiling itself is still searched.
    pub ceiling: Option<PathBuf>,
}

impl LocateOptions {
    /// Create options with no ceiling (search up to the filesystem root).
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the search at `ceiling`.
    pub fn with_ceiling(mut self, ceiling: impl Into<PathBuf>) -> Self {
        self.ceiling = Some(ceiling.into());
        self
    }
}

/// Find the nearest `package.json` at or above `start`.
pub fn resolve_manifest_path(start: &Path) -> Result<PathBuf, ManifestError> {
    resolve_manifest_path_with(start, &LocateOptions::default())
}

/// Find the nearest `package.json` at or above `start`, honoring `options`.
///
/// Relative paths are resolved against the process working directory.
/// Returns [`ManifestError::NotFound`] once the root (or ceiling) has been
/// checked without a match.
pub fn resolve_manifest_path_with(
    start: &Path,
    options: &LocateOptions,
) -> Result<PathBuf, ManifestError> {
    let start = absolutize(start).map_err(|source| ManifestError::CurrentDir { source })?;
    let ceiling = match &options.ceiling {
        Some(dir) => {
            Some(absolutize(dir).map_err(|source| ManifestError::CurrentDir { source })?)
        }
        None => None,
    };

    let mut current = start.clone();
    loop {
        let candidate = current.join(MANIFEST_NAME);
        tracing::debug!("checking {}", candidate.display());

        if candidate.is_file() {
            return Ok(candidate);
        }

        if ceiling.as_deref() == Some(current.as_path()) {
            tracing::debug!("reached search ceiling {}", current.display());
            break;
        }

        // `pop` fails once `current` is the root
        if !current.pop() {
            break;
        }
    }

    Err(ManifestError::NotFound { start })
}
