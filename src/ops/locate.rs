//! Locate-and-load operations.
//!
//! Every call walks the directory tree and reads the manifest again; nothing
//! is cached between calls.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::core::errors::{ManifestError, ProjectError};
use crate::core::locator::{resolve_manifest_path, resolve_manifest_path_with, LocateOptions};
use crate::core::manifest::{load_manifest, LocatedManifest, PackageManifest};
use crate::core::project::Project;

/// Load the nearest manifest at or above `project_dir`.
pub fn get_package_manifest(project_dir: &Path) -> Result<PackageManifest, ManifestError> {
    load_manifest(&resolve_manifest_path(project_dir)?)
}

/// Locate and load the nearest manifest, keeping its path and root.
pub fn locate(project_dir: &Path, options: &LocateOptions) -> Result<LocatedManifest, ManifestError> {
    let path = resolve_manifest_path_with(project_dir, options)?;
    let manifest = load_manifest(&path)?;
    let root = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("/"));

    tracing::debug!("found project root {}", root.display());

    Ok(LocatedManifest {
        path,
        root,
        manifest,
    })
}

/// Read one top-level field from the nearest manifest.
pub fn get_manifest_field(project_dir: &Path, field: &str) -> Result<Value, ManifestError> {
    locate(project_dir, &LocateOptions::default())?.require_field(field)
}

/// Find the project containing `dir`.
pub fn discover_project(dir: &Path, options: &LocateOptions) -> Result<Project, ProjectError> {
    Ok(Project::from_located(locate(dir, options)?))
}
