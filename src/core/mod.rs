//! Core data structures for projscope.
//!
//! This module contains the foundational types:
//! - The upward manifest search
//! - The package.json schema
//! - Project paths derived from a manifest

pub mod errors;
pub mod locator;
pub mod manifest;
pub mod project;

pub use errors::{ManifestError, ProjectError};
pub use locator::{resolve_manifest_path, resolve_manifest_path_with, LocateOptions, MANIFEST_NAME};
pub use manifest::{load_manifest, read_json_file, LocatedManifest, PackageManifest};
pub use project::{dist_path, Platform, Project};
