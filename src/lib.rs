//! projscope - locate and inspect a JavaScript project's package.json
//!
//! This crate finds the nearest `package.json` above a directory, loads it
//! into a typed partial schema, and derives the project paths a bundler
//! needs (entry point, per-platform output directory).

pub mod core;
pub mod ops;
pub mod util;

/// Test utilities for projscope unit tests.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{
    errors::{ManifestError, ProjectError},
    locator::{resolve_manifest_path, LocateOptions, MANIFEST_NAME},
    manifest::{load_manifest, PackageManifest},
    project::{Platform, Project},
};

pub use crate::ops::{get_manifest_field, get_package_manifest};
pub use crate::util::context::GlobalContext;
