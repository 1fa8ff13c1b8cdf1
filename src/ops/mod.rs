//! High-level operations composed from the core types.

pub mod locate;

pub use crate::core::manifest::LocatedManifest;
pub use locate::{discover_project, get_manifest_field, get_package_manifest, locate};
