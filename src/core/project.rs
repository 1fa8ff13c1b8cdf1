//! Project paths derived from the nearest manifest.
//!
//! A [`Project`] is rooted at the directory holding its `package.json`. The
//! entry point comes from the manifest `main` field and each platform has a
//! fixed output directory under `platforms/`.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::errors::ProjectError;
use crate::core::manifest::{LocatedManifest, PackageManifest};

/// Mobile platform a bundle is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Android,
    Ios,
}

impl Platform {
    /// Lowercase platform name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ProjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "android" => Ok(Platform::Android),
            "ios" => Ok(Platform::Ios),
            _ => Err(ProjectError::UnknownPlatform {
                name: s.to_string(),
            }),
        }
    }
}

/// Output directory for `platform`, relative to the project root.
///
/// iOS nests the app under a directory named after the project.
pub fn dist_path(platform: Platform, project_name: &str) -> PathBuf {
    match platform {
        Platform::Android => PathBuf::from("platforms/android/app/src/main/assets/app"),
        Platform::Ios => Path::new("platforms/ios").join(project_name).join("app"),
    }
}

/// A project rooted at the directory containing its manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    root: PathBuf,
    manifest_path: PathBuf,
    manifest: PackageManifest,
}

impl Project {
    /// Build a project from an already located manifest.
    pub fn from_located(located: LocatedManifest) -> Self {
        Project {
            root: located.root,
            manifest_path: located.path,
            manifest: located.manifest,
        }
    }

    /// Project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to the project's package.json.
    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    /// The parsed manifest.
    pub fn manifest(&self) -> &PackageManifest {
        &self.manifest
    }

    /// Project name: the manifest `name`, else the root directory name.
    pub fn name(&self) -> String {
        if let Some(name) = self.manifest.name() {
            return name.to_string();
        }
        self.root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Absolute path of the entry point named by `main`.
    pub fn entry_path(&self) -> Result<PathBuf, ProjectError> {
        let main = self.manifest.main().ok_or_else(|| ProjectError::MissingMain {
            path: self.manifest_path.clone(),
        })?;
        Ok(self.root.join(main))
    }

    /// Output directory for `platform`, relative to the root.
    pub fn dist_path(&self, platform: Platform) -> PathBuf {
        dist_path(platform, &self.name())
    }

    /// Absolute output directory for `platform`.
    pub fn absolute_dist_path(&self, platform: Platform) -> PathBuf {
        self.root.join(self.dist_path(platform))
    }
}
