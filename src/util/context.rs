//! Global context for projscope operations.
//!
//! Provides centralized access to the working directory, output settings
//! and the merged configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::errors::{ManifestError, ProjectError};
use crate::core::locator::{resolve_manifest_path_with, LocateOptions};
use crate::core::manifest::LocatedManifest;
use crate::core::project::Project;
use crate::ops::locate::{discover_project, locate};
use crate::util::config::{global_config_path, load_config, project_config_path, Config};

/// Global context containing configuration and paths.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Current working directory
    cwd: PathBuf,

    /// Whether to use verbose output
    verbose: bool,

    /// Whether to use colors in output
    color: bool,

    /// Merged global and project configuration
    config: Config,
}

impl GlobalContext {
    /// Create a new GlobalContext for the process working directory.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        Ok(Self::with_cwd(cwd))
    }

    /// Create a GlobalContext with a specific working directory.
    pub fn with_cwd(cwd: PathBuf) -> Self {
        let config = load_config(
            global_config_path().as_deref(),
            &project_config_path(&cwd),
        );
        Self::with_config(cwd, config)
    }

    /// Create a GlobalContext with an explicit configuration.
    pub fn with_config(cwd: PathBuf, config: Config) -> Self {
        GlobalContext {
            cwd,
            verbose: false,
            color: true,
            config,
        }
    }

    /// Set verbose mode.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Set color output.
    pub fn set_color(&mut self, color: bool) {
        self.color = color;
    }

    /// Get the current working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Check if verbose mode is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Check if color output is enabled.
    pub fn color(&self) -> bool {
        self.color
    }

    /// Get the merged configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Search options from the configuration.
    pub fn locate_options(&self) -> LocateOptions {
        self.config.locate_options(&self.cwd)
    }

    /// Resolve an optional user-supplied directory against the cwd.
    pub fn resolve_dir(&self, dir: Option<&Path>) -> PathBuf {
        match dir {
            Some(dir) => self.cwd.join(dir),
            None => self.cwd.clone(),
        }
    }

    /// Find the package.json for `dir` (default: cwd), searching upward.
    pub fn find_manifest(&self, dir: Option<&Path>) -> Result<PathBuf, ManifestError> {
        resolve_manifest_path_with(&self.resolve_dir(dir), &self.locate_options())
    }

    /// Locate and load the package.json for `dir` (default: cwd).
    pub fn locate(&self, dir: Option<&Path>) -> Result<LocatedManifest, ManifestError> {
        locate(&self.resolve_dir(dir), &self.locate_options())
    }

    /// Discover the project containing `dir` (default: cwd).
    pub fn project(&self, dir: Option<&Path>) -> Result<Project, ProjectError> {
        discover_project(&self.resolve_dir(dir), &self.locate_options())
    }
}
