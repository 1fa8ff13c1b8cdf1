//! Configuration file support for projscope.
//!
//! projscope reads two configuration files:
//! - Global: `~/.projscope/config.toml` - User-wide defaults
//! - Project: `.projscope/config.toml` - Overrides for the working directory
//!
//! Project config takes precedence over global config.
//!
//! ```toml
//! [locate]
//! ceiling = "/home/me/src"
//!
//! [project]
//! platform = "android"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::errors::ProjectError;
use crate::core::locator::LocateOptions;
use crate::core::project::Platform;
use crate::util::fs::read_to_string;

/// projscope configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Manifest search settings
    pub locate: LocateConfig,

    /// Project settings
    pub project: ProjectConfig,
}

/// Manifest search settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocateConfig {
    /// Do not search above this directory. Relative paths are resolved
    /// against the working directory.
    pub ceiling: Option<PathBuf>,
}

/// Project settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Default platform for `projscope dist` (android, ios)
    pub platform: Option<String>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = read_to_string(path)?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.locate.ceiling.is_some() {
            self.locate.ceiling = other.locate.ceiling;
        }
        if other.project.platform.is_some() {
            self.project.platform = other.project.platform;
        }
    }

    /// Search options, with a relative ceiling resolved against `cwd`.
    pub fn locate_options(&self, cwd: &Path) -> LocateOptions {
        LocateOptions {
            ceiling: self.locate.ceiling.as_ref().map(|c| cwd.join(c)),
        }
    }

    /// Parse the configured default platform.
    pub fn platform(&self) -> Result<Option<Platform>, ProjectError> {
        self.project
            .platform
            .as_deref()
            .map(str::parse::<Platform>)
            .transpose()
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.projscope/config.toml)
/// 2. Global config (~/.projscope/config.toml)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global_path) = global_path {
        config.merge(Config::load_or_default(global_path));
    }

    config.merge(Config::load_or_default(project_path));

    config
}

/// Get the global projscope config directory (~/.projscope).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".projscope"))
}

/// Get the global config path (~/.projscope/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (.projscope/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".projscope").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.locate.ceiling.is_none());
        assert!(config.project.platform.is_none());
        assert_eq!(config.platform().unwrap(), None);
    }

    #[test]
    fn test_config_load() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");

        std::fs::write(
            &config_path,
            r#"
[locate]
ceiling = "/home/me/src"

[project]
platform = "ios"
"#,
        )
        .unwrap();

        let config = Config::load(&config_path).unwrap();
        assert_eq!(config.locate.ceiling, Some(PathBuf::from("/home/me/src")));
        assert_eq!(config.platform().unwrap(), Some(Platform::Ios));
    }

    #[test]
    fn test_config_merge() {
        let mut base = Config::default();
        base.locate.ceiling = Some(PathBuf::from("/home"));
        base.project.platform = Some("android".to_string());

        let mut override_cfg = Config::default();
        override_cfg.project.platform = Some("ios".to_string());

        base.merge(override_cfg);

        assert_eq!(base.locate.ceiling, Some(PathBuf::from("/home")));
        assert_eq!(base.project.platform, Some("ios".to_string()));
    }

    #[test]
    fn test_load_config_precedence() {
        let tmp = TempDir::new().unwrap();
        let global = tmp.path().join("global.toml");
        let project = project_config_path(tmp.path());

        std::fs::write(&global, "[project]\nplatform = \"android\"\n").unwrap();
        std::fs::create_dir_all(project.parent().unwrap()).unwrap();
        std::fs::write(&project, "[project]\nplatform = \"ios\"\n").unwrap();

        let config = load_config(Some(&global), &project);
        assert_eq!(config.platform().unwrap(), Some(Platform::Ios));
    }

    #[test]
    fn test_invalid_config_falls_back_to_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[locate\nceiling = ").unwrap();

        assert_eq!(Config::load_or_default(&path), Config::default());
    }

    #[test]
    fn test_relative_ceiling_resolves_against_cwd() {
        let mut config = Config::default();
        config.locate.ceiling = Some(PathBuf::from(".."));

        let options = config.locate_options(Path::new("/work/app"));
        assert_eq!(options.ceiling, Some(PathBuf::from("/work/app/..")));
    }

    #[test]
    fn test_unknown_platform_in_config() {
        let mut config = Config::default();
        config.project.platform = Some("symbian".to_string());

        assert!(matches!(
            config.platform(),
            Err(ProjectError::UnknownPlatform { .. })
        ));
    }
}
