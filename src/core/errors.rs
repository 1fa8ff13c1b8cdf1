//! Error types for manifest lookup and project path derivation.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::util::diagnostic::{suggestions, Diagnostic};

/// Error while locating, reading or querying a `package.json`.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum ManifestError {
    #[error(
        "could not find `package.json` in `{}` or any parent directory",
        .start.display()
    )]
    #[diagnostic(
        code(projscope::manifest::not_found),
        help("Run `npm init` to create a package.json")
    )]
    NotFound { start: PathBuf },

    #[error("failed to read manifest: {}", .path.display())]
    #[diagnostic(code(projscope::manifest::read))]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse manifest: {}", .path.display())]
    #[diagnostic(
        code(projscope::manifest::parse),
        help("package.json must contain a single JSON object")
    )]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("field `{field}` is not set in {}", .path.display())]
    #[diagnostic(code(projscope::manifest::field_missing))]
    FieldMissing { field: String, path: PathBuf },

    #[error("invalid package version `{version}`")]
    #[diagnostic(code(projscope::manifest::invalid_version))]
    InvalidVersion {
        version: String,
        #[source]
        source: semver::Error,
    },

    #[error("failed to determine the current directory")]
    #[diagnostic(code(projscope::manifest::cwd))]
    CurrentDir {
        #[source]
        source: io::Error,
    },
}

impl ManifestError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ManifestError::NotFound { start } => Diagnostic::error(self.to_string())
                .with_context(format!("searched upward from {}", start.display()))
                .with_suggestion(suggestions::NO_MANIFEST),

            ManifestError::Read { path, source } => Diagnostic::error("failed to read manifest")
                .with_location(path)
                .with_context(source.to_string())
                .with_suggestion(suggestions::CHECK_PERMISSIONS),

            // serde_json reports line 0 for errors raised after parsing
            ManifestError::Parse { path, source } if source.line() == 0 => {
                Diagnostic::error("package.json does not contain a JSON object")
                    .with_location(path)
                    .with_context(source.to_string())
                    .with_suggestion(suggestions::JSON_OBJECT)
            }

            ManifestError::Parse { path, source } => {
                Diagnostic::error("package.json is not valid JSON")
                    .with_location(path)
                    .with_context(format!(
                        "line {}, column {}: {}",
                        source.line(),
                        source.column(),
                        source
                    ))
                    .with_suggestion(suggestions::FIX_JSON)
            }

            ManifestError::FieldMissing { field, path } => {
                Diagnostic::error(format!("field `{}` is not set", field))
                    .with_location(path)
                    .with_suggestion(format!("Add a `\"{}\"` key to package.json", field))
            }

            ManifestError::InvalidVersion { version, source } => {
                Diagnostic::error(format!("invalid package version `{}`", version))
                    .with_context(source.to_string())
                    .with_suggestion(suggestions::SEMVER)
            }

            ManifestError::CurrentDir { source } => Diagnostic::error(self.to_string())
                .with_context(source.to_string()),
        }
    }
}

/// Error while deriving project paths from a manifest.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum ProjectError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Manifest(#[from] ManifestError),

    #[error("package.json has no `main` entry point: {}", .path.display())]
    #[diagnostic(
        code(projscope::project::missing_main),
        help("Set `\"main\"` in package.json to the app entry file")
    )]
    MissingMain { path: PathBuf },

    #[error("unknown platform `{name}`")]
    #[diagnostic(
        code(projscope::project::unknown_platform),
        help("Supported platforms: android, ios")
    )]
    UnknownPlatform { name: String },
}

impl ProjectError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ProjectError::Manifest(err) => err.to_diagnostic(),
            ProjectError::MissingMain { path } => Diagnostic::error("no `main` entry point")
                .with_location(path)
                .with_suggestion(suggestions::SET_MAIN),
            ProjectError::UnknownPlatform { name } => {
                Diagnostic::error(format!("unknown platform `{}`", name))
                    .with_suggestion(suggestions::PLATFORMS)
            }
        }
    }
}
