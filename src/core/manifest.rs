//! `package.json` loading and schema.
//!
//! The manifest keeps the top-level JSON object exactly as written. The
//! fields this crate interprets (`name`, `version`, `main`) are read through
//! typed accessors that yield `None` when the key is absent or not a string;
//! every key stays reachable through [`PackageManifest::field`].

use std::path::{Path, PathBuf};

use semver::Version;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::errors::ManifestError;

/// Top-level keys with typed accessors.
pub const KNOWN_FIELDS: [&str; 3] = ["name", "version", "main"];

/// The parsed package.json manifest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageManifest {
    fields: Map<String, Value>,
}

impl PackageManifest {
    /// Load a manifest from a file path.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        tracing::debug!("loading manifest {}", path.display());

        let content = read_manifest_text(path)?;
        Self::parse(&content, path)
    }

    /// Parse manifest content. `path` is only used for error reporting.
    ///
    /// Any JSON object is accepted; only syntax errors and a non-object
    /// top-level value are rejected.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ManifestError> {
        let parse_err = |source: serde_json::Error| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        };

        match serde_json::from_str::<Value>(content).map_err(parse_err)? {
            Value::Object(fields) => Ok(PackageManifest { fields }),
            _ => Err(parse_err(serde_json::Error::custom(
                "expected a JSON object at the top level",
            ))),
        }
    }

    /// Build a manifest from an already parsed JSON object.
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        PackageManifest { fields }
    }

    /// Package name, if set to a string.
    pub fn name(&self) -> Option<&str> {
        self.str_field("name")
    }

    /// Entry point, if set to a string.
    pub fn main(&self) -> Option<&str> {
        self.str_field("main")
    }

    /// Raw `version` string, if set to a string.
    pub fn version_str(&self) -> Option<&str> {
        self.str_field("version")
    }

    /// Package version parsed as semver. `Ok(None)` when the field is absent
    /// or not a string.
    pub fn version(&self) -> Result<Option<Version>, ManifestError> {
        match self.version_str() {
            Some(raw) => Version::parse(raw)
                .map(Some)
                .map_err(|source| ManifestError::InvalidVersion {
                    version: raw.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    /// Look up any top-level field, with its value as written.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// All top-level fields.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Keys without a typed accessor.
    pub fn other_keys(&self) -> impl Iterator<Item = &str> {
        self.fields
            .keys()
            .map(String::as_str)
            .filter(|k| !KNOWN_FIELDS.contains(k))
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

/// A manifest together with where it was found.
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedManifest {
    /// Path to the package.json
    pub path: PathBuf,
    /// Directory containing the package.json
    pub root: PathBuf,
    /// Parsed contents
    pub manifest: PackageManifest,
}

impl LocatedManifest {
    /// Look up a top-level field, failing if the key is absent.
    pub fn require_field(&self, field: &str) -> Result<Value, ManifestError> {
        self.manifest
            .field(field)
            .cloned()
            .ok_or_else(|| ManifestError::FieldMissing {
                field: field.to_string(),
                path: self.path.clone(),
            })
    }
}

/// Load the manifest at `path`.
pub fn load_manifest(path: &Path) -> Result<PackageManifest, ManifestError> {
    PackageManifest::load(path)
}

/// Read a JSON file and deserialize it into `T`.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, ManifestError> {
    let content = read_manifest_text(path)?;

    serde_json::from_str(&content).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn read_manifest_text(path: &Path) -> Result<String, ManifestError> {
    std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ProjectFixture;

    #[test]
    fn test_parse_main_only() {
        let manifest =
            PackageManifest::parse(r#"{"main": "index.js"}"#, Path::new("package.json")).unwrap();

        assert_eq!(manifest.main(), Some("index.js"));
        assert_eq!(manifest.name(), None);
        assert_eq!(manifest.other_keys().count(), 0);
    }

    #[test]
    fn test_parse_keeps_unknown_fields() {
        let content = r#"
{
  "name": "hello-world",
  "version": "1.2.3",
  "main": "app/app.js",
  "dependencies": { "@nativescript/core": "~8.0.0" },
  "private": true
}
"#;
        let manifest = PackageManifest::parse(content, Path::new("package.json")).unwrap();

        assert_eq!(manifest.name(), Some("hello-world"));
        assert_eq!(manifest.version().unwrap(), Some(Version::new(1, 2, 3)));
        assert_eq!(
            manifest.other_keys().collect::<Vec<_>>(),
            vec!["dependencies", "private"]
        );
        assert_eq!(manifest.field("private"), Some(&Value::Bool(true)));
        assert_eq!(
            manifest.field("dependencies").unwrap()["@nativescript/core"],
            "~8.0.0"
        );
        assert_eq!(manifest.field("main"), Some(&Value::from("app/app.js")));
        assert_eq!(manifest.field("scripts"), None);
    }

    #[test]
    fn test_parse_truncated_fails() {
        let err = PackageManifest::parse(r#"{"main": "index"#, Path::new("/p/package.json"))
            .unwrap_err();
        match err {
            ManifestError::Parse { path, .. } => assert_eq!(path, Path::new("/p/package.json")),
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_non_object_fails() {
        for content in ["[1, 2]", "\"index.js\"", "null", "42"] {
            let err = PackageManifest::parse(content, Path::new("package.json")).unwrap_err();
            assert!(matches!(err, ManifestError::Parse { .. }), "{content}");
        }
    }

    #[test]
    fn test_non_string_known_fields_still_load() {
        let manifest = PackageManifest::parse(
            r#"{"name": "app", "version": 2, "main": "index.js"}"#,
            Path::new("package.json"),
        )
        .unwrap();

        assert_eq!(manifest.main(), Some("index.js"));
        assert_eq!(manifest.version_str(), None);
        assert_eq!(manifest.version().unwrap(), None);
        assert_eq!(manifest.field("version"), Some(&Value::from(2)));

        let manifest =
            PackageManifest::parse(r#"{"main": 7}"#, Path::new("package.json")).unwrap();
        assert_eq!(manifest.main(), None);
        assert_eq!(manifest.field("main"), Some(&Value::from(7)));
    }

    #[test]
    fn test_null_known_field_is_kept() {
        let content = r#"{"main":null,"name":"app"}"#;
        let manifest = PackageManifest::parse(content, Path::new("package.json")).unwrap();

        assert_eq!(manifest.main(), None);
        assert_eq!(manifest.field("main"), Some(&Value::Null));
        assert_eq!(serde_json::to_string(&manifest).unwrap(), content);
    }

    #[test]
    fn test_invalid_version() {
        let manifest =
            PackageManifest::parse(r#"{"version": "latest"}"#, Path::new("package.json")).unwrap();

        assert!(matches!(
            manifest.version(),
            Err(ManifestError::InvalidVersion { .. })
        ));
    }

    #[test]
    fn test_load_from_disk() {
        let fx = ProjectFixture::new().manifest("app", r#"{"main": "index.js"}"#);

        let manifest = load_manifest(&fx.path("app/package.json")).unwrap();
        assert_eq!(manifest.main(), Some("index.js"));
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let fx = ProjectFixture::new();

        let err = load_manifest(&fx.path("package.json")).unwrap_err();
        assert!(matches!(err, ManifestError::Read { .. }));
    }

    #[test]
    fn test_load_unreadable_manifest_is_read_error() {
        let fx = ProjectFixture::new().dir("app/package.json");

        let err = load_manifest(&fx.path("app/package.json")).unwrap_err();
        match err {
            ManifestError::Read { path, .. } => assert_eq!(path, fx.path("app/package.json")),
            other => panic!("expected Read, got {other:?}"),
        }
    }

    #[test]
    fn test_require_field_present_but_null() {
        let located = LocatedManifest {
            path: PathBuf::from("/app/package.json"),
            root: PathBuf::from("/app"),
            manifest: PackageManifest::parse(r#"{"main": null}"#, Path::new("package.json"))
                .unwrap(),
        };

        assert_eq!(located.require_field("main").unwrap(), Value::Null);
        assert!(matches!(
            located.require_field("name"),
            Err(ManifestError::FieldMissing { .. })
        ));
    }

    #[test]
    fn test_read_json_file_generic() {
        #[derive(Deserialize)]
        struct Scripts {
            scripts: std::collections::BTreeMap<String, String>,
        }

        let fx = ProjectFixture::new().file("package.json", r#"{"scripts": {"build": "tsc"}}"#);

        let parsed: Scripts = read_json_file(&fx.path("package.json")).unwrap();
        assert_eq!(parsed.scripts["build"], "tsc");
    }
}
