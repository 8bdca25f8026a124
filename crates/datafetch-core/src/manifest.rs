use crate::error::{FetchError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

pub const DEFAULT_MANIFEST: &str = "sources.json";
pub const SETTINGS_KEY: &str = "_settings";
pub const RESERVED_PREFIX: char = '_';

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_14_4) \
     AppleWebKit/605.1.15 (KHTML, like Gecko) Version/12.1 Safari/605.1.15";

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    #[serde(default = "default_folder")]
    pub folder: String,
    /// Fail the dataset when a subprocess exits non-zero.
    #[serde(default)]
    pub strict: bool,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_pager")]
    pub pager: String,
}

fn default_folder() -> String {
    "datasets".to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_pager() -> String {
    "less".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            folder: default_folder(),
            strict: false,
            user_agent: default_user_agent(),
            pager: default_pager(),
        }
    }
}

// ---------------------------------------------------------------------------
// Manifest
// ---------------------------------------------------------------------------

/// A named dataset and its raw, not yet interpreted, action list.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub name: String,
    pub actions: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    pub settings: Settings,
    /// Datasets in document order. Reserved keys are already filtered out.
    pub datasets: Vec<Dataset>,
}

impl Manifest {
    /// Load a manifest from disk. `.yaml`/`.yml` files are read as YAML,
    /// anything else as JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );
        let value: Value = if is_yaml {
            serde_yaml::from_str(&data)?
        } else {
            serde_json::from_str(&data)?
        };
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(FetchError::InvalidManifest(
                "top level must be an object of datasets".into(),
            ));
        };

        let mut settings = Settings::default();
        let mut datasets = Vec::new();
        for (key, value) in map {
            if key == SETTINGS_KEY {
                settings = match value {
                    Value::Null => Settings::default(),
                    other => serde_json::from_value(other)?,
                };
                continue;
            }
            if is_reserved(&key) {
                continue;
            }
            datasets.push(Dataset {
                name: key,
                actions: value,
            });
        }
        Ok(Self { settings, datasets })
    }

    /// Output root, resolved against `base` unless the folder is absolute.
    pub fn output_root(&self, base: &Path) -> PathBuf {
        base.join(&self.settings.folder)
    }
}

pub fn is_reserved(key: &str) -> bool {
    key.starts_with(RESERVED_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn settings_default_when_absent() {
        let m = Manifest::from_value(json!({"ds": [{"message": "hi"}]})).unwrap();
        assert_eq!(m.settings, Settings::default());
        assert_eq!(m.settings.folder, "datasets");
        assert_eq!(m.datasets.len(), 1);
    }

    #[test]
    fn settings_folder_override() {
        let m = Manifest::from_value(json!({"_settings": {"folder": "out"}})).unwrap();
        assert_eq!(m.settings.folder, "out");
        assert!(!m.settings.strict);
        assert_eq!(m.settings.pager, "less");
        assert!(m.datasets.is_empty());
    }

    #[test]
    fn reserved_keys_are_skipped() {
        let m = Manifest::from_value(json!({
            "_comment": "ignored",
            "a": [],
            "_b": [],
        }))
        .unwrap();
        let names: Vec<_> = m.datasets.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["a"]);
    }

    #[test]
    fn datasets_keep_document_order() {
        let m: Manifest =
            Manifest::from_value(serde_json::from_str(r#"{"zeta": [], "alpha": [], "mid": []}"#).unwrap())
                .unwrap();
        let names: Vec<_> = m.datasets.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn non_object_manifest_rejected() {
        let err = Manifest::from_value(json!([1, 2])).unwrap_err();
        assert!(matches!(err, FetchError::InvalidManifest(_)));
    }

    #[test]
    fn load_yaml_manifest() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sources.yaml");
        std::fs::write(
            &path,
            "_settings:\n  folder: data\n  strict: true\nsecond:\n  - message: hi\nfirst:\n  - cite: paper\n",
        )
        .unwrap();
        let m = Manifest::load(&path).unwrap();
        assert_eq!(m.settings.folder, "data");
        assert!(m.settings.strict);
        let names: Vec<_> = m.datasets.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["second", "first"]);
    }

    #[test]
    fn output_root_respects_absolute_folder() {
        let dir = TempDir::new().unwrap();
        let abs = dir.path().join("abs");
        let m = Manifest::from_value(json!({"_settings": {"folder": abs.to_str().unwrap()}}))
            .unwrap();
        assert_eq!(m.output_root(Path::new("/elsewhere")), abs);

        let rel = Manifest::from_value(json!({})).unwrap();
        assert_eq!(rel.output_root(Path::new("/base")), Path::new("/base/datasets"));
    }
}
