//! Store configuration.
//!
//! Resolves where the blob file lives and which key the collection is
//! stored under. Precedence: explicit path, then environment, then the
//! platform default supplied by the caller.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::storage::STORAGE_KEY;
use crate::util::normalize_text_option;
use crate::{Error, Result};

pub const DATA_PATH_ENV: &str = "WORKTRIP_DATA_PATH";
pub const STORAGE_KEY_ENV: &str = "WORKTRIP_STORAGE_KEY";
pub const DEFAULT_FILE_NAME: &str = "storage.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Blob file location
    pub data_path: PathBuf,
    /// Key the collection is written under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_storage_key() -> String {
    STORAGE_KEY.to_string()
}

impl StoreConfig {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            storage_key: default_storage_key(),
        }
    }

    /// Default blob file under a platform data directory
    pub fn default_path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("worktrip").join(DEFAULT_FILE_NAME)
    }

    /// Resolve configuration from the process environment.
    pub fn from_env(flag_path: Option<PathBuf>, default_path: Option<PathBuf>) -> Result<Self> {
        Self::resolve(flag_path, default_path, |name| std::env::var(name).ok())
    }

    /// Resolve configuration with an explicit variable lookup.
    pub fn resolve(
        flag_path: Option<PathBuf>,
        default_path: Option<PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let data_path = flag_path
            .filter(|path| !path.as_os_str().is_empty())
            .or_else(|| normalize_text_option(lookup(DATA_PATH_ENV)).map(PathBuf::from))
            .or(default_path)
            .ok_or_else(|| {
                Error::InvalidInput(format!(
                    "No data path available; pass --data-path or set {DATA_PATH_ENV}"
                ))
            })?;

        let storage_key =
            normalize_text_option(lookup(STORAGE_KEY_ENV)).unwrap_or_else(default_storage_key);

        Ok(Self {
            data_path,
            storage_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn flag_path_wins_over_env_and_default() {
        let config = StoreConfig::resolve(
            Some(PathBuf::from("/flag.json")),
            Some(PathBuf::from("/default.json")),
            env(&[(DATA_PATH_ENV, "/env.json")]),
        )
        .unwrap();
        assert_eq!(config.data_path, PathBuf::from("/flag.json"));
        assert_eq!(config.storage_key, STORAGE_KEY);
    }

    #[test]
    fn env_path_wins_over_default() {
        let config = StoreConfig::resolve(
            None,
            Some(PathBuf::from("/default.json")),
            env(&[(DATA_PATH_ENV, " /env.json "), (STORAGE_KEY_ENV, "@lists")]),
        )
        .unwrap();
        assert_eq!(config.data_path, PathBuf::from("/env.json"));
        assert_eq!(config.storage_key, "@lists");
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let config = StoreConfig::resolve(
            None,
            Some(PathBuf::from("/default.json")),
            env(&[(DATA_PATH_ENV, "  "), (STORAGE_KEY_ENV, "")]),
        )
        .unwrap();
        assert_eq!(config, StoreConfig::new("/default.json"));
    }

    #[test]
    fn missing_path_is_an_error() {
        let result = StoreConfig::resolve(None, None, env(&[]));
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn default_path_layout() {
        assert_eq!(
            StoreConfig::default_path_in(Path::new("/data")),
            PathBuf::from("/data/worktrip/storage.json")
        );
    }

    #[test]
    fn storage_key_defaults_when_deserialized() {
        let config: StoreConfig = serde_json::from_str(r#"{"data_path":"/x.json"}"#).unwrap();
        assert_eq!(config.storage_key, STORAGE_KEY);
    }
}
