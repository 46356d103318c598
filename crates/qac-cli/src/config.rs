//! # CLI Configuration
//!
//! Store identity for new sessions. Loaded from an optional YAML file, then
//! overridden by `QAC_STORE_ID` and `QAC_STORE_NAME`.
//!
//! ```yaml
//! store_id: "32002"
//! store_name: Delhi Store
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use qac_core::StoreInfo;

pub const STORE_ID_ENV: &str = "QAC_STORE_ID";
pub const STORE_NAME_ENV: &str = "QAC_STORE_NAME";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub store_id: String,
    pub store_name: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        let store = StoreInfo::default();
        Self {
            store_id: store.id,
            store_name: store.name,
        }
    }
}

impl CliConfig {
    /// Load from `path` (when given) and the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        tracing::debug!(
            store_id = %config.store_id,
            store_name = %config.store_name,
            "configuration loaded"
        );
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file: {}", path.display()))?;
        Self::from_yaml_str(&content).with_context(|| format!("invalid YAML in {}", path.display()))
    }

    /// Parse YAML. Missing keys keep their defaults; an empty document is
    /// the default configuration.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Override fields from `lookup`. Blank values are ignored.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(id) = lookup(STORE_ID_ENV).filter(|v| !v.trim().is_empty()) {
            self.store_id = id;
        }
        if let Some(name) = lookup(STORE_NAME_ENV).filter(|v| !v.trim().is_empty()) {
            self.store_name = name;
        }
    }

    pub fn store_info(&self) -> StoreInfo {
        StoreInfo::new(self.store_id.as_str(), self.store_name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_is_delhi_store() {
        let config = CliConfig::default();
        assert_eq!(config.store_info(), StoreInfo::new("32002", "Delhi Store"));
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = CliConfig::from_yaml_str("store_name: Karachi Store\n").unwrap();
        assert_eq!(config.store_id, "32002");
        assert_eq!(config.store_name, "Karachi Store");
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(CliConfig::from_yaml_str("  \n").unwrap(), CliConfig::default());
    }

    #[test]
    fn malformed_yaml_errors() {
        assert!(CliConfig::from_yaml_str("store_id: [unclosed").is_err());
    }

    #[test]
    fn env_overrides_file_values() {
        let mut config =
            CliConfig::from_yaml_str("store_id: \"100\"\nstore_name: Lahore\n").unwrap();
        config.apply_env_overrides(|key| match key {
            STORE_ID_ENV => Some("200".into()),
            STORE_NAME_ENV => Some("   ".into()),
            _ => None,
        });
        assert_eq!(config.store_id, "200");
        assert_eq!(config.store_name, "Lahore");
    }

    #[test]
    fn reads_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "store_id: \"55\"").unwrap();
        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.store_id, "55");
        assert_eq!(config.store_name, "Delhi Store");
    }

    #[test]
    fn missing_config_file_errors() {
        let err = CliConfig::from_file(Path::new("/nonexistent/qac.yaml")).unwrap_err();
        assert!(format!("{err:#}").contains("reading config file"));
    }
}
