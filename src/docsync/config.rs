use crate::error::{DocsyncError, Result};
use crate::model::{builtin_entries, Entry, MatchMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "docsync.json";
const DEFAULT_PATH_PREFIX: &str = "../../docs/";
const DEFAULT_README_NAME: &str = "readme.md";

/// Configuration for docsync, stored in docsync.json next to the fragments
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocsyncConfig {
    /// Prepended to every image reference
    #[serde(default = "default_path_prefix")]
    pub path_prefix: String,

    /// Directory holding the application folders, relative to the working directory
    #[serde(default = "default_apps_dir")]
    pub apps_dir: PathBuf,

    /// File name written inside each application folder
    #[serde(default = "default_readme_name")]
    pub readme_name: String,

    #[serde(default)]
    pub match_mode: MatchMode,

    #[serde(default = "builtin_entries")]
    pub entries: Vec<Entry>,
}

fn default_path_prefix() -> String {
    DEFAULT_PATH_PREFIX.to_string()
}

fn default_apps_dir() -> PathBuf {
    Path::new("..").join("apps")
}

fn default_readme_name() -> String {
    DEFAULT_README_NAME.to_string()
}

impl Default for DocsyncConfig {
    fn default() -> Self {
        Self {
            path_prefix: default_path_prefix(),
            apps_dir: default_apps_dir(),
            readme_name: default_readme_name(),
            match_mode: MatchMode::default(),
            entries: builtin_entries(),
        }
    }
}

impl DocsyncConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DocsyncError::Io)?;
        let config: DocsyncConfig =
            serde_json::from_str(&content).map_err(DocsyncError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory. The directory must already exist.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<PathBuf> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(DocsyncError::Serialization)?;
        fs::write(&config_path, content).map_err(DocsyncError::Io)?;
        Ok(config_path)
    }

    pub fn validate(&self) -> Result<()> {
        if self.readme_name.is_empty() {
            return Err(DocsyncError::Config("readme_name cannot be empty".into()));
        }
        if let Some(entry) = self
            .entries
            .iter()
            .find(|e| e.source.as_os_str().is_empty())
        {
            return Err(DocsyncError::Config(format!(
                "entry for {} has no source",
                entry.destination.display()
            )));
        }
        Ok(())
    }

    pub fn readme_path(&self, entry: &Entry) -> PathBuf {
        entry.readme_path(&self.apps_dir, &self.readme_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = DocsyncConfig::default();
        assert_eq!(config.path_prefix, "../../docs/");
        assert_eq!(config.readme_name, "readme.md");
        assert_eq!(config.match_mode, MatchMode::Shortest);
        assert_eq!(config.entries.len(), 8);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = DocsyncConfig::load(temp.path()).unwrap();
        assert_eq!(config, DocsyncConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();

        let config = DocsyncConfig {
            path_prefix: "../shared/".to_string(),
            match_mode: MatchMode::Longest,
            entries: vec![Entry::new("GUID-1.md", "one")],
            ..DocsyncConfig::default()
        };
        config.save(temp.path()).unwrap();

        let loaded = DocsyncConfig::load(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{ "apps_dir": "out" }"#,
        )
        .unwrap();

        let loaded = DocsyncConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.apps_dir, PathBuf::from("out"));
        assert_eq!(loaded.path_prefix, "../../docs/");
        assert_eq!(loaded.entries, builtin_entries());
    }

    #[test]
    fn test_malformed_config_is_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "{ not json").unwrap();

        let err = DocsyncConfig::load(temp.path()).unwrap_err();
        assert!(matches!(err, DocsyncError::Serialization(_)));
    }

    #[test]
    fn test_empty_readme_name_rejected() {
        let config = DocsyncConfig {
            readme_name: String::new(),
            ..DocsyncConfig::default()
        };
        assert!(matches!(config.validate(), Err(DocsyncError::Config(_))));
    }
}
