use crate::commands::{CmdMessage, CmdResult};
use crate::config::{DocsyncConfig, CONFIG_FILENAME};
use crate::error::{DocsyncError, Result};
use std::path::Path;

/// Writes a config holding the defaults, so the entry table can be edited.
pub fn run(dir: &Path, force: bool) -> Result<CmdResult> {
    let target = dir.join(CONFIG_FILENAME);
    if target.exists() && !force {
        return Err(DocsyncError::Api(format!(
            "{} already exists (use --force to overwrite)",
            target.display()
        )));
    }

    let config = DocsyncConfig::default();
    let path = config.save(dir)?;

    let mut result = CmdResult::default()
        .with_config(config)
        .with_config_path(path.clone());
    result.add_message(CmdMessage::success(format!("Wrote {}", path.display())));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_defaults() {
        let temp = TempDir::new().unwrap();
        run(temp.path(), false).unwrap();

        let loaded = DocsyncConfig::load(temp.path()).unwrap();
        assert_eq!(loaded, DocsyncConfig::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "{}").unwrap();

        assert!(run(temp.path(), false).is_err());
        assert_eq!(
            fs::read_to_string(temp.path().join(CONFIG_FILENAME)).unwrap(),
            "{}"
        );
    }

    #[test]
    fn test_init_force_overwrites() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "{}").unwrap();

        run(temp.path(), true).unwrap();
        let loaded = DocsyncConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.entries.len(), 8);
    }
}
