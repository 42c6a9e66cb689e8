use crate::commands::{CmdMessage, CmdResult, EntryReport};
use crate::config::DocsyncConfig;
use crate::error::Result;

pub fn run(config: &DocsyncConfig) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for entry in &config.entries {
        result.add_report(EntryReport {
            source: entry.source.clone(),
            readme: config.readme_path(entry),
            references: 0,
            status: None,
        });
    }

    if result.reports.is_empty() {
        result.add_message(CmdMessage::info("No entries configured."));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entry;
    use std::path::PathBuf;

    #[test]
    fn test_list_resolves_readme_paths() {
        let config = DocsyncConfig {
            apps_dir: PathBuf::from("out"),
            entries: vec![Entry::new("GUID-1.md", "one")],
            ..DocsyncConfig::default()
        };

        let result = run(&config).unwrap();
        assert_eq!(result.reports.len(), 1);
        assert_eq!(
            result.reports[0].readme,
            PathBuf::from("out").join("one").join("readme.md")
        );
        assert!(result.reports[0].status.is_none());
    }

    #[test]
    fn test_list_empty() {
        let config = DocsyncConfig {
            entries: vec![],
            ..DocsyncConfig::default()
        };
        let result = run(&config).unwrap();
        assert!(result.reports.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
