use crate::commands::{CmdMessage, CmdResult, EntryReport, EntryStatus};
use crate::config::DocsyncConfig;
use crate::error::Result;
use crate::store::DocStore;
use tracing::{debug, info};

use super::helpers::render_entry;

/// Copies every entry's fragment into its readme, in order.
///
/// The first failure aborts the run. Readmes written before it stay on disk,
/// entries after it are not touched.
pub fn run<S: DocStore>(store: &mut S, config: &DocsyncConfig) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for entry in &config.entries {
        debug!(source = %entry.source.display(), "processing entry");
        let (readme, rewrite) = render_entry(&*store, config, entry)?;
        store.write_readme(&readme, &rewrite.text)?;
        info!(readme = %readme.display(), references = rewrite.references.len(), "wrote readme");

        result.add_report(EntryReport {
            source: entry.source.clone(),
            readme,
            references: rewrite.references.len(),
            status: Some(EntryStatus::Written),
        });
    }

    result.add_message(CmdMessage::success(format!(
        "Wrote {} readme(s)",
        result.reports.len()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocsyncError;
    use crate::model::Entry;
    use crate::store::memory::InMemoryStore;
    use std::path::{Path, PathBuf};

    fn config_with(entries: Vec<Entry>) -> DocsyncConfig {
        DocsyncConfig {
            entries,
            ..DocsyncConfig::default()
        }
    }

    fn apps(sub: &str) -> PathBuf {
        Path::new("..").join("apps").join(sub)
    }

    #[test]
    fn test_sync_rewrites_and_writes_readme() {
        let mut store = InMemoryStore::new()
            .with_file("GUID-1.md", "![a](GUID-IMG.png)\n")
            .with_dir(apps("one"));
        let config = config_with(vec![Entry::new("GUID-1.md", "one")]);

        let result = run(&mut store, &config).unwrap();

        assert_eq!(
            store.file(&apps("one").join("readme.md")),
            Some("![a](../../docs/GUID-IMG.png)\n")
        );
        assert_eq!(result.reports.len(), 1);
        assert_eq!(result.reports[0].references, 1);
        assert_eq!(result.reports[0].status, Some(EntryStatus::Written));
    }

    #[test]
    fn test_sync_without_references_copies_verbatim() {
        let text = "# Plain\n\nNothing to see.\n";
        let mut store = InMemoryStore::new()
            .with_file("GUID-1.md", text)
            .with_dir(apps("one"));
        let config = config_with(vec![Entry::new("GUID-1.md", "one")]);

        run(&mut store, &config).unwrap();
        assert_eq!(store.file(&apps("one").join("readme.md")), Some(text));
    }

    #[test]
    fn test_sync_overwrites_existing_readme() {
        let mut store = InMemoryStore::new()
            .with_file("GUID-1.md", "new")
            .with_file(apps("one").join("readme.md"), "old")
            .with_dir(apps("one"));
        let config = config_with(vec![Entry::new("GUID-1.md", "one")]);

        run(&mut store, &config).unwrap();
        assert_eq!(store.file(&apps("one").join("readme.md")), Some("new"));
    }

    #[test]
    fn test_missing_source_halts_remaining_entries() {
        let mut store = InMemoryStore::new()
            .with_file("GUID-1.md", "first")
            .with_file("GUID-3.md", "third")
            .with_dir(apps("one"))
            .with_dir(apps("two"))
            .with_dir(apps("three"));
        let config = config_with(vec![
            Entry::new("GUID-1.md", "one"),
            Entry::new("GUID-2.md", "two"),
            Entry::new("GUID-3.md", "three"),
        ]);

        let err = run(&mut store, &config).unwrap_err();

        assert!(matches!(err, DocsyncError::SourceRead { .. }));
        assert_eq!(store.file(&apps("one").join("readme.md")), Some("first"));
        assert_eq!(store.file(&apps("two").join("readme.md")), None);
        assert_eq!(store.file(&apps("three").join("readme.md")), None);
    }

    #[test]
    fn test_missing_destination_directory_is_fatal() {
        let mut store = InMemoryStore::new().with_file("GUID-1.md", "text");
        let config = config_with(vec![Entry::new("GUID-1.md", "nowhere")]);

        let err = run(&mut store, &config).unwrap_err();
        assert!(matches!(err, DocsyncError::DestinationWrite { .. }));
    }

    #[test]
    fn test_same_destination_last_entry_wins() {
        let mut store = InMemoryStore::new()
            .with_file("GUID-1.md", "first")
            .with_file("GUID-2.md", "second")
            .with_dir(apps("one"));
        let config = config_with(vec![
            Entry::new("GUID-1.md", "one"),
            Entry::new("GUID-2.md", "one"),
        ]);

        run(&mut store, &config).unwrap();
        assert_eq!(store.file(&apps("one").join("readme.md")), Some("second"));
    }
}
