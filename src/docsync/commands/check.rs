use crate::commands::{CmdMessage, CmdResult, EntryReport, EntryStatus};
use crate::config::DocsyncConfig;
use crate::error::Result;
use crate::store::DocStore;

use super::helpers::render_entry;

/// Compares each readme with what `sync` would write, without writing anything.
pub fn run<S: DocStore>(store: &S, config: &DocsyncConfig) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for entry in &config.entries {
        let (readme, rewrite) = render_entry(store, config, entry)?;
        let status = match store.read_readme(&readme)? {
            None => EntryStatus::Missing,
            Some(current) if current == rewrite.text => EntryStatus::UpToDate,
            Some(_) => EntryStatus::Stale,
        };

        result.add_report(EntryReport {
            source: entry.source.clone(),
            readme,
            references: rewrite.references.len(),
            status: Some(status),
        });
    }

    let outdated = result.outdated().count();
    if outdated == 0 {
        result.add_message(CmdMessage::success(format!(
            "All {} readme(s) up to date",
            result.reports.len()
        )));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "{} of {} readme(s) out of date",
            outdated,
            result.reports.len()
        )));
    }
    Ok(result)
}
