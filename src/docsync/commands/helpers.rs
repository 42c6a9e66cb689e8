use crate::config::DocsyncConfig;
use crate::error::Result;
use crate::model::Entry;
use crate::rewrite::{rewrite_image_refs, Rewrite};
use crate::store::DocStore;
use std::path::PathBuf;
use tracing::debug;

/// Reads an entry's fragment and rewrites its image references.
/// Returns the readme path together with the rewritten document.
pub fn render_entry<S: DocStore>(
    store: &S,
    config: &DocsyncConfig,
    entry: &Entry,
) -> Result<(PathBuf, Rewrite)> {
    let readme = config.readme_path(entry);
    let text = store.read_source(&entry.source)?;
    let rewrite = rewrite_image_refs(&text, &config.path_prefix, config.match_mode);

    for reference in &rewrite.references {
        debug!(source = %entry.source.display(), reference = %reference, "rewriting image reference");
    }

    Ok((readme, rewrite))
}
