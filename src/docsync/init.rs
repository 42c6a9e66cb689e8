use crate::api::DocsyncApi;
use crate::config::DocsyncConfig;
use crate::error::Result;
use crate::store::fs::FileStore;
use std::path::Path;
use tracing::debug;

/// Builds the production API rooted at `dir`.
///
/// Sources, the apps directory and `docsync.json` are all resolved relative
/// to `dir`. A malformed config is an error, never a fallback to defaults.
pub fn initialize(dir: &Path) -> Result<DocsyncApi<FileStore>> {
    let config = DocsyncConfig::load(dir)?;
    debug!(
        dir = %dir.display(),
        entries = config.entries.len(),
        match_mode = config.match_mode.as_str(),
        "loaded config"
    );

    let store = FileStore::new(dir.to_path_buf());
    Ok(DocsyncApi::new(store, config, dir.to_path_buf()))
}
