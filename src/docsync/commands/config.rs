use crate::commands::CmdResult;
use crate::config::DocsyncConfig;
use crate::error::Result;

pub fn run(config: &DocsyncConfig) -> Result<CmdResult> {
    Ok(CmdResult::default().with_config(config.clone()))
}
