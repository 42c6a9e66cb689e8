//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for
//! every docsync operation. It owns the store and the effective
//! configuration, dispatches to `commands/*.rs`, and returns structured
//! [`CmdResult`](crate::commands::CmdResult) values. It never prints.
//!
//! `DocsyncApi<S: DocStore>` is generic over the storage backend:
//! - Production: `DocsyncApi<FileStore>`
//! - Testing: `DocsyncApi<InMemoryStore>`

use crate::commands;
use crate::config::DocsyncConfig;
use crate::error::Result;
use crate::model::MatchMode;
use crate::store::DocStore;
use std::path::PathBuf;

pub use crate::commands::{CmdMessage, CmdResult, EntryReport, EntryStatus, MessageLevel};

pub struct DocsyncApi<S: DocStore> {
    store: S,
    config: DocsyncConfig,
    root: PathBuf,
}

impl<S: DocStore> DocsyncApi<S> {
    /// `root` is the directory `init` writes its config into.
    pub fn new(store: S, config: DocsyncConfig, root: PathBuf) -> Self {
        Self {
            store,
            config,
            root,
        }
    }

    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.config.match_mode = mode;
        self
    }

    pub fn config_ref(&self) -> &DocsyncConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn sync(&mut self) -> Result<CmdResult> {
        commands::sync::run(&mut self.store, &self.config)
    }

    pub fn check(&self) -> Result<CmdResult> {
        commands::check::run(&self.store, &self.config)
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.config)
    }

    pub fn config(&self) -> Result<CmdResult> {
        commands::config::run(&self.config)
    }

    pub fn init(&self, force: bool) -> Result<CmdResult> {
        commands::init::run(&self.root, force)
    }
}
