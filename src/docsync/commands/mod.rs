use crate::config::DocsyncConfig;
use std::path::PathBuf;

pub mod check;
pub mod config;
pub mod helpers;
pub mod init;
pub mod list;
pub mod sync;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// State of an entry's readme relative to its fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    /// The readme was (re)written.
    Written,
    /// The readme already matches the rewritten fragment.
    UpToDate,
    /// The readme exists but differs.
    Stale,
    /// The readme does not exist yet.
    Missing,
}

#[derive(Debug, Clone)]
pub struct EntryReport {
    pub source: PathBuf,
    pub readme: PathBuf,
    /// Distinct image references rewritten. Zero for `list`.
    pub references: usize,
    /// `None` when the entry was only listed.
    pub status: Option<EntryStatus>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub reports: Vec<EntryReport>,
    pub config: Option<DocsyncConfig>,
    pub config_path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn add_report(&mut self, report: EntryReport) {
        self.reports.push(report);
    }

    pub fn with_config(mut self, config: DocsyncConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Entries whose readme is stale or missing.
    pub fn outdated(&self) -> impl Iterator<Item = &EntryReport> {
        self.reports
            .iter()
            .filter(|r| matches!(r.status, Some(EntryStatus::Stale | EntryStatus::Missing)))
    }
}
