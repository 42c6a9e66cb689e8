//! # Storage Layer
//!
//! Commands never touch the filesystem directly; they go through the
//! [`DocStore`] trait so the rewrite logic can be exercised in memory.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage rooted at the working directory.
//!   Relative paths are resolved against the root. Directories are never
//!   created, so writing into a missing application folder fails.
//!
//! - [`memory::InMemoryStore`]: Files and directories held in maps for tests.
//!   Mirrors the filesystem rule that a readme can only be written into a
//!   directory that already exists.

use crate::error::Result;
use std::path::Path;

pub mod fs;
pub mod memory;

/// Text I/O needed by the commands.
pub trait DocStore {
    /// Read a fragment in full. A missing or unreadable file is an error.
    fn read_source(&self, path: &Path) -> Result<String>;

    /// Read an existing readme, `None` if it does not exist yet.
    fn read_readme(&self, path: &Path) -> Result<Option<String>>;

    /// Create or truncate a readme. Parent directories must already exist.
    fn write_readme(&mut self, path: &Path, text: &str) -> Result<()>;
}
