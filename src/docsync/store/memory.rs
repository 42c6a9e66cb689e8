use super::DocStore;
use crate::error::{DocsyncError, Result};
use std::collections::{HashMap, HashSet};
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct InMemoryStore {
    files: HashMap<PathBuf, String>,
    dirs: HashSet<PathBuf>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        self.files.insert(path.into(), text.into());
        self
    }

    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.dirs.insert(path.into());
        self
    }

    pub fn file(&self, path: &Path) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }
}

impl DocStore for InMemoryStore {
    fn read_source(&self, path: &Path) -> Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| DocsyncError::SourceRead {
                path: path.to_path_buf(),
                source: Error::new(ErrorKind::NotFound, "No such file"),
            })
    }

    fn read_readme(&self, path: &Path) -> Result<Option<String>> {
        Ok(self.files.get(path).cloned())
    }

    fn write_readme(&mut self, path: &Path, text: &str) -> Result<()> {
        let parent_exists = path
            .parent()
            .map(|p| p.as_os_str().is_empty() || self.dirs.contains(p))
            .unwrap_or(true);
        if !parent_exists {
            return Err(DocsyncError::DestinationWrite {
                path: path.to_path_buf(),
                source: Error::new(ErrorKind::NotFound, "No such directory"),
            });
        }
        self.files.insert(path.to_path_buf(), text.to_string());
        Ok(())
    }
}
