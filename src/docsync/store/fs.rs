use super::DocStore;
use crate::error::{DocsyncError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl DocStore for FileStore {
    fn read_source(&self, path: &Path) -> Result<String> {
        fs::read_to_string(self.resolve(path)).map_err(|source| DocsyncError::SourceRead {
            path: path.to_path_buf(),
            source,
        })
    }

    fn read_readme(&self, path: &Path) -> Result<Option<String>> {
        match fs::read_to_string(self.resolve(path)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DocsyncError::Io(e)),
        }
    }

    fn write_readme(&mut self, path: &Path, text: &str) -> Result<()> {
        fs::write(self.resolve(path), text).map_err(|source| DocsyncError::DestinationWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}
