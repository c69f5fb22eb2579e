//! File system abstraction
//!
//! The updater only ever needs three operations, so the trait stays
//! narrow: read a page, write it back atomically, check existence.
//! `LocalFs` is the real implementation; tests inject `MockFileSystem`.

use std::io::Write;
use std::path::Path;

use crate::error::{StampError, StampResult};

/// Abstract file system interface
pub trait FileSystem {
    /// Read file content as UTF-8
    fn read_to_string(&self, path: &Path) -> StampResult<String>;

    /// Write file content atomically (tempfile + rename)
    fn write_atomic(&self, path: &Path, content: &str) -> StampResult<()>;

    /// Check if file exists
    fn exists(&self, path: &Path) -> bool;
}

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read_to_string(&self, path: &Path) -> StampResult<String> {
        std::fs::read_to_string(path).map_err(Into::into)
    }

    fn write_atomic(&self, path: &Path, content: &str) -> StampResult<()> {
        let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
        let mut tmp = match dir {
            Some(dir) => tempfile::NamedTempFile::new_in(dir)?,
            None => tempfile::NamedTempFile::new()?,
        };
        tmp.write_all(content.as_bytes())?;
        tmp.persist(path).map_err(|e| StampError::Io(e.error))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Mock file system for testing
///
/// Uses `Arc<Mutex<>>` internally so it can be cloned and shared.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MockFileSystem {
    pub files: std::sync::Arc<
        std::sync::Mutex<std::collections::HashMap<std::path::PathBuf, String>>,
    >,
}

#[cfg(test)]
impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(std::path::PathBuf::from(path), content.to_string());
        self
    }

    pub fn content(&self, path: &str) -> Option<String> {
        self.files
            .lock()
            .unwrap()
            .get(std::path::Path::new(path))
            .cloned()
    }
}

#[cfg(test)]
impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> StampResult<String> {
        let files = self.files.lock().unwrap();
        files.get(path).cloned().ok_or_else(|| {
            StampError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "File not found",
            ))
        })
    }

    fn write_atomic(&self, path: &Path, content: &str) -> StampResult<()> {
        let mut files = self.files.lock().unwrap();
        files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let files = self.files.lock().unwrap();
        files.contains_key(path)
    }
}
