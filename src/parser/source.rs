//! Content source abstraction for reading the data file from disk or memory.

use crate::error::{PlotError, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::collections::HashMap;

/// Trait for abstracting file I/O (filesystem vs. in-memory source).
pub trait ContentSource {
    /// Read a file at the given path and return its content as a string.
    fn read_to_string(&mut self, path: &Utf8Path) -> Result<String>;
}

/// Reads files directly from the local filesystem.
pub struct FsSource;

impl ContentSource for FsSource {
    fn read_to_string(&mut self, path: &Utf8Path) -> Result<String> {
        std::fs::read_to_string(path.as_std_path()).map_err(|e| PlotError::io(path, e))
    }
}

/// Serves files from a map of path to content. Useful for tests and for
/// data that is already in memory.
#[derive(Debug, Default, Clone)]
pub struct MemSource {
    files: HashMap<Utf8PathBuf, String>,
}

impl MemSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<Utf8PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }
}

impl ContentSource for MemSource {
    fn read_to_string(&mut self, path: &Utf8Path) -> Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            PlotError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "not in memory source"),
            )
        })
    }
}
