//! File materialization seam
//!
//! Generated unity files are durably written through the [`TextFileWriter`]
//! trait. [`DiskWriter`] is the production implementation; [`MemoryWriter`]
//! captures output in memory for tests and for the CLI dry-run mode.

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Durably materializes generated text files
pub trait TextFileWriter {
    /// Write `content` to `path`, creating parent directories as needed.
    ///
    /// A failure here aborts the whole aggregation run.
    fn write_text_file(&mut self, path: &Path, content: &str) -> Result<()>;
}

/// Writes generated files to the host filesystem
#[derive(Debug, Clone, Default)]
pub struct DiskWriter;

impl TextFileWriter for DiskWriter {
    fn write_text_file(&mut self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::WriteFile {
                path: path.to_path_buf(),
                source: e,
            })?;
        }
        fs::write(path, content).map_err(|e| Error::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// In-memory writer for tests and dry runs
///
/// Stores path -> content in a sorted map so listings are deterministic.
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    files: BTreeMap<PathBuf, String>,
}

impl MemoryWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Content written to `path`, if any.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(|s| s.as_str())
    }

    /// Whether anything was written to `path`.
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.files.contains_key(path.as_ref())
    }

    /// Number of files written.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether no files were written.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterate over written (path, content) pairs in path order.
    pub fn files(&self) -> impl Iterator<Item = (&PathBuf, &String)> {
        self.files.iter()
    }
}

impl TextFileWriter for MemoryWriter {
    fn write_text_file(&mut self, path: &Path, content: &str) -> Result<()> {
        self.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
