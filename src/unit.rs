//! Source unit representation and size estimation
//!
//! A [`SourceUnit`] is one original compilable file handed to the
//! aggregator. Its byte size is read exactly once, when the unit is
//! constructed, and grouping decisions are made from that snapshot.

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// One original compilable file to be aggregated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    /// Absolute (or caller-relative) path to the source file.
    pub path: PathBuf,
    /// Byte size of the file, read once at construction.
    pub size: u64,
    /// Header name this file records for PCH inclusion in generated code.
    pub header_name: Option<String>,
}

impl SourceUnit {
    /// Create a source unit by reading the file's size from disk.
    ///
    /// A size lookup failure is fatal for the whole aggregation and maps to
    /// [`Error::SizeLookup`] with the offending path.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let metadata = fs::metadata(&path).map_err(|e| Error::SizeLookup {
            path: path.clone(),
            source: e,
        })?;
        Ok(Self {
            size: metadata.len(),
            path,
            header_name: None,
        })
    }

    /// Create a source unit with an explicit size.
    ///
    /// Used by callers that already know sizes and by tests.
    pub fn with_size(path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            path: path.into(),
            size,
            header_name: None,
        }
    }

    /// Whether this unit must compile alone.
    ///
    /// Derived from the path, not stored: true iff the path contains the
    /// reserved marker substring. Ignored entirely when single-unit mode is
    /// forced.
    pub fn is_isolated(&self, marker: &str) -> bool {
        !marker.is_empty() && self.path.to_string_lossy().contains(marker)
    }

    /// File name component of the path, for human-readable descriptions.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }
}

/// Sum the byte sizes of a set of source units.
///
/// Pure; the total drives the forced-single-unit policy decision.
pub fn total_bytes(units: &[SourceUnit]) -> u64 {
    units.iter().map(|u| u.size).sum()
}

/// Build source units from paths, reading each file's size from disk.
pub fn units_from_paths<I, P>(paths: I) -> Result<Vec<SourceUnit>>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    paths
        .into_iter()
        .map(|p| SourceUnit::from_path(p.as_ref()))
        .collect()
}
