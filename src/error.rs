//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for
//! `unitygen`. It uses the `thiserror` library to create an `Error` enum that
//! covers all anticipated failure modes, providing clear and descriptive
//! error messages.
//!
//! Two failure kinds matter to callers folding unity files into a build
//! graph, and they are kept as distinct variants so the caller can report
//! the offending path for each:
//!
//! - **`SizeLookup`**: the byte size of an input source file could not be
//!   read. Aggregation cannot proceed without sizes, so this is fatal.
//! - **`WriteFile`**: a generated unity file (or its companion) could not be
//!   materialized on disk. The caller receives no partial output list,
//!   because downstream build-graph construction assumes every returned
//!   artifact exists.
//!
//! The remaining variants cover configuration parsing and bad input glob
//! patterns encountered on the CLI path.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for unitygen operations
#[derive(Error, Debug)]
pub enum Error {
    /// An error occurred while parsing the `.unitygen.yaml` configuration file.
    ///
    /// This error includes the specific parsing issue and optionally a hint
    /// about how to fix it.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// The byte size of an input source file could not be read.
    ///
    /// Fatal for the whole aggregation run: grouping decisions depend on
    /// every input's size being known up front.
    #[error("Failed to read size of source file '{path}': {source}")]
    SizeLookup {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A generated unity file or its companion could not be written.
    ///
    /// Fatal for the whole aggregation run: no partial output list is
    /// returned.
    #[error("Failed to write generated file '{path}': {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A glob pattern error, wrapped from `glob::PatternError`.
    #[error("Glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
