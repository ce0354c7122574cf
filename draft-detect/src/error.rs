//! Error types for draft detection and import.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::model::Dialect;

/// Errors raised while preparing a draft for import.
///
/// Detection itself never fails; these cover the form and catalog layers
/// built on top of it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    /// The draft has no content, or only whitespace.
    #[error("Draft content is empty")]
    MissingContent,

    /// No name was detected or entered.
    #[error("Draft name is required")]
    MissingName,

    /// No type was detected or selected.
    #[error("Draft type is required")]
    MissingType,

    /// The given type string matches no known dialect.
    #[error("Unknown draft type '{0}'")]
    UnknownType(String),

    /// There is no template set for this dialect and version.
    #[error("No templates found for type {} and version {}", .dialect.registry_type(), .version.as_deref().unwrap_or("(none)"))]
    NoTemplates {
        dialect: Dialect,
        version: Option<String>,
    },
}

/// The kind of failure that prevented a file from being run through detection.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScanErrorKind {
    /// An I/O error occurred while reading the file.
    IoError,
    /// The file exceeded the configured maximum size limit.
    FileTooLarge,
    /// The file content is not valid UTF-8.
    InvalidEncoding,
    /// The resolved path is outside the scanned root (symlink escape).
    OutsideRoot,
    /// A resource limit (`max_files` or `max_total_bytes`) was reached, truncating the scan.
    LimitExceeded,
    /// A directory traversal error (permission denied, loop detected, etc.).
    WalkError,
    /// An exclude glob pattern could not be parsed.
    InvalidExcludePattern,
}

/// A file that could not be read at all.
///
/// Content that was read but matched no syntax is not a scan error; it shows
/// up as an `unknown` detection in the report.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct ScanError {
    /// The file path that could not be scanned.
    pub file: PathBuf,
    /// The kind of failure.
    pub kind: ScanErrorKind,
    /// Human-readable description of the failure.
    pub message: String,
}

impl ScanError {
    #[must_use]
    pub fn new(file: impl Into<PathBuf>, kind: ScanErrorKind, message: String) -> Self {
        Self {
            file: file.into(),
            kind,
            message,
        }
    }

    /// Format the error for human-readable output.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        format!("{}: [scan error] {}", self.file.display(), self.message)
    }
}
