//! Detection report types.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::ScanError;
use crate::model::DetectionResult;

/// Detection outcome for a single file.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct FileDetection {
    pub file: PathBuf,
    pub result: DetectionResult,
}

impl FileDetection {
    /// Format as `{file}: {description}`.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        format!("{}: {}", self.file.display(), self.result.describe())
    }
}

/// Result of a detection run over files on disk.
///
/// Files that were read but matched no syntax are counted in
/// `undetected_files` and still listed in `detections`; files that could not
/// be read at all only appear in `scan_errors`.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct DetectionReport {
    /// Number of files successfully read and run through the detector.
    pub scanned_files: usize,
    /// Number of files that could not be read.
    pub failed_files: usize,
    /// Number of scanned files whose content was not recognized.
    pub undetected_files: usize,
    /// Whether every scanned file was recognized AND no scan errors occurred.
    pub ok: bool,
    /// One entry per scanned file, in path order.
    pub detections: Vec<FileDetection>,
    /// Files that could not be read, and discovery failures.
    pub scan_errors: Vec<ScanError>,
}

impl DetectionReport {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            scanned_files: 0,
            failed_files: 0,
            undetected_files: 0,
            ok: true,
            detections: Vec::new(),
            scan_errors: Vec::new(),
        }
    }

    /// Total number of files attempted (scanned + failed).
    #[must_use]
    pub fn files_attempted(&self) -> usize {
        self.scanned_files + self.failed_files
    }

    /// Detections whose content was recognized.
    pub fn detected(&self) -> impl Iterator<Item = &FileDetection> {
        self.detections.iter().filter(|d| !d.result.is_unknown())
    }

    /// Detections whose content was not recognized.
    pub fn undetected(&self) -> impl Iterator<Item = &FileDetection> {
        self.detections.iter().filter(|d| d.result.is_unknown())
    }
}
