//! # draft-detect
//!
//! Content detection and import model for schema and API drafts.
//!
//! The core is [`detect`]: a pure, total function that recognizes JSON, YAML,
//! XML and Protobuf source and classifies JSON/YAML documents as OpenAPI,
//! AsyncAPI, JSON Schema or Avro. Around it sit the import form model
//! ([`ImportForm`]), list filtering ([`list_drafts`]), template selection and a
//! filesystem source ([`detect_fs`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use draft_detect::{Dialect, SyntaxFamily, detect};
//!
//! let result = detect("openapi: 3.0.0\ninfo:\n  title: Petstore\n");
//! assert_eq!(result.syntax_family, SyntaxFamily::Yaml);
//! assert_eq!(result.dialect, Some(Dialect::OpenApi));
//! assert_eq!(result.version.as_deref(), Some("3.0.2"));
//! assert_eq!(result.name.as_deref(), Some("Petstore"));
//! ```

mod config;
mod detector;
mod error;
pub mod format;
mod import;
mod listing;
mod model;
pub mod output;
mod report;
mod strategy;
mod templates;

pub use config::{DEFAULT_MAX_FILE_SIZE, FsSourceConfig};
pub use detector::{SYNTAX_PROBES, SyntaxProbe, detect};
pub use error::{DraftError, ScanError, ScanErrorKind};
pub use import::{
    CreateDraft, CreateDraftContent, DEFAULT_OPENAPI_VERSION, DraftContext, FileContext,
    ImportForm, ImportRequest, OPENAPI_VERSIONS, TYPE_OPTIONS, TypeOption, UrlContext,
};
pub use listing::{
    DEFAULT_PAGE_SIZE, Draft, DraftPage, ListCriteria, NO_SUMMARY, Paging, list_drafts,
};
pub use model::{ContentType, DetectionResult, Dialect, SyntaxFamily};
pub use report::{DetectionReport, FileDetection};
pub use strategy::fs::read_file_bounded;
pub use templates::{TemplateSet, template_set_for};

use strategy::fs::find_files;
use tracing::{debug, info};

/// Detect the content type of draft files on disk.
///
/// # Errors
///
/// Returns an error if `fs_config.paths` is empty or if any provided path does not exist.
/// Returns `Ok` with `scanned_files: 0` if paths exist but contain no draft files.
/// Unreadable files are reported in `report.scan_errors`; unrecognized content is
/// reported as an `unknown` detection.
pub fn detect_fs(fs_config: &FsSourceConfig) -> anyhow::Result<DetectionReport> {
    if fs_config.paths.is_empty() {
        anyhow::bail!("No paths provided for detection");
    }

    for path in &fs_config.paths {
        if !path.exists() {
            anyhow::bail!("Path does not exist: {}", path.display());
        }
    }

    let (files, mut scan_errors) = find_files(fs_config);
    if files.is_empty() && scan_errors.is_empty() {
        return Ok(DetectionReport::empty());
    }

    let mut detections = Vec::with_capacity(files.len());
    let mut undetected_files: usize = 0;
    // Discovery failures are already in scan_errors; count them as failed files upfront.
    let mut failed_files: usize = scan_errors.len();
    let mut total_bytes: u64 = 0;

    for file_path in &files {
        if detections.len() + failed_files >= fs_config.max_files {
            scan_errors.push(ScanError::new(
                file_path,
                ScanErrorKind::LimitExceeded,
                format!(
                    "Scan aborted: max_files limit ({}) reached; remaining files not scanned",
                    fs_config.max_files
                ),
            ));
            failed_files += 1;
            break;
        }

        let content = match read_file_bounded(file_path, fs_config.max_file_size) {
            Ok(c) => c,
            Err(e) => {
                debug!(file = %file_path.display(), error = %e.message, "draft file unreadable");
                scan_errors.push(e);
                failed_files += 1;
                continue;
            }
        };

        let file_bytes = content.len() as u64;
        if total_bytes.saturating_add(file_bytes) > fs_config.max_total_bytes {
            scan_errors.push(ScanError::new(
                file_path,
                ScanErrorKind::LimitExceeded,
                format!(
                    "Scan aborted: max_total_bytes limit ({}) reached; remaining files not scanned",
                    fs_config.max_total_bytes
                ),
            ));
            failed_files += 1;
            break;
        }
        total_bytes = total_bytes.saturating_add(file_bytes);

        let result = detect(&content);
        if result.is_unknown() {
            undetected_files += 1;
        }
        detections.push(FileDetection {
            file: file_path.clone(),
            result,
        });
    }

    let scanned_files = detections.len();
    info!(
        scanned_files,
        failed_files, undetected_files, "draft detection finished"
    );

    Ok(DetectionReport {
        scanned_files,
        failed_files,
        undetected_files,
        ok: undetected_files == 0 && scan_errors.is_empty(),
        detections,
        scan_errors,
    })
}
