//! Filesystem content source.
//!
//! Discovers draft files on disk and reads them for detection.
//! - Symlinks are not followed by default
//! - Resolved paths must stay within the root they were found under
//! - Device files, pipes, and sockets are skipped
//! - Reads are bounded by `max_file_size`

use std::io::Read;
use std::path::{Path, PathBuf};

use glob::Pattern;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::config::FsSourceConfig;
use crate::error::{ScanError, ScanErrorKind};

/// Directories to skip
pub const SKIP_DIRS: &[&str] = &["target", "node_modules", ".git"];

/// Extensions of files that may hold draft content.
pub const DRAFT_EXTENSIONS: &[&str] = &["json", "yaml", "yml", "xml", "wsdl", "xsd", "proto", "avsc"];

fn compile_excludes(patterns: &[String], scan_errors: &mut Vec<ScanError>) -> Vec<Pattern> {
    patterns
        .iter()
        .filter_map(|pat_str| match Pattern::new(pat_str) {
            Ok(pat) => Some(pat),
            Err(e) => {
                scan_errors.push(ScanError::new(
                    pat_str,
                    ScanErrorKind::InvalidExcludePattern,
                    format!("Invalid exclude glob pattern '{pat_str}': {e}"),
                ));
                None
            }
        })
        .collect()
}

fn is_excluded(path: &Path, exclude: &[Pattern]) -> bool {
    let path_str = path.to_string_lossy();
    let file_name = path.file_name().map(|n| n.to_string_lossy());
    exclude.iter().any(|pattern| {
        pattern.matches(&path_str) || file_name.as_deref().is_some_and(|n| pattern.matches(n))
    })
}

/// `WalkDir::filter_entry` predicate: `true` keeps the entry.
fn is_not_skip_dir(entry: &DirEntry) -> bool {
    if entry.file_type().is_dir()
        && entry.depth() > 0
        && let Some(name) = entry.file_name().to_str()
    {
        return !SKIP_DIRS.contains(&name);
    }
    true
}

/// Whether the file extension marks a possible draft.
#[must_use]
pub fn is_draft_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| DRAFT_EXTENSIONS.iter().any(|d| d.eq_ignore_ascii_case(ext)))
}

#[cfg(unix)]
fn is_special_file(entry: &DirEntry) -> bool {
    use std::os::unix::fs::FileTypeExt;
    entry.metadata().map(|m| m.file_type()).is_ok_and(|ft| {
        ft.is_block_device() || ft.is_char_device() || ft.is_fifo() || ft.is_socket()
    })
}

#[cfg(not(unix))]
fn is_special_file(_entry: &DirEntry) -> bool {
    false
}

/// Check that `path` resolves inside `canonical_root`.
fn check_boundary(path: &Path, canonical_root: &Path) -> Result<(), ScanError> {
    let canonical_path = path.canonicalize().map_err(|e| {
        ScanError::new(
            path,
            ScanErrorKind::IoError,
            format!("Failed to canonicalize path: {e}"),
        )
    })?;
    if canonical_path.starts_with(canonical_root) {
        Ok(())
    } else {
        Err(ScanError::new(
            path,
            ScanErrorKind::OutsideRoot,
            format!(
                "Path resolves outside scan root: {} -> {}",
                path.display(),
                canonical_path.display()
            ),
        ))
    }
}

fn walk_root(
    root: &Path,
    config: &FsSourceConfig,
    exclude: &[Pattern],
    files: &mut Vec<PathBuf>,
    scan_errors: &mut Vec<ScanError>,
) {
    let canonical_root = match root.canonicalize() {
        Ok(r) => r,
        Err(e) => {
            scan_errors.push(ScanError::new(
                root,
                ScanErrorKind::IoError,
                format!("Failed to canonicalize root path: {e}"),
            ));
            return;
        }
    };

    for entry_result in WalkDir::new(root)
        .follow_links(config.follow_links)
        .max_depth(config.max_depth)
        .into_iter()
        .filter_entry(is_not_skip_dir)
    {
        let entry = match entry_result {
            Ok(e) => e,
            Err(walk_err) => {
                let path = walk_err
                    .path()
                    .map_or_else(|| root.to_path_buf(), Path::to_path_buf);
                scan_errors.push(ScanError::new(
                    path,
                    ScanErrorKind::WalkError,
                    format!("Directory traversal error: {walk_err}"),
                ));
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() || is_special_file(&entry) {
            continue;
        }
        if !is_draft_file(path) || is_excluded(path, exclude) {
            continue;
        }
        if let Err(e) = check_boundary(path, &canonical_root) {
            scan_errors.push(e);
            continue;
        }

        files.push(path.to_path_buf());
    }
}

/// Find all candidate draft files under the configured paths.
///
/// Returns `(files, scan_errors)`; files are sorted and de-duplicated.
/// A root that is itself a file is taken as long as it is not excluded,
/// whatever its extension.
#[must_use]
pub fn find_files(config: &FsSourceConfig) -> (Vec<PathBuf>, Vec<ScanError>) {
    let mut files = Vec::new();
    let mut scan_errors = Vec::new();
    let exclude = compile_excludes(&config.exclude, &mut scan_errors);

    for root in &config.paths {
        if root.is_file() {
            if !is_excluded(root, &exclude) {
                files.push(root.clone());
            }
        } else if root.is_dir() {
            walk_root(root, config, &exclude, &mut files, &mut scan_errors);
        }
    }

    files.sort();
    files.dedup();
    debug!(files = files.len(), errors = scan_errors.len(), "draft files discovered");
    (files, scan_errors)
}

/// Read a draft file, refusing anything larger than `max_file_size` bytes.
///
/// The size check and the read are the same bounded operation, so a file
/// growing between the two cannot slip past the limit.
///
/// # Errors
///
/// Returns a `ScanError` if the file cannot be opened or read, exceeds
/// `max_file_size`, or is not valid UTF-8.
pub fn read_file_bounded(path: &Path, max_file_size: u64) -> Result<String, ScanError> {
    let file = std::fs::File::open(path).map_err(|e| {
        ScanError::new(path, ScanErrorKind::IoError, format!("Failed to open file: {e}"))
    })?;

    let mut buffer = Vec::new();
    file.take(max_file_size.saturating_add(1))
        .read_to_end(&mut buffer)
        .map_err(|e| {
            ScanError::new(path, ScanErrorKind::IoError, format!("Failed to read file: {e}"))
        })?;

    if buffer.len() as u64 > max_file_size {
        return Err(ScanError::new(
            path,
            ScanErrorKind::FileTooLarge,
            format!("File exceeds maximum size of {max_file_size} bytes"),
        ));
    }

    String::from_utf8(buffer).map_err(|_| {
        ScanError::new(
            path,
            ScanErrorKind::InvalidEncoding,
            "File is not valid UTF-8".to_owned(),
        )
    })
}
