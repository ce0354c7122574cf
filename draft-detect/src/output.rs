//! Output formatting for detection reports.
//!
//! Provides JSON and plain-text formatters for `DetectionReport`.
//! Color/terminal formatting belongs to the CLI layer.

use std::collections::BTreeMap;
use std::io::Write;

use crate::model::SyntaxFamily;
use crate::report::DetectionReport;

/// Format a `DetectionReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &DetectionReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `DetectionReport` as human-readable plain text to a writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &DetectionReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer, "  DRAFT CONTENT DETECTION")?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer)?;
    writeln!(writer, "  Files scanned:     {}", report.scanned_files)?;
    writeln!(writer, "  Files failed:      {}", report.failed_files)?;
    writeln!(writer, "  Files undetected:  {}", report.undetected_files)?;

    let mut by_family: BTreeMap<&str, usize> = BTreeMap::new();
    for detection in report.detected() {
        *by_family
            .entry(detection.result.syntax_family.as_str())
            .or_default() += 1;
    }
    for (family, count) in &by_family {
        writeln!(writer, "    {family:<10} {count}")?;
    }
    writeln!(writer)?;

    if report.detected().next().is_some() {
        writeln!(writer, "{}", "-".repeat(80))?;
        writeln!(writer, "  DETECTED")?;
        writeln!(writer, "{}", "-".repeat(80))?;
        for detection in report.detected() {
            writeln!(writer, "{}", detection.format_human_readable())?;
        }
        writeln!(writer)?;
    }

    if report.undetected_files > 0 {
        writeln!(writer, "{}", "-".repeat(80))?;
        writeln!(writer, "  UNDETECTED (type must be chosen manually)")?;
        writeln!(writer, "{}", "-".repeat(80))?;
        for detection in report.undetected() {
            writeln!(writer, "{}", detection.file.display())?;
        }
        writeln!(writer)?;
    }

    if !report.scan_errors.is_empty() {
        writeln!(writer, "{}", "-".repeat(80))?;
        writeln!(writer, "  SCAN ERRORS (files that could not be read)")?;
        writeln!(writer, "{}", "-".repeat(80))?;
        for scan_err in &report.scan_errors {
            writeln!(writer, "{}", scan_err.format_human_readable())?;
        }
        writeln!(writer)?;
    }

    writeln!(writer, "{}", "=".repeat(80))?;
    if report.ok {
        writeln!(
            writer,
            "\u{2713} All {} files detected",
            report.scanned_files
        )?;
    } else {
        if report.undetected_files > 0 {
            writeln!(
                writer,
                "\u{2717} {} file(s) matched none of: {}",
                report.undetected_files,
                probed_families()
            )?;
        }
        if !report.scan_errors.is_empty() {
            writeln!(
                writer,
                "\u{2717} {} file(s) could not be read",
                report.failed_files
            )?;
        }
    }
    writeln!(writer, "{}", "=".repeat(80))?;

    Ok(())
}

fn probed_families() -> String {
    crate::detector::SYNTAX_PROBES
        .iter()
        .map(|p| p.family)
        .filter(|f| *f != SyntaxFamily::Unknown)
        .map(SyntaxFamily::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
