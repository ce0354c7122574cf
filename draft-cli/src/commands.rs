//! Command implementations.

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use colored::Colorize;
use draft_detect::{
    Draft, DraftContext, DraftPage, FsSourceConfig, ImportForm, ListCriteria, Paging, ScanError,
    detect_fs, list_drafts, output, read_file_bounded,
};
use tracing::info;

use crate::cli::{DetectArgs, ImportArgs, ListArgs};
use crate::fetch::fetch_url_content;

fn scan_error(e: &ScanError) -> anyhow::Error {
    anyhow!(e.format_human_readable())
}

/// `drafts detect`
///
/// # Errors
///
/// Returns an error if the paths are invalid, writing fails, or `--strict`
/// is set and the report is not clean.
pub fn detect(args: &DetectArgs, out: &mut dyn Write) -> Result<()> {
    let mut config = FsSourceConfig::with_paths(args.paths.clone());
    config.exclude.clone_from(&args.exclude);
    config.max_file_size = args.max_file_size;
    config.follow_links = args.follow_links;

    let report = detect_fs(&config)?;
    if args.json {
        output::write_json(&report, out)?;
    } else {
        output::write_human(&report, out)?;
    }

    if args.strict && !report.ok {
        bail!(
            "{} file(s) undetected, {} file(s) unreadable",
            report.undetected_files,
            report.failed_files
        );
    }
    Ok(())
}

async fn load_import_form(args: &ImportArgs) -> Result<ImportForm> {
    let (context, content) = match (&args.file, &args.url) {
        (Some(path), _) => {
            let content = read_file_bounded(path, args.max_size).map_err(|e| scan_error(&e))?;
            (DraftContext::file(file_name(path)), content)
        }
        (None, Some(url)) => {
            let timeout = Duration::from_secs(args.timeout);
            let content = fetch_url_content(url, timeout, args.max_size).await?;
            (DraftContext::url(url.clone()), content)
        }
        (None, None) => bail!("Either --file or --url is required"),
    };

    let mut form = ImportForm::new(context);
    form.set_content(content);
    Ok(form)
}

fn file_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |n| n.to_string_lossy().into_owned(),
    )
}

/// `drafts import`: prints the create-draft request as JSON.
///
/// # Errors
///
/// Returns an error if the content cannot be loaded, a required field is
/// neither detected nor given, or writing fails.
pub async fn import(args: &ImportArgs, out: &mut dyn Write) -> Result<()> {
    let mut form = load_import_form(args).await?;

    if let Some(detection) = form.detection() {
        info!(detected = %detection.describe(), "content detection");
    }

    if let Some(dialect) = args.dialect {
        form.set_dialect(Some(dialect));
    }
    if let Some(version) = &args.version {
        form.set_version(version.clone());
    }
    if let Some(name) = &args.name {
        form.set_name(name.clone());
    }
    if let Some(summary) = &args.summary {
        form.set_summary(summary.clone());
    }

    let request = form.build().context(
        "Draft cannot be imported; use --type, --name or --summary to fill in missing fields",
    )?;
    writeln!(out, "{}", serde_json::to_string_pretty(&request)?)?;
    Ok(())
}

fn write_page(page: &DraftPage, paging: Paging, out: &mut dyn Write) -> Result<()> {
    if page.drafts.is_empty() {
        writeln!(out, "No drafts found.")?;
    }
    for draft in &page.drafts {
        writeln!(
            out,
            "{}  {}\n    {}",
            draft.name.bold(),
            format!("[{}]", draft.artifact_type).cyan(),
            draft.display_summary().dimmed()
        )?;
    }
    writeln!(
        out,
        "Page {} of {} ({} drafts)",
        paging.page,
        paging.page_count(page.count),
        page.count
    )?;
    Ok(())
}

/// `drafts list`
///
/// # Errors
///
/// Returns an error if the drafts file cannot be read or parsed, or writing fails.
pub fn list(args: &ListArgs, out: &mut dyn Write) -> Result<()> {
    let content = read_file_bounded(&args.drafts, draft_detect::DEFAULT_MAX_FILE_SIZE)
        .map_err(|e| scan_error(&e))?;
    let drafts: Vec<Draft> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid drafts file: {}", args.drafts.display()))?;

    let criteria = ListCriteria {
        filter_value: args.filter.clone(),
        ascending: !args.descending,
    };
    let paging = Paging::new(args.page, args.per_page);
    let page = list_drafts(&drafts, &criteria, paging);

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&page)?)?;
    } else {
        write_page(&page, paging, out)?;
    }
    Ok(())
}
