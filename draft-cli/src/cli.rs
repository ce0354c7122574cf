use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use draft_detect::{DEFAULT_MAX_FILE_SIZE, DEFAULT_PAGE_SIZE, Dialect};

use crate::fetch::DEFAULT_TIMEOUT;
use crate::{commands, logging};

#[derive(Debug, Parser)]
#[command(name = "drafts", version, about = "Detect, import and list schema and API drafts")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Detect the type of draft files on disk
    Detect(DetectArgs),
    /// Build a create-draft request from a file or URL
    Import(ImportArgs),
    /// Filter, sort and page a list of drafts
    List(ListArgs),
}

#[derive(Debug, Args)]
pub struct DetectArgs {
    /// Files or directories to scan
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Glob patterns to exclude (repeatable)
    #[arg(short, long)]
    pub exclude: Vec<String>,

    /// Maximum size of a single file in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_FILE_SIZE)]
    pub max_file_size: u64,

    /// Follow symbolic links while walking directories
    #[arg(long)]
    pub follow_links: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Fail when any file is unreadable or undetected
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Args)]
#[command(group(clap::ArgGroup::new("source").required(true).args(["file", "url"])))]
pub struct ImportArgs {
    /// Local file holding the draft content
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// URL to download the draft content from
    #[arg(long)]
    pub url: Option<String>,

    /// Draft type, overriding detection (e.g. openapi, avro, JSON)
    #[arg(long = "type", value_name = "TYPE")]
    pub dialect: Option<Dialect>,

    /// OpenAPI version, overriding detection
    #[arg(long = "openapi-version", value_name = "VERSION")]
    pub version: Option<String>,

    /// Draft name, overriding detection
    #[arg(long)]
    pub name: Option<String>,

    /// Draft summary, overriding detection
    #[arg(long)]
    pub summary: Option<String>,

    /// Maximum content size in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_FILE_SIZE)]
    pub max_size: u64,

    /// Download timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// JSON file holding an array of drafts
    pub drafts: PathBuf,

    /// Only show drafts whose name or summary contains this text
    #[arg(short, long, default_value = "")]
    pub filter: String,

    /// Sort by name descending
    #[arg(long)]
    pub descending: bool,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Drafts per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub per_page: usize,

    /// Print the page as JSON
    #[arg(long)]
    pub json: bool,
}

/// Parse arguments, set up logging and run the selected command.
///
/// # Errors
///
/// Returns an error if the command fails.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    execute(cli, &mut std::io::stdout().lock()).await
}

/// Run an already parsed command line, writing command output to `out`.
///
/// # Errors
///
/// Returns an error if the command fails.
pub async fn execute(cli: Cli, out: &mut dyn Write) -> Result<()> {
    logging::init(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        Command::Detect(args) => commands::detect(&args, out),
        Command::Import(args) => commands::import(&args, out).await,
        Command::List(args) => commands::list(&args, out),
    }
}
