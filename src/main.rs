//! git-compare: find every git repository under a directory and report which
//! ones have uncommitted, incoming or outgoing changes.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use git_compare::commands::{handle_compare_command, CompareArgs};
use git_compare::core::{get_concurrency, CompareOptions, GIT_OPERATION_TIMEOUT_SECS};

#[derive(Parser)]
#[command(name = "git-compare")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Report the sync state of every git repository under a directory", long_about = None)]
struct Cli {
    /// Directory to search for git repositories (defaults to the current directory)
    directory: Option<PathBuf>,

    /// Number of repositories to compare concurrently
    #[arg(short = 'j', long)]
    jobs: Option<usize>,

    /// Compare one repository at a time
    #[arg(long, conflicts_with = "jobs")]
    sequential: bool,

    /// Seconds before a single git command is abandoned
    #[arg(long, default_value_t = GIT_OPERATION_TIMEOUT_SECS)]
    timeout: u64,

    /// Maximum directory depth to search below the root
    #[arg(long)]
    max_depth: Option<usize>,

    /// Print the report as JSON
    #[arg(long, conflicts_with = "interactive")]
    json: bool,

    /// Offer to run again after each report
    #[arg(short, long)]
    interactive: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set tracing subscriber")
}

fn resolve_directory(directory: Option<PathBuf>) -> Result<PathBuf> {
    let directory = match directory {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    if !directory.is_dir() {
        anyhow::bail!("Specified directory '{}' does not exist.", directory.display());
    }

    std::fs::canonicalize(&directory)
        .with_context(|| format!("Failed to resolve directory '{}'", directory.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let directory = resolve_directory(cli.directory)?;
    let options = CompareOptions {
        concurrency: get_concurrency(cli.jobs, cli.sequential),
        timeout: Duration::from_secs(cli.timeout.max(1)),
        max_depth: cli.max_depth,
    };
    tracing::debug!("comparing repositories under {} with {:?}", directory.display(), options);

    handle_compare_command(CompareArgs {
        directory,
        options,
        json: cli.json,
        interactive: cli.interactive,
    })
    .await
}
