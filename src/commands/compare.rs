//! Repository comparison command implementation
//!
//! Discovers repositories under a directory, classifies them concurrently and
//! prints the grouped report, optionally looping on user request.

use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::core::{
    aggregate, compare_all, init_command, render_json, render_text, BarProgress, CompareOptions,
    NoProgress, ProgressReporter, RepoFailure, ReportGroup, APPLICATION_NAME, NO_REPOS_MESSAGE,
    RUN_AGAIN_PROMPT,
};
use crate::git::{GitCli, GitRunner};
use crate::utils::{clear_screen, set_terminal_title, set_terminal_title_and_flush};

/// Arguments for one invocation of the compare command
#[derive(Debug, Clone)]
pub struct CompareArgs {
    pub directory: PathBuf,
    pub options: CompareOptions,
    pub json: bool,
    pub interactive: bool,
}

/// Final, ordered outcome of a comparison run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub groups: Vec<ReportGroup>,
    pub failures: Vec<RepoFailure>,
}

impl Report {
    pub fn repo_count(&self) -> usize {
        self.groups.iter().map(|group| group.repos.len()).sum()
    }
}

/// Classifies `repo_roots` and groups the results for display
pub async fn compare_repositories(
    runner: Arc<dyn GitRunner>,
    scan_root: &Path,
    repo_roots: Vec<PathBuf>,
    options: &CompareOptions,
    progress: Arc<dyn ProgressReporter>,
) -> Report {
    let results = compare_all(runner, scan_root, repo_roots, options, progress).await;
    Report {
        groups: aggregate(results.repos),
        failures: results.failures,
    }
}

/// Handles the compare command
pub async fn handle_compare_command(args: CompareArgs) -> Result<()> {
    let runner: Arc<dyn GitRunner> = Arc::new(GitCli::new(args.options.timeout));

    loop {
        if args.interactive {
            clear_screen();
        }
        set_terminal_title(&format!("🔍 {APPLICATION_NAME}"));

        let outcome = run_once(Arc::clone(&runner), &args).await;

        set_terminal_title_and_flush(&format!("✅ {APPLICATION_NAME}"));
        outcome?;

        if !args.interactive || !prompt_run_again()? {
            break;
        }
    }

    Ok(())
}

async fn run_once(runner: Arc<dyn GitRunner>, args: &CompareArgs) -> Result<()> {
    // JSON mode announces nothing so stdout holds only the document
    let scanning_msg = (!args.json).then(|| format!("Finding repos in {}...", args.directory.display()));
    let (start_time, repo_roots) = init_command(
        scanning_msg.as_deref(),
        args.directory.clone(),
        args.options.max_depth,
    )
    .await;

    if repo_roots.is_empty() && !args.json {
        println!("{NO_REPOS_MESSAGE}");
        return Ok(());
    }

    let progress: Arc<dyn ProgressReporter> = if args.json {
        Arc::new(NoProgress)
    } else {
        Arc::new(BarProgress::new(repo_roots.len())?)
    };

    let report = compare_repositories(runner, &args.directory, repo_roots, &args.options, progress).await;
    tracing::debug!(
        "compared {} repositories in {:.1}s",
        report.repo_count() + report.failures.len(),
        start_time.elapsed().as_secs_f64()
    );

    if args.json {
        println!("{}", render_json(&report.groups, &report.failures)?);
    } else {
        println!();
        print!("{}", render_text(&report.groups, &report.failures));
        io::stdout().flush()?;
    }

    Ok(())
}

/// Asks whether to run again; a bare Enter means yes
fn prompt_run_again() -> Result<bool> {
    print!("{RUN_AGAIN_PROMPT}");
    io::stdout().flush()?;

    Ok(read_rerun_answer(&mut io::stdin().lock())?)
}

/// Reads one line of input: an empty line reruns, any text or EOF exits
fn read_rerun_answer(input: &mut impl BufRead) -> io::Result<bool> {
    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    Ok(read > 0 && line.trim_end_matches(['\r', '\n']).is_empty())
}
