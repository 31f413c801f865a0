//! Configuration constants and settings

use std::time::Duration;

// Per-process timeout; a hung fetch cannot stall the whole batch past this
pub const GIT_OPERATION_TIMEOUT_SECS: u64 = 180;

// Environment override for concurrency when no flag is given
pub const CONCURRENCY_ENV_VAR: &str = "GIT_COMPARE_CONCURRENCY";

// Repository marker
pub const REPO_MARKER: &str = ".git";
pub const GITDIR_PREFIX: &str = "gitdir:";
pub const GITDIR_SCAN_LINES: usize = 5;

// Naming
pub const DEFAULT_REPO_NAME: &str = "current";

// UI Constants
pub const APPLICATION_NAME: &str = "Git Compare";
pub const NO_REPOS_MESSAGE: &str = "No git repositories found.";
pub const COMPARING_MESSAGE: &str = "Comparing repos...";
pub const RUN_AGAIN_PROMPT: &str = "Press enter to run again, or type anything else and press enter to exit...";
pub const PROGRESS_TEMPLATE: &str = "{prefix:.bold} ({pos}/{len}) {wide_msg}";
pub const NAME_PADDING: usize = 5;
pub const GROUP_INDENT: &str = "   ";

/// Determines the concurrency limit for repository classification
///
/// Priority order:
/// 1. --sequential flag → 1
/// 2. --jobs N flag → N (at least 1)
/// 3. GIT_COMPARE_CONCURRENCY env var → N
/// 4. Default → available parallelism
pub fn get_concurrency(jobs: Option<usize>, sequential: bool) -> usize {
    resolve_concurrency(
        jobs,
        sequential,
        std::env::var(CONCURRENCY_ENV_VAR).ok().as_deref(),
        num_cpus::get(),
    )
}

fn resolve_concurrency(
    jobs: Option<usize>,
    sequential: bool,
    env_value: Option<&str>,
    cpu_count: usize,
) -> usize {
    if sequential {
        return 1;
    }

    if let Some(n) = jobs {
        return n.max(1);
    }

    if let Some(value) = env_value {
        match value.trim().parse::<usize>() {
            Ok(n) if n > 0 => return n,
            _ => tracing::warn!("ignoring invalid {CONCURRENCY_ENV_VAR}={value:?}"),
        }
    }

    cpu_count.max(1)
}

/// Options for one discovery-and-compare run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareOptions {
    /// Maximum number of repositories classified at once
    pub concurrency: usize,
    /// Timeout applied to each git process
    pub timeout: Duration,
    /// Maximum directory depth below the scan root; `None` for unbounded
    pub max_depth: Option<usize>,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            concurrency: num_cpus::get().max(1),
            timeout: Duration::from_secs(GIT_OPERATION_TIMEOUT_SECS),
            max_depth: None,
        }
    }
}
