//! Per-repository status classification
//!
//! Everything that depends on the exact text git prints lives here: the
//! clean-state phrase from `git status`, the `*` marker in `git branch`, and the
//! meaning of empty `git log` output. If git's wording changes, this is the one
//! place to update.

use std::path::Path;

use super::error::ClassifyError;
use super::operations::GitRunner;
use super::status::StatusFlags;

// Git command arguments
const GIT_STATUS_ARGS: &[&str] = &["status"];
const GIT_FETCH_ARGS: &[&str] = &["fetch"];
const GIT_BRANCH_ARGS: &[&str] = &["branch"];
const REMOTE_NAME: &str = "origin";

// Output markers
const CLEAN_STATE_MARKER: &str = "nothing to commit";
const CURRENT_BRANCH_MARKER: char = '*';
const DETACHED_PREFIX: char = '(';

/// Branch and flags for one repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoStatus {
    pub branch: String,
    pub flags: StatusFlags,
}

/// Returns true unless `git status` output contains the clean-state phrase
///
/// This is a wording heuristic, not a structured parse: git must be running
/// with untranslated messages for it to hold.
pub fn has_uncommitted_changes(status_output: &str) -> bool {
    !status_output.contains(CLEAN_STATE_MARKER)
}

/// Extracts the checked-out branch from `git branch` output
///
/// Returns `None` if no line carries the current-branch marker (for example a
/// repository with no commits yet). A detached HEAD is reported as
/// `Some("(HEAD detached at ...)")`; see [`is_detached`].
pub fn current_branch(branch_output: &str) -> Option<String> {
    branch_output
        .lines()
        .map(str::trim_end)
        .find(|line| line.starts_with(CURRENT_BRANCH_MARKER))
        .map(|line| line.trim_start_matches(CURRENT_BRANCH_MARKER).trim().to_string())
}

/// True for the parenthesised pseudo-branch git shows when HEAD is detached
pub fn is_detached(branch: &str) -> bool {
    branch.starts_with(DETACHED_PREFIX)
}

/// True if `git log` printed at least one commit
pub fn has_log_entries(log_output: &str) -> bool {
    !log_output.trim().is_empty()
}

/// `git log ..origin/<branch>`: commits upstream has that we don't
fn incoming_log_args(branch: &str) -> [String; 2] {
    ["log".to_string(), format!("..{REMOTE_NAME}/{branch}")]
}

/// `git log origin/<branch>..`: commits we have that upstream doesn't
fn outgoing_log_args(branch: &str) -> [String; 2] {
    ["log".to_string(), format!("{REMOTE_NAME}/{branch}..")]
}

async fn run_owned(runner: &dyn GitRunner, path: &Path, args: &[String]) -> String {
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    runner.output(path, &args).await
}

/// Determines the current branch and composite status of one repository
///
/// Runs `git status`, `git fetch`, `git branch` and two `git log` range queries,
/// in that order, against `path`. Process failures read as empty output and so
/// as "no changes"; a missing or detached branch is an error because the remote
/// comparison would be meaningless.
pub async fn classify(runner: &dyn GitRunner, path: &Path) -> Result<RepoStatus, ClassifyError> {
    let status_output = runner.output(path, GIT_STATUS_ARGS).await;
    let uncommitted = has_uncommitted_changes(&status_output);

    // Only the side effect matters: refresh origin/* before comparing
    let _ = runner.output(path, GIT_FETCH_ARGS).await;

    let branch_output = runner.output(path, GIT_BRANCH_ARGS).await;
    let branch = current_branch(&branch_output).ok_or_else(|| ClassifyError::NoBranchFound {
        path: path.to_path_buf(),
    })?;
    if is_detached(&branch) {
        return Err(ClassifyError::DetachedHead {
            path: path.to_path_buf(),
            head: branch,
        });
    }

    let incoming = has_log_entries(&run_owned(runner, path, &incoming_log_args(&branch)).await);
    let outgoing = has_log_entries(&run_owned(runner, path, &outgoing_log_args(&branch)).await);

    let flags = StatusFlags::from_conditions(uncommitted, incoming, outgoing);
    tracing::debug!("{}: {} {:?}", path.display(), branch, flags);

    Ok(RepoStatus { branch, flags })
}
