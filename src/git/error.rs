//! Error types for git invocation and status classification

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Failure to obtain output from a git process
#[derive(Debug, Error)]
pub enum GitError {
    /// The git executable could not be started (missing binary, bad working directory)
    #[error("failed to run git {args}: {source}")]
    Spawn {
        args: String,
        #[source]
        source: std::io::Error,
    },

    /// The process did not exit before the configured timeout
    #[error("git {args} timed out after {timeout:?}")]
    Timeout { args: String, timeout: Duration },
}

/// A repository whose status could not be trusted
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// `git branch` listed no line carrying the current-branch marker
    #[error("no current branch found in {}", path.display())]
    NoBranchFound { path: PathBuf },

    /// HEAD is not on a branch, so there is no `origin/<branch>` to compare against
    #[error("detached HEAD in {} ({head})", path.display())]
    DetachedHead { path: PathBuf, head: String },
}
