//! Basic git command execution

use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;

use super::error::GitError;
use crate::core::config::GIT_OPERATION_TIMEOUT_SECS;

// Pin git's messages to the untranslated wording the classifier matches on,
// and make fetch fail instead of waiting for credentials.
const GIT_ENV: &[(&str, &str)] = &[("LC_ALL", "C"), ("GIT_TERMINAL_PROMPT", "0")];

/// Captured result of one git process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Runs a git command in the specified directory with the default timeout
pub async fn run_git(path: &Path, args: &[&str]) -> Result<GitOutput, GitError> {
    run_git_with_timeout(path, args, Duration::from_secs(GIT_OPERATION_TIMEOUT_SECS)).await
}

/// Runs a git command in the specified directory, killing it after `timeout`
///
/// Stdout and stderr are returned untrimmed; a non-zero exit is not an error.
pub async fn run_git_with_timeout(
    path: &Path,
    args: &[&str],
    timeout: Duration,
) -> Result<GitOutput, GitError> {
    tracing::debug!("$ git {} [{}]", args.join(" "), path.display());

    let mut command = Command::new("git");
    command
        .args(args)
        .current_dir(path)
        .envs(GIT_ENV.iter().copied())
        .kill_on_drop(true);

    match tokio::time::timeout(timeout, command.output()).await {
        Ok(Ok(output)) => Ok(GitOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }),
        Ok(Err(source)) => Err(GitError::Spawn {
            args: args.join(" "),
            source,
        }),
        Err(_) => Err(GitError::Timeout {
            args: args.join(" "),
            timeout,
        }),
    }
}

/// Seam between status classification and the git executable
///
/// Implementations return the command's standard output as text and never fail:
/// anything that prevents output from being produced yields an empty string.
#[async_trait]
pub trait GitRunner: Send + Sync {
    async fn output(&self, path: &Path, args: &[&str]) -> String;
}

/// Runs the real `git` binary
#[derive(Debug, Clone, Copy)]
pub struct GitCli {
    timeout: Duration,
}

impl GitCli {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new(Duration::from_secs(GIT_OPERATION_TIMEOUT_SECS))
    }
}

#[async_trait]
impl GitRunner for GitCli {
    async fn output(&self, path: &Path, args: &[&str]) -> String {
        match run_git_with_timeout(path, args, self.timeout).await {
            Ok(output) => {
                if !output.success {
                    tracing::debug!(
                        "git {} exited with failure in {}: {}",
                        args.join(" "),
                        path.display(),
                        output.stderr.trim()
                    );
                }
                output.stdout
            }
            Err(e) => {
                tracing::warn!("{e} (in {})", path.display());
                String::new()
            }
        }
    }
}
