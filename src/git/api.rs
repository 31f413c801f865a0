//! Public API for git operations.
//!
//! This module provides the stable public API for git-related functionality:
//! - Running git with a timeout
//! - Classifying a repository's branch and synchronization state
//! - Status flags and their display categories
//!
//! ## Example: Classifying one repository
//!
//! ```rust,no_run
//! use git_compare::git::{classify, GitCli};
//! use std::path::Path;
//!
//! async fn check(path: &Path) {
//!     match classify(&GitCli::default(), path).await {
//!         Ok(status) => println!("{} {:?}", status.branch, status.flags),
//!         Err(e) => eprintln!("{e}"),
//!     }
//! }
//! ```

// Process execution
pub use super::operations::{run_git, run_git_with_timeout, GitCli, GitOutput, GitRunner};

// Classification
pub use super::classifier::{
    classify, current_branch, has_log_entries, has_uncommitted_changes, is_detached, RepoStatus,
};

// Status
pub use super::status::{StatusCategory, StatusFlags};

// Errors
pub use super::error::{ClassifyError, GitError};
