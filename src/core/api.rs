//! Public API for the core module.
//!
//! This module provides the stable public API for core functionality including:
//! - Repository discovery
//! - Concurrent comparison and the shared result collector
//! - Report aggregation and rendering
//! - Configuration utilities

// Discovery
pub use super::discovery::{
    find_repo_roots, find_repo_roots_with_depth, init_command, is_repo_root, repo_display_name,
};

// Comparison
pub use super::orchestrator::{compare_all, ComparisonResults, RepoFailure, RepoInfo, ResultCollector};
pub use super::progress::{BarProgress, NoProgress, ProgressReporter};

// Reporting
pub use super::render::{render_json, render_text};
pub use super::report::{aggregate, ReportGroup};

// Configuration
pub use super::config::{get_concurrency, CompareOptions, GIT_OPERATION_TIMEOUT_SECS};

// User-facing messages
pub use super::config::{APPLICATION_NAME, NO_REPOS_MESSAGE, RUN_AGAIN_PROMPT};
