//! # git-compare
//!
//! `git-compare` finds every git working copy under a directory, asks each one
//! how it stands against its remote, and reports them grouped by what needs
//! attention: uncommitted work first, then commits to pull, then commits to
//! push, then everything that is clean. It powers the `git-compare` CLI tool.
//!
//! ## Pipeline
//!
//! - **Discovery**: an explicit-stack directory walk that stops at repository
//!   roots ([`core::find_repo_roots`]).
//! - **Classification**: `git status`, `git fetch`, `git branch` and two
//!   `git log` range queries per repository ([`git::classify`]).
//! - **Comparison**: bounded concurrent classification into one shared
//!   collector with live progress ([`core::compare_all`]).
//! - **Reporting**: deterministic grouping and ordering ([`core::aggregate`]).
//!
//! ## Example
//!
//! ```rust,no_run
//! use git_compare::commands::compare_repositories;
//! use git_compare::core::{find_repo_roots, render_text, CompareOptions, NoProgress};
//! use git_compare::git::GitCli;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let root = Path::new(".");
//!     let roots = find_repo_roots(root);
//!     let report = compare_repositories(
//!         Arc::new(GitCli::default()),
//!         root,
//!         roots,
//!         &CompareOptions::default(),
//!         Arc::new(NoProgress),
//!     )
//!     .await;
//!     print!("{}", render_text(&report.groups, &report.failures));
//! }
//! ```

pub mod commands;
pub mod core;
pub mod git;
pub mod utils;
