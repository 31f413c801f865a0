//! Common test utilities and helpers
#![allow(dead_code, unused_imports)]

pub mod fixtures;
pub mod git;

pub use self::fixtures::{commit_locally, make_dirty, Workspace};
pub use self::git::{
    create_multiple_repos, create_test_commit, current_branch_name, detach_head, is_git_available,
    setup_git_repo,
};
