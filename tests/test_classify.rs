//! Integration tests for status classification against real repositories

mod common;

use common::{
    commit_locally, create_test_commit, current_branch_name, detach_head, is_git_available, make_dirty,
    setup_git_repo, Workspace,
};
use git_compare::git::{classify, ClassifyError, GitCli, StatusFlags};
use std::fs;
use tempfile::TempDir;

#[tokio::test]
async fn test_fresh_clone_is_clean_and_up_to_date() {
    if !is_git_available() {
        eprintln!("Git not available, skipping test");
        return;
    }

    let workspace = Workspace::new().expect("Failed to create workspace");
    let repo = workspace.add_clone("app").expect("Failed to clone");

    let status = classify(&GitCli::default(), &repo).await.expect("Failed to classify");

    assert_eq!(status.branch, current_branch_name(&repo).expect("Failed to read branch"));
    assert_eq!(status.flags, StatusFlags::CLEAN_AND_UP_TO_DATE);
}

#[tokio::test]
async fn test_modified_file_is_uncommitted() {
    if !is_git_available() {
        eprintln!("Git not available, skipping test");
        return;
    }

    let workspace = Workspace::new().expect("Failed to create workspace");
    let repo = workspace.add_clone("app").expect("Failed to clone");
    make_dirty(&repo).expect("Failed to modify file");

    let status = classify(&GitCli::default(), &repo).await.expect("Failed to classify");

    assert_eq!(status.flags, StatusFlags::UNCOMMITTED_CHANGES);
}

#[tokio::test]
async fn test_local_commit_is_outgoing() {
    if !is_git_available() {
        eprintln!("Git not available, skipping test");
        return;
    }

    let workspace = Workspace::new().expect("Failed to create workspace");
    let repo = workspace.add_clone("app").expect("Failed to clone");
    commit_locally(&repo, "feature.txt").expect("Failed to commit");

    let status = classify(&GitCli::default(), &repo).await.expect("Failed to classify");

    assert_eq!(status.flags, StatusFlags::OUTGOING_CHANGES);
}

#[tokio::test]
async fn test_upstream_commit_is_incoming_after_fetch() {
    if !is_git_available() {
        eprintln!("Git not available, skipping test");
        return;
    }

    let workspace = Workspace::new().expect("Failed to create workspace");
    let repo = workspace.add_clone("app").expect("Failed to clone");
    // Pushed after cloning, so only the fetch inside classify can see it
    workspace
        .push_upstream_commit("upstream.txt")
        .expect("Failed to push upstream commit");

    let status = classify(&GitCli::default(), &repo).await.expect("Failed to classify");

    assert_eq!(status.flags, StatusFlags::INCOMING_CHANGES);
}

#[tokio::test]
async fn test_diverged_and_dirty_sets_every_flag() {
    if !is_git_available() {
        eprintln!("Git not available, skipping test");
        return;
    }

    let workspace = Workspace::new().expect("Failed to create workspace");
    let repo = workspace.add_clone("app").expect("Failed to clone");
    workspace
        .push_upstream_commit("upstream.txt")
        .expect("Failed to push upstream commit");
    commit_locally(&repo, "local.txt").expect("Failed to commit");
    make_dirty(&repo).expect("Failed to modify file");

    let status = classify(&GitCli::default(), &repo).await.expect("Failed to classify");

    assert_eq!(status.flags, StatusFlags::all());
}

#[tokio::test]
async fn test_repo_without_remote_is_clean() {
    if !is_git_available() {
        eprintln!("Git not available, skipping test");
        return;
    }

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    setup_git_repo(temp_dir.path()).expect("Failed to init repo");
    create_test_commit(temp_dir.path(), "README.md", "# Local", "Initial commit").expect("Failed to commit");

    // fetch and both log ranges fail, which reads as "nothing incoming or outgoing"
    let status = classify(&GitCli::default(), temp_dir.path())
        .await
        .expect("Failed to classify");

    assert_eq!(status.flags, StatusFlags::CLEAN_AND_UP_TO_DATE);
}

#[tokio::test]
async fn test_repo_without_commits_has_no_branch() {
    if !is_git_available() {
        eprintln!("Git not available, skipping test");
        return;
    }

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    setup_git_repo(temp_dir.path()).expect("Failed to init repo");

    let result = classify(&GitCli::default(), temp_dir.path()).await;

    assert!(matches!(result, Err(ClassifyError::NoBranchFound { .. })));
}

#[tokio::test]
async fn test_detached_head_is_reported() {
    if !is_git_available() {
        eprintln!("Git not available, skipping test");
        return;
    }

    let workspace = Workspace::new().expect("Failed to create workspace");
    let repo = workspace.add_clone("app").expect("Failed to clone");
    detach_head(&repo).expect("Failed to detach HEAD");

    let result = classify(&GitCli::default(), &repo).await;

    match result {
        Err(ClassifyError::DetachedHead { head, .. }) => assert!(head.starts_with('(')),
        other => panic!("expected detached HEAD error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_untracked_file_counts_as_uncommitted() {
    if !is_git_available() {
        eprintln!("Git not available, skipping test");
        return;
    }

    let workspace = Workspace::new().expect("Failed to create workspace");
    let repo = workspace.add_clone("app").expect("Failed to clone");
    fs::write(repo.join("notes.txt"), "scratch").expect("Failed to write file");

    let status = classify(&GitCli::default(), &repo).await.expect("Failed to classify");

    assert!(status.flags.contains(StatusFlags::UNCOMMITTED_CHANGES));
}
