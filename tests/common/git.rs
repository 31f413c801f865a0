//! Git testing utilities

use anyhow::Result;
use std::path::Path;
use std::process::Command;

fn git(path: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(path)
        .env("LC_ALL", "C")
        .output()?;

    if !output.status.success() {
        anyhow::bail!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Sets the identity git needs to commit, and disables signing
pub fn configure_user(path: &Path) -> Result<()> {
    git(path, &["config", "user.name", "Test User"])?;
    git(path, &["config", "user.email", "test@example.com"])?;
    git(path, &["config", "commit.gpgsign", "false"])?;
    Ok(())
}

/// Sets up a git repository with user config
pub fn setup_git_repo(path: &Path) -> Result<()> {
    git(path, &["init", "-q"])?;
    configure_user(path)
}

/// Creates a test commit in the repository
pub fn create_test_commit(path: &Path, file_name: &str, content: &str, message: &str) -> Result<()> {
    std::fs::write(path.join(file_name), content)?;
    git(path, &["add", file_name])?;
    git(path, &["commit", "-q", "-m", message])?;
    Ok(())
}

/// Creates `count` committed repositories named `test-repo-N` under `parent_dir`
pub fn create_multiple_repos(parent_dir: &Path, count: usize) -> Result<Vec<String>> {
    let mut repo_names = Vec::new();

    for i in 0..count {
        let repo_name = format!("test-repo-{}", i + 1);
        let repo_path = parent_dir.join(&repo_name);
        std::fs::create_dir_all(&repo_path)?;

        setup_git_repo(&repo_path)?;
        create_test_commit(&repo_path, "README.md", &format!("# Repo {}", i + 1), "Initial commit")?;

        repo_names.push(repo_name);
    }

    Ok(repo_names)
}

/// Clones `source` into `target` and configures the clone's user
pub fn clone_repo(source: &Path, target: &Path) -> Result<()> {
    let parent = target
        .parent()
        .ok_or_else(|| anyhow::anyhow!("clone target has no parent"))?;
    std::fs::create_dir_all(parent)?;
    git(
        parent,
        &[
            "clone",
            "-q",
            &source.to_string_lossy(),
            &target.to_string_lossy(),
        ],
    )?;
    configure_user(target)
}

/// Creates a bare repository at `path` seeded from `seed`'s history
pub fn create_bare_from(seed: &Path, path: &Path) -> Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| anyhow::anyhow!("bare repository path has no parent"))?;
    git(
        parent,
        &[
            "clone",
            "-q",
            "--bare",
            &seed.to_string_lossy(),
            &path.to_string_lossy(),
        ],
    )?;
    Ok(())
}

/// Pushes the current branch to origin
pub fn push(path: &Path) -> Result<()> {
    git(path, &["push", "-q", "origin", "HEAD"])?;
    Ok(())
}

/// Name of the checked-out branch
pub fn current_branch_name(path: &Path) -> Result<String> {
    Ok(git(path, &["rev-parse", "--abbrev-ref", "HEAD"])?.trim().to_string())
}

/// Detaches HEAD at the current commit
pub fn detach_head(path: &Path) -> Result<()> {
    git(path, &["checkout", "-q", "--detach"])?;
    Ok(())
}

/// Checks if git is available in the system
pub fn is_git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}
