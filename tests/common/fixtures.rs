//! Test fixtures and builders

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::git::{clone_repo, create_bare_from, create_test_commit, push, setup_git_repo};

/// A scan root holding working copies that share one upstream
///
/// Layout: `<temp>/upstream.git` is the bare remote, `<temp>/seed` made its
/// first commit, and every clone lives under `<temp>/work`.
pub struct Workspace {
    pub temp_dir: TempDir,
}

impl Workspace {
    /// Creates the upstream with a single commit
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let seed = temp_dir.path().join("seed");
        std::fs::create_dir(&seed)?;
        setup_git_repo(&seed)?;
        create_test_commit(&seed, "README.md", "# Upstream", "Initial commit")?;
        create_bare_from(&seed, &temp_dir.path().join("upstream.git"))?;
        std::fs::create_dir(temp_dir.path().join("work"))?;
        Ok(Self { temp_dir })
    }

    /// The directory a comparison should scan
    pub fn root(&self) -> PathBuf {
        self.temp_dir.path().join("work")
    }

    pub fn upstream(&self) -> PathBuf {
        self.temp_dir.path().join("upstream.git")
    }

    /// Clones the upstream to `work/<name>`
    pub fn add_clone(&self, name: &str) -> Result<PathBuf> {
        let path = self.root().join(name);
        clone_repo(&self.upstream(), &path)?;
        Ok(path)
    }

    /// Pushes a new commit to the upstream from a scratch clone outside `work`
    pub fn push_upstream_commit(&self, file_name: &str) -> Result<()> {
        let scratch = self.temp_dir.path().join(format!("scratch-{file_name}"));
        clone_repo(&self.upstream(), &scratch)?;
        create_test_commit(&scratch, file_name, "upstream change", "Upstream commit")?;
        push(&scratch)
    }
}

/// Makes a local commit that upstream does not have yet
pub fn commit_locally(repo: &Path, file_name: &str) -> Result<()> {
    create_test_commit(repo, file_name, "local change", "Local commit")
}

/// Modifies a tracked file without committing
pub fn make_dirty(repo: &Path) -> Result<()> {
    std::fs::write(repo.join("README.md"), "# Edited locally")?;
    Ok(())
}
