//! Repository discovery and initialization utilities

use ignore::WalkBuilder;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::path::{Component, Path, PathBuf};

use super::config::{DEFAULT_REPO_NAME, GITDIR_PREFIX, GITDIR_SCAN_LINES, REPO_MARKER};

/// Check if a .git file (for submodules/worktrees) contains gitdir reference
/// Only reads the first few lines - gitdir is typically in the first line
fn is_git_file(path: &Path) -> bool {
    match fs::File::open(path) {
        Ok(file) => BufReader::new(file)
            .lines()
            .take(GITDIR_SCAN_LINES)
            .map_while(Result::ok)
            .any(|line| line.trim_start().starts_with(GITDIR_PREFIX)),
        Err(_) => false,
    }
}

/// True if `dir` is the top of a git working copy
///
/// A `.git` directory marks a normal clone; a `.git` file pointing elsewhere
/// with `gitdir:` marks a worktree or submodule checkout.
pub fn is_repo_root(dir: &Path) -> bool {
    let marker = dir.join(REPO_MARKER);
    match fs::metadata(&marker) {
        Ok(meta) if meta.is_dir() => true,
        Ok(meta) if meta.is_file() => is_git_file(&marker),
        _ => false,
    }
}

/// Searches `search_path` for git repositories without descending into them
///
/// Returns the repository roots, sorted and duplicate-free. A directory that is
/// itself a repository is never searched for nested repositories. Symlinked
/// directories are followed; a link back to one of its own ancestors is
/// reported by the walker as a loop and skipped.
pub fn find_repo_roots(search_path: impl AsRef<Path>) -> Vec<PathBuf> {
    find_repo_roots_with_depth(search_path, None)
}

/// Like [`find_repo_roots`], but stops descending below `max_depth` levels
pub fn find_repo_roots_with_depth(
    search_path: impl AsRef<Path>,
    max_depth: Option<usize>,
) -> Vec<PathBuf> {
    let walker = WalkBuilder::new(search_path.as_ref())
        .follow_links(true) // Follow symlinks to find symlinked repos
        .max_depth(max_depth)
        .standard_filters(false) // Hidden and ignored directories may hold repos too
        .filter_entry(|entry| {
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            if !is_dir || entry.file_name() == REPO_MARKER {
                return false;
            }
            // Prune everything below a repository root; the root itself passes
            entry.depth() == 0 || !entry.path().parent().is_some_and(is_repo_root)
        })
        .build();

    let mut repos: Vec<PathBuf> = walker
        .filter_map(|result| match result {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!("skipping unreadable entry: {e}");
                None
            }
        })
        .filter(|entry| is_repo_root(entry.path()))
        .map(ignore::DirEntry::into_path)
        .collect();

    repos.sort();
    repos.dedup();
    repos
}

/// Display name for a repository: its path relative to the scan root
///
/// Components are joined with `/`. The scan root itself is named after its
/// directory.
pub fn repo_display_name(scan_root: &Path, repo_path: &Path) -> String {
    let relative = repo_path.strip_prefix(scan_root).unwrap_or(repo_path);

    let parts: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if parts.is_empty() {
        scan_root
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(DEFAULT_REPO_NAME)
            .to_string()
    } else {
        parts.join("/")
    }
}

/// Common initialization: announce the scan and discover repositories off the async runtime
///
/// With no `scanning_msg` nothing is printed, which keeps stdout clean for
/// machine-readable output.
pub async fn init_command(
    scanning_msg: Option<&str>,
    search_path: PathBuf,
    max_depth: Option<usize>,
) -> (std::time::Instant, Vec<PathBuf>) {
    if let Some(msg) = scanning_msg {
        println!("{msg}");
        // Flush stdout - ignore errors as this is non-critical
        let _ = std::io::stdout().flush();
    }

    let start_time = std::time::Instant::now();
    let repos = tokio::task::spawn_blocking(move || find_repo_roots_with_depth(search_path, max_depth))
        .await
        .unwrap_or_else(|e| {
            tracing::warn!("repository discovery failed: {e}");
            Vec::new()
        });

    (start_time, repos)
}
