//! Concurrent classification of every discovered repository

use futures::stream::{FuturesUnordered, StreamExt};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use super::config::CompareOptions;
use super::discovery::repo_display_name;
use super::progress::ProgressReporter;
use crate::git::{classify, ClassifyError, GitRunner, StatusCategory};

/// Classification result for one repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoInfo {
    pub name: String,
    pub branch: String,
    pub status: StatusCategory,
    pub path: PathBuf,
}

/// A repository that could not be classified
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoFailure {
    pub name: String,
    pub path: PathBuf,
    pub error: String,
}

/// Everything collected during one comparison run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonResults {
    pub repos: Vec<RepoInfo>,
    pub failures: Vec<RepoFailure>,
}

impl ComparisonResults {
    pub fn len(&self) -> usize {
        self.repos.len() + self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

struct CollectorState {
    results: ComparisonResults,
    completed: usize,
}

/// Shared sink for completed classifications
///
/// Appending a result, bumping the completed count and notifying progress
/// happen together under one lock, so progress never runs ahead of or behind
/// the collection.
pub struct ResultCollector {
    state: Mutex<CollectorState>,
    total: usize,
    progress: Arc<dyn ProgressReporter>,
}

impl ResultCollector {
    pub fn new(total: usize, progress: Arc<dyn ProgressReporter>) -> Self {
        Self {
            state: Mutex::new(CollectorState {
                results: ComparisonResults::default(),
                completed: 0,
            }),
            total,
            progress,
        }
    }

    fn lock(&self) -> MutexGuard<'_, CollectorState> {
        // A panicking reporter must not lose results already collected
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Appends one outcome and reports progress
    pub fn record(&self, outcome: Result<RepoInfo, RepoFailure>) {
        let mut state = self.lock();
        match outcome {
            Ok(info) => state.results.repos.push(info),
            Err(failure) => state.results.failures.push(failure),
        }
        state.completed += 1;
        self.progress.on_progress(state.completed, self.total);
    }

    pub fn completed(&self) -> usize {
        self.lock().completed
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Takes the collected results
    pub fn into_results(self) -> ComparisonResults {
        self.state
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .results
    }
}

async fn classify_one(runner: &dyn GitRunner, scan_root: &Path, path: PathBuf) -> Result<RepoInfo, RepoFailure> {
    let name = repo_display_name(scan_root, &path);
    match classify(runner, &path).await {
        Ok(status) => Ok(RepoInfo {
            name,
            branch: status.branch,
            status: StatusCategory::new(status.flags),
            path,
        }),
        Err(e) => {
            tracing::warn!("skipping {name}: {e}");
            Err(failure_for(name, path, &e))
        }
    }
}

fn failure_for(name: String, path: PathBuf, error: &ClassifyError) -> RepoFailure {
    let error = match error {
        ClassifyError::NoBranchFound { .. } => "no current branch".to_string(),
        ClassifyError::DetachedHead { head, .. } => format!("detached HEAD {head}"),
    };
    RepoFailure { name, path, error }
}

/// Classifies every repository concurrently and waits for all of them
///
/// At most `options.concurrency` repositories are in flight at once. A
/// repository whose classification fails is recorded as a [`RepoFailure`]
/// and the rest of the batch continues. Every root yields exactly one entry in
/// the returned results.
pub async fn compare_all(
    runner: Arc<dyn GitRunner>,
    scan_root: &Path,
    repo_roots: Vec<PathBuf>,
    options: &CompareOptions,
    progress: Arc<dyn ProgressReporter>,
) -> ComparisonResults {
    let total = repo_roots.len();
    let collector = Arc::new(ResultCollector::new(total, Arc::clone(&progress)));
    let semaphore = Arc::new(tokio::sync::Semaphore::new(options.concurrency.max(1)));

    let mut futures = FuturesUnordered::new();
    for path in repo_roots {
        let runner = Arc::clone(&runner);
        let collector = Arc::clone(&collector);
        let semaphore = Arc::clone(&semaphore);

        futures.push(async move {
            // The semaphore is never closed, so acquire cannot fail
            let _permit = semaphore.acquire().await.ok();
            let outcome = classify_one(runner.as_ref(), scan_root, path).await;
            collector.record(outcome);
        });
    }

    // Wait for all repository operations to complete
    while futures.next().await.is_some() {}
    drop(futures);

    progress.finish();

    match Arc::try_unwrap(collector) {
        Ok(collector) => collector.into_results(),
        // Unreachable once every future has been dropped
        Err(shared) => {
            let results = shared.lock().results.clone();
            results
        }
    }
}
