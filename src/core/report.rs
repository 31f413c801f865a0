//! Grouping and ordering of comparison results

use serde::Serialize;
use std::cmp::Reverse;
use std::collections::BTreeMap;

use super::orchestrator::RepoInfo;
use crate::git::StatusCategory;

/// Repositories sharing one status category, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportGroup {
    pub status: StatusCategory,
    pub repos: Vec<RepoInfo>,
}

/// Groups results by status, most severe group first
///
/// Within a group repositories are ordered by branch, then name, using plain
/// byte-wise string comparison. The output depends only on the input set, not
/// on the order classifications finished in.
pub fn aggregate(mut repos: Vec<RepoInfo>) -> Vec<ReportGroup> {
    repos.sort_by(|a, b| a.branch.cmp(&b.branch).then_with(|| a.name.cmp(&b.name)));

    let mut groups: BTreeMap<Reverse<StatusCategory>, Vec<RepoInfo>> = BTreeMap::new();
    for repo in repos {
        groups.entry(Reverse(repo.status)).or_default().push(repo);
    }

    groups
        .into_iter()
        .map(|(Reverse(status), repos)| ReportGroup { status, repos })
        .collect()
}
