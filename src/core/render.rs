//! Text and JSON rendering of the final report

use anyhow::Result;

use super::config::{GROUP_INDENT, NAME_PADDING};
use super::orchestrator::RepoFailure;
use super::report::ReportGroup;

const FAILURES_HEADING: &str = "Could not compare";

/// Renders groups as a heading per status followed by padded `name  branch` rows
///
/// Names are padded to the longest name across all groups plus a fixed gap so
/// branches line up in one column. Failures, if any, follow the groups.
pub fn render_text(groups: &[ReportGroup], failures: &[RepoFailure]) -> String {
    let max_len = groups
        .iter()
        .flat_map(|group| group.repos.iter().map(|repo| repo.name.len()))
        .chain(failures.iter().map(|failure| failure.name.len()))
        .max()
        .unwrap_or(0);
    let width = max_len + NAME_PADDING;

    let mut lines = Vec::new();

    for group in groups {
        lines.push(format!("{} {}", group.status.symbol(), group.status.label()));
        for repo in &group.repos {
            lines.push(format!("{GROUP_INDENT}{:width$}{}", repo.name, repo.branch));
        }
        lines.push(String::new());
    }

    if !failures.is_empty() {
        lines.push(format!("⚠️  {} ({})", FAILURES_HEADING, failures.len()));
        let mut failures: Vec<&RepoFailure> = failures.iter().collect();
        failures.sort_by(|a, b| a.name.cmp(&b.name));
        for failure in failures {
            lines.push(format!("{GROUP_INDENT}{:width$}{}", failure.name, failure.error));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Renders groups and failures as pretty-printed JSON
pub fn render_json(groups: &[ReportGroup], failures: &[RepoFailure]) -> Result<String> {
    let json_output = serde_json::json!({
        "groups": groups,
        "failures": failures,
    });
    Ok(serde_json::to_string_pretty(&json_output)?)
}
