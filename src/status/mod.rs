pub mod branch;
pub mod change;
pub mod report;

pub use branch::{BranchError, BranchInfo, parse_branch};
pub use change::{ChangeError, ChangeKind, Group, StatusItem, parse_change};
pub use report::StatusReport;

/// Format a status report for user display, grouped by section.
///
/// The fixed-width labels on each item align the filename column. Output is
/// plain text; coloring and interactive selection belong to the caller.
pub fn format_status(report: &StatusReport) -> String {
    let mut result = String::new();

    if let Some(branch) = &report.branch {
        result.push_str("On branch: ");
        result.push_str(&branch.name);
        if let Some(upstream) = &branch.upstream {
            result.push_str("...");
            result.push_str(upstream);
        }
        if branch.ahead > 0 {
            result.push_str(&format!("  +{}", branch.ahead));
        }
        if branch.behind > 0 {
            result.push_str(&format!("  -{}", branch.behind));
        }
        result.push('\n');
    }

    let sections = [
        (Group::Staged, "Changes to be committed"),
        (Group::Unstaged, "Changes not staged for commit"),
        (Group::Untracked, "Untracked files"),
    ];

    for (group, heading) in sections {
        let mut items = report.group(group).peekable();
        if items.peek().is_none() {
            continue;
        }

        if !result.is_empty() {
            result.push('\n');
        }
        result.push_str(heading);
        result.push_str(":\n");

        for item in items {
            result.push_str(&format!("{}: {}\n", item.msg, item.file));
        }
    }

    result
}
