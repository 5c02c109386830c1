//! Parser for `git status --porcelain` output.
//!
//! Turns the machine-readable status format into typed records for a
//! status display: [`StatusItem`] for file changes (grouped into staged,
//! unstaged and untracked sections) and [`BranchInfo`] for the `## `
//! branch-tracking header. The parsers are pure functions over text;
//! obtaining the text from git is the caller's concern.
//!
//! # Examples
//!
//! ```
//! use git_status_lines::{Group, StatusReport};
//!
//! let text = "## master...origin/master [ahead 1]\nA  TODO.md\n?? notes.txt\n";
//! let report = StatusReport::parse(text);
//!
//! let branch = report.branch.as_ref().unwrap();
//! assert_eq!(branch.name, "master");
//! assert_eq!(branch.ahead, 1);
//! assert_eq!(report.group(Group::Staged).count(), 1);
//! ```
//!
//! Single lines can be parsed directly when the caller does its own
//! dispatch:
//!
//! ```
//! use git_status_lines::{parse_branch, parse_change};
//!
//! let items = parse_change("AM src/main.rs").unwrap();
//! assert_eq!(items.len(), 2);
//!
//! let info = parse_branch("## main").unwrap();
//! assert_eq!(info.name, "main");
//! ```

use error_set::error_set;

pub mod status;

pub use status::branch::{BranchError, BranchInfo, parse_branch};
pub use status::change::{ChangeError, ChangeKind, Group, StatusItem, parse_change};
pub use status::format_status;
pub use status::report::StatusReport;

error_set! {
    /// Top-level error for porcelain status parsing
    StatusError := {
        ChangeError(ChangeError),
        BranchError(BranchError),
    }
}
