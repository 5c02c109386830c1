//! Accumulation of a whole porcelain status document into one report.

use super::branch::{BranchInfo, parse_branch};
use super::change::{Group, StatusItem, parse_change};
use crate::StatusError;

/// Everything parsed out of one `git status --porcelain -b` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    /// Branch tracking summary, when a `## ` header was present
    pub branch: Option<BranchInfo>,
    /// File change records, in input order
    pub items: Vec<StatusItem>,
}

impl StatusReport {
    /// Parse a complete porcelain status output, skipping unparseable lines.
    ///
    /// Lines starting with `##` go to the branch parser (first parseable
    /// header wins), all other non-empty lines to the change parser. Lines
    /// that fail to parse are dropped with a debug-level trace; this never
    /// fails. Use [`StatusReport::parse_strict`] to surface malformed lines
    /// instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use git_status_lines::{Group, StatusReport};
    ///
    /// let report = StatusReport::parse("## master...origin/master\nA  TODO.md\n?? notes\n");
    /// assert_eq!(report.branch.as_ref().unwrap().name, "master");
    /// assert_eq!(report.items.len(), 2);
    /// assert_eq!(report.group(Group::Staged).count(), 1);
    /// ```
    pub fn parse(text: &str) -> Self {
        let mut branch = None;
        let mut items = Vec::new();

        for line in text.lines() {
            if line.is_empty() {
                continue;
            }
            if line.starts_with("##") {
                match parse_branch(line) {
                    Ok(info) => {
                        if branch.is_none() {
                            branch = Some(info);
                        }
                    }
                    Err(err) => log::debug!("skipping branch header: {err}"),
                }
            } else {
                match parse_change(line) {
                    Ok(mut parsed) => items.append(&mut parsed),
                    Err(err) => log::debug!("skipping change line: {err}"),
                }
            }
        }

        StatusReport { branch, items }
    }

    /// Parse a complete porcelain status output, failing on the first
    /// malformed line.
    ///
    /// # Errors
    ///
    /// Returns [`StatusError`] wrapping the first change-line or
    /// branch-header error encountered.
    pub fn parse_strict(text: &str) -> Result<Self, StatusError> {
        let mut branch = None;
        let mut items = Vec::new();

        for line in text.lines() {
            if line.is_empty() {
                continue;
            }
            if line.starts_with("##") {
                let info = parse_branch(line)?;
                if branch.is_none() {
                    branch = Some(info);
                }
            } else {
                items.append(&mut parse_change(line)?);
            }
        }

        Ok(StatusReport { branch, items })
    }

    /// Items belonging to one status section, in input order.
    pub fn group(&self, group: Group) -> impl Iterator<Item = &StatusItem> {
        self.items.iter().filter(move |item| item.group == group)
    }
}
