//! Parsing for porcelain branch headers into tracking summaries.
//!
//! The header is the first line of `git status --porcelain -b` output and
//! starts with `## `. Recognized shapes, most specific first:
//!
//! - `## name...remote/branch [ahead N]`
//! - `## name...remote/branch [behind N]`
//! - `## name...remote/branch [ahead N, behind M]`
//! - `## name...remote/branch`
//! - `## name`
//!
//! The unborn-branch spellings `## Initial commit on name` (old git) and
//! `## No commits yet on name` (git 2.28+) reduce to `name`. Unrecognized
//! bracket tokens such as `[gone]` are ignored and leave both counts at 0.
//!
//! # Examples
//!
//! ```
//! use git_status_lines::status::branch::parse_branch;
//!
//! let info = parse_branch("## master...origin/master [ahead 1]").unwrap();
//! assert_eq!(info.name, "master");
//! assert_eq!(info.upstream.as_deref(), Some("origin/master"));
//! assert_eq!((info.ahead, info.behind), (1, 0));
//! ```

use error_set::error_set;

error_set! {
    /// Errors from parsing a porcelain branch header
    BranchError := {
        /// Line does not start with the `## ` marker
        #[display("Missing '## ' marker in branch header '{line}'")]
        MissingMarker { line: String },
        /// Nothing follows the marker
        #[display("Empty branch name in header '{line}'")]
        EmptyName { line: String },
        /// An ahead/behind count is not a decimal integer
        #[display("Invalid {keyword} count '{value}'")]
        InvalidCount { keyword: String, value: String },
    }
}

/// Tracking summary for the current branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchInfo {
    /// Local branch name, verbatim
    pub name: String,
    /// Upstream `remote/branch` text after `...`, when tracking is set up
    pub upstream: Option<String>,
    /// Local commits not yet on the upstream
    pub ahead: u32,
    /// Upstream commits not yet local
    pub behind: u32,
}

/// Parse a `## ...` branch header into a [`BranchInfo`].
///
/// # Examples
///
/// ```
/// use git_status_lines::status::branch::parse_branch;
///
/// let info = parse_branch("## master").unwrap();
/// assert_eq!(info.name, "master");
/// assert_eq!(info.upstream, None);
/// assert_eq!((info.ahead, info.behind), (0, 0));
///
/// let info = parse_branch("## No commits yet on master").unwrap();
/// assert_eq!(info.name, "master");
/// ```
///
/// # Errors
///
/// Returns [`BranchError`] if the `## ` marker is missing, the name is
/// empty, or an `ahead`/`behind` value is not a decimal integer.
pub fn parse_branch(line: &str) -> Result<BranchInfo, BranchError> {
    let Some(rest) = line.strip_prefix("## ") else {
        return Err(BranchError::MissingMarker {
            line: line.to_string(),
        });
    };

    // Split off a trailing ` [...]` suffix, if any
    let (head, bracket) = match rest.rfind(" [") {
        Some(at) if rest.ends_with(']') => (&rest[..at], Some(&rest[at + 2..rest.len() - 1])),
        _ => (rest, None),
    };

    // Name is everything up to the first `...`; the remainder is the upstream
    let (name, upstream) = match head.split_once("...") {
        Some((name, upstream)) => (name, Some(upstream.to_string())),
        None => (head, None),
    };

    // Unborn-branch headers carry a prose prefix around the name
    let name = name
        .strip_prefix("No commits yet on ")
        .or_else(|| name.strip_prefix("Initial commit on "))
        .unwrap_or(name);

    if name.is_empty() {
        return Err(BranchError::EmptyName {
            line: line.to_string(),
        });
    }

    let mut ahead = 0;
    let mut behind = 0;
    if let Some(bracket) = bracket {
        for token in bracket.split(',').map(str::trim) {
            let Some((keyword, value)) = token.split_once(' ') else {
                // Bare tokens like `gone` carry no count
                continue;
            };
            let count = match keyword {
                "ahead" => &mut ahead,
                "behind" => &mut behind,
                _ => continue,
            };
            *count = value
                .parse::<u32>()
                .map_err(|_| BranchError::InvalidCount {
                    keyword: keyword.to_string(),
                    value: value.to_string(),
                })?;
        }
    }

    Ok(BranchInfo {
        name: name.to_string(),
        upstream,
        ahead,
        behind,
    })
}
