//! Parsing for porcelain change lines into classified status records.
//!
//! This module handles one line of `git status --porcelain` output like
//! `AM src/main.rs` and turns it into [`StatusItem`] records the display
//! layer can group and render.
//!
//! # Line format
//!
//! `XY PATH` where:
//! - `X` is the index (staged) status code
//! - `Y` is the worktree (unstaged) status code
//! - a single space separates the codes from the path
//! - `PATH` is kept verbatim, embedded spaces included
//!
//! A space in either code position means "no change in that column". A line
//! with both columns set produces two records for the same path, staged
//! first. `??` is the untracked marker and always produces exactly one
//! record.
//!
//! # Examples
//!
//! ```
//! use git_status_lines::status::change::{parse_change, Group};
//!
//! let items = parse_change("AM src/main.rs").unwrap();
//! assert_eq!(items.len(), 2);
//! assert_eq!(items[0].group, Group::Staged);
//! assert_eq!(items[1].group, Group::Unstaged);
//! assert_eq!(items[1].file, "src/main.rs");
//!
//! let items = parse_change("?? notes.txt").unwrap();
//! assert_eq!(items[0].group, Group::Untracked);
//! assert_eq!(items[0].msg, " untracked");
//! ```

use error_set::error_set;

error_set! {
    /// Errors from parsing a porcelain change line
    ChangeError := {
        /// Line ends before the two status codes and separator
        #[display("Change line '{line}' is too short")]
        TooShort { line: String },
        /// Third character is not the single separating space
        #[display("Missing separator after status codes in '{line}'")]
        MissingSeparator { line: String },
        /// Nothing follows the separator
        #[display("Empty path in change line '{line}'")]
        EmptyPath { line: String },
        /// Status code outside the documented alphabet
        #[display("Unknown status code '{code}' in '{line}'")]
        UnknownCode { code: char, line: String },
        /// Both status columns are blank
        #[display("No change recorded in either column of '{line}'")]
        NoChanges { line: String },
    }
}

/// Which section of the status a change belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    /// Index column: staged for the next commit
    Staged,
    /// Worktree column: present but not staged
    Unstaged,
    /// Not known to the index at all (`??`)
    Untracked,
}

/// Classification of a single change, used to pick display color/icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    NewFile,
    Modified,
    Deleted,
    Renamed,
    Copied,
    Unmerged,
    Untracked,
}

impl ChangeKind {
    /// Status code table: one character of the porcelain code alphabet.
    ///
    /// `?` is deliberately absent: untracked entries are only recognized
    /// as the full `??` pair, never as a lone column code.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'A' => Some(ChangeKind::NewFile),
            'M' => Some(ChangeKind::Modified),
            'D' => Some(ChangeKind::Deleted),
            'R' => Some(ChangeKind::Renamed),
            'C' => Some(ChangeKind::Copied),
            'U' => Some(ChangeKind::Unmerged),
            _ => None,
        }
    }

    /// Fixed-width display label. The leading padding aligns the filename
    /// column and is part of the output contract.
    pub fn label(self) -> &'static str {
        match self {
            ChangeKind::NewFile => "  new file",
            ChangeKind::Modified => "  modified",
            ChangeKind::Deleted => "   deleted",
            ChangeKind::Renamed => "   renamed",
            ChangeKind::Copied => "   copied",
            ChangeKind::Unmerged => " unmerged",
            ChangeKind::Untracked => " untracked",
        }
    }
}

/// One file-level change entry parsed from a porcelain line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusItem {
    /// Path relative to the repository root, verbatim from the input.
    /// Rename lines keep their full `old -> new` text.
    pub file: String,
    /// Which status section the change belongs to
    pub group: Group,
    /// Change classification
    pub kind: ChangeKind,
    /// Fixed-width label, always [`ChangeKind::label`] of `kind`
    pub msg: &'static str,
}

impl StatusItem {
    fn new(file: &str, group: Group, kind: ChangeKind) -> Self {
        StatusItem {
            file: file.to_string(),
            group,
            kind,
            msg: kind.label(),
        }
    }
}

/// Parse one porcelain change line into its status records.
///
/// Returns one record per populated status column: two for lines like
/// `AM path` (staged first, unstaged second), one otherwise. `?? path` is
/// a single untracked record.
///
/// # Examples
///
/// ```
/// use git_status_lines::status::change::{parse_change, ChangeKind, Group};
///
/// let items = parse_change("A  TODO.md").unwrap();
/// assert_eq!(items.len(), 1);
/// assert_eq!(items[0].kind, ChangeKind::NewFile);
/// assert_eq!(items[0].group, Group::Staged);
///
/// // Paths are verbatim: embedded spaces survive
/// let items = parse_change(" M a b.txt").unwrap();
/// assert_eq!(items[0].file, "a b.txt");
/// ```
///
/// # Errors
///
/// Returns [`ChangeError`] if:
/// - The line is shorter than the two codes plus separator
/// - The third character is not a space
/// - The path is empty
/// - A code character is outside the documented alphabet (a lone `?`
///   paired with another code is rejected here)
/// - Both code positions are blank
pub fn parse_change(line: &str) -> Result<Vec<StatusItem>, ChangeError> {
    let mut chars = line.chars();
    let (Some(index), Some(worktree), Some(separator)) =
        (chars.next(), chars.next(), chars.next())
    else {
        return Err(ChangeError::TooShort {
            line: line.to_string(),
        });
    };

    if separator != ' ' {
        return Err(ChangeError::MissingSeparator {
            line: line.to_string(),
        });
    }

    let path = chars.as_str();
    if path.is_empty() {
        return Err(ChangeError::EmptyPath {
            line: line.to_string(),
        });
    }

    // Untracked entries are a single record, never decomposed per column
    if index == '?' && worktree == '?' {
        return Ok(vec![StatusItem::new(
            path,
            Group::Untracked,
            ChangeKind::Untracked,
        )]);
    }

    let mut items = Vec::with_capacity(2);
    if index != ' ' {
        items.push(StatusItem::new(path, Group::Staged, classify(index, line)?));
    }
    if worktree != ' ' {
        items.push(StatusItem::new(
            path,
            Group::Unstaged,
            classify(worktree, line)?,
        ));
    }

    if items.is_empty() {
        return Err(ChangeError::NoChanges {
            line: line.to_string(),
        });
    }

    Ok(items)
}

fn classify(code: char, line: &str) -> Result<ChangeKind, ChangeError> {
    ChangeKind::from_code(code).ok_or_else(|| ChangeError::UnknownCode {
        code,
        line: line.to_string(),
    })
}
