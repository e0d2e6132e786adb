//! Positional line diff
//!
//! Compares two texts line by line at matching indexes. This is not an
//! edit-distance diff: an insertion or deletion shifts every following line
//! and cascades as modified entries. Callers rendering side-by-side views
//! rely on that row alignment.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Classification of one diff row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffLineKind {
    Added,
    Removed,
    Modified,
    Unchanged,
}

/// One row of the comparison
///
/// `line_number` is 1-based. The side a line does not exist on is an empty
/// string, keeping both columns renderable at every row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLine {
    pub kind: DiffLineKind,
    pub line_number: usize,
    pub left: String,
    pub right: String,
}

/// Comparison toggles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffOptions {
    pub ignore_case: bool,
    pub ignore_whitespace: bool,
}

impl DiffOptions {
    /// Create options with both toggles off
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowercase both sides before comparing
    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// Collapse whitespace runs and trim both sides before comparing
    pub fn with_ignore_whitespace(mut self, ignore_whitespace: bool) -> Self {
        self.ignore_whitespace = ignore_whitespace;
        self
    }
}

/// Aggregate counts over a diff
///
/// A modified row increments both `added` and `removed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub unchanged: usize,
}

/// Compare two texts positionally, line by line
///
/// Both inputs empty yields no rows. Otherwise each text is split on `\n`
/// and index `i` of one side is compared to index `i` of the other:
/// right-only indexes are added, left-only removed, and the rest unchanged
/// or modified after normalization per `options`.
///
/// # Example
///
/// ```rust
/// use devkit_core::diff::{diff, DiffLineKind, DiffOptions};
///
/// let rows = diff("a\nb\nc", "a\nx\nc", &DiffOptions::new());
/// assert_eq!(rows[1].kind, DiffLineKind::Modified);
/// assert_eq!(rows[1].line_number, 2);
/// ```
pub fn diff(left: &str, right: &str, options: &DiffOptions) -> Vec<DiffLine> {
    if left.is_empty() && right.is_empty() {
        return Vec::new();
    }

    let left_lines: Vec<&str> = left.split('\n').collect();
    let right_lines: Vec<&str> = right.split('\n').collect();
    let max_lines = left_lines.len().max(right_lines.len());
    debug!(
        left_lines = left_lines.len(),
        right_lines = right_lines.len(),
        "computing positional diff"
    );

    let mut rows = Vec::with_capacity(max_lines);
    for i in 0..max_lines {
        let line_number = i + 1;
        if i >= left_lines.len() {
            rows.push(DiffLine {
                kind: DiffLineKind::Added,
                line_number,
                left: String::new(),
                right: right_lines[i].to_string(),
            });
        } else if i >= right_lines.len() {
            rows.push(DiffLine {
                kind: DiffLineKind::Removed,
                line_number,
                left: left_lines[i].to_string(),
                right: String::new(),
            });
        } else {
            let kind = if normalize(left_lines[i], options) == normalize(right_lines[i], options)
            {
                DiffLineKind::Unchanged
            } else {
                DiffLineKind::Modified
            };
            rows.push(DiffLine {
                kind,
                line_number,
                left: left_lines[i].to_string(),
                right: right_lines[i].to_string(),
            });
        }
    }
    rows
}

/// Count added, removed, and unchanged rows
pub fn stats(rows: &[DiffLine]) -> DiffStats {
    let mut totals = DiffStats::default();
    for row in rows {
        match row.kind {
            DiffLineKind::Added => totals.added += 1,
            DiffLineKind::Removed => totals.removed += 1,
            DiffLineKind::Modified => {
                totals.added += 1;
                totals.removed += 1;
            }
            DiffLineKind::Unchanged => totals.unchanged += 1,
        }
    }
    totals
}

/// Render a diff as prefixed plain text
///
/// Added rows get `+ `, removed rows `- `, unchanged rows two spaces. A
/// modified row renders as its removed line followed by its added line.
/// Every row ends with a newline.
pub fn unified_text(rows: &[DiffLine]) -> String {
    let mut out = String::new();
    for row in rows {
        match row.kind {
            DiffLineKind::Modified => {
                out.push_str("- ");
                out.push_str(&row.left);
                out.push_str("\n+ ");
                out.push_str(&row.right);
                out.push('\n');
            }
            DiffLineKind::Added => {
                out.push_str("+ ");
                out.push_str(&row.right);
                out.push('\n');
            }
            DiffLineKind::Removed => {
                out.push_str("- ");
                out.push_str(&row.left);
                out.push('\n');
            }
            DiffLineKind::Unchanged => {
                let text = if row.left.is_empty() { &row.right } else { &row.left };
                out.push_str("  ");
                out.push_str(text);
                out.push('\n');
            }
        }
    }
    out
}

fn normalize(text: &str, options: &DiffOptions) -> String {
    let mut normalized = text.to_string();
    if options.ignore_case {
        normalized = normalized.to_lowercase();
    }
    if options.ignore_whitespace {
        normalized = normalized.split_whitespace().collect::<Vec<_>>().join(" ");
    }
    normalized
}
