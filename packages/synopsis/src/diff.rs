//! Word-level diff between two segment texts.
//!
//! The edit script comes from a longest-common-subsequence table over the
//! whitespace-separated tokens. Where a deletion and an insertion compete the
//! deletion is taken first, so a substituted word renders as old-then-new.

use crate::config::{DELETE_COLOR, INSERT_COLOR};
use crate::html::{highlight, TextMode};

/// One step of the edit script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffOp<'a> {
    Equal(&'a str),
    Delete(&'a str),
    Insert(&'a str),
}

/// Compute the word-level edit script turning `old` into `new`.
pub fn diff_words<'a>(old: &'a str, new: &'a str) -> Vec<DiffOp<'a>> {
    let a: Vec<&str> = old.split_whitespace().collect();
    let b: Vec<&str> = new.split_whitespace().collect();
    let (n, m) = (a.len(), b.len());

    // lcs[i][j] = LCS length of a[i..] and b[j..]
    let mut lcs = vec![vec![0u32; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[i][j] = if a[i] == b[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut ops = Vec::with_capacity(n.max(m));
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if a[i] == b[j] {
            ops.push(DiffOp::Equal(a[i]));
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            ops.push(DiffOp::Delete(a[i]));
            i += 1;
        } else {
            ops.push(DiffOp::Insert(b[j]));
            j += 1;
        }
    }
    ops.extend(a[i..].iter().map(|&t| DiffOp::Delete(t)));
    ops.extend(b[j..].iter().map(|&t| DiffOp::Insert(t)));
    ops
}

/// Render the diff of `old` and `new` as inline HTML.
///
/// Every token is followed by a single space.
///
/// # Examples
/// ```
/// use da_synopsis::diff::render_diff_html;
/// use da_synopsis::html::TextMode;
///
/// assert_eq!(render_diff_html("a b c", "a b c", TextMode::Raw), "a b c ");
/// ```
#[must_use]
pub fn render_diff_html(old: &str, new: &str, mode: TextMode) -> String {
    let mut html = String::new();
    for op in diff_words(old, new) {
        match op {
            DiffOp::Equal(token) => html.push_str(&mode.apply(token)),
            DiffOp::Delete(token) => html.push_str(&highlight(&mode.apply(token), DELETE_COLOR)),
            DiffOp::Insert(token) => html.push_str(&highlight(&mode.apply(token), INSERT_COLOR)),
        }
        html.push(' ');
    }
    html
}
