//! Line diff between two texts using an edit-distance table and backtrace.
//! Every output line is classified as common, added or removed.

use std::fmt;

use serde::Serialize;

use crate::config::DiffConfig;
use crate::error::{DiffError, Side};

pub mod render;
pub mod table;

pub use render::{numbered_lines, render_report, render_unified, NumberedLine, REPORT_FILE_NAME};
pub use table::EditTable;

/// A single classified line of diff output, borrowed from the input text.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum DiffOp<'a> {
    /// Line present in both texts
    Common(&'a str),
    /// Line only present in the new text
    Added(&'a str),
    /// Line only present in the original text
    Removed(&'a str),
}

impl<'a> DiffOp<'a> {
    pub fn content(&self) -> &'a str {
        match *self {
            DiffOp::Common(line) | DiffOp::Added(line) | DiffOp::Removed(line) => line,
        }
    }

    /// Lowercase tag used in serialized output and text reports.
    pub fn kind(&self) -> &'static str {
        match self {
            DiffOp::Common(_) => "common",
            DiffOp::Added(_) => "added",
            DiffOp::Removed(_) => "removed",
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, DiffOp::Common(_))
    }
}

impl fmt::Display for DiffOp<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind(), self.content())
    }
}

/// Statistics about the diff
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    /// Number of lines added
    pub added: usize,
    /// Number of lines removed
    pub removed: usize,
    /// Number of lines common to both texts
    pub unchanged: usize,
}

impl DiffStats {
    pub fn from_ops(ops: &[DiffOp<'_>]) -> Self {
        let mut stats = Self::default();
        for op in ops {
            stats.record(op);
        }
        stats
    }

    fn record(&mut self, op: &DiffOp<'_>) {
        match op {
            DiffOp::Common(_) => self.unchanged += 1,
            DiffOp::Added(_) => self.added += 1,
            DiffOp::Removed(_) => self.removed += 1,
        }
    }

    /// Total number of added and removed lines.
    pub fn changes(&self) -> usize {
        self.added + self.removed
    }
}

/// Result of a text diff operation
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DiffResult<'a> {
    /// Classified lines in forward reading order
    pub ops: Vec<DiffOp<'a>>,
    /// Summary statistics
    pub stats: DiffStats,
}

impl<'a> DiffResult<'a> {
    /// The original line sequence: every op except additions.
    pub fn old_lines(&self) -> Vec<&'a str> {
        self.ops
            .iter()
            .filter(|op| !matches!(op, DiffOp::Added(_)))
            .map(DiffOp::content)
            .collect()
    }

    /// The new line sequence: every op except removals.
    pub fn new_lines(&self) -> Vec<&'a str> {
        self.ops
            .iter()
            .filter(|op| !matches!(op, DiffOp::Removed(_)))
            .map(DiffOp::content)
            .collect()
    }

    pub fn is_identical(&self) -> bool {
        self.stats.changes() == 0
    }
}

/// Splits text on `\n` only. Empty input is one empty line, a trailing newline
/// yields a trailing empty line, and `\r` is kept.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Diffs two texts line by line.
///
/// Cost is O(m * n) in both time and memory with no size limit; use
/// [`compute_diff_with`] for untrusted input.
pub fn compute_diff<'a>(old_text: &'a str, new_text: &'a str) -> DiffResult<'a> {
    let old_lines = split_lines(old_text);
    let new_lines = split_lines(new_text);
    diff_lines(&old_lines, &new_lines)
}

/// Diffs two texts after checking their size against `config`.
pub fn compute_diff_with<'a>(
    old_text: &'a str,
    new_text: &'a str,
    config: &DiffConfig,
) -> Result<DiffResult<'a>, DiffError> {
    let old_lines = split_lines(old_text);
    let new_lines = split_lines(new_text);
    if let Err(err) = check_size(old_lines.len(), new_lines.len(), config) {
        log::warn!("refusing text diff: {err}");
        return Err(err);
    }
    Ok(diff_lines(&old_lines, &new_lines))
}

fn check_size(old_len: usize, new_len: usize, config: &DiffConfig) -> Result<(), DiffError> {
    if let Some(limit) = config.line_limit() {
        for (side, lines) in [(Side::Old, old_len), (Side::New, new_len)] {
            if lines > limit {
                return Err(DiffError::TooManyLines { side, lines, limit });
            }
        }
    }
    if let Some(limit) = config.cell_limit() {
        let cells = (old_len + 1).saturating_mul(new_len + 1);
        if cells > limit {
            return Err(DiffError::TableTooLarge { cells, limit });
        }
    }
    Ok(())
}

/// Diffs two already split line sequences.
pub fn diff_lines<'a>(old: &[&'a str], new: &[&'a str]) -> DiffResult<'a> {
    log::debug!("diffing {} against {} lines", old.len(), new.len());
    let table = EditTable::build(old, new);
    let ops = backtrace(&table, old, new);
    let stats = DiffStats::from_ops(&ops);
    DiffResult { ops, stats }
}

fn backtrace<'a>(table: &EditTable, old: &[&'a str], new: &[&'a str]) -> Vec<DiffOp<'a>> {
    let mut i = old.len();
    let mut j = new.len();
    let mut ops = Vec::with_capacity(i + j);

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && old[i - 1] == new[j - 1] {
            ops.push(DiffOp::Common(old[i - 1]));
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table.get(i, j - 1) < table.get(i - 1, j)) {
            // Strict: on equal cost the removal is taken first, which puts
            // the addition ahead of it once the ops are reversed.
            ops.push(DiffOp::Added(new[j - 1]));
            j -= 1;
        } else {
            ops.push(DiffOp::Removed(old[i - 1]));
            i -= 1;
        }
    }

    ops.reverse();
    ops
}
