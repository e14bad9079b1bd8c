use std::fmt;

use thiserror::Error;

/// Which input a size violation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Old,
    New,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Old => f.write_str("original"),
            Side::New => f.write_str("new"),
        }
    }
}

/// Errors from the size-guarded diff entry point.
///
/// The engine itself is total; these only come from `DiffConfig` limits.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    #[error("{side} text has {lines} lines, limit is {limit}")]
    TooManyLines {
        side: Side,
        lines: usize,
        limit: usize,
    },

    #[error("diff table would need {cells} cells, limit is {limit}")]
    TableTooLarge { cells: usize, limit: usize },
}

// The wasm bindings report errors as plain strings.
impl From<DiffError> for String {
    fn from(err: DiffError) -> Self {
        err.to_string()
    }
}
