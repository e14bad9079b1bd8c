//! Line-level edit-distance matrix.

/// An (m + 1) x (n + 1) matrix where `get(i, j)` is the minimum number of
/// single-line insert, remove or replace operations turning the first `i`
/// lines of the old sequence into the first `j` lines of the new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTable {
    cells: Vec<usize>,
    cols: usize,
}

impl EditTable {
    /// Fills the table bottom-up, row by row.
    pub fn build(old: &[&str], new: &[&str]) -> Self {
        let rows = old.len() + 1;
        let cols = new.len() + 1;
        let mut cells = vec![0usize; rows * cols];

        for i in 0..rows {
            for j in 0..cols {
                let value = if i == 0 {
                    j
                } else if j == 0 {
                    i
                } else if old[i - 1] == new[j - 1] {
                    cells[(i - 1) * cols + (j - 1)]
                } else {
                    let up = cells[(i - 1) * cols + j];
                    let left = cells[i * cols + (j - 1)];
                    let diag = cells[(i - 1) * cols + (j - 1)];
                    1 + up.min(left).min(diag)
                };
                cells[i * cols + j] = value;
            }
        }

        Self { cells, cols }
    }

    /// Cost at row `i` (old prefix length) and column `j` (new prefix length).
    ///
    /// # Panics
    /// Panics if `i` or `j` is outside the table.
    pub fn get(&self, i: usize, j: usize) -> usize {
        assert!(i < self.rows(), "row {i} out of range");
        assert!(j < self.cols, "column {j} out of range");
        self.cells[i * self.cols + j]
    }

    pub fn rows(&self) -> usize {
        self.cells.len() / self.cols
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Edit distance between the two full sequences.
    pub fn distance(&self) -> usize {
        self.cells[self.cells.len() - 1]
    }
}
