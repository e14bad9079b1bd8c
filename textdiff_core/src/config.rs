/// Upper bound on lines per side accepted by the browser bindings.
pub const DEFAULT_MAX_LINES: usize = 10_000;
/// Upper bound on edit-table cells, (m + 1) * (n + 1).
pub const DEFAULT_MAX_CELLS: usize = 16_000_000;
/// Unchanged lines shown around each change in unified output.
pub const DEFAULT_CONTEXT_LINES: usize = 3;

/// Configuration for diff generation.
///
/// The edit table costs O(m * n) time and memory, so the guarded entry point
/// refuses inputs past these limits before allocating anything. A limit of `0`
/// turns that particular check off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffConfig {
    /// Maximum number of lines on either side.
    pub max_lines: usize,
    /// Maximum number of cells in the edit table.
    pub max_cells: usize,
    /// Number of context lines around changes in unified output.
    pub context_lines: usize,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            max_cells: DEFAULT_MAX_CELLS,
            context_lines: DEFAULT_CONTEXT_LINES,
        }
    }
}

impl DiffConfig {
    /// A config with both size checks disabled.
    pub fn unbounded() -> Self {
        Self {
            max_lines: 0,
            max_cells: 0,
            ..Self::default()
        }
    }

    pub fn with_context_lines(mut self, context_lines: usize) -> Self {
        self.context_lines = context_lines;
        self
    }

    pub(crate) fn line_limit(&self) -> Option<usize> {
        (self.max_lines > 0).then_some(self.max_lines)
    }

    pub(crate) fn cell_limit(&self) -> Option<usize> {
        (self.max_cells > 0).then_some(self.max_cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits_are_enabled() {
        let config = DiffConfig::default();
        assert_eq!(config.line_limit(), Some(DEFAULT_MAX_LINES));
        assert_eq!(config.cell_limit(), Some(DEFAULT_MAX_CELLS));
        assert_eq!(config.context_lines, 3);
    }

    #[test]
    fn unbounded_disables_both_checks() {
        let config = DiffConfig::unbounded();
        assert_eq!(config.line_limit(), None);
        assert_eq!(config.cell_limit(), None);
        assert_eq!(config.context_lines, DEFAULT_CONTEXT_LINES);
    }

    #[test]
    fn with_context_lines_overrides_only_context() {
        let config = DiffConfig::default().with_context_lines(1);
        assert_eq!(config.context_lines, 1);
        assert_eq!(config.max_lines, DEFAULT_MAX_LINES);
    }
}
