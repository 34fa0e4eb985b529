/// Decoder tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeConfig {
    /// Minimum row count at which frame extraction and parity checks run
    /// row-parallel. `0` always parallelizes, `usize::MAX` never does.
    pub parallel_row_threshold: usize,
}

impl DecodeConfig {
    pub const DEFAULT_PARALLEL_ROW_THRESHOLD: usize = 512;

    /// Configuration that never spawns rayon work
    pub fn sequential() -> Self {
        Self {
            parallel_row_threshold: usize::MAX,
        }
    }

    /// Configuration that always uses the rayon pool
    pub fn parallel() -> Self {
        Self {
            parallel_row_threshold: 0,
        }
    }

    pub(crate) fn use_parallel(&self, rows: usize) -> bool {
        rows >= self.parallel_row_threshold
    }
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            parallel_row_threshold: Self::DEFAULT_PARALLEL_ROW_THRESHOLD,
        }
    }
}
