//! Configuration for a search run.

#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Largest integer scale factor applied to each template (inclusive).
    pub max_scale: u32,
    /// Number of cooperating workers the reference column range is split across.
    pub worker_count: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_scale: 3,
            worker_count: 1,
        }
    }
}
