use std::time::Duration;

pub const DEFAULT_WORKERS: usize = 32;
pub const DEFAULT_TIMEOUT_MS: u64 = 300;

/// Per-sweep settings, fixed before the first probe goes out.
#[derive(Debug, Clone, Copy)]
pub struct SweepConfig {
    /// Upper bound on probes running at the same instant.
    pub workers: usize,
    /// Hard wall-clock budget for a single probe.
    pub timeout: Duration,
    /// Suppresses the per-host reporting.
    ///
    /// Does not stop outcomes from being aggregated.
    pub quiet: bool,
}

impl SweepConfig {
    /// Builds a config with the floors applied: at least one worker and
    /// at least one millisecond of timeout.
    pub fn new(workers: usize, timeout_ms: u64, quiet: bool) -> Self {
        Self {
            workers: workers.max(1),
            timeout: Duration::from_millis(timeout_ms.max(1)),
            quiet,
        }
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WORKERS, DEFAULT_TIMEOUT_MS, false)
    }
}
