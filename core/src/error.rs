use thiserror::Error;

/// Failures that abort a sweep as a whole.
///
/// A host that simply does not answer is never an error; it is recorded
/// as a normal down outcome.
#[derive(Debug, Error)]
pub enum SweepError {
    /// The probing mechanism itself cannot run (missing binary,
    /// permission denial). Per-host outcomes are meaningless past this.
    #[error("probe transport unusable: {0}")]
    Transport(String),

    /// The worker pool closed while probes were still pending.
    #[error("sweep worker pool closed while probes were pending")]
    PoolClosed,
}
