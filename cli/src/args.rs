use clap::Parser;

use sweepr_common::config::{DEFAULT_TIMEOUT_MS, DEFAULT_WORKERS};
use sweepr_common::network::range::HostRange;

#[derive(Parser)]
#[command(name = "sweepr")]
#[command(about = "Parallel ping sweep over a network range.")]
pub struct CommandLine {
    /// Network to sweep, in CIDR form (e.g. 192.168.1.0/24)
    pub network: HostRange,

    /// Upper bound on probes running at once
    #[arg(long, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Per-probe timeout in milliseconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout: u64,

    /// Suppress the per-host UP/DOWN lines
    #[arg(long, short)]
    pub quiet: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
