use std::net::IpAddr;

use colored::*;
use tracing::info;

use sweepr_common::network::range::HostRange;
use sweepr_core::observer::SweepObserver;
use sweepr_core::report::SweepReport;

/// Renders engine events as log lines.
pub struct LogObserver {
    range: HostRange,
}

impl LogObserver {
    pub fn new(range: HostRange) -> Self {
        Self { range }
    }
}

impl SweepObserver for LogObserver {
    fn sweep_started(&self, hosts: usize, workers: usize) {
        info!(
            "Starting sweep of {} ({hosts} hosts) with {workers} workers",
            self.range
        );
    }

    fn host_result(&self, host: IpAddr, up: bool) {
        let state: ColoredString = if up { "UP".green().bold() } else { "DOWN".red() };
        info!("{host} is {state}");
    }

    fn sweep_finished(&self, report: &SweepReport) {
        info!(
            "Sweep finished: {}/{} hosts up ({:.1}s)",
            report.up,
            report.total,
            report.elapsed.as_secs_f64()
        );
    }
}
