use std::net::IpAddr;
use std::time::Duration;

use crate::prober::ProbeOutcome;

/// Accumulates probe completions in whatever order they arrive and
/// produces the final report in ascending address order.
///
/// Only one context writes to it at a time: completions reach it through
/// the scheduler's result channel, never from the probe tasks directly.
#[derive(Debug, Default)]
pub struct Aggregator {
    entries: Vec<(IpAddr, ProbeOutcome)>,
}

impl Aggregator {
    pub fn with_capacity(hosts: usize) -> Self {
        Self {
            entries: Vec::with_capacity(hosts),
        }
    }

    pub fn record(&mut self, host: IpAddr, outcome: ProbeOutcome) {
        self.entries.push((host, outcome));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hosts(&self) -> impl Iterator<Item = IpAddr> + '_ {
        self.entries.iter().map(|(host, _)| *host)
    }

    /// Seals the aggregation: sorts entries back into range order and
    /// computes the summary counts.
    pub fn finish(mut self, elapsed: Duration) -> SweepReport {
        self.entries.sort_by_key(|(host, _)| *host);

        let total = self.entries.len();
        let up = self
            .entries
            .iter()
            .filter(|(_, outcome)| *outcome == ProbeOutcome::Up)
            .count();

        SweepReport {
            entries: self.entries,
            up,
            down: total - up,
            total,
            elapsed,
        }
    }
}

/// The outcome of a whole sweep, owned by the caller.
#[derive(Debug, Clone)]
pub struct SweepReport {
    /// One entry per probed host, ascending by address.
    pub entries: Vec<(IpAddr, ProbeOutcome)>,
    pub up: usize,
    pub down: usize,
    pub total: usize,
    pub elapsed: Duration,
}
