//! Structured sweep events.
//!
//! The engine never prints; whoever drives it supplies a sink and decides
//! how (and whether) to render. A fatal transport failure is not an event
//! here, it travels through the scheduler's error return.

use std::net::IpAddr;

use crate::report::SweepReport;

/// Receives sweep events as they happen.
///
/// Called from the scheduler's own context, never from probe tasks, so
/// implementations see events one at a time.
pub trait SweepObserver: Send + Sync {
    fn sweep_started(&self, _hosts: usize, _workers: usize) {}

    /// One completed probe. Suppressed entirely in quiet mode.
    fn host_result(&self, _host: IpAddr, _up: bool) {}

    fn sweep_finished(&self, _report: &SweepReport) {}
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NopObserver;

impl SweepObserver for NopObserver {}
