//! # Reachability Probing
//!
//! A probe is one liveness check against one host, bounded by a hard
//! timeout. The [`Prober`] trait is the seam the scheduler parallelizes
//! over; [`PingProber`] is the default transport and shells out to the
//! operating system's ping binary. Alternate transports (raw ICMP, TCP
//! connect) slot in without touching the scheduler.

use std::io;
use std::net::IpAddr;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::warn;

/// Slack on top of the configured timeout before a probe subprocess is
/// abandoned. The child enforces the real deadline through its own
/// flags; the guard only covers process startup and teardown.
const PROBE_GRACE: Duration = Duration::from_millis(500);

/// The single externally observable result of one probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The host answered within the timeout.
    Up,
    /// The probe ran to completion but could not confirm reachability.
    Down,
    /// The probing mechanism itself could not run. Fatal for the sweep,
    /// never recorded against the host.
    TransportError(String),
}

/// A single-shot reachability check.
///
/// Implementations enforce `limit` as an upper bound on wall-clock time
/// and perform no retries; one call is one unit of concurrency.
#[async_trait]
pub trait Prober: Send + Sync + 'static {
    async fn probe(&self, host: IpAddr, limit: Duration) -> ProbeOutcome;
}

/// Probes by running the system ping binary once per host.
///
/// Reachability is the child's exit status. A binary that cannot be
/// executed at all surfaces as [`ProbeOutcome::TransportError`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PingProber;

#[async_trait]
impl Prober for PingProber {
    async fn probe(&self, host: IpAddr, limit: Duration) -> ProbeOutcome {
        let mut cmd = ping_command(host, limit);
        cmd.stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        match timeout(limit + PROBE_GRACE, cmd.status()).await {
            Ok(Ok(status)) if status.success() => ProbeOutcome::Up,
            Ok(Ok(_)) => ProbeOutcome::Down,
            Ok(Err(err)) if is_transport_failure(&err) => {
                ProbeOutcome::TransportError(format!("cannot run 'ping': {err}"))
            }
            Ok(Err(err)) => {
                warn!("probe of {host} failed to run ({err}), treating as down");
                ProbeOutcome::Down
            }
            // The guard elapsing kills the child on drop.
            Err(_elapsed) => ProbeOutcome::Down,
        }
    }
}

fn is_transport_failure(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied
    )
}

#[cfg(windows)]
fn ping_command(host: IpAddr, limit: Duration) -> Command {
    let mut cmd = Command::new("ping");
    cmd.args(["-n", "1", "-w"])
        .arg(limit.as_millis().to_string())
        .arg(host.to_string());
    cmd
}

#[cfg(not(windows))]
fn ping_command(host: IpAddr, limit: Duration) -> Command {
    // ping(8) takes -W in whole seconds; round up so sub-second budgets
    // still wait at least one second inside the child.
    let secs: u128 = limit.as_millis().div_ceil(1000).max(1);

    let mut cmd = Command::new("ping");
    cmd.args(["-c", "1", "-W"])
        .arg(secs.to_string())
        .arg(host.to_string());
    cmd
}
