//! # Sweep Scheduler
//!
//! The concurrency core. One task per host, a semaphore caps how many
//! probes run at once, and every completion flows back over a single
//! result channel so aggregation never races.
//!
//! A transport failure flips an abort flag checked before each new
//! submission: nothing further is dispatched, probes already in flight
//! drain to completion, and the sweep fails as a whole.

use std::collections::HashSet;
use std::net::IpAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use tokio::sync::{Semaphore, mpsc};
use tracing::{debug, warn};

use sweepr_common::config::SweepConfig;

use crate::error::SweepError;
use crate::observer::SweepObserver;
use crate::prober::{ProbeOutcome, Prober};
use crate::report::{Aggregator, SweepReport};

/// Probes every host with at most `cfg.workers` probes in flight and
/// returns the aggregated outcomes in ascending address order.
///
/// Every submitted host is accounted for exactly once: a probe task that
/// dies without reporting is reconciled as down rather than dropped.
pub async fn perform_sweep<P, O>(
    hosts: Vec<IpAddr>,
    cfg: SweepConfig,
    prober: Arc<P>,
    observer: &O,
) -> Result<SweepReport, SweepError>
where
    P: Prober + ?Sized,
    O: SweepObserver + ?Sized,
{
    let started: Instant = Instant::now();
    observer.sweep_started(hosts.len(), cfg.workers);

    let pool = Arc::new(Semaphore::new(cfg.workers));
    let abort = Arc::new(AtomicBool::new(false));
    let (results_tx, mut results_rx) = mpsc::unbounded_channel();

    let mut submitted: Vec<IpAddr> = Vec::with_capacity(hosts.len());

    for host in hosts {
        let permit = pool
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| SweepError::PoolClosed)?;

        if abort.load(Ordering::Relaxed) {
            debug!("transport failure reported, halting submissions");
            break;
        }

        let prober = prober.clone();
        let tx = results_tx.clone();
        let abort = abort.clone();
        let limit = cfg.timeout;

        tokio::spawn(async move {
            let _permit = permit;
            let outcome = prober.probe(host, limit).await;

            if matches!(outcome, ProbeOutcome::TransportError(_)) {
                abort.store(true, Ordering::Relaxed);
            }

            // The receiver outlives every task; a send only fails when
            // the whole sweep future has been dropped.
            let _ = tx.send((host, outcome));
        });

        submitted.push(host);
    }
    drop(results_tx);

    let mut aggregator = Aggregator::with_capacity(submitted.len());
    let mut transport_failure: Option<String> = None;

    while let Some((host, outcome)) = results_rx.recv().await {
        match outcome {
            ProbeOutcome::TransportError(reason) => {
                warn!("probe transport failed on {host}: {reason}");
                if transport_failure.is_none() {
                    transport_failure = Some(reason);
                }
            }
            outcome => {
                if !cfg.quiet {
                    observer.host_result(host, outcome == ProbeOutcome::Up);
                }
                aggregator.record(host, outcome);
            }
        }
    }

    if let Some(reason) = transport_failure {
        return Err(SweepError::Transport(reason));
    }

    // A probe task that panicked never sent its result. Count the host
    // as down instead of leaving it out of the report.
    if aggregator.len() < submitted.len() {
        let reported: HashSet<IpAddr> = aggregator.hosts().collect();

        for host in submitted {
            if !reported.contains(&host) {
                warn!("probe of {host} died without reporting, marking it down");
                aggregator.record(host, ProbeOutcome::Down);
            }
        }
    }

    let report = aggregator.finish(started.elapsed());
    observer.sweep_finished(&report);
    Ok(report)
}
