//! End-to-end sweeps over expanded CIDR ranges with stub transports.

use std::net::IpAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use sweepr_common::config::SweepConfig;
use sweepr_common::network::range::HostRange;
use sweepr_core::error::SweepError;
use sweepr_core::observer::NopObserver;
use sweepr_core::prober::{PingProber, ProbeOutcome, Prober};
use sweepr_core::sweep::perform_sweep;

use crate::stubs::{BrokenTransportProber, ParityProber, ReversingProber, StaticProber};

fn expand(cidr: &str) -> Vec<IpAddr> {
    cidr.parse::<HostRange>().expect("valid range").hosts()
}

#[tokio::test]
async fn slash_30_with_every_host_answering() {
    let hosts = expand("192.168.1.0/30");
    assert_eq!(hosts.len(), 2);

    let report = perform_sweep(
        hosts,
        SweepConfig::default(),
        Arc::new(StaticProber { up: true }),
        &NopObserver,
    )
    .await
    .expect("sweep succeeds");

    assert_eq!((report.total, report.up, report.down), (2, 2, 0));
}

#[tokio::test]
async fn slash_30_with_no_host_answering() {
    let report = perform_sweep(
        expand("192.168.1.0/30"),
        SweepConfig::default(),
        Arc::new(StaticProber { up: false }),
        &NopObserver,
    )
    .await
    .expect("sweep succeeds");

    assert_eq!((report.total, report.up, report.down), (2, 0, 2));
}

#[tokio::test]
async fn broken_transport_fails_the_sweep_instead_of_the_hosts() {
    let result = perform_sweep(
        expand("192.168.1.0/30"),
        SweepConfig::default(),
        Arc::new(BrokenTransportProber),
        &NopObserver,
    )
    .await;

    match result {
        Err(SweepError::Transport(reason)) => {
            assert!(reason.contains("not found"), "unexpected reason: {reason}");
        }
        other => panic!("expected a transport failure, got {other:?}"),
    }
}

#[test]
fn invalid_range_is_rejected_before_any_probe() {
    assert!("not-a-network".parse::<HostRange>().is_err());
}

#[tokio::test]
async fn report_holds_one_entry_per_expanded_host() {
    let hosts = expand("10.20.30.0/28");
    let expected = hosts.len();

    let report = perform_sweep(
        hosts,
        SweepConfig::new(4, 100, false),
        Arc::new(ParityProber),
        &NopObserver,
    )
    .await
    .expect("sweep succeeds");

    assert_eq!(report.entries.len(), expected);
    assert_eq!(report.up + report.down, report.total);
    assert_eq!(report.total, expected);
}

#[tokio::test]
async fn final_order_is_independent_of_completion_order() {
    let hosts = expand("10.9.8.0/28");

    // Enough workers that every probe runs at once, finishing in reverse.
    let report = perform_sweep(
        hosts.clone(),
        SweepConfig::new(hosts.len(), 1000, true),
        Arc::new(ReversingProber),
        &NopObserver,
    )
    .await
    .expect("sweep succeeds");

    let reported: Vec<IpAddr> = report.entries.iter().map(|(host, _)| *host).collect();
    assert_eq!(reported, hosts);
}

#[tokio::test]
async fn quiet_mode_still_aggregates_everything() {
    let report = perform_sweep(
        expand("192.168.50.0/29"),
        SweepConfig::new(2, 100, true),
        Arc::new(ParityProber),
        &NopObserver,
    )
    .await
    .expect("sweep succeeds");

    assert_eq!(report.total, 6);
    assert_eq!(report.up + report.down, 6);
}

/// Requires a system ping binary; probes a TEST-NET address that will
/// never answer and checks the probe gives up within a bounded margin.
#[tokio::test]
#[ignore]
async fn ping_prober_gives_up_within_the_timeout_budget() {
    let host: IpAddr = IpAddr::V4(std::net::Ipv4Addr::new(203, 0, 113, 1));
    let started = Instant::now();

    let outcome = PingProber.probe(host, Duration::from_millis(200)).await;

    assert_eq!(outcome, ProbeOutcome::Down);
    assert!(
        started.elapsed() < Duration::from_secs(3),
        "probe hung for {:?}",
        started.elapsed()
    );
}
