mod args;
mod observer;
mod terminal;

use std::process;
use std::sync::Arc;

use tracing::error;

use args::CommandLine;
use observer::LogObserver;
use sweepr_common::config::SweepConfig;
use sweepr_core::error::SweepError;
use sweepr_core::prober::PingProber;
use sweepr_core::sweep;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLine::parse_args();

    terminal::logging::init();

    let cfg = SweepConfig::new(cli.workers, cli.timeout, cli.quiet);
    let hosts = cli.network.hosts();
    let observer = LogObserver::new(cli.network);

    match sweep::perform_sweep(hosts, cfg, Arc::new(PingProber), &observer).await {
        Ok(_report) => Ok(()),
        Err(SweepError::Transport(reason)) => {
            error!("fatal: {reason}");
            process::exit(2);
        }
        Err(err) => Err(err.into()),
    }
}
