//! glance load-test harness - entry point.
//!
//! Ramps virtual users against the backend's `GET /health` endpoint
//! following a trapezoid profile (ramp up, hold, ramp down) and prints
//! a request/failure summary at the end. This is a validation tool for
//! the backend, not part of the client itself.

mod profile;

use anyhow::Result;
use clap::Parser;
use profile::Profile;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// glance backend load-test harness
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
struct Args {
    /// Backend origin to exercise (e.g. http://127.0.0.1:8080)
    #[arg(short, long, default_value = "http://127.0.0.1:8080")]
    target: String,

    /// Peak number of concurrent virtual users
    #[arg(long, default_value_t = 100)]
    peak_users: usize,

    /// Ramp-up stage duration in seconds
    #[arg(long, default_value_t = 120)]
    ramp_up_secs: u64,

    /// Hold stage duration in seconds
    #[arg(long, default_value_t = 300)]
    hold_secs: u64,

    /// Ramp-down stage duration in seconds
    #[arg(long, default_value_t = 120)]
    ramp_down_secs: u64,

    /// Pause between requests per virtual user, in milliseconds
    #[arg(long, default_value_t = 1_000)]
    interval_ms: u64,
}

/// Shared request counters across all virtual users.
#[derive(Debug, Default)]
struct Counters {
    requests: AtomicU64,
    failures: AtomicU64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    glance_telemetry::init_logging()?;
    info!("Starting glance-loadtest v{}", env!("CARGO_PKG_VERSION"));

    let profile = Profile {
        peak_users: args.peak_users,
        ramp_up: Duration::from_secs(args.ramp_up_secs),
        hold: Duration::from_secs(args.hold_secs),
        ramp_down: Duration::from_secs(args.ramp_down_secs),
    };
    info!(
        target = %args.target,
        peak_users = profile.peak_users,
        total_secs = profile.total().as_secs(),
        "Load profile"
    );

    let counters = run(&args, profile).await?;

    let requests = counters.requests.load(Ordering::SeqCst);
    let failures = counters.failures.load(Ordering::SeqCst);
    println!("requests: {requests}");
    println!("failures: {failures}");
    if failures > 0 {
        warn!(failures, "Load test saw failed health checks");
    }

    Ok(())
}

/// Spawn one task per virtual user and wait for the whole run.
async fn run(args: &Args, profile: Profile) -> Result<Arc<Counters>> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()?;
    let counters = Arc::new(Counters::default());
    let started = Instant::now();

    let mut tasks = Vec::with_capacity(profile.peak_users);
    for vu in 0..profile.peak_users {
        let (start, end) = profile.window(vu);
        let client = client.clone();
        let counters = Arc::clone(&counters);
        let url = format!("{}/health", args.target);
        let interval = Duration::from_millis(args.interval_ms);

        tasks.push(tokio::spawn(async move {
            tokio::time::sleep(start.saturating_sub(started.elapsed())).await;
            debug!(vu, "Virtual user started");

            while started.elapsed() < end {
                counters.requests.fetch_add(1, Ordering::SeqCst);
                let healthy = match client.get(&url).send().await {
                    Ok(response) => response.status() == reqwest::StatusCode::OK,
                    Err(_) => false,
                };
                if !healthy {
                    counters.failures.fetch_add(1, Ordering::SeqCst);
                }
                tokio::time::sleep(interval).await;
            }
            debug!(vu, "Virtual user stopped");
        }));
    }

    for task in tasks {
        task.await?;
    }
    Ok(counters)
}
