use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use jemallocator::Jemalloc;
use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;
use tokio_util::sync::CancellationToken;

#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use spectra::{
    overview::ProtocolOverview, ChainId, NetworkRegistry, OverviewLoader, Settings, SubgraphClient,
};

#[tokio::main()]
async fn main() -> anyhow::Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()
        .unwrap();

    // Load configuration
    let settings = Settings::new()
        .context("Failed to load config.yaml. Please ensure it exists and is valid")?;

    // The registry is built once here and passed explicitly to everything
    // that needs network metadata
    let registry = Arc::new(settings.build_registry());
    if registry.is_empty() {
        anyhow::bail!("No enabled networks configured");
    }

    let active = settings.active_network();
    registry
        .get(&active)
        .context("Active network is not an enabled network")?;

    info!(
        "Dashboard configured with {} network(s), active: {}",
        registry.len(),
        active
    );
    for network in registry.iter() {
        info!("  - {} ({})", network.name, network.id);
    }

    let client = Arc::new(
        SubgraphClient::new(Duration::from_secs(settings.http.timeout_secs))
            .context("Failed to initialize subgraph client")?,
    );

    let loader = OverviewLoader::new(
        registry.clone(),
        client,
        settings.dashboard.max_series_rows,
    );

    let refresh_interval = Duration::from_secs(settings.dashboard.refresh_interval_secs);

    let cancellation_token = CancellationToken::new();
    let dashboard_token = cancellation_token.child_token();
    let dashboard_handle = tokio::spawn(async move {
        run_dashboard(loader, active, registry, refresh_interval, dashboard_token).await;
    });

    info!(
        "Dashboard running, refreshing every {:?}. Press Ctrl+C to stop.",
        refresh_interval
    );

    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm_stream =
            signal(SignalKind::terminate()).context("Failed to install SIGTERM handler")?;

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Received shutdown signal (Ctrl+C), exiting gracefully...");
            },
            _ = sigterm_stream.recv() => {
                info!("Received SIGTERM, exiting gracefully...");
            },
        };
    }

    #[cfg(not(unix))]
    {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Received shutdown signal (Ctrl+C), exiting gracefully...");
            },
        };
    }

    // Cancel the refresh loop; an in-flight fetch is abandoned, not awaited
    cancellation_token.cancel();
    let _ = dashboard_handle.await;

    info!("Dashboard stopped");
    Ok(())
}

/// Refresh loop: pull, render, sleep, until cancelled.
///
/// Each cycle recomputes everything from scratch; a cycle cut short by
/// cancellation is simply discarded.
async fn run_dashboard(
    loader: OverviewLoader,
    active: ChainId,
    registry: Arc<NetworkRegistry>,
    refresh_interval: Duration,
    cancellation_token: CancellationToken,
) {
    loop {
        tokio::select! {
            _ = cancellation_token.cancelled() => break,
            result = loader.protocol_overview(&active) => {
                match result {
                    Ok(overview) => render_overview(&active, &registry, &overview),
                    Err(e) => error!("Refresh failed: {:#}", e),
                }
            },
        }

        tokio::select! {
            _ = cancellation_token.cancelled() => break,
            _ = tokio::time::sleep(refresh_interval) => {},
        }
    }
}

fn render_overview(active: &ChainId, registry: &NetworkRegistry, overview: &ProtocolOverview) {
    info!("=== Protocol overview ({active}) ===");
    info!(
        "TVL:    ${:.2} ({:+.2}% / {})",
        overview.tvl.current, overview.tvl.change_percent, overview.tvl.window_label
    );
    info!(
        "Volume: ${:.2} ({:+.2}% / {})",
        overview.volume.current, overview.volume.change_percent, overview.volume.window_label
    );
    info!(
        "Fees:   ${:.2} ({:+.2}% / {})",
        overview.fees.current, overview.fees.change_percent, overview.fees.window_label
    );
    info!(
        "Swaps:  {:.0} ({:+.2}% / {})",
        overview.swaps.current, overview.swaps.change_percent, overview.swaps.window_label
    );

    info!(
        "Charts: {} TVL points, {} weekly volume points across {} network(s)",
        overview.tvl_daily.len(),
        overview.volume_weekly.len(),
        registry.len()
    );

    if overview.prices.is_empty() {
        info!("Prices: none resolved");
    } else {
        for (asset, price) in overview.prices.iter() {
            info!("Price {asset}: ${price:.4}");
        }
    }
}
