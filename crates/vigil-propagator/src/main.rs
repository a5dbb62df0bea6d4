// Vigil propagator
// Decision: Single task, one in-flight send per tick; a failed delivery is
//           never retried, the next tick draws again
// Decision: Ctrl-C interrupts the loop for a logged, graceful exit

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use rand::Rng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vigil_core::Event;
use vigil_propagator::{load_events, EventSender, PropagatorConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vigil_propagator=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("vigil-propagator starting...");

    // Load environment
    if let Ok(path) = dotenvy::dotenv() {
        tracing::info!("Loaded .env from {:?}", path);
    }

    let config = PropagatorConfig::from_env();
    tracing::info!(
        endpoint = %config.endpoint,
        period_secs = config.period_secs,
        timeout_secs = config.timeout_secs,
        "Propagator configured"
    );

    let events = load_events(Path::new(&config.events_file));
    if events.is_empty() {
        tracing::info!("No events to propagate, exiting");
        return Ok(());
    }

    let sender = EventSender::new(config.endpoint.clone(), config.timeout())
        .context("Failed to create HTTP client")?;

    // Run the propagation loop (blocks until shutdown)
    tokio::select! {
        _ = propagate(&sender, &events, config.period()) => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received shutdown signal");
        }
    }

    tracing::info!("Propagator shutdown complete");
    Ok(())
}

/// Draw one event at random, deliver it, sleep, repeat
async fn propagate(sender: &EventSender, events: &[Event], period: Duration) {
    loop {
        let index = rand::thread_rng().gen_range(0..events.len());
        let event = &events[index];

        tracing::debug!(event_type = %event.event_type, "Propagating event");
        sender.send(event).await;

        tokio::time::sleep(period).await;
    }
}
