//! Periodic feed updater.
//!
//! Runs the pipeline at a fixed interval (first run immediately) until the
//! stop signal fires. Per-run failures are logged and the loop keeps going;
//! nothing is carried between runs except what the cache store persists.

use crate::config::FeedConfig;
use crate::pipeline;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{self, MissedTickBehavior};
use tracing::{error, info, instrument};

/// Run the pipeline every `update_interval_secs` until `stop` signals.
///
/// The stop signal is checked with priority over the ticker, so a signal
/// that is already pending halts the loop before another run starts. The
/// loop also halts when the sender side of `stop` is dropped.
#[instrument(level = "info", skip_all, fields(interval_secs = config.update_interval_secs))]
pub async fn run(config: &FeedConfig, mut stop: watch::Receiver<bool>) {
    info!("Starting NPO RSS feed updater");

    let mut ticker = time::interval(Duration::from_secs(config.update_interval_secs));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;

            _ = stop.changed() => {
                info!("Stop signal received, halting feed updater");
                break;
            }
            _ = ticker.tick() => {
                info!("Updating NPO RSS feed");
                match pipeline::run_once(config).await {
                    Ok(count) => info!(count, "Feed updated successfully"),
                    Err(e) => error!(error = %e, "Feed update failed"),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_pending_stop_signal_halts_before_first_run() {
        // The cache file does not exist, so a pipeline run would hit the
        // network; a pre-signalled stop must win from the first tick.
        let mut config = FeedConfig::default();
        config.cache_file = std::env::temp_dir().join(format!(
            "npo_scheduler_cache_{}.json",
            std::process::id()
        ));
        config.feed_file = std::env::temp_dir().join(format!(
            "npo_scheduler_feed_{}.xml",
            std::process::id()
        ));

        let (stop_tx, stop_rx) = watch::channel(false);
        stop_tx.send(true).unwrap();

        tokio::time::timeout(Duration::from_secs(1), run(&config, stop_rx))
            .await
            .expect("updater did not honor the stop signal");

        assert!(!config.feed_file.exists());
    }

    #[tokio::test]
    async fn test_dropped_sender_halts_the_loop() {
        let config = FeedConfig::default();
        let (stop_tx, stop_rx) = watch::channel(false);
        drop(stop_tx);

        tokio::time::timeout(Duration::from_secs(1), run(&config, stop_rx))
            .await
            .expect("updater did not halt after sender drop");
    }
}
