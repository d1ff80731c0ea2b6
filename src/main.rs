//! # NPO Program Feed
//!
//! Generates an RSS feed of new and recent programs on NPO by scraping the
//! NPO site, and republishes it as a static XML artifact.
//!
//! ## Features
//!
//! - Scrapes the NPO homepage for program tiles, flagging programs marked
//!   "nieuw" and putting them first in the feed
//! - Caches extraction results for an hour to avoid redundant fetches
//! - Falls back to a fixed seed catalog when scraping yields nothing
//! - Serves the generated artifact over HTTP and can regenerate it on an
//!   interval
//!
//! ## Usage
//!
//! ```sh
//! npo_program_feed            # generate the feed once
//! npo_program_feed serve      # serve the artifact on port 8000
//! npo_program_feed watch      # regenerate every hour until Ctrl-C
//! ```
//!
//! ## Architecture
//!
//! One pipeline run is fully sequential:
//! 1. **Cache**: use the persisted program list when it is fresh
//! 2. **Scrape**: on a miss, fetch and extract programs (seed catalog on
//!    failure), then persist them
//! 3. **Assemble**: build the RSS channel and overwrite the artifact

use clap::Parser;
use std::error::Error;
use std::path::Path;
use tokio::sync::watch;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cache;
mod catalog;
mod cli;
mod config;
mod models;
mod outputs;
mod pipeline;
mod scheduler;
mod scrapers;
mod server;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("npo_program_feed starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let mut config = config::load_config(args.config.as_deref().map(Path::new))?;

    match args.command.unwrap_or(Command::Run) {
        Command::Run => {
            let count = pipeline::run_once(&config).await?;
            let elapsed = start_time.elapsed();
            info!(count, ?elapsed, "Execution complete");
        }
        Command::Serve { port } => {
            if let Some(port) = port {
                config.port = port;
            }
            server::serve(config).await?;
        }
        Command::Watch { interval_secs } => {
            if let Some(interval_secs) = interval_secs {
                config.update_interval_secs = interval_secs;
            }

            let (stop_tx, stop_rx) = watch::channel(false);
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    let _ = stop_tx.send(true);
                }
            });
            scheduler::run(&config, stop_rx).await;
        }
    }

    Ok(())
}
