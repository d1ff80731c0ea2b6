//! Pipeline orchestration: cache → scrape → cache → assemble → publish.
//!
//! One run asks the cache store for a valid program list first. On a hit it
//! goes straight to assembly; on a miss it scrapes the site (which itself
//! falls back to the seed catalog), persists the result, then assembles.
//! A cache-write failure is logged and ignored; the feed is still published
//! from the in-memory list. The whole run is sequential.

use crate::cache::CacheStore;
use crate::config::FeedConfig;
use crate::outputs;
use crate::scrapers::npo::{self, ClassTokenClassifier};
use std::error::Error;
use tracing::{error, info, instrument, warn};

/// Execute one full pipeline run.
///
/// Returns the number of programs published. A run that ends with zero
/// programs writes nothing and leaves the previous artifact in place.
#[instrument(level = "info", skip_all)]
pub async fn run_once(config: &FeedConfig) -> Result<usize, Box<dyn Error>> {
    let cache = CacheStore::new(config);

    let mut programs = cache.load().await;
    if programs.is_empty() {
        programs = npo::scrape_programs(config, &ClassTokenClassifier).await;

        if !programs.is_empty() {
            if let Err(e) = cache.save(&programs).await {
                error!(error = %e, "Error saving cache");
            }
        }
    }

    if programs.is_empty() {
        warn!("No programs found; previous feed artifact left unchanged");
        return Ok(0);
    }

    let path = outputs::rss::write_feed(&programs, config).await?;
    info!(
        count = programs.len(),
        path = %path.display(),
        "Successfully processed programs"
    );
    Ok(programs.len())
}
