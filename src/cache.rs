//! Persisted program cache with a validity window.
//!
//! The cache is a single JSON document (`{timestamp, programs}`) at a fixed
//! path. A load within the validity window returns the stored programs
//! verbatim; anything else (missing, unreadable, malformed, expired) is a
//! cache miss and never an error. There is no atomic replace or locking, so
//! overlapping pipeline runs may race on the file.

use crate::config::FeedConfig;
use crate::models::{Program, ProgramCache};
use chrono::Utc;
use std::error::Error;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, error, info, instrument};

/// Reads and writes the persisted extraction results.
#[derive(Debug)]
pub struct CacheStore {
    path: PathBuf,
    expiry_secs: u64,
}

impl CacheStore {
    /// Build a store from the configured cache path and validity window.
    pub fn new(config: &FeedConfig) -> Self {
        Self {
            path: config.cache_file.clone(),
            expiry_secs: config.cache_expiry_secs,
        }
    }

    /// Load the cached program list.
    ///
    /// Returns an empty list on any miss: no file, unreadable file,
    /// malformed JSON, or an entry older than the validity window. The
    /// orchestrator treats an empty result as "no cache", not as "zero
    /// programs available".
    #[instrument(level = "info", skip_all, fields(path = %self.path.display()))]
    pub async fn load(&self) -> Vec<Program> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) => {
                debug!(error = %e, "No readable program cache");
                return Vec::new();
            }
        };

        let cache: ProgramCache = match serde_json::from_str(&raw) {
            Ok(cache) => cache,
            Err(e) => {
                error!(error = %e, "Error loading cache");
                return Vec::new();
            }
        };

        let age = Utc::now().timestamp() as f64 - cache.timestamp;
        if age >= self.expiry_secs as f64 {
            info!(age_secs = age, "Program cache expired");
            return Vec::new();
        }

        info!(count = cache.programs.len(), "Using programs from cache");
        cache.programs
    }

    /// Overwrite the persisted entry with the given programs, stamped now.
    ///
    /// The caller logs a failure and continues; a failed write never aborts
    /// the pipeline.
    #[instrument(level = "info", skip_all, fields(path = %self.path.display()))]
    pub async fn save(&self, programs: &[Program]) -> Result<(), Box<dyn Error>> {
        let cache = ProgramCache {
            timestamp: Utc::now().timestamp() as f64,
            programs: programs.to_vec(),
        };

        let json = serde_json::to_string(&cache)?;
        fs::write(&self.path, json).await?;
        info!(count = cache.programs.len(), "Saved programs to cache");
        Ok(())
    }
}
