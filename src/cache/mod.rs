//! Time-boxed cache in front of a [`CatalogSource`].
//!
//! The current snapshot is shared as an `Arc`, readers never hold a lock
//! while working on it. Reloads are serialized, so a burst of requests hitting
//! an expired snapshot triggers a single reload while the rest of the burst
//! keeps being served the previous snapshot.

mod clock;
mod source;

pub use clock::{Clock, SystemClock};
pub use source::{CatalogSource, DirectorySource};

use crate::catalog::{CatalogError, Snapshot};
use std::sync::{Arc, Mutex, RwLock, TryLockError};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, error, info, warn};

pub const DEFAULT_FRESHNESS: Duration = Duration::from_secs(300);

#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// How long a loaded snapshot is served before the next `get` reloads it.
    pub freshness: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        CacheConfig {
            freshness: DEFAULT_FRESHNESS,
        }
    }
}

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Catalogue source is unavailable: {0}")]
    SourceUnavailable(String),
}

pub struct CatalogCache {
    source: Box<dyn CatalogSource>,
    clock: Arc<dyn Clock>,
    config: CacheConfig,
    snapshot: RwLock<Option<Arc<Snapshot>>>,

    // Instant of the last reload attempt, successful or not.
    last_attempt: RwLock<Option<Instant>>,
    // Held for the duration of a reload. Readers with a snapshot in hand
    // only ever `try_lock` it.
    reloading: Mutex<()>,
}

impl CatalogCache {
    pub fn new(source: Box<dyn CatalogSource>, config: CacheConfig) -> CatalogCache {
        Self::with_clock(source, config, Arc::new(SystemClock))
    }

    pub fn with_clock(
        source: Box<dyn CatalogSource>,
        config: CacheConfig,
        clock: Arc<dyn Clock>,
    ) -> CatalogCache {
        CatalogCache {
            source,
            clock,
            config,
            snapshot: RwLock::new(None),
            last_attempt: RwLock::new(None),
            reloading: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// The snapshot currently held, without triggering any reload.
    pub fn current(&self) -> Option<Arc<Snapshot>> {
        self.snapshot.read().unwrap().clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot.read().unwrap().is_some()
    }

    fn is_expired(&self) -> bool {
        match *self.last_attempt.read().unwrap() {
            Some(at) => self.clock.now().saturating_duration_since(at) > self.config.freshness,
            None => true,
        }
    }

    /// Returns the current snapshot, reloading it first if there is none yet
    /// or if the freshness window elapsed since the last reload attempt.
    ///
    /// While a reload is running, callers holding a snapshot are served it
    /// right away; only the caller that wins the reload lock waits for the
    /// source. A failed reload keeps serving the previous snapshot. Only when
    /// nothing was ever loaded does this fail with
    /// [`CacheError::SourceUnavailable`].
    pub fn get(&self) -> Result<Arc<Snapshot>, CacheError> {
        match self.current() {
            Some(snapshot) if !self.is_expired() => Ok(snapshot),
            Some(stale) => {
                let _guard = match self.reloading.try_lock() {
                    Ok(guard) => guard,
                    Err(TryLockError::WouldBlock) => return Ok(stale),
                    Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
                };
                // Someone else may have reloaded between the two checks.
                if !self.is_expired() {
                    return Ok(self.current().unwrap_or(stale));
                }
                match self.reload() {
                    Ok(snapshot) => Ok(snapshot),
                    Err(_) => {
                        warn!("Serving stale catalogue snapshot after failed reload.");
                        Ok(stale)
                    }
                }
            }
            None => {
                let _guard = self.reloading.lock().unwrap();
                if let Some(snapshot) = self.current() {
                    return Ok(snapshot);
                }
                self.reload()
                    .map_err(|err| CacheError::SourceUnavailable(err.to_string()))
            }
        }
    }

    /// Reloads the snapshot unconditionally, waiting for any reload already
    /// in progress. On failure the previous snapshot stays current and the
    /// error is returned.
    pub fn refresh(&self) -> Result<Arc<Snapshot>, CatalogError> {
        let _guard = self.reloading.lock().unwrap();
        self.reload()
    }

    /// Must be called with `reloading` held.
    fn reload(&self) -> Result<Arc<Snapshot>, CatalogError> {
        *self.last_attempt.write().unwrap() = Some(self.clock.now());
        debug!("Reloading catalogue from {}", self.source.describe());

        match self.source.load() {
            Ok(snapshot) => {
                let snapshot = Arc::new(snapshot);
                *self.snapshot.write().unwrap() = Some(snapshot.clone());
                info!(
                    "Catalogue reloaded from {}: {} composers, {} works, {} recordings",
                    self.source.describe(),
                    snapshot.composers().len(),
                    snapshot.works().len(),
                    snapshot.recordings().len()
                );
                Ok(snapshot)
            }
            Err(err) => {
                error!(
                    "Failed to reload catalogue from {}: {}",
                    self.source.describe(),
                    err
                );
                Err(err)
            }
        }
    }
}
