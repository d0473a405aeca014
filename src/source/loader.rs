//! One-shot background catalog fetch.
//!
//! The loader behaves like a promise: `start` spawns the fetch, `poll`
//! returns the outcome once when it is ready, and the caller applies it to
//! whatever state it owns.

use crate::model::{Catalog, LoadError};
use crate::source::{load_catalog, CatalogSource};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use tracing::{debug, info};

type FetchJob = Box<dyn FnOnce() -> Result<Catalog, LoadError> + Send + 'static>;

/// Outcome delivered by the loader.
pub type LoadOutcome = Result<Catalog, LoadError>;

/// One fetch per activation.
///
/// # Lifecycle
///
/// - Created idle with a pending job
/// - `start()` spawns the job on a worker thread (first call only)
/// - `poll()` / `wait()` hand back the outcome exactly once
pub struct CatalogLoader {
    job: Option<FetchJob>,
    rx: Option<Receiver<LoadOutcome>>,
}

impl CatalogLoader {
    /// Loader that fetches and parses `source`.
    pub fn new(source: CatalogSource) -> Self {
        Self::from_fn(move || {
            info!(source = %source, "Loading ticket catalog");
            load_catalog(&source)
        })
    }

    /// Loader running a custom fetch.
    ///
    /// Useful for embedding a catalog that is not behind a [`CatalogSource`]
    /// and for simulating failures.
    pub fn from_fn<F>(fetch: F) -> Self
    where
        F: FnOnce() -> Result<Catalog, LoadError> + Send + 'static,
    {
        Self {
            job: Some(Box::new(fetch)),
            rx: None,
        }
    }

    /// Spawn the fetch.
    ///
    /// Returns `true` if this call started it, `false` if it was already
    /// started (or has finished). A loader never fetches twice.
    pub fn start(&mut self) -> bool {
        let Some(job) = self.job.take() else {
            return false;
        };

        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let outcome = job();
            // Receiver may be gone if the app quit mid-load
            let _ = tx.send(outcome);
        });
        self.rx = Some(rx);

        debug!("Catalog fetch started");
        true
    }

    /// Check for the outcome without blocking.
    ///
    /// Returns `Some` exactly once, when the fetch has finished. A worker
    /// that dies without reporting yields `LoadError::Interrupted`.
    pub fn poll(&mut self) -> Option<LoadOutcome> {
        let rx = self.rx.as_ref()?;
        match rx.try_recv() {
            Ok(outcome) => {
                self.rx = None;
                Some(outcome)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.rx = None;
                Some(Err(LoadError::Interrupted))
            }
        }
    }

    /// Block until the outcome is available.
    ///
    /// Returns `None` if the fetch was never started or the outcome has
    /// already been taken.
    pub fn wait(&mut self) -> Option<LoadOutcome> {
        let rx = self.rx.take()?;
        Some(rx.recv().unwrap_or(Err(LoadError::Interrupted)))
    }

    /// Whether a started fetch has not yet been collected.
    pub fn is_pending(&self) -> bool {
        self.rx.is_some()
    }
}

impl std::fmt::Debug for CatalogLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogLoader")
            .field("started", &self.job.is_none())
            .field("pending", &self.rx.is_some())
            .finish()
    }
}
