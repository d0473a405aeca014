//! Catalog load lifecycle.
//!
//! Four explicit states so "never started" and "loaded" cannot be confused:
//!
//! ```text
//! NotStarted ──begin_loading──▶ Loading ──apply_outcome(Ok)──▶ Loaded
//!                                  │
//!                                  └──apply_outcome(Err)──▶ Failed
//! ```
//!
//! `Loaded` and `Failed` are terminal for the activation.

use crate::model::{Catalog, LoadError, MalformedTicket, Ticket};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Where the catalog is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// No fetch issued yet.
    NotStarted,
    /// Fetch in flight.
    Loading,
    /// Fetch succeeded.
    Loaded {
        /// When the outcome was applied.
        loaded_at: DateTime<Utc>,
    },
    /// Fetch failed. No retry.
    Failed,
}

/// Catalog data plus its load status.
///
/// Tickets sit behind an `Arc<[Ticket]>`: once stored they are never
/// mutated, and derived views only borrow them.
#[derive(Debug, Clone)]
pub struct CatalogState {
    status: LoadStatus,
    tickets: Arc<[Ticket]>,
    malformed: Vec<MalformedTicket>,
}

impl CatalogState {
    /// Empty catalog that has not started loading.
    pub fn new() -> Self {
        Self {
            status: LoadStatus::NotStarted,
            tickets: Arc::from(Vec::new()),
            malformed: Vec::new(),
        }
    }

    /// Current status.
    pub fn status(&self) -> LoadStatus {
        self.status
    }

    /// Loaded tickets in document order. Empty until loaded.
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Elements skipped during parsing.
    pub fn malformed(&self) -> &[MalformedTicket] {
        &self.malformed
    }

    /// Whether a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// Whether the load failed.
    pub fn is_failed(&self) -> bool {
        self.status == LoadStatus::Failed
    }

    /// Whether the load succeeded.
    pub fn is_loaded(&self) -> bool {
        matches!(self.status, LoadStatus::Loaded { .. })
    }

    /// NotStarted → Loading.
    ///
    /// Returns `false` (and changes nothing) from any other state.
    pub fn begin_loading(&mut self) -> bool {
        if self.status != LoadStatus::NotStarted {
            return false;
        }
        self.status = LoadStatus::Loading;
        true
    }

    /// Loading → Loaded | Failed.
    ///
    /// Outcomes arriving in any state other than `Loading` are ignored.
    pub fn apply_outcome(&mut self, outcome: Result<Catalog, LoadError>) {
        if self.status != LoadStatus::Loading {
            warn!(status = ?self.status, "Ignoring catalog outcome outside of Loading");
            return;
        }

        match outcome {
            Ok(catalog) => {
                for bad in &catalog.malformed {
                    warn!(
                        index = bad.index(),
                        "Skipping malformed ticket: {}",
                        bad.error_message()
                    );
                }
                info!(
                    tickets = catalog.tickets.len(),
                    malformed = catalog.malformed.len(),
                    "Ticket catalog loaded"
                );
                self.tickets = Arc::from(catalog.tickets);
                self.malformed = catalog.malformed;
                self.status = LoadStatus::Loaded {
                    loaded_at: Utc::now(),
                };
            }
            Err(err) => {
                error!(error = %err, "Ticket catalog failed to load");
                self.status = LoadStatus::Failed;
            }
        }
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MalformedTicket, ParseError, TicketTime};

    fn ticket(id: u64) -> Ticket {
        Ticket {
            id,
            from: "A".to_string(),
            to: "B".to_string(),
            company: "S7".to_string(),
            price: 100.0,
            currency: "P".to_string(),
            time: TicketTime {
                departure: "10:00".to_string(),
                arrival: "12:00".to_string(),
            },
            duration: 120,
            date: None,
            connection_amount: Some(0),
        }
    }

    #[test]
    fn starts_not_started_and_empty() {
        let state = CatalogState::new();
        assert_eq!(state.status(), LoadStatus::NotStarted);
        assert!(state.tickets().is_empty());
        assert!(!state.is_loading());
        assert!(!state.is_loaded());
        assert!(!state.is_failed());
    }

    #[test]
    fn begin_loading_only_from_not_started() {
        let mut state = CatalogState::new();
        assert!(state.begin_loading());
        assert!(state.is_loading());
        assert!(!state.begin_loading(), "Second begin should be refused");
        assert!(state.is_loading());
    }

    #[test]
    fn success_stores_tickets_verbatim() {
        let mut state = CatalogState::new();
        state.begin_loading();
        state.apply_outcome(Ok(Catalog::from_tickets(vec![ticket(2), ticket(1)])));

        assert!(state.is_loaded());
        let ids: Vec<u64> = state.tickets().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1], "Document order must be preserved");
    }

    #[test]
    fn success_keeps_malformed_records() {
        let mut state = CatalogState::new();
        state.begin_loading();
        state.apply_outcome(Ok(Catalog {
            tickets: vec![ticket(1)],
            malformed: vec![MalformedTicket::new(1, "bad")],
        }));

        assert_eq!(state.malformed().len(), 1);
    }

    #[test]
    fn failure_moves_to_failed() {
        let mut state = CatalogState::new();
        state.begin_loading();
        state.apply_outcome(Err(LoadError::Parse(ParseError::MissingTickets)));

        assert!(state.is_failed());
        assert!(state.tickets().is_empty());
    }

    #[test]
    fn outcome_without_loading_is_ignored() {
        let mut state = CatalogState::new();
        state.apply_outcome(Ok(Catalog::from_tickets(vec![ticket(1)])));

        assert_eq!(state.status(), LoadStatus::NotStarted);
        assert!(state.tickets().is_empty());
    }

    #[test]
    fn failed_is_terminal() {
        let mut state = CatalogState::new();
        state.begin_loading();
        state.apply_outcome(Err(LoadError::Interrupted));

        assert!(!state.begin_loading());
        state.apply_outcome(Ok(Catalog::from_tickets(vec![ticket(1)])));

        assert!(state.is_failed());
        assert!(state.tickets().is_empty());
    }

    #[test]
    fn loaded_is_terminal() {
        let mut state = CatalogState::new();
        state.begin_loading();
        state.apply_outcome(Ok(Catalog::from_tickets(vec![ticket(1)])));
        state.apply_outcome(Err(LoadError::Interrupted));

        assert!(state.is_loaded());
        assert_eq!(state.tickets().len(), 1);
    }
}
