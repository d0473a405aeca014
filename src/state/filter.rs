//! Filter criteria and predicate.
//!
//! A ticket passes when every dimension accepts it:
//! origin and destination are case-insensitive substring matches, connection
//! counts and carriers are set memberships where an empty set accepts all.
//! OR within a dimension, AND across dimensions.

use crate::model::Ticket;
use std::collections::BTreeSet;

/// Connection counts offered as filter options.
pub const CONNECTION_OPTIONS: [u32; 4] = [0, 1, 2, 3];

/// Ephemeral filter selections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Origin substring. Empty accepts all.
    pub origin: String,
    /// Destination substring. Empty accepts all.
    pub destination: String,
    connections: BTreeSet<u32>,
    carriers: BTreeSet<String>,
}

impl FilterCriteria {
    /// Criteria that accept every ticket.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` to the accepted connection counts, or remove it if present.
    pub fn toggle_connection(&mut self, count: u32) {
        if !self.connections.remove(&count) {
            self.connections.insert(count);
        }
    }

    /// Add `carrier` to the accepted carriers, or remove it if present.
    pub fn toggle_carrier(&mut self, carrier: &str) {
        if !self.carriers.remove(carrier) {
            self.carriers.insert(carrier.to_string());
        }
    }

    /// Whether `count` is selected.
    pub fn has_connection(&self, count: u32) -> bool {
        self.connections.contains(&count)
    }

    /// Whether `carrier` is selected.
    pub fn has_carrier(&self, carrier: &str) -> bool {
        self.carriers.contains(carrier)
    }

    /// Selected connection counts, ascending.
    pub fn connections(&self) -> impl Iterator<Item = u32> + '_ {
        self.connections.iter().copied()
    }

    /// Selected carriers, sorted.
    pub fn carriers(&self) -> impl Iterator<Item = &str> {
        self.carriers.iter().map(String::as_str)
    }

    /// Whether no dimension restricts anything.
    pub fn is_empty(&self) -> bool {
        self.origin.is_empty()
            && self.destination.is_empty()
            && self.connections.is_empty()
            && self.carriers.is_empty()
    }

    /// Test one ticket.
    ///
    /// Prefer [`filter_tickets`] for whole collections; it lowercases the
    /// needles once.
    pub fn matches(&self, ticket: &Ticket) -> bool {
        Matcher::new(self).matches(ticket)
    }
}

/// Criteria with needles lowercased up front.
struct Matcher<'a> {
    origin: String,
    destination: String,
    criteria: &'a FilterCriteria,
}

impl<'a> Matcher<'a> {
    fn new(criteria: &'a FilterCriteria) -> Self {
        Self {
            origin: criteria.origin.to_lowercase(),
            destination: criteria.destination.to_lowercase(),
            criteria,
        }
    }

    fn matches(&self, ticket: &Ticket) -> bool {
        contains_folded(&ticket.from, &self.origin)
            && contains_folded(&ticket.to, &self.destination)
            && (self.criteria.connections.is_empty()
                || ticket
                    .connection_amount
                    .is_some_and(|n| self.criteria.connections.contains(&n)))
            && (self.criteria.carriers.is_empty() || self.criteria.carriers.contains(&ticket.company))
    }
}

fn contains_folded(haystack: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || haystack.to_lowercase().contains(needle_lower)
}

/// Keep the tickets that pass `criteria`, preserving input order.
pub fn filter_tickets<'a, I>(tickets: I, criteria: &FilterCriteria) -> Vec<&'a Ticket>
where
    I: IntoIterator<Item = &'a Ticket>,
{
    let matcher = Matcher::new(criteria);
    tickets.into_iter().filter(|t| matcher.matches(t)).collect()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
