//! A fetched and parsed ticket catalog.

use crate::model::{MalformedTicket, Ticket};

/// Result of a successful catalog load.
///
/// `tickets` keeps document order. `malformed` lists the elements that were
/// skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    /// Tickets in document order.
    pub tickets: Vec<Ticket>,
    /// Elements that could not be read as tickets.
    pub malformed: Vec<MalformedTicket>,
}

impl Catalog {
    /// Catalog without malformed elements.
    pub fn from_tickets(tickets: Vec<Ticket>) -> Self {
        Self {
            tickets,
            malformed: Vec::new(),
        }
    }
}
