//! Sort modes.
//!
//! Every mode sorts ascending by a single `f64` key compared with
//! `total_cmp`, so the comparator is a total order even for NaN prices.
//! The sort is stable: equal keys keep input order.

use crate::model::Ticket;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Mutually exclusive sort modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortMode {
    /// Ascending price.
    #[default]
    Cheap,
    /// Ascending duration.
    Fast,
    /// Ascending price + duration.
    Optimal,
}

/// Unrecognized sort mode name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown sort mode {0:?} (expected cheap, fast or optimal)")]
pub struct UnknownSortMode(pub String);

impl SortMode {
    /// All modes in display order.
    pub const ALL: [SortMode; 3] = [SortMode::Cheap, SortMode::Fast, SortMode::Optimal];

    /// Sort key for a ticket.
    pub fn key(self, ticket: &Ticket) -> f64 {
        match self {
            SortMode::Cheap => ticket.price,
            SortMode::Fast => f64::from(ticket.duration),
            SortMode::Optimal => ticket.price + f64::from(ticket.duration),
        }
    }

    /// Compare two tickets under this mode.
    pub fn compare(self, a: &Ticket, b: &Ticket) -> Ordering {
        self.key(a).total_cmp(&self.key(b))
    }

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            SortMode::Cheap => "Cheapest",
            SortMode::Fast => "Fastest",
            SortMode::Optimal => "Optimal",
        }
    }

    /// Name used in config files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Cheap => "cheap",
            SortMode::Fast => "fast",
            SortMode::Optimal => "optimal",
        }
    }

    /// Position in [`SortMode::ALL`].
    pub fn index(self) -> usize {
        match self {
            SortMode::Cheap => 0,
            SortMode::Fast => 1,
            SortMode::Optimal => 2,
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = UnknownSortMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cheap" => Ok(SortMode::Cheap),
            "fast" => Ok(SortMode::Fast),
            "optimal" => Ok(SortMode::Optimal),
            _ => Err(UnknownSortMode(s.to_string())),
        }
    }
}

/// Stable in-place sort of borrowed tickets.
pub fn sort_tickets(tickets: &mut [&Ticket], mode: SortMode) {
    tickets.sort_by(|a, b| mode.compare(a, b));
}
