//! Ticket offer as delivered by the catalog.
//!
//! Field names on the wire follow the catalog document (`connectionAmount`
//! and friends); in Rust they are snake_case.

use serde::{Deserialize, Serialize};

/// Departure and arrival time-of-day. Opaque display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketTime {
    /// Departure time, e.g. "12:00".
    pub departure: String,
    /// Arrival time, e.g. "16:30".
    pub arrival: String,
}

/// One flight offer.
///
/// Tickets are never mutated after load. The pipeline only ever borrows them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Identifier, unique within one catalog.
    pub id: u64,
    /// Origin label.
    pub from: String,
    /// Destination label.
    pub to: String,
    /// Carrier name. Arbitrary string; see [`crate::model::KnownCarrier`] for display.
    pub company: String,
    /// Price in `currency` units.
    pub price: f64,
    /// Currency tag.
    pub currency: String,
    /// Departure/arrival display times.
    pub time: TicketTime,
    /// Total duration in minutes.
    pub duration: u32,
    /// Travel date, carried through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Number of layovers. `None` means unknown, which is not the same as zero.
    #[serde(default)]
    pub connection_amount: Option<u32>,
}

impl Ticket {
    /// Price rendered for display: integral prices without a fraction,
    /// everything else with two decimals.
    pub fn display_price(&self) -> String {
        format_price(self.price)
    }

    /// Duration rendered as `"H h M min"`.
    pub fn display_duration(&self) -> String {
        format_duration(self.duration)
    }

    /// Human label for the connection count.
    pub fn connections_label(&self) -> String {
        connections_label(self.connection_amount)
    }
}

/// Format a price for display.
pub fn format_price(price: f64) -> String {
    if price.is_finite() && price.fract() == 0.0 {
        format!("{}", price as i64)
    } else {
        format!("{:.2}", price)
    }
}

/// Format a duration given in minutes as `"H h M min"`.
pub fn format_duration(minutes: u32) -> String {
    format!("{} h {} min", minutes / 60, minutes % 60)
}

/// Label for a connection count.
pub fn connections_label(amount: Option<u32>) -> String {
    match amount {
        None => "unknown".to_string(),
        Some(0) => "Direct".to_string(),
        Some(1) => "1 connection".to_string(),
        Some(n) => format!("{} connections", n),
    }
}
