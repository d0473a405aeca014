//! Domain model types (pure).
//!
//! Ticket data as delivered by the catalog, the known-carrier table and the
//! error taxonomy shared by the loader and the shell.

pub mod carrier;
pub mod catalog;
pub mod error;
pub mod key_action;
pub mod malformed_ticket;
pub mod ticket;

// Re-export for convenience
pub use carrier::{logo_path, KnownCarrier};
pub use catalog::Catalog;
pub use error::{AppError, LoadError, ParseError, SourceError};
pub use key_action::KeyAction;
pub use malformed_ticket::MalformedTicket;
pub use ticket::{Ticket, TicketTime};
