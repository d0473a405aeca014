//! skyfare
//!
//! Terminal browser for flight ticket offers: load one catalog, then filter
//! by route, connections and carrier, sort by price, duration or both, and
//! reveal results a few at a time.
//!
//! Pure Core / Impure Shell: `model`, `parser` and `state` are pure;
//! `source`, `view` and `report` do IO.

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod report;
pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
pub(crate) mod test_harness;

#[cfg(test)]
mod tests;
