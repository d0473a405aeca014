//! UI state machine and the result pipeline (pure).
//!
//! All state transitions are plain functions testable without a terminal.

pub mod action_handler;
pub mod app_state;
pub mod catalog;
pub mod filter;
pub mod filter_panel;
pub mod pipeline;
pub mod reveal;
pub mod route_input;
pub mod sort;

// Re-export for convenience
pub use action_handler::handle_action;
pub use app_state::{AppState, FocusPane};
pub use catalog::{CatalogState, LoadStatus};
pub use filter::{filter_tickets, FilterCriteria, CONNECTION_OPTIONS};
pub use filter_panel::{filter_options, FilterOption, FilterPanelState};
pub use pipeline::{run_pipeline, PipelineView};
pub use reveal::{Reveal, DEFAULT_INITIAL_VISIBLE, DEFAULT_REVEAL_STEP};
pub use route_input::{RouteEdit, RouteField};
pub use sort::{sort_tickets, SortMode, UnknownSortMode};
