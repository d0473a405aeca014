//! Filter panel: the option list, its cursor, and narrow-terminal visibility.

use crate::model::ticket::connections_label;
use crate::model::KnownCarrier;
use crate::state::filter::{FilterCriteria, CONNECTION_OPTIONS};

/// One toggleable row in the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOption {
    /// Accept tickets with this many connections.
    Connections(u32),
    /// Accept tickets from this carrier.
    Carrier(KnownCarrier),
}

impl FilterOption {
    /// Whether this option is currently selected in `criteria`.
    pub fn is_selected(self, criteria: &FilterCriteria) -> bool {
        match self {
            FilterOption::Connections(n) => criteria.has_connection(n),
            FilterOption::Carrier(c) => criteria.has_carrier(c.name()),
        }
    }

    /// Flip this option in `criteria`.
    pub fn toggle(self, criteria: &mut FilterCriteria) {
        match self {
            FilterOption::Connections(n) => criteria.toggle_connection(n),
            FilterOption::Carrier(c) => criteria.toggle_carrier(c.name()),
        }
    }

    /// Row label.
    pub fn label(self) -> String {
        match self {
            FilterOption::Connections(n) => connections_label(Some(n)),
            FilterOption::Carrier(c) => c.label().to_string(),
        }
    }
}

/// Panel rows in display order: connection counts, then carriers.
pub fn filter_options() -> Vec<FilterOption> {
    CONNECTION_OPTIONS
        .into_iter()
        .map(FilterOption::Connections)
        .chain(KnownCarrier::ALL.into_iter().map(FilterOption::Carrier))
        .collect()
}

/// Index where the carrier rows start.
pub const CARRIER_SECTION_START: usize = CONNECTION_OPTIONS.len();

/// Cursor and toggle-visibility of the filter panel.
///
/// `expanded` only matters on narrow terminals; wide layouts always show the
/// panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterPanelState {
    expanded: bool,
    cursor: usize,
}

impl FilterPanelState {
    /// Collapsed panel with the cursor on the first row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the narrow-terminal panel is open.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Open or close the narrow-terminal panel.
    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Row under the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move down one row, stopping at the last.
    pub fn move_down(&mut self) {
        let last = filter_options().len().saturating_sub(1);
        self.cursor = (self.cursor + 1).min(last);
    }

    /// Move up one row, stopping at the first.
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Jump to the first row.
    pub fn move_to_top(&mut self) {
        self.cursor = 0;
    }

    /// Option under the cursor.
    pub fn selected_option(&self) -> Option<FilterOption> {
        filter_options().get(self.cursor).copied()
    }

    /// Toggle the option under the cursor in `criteria`.
    pub fn toggle_under_cursor(&self, criteria: &mut FilterCriteria) {
        if let Some(option) = self.selected_option() {
            option.toggle(criteria);
        }
    }
}
