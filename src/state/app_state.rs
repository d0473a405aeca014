//! Application state and transitions.
//!
//! AppState owns everything the UI shows: the catalog and its load status,
//! the filter criteria, sort mode, reveal count and the focus/cursor state of
//! the panels. Derived results are never stored; [`AppState::view`] recomputes
//! them from the catalog on demand.

use crate::model::{Catalog, LoadError};
use crate::state::catalog::CatalogState;
use crate::state::filter::FilterCriteria;
use crate::state::filter_panel::FilterPanelState;
use crate::state::pipeline::{run_pipeline, PipelineView};
use crate::state::reveal::Reveal;
use crate::state::route_input::{self, RouteEdit, RouteField};
use crate::state::sort::SortMode;
use tracing::debug;

// ===== AppState =====

/// Application state. Pure data, no side effects beyond logging.
///
/// # Ownership
///
/// The loaded tickets live inside `catalog` and are only ever borrowed.
/// Filter, sort and reveal are plain values; changing any of them changes
/// the next [`AppState::view`] and nothing else.
#[derive(Debug, Clone)]
pub struct AppState {
    catalog: CatalogState,

    /// Current filter selections.
    pub criteria: FilterCriteria,

    /// Active sort mode.
    pub sort: SortMode,

    /// How many results are revealed. Not reset by filter or sort changes.
    pub reveal: Reveal,

    /// Origin/destination input state.
    pub route_edit: RouteEdit,

    /// Filter panel cursor and narrow-terminal visibility.
    pub filter_panel: FilterPanelState,

    /// Which pane receives navigation keys.
    pub focus: FocusPane,

    /// Whether the help overlay is shown.
    pub help_visible: bool,

    selected_result: usize,

    /// Filter panel is always on screen (wide terminal).
    filters_pinned: bool,
}

impl AppState {
    /// Fresh state: nothing loaded, default criteria.
    pub fn new(sort: SortMode, reveal: Reveal) -> Self {
        Self {
            catalog: CatalogState::new(),
            criteria: FilterCriteria::new(),
            sort,
            reveal,
            route_edit: RouteEdit::Idle,
            filter_panel: FilterPanelState::new(),
            focus: FocusPane::Results,
            help_visible: false,
            selected_result: 0,
            filters_pinned: false,
        }
    }

    /// Catalog data and load status.
    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    /// Mark the catalog fetch as started. See [`CatalogState::begin_loading`].
    pub fn begin_loading(&mut self) -> bool {
        self.catalog.begin_loading()
    }

    /// Store the fetch outcome. See [`CatalogState::apply_outcome`].
    pub fn apply_load_outcome(&mut self, outcome: Result<Catalog, LoadError>) {
        self.catalog.apply_outcome(outcome);
        self.selected_result = 0;
    }

    /// Tickets to display under the current criteria, sort and reveal.
    pub fn view(&self) -> PipelineView<'_> {
        run_pipeline(self.catalog.tickets(), &self.criteria, self.sort, &self.reveal)
    }

    /// Index of the highlighted result card, clamped to what is visible.
    pub fn selected_result(&self) -> usize {
        let shown = self.view().tickets.len();
        self.selected_result.min(shown.saturating_sub(1))
    }

    /// Switch sort mode. Reveal count is kept.
    pub fn select_sort(&mut self, mode: SortMode) {
        if self.sort != mode {
            debug!(from = %self.sort, to = %mode, "Sort mode changed");
        }
        self.sort = mode;
    }

    /// Reveal the next batch if more matches exist.
    ///
    /// Returns whether anything changed.
    pub fn load_more(&mut self) -> bool {
        if !self.catalog.is_loaded() || !self.view().has_more {
            return false;
        }
        self.reveal.load_more();
        debug!(visible = self.reveal.visible(), "Revealed more results");
        true
    }

    /// Record whether the layout keeps the filter panel on screen
    /// regardless of [`FilterPanelState::is_expanded`].
    ///
    /// Focus leaves the filters if the panel is no longer drawn.
    pub fn set_filters_pinned(&mut self, pinned: bool) {
        self.filters_pinned = pinned;
        if !self.filters_shown() && self.focus == FocusPane::Filters {
            self.focus = FocusPane::Results;
        }
    }

    /// Whether the filter panel is drawn.
    pub fn filters_shown(&self) -> bool {
        self.filters_pinned || self.filter_panel.is_expanded()
    }

    /// Open or close the filter panel on narrow terminals.
    ///
    /// Hiding it while it has focus hands focus back to the results.
    pub fn toggle_filter_panel(&mut self) {
        self.filter_panel.toggle_expanded();
        if !self.filters_shown() && self.focus == FocusPane::Filters {
            self.focus = FocusPane::Results;
        }
    }

    /// Results ⇄ Filters.
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPane::Results => FocusPane::Filters,
            FocusPane::Filters => FocusPane::Results,
        };
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Move the cursor of the focused pane down one row.
    pub fn move_down(&mut self) {
        match self.focus {
            FocusPane::Results => {
                let last = self.view().tickets.len().saturating_sub(1);
                self.selected_result = (self.selected_result() + 1).min(last);
            }
            FocusPane::Filters => self.filter_panel.move_down(),
        }
    }

    /// Move the cursor of the focused pane up one row.
    pub fn move_up(&mut self) {
        match self.focus {
            FocusPane::Results => {
                self.selected_result = self.selected_result().saturating_sub(1);
            }
            FocusPane::Filters => self.filter_panel.move_up(),
        }
    }

    /// Move the cursor of the focused pane to its first row.
    pub fn move_to_top(&mut self) {
        match self.focus {
            FocusPane::Results => self.selected_result = 0,
            FocusPane::Filters => self.filter_panel.move_to_top(),
        }
    }

    /// Toggle the filter option under the panel cursor.
    ///
    /// Only acts while the filter panel has focus.
    pub fn toggle_option(&mut self) {
        if self.focus != FocusPane::Filters {
            return;
        }
        self.filter_panel.toggle_under_cursor(&mut self.criteria);
        debug!(
            connections = ?self.criteria.connections().collect::<Vec<_>>(),
            carriers = ?self.criteria.carriers().collect::<Vec<_>>(),
            "Filter selection changed"
        );
    }

    // ===== Route inputs =====

    /// Current committed-or-live value of a route field.
    pub fn route_value(&self, field: RouteField) -> &str {
        match field {
            RouteField::Origin => &self.criteria.origin,
            RouteField::Destination => &self.criteria.destination,
        }
    }

    fn set_route_value(&mut self, field: RouteField, value: String) {
        match field {
            RouteField::Origin => self.criteria.origin = value,
            RouteField::Destination => self.criteria.destination = value,
        }
    }

    /// Push the buffer being typed into the criteria so results update live.
    fn sync_route_edit(&mut self) {
        if let RouteEdit::Editing { field, buffer, .. } = &self.route_edit {
            let (field, value) = (*field, buffer.clone());
            self.set_route_value(field, value);
        }
    }

    fn update_route_edit(&mut self, transition: impl FnOnce(RouteEdit) -> RouteEdit) {
        let current = std::mem::take(&mut self.route_edit);
        self.route_edit = transition(current);
        self.sync_route_edit();
    }

    /// Start editing a route field.
    pub fn begin_route_edit(&mut self, field: RouteField) {
        let current = self.route_value(field).to_string();
        self.update_route_edit(|edit| route_input::begin_edit(edit, field, &current));
    }

    /// Type a character into the active route field.
    pub fn route_input_char(&mut self, ch: char) {
        self.update_route_edit(|edit| route_input::handle_char(edit, ch));
    }

    /// Delete before the cursor in the active route field.
    pub fn route_input_backspace(&mut self) {
        self.update_route_edit(route_input::handle_backspace);
    }

    /// Delete under the cursor in the active route field.
    pub fn route_input_delete(&mut self) {
        self.update_route_edit(route_input::handle_delete);
    }

    /// Move the route cursor left.
    pub fn route_cursor_left(&mut self) {
        self.update_route_edit(route_input::cursor_left);
    }

    /// Move the route cursor right.
    pub fn route_cursor_right(&mut self) {
        self.update_route_edit(route_input::cursor_right);
    }

    /// Keep the typed value and leave the input.
    pub fn commit_route_edit(&mut self) {
        let (next, committed) = route_input::commit_edit(std::mem::take(&mut self.route_edit));
        self.route_edit = next;
        if let Some((field, value)) = committed {
            debug!(field = field.label(), value = %value, "Route filter committed");
            self.set_route_value(field, value);
        }
    }

    /// Restore the value from before the edit and leave the input.
    pub fn cancel_route_edit(&mut self) {
        let (next, restored) = route_input::cancel_edit(std::mem::take(&mut self.route_edit));
        self.route_edit = next;
        if let Some((field, value)) = restored {
            self.set_route_value(field, value);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SortMode::default(), Reveal::default())
    }
}

// ===== FocusPane =====

/// Which pane receives navigation keys. Route inputs are modal and tracked
/// separately in [`RouteEdit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    /// Result cards.
    #[default]
    Results,
    /// Connection/carrier filter panel.
    Filters,
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
