//! Screen layout and top-level rendering.
//!
//! ```text
//! ┌ From (o) ──────────┐┌ To (d) ────────────┐   header
//! ┌ Sort ──────────────────────────────────┐   sort bar
//! ┌ Filters ┐┌ Flights ───────────────────┐
//! │         ││ cards…                     │   body
//! └─────────┘└────────────────────────────┘
//!  status                                      status bar
//! ```
//!
//! On terminals narrower than [`WIDE_LAYOUT_MIN_WIDTH`] the filter panel is
//! hidden until toggled, and then stacks above the results.

use super::constants::{
    FILTER_PANEL_STACKED_HEIGHT, FILTER_PANEL_WIDTH, HEADER_HEIGHT, SORT_BAR_HEIGHT,
    STATUS_BAR_HEIGHT, WIDE_LAYOUT_MIN_WIDTH,
};
use super::filter_panel::FilterPanel;
use super::help::render_help_overlay;
use super::route_bar::render_route_bar;
use super::sort_bar::render_sort_bar;
use super::styles::ViewStyles;
use super::ticket_card::ResultsList;
use crate::state::{AppState, FocusPane, LoadStatus};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
    Frame,
};

/// Areas of every screen region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Route inputs.
    pub header: Rect,
    /// Sort tabs.
    pub sort_bar: Rect,
    /// Filter panel, when shown.
    pub filter_panel: Option<Rect>,
    /// Result cards.
    pub results: Rect,
    /// Status line.
    pub status: Rect,
}

/// Whether the filter panel is drawn at this width.
pub fn filters_visible(width: u16, panel_expanded: bool) -> bool {
    width >= WIDE_LAYOUT_MIN_WIDTH || panel_expanded
}

/// Split `area` into screen regions.
pub fn compute_layout(area: Rect, panel_expanded: bool) -> ScreenLayout {
    let [header, sort_bar, body, status] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(SORT_BAR_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .areas(area);

    let (filter_panel, results) = if area.width >= WIDE_LAYOUT_MIN_WIDTH {
        let [panel, results] =
            Layout::horizontal([Constraint::Length(FILTER_PANEL_WIDTH), Constraint::Min(0)])
                .areas(body);
        (Some(panel), results)
    } else if panel_expanded {
        let [panel, results] = Layout::vertical([
            Constraint::Length(FILTER_PANEL_STACKED_HEIGHT),
            Constraint::Min(0),
        ])
        .areas(body);
        (Some(panel), results)
    } else {
        (None, body)
    };

    ScreenLayout {
        header,
        sort_bar,
        filter_panel,
        results,
        status,
    }
}

/// Status line text.
pub fn status_text(state: &AppState) -> String {
    let catalog = state.catalog();
    let summary = match catalog.status() {
        LoadStatus::NotStarted | LoadStatus::Loading => "Loading…".to_string(),
        LoadStatus::Failed => "Load failed".to_string(),
        LoadStatus::Loaded { loaded_at } => {
            let view = state.view();
            let mut text = format!(
                "{} of {} flights · {} · loaded {}",
                view.tickets.len(),
                view.total_matches,
                state.sort.label(),
                loaded_at
                    .with_timezone(&chrono::Local)
                    .format("%H:%M:%S")
            );
            let skipped = catalog.malformed().len();
            if skipped > 0 {
                text.push_str(&format!(" · {} malformed skipped", skipped));
            }
            text
        }
    };

    let hint = if state.route_edit.is_editing() {
        "Enter keep · Esc restore"
    } else {
        "? help · q quit"
    };
    format!(" {}  |  {}", summary, hint)
}

fn render_status_bar(buf: &mut Buffer, area: Rect, state: &AppState, styles: ViewStyles) {
    Paragraph::new(Line::from(Span::styled(status_text(state), styles.muted()))).render(area, buf);
}

/// Draw the whole screen for `state`.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: ViewStyles) {
    let area = frame.area();
    let layout = compute_layout(area, state.filter_panel.is_expanded());
    let buf = frame.buffer_mut();

    render_route_bar(
        buf,
        layout.header,
        &state.criteria.origin,
        &state.criteria.destination,
        &state.route_edit,
        styles,
    );
    render_sort_bar(buf, layout.sort_bar, state.sort, styles);

    if let Some(panel_area) = layout.filter_panel {
        FilterPanel::new(
            &state.criteria,
            &state.filter_panel,
            state.focus == FocusPane::Filters,
            styles,
        )
        .render(panel_area, buf);
    }

    let view = state.view();
    ResultsList::new(
        state.catalog().status(),
        &view,
        state.selected_result(),
        state.focus == FocusPane::Results,
        styles,
    )
    .render(layout.results, buf);

    render_status_bar(buf, layout.status, state, styles);

    if state.help_visible {
        render_help_overlay(buf, area, styles);
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
