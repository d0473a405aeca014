//! Help overlay listing keyboard shortcuts.
//!
//! Toggled by `?`; `Esc` also closes it.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::ViewStyles;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Sorting",
        &[
            ("1", "Cheapest first"),
            ("2", "Fastest first"),
            ("3", "Optimal (price + duration)"),
        ],
    ),
    (
        "Results",
        &[
            ("j/↓  k/↑", "Move between cards"),
            ("g/Home", "Back to the first card"),
            ("m", "Show more tickets"),
        ],
    ),
    (
        "Route",
        &[
            ("o", "Edit origin"),
            ("d", "Edit destination"),
            ("Enter", "Keep typed value"),
            ("Esc", "Restore previous value"),
        ],
    ),
    (
        "Filters",
        &[
            ("Tab", "Switch results / filters"),
            ("Space", "Toggle option under cursor"),
            ("f", "Show filters (narrow terminals)"),
        ],
    ),
    ("Application", &[("?", "Toggle this help"), ("q  Ctrl+C", "Quit")]),
];

/// Centered rect taking the given percentages of `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;

    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

fn help_lines(styles: ViewStyles) -> Vec<Line<'static>> {
    let section = styles.muted().add_modifier(Modifier::BOLD);
    let key = styles.editing();
    let mut lines = Vec::new();

    for (i, (title, entries)) in SHORTCUTS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(*title, section)));
        for (keys, description) in entries.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<12}", keys), key),
                Span::raw(*description),
            ]));
        }
    }
    lines
}

/// Draw the overlay over whatever is in `area`.
pub fn render_help_overlay(buf: &mut Buffer, area: Rect, styles: ViewStyles) {
    let popup = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);
    Clear.render(popup, buf);

    Paragraph::new(help_lines(styles))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .title_bottom(Line::from(" Esc or ? to close ").alignment(Alignment::Center))
                .borders(Borders::ALL)
                .border_style(styles.focused_border()),
        )
        .wrap(Wrap { trim: false })
        .render(popup, buf);
}
