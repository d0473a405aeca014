//! Sort mode tabs.

use super::styles::ViewStyles;
use crate::state::SortMode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Tabs, Widget},
};

/// Render the three sort tabs with the active mode highlighted.
///
/// Tab titles carry their key hint: `1 Cheapest`, `2 Fastest`, `3 Optimal`.
pub fn render_sort_bar(buf: &mut Buffer, area: Rect, active: SortMode, styles: ViewStyles) {
    let titles: Vec<Line> = SortMode::ALL
        .iter()
        .enumerate()
        .map(|(i, mode)| Line::from(format!("{} {}", i + 1, mode.label())))
        .collect();

    Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Sort ")
                .border_style(styles.border()),
        )
        .highlight_style(styles.highlight())
        .select(active.index())
        .render(area, buf);
}
