//! Filter panel widget: connection counts and carriers as checkboxes.

use super::styles::ViewStyles;
use crate::state::filter_panel::CARRIER_SECTION_START;
use crate::state::{filter_options, FilterCriteria, FilterPanelState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Filter panel.
pub struct FilterPanel<'a> {
    criteria: &'a FilterCriteria,
    panel: &'a FilterPanelState,
    focused: bool,
    styles: ViewStyles,
}

impl<'a> FilterPanel<'a> {
    /// Panel reflecting `criteria`, with the cursor drawn when `focused`.
    pub fn new(
        criteria: &'a FilterCriteria,
        panel: &'a FilterPanelState,
        focused: bool,
        styles: ViewStyles,
    ) -> Self {
        Self {
            criteria,
            panel,
            focused,
            styles,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let section = self.styles.muted().add_modifier(Modifier::BOLD);
        let mut lines = vec![Line::from(Span::styled("Connections", section))];

        for (i, option) in filter_options().into_iter().enumerate() {
            if i == CARRIER_SECTION_START {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled("Airlines", section)));
            }
            let mark = if option.is_selected(self.criteria) { "[x]" } else { "[ ]" };
            let text = format!(" {} {}", mark, option.label());
            let line = if self.focused && i == self.panel.cursor() {
                Line::from(Span::styled(text, self.styles.highlight()))
            } else {
                Line::from(text)
            };
            lines.push(line);
        }
        lines
    }
}

impl Widget for FilterPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            self.styles.focused_border()
        } else {
            self.styles.border()
        };
        Paragraph::new(self.lines())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Filters (Tab) ")
                    .border_style(border),
            )
            .render(area, buf);
    }
}
