//! Header row: app title plus origin and destination inputs.

use super::constants::APP_TITLE;
use super::styles::ViewStyles;
use crate::state::{RouteEdit, RouteField};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// One route input box.
///
/// Shows the committed value, or the live buffer with a block cursor while
/// the field is being edited.
pub struct RouteInput<'a> {
    field: RouteField,
    value: &'a str,
    edit: &'a RouteEdit,
    styles: ViewStyles,
}

impl<'a> RouteInput<'a> {
    /// Input for `field` with its current `value`.
    pub fn new(field: RouteField, value: &'a str, edit: &'a RouteEdit, styles: ViewStyles) -> Self {
        Self {
            field,
            value,
            edit,
            styles,
        }
    }

    fn editing_spans(buffer: &str, cursor: usize, styles: ViewStyles) -> Vec<Span<'static>> {
        let before: String = buffer.chars().take(cursor).collect();
        let mut rest = buffer.chars().skip(cursor);
        let under = rest.next().map(String::from).unwrap_or_else(|| " ".to_string());
        let after: String = rest.collect();

        vec![
            Span::raw(before),
            Span::styled(under, styles.highlight().add_modifier(Modifier::BOLD)),
            Span::raw(after),
        ]
    }
}

impl Widget for RouteInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let editing_this = self.edit.field() == Some(self.field);
        let key_hint = match self.field {
            RouteField::Origin => "o",
            RouteField::Destination => "d",
        };
        let title = format!(" {} ({}) ", self.field.label(), key_hint);

        let (line, border) = match (editing_this, self.edit) {
            (true, RouteEdit::Editing { buffer, cursor, .. }) => (
                Line::from(Self::editing_spans(buffer, *cursor, self.styles)),
                self.styles.editing(),
            ),
            _ if self.value.is_empty() => (
                Line::from(Span::styled("anywhere", self.styles.muted())),
                self.styles.border(),
            ),
            _ => (Line::from(self.value.to_string()), self.styles.border()),
        };

        Paragraph::new(line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(border),
            )
            .render(area, buf);
    }
}

/// Render both inputs side by side.
pub fn render_route_bar(
    buf: &mut Buffer,
    area: Rect,
    origin: &str,
    destination: &str,
    edit: &RouteEdit,
    styles: ViewStyles,
) {
    let title_width = APP_TITLE.chars().count() as u16;
    let [title, left, right] = Layout::horizontal([
        Constraint::Length(title_width),
        Constraint::Fill(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    let title_row = Rect {
        y: title.y + title.height / 2,
        height: title.height.min(1),
        ..title
    };
    Paragraph::new(Span::styled(APP_TITLE, styles.price())).render(title_row, buf);

    RouteInput::new(RouteField::Origin, origin, edit, styles).render(left, buf);
    RouteInput::new(RouteField::Destination, destination, edit, styles).render(right, buf);
}
