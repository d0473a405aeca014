//! Ticket cards and the results area.

use super::constants::{
    CARD_HEIGHT, LOADING_MESSAGE, LOAD_FAILED_MESSAGE, LOAD_MORE_HEIGHT, LOAD_MORE_LABEL,
    NO_RESULTS_MESSAGE,
};
use super::styles::ViewStyles;
use crate::model::Ticket;
use crate::state::{LoadStatus, PipelineView};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `text` to at most `max_width` terminal columns, ending with `…` when
/// anything was dropped.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// One ticket rendered as a bordered card.
///
/// ```text
/// ┌──────────────────────────────────────┐
/// │4200 P                         Победа │
/// │Москва → Сочи          12:00 - 16:30  │
/// │3 h 30 min                1 connection│
/// └──────────────────────────────────────┘
/// ```
pub struct TicketCard<'a> {
    ticket: &'a Ticket,
    selected: bool,
    styles: ViewStyles,
}

impl<'a> TicketCard<'a> {
    /// Card for `ticket`; `selected` draws the highlighted border.
    pub fn new(ticket: &'a Ticket, selected: bool, styles: ViewStyles) -> Self {
        Self {
            ticket,
            selected,
            styles,
        }
    }

    /// Left text padded so `right` ends at the last column.
    fn split_line(
        &self,
        left: Span<'static>,
        right: Span<'static>,
        width: usize,
    ) -> Line<'static> {
        let right_width = right.content.width();
        let left_budget = width.saturating_sub(right_width + 1);
        let left_text = truncate_to_width(&left.content, left_budget);
        let gap = width
            .saturating_sub(left_text.width() + right_width)
            .max(1);

        Line::from(vec![
            Span::styled(left_text, left.style),
            Span::raw(" ".repeat(gap)),
            right,
        ])
    }

    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let t = self.ticket;
        let carrier_label = crate::model::KnownCarrier::from_name(&t.company)
            .map(|c| c.label().to_string())
            .unwrap_or_else(|| t.company.clone());
        let carrier = Span::styled(
            truncate_to_width(&carrier_label, width / 2),
            self.styles.carrier(&t.company),
        );

        vec![
            self.split_line(
                Span::styled(format!("{} {}", t.display_price(), t.currency), self.styles.price()),
                carrier,
                width,
            ),
            self.split_line(
                Span::raw(format!("{} → {}", t.from, t.to)),
                Span::styled(
                    format!("{} - {}", t.time.departure, t.time.arrival),
                    self.styles.muted(),
                ),
                width,
            ),
            self.split_line(
                Span::styled(t.display_duration(), self.styles.muted()),
                Span::styled(t.connections_label(), self.styles.muted()),
                width,
            ),
        ]
    }
}

impl Widget for TicketCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.selected {
            self.styles.focused_border()
        } else {
            self.styles.border()
        };
        let block = Block::default().borders(Borders::ALL).border_style(border);
        let inner_width = block.inner(area).width as usize;

        Paragraph::new(self.lines(inner_width))
            .block(block)
            .render(area, buf);
    }
}

/// Results area: status message, cards, and the "load more" control.
pub struct ResultsList<'a> {
    status: LoadStatus,
    view: &'a PipelineView<'a>,
    selected: usize,
    focused: bool,
    styles: ViewStyles,
}

impl<'a> ResultsList<'a> {
    /// Results for `view` under the given load `status`.
    pub fn new(
        status: LoadStatus,
        view: &'a PipelineView<'a>,
        selected: usize,
        focused: bool,
        styles: ViewStyles,
    ) -> Self {
        Self {
            status,
            view,
            selected,
            focused,
            styles,
        }
    }

    fn render_message(area: Rect, buf: &mut Buffer, text: &str, style: ratatui::style::Style) {
        Paragraph::new(Line::from(Span::styled(text.to_string(), style)))
            .alignment(Alignment::Center)
            .render(area, buf);
    }

    /// First card to draw so the selected one is on screen.
    fn first_visible(&self, capacity: usize) -> usize {
        if capacity == 0 {
            return 0;
        }
        self.selected.saturating_sub(capacity - 1)
    }
}

impl Widget for ResultsList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            self.styles.focused_border()
        } else {
            self.styles.border()
        };
        let title = match self.status {
            LoadStatus::Loaded { .. } => format!(" Flights ({}) ", self.view.total_matches),
            _ => " Flights ".to_string(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border);
        let inner = block.inner(area);
        block.render(area, buf);

        match self.status {
            LoadStatus::NotStarted | LoadStatus::Loading => {
                Self::render_message(inner, buf, LOADING_MESSAGE, self.styles.muted());
                return;
            }
            LoadStatus::Failed => {
                Self::render_message(inner, buf, LOAD_FAILED_MESSAGE, self.styles.error());
                return;
            }
            LoadStatus::Loaded { .. } => {}
        }

        if self.view.is_empty() {
            Self::render_message(inner, buf, NO_RESULTS_MESSAGE, self.styles.muted());
            return;
        }

        let footer = if self.view.has_more { LOAD_MORE_HEIGHT } else { 0 };
        let cards_height = inner.height.saturating_sub(footer);
        let capacity = (cards_height / CARD_HEIGHT) as usize;
        let start = self.first_visible(capacity);

        for (slot, (index, ticket)) in self
            .view
            .tickets
            .iter()
            .enumerate()
            .skip(start)
            .take(capacity)
            .enumerate()
        {
            let card_area = Rect {
                x: inner.x,
                y: inner.y + slot as u16 * CARD_HEIGHT,
                width: inner.width,
                height: CARD_HEIGHT,
            };
            let selected = self.focused && index == self.selected;
            TicketCard::new(ticket, selected, self.styles).render(card_area, buf);
        }

        if self.view.has_more {
            let shown = self.view.tickets.len();
            let label = format!(
                "{}  ·  {} of {}",
                LOAD_MORE_LABEL, shown, self.view.total_matches
            );
            let footer_area = Rect {
                x: inner.x,
                y: inner.y + inner.height.saturating_sub(LOAD_MORE_HEIGHT),
                width: inner.width,
                height: LOAD_MORE_HEIGHT,
            };
            Paragraph::new(Line::from(Span::styled(label, self.styles.load_more())))
                .alignment(Alignment::Center)
                .render(footer_area, buf);
        }
    }
}
