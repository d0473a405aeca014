//! Filter, sort and reveal composed into one pure view computation.

use crate::model::Ticket;
use crate::state::filter::{filter_tickets, FilterCriteria};
use crate::state::reveal::Reveal;
use crate::state::sort::{sort_tickets, SortMode};

/// What the results area should show.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineView<'a> {
    /// Visible tickets in display order.
    pub tickets: Vec<&'a Ticket>,
    /// Tickets passing the filter, before truncation.
    pub total_matches: usize,
    /// Whether "load more" should be offered.
    pub has_more: bool,
}

impl PipelineView<'_> {
    /// Whether nothing passed the filter.
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

/// Filter, then sort, then truncate to the reveal count.
pub fn run_pipeline<'a>(
    tickets: &'a [Ticket],
    criteria: &FilterCriteria,
    sort: SortMode,
    reveal: &Reveal,
) -> PipelineView<'a> {
    let mut matched = filter_tickets(tickets, criteria);
    let total_matches = matched.len();
    sort_tickets(&mut matched, sort);
    reveal.truncate(&mut matched);

    PipelineView {
        tickets: matched,
        total_matches,
        has_more: reveal.has_more(total_matches),
    }
}
