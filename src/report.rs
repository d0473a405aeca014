//! Headless report: one synchronous load, one pipeline run, printed.
//!
//! Same filter, sort and reveal semantics as the interactive browser, for
//! scripts and quick lookups.

use crate::model::{logo_path, AppError, Catalog, KnownCarrier, Ticket};
use crate::source::{load_catalog, CatalogSource};
use crate::state::{run_pipeline, FilterCriteria, PipelineView, Reveal, SortMode};
use serde::Serialize;
use std::io::Write;
use std::str::FromStr;
use thiserror::Error;
use tracing::{error, info};

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// One line per ticket.
    #[default]
    Text,
    /// Pretty-printed JSON document.
    Json,
}

/// Unrecognized report format name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown report format {0:?} (expected text or json)")]
pub struct UnknownReportFormat(pub String);

impl FromStr for ReportFormat {
    type Err = UnknownReportFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(UnknownReportFormat(s.to_string())),
        }
    }
}

/// Everything a report run needs besides the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    /// Filter selections.
    pub criteria: FilterCriteria,
    /// Sort mode.
    pub sort: SortMode,
    /// Initial reveal window.
    pub reveal: Reveal,
    /// How many times to press "load more" before printing.
    pub more: usize,
    /// Output format.
    pub format: ReportFormat,
}

impl Default for ReportRequest {
    fn default() -> Self {
        Self {
            criteria: FilterCriteria::default(),
            sort: SortMode::default(),
            reveal: Reveal::default(),
            more: 0,
            format: ReportFormat::default(),
        }
    }
}

impl ReportRequest {
    /// Reveal window after `more` extra steps.
    pub fn effective_reveal(&self) -> Reveal {
        let mut reveal = self.reveal;
        reveal.advance(self.more);
        reveal
    }

    /// Run the pipeline over `catalog`.
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> PipelineView<'a> {
        run_pipeline(
            &catalog.tickets,
            &self.criteria,
            self.sort,
            &self.effective_reveal(),
        )
    }
}

/// Carrier name for display: the known label, else the raw name.
fn carrier_label(company: &str) -> &str {
    KnownCarrier::from_name(company)
        .map(KnownCarrier::label)
        .unwrap_or(company)
}

fn ticket_line(ticket: &Ticket) -> String {
    format!(
        "{} {} · {} · {} → {} · {} - {} · {} · {}",
        ticket.display_price(),
        ticket.currency,
        carrier_label(&ticket.company),
        ticket.from,
        ticket.to,
        ticket.time.departure,
        ticket.time.arrival,
        ticket.display_duration(),
        ticket.connections_label(),
    )
}

/// Plain-text report.
pub fn render_text(view: &PipelineView<'_>, sort: SortMode, malformed: usize) -> String {
    let mut lines = Vec::with_capacity(view.tickets.len() + 3);

    if view.is_empty() {
        lines.push("No flights found.".to_string());
    } else {
        lines.push(format!(
            "{} · {} of {} flights",
            sort.label(),
            view.tickets.len(),
            view.total_matches
        ));
        lines.extend(view.tickets.iter().map(|t| ticket_line(t)));
        if view.has_more {
            lines.push(format!(
                "{} more (pass --more to show them)",
                view.total_matches - view.tickets.len()
            ));
        }
    }

    if malformed > 0 {
        lines.push(format!("{} malformed tickets skipped", malformed));
    }

    lines.join("\n")
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonTicket<'a> {
    #[serde(flatten)]
    ticket: &'a Ticket,
    logo: Option<&'static str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    sort: &'static str,
    total_matches: usize,
    has_more: bool,
    malformed: usize,
    tickets: Vec<JsonTicket<'a>>,
}

/// JSON report. Each ticket carries its carrier logo path, `null` for
/// carriers without one.
///
/// # Errors
///
/// Returns `serde_json::Error` if serialization fails.
pub fn render_json(
    view: &PipelineView<'_>,
    sort: SortMode,
    malformed: usize,
) -> Result<String, serde_json::Error> {
    let report = JsonReport {
        sort: sort.as_str(),
        total_matches: view.total_matches,
        has_more: view.has_more,
        malformed,
        tickets: view
            .tickets
            .iter()
            .map(|ticket| JsonTicket {
                ticket,
                logo: logo_path(&ticket.company),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&report)
}

/// Render `catalog` per `request`.
///
/// # Errors
///
/// Returns `serde_json::Error` if JSON serialization fails.
pub fn render_report(catalog: &Catalog, request: &ReportRequest) -> Result<String, serde_json::Error> {
    let view = request.apply(catalog);
    let malformed = catalog.malformed.len();
    match request.format {
        ReportFormat::Text => Ok(render_text(&view, request.sort, malformed)),
        ReportFormat::Json => render_json(&view, request.sort, malformed),
    }
}

/// Load `source` synchronously and write the report to `out`.
///
/// # Errors
///
/// Returns `AppError::Load` if the catalog cannot be loaded (the detail is
/// logged), and IO or serialization errors from writing.
pub fn run_report<W: Write>(
    source: &CatalogSource,
    request: &ReportRequest,
    out: &mut W,
) -> Result<(), AppError> {
    let catalog = load_catalog(source).map_err(|err| {
        error!(source = %source, error = %err, "Catalog load failed");
        err
    })?;
    info!(
        tickets = catalog.tickets.len(),
        malformed = catalog.malformed.len(),
        "Catalog loaded for report"
    );

    let rendered = render_report(&catalog, request)?;
    writeln!(out, "{}", rendered)?;
    Ok(())
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
