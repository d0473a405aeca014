//! Tests for the headless report.

use super::*;
use crate::model::{LoadError, MalformedTicket};
use crate::tests::fixtures::{sample_catalog, sample_tickets};
use serde_json::Value;
use std::path::PathBuf;

fn request(sort: SortMode) -> ReportRequest {
    ReportRequest {
        sort,
        ..ReportRequest::default()
    }
}

#[test]
fn format_parses_case_insensitively() {
    assert_eq!("json".parse::<ReportFormat>(), Ok(ReportFormat::Json));
    assert_eq!(" Text ".parse::<ReportFormat>(), Ok(ReportFormat::Text));
    assert!("yaml".parse::<ReportFormat>().is_err());
}

#[test]
fn effective_reveal_applies_more_steps() {
    let req = ReportRequest {
        more: 2,
        ..ReportRequest::default()
    };
    assert_eq!(req.effective_reveal().visible(), 9);
}

#[test]
fn huge_more_count_reveals_everything_at_once() {
    let req = ReportRequest {
        more: usize::MAX,
        ..ReportRequest::default()
    };
    assert_eq!(req.effective_reveal().visible(), usize::MAX);

    let catalog = sample_catalog();
    let view = req.apply(&catalog);
    assert_eq!(view.tickets.len(), 10);
    assert!(!view.has_more);
}

#[test]
fn text_report_default_window() {
    let catalog = sample_catalog();
    let text = render_report(&catalog, &request(SortMode::Cheap)).unwrap();

    insta::assert_snapshot!(text, @r"
    Cheapest · 3 of 10 flights
    2500 P · Победа · Казань → Москва · 12:00 - 16:30 · 1 h 40 min · Direct
    3100 P · S7 Airlines · Москва → Казань · 12:00 - 16:30 · 1 h 35 min · Direct
    3900 P · Победа · Москва → Калининград · 12:00 - 16:30 · 2 h 20 min · Direct
    7 more (pass --more to show them)
    ");
}

#[test]
fn text_report_filtered_by_airline_fastest() {
    let catalog = sample_catalog();
    let mut req = request(SortMode::Fast);
    req.criteria.toggle_carrier("Red Wings");

    let text = render_report(&catalog, &req).unwrap();

    insta::assert_snapshot!(text, @r"
    Fastest · 3 of 3 flights
    6900 P · Red Wings · Москва → Сочи · 12:00 - 16:30 · 2 h 50 min · Direct
    5600 P · Red Wings · Санкт-Петербург → Сочи · 12:00 - 16:30 · 6 h 20 min · 2 connections
    15400 P · Red Wings · Москва → Владивосток · 12:00 - 16:30 · 12 h 0 min · 3 connections
    ");
}

#[test]
fn text_report_no_matches() {
    let catalog = sample_catalog();
    let mut req = request(SortMode::Cheap);
    req.criteria.destination = "Париж".to_string();

    let text = render_report(&catalog, &req).unwrap();

    assert_eq!(text, "No flights found.");
}

#[test]
fn text_report_mentions_malformed_tickets() {
    let catalog = Catalog {
        tickets: Vec::new(),
        malformed: vec![
            MalformedTicket::new(0, "missing field `price`"),
            MalformedTicket::new(4, "invalid type"),
        ],
    };

    let text = render_report(&catalog, &request(SortMode::Cheap)).unwrap();

    insta::assert_snapshot!(text, @r"
    No flights found.
    2 malformed tickets skipped
    ");
}

#[test]
fn json_report_includes_logo_paths() {
    let catalog = sample_catalog();
    let req = ReportRequest {
        more: 3,
        format: ReportFormat::Json,
        ..ReportRequest::default()
    };

    let json = render_report(&catalog, &req).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["sort"], "cheap");
    assert_eq!(value["totalMatches"], 10);
    assert_eq!(value["hasMore"], false);

    let tickets = value["tickets"].as_array().unwrap();
    assert_eq!(tickets.len(), 10);
    assert_eq!(tickets[0]["id"], 5);
    assert_eq!(tickets[0]["logo"], "/images/logoPobeda.png");
    assert_eq!(tickets[8]["id"], 10);
    assert_eq!(tickets[8]["logo"], Value::Null, "Unknown carrier has no logo");
}

#[test]
fn json_report_keeps_unknown_connections_as_null() {
    let catalog = Catalog::from_tickets(
        sample_tickets()
            .into_iter()
            .filter(|t| t.id == 4)
            .collect(),
    );
    let req = ReportRequest {
        format: ReportFormat::Json,
        ..ReportRequest::default()
    };

    let value: Value = serde_json::from_str(&render_report(&catalog, &req).unwrap()).unwrap();

    assert_eq!(value["tickets"][0]["connectionAmount"], Value::Null);
    assert_eq!(value["tickets"][0]["logo"], "/images/logoS7.png");
}

#[test]
fn run_report_reads_file_source() {
    let path = std::env::temp_dir().join(format!("skyfare-report-{}.json", std::process::id()));
    let body = serde_json::json!({ "tickets": sample_tickets() });
    std::fs::write(&path, body.to_string()).unwrap();

    let mut out = Vec::new();
    let result = run_report(
        &CatalogSource::File(path.clone()),
        &request(SortMode::Cheap),
        &mut out,
    );
    std::fs::remove_file(&path).ok();

    assert!(result.is_ok(), "{:?}", result);
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Cheapest · 3 of 10 flights"), "{}", text);
    assert!(text.ends_with('\n'));
}

#[test]
fn run_report_fails_on_missing_file() {
    let source = CatalogSource::File(PathBuf::from("/definitely/not/here/db.json"));
    let mut out = Vec::new();

    let result = run_report(&source, &request(SortMode::Cheap), &mut out);

    assert!(matches!(result, Err(AppError::Load(LoadError::Source(_)))));
    assert!(out.is_empty(), "Nothing is printed on failure");
}
