//! Acceptance: browsing a loaded catalog with the keyboard.

use crate::state::{FocusPane, SortMode};
use crate::test_harness::AcceptanceTestHarness;
use crate::tests::fixtures::sample_catalog;
use crate::view::constants::{LOAD_MORE_LABEL, NO_RESULTS_MESSAGE};
use crossterm::event::{KeyCode, KeyModifiers};

fn loaded(width: u16) -> AcceptanceTestHarness {
    AcceptanceTestHarness::loaded(sample_catalog(), width, 40).unwrap()
}

fn shown_ids(harness: &AcceptanceTestHarness) -> Vec<u64> {
    harness.state().view().tickets.iter().map(|t| t.id).collect()
}

#[test]
fn load_more_reveals_in_steps_until_exhausted() {
    let mut harness = loaded(80);
    assert_eq!(shown_ids(&harness).len(), 3);

    harness.send_key(KeyCode::Char('m'));
    assert_eq!(shown_ids(&harness).len(), 6);

    harness.send_key(KeyCode::Char('m'));
    harness.send_key(KeyCode::Char('m'));
    assert_eq!(shown_ids(&harness).len(), 10);
    assert!(!harness.state().view().has_more);
    assert!(!harness.render_to_string().contains(LOAD_MORE_LABEL));

    harness.send_key(KeyCode::Char('m'));
    assert_eq!(harness.state().reveal.visible(), 12, "No growth once exhausted");
}

#[test]
fn sort_keys_reorder_results() {
    let mut harness = loaded(80);
    assert_eq!(shown_ids(&harness), vec![5, 2, 9]);

    harness.send_key(KeyCode::Char('2'));
    assert_eq!(harness.state().sort, SortMode::Fast);
    assert_eq!(shown_ids(&harness), vec![2, 5, 9]);

    harness.send_key(KeyCode::Char('3'));
    assert_eq!(harness.state().sort, SortMode::Optimal);

    harness.send_key(KeyCode::Char('1'));
    assert_eq!(shown_ids(&harness), vec![5, 2, 9]);
}

#[test]
fn typing_origin_filters_live_and_enter_keeps_it() {
    let mut harness = loaded(80);

    harness.send_key(KeyCode::Char('o'));
    harness.type_text("казань");
    assert_eq!(shown_ids(&harness), vec![5], "Filter applies while typing");

    harness.send_key(KeyCode::Enter);

    assert_eq!(harness.state().criteria.origin, "казань");
    assert!(!harness.state().route_edit.is_editing());
    assert!(harness.render_to_string().contains("Казань → Москва"));
}

#[test]
fn escape_restores_previous_destination() {
    let mut harness = loaded(80);
    harness.send_key(KeyCode::Char('d'));
    harness.type_text("Сочи");
    harness.send_key(KeyCode::Enter);

    harness.send_key(KeyCode::Char('d'));
    harness.type_text("xyz");
    assert!(harness.render_to_string().contains(NO_RESULTS_MESSAGE));

    harness.send_key(KeyCode::Esc);

    assert_eq!(harness.state().criteria.destination, "Сочи");
    assert!(!harness.state().view().is_empty());
}

#[test]
fn backspace_edits_multibyte_text() {
    let mut harness = loaded(80);
    harness.send_key(KeyCode::Char('d'));
    harness.type_text("Сочиx");
    harness.send_key(KeyCode::Backspace);
    harness.send_key(KeyCode::Enter);

    assert_eq!(harness.state().criteria.destination, "Сочи");
}

#[test]
fn filter_panel_toggles_direct_flights() {
    let mut harness = loaded(80);

    harness.send_key(KeyCode::Tab);
    assert_eq!(harness.state().focus, FocusPane::Filters);
    assert!(harness.render_to_string().contains("[ ] Direct"));

    harness.send_key(KeyCode::Char(' '));

    assert!(harness.state().criteria.has_connection(0));
    assert_eq!(harness.state().view().total_matches, 4);
    assert_eq!(shown_ids(&harness), vec![5, 2, 9]);
    assert!(harness.render_to_string().contains("[x] Direct"));
}

#[test]
fn filter_panel_selects_a_carrier() {
    let mut harness = loaded(120);

    harness.send_key(KeyCode::Tab);
    // Direct, 1, 2, 3 connections, then Победа, Red Wings, S7
    harness.send_keys(&[KeyCode::Char('j'); 6]);
    harness.send_key(KeyCode::Char(' '));

    assert!(harness.state().criteria.has_carrier("S7"));
    assert_eq!(shown_ids(&harness), vec![2, 8, 4]);
}

#[test]
fn space_outside_filter_panel_does_nothing() {
    let mut harness = loaded(120);
    harness.send_key(KeyCode::Char(' '));
    assert!(harness.state().criteria.is_empty());
}

#[test]
fn help_overlay_opens_and_closes() {
    let mut harness = loaded(100);

    harness.send_key(KeyCode::Char('?'));
    assert!(harness.render_to_string().contains("Keyboard Shortcuts"));

    harness.send_key(KeyCode::Char('m'));
    assert_eq!(harness.state().reveal.visible(), 3, "Help swallows other keys");

    harness.send_key(KeyCode::Esc);
    assert!(!harness.render_to_string().contains("Keyboard Shortcuts"));
}

#[test]
fn quit_with_q_or_ctrl_c() {
    let mut harness = loaded(80);
    assert!(harness.send_key(KeyCode::Char('q')));
    assert!(!harness.is_running());

    let mut harness = loaded(80);
    assert!(harness.send_key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
}

#[test]
fn narrow_screen_renders_without_panic() {
    let mut harness = AcceptanceTestHarness::loaded(sample_catalog(), 20, 8).unwrap();
    harness.send_key(KeyCode::Char('f'));
    let _ = harness.render_to_string();
}
