//! Keyboard action dispatch.
//!
//! Translates a domain [`KeyAction`] into AppState transitions. Quitting and
//! raw text entry are the shell's business and never reach this function.

use crate::model::KeyAction;
use crate::state::route_input::RouteField;
use crate::state::sort::SortMode;
use crate::state::AppState;

/// Apply `action` to `state`.
///
/// While the help overlay is open, only `Help` (to close it) has an effect.
pub fn handle_action(mut state: AppState, action: KeyAction) -> AppState {
    if state.help_visible && action != KeyAction::Help {
        return state;
    }

    match action {
        KeyAction::SortCheap => state.select_sort(SortMode::Cheap),
        KeyAction::SortFast => state.select_sort(SortMode::Fast),
        KeyAction::SortOptimal => state.select_sort(SortMode::Optimal),
        KeyAction::LoadMore => {
            state.load_more();
        }
        KeyAction::EditOrigin => state.begin_route_edit(RouteField::Origin),
        KeyAction::EditDestination => state.begin_route_edit(RouteField::Destination),
        KeyAction::ToggleFilterPanel => state.toggle_filter_panel(),
        KeyAction::CycleFocus => state.cycle_focus(),
        KeyAction::ToggleOption => state.toggle_option(),
        KeyAction::MoveDown => state.move_down(),
        KeyAction::MoveUp => state.move_up(),
        KeyAction::MoveToTop => state.move_to_top(),
        KeyAction::Help => state.toggle_help(),
        KeyAction::Quit => {}
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FocusPane;
    use crate::tests::fixtures::sample_catalog;

    fn loaded_state() -> AppState {
        let mut state = AppState::default();
        state.begin_loading();
        state.apply_load_outcome(Ok(sample_catalog()));
        state
    }

    #[test]
    fn sort_keys_select_modes() {
        let state = handle_action(loaded_state(), KeyAction::SortFast);
        assert_eq!(state.sort, SortMode::Fast);
        let state = handle_action(state, KeyAction::SortOptimal);
        assert_eq!(state.sort, SortMode::Optimal);
        let state = handle_action(state, KeyAction::SortCheap);
        assert_eq!(state.sort, SortMode::Cheap);
    }

    #[test]
    fn load_more_reveals_next_batch() {
        let state = handle_action(loaded_state(), KeyAction::LoadMore);
        assert_eq!(state.view().tickets.len(), 6);
    }

    #[test]
    fn edit_origin_enters_route_edit() {
        let state = handle_action(loaded_state(), KeyAction::EditOrigin);
        assert_eq!(state.route_edit.field(), Some(RouteField::Origin));
    }

    #[test]
    fn space_toggles_only_with_filter_focus() {
        let state = handle_action(loaded_state(), KeyAction::ToggleOption);
        assert!(state.criteria.is_empty(), "Results focus ignores toggle");

        let state = handle_action(state, KeyAction::CycleFocus);
        assert_eq!(state.focus, FocusPane::Filters);
        let state = handle_action(state, KeyAction::ToggleOption);
        assert!(state.criteria.has_connection(0));
    }

    #[test]
    fn help_overlay_swallows_other_actions() {
        let state = handle_action(loaded_state(), KeyAction::Help);
        assert!(state.help_visible);

        let state = handle_action(state, KeyAction::SortFast);
        assert_eq!(state.sort, SortMode::Cheap);

        let state = handle_action(state, KeyAction::Help);
        assert!(!state.help_visible);
    }

    #[test]
    fn quit_leaves_state_untouched() {
        let before = loaded_state();
        let after = handle_action(before.clone(), KeyAction::Quit);
        assert_eq!(after.sort, before.sort);
        assert_eq!(after.reveal, before.reveal);
        assert_eq!(after.criteria, before.criteria);
    }
}
