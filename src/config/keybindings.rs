//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Lookups ignore event kind and state flags; only code and modifiers count.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = KeyBindings {
            bindings: HashMap::new(),
        };
        let none = KeyModifiers::NONE;

        // Sorting
        keys.bind(KeyCode::Char('1'), none, KeyAction::SortCheap);
        keys.bind(KeyCode::Char('2'), none, KeyAction::SortFast);
        keys.bind(KeyCode::Char('3'), none, KeyAction::SortOptimal);

        // Reveal
        keys.bind(KeyCode::Char('m'), none, KeyAction::LoadMore);

        // Route inputs
        keys.bind(KeyCode::Char('o'), none, KeyAction::EditOrigin);
        keys.bind(KeyCode::Char('d'), none, KeyAction::EditDestination);

        // Filter panel
        keys.bind(KeyCode::Char('f'), none, KeyAction::ToggleFilterPanel);
        keys.bind(KeyCode::Tab, none, KeyAction::CycleFocus);
        keys.bind(KeyCode::Char(' '), none, KeyAction::ToggleOption);

        // Navigation, vim-style and arrows
        keys.bind(KeyCode::Char('j'), none, KeyAction::MoveDown);
        keys.bind(KeyCode::Char('k'), none, KeyAction::MoveUp);
        keys.bind(KeyCode::Down, none, KeyAction::MoveDown);
        keys.bind(KeyCode::Up, none, KeyAction::MoveUp);
        keys.bind(KeyCode::Char('g'), none, KeyAction::MoveToTop);
        keys.bind(KeyCode::Home, none, KeyAction::MoveToTop);

        // Application
        keys.bind(KeyCode::Char('q'), none, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);
        keys.bind(KeyCode::Char('?'), none, KeyAction::Help);
        // Most terminals report '?' with Shift held.
        keys.bind(KeyCode::Char('?'), KeyModifiers::SHIFT, KeyAction::Help);

        keys
    }
}
