//! Acceptance test harness for TUI testing.
//!
//! Wraps `TuiApp<TestBackend>` with methods for simulating a user session:
//! start the load, wait for it, press keys, type text, read the screen.

use crate::config::keybindings::KeyBindings;
use crate::model::{Catalog, LoadError};
use crate::source::CatalogLoader;
use crate::state::AppState;
use crate::view::{TuiApp, TuiError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Convert a ratatui buffer to a string for assertions.
///
/// Trailing whitespace is trimmed and blank lines are dropped to keep
/// comparisons stable.
pub(crate) fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Harness whose loader runs `fetch`, on an 80x30 terminal.
    pub fn with_fetch<F>(fetch: F) -> Result<Self, TuiError>
    where
        F: FnOnce() -> Result<Catalog, LoadError> + Send + 'static,
    {
        Self::with_fetch_and_size(fetch, 80, 30)
    }

    /// Harness whose loader runs `fetch`, with a custom terminal size.
    pub fn with_fetch_and_size<F>(fetch: F, width: u16, height: u16) -> Result<Self, TuiError>
    where
        F: FnOnce() -> Result<Catalog, LoadError> + Send + 'static,
    {
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        let app = TuiApp::new_for_test(
            terminal,
            AppState::default(),
            CatalogLoader::from_fn(fetch),
            KeyBindings::default(),
        );

        Ok(Self { app, running: true })
    }

    /// Harness over an in-memory catalog, already started and loaded.
    pub fn loaded(catalog: Catalog, width: u16, height: u16) -> Result<Self, TuiError> {
        let mut harness = Self::with_fetch_and_size(move || Ok(catalog), width, height)?;
        harness.start();
        harness.wait_for_load();
        Ok(harness)
    }

    /// Begin loading, as the event loop does on entry.
    pub fn start(&mut self) {
        self.app.start_loading_test();
    }

    /// Block until the fetch outcome is applied.
    pub fn wait_for_load(&mut self) {
        self.app.finish_loading_test();
    }

    /// One timer tick. Returns true if an outcome was applied.
    pub fn tick(&mut self) -> bool {
        self.app.poll_loader_test()
    }

    /// Send a single key. Returns true if the app quit.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send a key with modifiers (e.g. Ctrl+C).
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true;
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        }
        quit
    }

    /// Send keys in order, stopping early on quit.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    /// Type text one character at a time.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break;
            }
        }
    }

    /// App state for assertions.
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Whether the app is still running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame and return the screen contents.
    ///
    /// # Panics
    /// Panics if rendering fails (never with TestBackend).
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");
        buffer_to_string(self.app.terminal().backend().buffer())
    }
}
