//! TUI rendering and terminal management (impure shell).

pub mod constants;
mod filter_panel;
mod help;
pub mod layout;
mod route_bar;
mod sort_bar;
pub mod styles;
pub mod ticket_card;

pub use filter_panel::FilterPanel;
pub use help::{centered_rect, render_help_overlay};
pub use route_bar::RouteInput;
pub use styles::{ColorConfig, ViewStyles};
pub use ticket_card::{ResultsList, TicketCard};

use crate::config::keybindings::KeyBindings;
use crate::model::{AppError, KeyAction};
use crate::source::{CatalogLoader, CatalogSource};
use crate::state::{handle_action, AppState, Reveal, SortMode};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// How often the event loop wakes to check the loader.
const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Errors that can occur during TUI operations.
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations.
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error.
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application.
///
/// Generic over backend to support testing with TestBackend.
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    loader: CatalogLoader,
    key_bindings: KeyBindings,
    styles: ViewStyles,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Put the terminal in raw mode on the alternate screen.
    pub fn new(
        loader: CatalogLoader,
        app_state: AppState,
        styles: ViewStyles,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let terminal = undo_on_error(enter_alternate_screen(), restore_terminal)?;

        Ok(Self {
            terminal,
            app_state,
            loader,
            key_bindings: KeyBindings::default(),
            styles,
        })
    }

    /// Run the event loop until the user quits.
    ///
    /// Starts the catalog fetch, then redraws on key presses, resizes and
    /// when the fetch outcome arrives. Idle ticks only check the loader.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.start_loading();
        self.draw()?;

        loop {
            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind != KeyEventKind::Release => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "Terminal resized");
                        self.sync_layout();
                        self.draw()?;
                    }
                    _ => {}
                }
            }

            if self.poll_loader() {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// NotStarted → Loading and spawn the fetch.
    fn start_loading(&mut self) {
        if self.app_state.begin_loading() {
            self.loader.start();
        }
    }

    /// Apply the fetch outcome if it has arrived.
    ///
    /// Returns true when state changed and a redraw is due.
    fn poll_loader(&mut self) -> bool {
        match self.loader.poll() {
            Some(outcome) => {
                self.app_state.apply_load_outcome(outcome);
                true
            }
            None => false,
        }
    }

    /// Handle a single keyboard event.
    ///
    /// Returns true if the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.app_state.route_edit.is_editing() {
            self.handle_route_key(key);
            return false;
        }

        if self.app_state.help_visible && key.code == KeyCode::Esc {
            self.app_state.toggle_help();
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        if action == KeyAction::Quit {
            return true;
        }

        self.sync_layout();

        // Focusing a hidden filter panel opens it first.
        if action == KeyAction::CycleFocus && !self.app_state.filters_shown() {
            self.app_state.toggle_filter_panel();
        }

        let state = std::mem::take(&mut self.app_state);
        self.app_state = handle_action(state, action);
        false
    }

    /// Keys while a route input has focus go to the text buffer.
    fn handle_route_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.app_state.commit_route_edit(),
            KeyCode::Esc => self.app_state.cancel_route_edit(),
            KeyCode::Backspace => self.app_state.route_input_backspace(),
            KeyCode::Delete => self.app_state.route_input_delete(),
            KeyCode::Left => self.app_state.route_cursor_left(),
            KeyCode::Right => self.app_state.route_cursor_right(),
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.app_state.route_input_char(ch)
            }
            _ => {}
        }
    }

    /// Tell the state whether the current width pins the filter panel.
    fn sync_layout(&mut self) {
        let width = self.terminal.size().map(|s| s.width).unwrap_or(0);
        self.app_state
            .set_filters_pinned(layout::filters_visible(width, false));
    }

    /// Render the current frame.
    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let styles = self.styles;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, state, styles);
        })?;
        Ok(())
    }
}

// ===== Test Helpers =====
//
// Only for tests within the crate.

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp without touching the real terminal.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        loader: CatalogLoader,
        key_bindings: KeyBindings,
    ) -> Self {
        Self {
            terminal,
            app_state,
            loader,
            key_bindings,
            styles: ViewStyles::new(ColorConfig::with_colors(false)),
        }
    }

    /// App state accessor.
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Handle one key. Returns true if the app would quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Begin loading as `run` does.
    pub(crate) fn start_loading_test(&mut self) {
        self.start_loading()
    }

    /// Poll the loader as a timer tick does.
    pub(crate) fn poll_loader_test(&mut self) -> bool {
        self.poll_loader()
    }

    /// Block until the loader finishes, then apply the outcome.
    pub(crate) fn finish_loading_test(&mut self) {
        if let Some(outcome) = self.loader.wait() {
            self.app_state.apply_load_outcome(outcome);
        }
    }

    /// Render one frame.
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Terminal accessor for buffer inspection.
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// CLI-derived settings for the interactive session.
///
/// Bridges argument parsing in `main.rs` and the TUI's initial state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliArgs {
    /// Initial sort mode.
    pub sort: SortMode,
    /// Initial visible count and step.
    pub reveal: Reveal,
    /// Disable colors.
    pub no_color: bool,
}

impl CliArgs {
    /// Settings for a session.
    pub fn new(sort: SortMode, reveal: Reveal, no_color: bool) -> Self {
        Self {
            sort,
            reveal,
            no_color,
        }
    }
}

/// Run the interactive browser over `source`.
///
/// Logging must be initialized by the caller. The terminal is restored even
/// when the event loop fails.
pub fn run_with_source(source: CatalogSource, args: CliArgs) -> Result<(), TuiError> {
    let loader = CatalogLoader::new(source);
    let state = AppState::new(args.sort, args.reveal);
    let styles = ViewStyles::new(ColorConfig::from_env_and_args(args.no_color));

    let mut app = TuiApp::new(loader, state, styles)?;
    let result = app.run();

    restore_terminal()?;

    result
}

fn enter_alternate_screen() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Run `undo` if a setup step failed, keeping the setup error.
fn undo_on_error<T>(
    result: Result<T, TuiError>,
    undo: impl FnOnce() -> Result<(), TuiError>,
) -> Result<T, TuiError> {
    if let Err(err) = &result {
        if let Err(undo_err) = undo() {
            warn!(error = %undo_err, setup_error = %err, "Terminal restore failed");
        }
    }
    result
}

/// Leave raw mode and the alternate screen.
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
