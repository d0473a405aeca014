//! Colors and text styles.
//!
//! Every style has a monochrome fallback so `--no-color` / `NO_COLOR` still
//! leave selection and focus visible through modifiers alone.

use crate::model::KnownCarrier;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Whether colors are enabled.
///
/// Disabled by the `--no-color` flag or any value of `NO_COLOR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Resolve from the CLI flag and environment. The flag wins.
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Explicit setting, bypassing the environment.
    pub fn with_colors(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== ViewStyles =====

/// Resolved styles for every widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewStyles {
    colors: ColorConfig,
}

impl ViewStyles {
    /// Styles for the given color configuration.
    pub fn new(colors: ColorConfig) -> Self {
        Self { colors }
    }

    /// Whether colors are in use.
    pub fn colors_enabled(&self) -> bool {
        self.colors.colors_enabled()
    }

    fn color(&self, color: Color) -> Style {
        if self.colors_enabled() {
            Style::default().fg(color)
        } else {
            Style::default()
        }
    }

    /// Ticket price.
    pub fn price(&self) -> Style {
        self.color(Color::LightGreen).add_modifier(Modifier::BOLD)
    }

    /// Carrier name, tinted per known carrier.
    pub fn carrier(&self, company: &str) -> Style {
        match KnownCarrier::from_name(company) {
            Some(KnownCarrier::Pobeda) => self.color(Color::LightBlue),
            Some(KnownCarrier::RedWings) => self.color(Color::LightRed),
            Some(KnownCarrier::S7) => self.color(Color::Green),
            None => Style::default(),
        }
        .add_modifier(Modifier::BOLD)
    }

    /// Secondary text (times, duration, connections).
    pub fn muted(&self) -> Style {
        self.color(Color::Gray)
    }

    /// Border of the focused pane or highlighted card.
    pub fn focused_border(&self) -> Style {
        if self.colors_enabled() {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        }
    }

    /// Border of unfocused panes.
    pub fn border(&self) -> Style {
        self.color(Color::DarkGray)
    }

    /// Active sort tab or cursor row.
    pub fn highlight(&self) -> Style {
        if self.colors_enabled() {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::REVERSED)
        }
    }

    /// Route input being edited.
    pub fn editing(&self) -> Style {
        self.color(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    /// Failure message.
    pub fn error(&self) -> Style {
        self.color(Color::Red).add_modifier(Modifier::BOLD)
    }

    /// Reveal control.
    pub fn load_more(&self) -> Style {
        self.color(Color::Cyan).add_modifier(Modifier::UNDERLINED)
    }
}

impl Default for ViewStyles {
    fn default() -> Self {
        Self::new(ColorConfig::with_colors(true))
    }
}

// ===== Tests =====
