//! Configuration module.
//!
//! Settings resolve through defaults, a TOML file, environment variables and
//! CLI flags, in that order.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{resolve_config, ConfigError, ConfigFile, ResolvedConfig};
