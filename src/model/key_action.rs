//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Sorting
    /// Sort by ascending price. Default: 1
    SortCheap,
    /// Sort by ascending duration. Default: 2
    SortFast,
    /// Sort by ascending price + duration. Default: 3
    SortOptimal,

    // Reveal
    /// Reveal the next batch of matches. Default: m
    LoadMore,

    // Route inputs
    /// Start editing the origin filter. Default: o
    EditOrigin,
    /// Start editing the destination filter. Default: d
    EditDestination,

    // Filter panel
    /// Show or hide the filter panel on narrow terminals. Default: f
    ToggleFilterPanel,
    /// Move focus between results and filter panel. Default: Tab
    CycleFocus,
    /// Toggle the filter option under the cursor. Default: Space
    ToggleOption,

    // Navigation
    /// Move down: next result card or next filter option. Default: j/↓
    MoveDown,
    /// Move up: previous result card or previous filter option. Default: k/↑
    MoveUp,
    /// Jump to the first result. Default: g/Home
    MoveToTop,

    // Application
    /// Exit the application. Default: q
    Quit,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
}
