//! Layout dimensions and fixed UI text.

/// Header height: bordered row holding the two route inputs.
pub const HEADER_HEIGHT: u16 = 3;

/// Sort bar height (border + tabs).
pub const SORT_BAR_HEIGHT: u16 = 3;

/// Status bar height.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the "load more" line under the cards.
pub const LOAD_MORE_HEIGHT: u16 = 1;

/// Height of one ticket card: border plus three content lines.
pub const CARD_HEIGHT: u16 = 5;

/// Width of the filter panel.
pub const FILTER_PANEL_WIDTH: u16 = 28;

/// Height of the filter panel when stacked above results on narrow terminals.
/// Seven options, two section titles, one spacer, two borders.
pub const FILTER_PANEL_STACKED_HEIGHT: u16 = 12;

/// Terminals at least this wide always show the filter panel beside results.
pub const WIDE_LAYOUT_MIN_WIDTH: u16 = 100;

/// Width percentage for the help overlay.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for the help overlay.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Shown while the catalog is loading.
pub const LOADING_MESSAGE: &str = "Loading…";

/// Shown when the catalog failed to load. Details go to the log file only.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load flights.";

/// Shown when no ticket passes the filters.
pub const NO_RESULTS_MESSAGE: &str = "No flights found.";

/// Label of the reveal control.
pub const LOAD_MORE_LABEL: &str = "Show more tickets (m)";

/// Application title in the header.
pub const APP_TITLE: &str = " skyfare ";
