//! Incremental reveal of the result list.

/// Visible count before any "load more".
pub const DEFAULT_INITIAL_VISIBLE: usize = 3;

/// Tickets added per "load more".
pub const DEFAULT_REVEAL_STEP: usize = 3;

/// How many results are shown.
///
/// The count only grows. It is independent of filtering and sorting, so a
/// narrower filter does not shrink it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    visible: usize,
    step: usize,
}

impl Reveal {
    /// Start at `initial` and grow by `step`. A zero step is raised to one.
    pub fn new(initial: usize, step: usize) -> Self {
        Self {
            visible: initial,
            step: step.max(1),
        }
    }

    /// Current visible count.
    pub fn visible(&self) -> usize {
        self.visible
    }

    /// Growth per [`Reveal::load_more`].
    pub fn step(&self) -> usize {
        self.step
    }

    /// Grow the visible count by one step.
    pub fn load_more(&mut self) {
        self.visible = self.visible.saturating_add(self.step);
    }

    /// Grow the visible count by `steps` steps at once, saturating.
    pub fn advance(&mut self, steps: usize) {
        self.visible = self
            .visible
            .saturating_add(self.step.saturating_mul(steps));
    }

    /// Whether `total_matches` exceeds what is shown.
    pub fn has_more(&self, total_matches: usize) -> bool {
        self.visible < total_matches
    }

    /// Keep only the visible prefix.
    pub fn truncate<T>(&self, items: &mut Vec<T>) {
        items.truncate(self.visible);
    }
}

impl Default for Reveal {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_VISIBLE, DEFAULT_REVEAL_STEP)
    }
}
