//! Navigation cursor over a result list.
//!
//! Renderers page through enumerated combinations one at a time. The
//! cursor is explicit caller-owned state; the engine knows nothing
//! about it. All moves saturate at the ends of the list.

/// Bounds-checked position within a list of `len` results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    index: usize,
    len: usize,
}

impl Pager {
    /// Creates a cursor at the first result.
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Current position, or `None` when there are no results.
    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    /// Number of results.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Jumps to the first result.
    pub fn first(&mut self) {
        self.index = 0;
    }

    /// Jumps to the last result.
    pub fn last(&mut self) {
        self.index = self.len.saturating_sub(1);
    }

    /// Moves forward one result, stopping at the last.
    pub fn forward(&mut self) {
        if self.index + 1 < self.len {
            self.index += 1;
        }
    }

    /// Moves back one result, stopping at the first.
    pub fn backward(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Status line, e.g. `Schedule #2 of 5`.
    pub fn label(&self) -> String {
        match self.current() {
            Some(i) => format!("Schedule #{} of {}", i + 1, self.len),
            None => "There are no possible schedules.".to_string(),
        }
    }
}
