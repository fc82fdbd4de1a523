//! Fixed-choice picker.

use crate::table::CellPos;

/// Picker over a fixed list of values for one cell.
#[derive(Debug, Default)]
pub struct ChoicePicker {
    target: Option<CellPos>,
    options: &'static [&'static str],
    cursor: usize,
}

impl ChoicePicker {
    /// Create a new, closed picker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the picker is open.
    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    /// Open the picker for a cell, preselecting `current` when it is an option.
    pub fn open(&mut self, target: CellPos, options: &'static [&'static str], current: &str) {
        self.target = Some(target);
        self.options = options;
        self.cursor = options
            .iter()
            .position(|o| *o == current.trim())
            .unwrap_or(0);
    }

    /// Cell being edited.
    pub fn target(&self) -> Option<CellPos> {
        self.target
    }

    /// Offered values.
    pub fn options(&self) -> &'static [&'static str] {
        self.options
    }

    /// Index of the highlighted value.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Highlight the previous value.
    pub fn up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Highlight the next value.
    pub fn down(&mut self) {
        if self.cursor + 1 < self.options.len() {
            self.cursor += 1;
        }
    }

    /// Close the picker and hand back the target and chosen value.
    pub fn confirm(&mut self) -> Option<(CellPos, &'static str)> {
        let target = self.target.take()?;
        self.options.get(self.cursor).map(|&v| (target, v))
    }

    /// Close the picker without choosing.
    pub fn cancel(&mut self) {
        self.target = None;
    }
}
