//! Modal input dialogs.
//!
//! [`PromptState`] is a one-line text prompt, [`ChoicePicker`] a list of fixed
//! values. Both resolve to a value on submit and to nothing on cancel.

mod choice;
pub mod ui;

pub use choice::ChoicePicker;

/// What a submitted prompt value is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// New text for a cell.
    EditCell {
        /// Target row.
        row: usize,
        /// Target column.
        col: usize,
    },
    /// New row count.
    ResizeRows,
    /// File path to save to.
    SavePath,
}

impl PromptKind {
    /// Dialog title.
    pub fn title(self) -> String {
        match self {
            PromptKind::EditCell { row, col } => {
                format!("Edit {} / row {}", crate::column::header(col), row + 1)
            }
            PromptKind::ResizeRows => "Number of rows".to_string(),
            PromptKind::SavePath => "Save data to".to_string(),
        }
    }
}

/// Text prompt state.
#[derive(Debug, Default)]
pub struct PromptState {
    kind: Option<PromptKind>,
    buffer: String,
}

impl PromptState {
    /// Create a new, inactive prompt.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the prompt is open.
    pub fn is_active(&self) -> bool {
        self.kind.is_some()
    }

    /// Open the prompt with initial text.
    pub fn start(&mut self, kind: PromptKind, initial: impl Into<String>) {
        self.kind = Some(kind);
        self.buffer = initial.into();
    }

    /// Kind of the open prompt.
    pub fn kind(&self) -> Option<PromptKind> {
        self.kind
    }

    /// Current input text.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Add a character to the buffer.
    pub fn input(&mut self, c: char) {
        self.buffer.push(c);
    }

    /// Remove the last character from the buffer.
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Close the prompt and hand back its kind and text.
    pub fn submit(&mut self) -> Option<(PromptKind, String)> {
        let kind = self.kind.take()?;
        Some((kind, std::mem::take(&mut self.buffer)))
    }

    /// Close the prompt, discarding input.
    pub fn cancel(&mut self) {
        self.kind = None;
        self.buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_returns_text_and_closes() {
        let mut p = PromptState::new();
        p.start(PromptKind::ResizeRows, "5");
        p.backspace();
        p.input('1');
        p.input('2');
        assert_eq!(p.submit(), Some((PromptKind::ResizeRows, "12".to_string())));
        assert!(!p.is_active());
        assert_eq!(p.submit(), None);
    }

    #[test]
    fn cancel_discards() {
        let mut p = PromptState::new();
        p.start(PromptKind::SavePath, "out.nc");
        p.cancel();
        assert!(!p.is_active());
        assert_eq!(p.buffer(), "");
    }
}
