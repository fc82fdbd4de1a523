//! Table view state: cursor, scrolling and the ordered cell selection.

pub mod ui;

/// A cell coordinate, `(row, col)`.
pub type CellPos = (usize, usize);

/// Scroll position for the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollPosition {
    /// First visible row.
    pub row: usize,
    /// First visible column.
    pub col: usize,
}

/// Cursor and selection over the grid.
#[derive(Debug, Clone, Default)]
pub struct TableState {
    /// Cursor row.
    pub cursor_row: usize,
    /// Cursor column.
    pub cursor_col: usize,
    /// Scroll offset.
    pub scroll: ScrollPosition,
    selection: Vec<CellPos>,
}

impl TableState {
    /// Create a new table state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor position.
    pub fn cursor(&self) -> CellPos {
        (self.cursor_row, self.cursor_col)
    }

    /// Selected cells in the order they were selected.
    pub fn selection(&self) -> &[CellPos] {
        &self.selection
    }

    /// Check if a cell is selected.
    pub fn is_selected(&self, row: usize, col: usize) -> bool {
        self.selection.contains(&(row, col))
    }

    /// Move cursor up.
    pub fn cursor_up(&mut self) {
        self.cursor_row = self.cursor_row.saturating_sub(1);
    }

    /// Move cursor down.
    pub fn cursor_down(&mut self, rows: usize) {
        if self.cursor_row + 1 < rows {
            self.cursor_row += 1;
        }
    }

    /// Move cursor left.
    pub fn cursor_left(&mut self) {
        self.cursor_col = self.cursor_col.saturating_sub(1);
    }

    /// Move cursor right.
    pub fn cursor_right(&mut self, cols: usize) {
        if self.cursor_col + 1 < cols {
            self.cursor_col += 1;
        }
    }

    /// Add the cursor cell to the selection, or remove it if already selected.
    pub fn toggle_at_cursor(&mut self) {
        let pos = self.cursor();
        if let Some(idx) = self.selection.iter().position(|&p| p == pos) {
            self.selection.remove(idx);
        } else {
            self.selection.push(pos);
        }
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// X and Y columns chosen by the first two selected cells.
    pub fn plot_columns(&self) -> Option<(usize, usize)> {
        match self.selection.as_slice() {
            [first, second, ..] => Some((first.1, second.1)),
            _ => None,
        }
    }

    /// Keep cursor and selection inside a grid of the given shape.
    pub fn clamp(&mut self, rows: usize, cols: usize) {
        self.cursor_row = self.cursor_row.min(rows.saturating_sub(1));
        self.cursor_col = self.cursor_col.min(cols.saturating_sub(1));
        self.selection.retain(|&(r, c)| r < rows && c < cols);
        self.scroll.row = self.scroll.row.min(self.cursor_row);
        self.scroll.col = self.scroll.col.min(self.cursor_col);
    }

    /// Adjust scroll to keep cursor visible.
    pub fn adjust_scroll(&mut self, visible_rows: usize, visible_cols: usize) {
        if visible_rows > 0 {
            if self.cursor_row < self.scroll.row {
                self.scroll.row = self.cursor_row;
            }
            if self.cursor_row >= self.scroll.row + visible_rows {
                self.scroll.row = self.cursor_row.saturating_sub(visible_rows - 1);
            }
        }
        if visible_cols > 0 {
            if self.cursor_col < self.scroll.col {
                self.scroll.col = self.cursor_col;
            }
            if self.cursor_col >= self.scroll.col + visible_cols {
                self.scroll.col = self.cursor_col.saturating_sub(visible_cols - 1);
            }
        }
    }
}
