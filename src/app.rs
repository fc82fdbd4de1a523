//! Application state and logic.
//!
//! Each user action is one method on [`App`]. Actions that can fail on
//! numeric input record the error in [`App::error_message`]; cancelled
//! dialogs leave everything unchanged.

use std::path::PathBuf;

use crate::column::{self, InputKind};
use crate::error::{GridplotError, Result};
use crate::file_browser::FileBrowserState;
use crate::grid::{Grid, MAX_ROWS};
use crate::plot::PlotState;
use crate::prompt::{ChoicePicker, PromptKind, PromptState};
use crate::table::TableState;
use crate::{clipboard, storage};

/// Path proposed by the save prompt when no file is open.
const DEFAULT_SAVE_PATH: &str = "data.nc";

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// File the grid was last loaded from or saved to.
    pub file_path: Option<PathBuf>,
    /// Grid contents.
    pub grid: Grid,
    /// Cursor and selection.
    pub table: TableState,
    /// Plot state.
    pub plot: PlotState,
    /// Text prompt.
    pub prompt: PromptState,
    /// Choice picker for constrained columns.
    pub choice: ChoicePicker,
    /// File picker for loading.
    pub file_browser: FileBrowserState,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Error shown in a popup until dismissed.
    pub error_message: Option<String>,
}

impl App {
    /// Create a new application instance with a zero-filled grid.
    pub fn new(rows: usize) -> Self {
        Self {
            file_path: None,
            grid: Grid::new(rows, crate::grid::DEFAULT_COLUMNS),
            table: TableState::new(),
            plot: PlotState::new(),
            prompt: PromptState::new(),
            choice: ChoicePicker::new(),
            file_browser: FileBrowserState::new(),
            status: "Ready".to_string(),
            theme: Theme::GruvboxDark,
            error_message: None,
        }
    }

    /// Create an application and load `path` into it.
    pub fn with_file(path: PathBuf) -> Self {
        let mut app = Self::new(crate::grid::DEFAULT_ROWS);
        app.load_file(path);
        app
    }

    fn report(&mut self, context: &str, err: GridplotError) {
        tracing::error!("{}: {}", context, err);
        self.status = context.to_string();
        self.error_message = Some(err.to_string());
    }

    /// Dismiss the error popup.
    pub fn dismiss_error(&mut self) {
        self.error_message = None;
    }

    /// Load a file, replacing the grid.
    pub fn load_file(&mut self, path: PathBuf) {
        match storage::load_grid(&path) {
            Ok(grid) => {
                self.grid = grid;
                self.table.clamp(self.grid.rows(), self.grid.cols());
                self.status = format!(
                    "{} loaded ({}x{})",
                    display_name(&path),
                    self.grid.rows(),
                    self.grid.cols()
                );
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    self.file_browser.dir = parent.to_path_buf();
                }
                self.file_path = Some(path);
                self.error_message = None;
            }
            Err(e) => self.report("Error loading file", e),
        }
    }

    /// Save the grid to a file.
    pub fn save_file(&mut self, path: PathBuf) {
        match storage::save_grid(&path, &self.grid) {
            Ok(()) => {
                self.status = format!("Saved {}", display_name(&path));
                self.file_path = Some(path);
            }
            Err(e) => self.report("Error saving file", e),
        }
    }

    /// Open the editor for the cursor cell.
    ///
    /// Choice columns get the picker, every other column a text prompt.
    pub fn begin_edit(&mut self) {
        let (row, col) = self.table.cursor();
        let Some(current) = self.grid.get(row, col) else {
            self.status = "No cell under cursor".to_string();
            return;
        };
        match column::role(col).input {
            InputKind::Choice(options) => self.choice.open((row, col), options, current),
            InputKind::Free => {
                let current = current.to_string();
                self.prompt.start(PromptKind::EditCell { row, col }, current);
            }
        }
    }

    /// Apply an edit to a cell and fire its recalculation.
    pub fn edit_cell(&mut self, row: usize, col: usize, text: String) {
        tracing::debug!("Edit ({}, {}) = {:?}", row, col, text);
        match self.grid.edit(row, col, text) {
            Ok(()) => self.status = format!("Updated {} row {}", column::header(col), row + 1),
            Err(e) => self.report("Recalculation failed", e),
        }
    }

    /// Open the resize prompt.
    pub fn begin_resize(&mut self) {
        self.prompt
            .start(PromptKind::ResizeRows, self.grid.rows().to_string());
    }

    /// Resize to a row count typed by the user.
    pub fn resize(&mut self, input: &str) {
        match parse_row_count(input) {
            Ok(rows) => {
                self.grid.resize(rows);
                self.table.clamp(self.grid.rows(), self.grid.cols());
                tracing::info!("Resized grid to {} rows", rows);
                self.status = format!("Table has {} rows", rows);
            }
            Err(e) => self.report("Resize failed", e),
        }
    }

    /// Open the save prompt.
    pub fn begin_save(&mut self) {
        let initial = self
            .file_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| DEFAULT_SAVE_PATH.to_string());
        self.prompt.start(PromptKind::SavePath, initial);
    }

    /// Open the file picker for loading.
    pub fn begin_load(&mut self) {
        let dir = self.file_browser.dir.clone();
        match self.file_browser.open(dir) {
            Ok(()) => self.status = format!("Browsing: {}", self.file_browser.dir.display()),
            Err(e) => self.report("Cannot open directory", e),
        }
    }

    /// Handle Enter in the file picker.
    pub fn browser_select(&mut self) {
        match self.file_browser.select_current() {
            Ok(Some(path)) => {
                self.file_browser.close();
                self.load_file(path);
            }
            Ok(None) => self.status = format!("Browsing: {}", self.file_browser.dir.display()),
            Err(e) => self.report("Cannot open directory", e),
        }
    }

    /// List the parent directory in the file picker.
    pub fn browser_parent(&mut self) {
        match self.file_browser.go_to_parent() {
            Ok(()) => self.status = format!("Browsing: {}", self.file_browser.dir.display()),
            Err(e) => self.report("Cannot open directory", e),
        }
    }

    /// Close the file picker without loading.
    pub fn cancel_load(&mut self) {
        self.file_browser.close();
        self.status = "Ready".to_string();
    }

    /// Submit the open text prompt.
    pub fn submit_prompt(&mut self) {
        let Some((kind, text)) = self.prompt.submit() else {
            return;
        };
        match kind {
            PromptKind::EditCell { row, col } => self.edit_cell(row, col, text),
            PromptKind::ResizeRows => self.resize(&text),
            PromptKind::SavePath => {
                let path = text.trim();
                if path.is_empty() {
                    return;
                }
                self.save_file(PathBuf::from(path));
            }
        }
    }

    /// Close the text prompt without applying it.
    pub fn cancel_prompt(&mut self) {
        self.prompt.cancel();
    }

    /// Confirm the choice picker.
    pub fn confirm_choice(&mut self) {
        if let Some(((row, col), value)) = self.choice.confirm() {
            self.edit_cell(row, col, value.to_string());
        }
    }

    /// Fill non-derived columns with random integers.
    pub fn fill_random(&mut self) {
        self.grid.fill_random(&mut rand::thread_rng());
        tracing::info!("Filled grid with random values");
        self.status = "Filled with random values".to_string();
    }

    /// Re-apply every derived-column rule.
    pub fn recalculate(&mut self) {
        match self.grid.recalculate_all() {
            Ok(()) => self.status = "Recalculated".to_string(),
            Err(e) => self.report("Recalculation failed", e),
        }
    }

    /// Toggle the cursor cell in the selection and redraw the plot.
    pub fn toggle_selection(&mut self) {
        self.table.toggle_at_cursor();
        self.refresh_plot();
    }

    /// Clear the selection. The plot keeps its last series.
    pub fn clear_selection(&mut self) {
        self.table.clear_selection();
        self.status = "Selection cleared".to_string();
    }

    /// Redraw the plot from the current selection.
    pub fn refresh_plot(&mut self) {
        match self.plot.update(&self.grid, self.table.selection()) {
            Ok(true) => {
                if let Some(series) = self.plot.series() {
                    self.status = format!("Plot: {} vs {}", series.y_label(), series.x_label());
                }
            }
            Ok(false) => {
                self.status = format!("{} cell(s) selected", self.table.selection().len());
            }
            Err(e) => self.report("Plot failed", e),
        }
    }

    /// Copy the grid to the clipboard as tab-separated text.
    pub fn copy_grid(&mut self) {
        match clipboard::copy_grid(&self.grid) {
            Ok(()) => self.status = "Grid copied!".to_string(),
            Err(e) => self.status = format!("Copy failed: {}", e),
        }
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Move cursor up.
    pub fn cursor_up(&mut self) {
        self.table.cursor_up();
    }

    /// Move cursor down.
    pub fn cursor_down(&mut self) {
        self.table.cursor_down(self.grid.rows());
    }

    /// Move cursor left.
    pub fn cursor_left(&mut self) {
        self.table.cursor_left();
    }

    /// Move cursor right.
    pub fn cursor_right(&mut self) {
        self.table.cursor_right(self.grid.cols());
    }
}

/// Parse a row count typed in the resize prompt or given on the command line.
///
/// Accepts integers in `0..=MAX_ROWS`.
pub fn parse_row_count(input: &str) -> Result<usize> {
    let input = input.trim();
    match input.parse::<usize>() {
        Ok(rows) if rows <= MAX_ROWS => Ok(rows),
        _ => Err(GridplotError::InvalidRowCount(input.to_string())),
    }
}

fn display_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "file".to_string())
}
