//! Grid state and the operations the table supports.
//!
//! The grid is a rectangle of text cells. Cells are read as floats only when a
//! calculation, the plot or a save consumes them. Edits fire the recompute
//! trigger configured for their column in [`crate::column`].

pub mod recalc;

use crate::column::{self, Trigger};
use crate::error::{GridplotError, Result};
use ndarray::Array2;
use rand::Rng;

pub use recalc::{format_number, parse_cell, running_sums, sine};

/// Number of columns in a new grid.
pub const DEFAULT_COLUMNS: usize = 5;
/// Number of rows in a new grid.
pub const DEFAULT_ROWS: usize = 5;
/// Largest row count a resize or the command line accepts.
pub const MAX_ROWS: usize = 1_000_000;

/// Text value of every cell in a new grid.
const INITIAL_CELL: &str = "0";

/// Rectangular table of text cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<String>>,
    cols: usize,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLUMNS)
    }
}

impl Grid {
    /// Create a grid filled with zeros.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![vec![INITIAL_CELL.to_string(); cols]; rows],
            cols,
        }
    }

    /// Build a grid whose cells hold the array's values.
    pub fn from_array(data: &Array2<f64>) -> Self {
        let (_, cols) = data.dim();
        let cells = data
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|&v| format_number(v)).collect())
            .collect();
        Self { cells, cols }
    }

    /// Parse every cell into a `(rows, cols)` array.
    ///
    /// Fails on the first cell (row-major) that is not a number.
    pub fn to_array(&self) -> Result<Array2<f64>> {
        let mut values = Vec::with_capacity(self.rows() * self.cols);
        for row in 0..self.rows() {
            for col in 0..self.cols {
                values.push(self.value(row, col)?);
            }
        }
        Array2::from_shape_vec((self.rows(), self.cols), values)
            .map_err(|_| GridplotError::InvalidShape {
                shape: vec![self.rows(), self.cols],
            })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Header labels, one per column.
    pub fn headers(&self) -> Vec<String> {
        (0..self.cols).map(column::header).collect()
    }

    /// Text of a cell.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.cells.get(row)?.get(col).map(String::as_str)
    }

    /// Replace a cell's text without firing any trigger.
    pub fn set(&mut self, row: usize, col: usize, text: impl Into<String>) -> Result<()> {
        let cell = self
            .cells
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(GridplotError::CellOutOfRange { row, col })?;
        *cell = text.into();
        Ok(())
    }

    /// Numeric value of a cell.
    pub fn value(&self, row: usize, col: usize) -> Result<f64> {
        let text = self
            .get(row, col)
            .ok_or(GridplotError::CellOutOfRange { row, col })?;
        parse_cell(text).ok_or_else(|| GridplotError::parse(row, col, text))
    }

    /// Numeric values of a whole column, in row order.
    pub fn column_values(&self, col: usize) -> Result<Vec<f64>> {
        (0..self.rows()).map(|row| self.value(row, col)).collect()
    }

    /// Text of a whole column, in row order.
    pub fn column_text(&self, col: usize) -> impl Iterator<Item = &str> + '_ {
        self.cells
            .iter()
            .map(move |row| row.get(col).map(String::as_str).unwrap_or(""))
    }

    /// Set the row count. Retained rows keep their content, new rows are empty.
    pub fn resize(&mut self, rows: usize) {
        let cols = self.cols;
        self.cells.resize_with(rows, || vec![String::new(); cols]);
    }

    /// Fill every non-derived column with random integers in `1..=5`.
    ///
    /// Triggers are not fired.
    pub fn fill_random<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for row in self.cells.iter_mut() {
            for (col, cell) in row.iter_mut().enumerate() {
                if column::role(col).derived {
                    continue;
                }
                *cell = rng.gen_range(1..=5u8).to_string();
            }
        }
    }

    /// Set a cell's text as a user edit and fire its column's trigger.
    ///
    /// The text is stored even when the trigger then fails.
    pub fn edit(&mut self, row: usize, col: usize, text: impl Into<String>) -> Result<()> {
        self.set(row, col, text)?;
        self.fire_trigger(row, col)
    }

    /// Re-apply every trigger to every row.
    pub fn recalculate_all(&mut self) -> Result<()> {
        for col in 0..self.cols {
            match column::role(col).trigger {
                Trigger::None => {}
                Trigger::Sine { .. } => {
                    for row in 0..self.rows() {
                        self.fire_trigger(row, col)?;
                    }
                }
                Trigger::RunningSum { .. } => self.fire_trigger(0, col)?,
            }
        }
        Ok(())
    }

    /// Tab-separated text of the whole grid, headers first.
    pub fn to_tsv(&self) -> String {
        let mut out = self.headers().join("\t");
        out.push('\n');
        for row in &self.cells {
            out.push_str(&row.join("\t"));
            out.push('\n');
        }
        out
    }

    fn fire_trigger(&mut self, row: usize, col: usize) -> Result<()> {
        match column::role(col).trigger {
            Trigger::None => Ok(()),
            Trigger::Sine { target } => {
                let value = self.value(row, col)?;
                if target < self.cols {
                    self.set(row, target, format_number(sine(value)))?;
                }
                Ok(())
            }
            Trigger::RunningSum { target } => {
                if target >= self.cols {
                    return Ok(());
                }
                let sums = running_sums(self.column_text(col));
                for (i, sum) in sums.into_iter().enumerate() {
                    if let Some(sum) = sum {
                        self.set(i, target, format_number(sum))?;
                    }
                }
                Ok(())
            }
        }
    }
}
