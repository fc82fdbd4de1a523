//! Error types for Gridplot.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Gridplot operations.
pub type Result<T> = std::result::Result<T, GridplotError>;

/// Errors that can occur in Gridplot.
#[derive(Debug, Error)]
pub enum GridplotError {
    /// A cell was consumed as a number but its text is not one.
    #[error("Cell ({row}, {col}) is not a number: '{text}'")]
    Parse {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
        /// Offending cell text.
        text: String,
    },

    /// A cell coordinate lies outside the grid.
    #[error("Cell ({row}, {col}) is outside the grid")]
    CellOutOfRange {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
    },

    /// Row count is not an integer in `0..=MAX_ROWS`.
    #[error("Invalid row count: '{0}'")]
    InvalidRowCount(String),

    /// Failed to read or write a NetCDF file.
    #[error("NetCDF error: {0}")]
    NetCDF(String),

    /// The file holds no array under the expected name.
    #[error("No '{name}' array in {}", .path.display())]
    MissingDataset {
        /// Expected variable name.
        name: String,
        /// File that was searched.
        path: PathBuf,
    },

    /// The stored array is not two-dimensional.
    #[error("Expected a 2-D array, found shape {shape:?}")]
    InvalidShape {
        /// Shape found in the file.
        shape: Vec<usize>,
    },

    /// The stored array holds values that cannot be read as numbers.
    #[error("Unsupported element type: {0}")]
    UnsupportedType(String),

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GridplotError {
    /// Create a Parse error.
    pub fn parse(row: usize, col: usize, text: impl Into<String>) -> Self {
        Self::Parse {
            row,
            col,
            text: text.into(),
        }
    }

    /// Create a MissingDataset error.
    pub fn missing_dataset(name: impl Into<String>, path: PathBuf) -> Self {
        Self::MissingDataset {
            name: name.into(),
            path,
        }
    }
}

impl From<netcdf::Error> for GridplotError {
    fn from(err: netcdf::Error) -> Self {
        Self::NetCDF(err.to_string())
    }
}
