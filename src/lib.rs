//! Gridplot - a terminal spreadsheet grid bound to a live X/Y plot.
//!
//! The grid holds text cells in five columns with fixed roles: an edit in the
//! second column writes its sine into the third, an edit in the first column
//! writes running sums into the fourth. Two selected cells pick the columns
//! for the plot. Grids are saved to and loaded from netCDF-4
//! (HDF5) files holding a single `data` array.
//!
//! # Example
//!
//! ```ignore
//! use gridplot::grid::Grid;
//! use gridplot::storage;
//! use std::path::Path;
//!
//! let mut grid = Grid::new(3, 5);
//! grid.edit(0, 0, "2")?;
//! grid.edit(1, 0, "1")?;
//! grid.edit(2, 0, "3")?;
//! assert_eq!(grid.get(2, 3), Some("6"));
//!
//! storage::save_grid(Path::new("data.nc"), &grid)?;
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod clipboard;
pub mod column;
pub mod error;
pub mod file_browser;
pub mod grid;
pub mod plot;
pub mod prompt;
pub mod storage;
pub mod table;
pub mod ui;

pub use error::{GridplotError, Result};
