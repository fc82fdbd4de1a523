//! Grid persistence.
//!
//! A grid is stored as one two-dimensional float64 variable named
//! [`DATASET_NAME`] in a netCDF-4 file, which is an HDF5 container. Loading
//! accepts any numeric element type and adopts the stored column count.

mod reader;
mod writer;

pub use reader::{load_grid, read_array};
pub use writer::{save_grid, write_array};

/// Name of the stored array.
pub const DATASET_NAME: &str = "data";
/// Dimension name for grid rows.
pub const ROW_DIM: &str = "rows";
/// Dimension name for grid columns.
pub const COL_DIM: &str = "cols";

/// File extensions offered by the file picker.
pub const EXTENSIONS: [&str; 4] = ["nc", "nc4", "h5", "hdf5"];

/// Check whether a path has one of the known array-file extensions.
pub fn is_array_file(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| EXTENSIONS.iter().any(|known| known.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}
