//! NetCDF array writer.

use super::{COL_DIM, DATASET_NAME, ROW_DIM};
use crate::error::Result;
use crate::grid::Grid;
use ndarray::Array2;
use std::path::Path;

/// Save a grid, overwriting any file at `path`.
///
/// Every cell is parsed first, so a non-numeric cell leaves the file untouched.
pub fn save_grid(path: &Path, grid: &Grid) -> Result<()> {
    let data = grid.to_array()?;
    write_array(path, &data)?;
    tracing::info!(
        "Saved {}x{} grid to {}",
        grid.rows(),
        grid.cols(),
        path.display()
    );
    Ok(())
}

/// Write a 2-D array as the grid variable of a new file.
pub fn write_array(path: &Path, data: &Array2<f64>) -> Result<()> {
    let (rows, cols) = data.dim();
    let mut file = netcdf::create(path)?;

    file.add_dimension(ROW_DIM, rows)?;
    file.add_dimension(COL_DIM, cols)?;

    let mut var = file.add_variable::<f64>(DATASET_NAME, &[ROW_DIM, COL_DIM])?;

    // Zero-length dimensions are unlimited in netCDF; nothing to write there.
    if rows > 0 && cols > 0 {
        let values: Vec<f64> = data.iter().copied().collect();
        var.put_values(values.as_slice(), ..)?;
    }

    Ok(())
}
