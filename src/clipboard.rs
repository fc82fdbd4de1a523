//! Clipboard integration.

use crate::error::Result;
use crate::grid::Grid;
use arboard::Clipboard;

/// Copy the grid to the clipboard as tab-separated text, headers first.
pub fn copy_grid(grid: &Grid) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(grid.to_tsv())?;
    Ok(())
}
