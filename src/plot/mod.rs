//! Plot state.
//!
//! The plot shows one line series built from two grid columns. The columns
//! come from the first two selected cells; every row of those columns is
//! plotted, in row order.

pub mod ui;

use crate::column;
use crate::error::Result;
use crate::grid::Grid;
use crate::table::CellPos;

/// Fraction of the data range added on each side of an axis.
const AXIS_PADDING: f64 = 0.1;

/// One X/Y line series.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    /// Column providing X values.
    pub x_col: usize,
    /// Column providing Y values.
    pub y_col: usize,
    /// Points in row order.
    pub points: Vec<(f64, f64)>,
}

impl PlotSeries {
    /// Build a series from two grid columns.
    pub fn from_columns(grid: &Grid, x_col: usize, y_col: usize) -> Result<Self> {
        let xs = grid.column_values(x_col)?;
        let ys = grid.column_values(y_col)?;
        Ok(Self {
            x_col,
            y_col,
            points: xs.into_iter().zip(ys).collect(),
        })
    }

    /// X axis label.
    pub fn x_label(&self) -> String {
        column::header(self.x_col)
    }

    /// Y axis label.
    pub fn y_label(&self) -> String {
        column::header(self.y_col)
    }

    /// Padded `([x_min, x_max], [y_min, y_max])` over the finite points.
    pub fn bounds(&self) -> Option<([f64; 2], [f64; 2])> {
        let finite = self
            .points
            .iter()
            .filter(|(x, y)| x.is_finite() && y.is_finite());
        let (mut x_min, mut x_max, mut y_min, mut y_max) = (
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
        );
        let mut any = false;
        for &(x, y) in finite {
            any = true;
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
        if !any {
            return None;
        }
        Some((pad(x_min, x_max), pad(y_min, y_max)))
    }
}

fn pad(min: f64, max: f64) -> [f64; 2] {
    let span = max - min;
    if span == 0.0 {
        // Degenerate range: widen to a unit window around the value.
        return [min - 0.5, max + 0.5];
    }
    [min - span * AXIS_PADDING, max + span * AXIS_PADDING]
}

/// Plot state.
#[derive(Debug, Default)]
pub struct PlotState {
    series: Option<PlotSeries>,
}

impl PlotState {
    /// Create a new, empty plot state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently displayed series.
    pub fn series(&self) -> Option<&PlotSeries> {
        self.series.as_ref()
    }

    /// Redraw from the current selection.
    ///
    /// Returns `Ok(false)` without touching the plot when fewer than two cells
    /// are selected. On a parse error the previous series is kept.
    pub fn update(&mut self, grid: &Grid, selection: &[CellPos]) -> Result<bool> {
        let [(_, x_col), (_, y_col), ..] = *selection else {
            return Ok(false);
        };
        let series = PlotSeries::from_columns(grid, x_col, y_col)?;
        tracing::debug!(
            "Plotting column {} against column {} ({} points)",
            y_col,
            x_col,
            series.points.len()
        );
        self.series = Some(series);
        Ok(true)
    }
}
