//! Colorization of an elevation model.

use crate::palette::ElevationPalette;
use demglyph_core::{Error, Raster, Result, RgbRaster};

/// Minimum and maximum elevation observed while colorizing.
///
/// Advisory output; later stages do not consume it, but it must match
/// the true extremes of the input grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElevationRange {
    pub min: f64,
    pub max: f64,
}

/// Apply `palette` to every cell of `dem`, producing the colorized
/// raster and the observed elevation range.
///
/// Cells are visited in row-major order; `on_row` is invoked after
/// each completed row for progress reporting. A non-finite elevation
/// aborts the run with the offending cell coordinates.
pub fn colorize(
    dem: &Raster<f64>,
    palette: &ElevationPalette,
    mut on_row: impl FnMut(usize),
) -> Result<(RgbRaster, ElevationRange)> {
    let (rows, cols) = dem.shape();
    let mut out = RgbRaster::new(rows, cols)?;

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    let data = dem.data();
    for row in 0..rows {
        for col in 0..cols {
            let elevation = data[[row, col]];
            if !elevation.is_finite() {
                return Err(Error::NonFiniteElevation { row, col });
            }
            if elevation < min {
                min = elevation;
            }
            if elevation > max {
                max = elevation;
            }
            out.data_mut()[[row, col]] = palette.classify(elevation);
        }
        on_row(row);
    }

    Ok((out, ElevationRange { min, max }))
}
