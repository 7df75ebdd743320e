//! Stereo splitting: parallax displacement into left/right eye views.

use demglyph_core::{Error, Raster, Result, RgbRaster};

/// Parameters for the stereo projection.
#[derive(Debug, Clone)]
pub struct StereoParams {
    /// Observer altitude, in the same unit as the elevation values.
    pub observer_alt: f64,
    /// Reference plane altitude with zero parallax.
    pub map_plane_alt: f64,
    /// Pixel-space spacing between the two eyes.
    pub eye_spacing: f64,
    /// Fraction of the total parallax assigned to the left eye, in [0, 1].
    pub nadir: f64,
}

impl Default for StereoParams {
    fn default() -> Self {
        Self {
            observer_alt: 4000.0,
            map_plane_alt: 0.0,
            eye_spacing: 750.0,
            nadir: 0.5,
        }
    }
}

impl StereoParams {
    /// Validate the parameter set once at the boundary.
    pub fn validate(&self) -> Result<()> {
        if !self.observer_alt.is_finite() {
            return Err(Error::InvalidParameter {
                name: "observer-alt",
                value: self.observer_alt.to_string(),
                reason: "must be finite".to_string(),
            });
        }
        if !self.map_plane_alt.is_finite() {
            return Err(Error::InvalidParameter {
                name: "map-plane-alt",
                value: self.map_plane_alt.to_string(),
                reason: "must be finite".to_string(),
            });
        }
        if !self.eye_spacing.is_finite() || self.eye_spacing < 0.0 {
            return Err(Error::InvalidParameter {
                name: "eye-spacing",
                value: self.eye_spacing.to_string(),
                reason: "must be non-negative".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.nadir) {
            return Err(Error::InvalidParameter {
                name: "nadir",
                value: self.nadir.to_string(),
                reason: "must be within [0, 1]".to_string(),
            });
        }
        Ok(())
    }
}

/// Scatter the colorized raster into left-eye and right-eye rasters.
///
/// Water cells (elevation <= 0) are copied unshifted into both eyes.
/// For land, the displacement is
/// `k * eye_spacing * (e - map_plane_alt) / (observer_alt - e)`
/// with `k = nadir` for the left eye (shifting -x) and `k = 1 - nadir`
/// for the right eye (shifting +x); the result is floored and the
/// destination column clamped to the raster.
///
/// Cells are scattered in row-major scan order and several source
/// columns may land on the same destination column: the last write
/// wins within a row. Destination columns that no source maps to keep
/// the black background fill. Both effects are the accepted lossy
/// policy of this projection, not defects.
///
/// A cell whose elevation equals the observer altitude has no defined
/// parallax and aborts the run with its coordinates.
pub fn split(
    colorized: &RgbRaster,
    dem: &Raster<f64>,
    params: &StereoParams,
    mut on_row: impl FnMut(usize),
) -> Result<(RgbRaster, RgbRaster)> {
    let (rows, cols) = dem.shape();
    if colorized.shape() != (rows, cols) {
        return Err(Error::SizeMismatch {
            er: rows,
            ec: cols,
            ar: colorized.rows(),
            ac: colorized.cols(),
        });
    }

    let mut left = RgbRaster::new(rows, cols)?;
    let mut right = RgbRaster::new(rows, cols)?;
    let max_col = (cols - 1) as i64;

    let elevations = dem.data();
    for row in 0..rows {
        for col in 0..cols {
            let elevation = elevations[[row, col]];
            if !elevation.is_finite() {
                return Err(Error::NonFiniteElevation { row, col });
            }
            let pixel = colorized.data()[[row, col]];

            if elevation <= 0.0 {
                left.data_mut()[[row, col]] = pixel;
                right.data_mut()[[row, col]] = pixel;
                continue;
            }

            let denom = params.observer_alt - elevation;
            if denom == 0.0 {
                return Err(Error::ObserverOnTerrain {
                    row,
                    col,
                    elevation,
                });
            }

            let shift = params.eye_spacing * (elevation - params.map_plane_alt) / denom;
            let left_dx = (params.nadir * shift).floor() as i64;
            let right_dx = ((1.0 - params.nadir) * shift).floor() as i64;

            let left_col = (col as i64 - left_dx).clamp(0, max_col) as usize;
            let right_col = (col as i64 + right_dx).clamp(0, max_col) as usize;

            left.data_mut()[[row, left_col]] = pixel;
            right.data_mut()[[row, right_col]] = pixel;
        }
        on_row(row);
    }

    Ok((left, right))
}
