//! Pipeline sequencing: colorize -> split -> compose.

use crate::anaglyph::compose;
use crate::colorize::{colorize, ElevationRange};
use crate::palette::ElevationPalette;
use crate::stereo::{split, StereoParams};
use demglyph_core::{Raster, Result, RgbRaster};

/// Everything the pipeline produces for one DEM.
///
/// The intermediates are returned alongside the composite so the
/// caller can persist them when asked to keep all artifacts.
#[derive(Debug, Clone)]
pub struct AnaglyphOutput {
    pub composite: RgbRaster,
    pub colorized: RgbRaster,
    pub left: RgbRaster,
    pub right: RgbRaster,
    pub range: ElevationRange,
}

/// Run the full pipeline on a DEM.
///
/// Validates the parameters, then runs the three stages in order.
/// Deterministic: the same DEM, palette and parameters always produce
/// identical rasters.
pub fn render_anaglyph(
    dem: &Raster<f64>,
    palette: &ElevationPalette,
    params: &StereoParams,
) -> Result<AnaglyphOutput> {
    params.validate()?;

    let (colorized, range) = colorize(dem, palette, |_| {})?;
    let (left, right) = split(&colorized, dem, params, |_| {})?;
    let composite = compose(&left, &right)?;

    Ok(AnaglyphOutput {
        composite,
        colorized,
        left,
        right,
        range,
    })
}
