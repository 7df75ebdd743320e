//! Anaglyph composition of left/right eye views.

use demglyph_core::{Error, Result, Rgb, RgbRaster};
use ndarray::Zip;

/// Merge the two eye views into one red/cyan anaglyph.
///
/// Channel selection is a fixed design constant: the output red
/// channel comes from the left view, green and blue from the right
/// view. This is the 3x3 selection-matrix form of the true
/// color-separation anaglyph (identity on the red row of the left
/// image, identity on the green/blue rows of the right image, zero
/// elsewhere), which per pixel reduces to a straight channel copy.
///
/// The views must have identical dimensions.
pub fn compose(left: &RgbRaster, right: &RgbRaster) -> Result<RgbRaster> {
    if left.shape() != right.shape() {
        return Err(Error::SizeMismatch {
            er: left.rows(),
            ec: left.cols(),
            ar: right.rows(),
            ac: right.cols(),
        });
    }

    let mut out = RgbRaster::new(left.rows(), left.cols())?;
    Zip::from(out.data_mut())
        .and(left.data())
        .and(right.data())
        .for_each(|pixel, l, r| {
            *pixel = Rgb::new(l.r, r.g, r.b);
        });

    Ok(out)
}
