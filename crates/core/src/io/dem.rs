//! Elevation model reading
//!
//! Decodes a single-channel raster file into a `Raster<f64>` of
//! elevation values via the `image` crate. The pixel values are taken
//! verbatim as elevations in the input's native numeric range; inputs
//! that need georeferencing metadata are out of scope.

use crate::error::{Error, Result};
use crate::raster::Raster;
use image::DynamicImage;
use std::path::Path;
use tracing::{debug, warn};

/// Read an elevation raster from a file.
///
/// 8-bit and 16-bit grayscale images are decoded natively. Any other
/// pixel layout is converted to 16-bit grayscale first, with a
/// warning, since a multi-channel input is usually not a real DEM.
pub fn read_dem<P: AsRef<Path>>(path: P) -> Result<Raster<f64>> {
    let path = path.as_ref();
    let img = image::open(path)?;
    debug!("Decoded {} ({}x{})", path.display(), img.width(), img.height());
    decode_dem(img)
}

fn decode_dem(img: DynamicImage) -> Result<Raster<f64>> {
    let rows = img.height() as usize;
    let cols = img.width() as usize;

    let data: Vec<f64> = match img {
        DynamicImage::ImageLuma8(buf) => {
            buf.into_raw().into_iter().map(f64::from).collect()
        }
        DynamicImage::ImageLuma16(buf) => {
            buf.into_raw().into_iter().map(f64::from).collect()
        }
        other => {
            warn!("Input is not single-channel; converting to 16-bit grayscale");
            other.to_luma16().into_raw().into_iter().map(f64::from).collect()
        }
    };

    if data.len() != rows * cols {
        return Err(Error::UnsupportedFormat(format!(
            "decoded {} samples for a {}x{} raster",
            data.len(),
            cols,
            rows
        )));
    }

    Raster::from_vec(data, rows, cols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, ImageBuffer, Luma};

    #[test]
    fn reads_luma16_values_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dem.png");

        let buf: ImageBuffer<Luma<u16>, Vec<u16>> =
            ImageBuffer::from_fn(2, 2, |x, y| Luma([(y * 2 + x) as u16 * 1000]));
        buf.save(&path).unwrap();

        let dem = read_dem(&path).unwrap();
        assert_eq!(dem.shape(), (2, 2));
        assert_eq!(dem.get(0, 0).unwrap(), 0.0);
        assert_eq!(dem.get(0, 1).unwrap(), 1000.0);
        assert_eq!(dem.get(1, 1).unwrap(), 3000.0);
    }

    #[test]
    fn reads_luma8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dem8.png");

        let buf = GrayImage::from_fn(3, 1, |x, _| Luma([x as u8 * 100]));
        buf.save(&path).unwrap();

        let dem = read_dem(&path).unwrap();
        assert_eq!(dem.shape(), (1, 3));
        assert_eq!(dem.get(0, 2).unwrap(), 200.0);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_dem("/nonexistent/dem.png").is_err());
    }
}
