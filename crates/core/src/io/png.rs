//! Image raster writing
//!
//! Encodes an `RgbRaster` to an image file. The encoded bytes go to a
//! sibling temp file first and are renamed into place, so an
//! interrupted run never leaves a partially written artifact.

use crate::error::{Error, Result};
use crate::raster::RgbRaster;
use image::{ImageFormat, RgbImage};
use std::path::Path;
use tracing::debug;

/// Write an RGB raster to `path`.
///
/// The format is chosen from the destination extension, defaulting to
/// PNG when the extension is missing or unknown.
pub fn write_image<P: AsRef<Path>>(raster: &RgbRaster, path: P) -> Result<()> {
    let path = path.as_ref();
    let (rows, cols) = raster.shape();

    let buf = RgbImage::from_raw(cols as u32, rows as u32, raster.to_bytes()).ok_or_else(|| {
        Error::Other(format!("cannot build {}x{} image buffer", cols, rows))
    })?;

    let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Png);

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = Path::new(&tmp);

    if let Err(e) = buf.save_with_format(tmp, format) {
        let _ = std::fs::remove_file(tmp);
        return Err(e.into());
    }
    std::fs::rename(tmp, path)?;
    debug!("Wrote {} ({}x{})", path.display(), cols, rows);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::read_dem;
    use crate::raster::Rgb;

    #[test]
    fn writes_png_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");

        let mut img = RgbRaster::new(2, 3).unwrap();
        img.set(0, 0, Rgb::new(255, 0, 0)).unwrap();
        img.set(1, 2, Rgb::new(0, 255, 0)).unwrap();

        write_image(&img, &path).unwrap();
        assert!(path.exists());
        assert!(!dir.path().join("out.png.tmp").exists());

        let reloaded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(reloaded.dimensions(), (3, 2));
        assert_eq!(reloaded.get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(reloaded.get_pixel(2, 1).0, [0, 255, 0]);
        assert_eq!(reloaded.get_pixel(1, 0).0, [0, 0, 0]);
    }

    #[test]
    fn written_gray_content_survives_dem_reload() {
        // A gray RGB image reloads through the DEM reader's grayscale
        // conversion without value changes.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");

        let mut img = RgbRaster::new(1, 2).unwrap();
        img.set(0, 0, Rgb::new(10, 10, 10)).unwrap();
        img.set(0, 1, Rgb::new(200, 200, 200)).unwrap();
        write_image(&img, &path).unwrap();

        let dem = read_dem(&path).unwrap();
        assert_eq!(dem.shape(), (1, 2));
    }
}
