//! RGB pixel and image raster types

use crate::error::{Error, Result};
use ndarray::Array2;

/// RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Background fill for unwritten pixels.
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
}

/// A W×H image of RGB triples.
///
/// Written by exactly one producing pipeline stage, read-only
/// afterwards. Freshly created rasters are filled with
/// [`Rgb::BLACK`], which is the documented background for pixels the
/// stereo splitter never writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbRaster {
    data: Array2<Rgb>,
}

impl RgbRaster {
    /// Create a new black-filled image.
    ///
    /// Fails when either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimensions {
                width: cols,
                height: rows,
            });
        }
        Ok(Self {
            data: Array2::from_elem((rows, cols), Rgb::BLACK),
        })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Get pixel at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<Rgb> {
        self.data
            .get((row, col))
            .copied()
            .ok_or(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            })
    }

    /// Set pixel at (row, col)
    pub fn set(&mut self, row: usize, col: usize, pixel: Rgb) -> Result<()> {
        if row >= self.rows() || col >= self.cols() {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        self.data[(row, col)] = pixel;
        Ok(())
    }

    /// Get a reference to the underlying array
    pub fn data(&self) -> &Array2<Rgb> {
        &self.data
    }

    /// Get a mutable reference to the underlying array
    pub fn data_mut(&mut self) -> &mut Array2<Rgb> {
        &mut self.data
    }

    /// Flatten into an interleaved RGB byte buffer (row-major,
    /// `rows * cols * 3` bytes), suitable for image encoding.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 3);
        for pixel in self.data.iter() {
            bytes.push(pixel.r);
            bytes.push(pixel.g);
            bytes.push(pixel.b);
        }
        bytes
    }
}
