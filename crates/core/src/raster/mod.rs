//! Raster grid and image types

mod element;
mod grid;
mod rgb;

pub use element::RasterElement;
pub use grid::Raster;
pub use rgb::{Rgb, RgbRaster};
