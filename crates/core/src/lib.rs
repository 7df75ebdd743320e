//! # DemGlyph Core
//!
//! Core types and I/O for the DemGlyph anaglyph pipeline.
//!
//! This crate provides:
//! - `Raster<T>`: generic scalar raster grid (the elevation model)
//! - `Rgb` / `RgbRaster`: 8-bit RGB image rasters
//! - I/O for elevation inputs and image outputs
//! - The shared error taxonomy

pub mod error;
pub mod io;
pub mod raster;

pub use error::{Error, Result};
pub use raster::{Raster, RasterElement, Rgb, RgbRaster};
