//! Error types for DemGlyph

use thiserror::Error;

/// Main error type for DemGlyph operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid raster dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Index out of bounds: ({row}, {col}) in raster of size ({rows}, {cols})")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Raster size mismatch: expected ({er}, {ec}), got ({ar}, {ac})")]
    SizeMismatch {
        er: usize,
        ec: usize,
        ar: usize,
        ac: usize,
    },

    #[error("Unsupported raster format: {0}")]
    UnsupportedFormat(String),

    #[error("Non-finite elevation at ({row}, {col})")]
    NonFiniteElevation { row: usize, col: usize },

    #[error(
        "Elevation {elevation} at ({row}, {col}) equals the observer altitude; parallax is undefined"
    )]
    ObserverOnTerrain {
        row: usize,
        col: usize,
        elevation: f64,
    },

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

/// Result type alias for DemGlyph operations
pub type Result<T> = std::result::Result<T, Error>;
