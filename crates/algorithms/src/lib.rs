//! # DemGlyph Algorithms
//!
//! The anaglyph rendering pipeline for DemGlyph.
//!
//! ## Stages
//!
//! - **palette**: elevation-to-color classification
//! - **colorize**: apply the palette across a DEM
//! - **stereo**: parallax displacement into left/right eye views
//! - **anaglyph**: channel-wise recombination into one image
//! - **pipeline**: stage sequencing and parameters
//!
//! Data flows strictly forward: DEM -> colorized raster -> (left,
//! right) rasters -> composite. Every stage is a pure function; no
//! stage mutates its inputs.

pub mod anaglyph;
pub mod colorize;
pub mod palette;
pub mod pipeline;
pub mod stereo;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::anaglyph::compose;
    pub use crate::colorize::{colorize, ElevationRange};
    pub use crate::palette::ElevationPalette;
    pub use crate::pipeline::{render_anaglyph, AnaglyphOutput};
    pub use crate::stereo::{split, StereoParams};
    pub use demglyph_core::{Raster, Rgb, RgbRaster};
}
