//! Raster element trait for generic cell values

use num_traits::{NumCast, Zero};
use std::fmt::Debug;

/// Trait for scalar types that can be stored in a raster cell.
///
/// Bounds the types usable as elevation values, ensuring they support
/// the numeric conversions the decoder and pipeline need.
pub trait RasterElement:
    Copy + Clone + Debug + PartialOrd + PartialEq + NumCast + Zero + Send + Sync + 'static
{
    /// Convert self to f64
    fn to_f64(self) -> Option<f64> {
        NumCast::from(self)
    }
}

impl RasterElement for i8 {}
impl RasterElement for i16 {}
impl RasterElement for i32 {}
impl RasterElement for i64 {}
impl RasterElement for u8 {}
impl RasterElement for u16 {}
impl RasterElement for u32 {}
impl RasterElement for u64 {}
impl RasterElement for f32 {}
impl RasterElement for f64 {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_to_f64() {
        assert_eq!(42u16.to_f64(), Some(42.0));
        assert_eq!((-3i32).to_f64(), Some(-3.0));
        assert_eq!(1.5f32.to_f64(), Some(1.5));
    }
}
