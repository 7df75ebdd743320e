//! Elevation color palette and classification.
//!
//! Maps a scalar elevation to an RGB color through an ordered sequence
//! of bands. Each band covers elevations up to its breakpoint and is
//! either a flat color or a linear blend between two endpoint colors;
//! elevations above the last breakpoint get a fallback color.

use demglyph_core::{Error, Result, Rgb};

/// How a band maps elevations to color.
#[derive(Debug, Clone, Copy)]
pub enum BandKind {
    /// The whole band gets one color.
    Flat(Rgb),
    /// Linear blend from the first color at the band's lower
    /// breakpoint to the second at its upper breakpoint.
    Blend(Rgb, Rgb),
}

/// A palette band: all elevations `lower < e <= upper` where `lower`
/// is the previous band's breakpoint (negative infinity for the first
/// band).
#[derive(Debug, Clone, Copy)]
pub struct PaletteBand {
    pub upper: f64,
    pub kind: BandKind,
}

impl PaletteBand {
    pub const fn flat(upper: f64, color: Rgb) -> Self {
        Self {
            upper,
            kind: BandKind::Flat(color),
        }
    }

    pub const fn blend(upper: f64, from: Rgb, to: Rgb) -> Self {
        Self {
            upper,
            kind: BandKind::Blend(from, to),
        }
    }
}

/// An immutable elevation-to-color palette.
///
/// Breakpoints are validated to be finite and strictly increasing at
/// construction. The first band must be flat, since it has no lower
/// breakpoint to blend from.
#[derive(Debug, Clone)]
pub struct ElevationPalette {
    bands: Vec<PaletteBand>,
    above: Rgb,
}

impl ElevationPalette {
    /// Build a palette from bands and a fallback color for elevations
    /// above the last breakpoint.
    pub fn new(bands: Vec<PaletteBand>, above: Rgb) -> Result<Self> {
        if bands.is_empty() {
            return Err(Error::InvalidParameter {
                name: "palette",
                value: "[]".to_string(),
                reason: "at least one band is required".to_string(),
            });
        }
        if matches!(bands[0].kind, BandKind::Blend(..)) {
            return Err(Error::InvalidParameter {
                name: "palette",
                value: format!("{:?}", bands[0]),
                reason: "first band has no lower breakpoint and must be flat".to_string(),
            });
        }
        let mut prev = f64::NEG_INFINITY;
        for band in &bands {
            if !band.upper.is_finite() || band.upper <= prev {
                return Err(Error::InvalidParameter {
                    name: "palette",
                    value: band.upper.to_string(),
                    reason: "breakpoints must be finite and strictly increasing".to_string(),
                });
            }
            prev = band.upper;
        }
        Ok(Self { bands, above })
    }

    /// Map an elevation to its color. First matching band wins.
    pub fn classify(&self, elevation: f64) -> Rgb {
        let mut lower = f64::NEG_INFINITY;
        for band in &self.bands {
            if elevation <= band.upper {
                return match band.kind {
                    BandKind::Flat(color) => color,
                    BandKind::Blend(from, to) => {
                        let t = (elevation - lower) / (band.upper - lower);
                        blend(from, to, t)
                    }
                };
            }
            lower = band.upper;
        }
        self.above
    }
}

impl Default for ElevationPalette {
    /// The standard terrain palette: water, lowland, then green
    /// through brown gradients up to snow above 2500.
    fn default() -> Self {
        Self::new(
            vec![
                PaletteBand::flat(0.0, Rgb::new(21, 172, 191)),
                PaletteBand::flat(200.0, Rgb::new(81, 201, 38)),
                PaletteBand::blend(500.0, Rgb::new(81, 201, 38), Rgb::new(160, 242, 130)),
                PaletteBand::blend(1000.0, Rgb::new(160, 242, 130), Rgb::new(237, 243, 100)),
                PaletteBand::blend(1500.0, Rgb::new(237, 243, 100), Rgb::new(240, 173, 25)),
                PaletteBand::blend(2000.0, Rgb::new(240, 173, 25), Rgb::new(203, 179, 130)),
                PaletteBand::blend(2500.0, Rgb::new(203, 179, 130), Rgb::new(149, 119, 35)),
            ],
            Rgb::new(255, 255, 255),
        )
        .expect("default palette is valid")
    }
}

/// Per-channel linear blend, truncated toward zero to keep the
/// integer-division semantics of the palette table. The clamp cannot
/// trigger for t in [0, 1] but is kept as a guard.
fn blend(from: Rgb, to: Rgb, t: f64) -> Rgb {
    let channel = |a: u8, b: u8| -> u8 {
        (f64::from(a) + (f64::from(b) - f64::from(a)) * t).clamp(0.0, 255.0) as u8
    };
    Rgb::new(
        channel(from.r, to.r),
        channel(from.g, to.g),
        channel(from.b, to.b),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn water_is_flat_at_and_below_zero() {
        let palette = ElevationPalette::default();
        for e in [-1000.0, -5.0, -0.0001, 0.0] {
            assert_eq!(palette.classify(e), Rgb::new(21, 172, 191));
        }
    }

    #[test]
    fn lowland_is_flat() {
        let palette = ElevationPalette::default();
        assert_eq!(palette.classify(0.1), Rgb::new(81, 201, 38));
        assert_eq!(palette.classify(200.0), Rgb::new(81, 201, 38));
    }

    #[test]
    fn snow_above_last_breakpoint() {
        let palette = ElevationPalette::default();
        assert_eq!(palette.classify(2500.1), Rgb::new(255, 255, 255));
        assert_eq!(palette.classify(9000.0), Rgb::new(255, 255, 255));
    }

    #[test]
    fn continuous_at_blend_breakpoints() {
        // Each blend reaches its upper endpoint exactly at the
        // breakpoint, and the next band starts at that same color.
        let palette = ElevationPalette::default();
        assert_eq!(palette.classify(500.0), Rgb::new(160, 242, 130));
        assert_eq!(palette.classify(1000.0), Rgb::new(237, 243, 100));
        assert_eq!(palette.classify(1500.0), Rgb::new(240, 173, 25));
        assert_eq!(palette.classify(2000.0), Rgb::new(203, 179, 130));
        assert_eq!(palette.classify(2500.0), Rgb::new(149, 119, 35));
    }

    #[test]
    fn blend_start_matches_lower_band() {
        // Just above 200 the blend is still at its t=0 endpoint after
        // truncation, so there is no visible seam with the lowland.
        let palette = ElevationPalette::default();
        assert_eq!(palette.classify(200.0001), Rgb::new(81, 201, 38));
    }

    #[test]
    fn blend_truncates_toward_zero() {
        // t = 0.2 in the 500..1000 band: 160 + 77*0.2 = 175.4 -> 175,
        // 242 + 1*0.2 = 242.2 -> 242, 130 - 30*0.2 = 124.
        let palette = ElevationPalette::default();
        assert_eq!(palette.classify(600.0), Rgb::new(175, 242, 124));
    }

    #[test]
    fn blend_band_is_monotonic_and_bounded() {
        let palette = ElevationPalette::default();
        let lo = Rgb::new(81, 201, 38);
        let hi = Rgb::new(160, 242, 130);

        let mut prev = palette.classify(200.0001);
        for i in 1..=100 {
            let e = 200.0 + 3.0 * f64::from(i);
            let c = palette.classify(e);
            for (ch, lo_ch, hi_ch, prev_ch) in [
                (c.r, lo.r, hi.r, prev.r),
                (c.g, lo.g, hi.g, prev.g),
                (c.b, lo.b, hi.b, prev.b),
            ] {
                assert!(ch >= lo_ch.min(hi_ch) && ch <= lo_ch.max(hi_ch));
                assert!(ch >= prev_ch, "channel not monotonic at e={}", e);
            }
            prev = c;
        }
    }

    #[test]
    fn rejects_unordered_breakpoints() {
        let bands = vec![
            PaletteBand::flat(100.0, Rgb::BLACK),
            PaletteBand::flat(100.0, Rgb::BLACK),
        ];
        assert!(ElevationPalette::new(bands, Rgb::BLACK).is_err());
    }

    #[test]
    fn rejects_leading_blend_band() {
        let bands = vec![PaletteBand::blend(0.0, Rgb::BLACK, Rgb::BLACK)];
        assert!(ElevationPalette::new(bands, Rgb::BLACK).is_err());
    }

    #[test]
    fn rejects_empty_palette() {
        assert!(ElevationPalette::new(vec![], Rgb::BLACK).is_err());
    }
}
