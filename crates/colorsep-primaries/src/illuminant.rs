//! Standard illuminant white points.
//!
//! CIE 1931 2° chromaticities for the illuminants offered as white point
//! presets. Any profile's white point can be swapped for one of these with
//! [`ColorProfile::with_illuminant`](crate::ColorProfile::with_illuminant).

use crate::{Chromaticity, PrimariesError};
use std::fmt;
use std::str::FromStr;

/// A named standard illuminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Illuminant {
    /// Incandescent / tungsten, ~2856K.
    A,
    /// Direct noon sunlight (obsolete), ~4874K.
    B,
    /// Average daylight (obsolete), ~6774K.
    C,
    /// Horizon light, ~5003K. ICC profile connection space.
    D50,
    /// Mid-morning / mid-afternoon daylight, ~5503K.
    D55,
    /// Noon daylight, ~6504K. Television and sRGB.
    D65,
    /// North sky daylight, ~7504K.
    D75,
    /// 9300K display white.
    K9300,
    /// Equal energy.
    E,
    /// Cool white fluorescent.
    F2,
    /// D65 simulator fluorescent.
    F7,
    /// Philips TL84 narrow-band fluorescent.
    F11,
}

impl Illuminant {
    /// All presets, in display order.
    pub const ALL: [Illuminant; 12] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D50,
        Self::D55,
        Self::D65,
        Self::D75,
        Self::K9300,
        Self::E,
        Self::F2,
        Self::F7,
        Self::F11,
    ];

    /// White point chromaticity.
    pub const fn chromaticity(self) -> Chromaticity {
        match self {
            Self::A => Chromaticity::new(0.44757, 0.40744),
            Self::B => Chromaticity::new(0.34840, 0.35160),
            Self::C => Chromaticity::new(0.31006, 0.31615),
            Self::D50 => Chromaticity::new(0.34567, 0.35850),
            Self::D55 => Chromaticity::new(0.33242, 0.34743),
            Self::D65 => Chromaticity::new(0.31273, 0.32902),
            Self::D75 => Chromaticity::new(0.29902, 0.31485),
            Self::K9300 => Chromaticity::new(0.2848, 0.2932),
            Self::E => Chromaticity::new(0.33333, 0.33333),
            Self::F2 => Chromaticity::new(0.37207, 0.37512),
            Self::F7 => Chromaticity::new(0.31285, 0.32918),
            Self::F11 => Chromaticity::new(0.38054, 0.37692),
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D50 => "D50",
            Self::D55 => "D55",
            Self::D65 => "D65",
            Self::D75 => "D75",
            Self::K9300 => "9300K",
            Self::E => "E",
            Self::F2 => "F2",
            Self::F7 => "F7",
            Self::F11 => "F11",
        }
    }
}

impl fmt::Display for Illuminant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Illuminant {
    type Err = PrimariesError;

    /// Case-insensitive match against [`Illuminant::name`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|i| i.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PrimariesError::UnknownIlluminant {
                name: s.to_string(),
            })
    }
}
