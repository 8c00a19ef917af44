//! # colorsep-separate
//!
//! Colorimetric separation: decomposes one RGB color into the three channels
//! of another color model, each rendered back to RGB for display.
//!
//! | Model | Channels | Rendering |
//! |-------|----------|-----------|
//! | RGB | R, G, B | black -> primary |
//! | HSV | H, S, V | grayscale |
//! | YCbCr | Y, Cb, Cr | gray, chartreuse -> violet, spring green -> rose |
//! | Lab | L, a, b | gray, spring green -> rose, azure -> orange |
//!
//! The Lab model is parameterized by any RGB space's primaries, white point
//! and gamma. Its RGB->XYZ matrix is derived once at construction.
//!
//! # Quick Start
//!
//! ```rust
//! use colorsep_core::Color;
//! use colorsep_primaries::SRGB;
//! use colorsep_separate::{LabParams, Separation};
//!
//! let lab = Separation::lab(&LabParams::from(&SRGB)).unwrap();
//! let [l, a, b] = lab.separate(Color::new(0.9, 0.4, 0.1));
//!
//! let [y, cb, cr] = Separation::YCbCr.separate(Color::gray(0.5));
//! assert!((cb.red() - 0.5 * (127.0 / 255.0 + 127.0 / 255.0)).abs() < 1e-3);
//! ```
//!
//! # Numeric Policy
//!
//! Per-pixel transforms are total. NaN and out-of-range values propagate
//! without clamping; only [`Color::to_packed`] clamps. Black has no hue in
//! HSV and yields a NaN hue swatch.
//!
//! # Concurrency
//!
//! A [`Separation`] is immutable after construction and `Send + Sync`.
//! [`buffer`] runs whole images across the Rayon pool.
//!
//! # Dependencies
//!
//! - `colorsep-core` - [`Color`]
//! - `colorsep-math` - Matrix application
//! - `colorsep-primaries` - RGB->XYZ derivation, presets
//! - [`rayon`] - Parallel buffers
//! - [`tracing`] - Buffer-level logging
//!
//! # Used By
//!
//! - `colorsep-cli`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod kind;
pub mod anchors;
pub mod buffer;
pub mod hsv;
pub mod lab;
pub mod rgb;
pub mod ycbcr;

pub use buffer::{contact_sheet, separate_packed, separate_pixels};
pub use error::{SeparationError, SeparationResult};
pub use hsv::{rgb_to_hsv, Hsv};
pub use kind::SeparationKind;
pub use lab::{Lab, LabParams, LabSeparation};
pub use ycbcr::{rgb_to_ycbcr, YCbCr};

use colorsep_core::Color;
use colorsep_primaries::ColorProfile;

/// A color model to separate into.
///
/// Parameterless models are plain variants; Lab carries its precomputed
/// matrix.
#[derive(Debug, Clone, PartialEq)]
pub enum Separation {
    /// Raw R, G, B.
    Rgb,
    /// Hue, saturation, value.
    Hsv,
    /// BT.601 YCbCr.
    YCbCr,
    /// CIE L*a*b* for a given RGB space.
    Lab(LabSeparation),
}

impl Separation {
    /// Builds a Lab separation.
    ///
    /// # Errors
    ///
    /// [`SeparationError::InvalidGeometry`] if the chromaticities do not
    /// define an invertible RGB space.
    pub fn lab(params: &LabParams) -> SeparationResult<Self> {
        LabSeparation::new(params).map(Self::Lab)
    }

    /// Builds a separation of the given kind. `profile` is only used by Lab.
    pub fn from_kind(kind: SeparationKind, profile: &ColorProfile) -> SeparationResult<Self> {
        Ok(match kind {
            SeparationKind::Rgb => Self::Rgb,
            SeparationKind::Hsv => Self::Hsv,
            SeparationKind::YCbCr => Self::YCbCr,
            SeparationKind::Lab => Self::lab(&LabParams::from(profile))?,
        })
    }

    /// The model this separation targets.
    pub fn kind(&self) -> SeparationKind {
        match self {
            Self::Rgb => SeparationKind::Rgb,
            Self::Hsv => SeparationKind::Hsv,
            Self::YCbCr => SeparationKind::YCbCr,
            Self::Lab(_) => SeparationKind::Lab,
        }
    }

    /// Raw model components in channel order.
    ///
    /// RGB as given, HSV with hue in [0, 1) (NaN for black), YCbCr in [0, 1],
    /// Lab on the CIE scale with L* in [0, 100].
    pub fn components(&self, color: Color) -> [f32; 3] {
        match self {
            Self::Rgb => color.to_array(),
            Self::Hsv => rgb_to_hsv(color).to_array(),
            Self::YCbCr => rgb_to_ycbcr(color).to_array(),
            Self::Lab(lab) => lab.to_lab(color).to_array(),
        }
    }

    /// Separates one color into three display swatches.
    ///
    /// Output order follows [`SeparationKind::channel_names`].
    #[inline]
    pub fn separate(&self, color: Color) -> [Color; 3] {
        match self {
            Self::Rgb => rgb::separate(color),
            Self::Hsv => hsv::separate(color),
            Self::YCbCr => ycbcr::separate(color),
            Self::Lab(lab) => lab.separate(color),
        }
    }
}

impl From<LabSeparation> for Separation {
    fn from(lab: LabSeparation) -> Self {
        Self::Lab(lab)
    }
}

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{
        LabParams, LabSeparation, Separation, SeparationError, SeparationKind,
        SeparationResult,
    };
    pub use colorsep_core::Color;
}

#[cfg(test)]
mod tests {
    use super::*;
    use colorsep_primaries::{APPLE_RGB, SRGB};

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_separation_is_shareable() {
        assert_send_sync::<Separation>();
    }

    #[test]
    fn test_from_kind() {
        for kind in SeparationKind::ALL {
            let sep = Separation::from_kind(kind, &SRGB).unwrap();
            assert_eq!(sep.kind(), kind);
        }
    }

    #[test]
    fn test_from_kind_uses_profile() {
        let Separation::Lab(lab) = Separation::from_kind(SeparationKind::Lab, &APPLE_RGB).unwrap()
        else {
            panic!("expected Lab");
        };
        assert_eq!(lab.params().gamma, 1.8);
    }

    #[test]
    fn test_components_match_typed() {
        let c = Color::new(0.3, 0.6, 0.9);
        assert_eq!(Separation::Rgb.components(c), [0.3, 0.6, 0.9]);
        assert_eq!(Separation::Hsv.components(c), rgb_to_hsv(c).to_array());
        assert_eq!(Separation::YCbCr.components(c), rgb_to_ycbcr(c).to_array());
    }

    #[test]
    fn test_black_hue_component_is_nan() {
        let [h, s, v] = Separation::Hsv.components(Color::BLACK);
        assert!(h.is_nan());
        assert_eq!((s, v), (0.0, 0.0));
    }
}
