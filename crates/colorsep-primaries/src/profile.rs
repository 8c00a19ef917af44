//! Named RGB color profiles: primaries, white point and gamma.
//!
//! A [`ColorProfile`] is the full parameter set needed to build a Lab
//! separation. Presets cover the common working spaces; custom profiles can be
//! loaded from YAML:
//!
//! ```yaml
//! name: Studio Monitor
//! red:   [0.680, 0.320]
//! green: [0.265, 0.690]
//! blue:  [0.150, 0.060]
//! illuminant: D65      # or `white: [x, y]`
//! gamma: 2.4
//! ```
//!
//! ```rust
//! use colorsep_primaries::{ColorProfile, Illuminant};
//!
//! let profile = ColorProfile::by_name("adobe rgb")
//!     .unwrap()
//!     .with_illuminant(Illuminant::D50)
//!     .with_gamma(1.8);
//! assert_eq!(profile.gamma, 1.8);
//! ```

use crate::{
    rgb_to_xyz_matrix, Chromaticity, Illuminant, Primaries, PrimariesError, PrimariesResult,
};
use colorsep_math::Mat3;
use serde::Deserialize;
use std::borrow::Cow;
use std::path::Path;

/// Gamma used when a profile file omits it.
pub const DEFAULT_GAMMA: f32 = 1.0;

/// An RGB color space definition with its decoding gamma.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorProfile {
    /// Display name.
    pub name: Cow<'static, str>,
    /// Primary and white point chromaticities.
    pub primaries: Primaries,
    /// Decoding exponent: linear = encoded ^ gamma.
    pub gamma: f32,
}

// ============================================================================
// Presets
// ============================================================================

const fn preset(name: &'static str, c: [f32; 8], gamma: f32) -> ColorProfile {
    ColorProfile {
        name: Cow::Borrowed(name),
        primaries: Primaries::new(
            Chromaticity::new(c[0], c[1]),
            Chromaticity::new(c[2], c[3]),
            Chromaticity::new(c[4], c[5]),
            Chromaticity::new(c[6], c[7]),
        ),
        gamma,
    }
}

/// sRGB with a pure 2.2 gamma.
pub const SRGB: ColorProfile = preset(
    "sRGB",
    [0.64, 0.33, 0.30, 0.60, 0.15, 0.06, 0.3127, 0.3290],
    2.2,
);

/// Adobe RGB (1998).
pub const ADOBE_RGB: ColorProfile = preset(
    "Adobe RGB",
    [0.64, 0.33, 0.21, 0.71, 0.15, 0.06, 0.3127, 0.3290],
    2.2,
);

/// Apple RGB.
pub const APPLE_RGB: ColorProfile = preset(
    "Apple RGB",
    [0.625, 0.340, 0.280, 0.595, 0.155, 0.070, 0.3127, 0.3290],
    1.8,
);

/// CIE RGB (equal-energy white).
pub const CIE_RGB: ColorProfile = preset(
    "CIE RGB",
    [0.735, 0.265, 0.274, 0.717, 0.167, 0.009, 0.3333, 0.3333],
    2.2,
);

/// Adobe Wide Gamut RGB (D50).
pub const WIDE_GAMUT: ColorProfile = preset(
    "Wide Gamut",
    [0.7347, 0.2653, 0.1152, 0.8264, 0.1566, 0.0177, 0.3457, 0.3585],
    1.2,
);

/// PAL/SECAM (EBU Tech. 3213).
pub const PAL_SECAM: ColorProfile = preset(
    "PAL/SECAM",
    [0.64, 0.33, 0.29, 0.60, 0.15, 0.06, 0.3127, 0.3290],
    1.95,
);

/// All preset profiles, in display order.
pub const PROFILES: [ColorProfile; 6] = [SRGB, ADOBE_RGB, APPLE_RGB, CIE_RGB, WIDE_GAMUT, PAL_SECAM];

/// Lowercase alphanumerics only, so "PAL/SECAM" matches "pal-secam".
fn normalize(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl ColorProfile {
    /// Creates a profile from parts.
    pub fn new(name: impl Into<String>, primaries: Primaries, gamma: f32) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            primaries,
            gamma,
        }
    }

    /// Looks up a preset by name, ignoring case and punctuation.
    pub fn by_name(name: &str) -> PrimariesResult<Self> {
        let wanted = normalize(name);
        PROFILES
            .iter()
            .find(|p| normalize(&p.name) == wanted)
            .cloned()
            .ok_or_else(|| PrimariesError::UnknownProfile {
                name: name.to_string(),
            })
    }

    /// Replaces the white point.
    pub fn with_white_point(mut self, w: Chromaticity) -> Self {
        self.primaries.w = w;
        self
    }

    /// Replaces the white point with a standard illuminant.
    pub fn with_illuminant(self, illuminant: Illuminant) -> Self {
        self.with_white_point(illuminant.chromaticity())
    }

    /// Replaces the gamma.
    pub fn with_gamma(mut self, gamma: f32) -> Self {
        self.gamma = gamma;
        self
    }

    /// Derives the RGB->XYZ matrix for this profile's primaries.
    pub fn rgb_to_xyz_matrix(&self) -> PrimariesResult<Mat3> {
        rgb_to_xyz_matrix(&self.primaries)
    }

    // ------------------------------------------------------------------------
    // YAML loading
    // ------------------------------------------------------------------------

    /// Loads a profile from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> PrimariesResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PrimariesError::ProfileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let mut profile = Self::from_yaml_str(&content)?;
        if profile.name.is_empty() {
            if let Some(stem) = path.file_stem() {
                profile.name = Cow::Owned(stem.to_string_lossy().into_owned());
            }
        }
        Ok(profile)
    }

    /// Parses a profile from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> PrimariesResult<Self> {
        let raw: RawProfile = serde_yaml::from_str(yaml)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawProfile) -> PrimariesResult<Self> {
        let w = match (raw.white, raw.illuminant) {
            (Some([x, y]), None) => Chromaticity::new(x, y),
            (None, Some(name)) => name.parse::<Illuminant>()?.chromaticity(),
            _ => return Err(PrimariesError::WhitePoint),
        };
        let xy = |[x, y]: [f32; 2]| Chromaticity::new(x, y);
        Ok(Self::new(
            raw.name.unwrap_or_default(),
            Primaries::new(xy(raw.red), xy(raw.green), xy(raw.blue), w),
            raw.gamma.unwrap_or(DEFAULT_GAMMA),
        ))
    }
}

impl Default for ColorProfile {
    fn default() -> Self {
        SRGB
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProfile {
    name: Option<String>,
    red: [f32; 2],
    green: [f32; 2],
    blue: [f32; 2],
    white: Option<[f32; 2]>,
    illuminant: Option<String>,
    gamma: Option<f32>,
}
