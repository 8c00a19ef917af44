//! # colorsep-primaries
//!
//! Color primaries, white points, and RGB->XYZ matrix derivation.
//!
//! An RGB space is pinned to CIE XYZ by four chromaticities: one per primary
//! plus the white point. From those alone the 3x3 matrix taking linear RGB to
//! XYZ can be derived, with the constraint that RGB white `(1, 1, 1)` lands
//! exactly on the white point.
//!
//! # Usage
//!
//! ```rust
//! use colorsep_primaries::{rgb_to_xyz_matrix, SRGB};
//! use colorsep_math::Vec3;
//!
//! let m = rgb_to_xyz_matrix(&SRGB.primaries).unwrap();
//! let white = m * Vec3::ONE;
//! assert!((white.y - 1.0).abs() < 1e-5);
//! ```
//!
//! # Presets
//!
//! | Profile | White | Gamma |
//! |---------|-------|-------|
//! | sRGB | D65 | 2.2 |
//! | Adobe RGB | D65 | 2.2 |
//! | Apple RGB | D65 | 1.8 |
//! | CIE RGB | E | 2.2 |
//! | Wide Gamut | D50 | 1.2 |
//! | PAL/SECAM | D65 | 1.95 |
//!
//! White points can be replaced by any [`Illuminant`].
//!
//! # Dependencies
//!
//! - `colorsep-math` - Matrix operations
//! - [`serde`], [`serde_yaml`] - Profile files
//!
//! # Used By
//!
//! - `colorsep-separate` - Lab separation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod illuminant;
mod profile;

pub use error::{PrimariesError, PrimariesResult};
pub use illuminant::Illuminant;
pub use profile::*;

use colorsep_math::{Mat3, Vec3};

/// A CIE 1931 xy chromaticity coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chromaticity {
    /// x coordinate
    pub x: f32,
    /// y coordinate
    pub y: f32,
}

impl Chromaticity {
    /// Creates a chromaticity.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Tristimulus XYZ with Y normalized to 1: `(x/y, 1, (1-x-y)/y)`.
    ///
    /// No guard for `y == 0`; the result is then infinite or NaN and matrix
    /// derivation rejects it.
    #[inline]
    pub fn to_xyz(self) -> Vec3 {
        Vec3::new(self.x / self.y, 1.0, (1.0 - self.x - self.y) / self.y)
    }
}

/// RGB color space geometry: three primaries and a white point.
///
/// # Example
///
/// ```rust
/// use colorsep_primaries::{Chromaticity, Primaries};
///
/// let rec709 = Primaries::new(
///     Chromaticity::new(0.64, 0.33),
///     Chromaticity::new(0.30, 0.60),
///     Chromaticity::new(0.15, 0.06),
///     Chromaticity::new(0.3127, 0.3290),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary
    pub r: Chromaticity,
    /// Green primary
    pub g: Chromaticity,
    /// Blue primary
    pub b: Chromaticity,
    /// White point
    pub w: Chromaticity,
}

impl Primaries {
    /// Creates primaries from four chromaticities.
    #[inline]
    pub const fn new(r: Chromaticity, g: Chromaticity, b: Chromaticity, w: Chromaticity) -> Self {
        Self { r, g, b, w }
    }

    /// White point tristimulus (Y = 1).
    #[inline]
    pub fn white_xyz(&self) -> Vec3 {
        self.w.to_xyz()
    }
}

// ============================================================================
// Matrix Derivation
// ============================================================================

/// Derives the linear RGB -> XYZ matrix for a set of primaries.
///
/// # Algorithm
///
/// 1. Convert each primary and the white point to XYZ with Y = 1
/// 2. Place the primaries' XYZ in the columns of `P`
/// 3. Solve `P * S = W` for the per-primary scale `S`
/// 4. Scale column `i` of `P` by `S[i]`
///
/// The result maps RGB `(1, 1, 1)` to the white point's XYZ.
///
/// # Errors
///
/// [`PrimariesError::InvalidGeometry`] when the white point has `y == 0`,
/// when `P` is singular (collinear primaries, a primary with `y == 0`), or
/// when the result is not finite.
pub fn rgb_to_xyz_matrix(primaries: &Primaries) -> PrimariesResult<Mat3> {
    let w = primaries.white_xyz();
    if !w.is_finite() {
        return Err(PrimariesError::invalid_geometry(format!(
            "white point ({}, {}) has no finite tristimulus value",
            primaries.w.x, primaries.w.y
        )));
    }

    let p = Mat3::from_col_vecs(
        primaries.r.to_xyz(),
        primaries.g.to_xyz(),
        primaries.b.to_xyz(),
    );
    let p_inv = p.inverse().ok_or_else(|| {
        PrimariesError::invalid_geometry("primaries are collinear or have a zero y coordinate")
    })?;

    let s = p_inv * w;
    let m = p.scale_cols(s);
    if !m.is_finite() {
        return Err(PrimariesError::invalid_geometry(
            "derived RGB->XYZ matrix is not finite",
        ));
    }
    Ok(m)
}

/// Derives the XYZ -> linear RGB matrix, the inverse of [`rgb_to_xyz_matrix`].
pub fn xyz_to_rgb_matrix(primaries: &Primaries) -> PrimariesResult<Mat3> {
    rgb_to_xyz_matrix(primaries)?
        .inverse()
        .ok_or_else(|| PrimariesError::invalid_geometry("RGB->XYZ matrix is not invertible"))
}
