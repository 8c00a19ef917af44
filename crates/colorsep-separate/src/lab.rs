//! RGB -> CIE L*a*b* separation for an arbitrary RGB space.
//!
//! The RGB space is described by [`LabParams`]: primary and white point
//! chromaticities plus a decoding gamma. Construction derives the RGB->XYZ
//! matrix once; every pixel then runs
//!
//! 1. gamma decode: `c' = c ^ gamma`
//! 2. `XYZ = M * rgb'`
//! 3. `f(t) = t^(1/3)` if `t > e`, else `(k t + 16) / 116`, applied to
//!    `X/Xw`, `Y/Yw`, `Z/Zw`
//! 4. `L = 116 f(Y) - 16`, `a = 500 (f(X) - f(Y))`, `b = 200 (f(Y) - f(Z))`
//!
//! For display, `L / 256` is drawn as gray and `(a + 128) / 256`,
//! `(b + 128) / 256` are blended along spring green/rose and azure/orange.
//! Nothing is clamped, so very saturated inputs extrapolate past the anchors.
//!
//! # Example
//!
//! ```rust
//! use colorsep_core::Color;
//! use colorsep_primaries::SRGB;
//! use colorsep_separate::lab::{LabParams, LabSeparation};
//!
//! let lab = LabSeparation::new(&LabParams::from(&SRGB)).unwrap();
//! let white = lab.to_lab(Color::WHITE);
//! assert!((white.l - 100.0).abs() < 1e-3);
//! ```

use crate::anchors::{AZURE, ORANGE, ROSE, SPRING_GREEN};
use crate::SeparationResult;
use colorsep_core::Color;
use colorsep_math::{Mat3, Vec3};
use colorsep_primaries::{rgb_to_xyz_matrix, Chromaticity, ColorProfile, Primaries};

/// CIE epsilon, `(6/29)^3` rounded.
pub const CIE_E: f32 = 0.008856;

/// CIE kappa, `(29/3)^3` rounded.
pub const CIE_K: f32 = 903.3;

/// Scale applied to L* for display.
pub const DISPLAY_SCALE: f32 = 256.0;

/// Offset applied to a* and b* before scaling.
pub const DISPLAY_OFFSET: f32 = 128.0;

// ============================================================================
// Parameters
// ============================================================================

/// Construction parameters for a Lab separation.
///
/// A plain value: build it from eight chromaticity floats and a gamma, or
/// from a [`ColorProfile`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabParams {
    /// Primaries and white point.
    pub primaries: Primaries,
    /// Decoding exponent.
    pub gamma: f32,
}

impl LabParams {
    /// Creates parameters from raw chromaticities.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        x_r: f32,
        y_r: f32,
        x_g: f32,
        y_g: f32,
        x_b: f32,
        y_b: f32,
        x_w: f32,
        y_w: f32,
        gamma: f32,
    ) -> Self {
        Self {
            primaries: Primaries::new(
                Chromaticity::new(x_r, y_r),
                Chromaticity::new(x_g, y_g),
                Chromaticity::new(x_b, y_b),
                Chromaticity::new(x_w, y_w),
            ),
            gamma,
        }
    }
}

impl From<&ColorProfile> for LabParams {
    fn from(profile: &ColorProfile) -> Self {
        Self {
            primaries: profile.primaries,
            gamma: profile.gamma,
        }
    }
}

// ============================================================================
// Separation
// ============================================================================

/// Typed L*a*b* triple on the CIE scale (L* in [0, 100]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness.
    pub l: f32,
    /// Green-red axis.
    pub a: f32,
    /// Blue-yellow axis.
    pub b: f32,
}

impl Lab {
    /// `[l, a, b]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.l, self.a, self.b]
    }

    /// Display fractions `[L/256, (a+128)/256, (b+128)/256]`.
    #[inline]
    pub fn normalized(self) -> [f32; 3] {
        [
            self.l / DISPLAY_SCALE,
            (self.a + DISPLAY_OFFSET) / DISPLAY_SCALE,
            (self.b + DISPLAY_OFFSET) / DISPLAY_SCALE,
        ]
    }
}

/// A Lab separation with its RGB->XYZ matrix precomputed.
///
/// Immutable after construction and safe to share across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct LabSeparation {
    params: LabParams,
    matrix: Mat3,
    white: Vec3,
}

impl LabSeparation {
    /// Derives the matrix for `params`.
    ///
    /// # Errors
    ///
    /// [`SeparationError::InvalidGeometry`](crate::SeparationError::InvalidGeometry)
    /// for collinear primaries, a zero `y` coordinate, or any other geometry
    /// that leaves the matrix singular or non-finite.
    pub fn new(params: &LabParams) -> SeparationResult<Self> {
        let matrix = rgb_to_xyz_matrix(&params.primaries)?;
        Ok(Self {
            params: *params,
            matrix,
            white: params.primaries.white_xyz(),
        })
    }

    /// Construction parameters.
    #[inline]
    pub fn params(&self) -> &LabParams {
        &self.params
    }

    /// Derived RGB->XYZ matrix.
    #[inline]
    pub fn matrix(&self) -> &Mat3 {
        &self.matrix
    }

    /// White point tristimulus `(Xw, 1, Zw)`.
    #[inline]
    pub fn white(&self) -> Vec3 {
        self.white
    }

    /// Gamma-decodes and maps to XYZ.
    #[inline]
    pub fn to_xyz(&self, color: Color) -> Vec3 {
        let linear = Vec3::from(color).powf(self.params.gamma);
        self.matrix * linear
    }

    /// Converts to L*a*b*.
    pub fn to_lab(&self, color: Color) -> Lab {
        let xyz = self.to_xyz(color) / self.white;
        let fx = cie_f(xyz.x);
        let fy = cie_f(xyz.y);
        let fz = cie_f(xyz.z);
        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// L as gray, a and b along their anchor pairs.
    pub fn separate(&self, color: Color) -> [Color; 3] {
        let [l, a, b] = self.to_lab(color).normalized();
        [
            Color::gray(l),
            Color::blend(SPRING_GREEN, ROSE, a),
            Color::blend(AZURE, ORANGE, b),
        ]
    }
}

/// CIE Lab companding function.
#[inline]
fn cie_f(t: f32) -> f32 {
    if t > CIE_E {
        t.powf(1.0 / 3.0)
    } else {
        (CIE_K * t + 16.0) / 116.0
    }
}
