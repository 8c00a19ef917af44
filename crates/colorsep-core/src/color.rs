//! The [`Color`] value type.
//!
//! A [`Color`] is an RGB triple of `f32` channels, semantically normalized to
//! [0, 1]. It is the single currency of the separation engine: one color goes
//! in, three colors come out.
//!
//! # Construction
//!
//! | Source | Constructor | Mapping |
//! |--------|-------------|---------|
//! | Three floats | [`Color::new`] | as is |
//! | One float | [`Color::gray`] | replicated to R, G, B |
//! | Three bytes | [`Color::from_u8`] | each `/ 255` |
//! | Packed `0xRRGGBB` | [`Color::from_packed`] | each byte `/ 255` |
//!
//! # Blending
//!
//! Scalar channel values (hue, chroma, lightness) are not colors by themselves.
//! They are shown by interpolating between two anchor colors:
//!
//! ```rust
//! use colorsep_core::Color;
//!
//! let swatch = Color::blend(Color::BLACK, Color::RED, 0.5);
//! assert_eq!(swatch, Color::new(0.5, 0.0, 0.0));
//! ```

use crate::{Error, Result};
use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

/// An immutable RGB color with `f32` channels.
///
/// Channels are not clamped or validated. Values outside [0, 1] and NaN are
/// legal and propagate through arithmetic; the HSV separation relies on this
/// to carry an undefined hue through to its output swatch.
///
/// Every operation returns a new value; there are no mutating methods.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Color {
    r: f32,
    g: f32,
    b: f32,
}

impl Color {
    /// Black (0, 0, 0).
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// White (1, 1, 1).
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Pure red (1, 0, 0).
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);

    /// Pure green (0, 1, 0).
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);

    /// Pure blue (0, 0, 1).
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a color from three channel values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use colorsep_core::Color;
    ///
    /// let c = Color::new(1.0, 0.5, 0.25);
    /// assert_eq!(c.green(), 0.5);
    /// ```
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Creates a gray color with all channels set to `v`.
    #[inline]
    pub const fn gray(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates a color from 8-bit channels, each divided by 255.
    ///
    /// # Example
    ///
    /// ```rust
    /// use colorsep_core::Color;
    ///
    /// assert_eq!(Color::from_u8(255, 0, 255), Color::new(1.0, 0.0, 1.0));
    /// ```
    #[inline]
    pub const fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Creates a color from a packed `0xRRGGBB` integer.
    ///
    /// Bits above the low 24 (alpha, if any) are ignored.
    #[inline]
    pub const fn from_packed(rgb: u32) -> Self {
        Self::from_u8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Creates a color from an `[r, g, b]` array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Red channel.
    #[inline]
    pub const fn red(self) -> f32 {
        self.r
    }

    /// Green channel.
    #[inline]
    pub const fn green(self) -> f32 {
        self.g
    }

    /// Blue channel.
    #[inline]
    pub const fn blue(self) -> f32 {
        self.b
    }

    /// Converts to an `[r, g, b]` array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Largest of the three channels.
    #[inline]
    pub fn max_channel(self) -> f32 {
        self.r.max(self.g).max(self.b)
    }

    /// Smallest of the three channels.
    #[inline]
    pub fn min_channel(self) -> f32 {
        self.r.min(self.g).min(self.b)
    }

    /// Returns true if all channels are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    /// Linear interpolation from `a` to `b`: `a + (b - a) * t` per channel.
    ///
    /// `t` is not clamped, so values outside [0, 1] extrapolate past the
    /// anchors and a NaN `t` yields a NaN color.
    ///
    /// # Example
    ///
    /// ```rust
    /// use colorsep_core::Color;
    ///
    /// let a = Color::new(0.0, 1.0, 0.5);
    /// let b = Color::new(1.0, 0.0, 0.5);
    /// assert_eq!(Color::blend(a, b, 0.0), a);
    /// assert_eq!(Color::blend(a, b, 1.0), b);
    /// ```
    #[inline]
    pub fn blend(a: Self, b: Self, t: f32) -> Self {
        a + (b - a) * t
    }

    /// Packs into `0xRRGGBB`.
    ///
    /// Each channel is scaled by 255, rounded and clamped to [0, 255].
    /// NaN channels pack as 0.
    pub fn to_packed(self) -> u32 {
        (pack_channel(self.r) << 16) | (pack_channel(self.g) << 8) | pack_channel(self.b)
    }

    /// Formats as `#RRGGBB` via [`to_packed`](Self::to_packed).
    pub fn to_hex(self) -> String {
        format!("#{:06X}", self.to_packed())
    }
}

#[inline]
fn pack_channel(v: f32) -> u32 {
    // `as` saturates and maps NaN to 0
    (v * 255.0).round().clamp(0.0, 255.0) as u32
}

// ============================================================================
// Arithmetic
// ============================================================================

impl Add for Color {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl Sub for Color {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

impl Mul<f32> for Color {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

impl From<[f32; 3]> for Color {
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Color> for [f32; 3] {
    fn from(c: Color) -> Self {
        c.to_array()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({}, {}, {})", self.r, self.g, self.b)
    }
}

// ============================================================================
// Parsing
// ============================================================================

impl FromStr for Color {
    type Err = Error;

    /// Parses `#RRGGBB`, `RRGGBB` or comma-separated floats `r,g,b`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();

        if s.contains(',') {
            let parts: Vec<&str> = s.split(',').map(str::trim).collect();
            if parts.len() != 3 {
                return Err(Error::parse_color(s, "expected three comma-separated channels"));
            }
            let mut channels = [0.0f32; 3];
            for (dst, part) in channels.iter_mut().zip(&parts) {
                *dst = part
                    .parse()
                    .map_err(|_| Error::parse_color(s, format!("'{}' is not a number", part)))?;
            }
            return Ok(Self::from_array(channels));
        }

        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::parse_color(s, "expected 6 hex digits"));
        }
        let packed = u32::from_str_radix(hex, 16)
            .map_err(|e| Error::parse_color(s, e.to_string()))?;
        Ok(Self::from_packed(packed))
    }
}
