//! 3D vector type for linear RGB and XYZ triplets.
//!
//! [`Vec3`] is the working type inside colorimetric math. Display-side code
//! uses [`Color`](colorsep_core::Color); conversion between the two is free:
//!
//! ```rust
//! use colorsep_core::Color;
//! use colorsep_math::Vec3;
//!
//! let v = Vec3::from(Color::new(1.0, 0.5, 0.25));
//! assert_eq!(v.y, 0.5);
//! let back: Color = v.into();
//! assert_eq!(back.blue(), 0.25);
//! ```

use colorsep_core::Color;
use std::ops::{Add, Div, Index, Mul, Sub};

/// A 3D vector for color triplets.
///
/// For RGB: x=R, y=G, z=B. For XYZ: x=X, y=Y, z=Z.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec3 {
    /// X component (R for RGB, X for XYZ)
    pub x: f32,
    /// Y component (G for RGB, Y for XYZ)
    pub y: f32,
    /// Z component (B for RGB, Z for XYZ)
    pub z: f32,
}

impl Vec3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// One vector (1, 1, 1). Linear RGB white.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to `v`.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Applies `f` to each component.
    #[inline]
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    /// Component-wise power.
    ///
    /// Negative bases with non-integer exponents yield NaN, as with [`f32::powf`].
    #[inline]
    pub fn powf(self, exp: f32) -> Self {
        self.map(|v| v.powf(exp))
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Converts to glam Vec3.
    #[inline]
    pub fn to_glam(self) -> glam::Vec3 {
        glam::Vec3::new(self.x, self.y, self.z)
    }

    /// Creates from glam Vec3.
    #[inline]
    pub fn from_glam(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// Component-wise
impl Mul for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

// Component-wise
impl Div for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Color> for Vec3 {
    #[inline]
    fn from(c: Color) -> Self {
        Self::from_array(c.to_array())
    }
}

impl From<Vec3> for Color {
    #[inline]
    fn from(v: Vec3) -> Color {
        Color::from_array(v.to_array())
    }
}

impl From<glam::Vec3> for Vec3 {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::from_glam(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_dot() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_vec3_length() {
        assert_eq!(Vec3::new(3.0, 0.0, 4.0).length(), 5.0);
        assert_eq!(Vec3::ZERO.length(), 0.0);
    }

    #[test]
    fn test_vec3_ops() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::splat(3.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(b / a, Vec3::new(4.0, 2.5, 2.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_vec3_powf_negative_is_nan() {
        let v = Vec3::new(0.25, -0.5, 1.0).powf(0.5);
        assert_eq!(v.x, 0.5);
        assert!(v.y.is_nan());
        assert_eq!(v.z, 1.0);
        assert!(!v.is_finite());
    }

    #[test]
    fn test_vec3_color_conversion() {
        let c = Color::new(0.1, 0.2, 0.3);
        let v: Vec3 = c.into();
        assert_eq!(v, Vec3::new(0.1, 0.2, 0.3));
        assert_eq!(Color::from(v), c);
    }

    #[test]
    fn test_vec3_glam_roundtrip() {
        let v = Vec3::new(1.0, -2.0, 3.5);
        assert_eq!(Vec3::from(v.to_glam()), v);
    }

    #[test]
    fn test_vec3_index() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[2], 3.0);
    }
}
