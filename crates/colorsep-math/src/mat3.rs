//! 3x3 matrix type for RGB <-> XYZ transforms.
//!
//! # Convention
//!
//! Row-major storage, column vectors:
//!
//! ```text
//! | m00 m01 m02 |   | r |   | X |
//! | m10 m11 m12 | * | g | = | Y |
//! | m20 m21 m22 |   | b |   | Z |
//! ```
//!
//! An RGB->XYZ matrix therefore holds the XYZ of each primary in its
//! **columns**, which is how [`Mat3::from_col_vecs`] and [`Mat3::scale_cols`]
//! are used during matrix derivation.

use crate::Vec3;
use std::ops::{Index, Mul};

/// Relative tolerance for singularity: `|det| <= EPS * |c0| * |c1| * |c2|`.
///
/// The column-norm product bounds `|det|` (Hadamard), so the test does not
/// depend on how each column is scaled.
const SINGULAR_EPS: f32 = 1e-6;

/// A 3x3 matrix for color transformations.
///
/// # Example
///
/// ```rust
/// use colorsep_math::{Mat3, Vec3};
///
/// let m = Mat3::from_col_vecs(Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 4.0, 0.0), Vec3::new(0.0, 0.0, 8.0));
/// assert_eq!(m * Vec3::ONE, Vec3::new(2.0, 4.0, 8.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat3 {
    /// Matrix elements in row-major order: [row0, row1, row2]
    pub m: [[f32; 3]; 3],
}

impl Mat3 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [[0.0; 3]; 3] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f32; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix from column arrays.
    #[inline]
    pub const fn from_cols(cols: [[f32; 3]; 3]) -> Self {
        Self {
            m: [
                [cols[0][0], cols[1][0], cols[2][0]],
                [cols[0][1], cols[1][1], cols[2][1]],
                [cols[0][2], cols[1][2], cols[2][2]],
            ],
        }
    }

    /// Creates a matrix whose columns are `c0`, `c1`, `c2`.
    #[inline]
    pub fn from_col_vecs(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self::from_cols([c0.to_array(), c1.to_array(), c2.to_array()])
    }

    /// Returns row `i`.
    #[inline]
    pub fn row(&self, i: usize) -> Vec3 {
        Vec3::from_array(self.m[i])
    }

    /// Returns column `i`.
    #[inline]
    pub fn col(&self, i: usize) -> Vec3 {
        Vec3::new(self.m[0][i], self.m[1][i], self.m[2][i])
    }

    /// Returns the transpose.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.m)
    }

    /// Multiplies column `i` by `s[i]`.
    ///
    /// Equivalent to `self * diag(s)`.
    #[inline]
    pub fn scale_cols(&self, s: Vec3) -> Self {
        Self::from_col_vecs(self.col(0) * s.x, self.col(1) * s.y, self.col(2) * s.z)
    }

    /// Computes the determinant.
    #[inline]
    pub fn determinant(&self) -> f32 {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Product of the column lengths, an upper bound on `|det|`.
    #[inline]
    pub fn col_norm_product(&self) -> f32 {
        self.col(0).length() * self.col(1).length() * self.col(2).length()
    }

    /// Computes the inverse via the adjugate.
    ///
    /// Returns `None` when the matrix is singular relative to its own scale,
    /// or when any element is not finite.
    ///
    /// # Example
    ///
    /// ```rust
    /// use colorsep_math::Mat3;
    ///
    /// let m = Mat3::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
    /// let inv = m.inverse().unwrap();
    /// let id = m * inv;
    /// assert!((id.m[1][1] - 1.0).abs() < 1e-5);
    ///
    /// let flat = Mat3::from_rows([[1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [0.0, 2.0, 5.0]]);
    /// assert!(flat.inverse().is_none());
    /// ```
    pub fn inverse(&self) -> Option<Self> {
        if !self.is_finite() {
            return None;
        }
        let det = self.determinant();
        if !det.is_finite() || det.abs() <= SINGULAR_EPS * self.col_norm_product() {
            return None;
        }

        let m = &self.m;
        let inv_det = 1.0 / det;

        Some(Self::from_rows([
            [
                (m[1][1] * m[2][2] - m[1][2] * m[2][1]) * inv_det,
                (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv_det,
                (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
            ],
            [
                (m[1][2] * m[2][0] - m[1][0] * m[2][2]) * inv_det,
                (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
                (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv_det,
            ],
            [
                (m[1][0] * m[2][1] - m[1][1] * m[2][0]) * inv_det,
                (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv_det,
                (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv_det,
            ],
        ]))
    }

    /// Computes `self * v`.
    #[inline]
    pub fn transform(&self, v: Vec3) -> Vec3 {
        Vec3::new(self.row(0).dot(v), self.row(1).dot(v), self.row(2).dot(v))
    }

    /// Computes `self * other`.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        Self::from_col_vecs(
            self.transform(other.col(0)),
            self.transform(other.col(1)),
            self.transform(other.col(2)),
        )
    }

    /// Returns true if all elements are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|x| x.is_finite())
    }

    /// Converts to glam Mat3 (column-major).
    #[inline]
    pub fn to_glam(&self) -> glam::Mat3 {
        glam::Mat3::from_cols(
            self.col(0).to_glam(),
            self.col(1).to_glam(),
            self.col(2).to_glam(),
        )
    }

    /// Creates from glam Mat3.
    #[inline]
    pub fn from_glam(m: glam::Mat3) -> Self {
        Self::from_cols(m.to_cols_array_2d())
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.transform(rhs)
    }
}

impl Mul for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl Index<usize> for Mat3 {
    type Output = [f32; 3];

    #[inline]
    fn index(&self, i: usize) -> &[f32; 3] {
        &self.m[i]
    }
}
