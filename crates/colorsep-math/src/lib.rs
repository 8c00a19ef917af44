//! # colorsep-math
//!
//! Linear algebra for colorimetric transforms.
//!
//! - [`Vec3`] - 3-component vector for linear RGB and XYZ triplets
//! - [`Mat3`] - 3x3 matrix for RGB <-> XYZ conversions
//!
//! # Design
//!
//! All matrices are stored **row-major** and multiply **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! This matches how RGB->XYZ matrices are printed in colorimetry references,
//! so constants can be copied row by row:
//!
//! ```rust
//! use colorsep_math::{Mat3, Vec3};
//!
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4124564, 0.3575761, 0.1804375],
//!     [0.2126729, 0.7151522, 0.0721750],
//!     [0.0193339, 0.1191920, 0.9503041],
//! ]);
//!
//! let xyz = rgb_to_xyz * Vec3::ONE;
//! assert!((xyz.y - 1.0).abs() < 1e-4);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - interop for callers already using glam types
//! - `colorsep-core` - [`Color`](colorsep_core::Color) conversions
//!
//! # Used By
//!
//! - `colorsep-primaries` - RGB->XYZ matrix derivation
//! - `colorsep-separate` - Lab separation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec3;

pub use mat3::*;
pub use vec3::*;
