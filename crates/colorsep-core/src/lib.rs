//! # colorsep-core
//!
//! Core value types for color channel separation.
//!
//! This crate provides the foundational types used by every other colorsep crate:
//!
//! - [`Color`] - Immutable RGB triple, normally in [0, 1]
//! - [`Error`] - Errors for parsing and buffer handling
//!
//! ## Design Philosophy
//!
//! A [`Color`] is a plain value. Nothing is validated or clamped at construction,
//! so NaN and out-of-range channels flow through every transform untouched.
//! Clamping happens exactly once, when a color is packed into 8-bit channels
//! for output:
//!
//! ```rust
//! use colorsep_core::Color;
//!
//! let over = Color::new(1.5, -0.25, 0.5);
//! assert_eq!(over.red(), 1.5);
//! assert_eq!(over.to_packed(), 0xFF0080);
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! colorsep-core (this crate)
//!    ^
//!    |
//!    +-- colorsep-math (Vec3, Mat3)
//!    +-- colorsep-primaries (chromaticities, RGB->XYZ matrices)
//!    +-- colorsep-separate (separation engine)
//!    +-- colorsep-cli
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod error;

pub use color::Color;
pub use error::{Error, Result};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::error::{Error, Result};
}
