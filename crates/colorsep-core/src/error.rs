//! Error types for colorsep-core operations.
//!
//! The color type itself never fails: arithmetic on [`Color`](crate::Color)
//! propagates NaN and infinity instead of erroring. Errors only arise at the
//! edges, when parsing user-supplied color strings or when a pixel buffer does
//! not match its declared dimensions.
//!
//! # Usage
//!
//! ```rust
//! use colorsep_core::{Error, Result};
//!
//! fn check_len(pixels: &[u32], width: u32, height: u32) -> Result<()> {
//!     let expected = width as usize * height as usize;
//!     if pixels.len() != expected {
//!         return Err(Error::buffer_size(width, height, pixels.len()));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by colorsep-core.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A color string could not be parsed.
    ///
    /// Accepted forms are `#RRGGBB`, `RRGGBB` and `r,g,b` floats.
    #[error("invalid color '{input}': {reason}")]
    ParseColor {
        /// The rejected input
        input: String,
        /// Why it was rejected
        reason: String,
    },

    /// Pixel buffer length does not match `width * height`.
    #[error("buffer holds {actual} pixels, expected {expected} for {width}x{height}")]
    BufferSize {
        /// Declared width
        width: u32,
        /// Declared height
        height: u32,
        /// `width * height`
        expected: usize,
        /// Actual buffer length
        actual: usize,
    },
}

impl Error {
    /// Creates an [`Error::ParseColor`] error.
    #[inline]
    pub fn parse_color(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ParseColor {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::BufferSize`] error.
    #[inline]
    pub fn buffer_size(width: u32, height: u32, actual: usize) -> Self {
        Self::BufferSize {
            width,
            height,
            expected: width as usize * height as usize,
            actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_size() {
        let err = Error::buffer_size(4, 3, 10);
        let msg = err.to_string();
        assert!(msg.contains("10"));
        assert!(msg.contains("12"));
        assert!(msg.contains("4x3"));
    }

    #[test]
    fn test_parse_color_message() {
        let err = Error::parse_color("#12", "expected 6 hex digits");
        assert!(err.to_string().contains("#12"));
        assert!(err.to_string().contains("6 hex digits"));
    }
}
