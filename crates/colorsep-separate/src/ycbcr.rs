//! RGB -> YCbCr separation with BT.601 studio-range coefficients.
//!
//! ```text
//! Y  = 0.0625 + 0.25678906 R + 0.50412893 G + 0.09790625 B
//! Cb = 0.5    - 0.14822266 R - 0.29099220 G + 0.43921486 B
//! Cr = 0.5    + 0.43921486 R - 0.36778906 G - 0.07142578 B
//! ```
//!
//! Y is drawn as gray, Cb between chartreuse and violet, Cr between spring
//! green and rose.

use crate::anchors::{CHARTREUSE, ROSE, SPRING_GREEN, VIOLET};
use colorsep_core::Color;

/// Typed YCbCr triple, all nominally in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YCbCr {
    /// Luma, 16/256 for black and about 235/255 for white.
    pub y: f32,
    /// Blue-difference chroma, 0.5 for neutral.
    pub cb: f32,
    /// Red-difference chroma, 0.5 for neutral.
    pub cr: f32,
}

impl YCbCr {
    /// `[y, cb, cr]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.y, self.cb, self.cr]
    }
}

/// Converts RGB to YCbCr.
#[inline]
pub fn rgb_to_ycbcr(color: Color) -> YCbCr {
    let (r, g, b) = (color.red(), color.green(), color.blue());
    YCbCr {
        y: 0.0625 + 0.25678906 * r + 0.50412893 * g + 0.09790625 * b,
        cb: 0.5 - 0.14822266 * r - 0.29099220 * g + 0.43921486 * b,
        cr: 0.5 + 0.43921486 * r - 0.36778906 * g - 0.07142578 * b,
    }
}

/// Y as gray, Cb and Cr along their anchor pairs.
#[inline]
pub fn separate(color: Color) -> [Color; 3] {
    let ycc = rgb_to_ycbcr(color);
    [
        Color::gray(ycc.y),
        Color::blend(CHARTREUSE, VIOLET, ycc.cb),
        Color::blend(SPRING_GREEN, ROSE, ycc.cr),
    ]
}
