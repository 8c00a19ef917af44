//! Fixed display anchors for chroma axes.
//!
//! A signed chroma axis has no natural grayscale rendering, so each one is
//! drawn as a blend between two saturated colors. The pairs are display
//! conventions and are applied identically everywhere.

use colorsep_core::Color;

const fn rgb8(r: u8, g: u8, b: u8) -> Color {
    Color::from_u8(r, g, b)
}

/// (127, 255, 0). Low end of Cb.
pub const CHARTREUSE: Color = rgb8(127, 255, 0);

/// (127, 0, 255). High end of Cb.
pub const VIOLET: Color = rgb8(127, 0, 255);

/// (0, 255, 127). Low end of Cr and of Lab a*.
pub const SPRING_GREEN: Color = rgb8(0, 255, 127);

/// (255, 0, 127). High end of Cr and of Lab a*.
pub const ROSE: Color = rgb8(255, 0, 127);

/// (0, 127, 255). Low end of Lab b*.
pub const AZURE: Color = rgb8(0, 127, 255);

/// (255, 127, 0). High end of Lab b*.
pub const ORANGE: Color = rgb8(255, 127, 0);
