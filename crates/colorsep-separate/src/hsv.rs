//! RGB -> HSV separation.
//!
//! Hue, saturation and value are each drawn as a grayscale swatch. Hue is
//! normalized to [0, 1) rather than degrees.
//!
//! Degenerate inputs are not errors:
//!
//! - Black (`max == 0` with no chroma): hue is undefined, saturation 0
//! - Achromatic (`max - min < 1e-7`, any other gray): hue 0, saturation 0
//! - Non-positive max with chroma: hue is undefined, saturation 0
//!
//! Only exact black is taken out of the achromatic case, so negative grays
//! still report hue 0.
//!
//! An undefined hue is `None` in [`Hsv`] and becomes a NaN swatch in
//! [`separate`], which packs to black at output.

use colorsep_core::Color;

/// Below this chroma a color counts as gray.
pub const ACHROMATIC_EPSILON: f32 = 1e-7;

/// Typed HSV decomposition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue in [0, 1). `None` for black.
    pub hue: Option<f32>,
    /// Saturation, `chroma / max`.
    pub saturation: f32,
    /// Value, the largest channel.
    pub value: f32,
}

impl Hsv {
    /// `[h, s, v]` with an undefined hue as NaN.
    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.hue.unwrap_or(f32::NAN), self.saturation, self.value]
    }
}

/// Converts RGB to HSV.
///
/// # Example
///
/// ```rust
/// use colorsep_core::Color;
/// use colorsep_separate::hsv::rgb_to_hsv;
///
/// let hsv = rgb_to_hsv(Color::new(0.0, 1.0, 0.0));
/// assert!((hsv.hue.unwrap() - 1.0 / 3.0).abs() < 1e-6);
/// assert_eq!(hsv.saturation, 1.0);
///
/// assert_eq!(rgb_to_hsv(Color::BLACK).hue, None);
/// ```
pub fn rgb_to_hsv(color: Color) -> Hsv {
    let (r, g, b) = (color.red(), color.green(), color.blue());
    let max = color.max_channel();
    let min = color.min_channel();
    let delta = max - min;

    // Black has no chroma either, so it is split off the gray case
    if delta < ACHROMATIC_EPSILON && max != 0.0 {
        return Hsv {
            hue: Some(0.0),
            saturation: 0.0,
            value: max,
        };
    }
    if max <= 0.0 {
        return Hsv {
            hue: None,
            saturation: 0.0,
            value: max,
        };
    }

    let sector = if r == max {
        6.0 + (g - b) / delta
    } else if g == max {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    let mut hue = sector / 6.0;
    if hue < 0.0 {
        hue += 1.0;
    }
    if hue >= 1.0 {
        hue -= 1.0;
    }

    Hsv {
        hue: Some(hue),
        saturation: delta / max,
        value: max,
    }
}

/// H, S and V as grayscale swatches.
#[inline]
pub fn separate(color: Color) -> [Color; 3] {
    rgb_to_hsv(color).to_array().map(Color::gray)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_primaries_and_secondaries() {
        let cases = [
            (Color::RED, 0.0),
            (Color::new(1.0, 1.0, 0.0), 1.0 / 6.0),
            (Color::GREEN, 2.0 / 6.0),
            (Color::new(0.0, 1.0, 1.0), 3.0 / 6.0),
            (Color::BLUE, 4.0 / 6.0),
            (Color::new(1.0, 0.0, 1.0), 5.0 / 6.0),
        ];
        for (color, hue) in cases {
            let hsv = rgb_to_hsv(color);
            assert_abs_diff_eq!(hsv.hue.unwrap(), hue, epsilon = 1e-6);
            assert_eq!(hsv.saturation, 1.0);
            assert_eq!(hsv.value, 1.0);
        }
    }

    #[test]
    fn test_hue_stays_below_one() {
        // Red max with blue > green lands just under 1
        let hsv = rgb_to_hsv(Color::new(1.0, 0.0, 0.01));
        let h = hsv.hue.unwrap();
        assert!((0.0..1.0).contains(&h));
        assert!(h > 0.99);
    }

    #[test]
    fn test_black_has_no_hue() {
        let hsv = rgb_to_hsv(Color::BLACK);
        assert_eq!(hsv.hue, None);
        assert_eq!(hsv.saturation, 0.0);
        assert_eq!(hsv.value, 0.0);

        let [h, s, v] = separate(Color::BLACK);
        assert!(h.red().is_nan() && h.green().is_nan() && h.blue().is_nan());
        assert_eq!(s, Color::BLACK);
        assert_eq!(v, Color::BLACK);
    }

    #[test]
    fn test_gray_is_achromatic() {
        let hsv = rgb_to_hsv(Color::gray(0.4));
        assert_eq!(hsv.hue, Some(0.0));
        assert_eq!(hsv.saturation, 0.0);
        assert_eq!(hsv.value, 0.4);
    }

    #[test]
    fn test_negative_max_with_chroma_has_no_hue() {
        let hsv = rgb_to_hsv(Color::new(-0.5, -0.2, -0.3));
        assert_eq!(hsv.hue, None);
        assert_eq!(hsv.saturation, 0.0);
        assert_eq!(hsv.value, -0.2);
    }

    #[test]
    fn test_negative_gray_is_achromatic() {
        let hsv = rgb_to_hsv(Color::gray(-0.2));
        assert_eq!(hsv.hue, Some(0.0));
        assert_eq!(hsv.saturation, 0.0);
        assert_eq!(hsv.value, -0.2);

        // Negative zero is still black
        assert_eq!(rgb_to_hsv(Color::gray(-0.0)).hue, None);
    }

    #[test]
    fn test_swatches_are_gray() {
        let [h, s, v] = separate(Color::new(0.8, 0.4, 0.2));
        for swatch in [h, s, v] {
            assert_eq!(swatch.red(), swatch.green());
            assert_eq!(swatch.green(), swatch.blue());
        }
        assert_abs_diff_eq!(s.red(), 0.75, epsilon = 1e-6);
        assert_eq!(v.red(), 0.8);
    }
}
