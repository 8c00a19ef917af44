//! Separation model names.

use crate::SeparationError;
use std::fmt;
use std::str::FromStr;

/// Which color model a separation targets, without its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SeparationKind {
    /// Raw R, G, B.
    #[default]
    Rgb,
    /// Hue, saturation, value.
    Hsv,
    /// Luma and two chroma differences.
    YCbCr,
    /// CIE L*a*b*.
    Lab,
}

impl SeparationKind {
    /// All models, in display order.
    pub const ALL: [SeparationKind; 4] = [Self::Rgb, Self::Hsv, Self::YCbCr, Self::Lab];

    /// Lowercase identifier used on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Hsv => "hsv",
            Self::YCbCr => "ycbcr",
            Self::Lab => "lab",
        }
    }

    /// Output channel names, in output order.
    pub const fn channel_names(self) -> [&'static str; 3] {
        match self {
            Self::Rgb => ["R", "G", "B"],
            Self::Hsv => ["H", "S", "V"],
            Self::YCbCr => ["Y", "Cb", "Cr"],
            Self::Lab => ["L", "a", "b"],
        }
    }

    /// True if construction needs [`LabParams`](crate::LabParams).
    pub const fn is_parameterized(self) -> bool {
        matches!(self, Self::Lab)
    }
}

impl fmt::Display for SeparationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SeparationKind {
    type Err = SeparationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rgb" => Ok(Self::Rgb),
            "hsv" | "hsb" => Ok(Self::Hsv),
            "ycbcr" | "ycc" => Ok(Self::YCbCr),
            "lab" | "cielab" => Ok(Self::Lab),
            _ => Err(SeparationError::UnknownModel {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("RGB".parse::<SeparationKind>().unwrap(), SeparationKind::Rgb);
        assert_eq!("YCbCr".parse::<SeparationKind>().unwrap(), SeparationKind::YCbCr);
        assert_eq!("hsb".parse::<SeparationKind>().unwrap(), SeparationKind::Hsv);
        assert!(matches!(
            "cmyk".parse::<SeparationKind>(),
            Err(SeparationError::UnknownModel { .. })
        ));
    }

    #[test]
    fn test_display_roundtrip() {
        for kind in SeparationKind::ALL {
            assert_eq!(kind.to_string().parse::<SeparationKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_channel_names() {
        assert_eq!(SeparationKind::Lab.channel_names(), ["L", "a", "b"]);
        assert!(SeparationKind::Lab.is_parameterized());
        assert!(!SeparationKind::Hsv.is_parameterized());
    }
}
