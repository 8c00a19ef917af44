//! Error types for separation construction and buffer processing.
//!
//! Per-pixel transforms never fail. Errors come from building a Lab
//! separation out of unusable chromaticities, from unknown model names, and
//! from pixel buffers that do not match their dimensions.

use colorsep_primaries::PrimariesError;
use thiserror::Error;

/// Separation error.
#[derive(Debug, Error)]
pub enum SeparationError {
    /// Lab parameters do not define an invertible RGB space.
    #[error("invalid color space geometry: {reason}")]
    InvalidGeometry {
        /// What made the geometry unusable.
        reason: String,
    },

    /// Model name not recognized.
    #[error("unknown color model '{name}' (expected rgb, hsv, ycbcr or lab)")]
    UnknownModel {
        /// The requested name.
        name: String,
    },

    /// Profile or illuminant lookup failed.
    #[error(transparent)]
    Primaries(PrimariesError),

    /// Buffer or parse error from colorsep-core.
    #[error(transparent)]
    Core(#[from] colorsep_core::Error),
}

impl From<PrimariesError> for SeparationError {
    fn from(err: PrimariesError) -> Self {
        match err {
            PrimariesError::InvalidGeometry { reason } => Self::InvalidGeometry { reason },
            other => Self::Primaries(other),
        }
    }
}

/// Result type for separation operations.
pub type SeparationResult<T> = Result<T, SeparationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_error_is_lifted() {
        let err: SeparationError = PrimariesError::invalid_geometry("collinear").into();
        assert!(matches!(err, SeparationError::InvalidGeometry { ref reason } if reason == "collinear"));
    }

    #[test]
    fn test_other_primaries_errors_pass_through() {
        let err: SeparationError = PrimariesError::UnknownIlluminant {
            name: "D93".into(),
        }
        .into();
        assert!(matches!(err, SeparationError::Primaries(_)));
        assert!(err.to_string().contains("D93"));
    }
}
