//! Error types for primaries, illuminants and profile loading.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for primaries operations.
pub type PrimariesResult<T> = Result<T, PrimariesError>;

/// Errors that can occur while deriving matrices or loading profiles.
#[derive(Debug, Error)]
pub enum PrimariesError {
    /// The chromaticities do not define a usable RGB space.
    ///
    /// Raised when the primaries are collinear, a `y` coordinate is zero, or
    /// the derived matrix contains non-finite values.
    #[error("invalid color space geometry: {reason}")]
    InvalidGeometry {
        /// What made the geometry unusable.
        reason: String,
    },

    /// Illuminant name not in the preset table.
    #[error("unknown illuminant: {name}")]
    UnknownIlluminant {
        /// The requested name.
        name: String,
    },

    /// Color profile name not in the preset table.
    #[error("unknown color profile: {name}")]
    UnknownProfile {
        /// The requested name.
        name: String,
    },

    /// Profile file sets both or neither of `white` and `illuminant`.
    #[error("profile must set exactly one of 'white' or 'illuminant'")]
    WhitePoint,

    /// Profile file not found.
    #[error("profile file not found: {path}")]
    ProfileNotFound {
        /// Path that was searched.
        path: PathBuf,
    },

    /// I/O error reading a profile file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl PrimariesError {
    /// Creates an [`PrimariesError::InvalidGeometry`] error.
    #[inline]
    pub fn invalid_geometry(reason: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            reason: reason.into(),
        }
    }
}
