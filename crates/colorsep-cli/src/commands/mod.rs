//! CLI command implementations

pub mod matrix;
pub mod presets;
pub mod separate;

use crate::ProfileArgs;
use anyhow::{Context, Result};
use colorsep_core::Color;
use colorsep_primaries::{ColorProfile, Illuminant};
use tracing::debug;

/// Parse a color argument
pub fn parse_color(s: &str) -> Result<Color> {
    s.parse::<Color>()
        .with_context(|| format!("Failed to parse color: {}", s))
}

/// Resolve the profile from a preset or file, then apply overrides
pub fn resolve_profile(args: &ProfileArgs) -> Result<ColorProfile> {
    let mut profile = match &args.profile_file {
        Some(path) => ColorProfile::from_file(path)
            .with_context(|| format!("Failed to load profile: {}", path.display()))?,
        None => ColorProfile::by_name(&args.profile)
            .with_context(|| format!("Unknown profile: {}", args.profile))?,
    };

    if let Some(name) = &args.illuminant {
        let illuminant: Illuminant = name
            .parse()
            .with_context(|| format!("Unknown illuminant: {}", name))?;
        debug!(%illuminant, "Overriding white point");
        profile = profile.with_illuminant(illuminant);
    }
    if let Some(gamma) = args.gamma {
        debug!(gamma, "Overriding gamma");
        profile = profile.with_gamma(gamma);
    }

    Ok(profile)
}

/// Format three floats as a fixed-width row
pub fn format_row(values: [f32; 3]) -> String {
    format!("{:>10.6} {:>10.6} {:>10.6}", values[0], values[1], values[2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn profile_args(profile: &str) -> ProfileArgs {
        ProfileArgs {
            profile: profile.to_string(),
            profile_file: None,
            illuminant: None,
            gamma: None,
        }
    }

    #[test]
    fn test_parse_color_forms() {
        assert_eq!(parse_color("#FF0000").unwrap(), Color::RED);
        assert_eq!(parse_color("0000FF").unwrap(), Color::BLUE);
        assert_eq!(parse_color("0,1,0").unwrap(), Color::GREEN);
        assert!(parse_color("red").is_err());
    }

    #[test]
    fn test_resolve_preset_with_overrides() {
        let mut args = profile_args("apple rgb");
        args.illuminant = Some("D50".into());
        args.gamma = Some(2.4);

        let p = resolve_profile(&args).unwrap();
        assert_eq!(p.name, "Apple RGB");
        assert_eq!(p.primaries.w, Illuminant::D50.chromaticity());
        assert_eq!(p.gamma, 2.4);
    }

    #[test]
    fn test_resolve_unknown_names() {
        assert!(resolve_profile(&profile_args("ProPhoto")).is_err());

        let mut args = profile_args("sRGB");
        args.illuminant = Some("D93".into());
        let err = resolve_profile(&args).unwrap_err();
        assert!(format!("{:#}", err).contains("D93"));
    }

    #[test]
    fn test_resolve_profile_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "name: Panel\nred: [0.68, 0.32]\ngreen: [0.265, 0.69]\nblue: [0.15, 0.06]\nilluminant: D65\ngamma: 2.4"
        )
        .unwrap();

        let mut args = profile_args("sRGB");
        args.profile_file = Some(file.path().to_path_buf());
        let p = resolve_profile(&args).unwrap();
        assert_eq!(p.name, "Panel");
        assert_eq!(p.gamma, 2.4);
    }
}
