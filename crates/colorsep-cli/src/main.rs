//! colorsep - Colorimetric channel separation CLI
//!
//! Shows how a color decomposes into RGB, HSV, YCbCr or Lab channels.

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use colorsep_separate::SeparationKind;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "colorsep")]
#[command(author, version, about = "Colorimetric channel separation")]
#[command(long_about = "
Decomposes a color into the three channels of another color model and
renders each channel as a displayable RGB swatch.

Examples:
  colorsep separate '#E66619'                 # RGB channels
  colorsep separate 0.9,0.4,0.1 -m hsv
  colorsep separate E66619 -m lab -p 'Adobe RGB' -i D50
  colorsep separate E66619 --all              # Every model
  colorsep matrix -p 'Wide Gamut' --inverse   # Derived RGB->XYZ matrix
  colorsep matrix --profile-file monitor.yaml
  colorsep presets                            # Profiles and illuminants
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Separate a color into model channels
    #[command(visible_alias = "s")]
    Separate(SeparateArgs),

    /// Print the RGB->XYZ matrix for a profile
    #[command(visible_alias = "m")]
    Matrix(MatrixArgs),

    /// List preset profiles and illuminants
    Presets,
}

/// Color space selection shared by `separate` and `matrix`.
#[derive(Args, Clone)]
struct ProfileArgs {
    /// Preset profile: sRGB, Adobe RGB, Apple RGB, CIE RGB, Wide Gamut, PAL/SECAM
    #[arg(short, long, default_value = "sRGB", conflicts_with = "profile_file")]
    profile: String,

    /// Load the profile from a YAML file instead of a preset
    #[arg(long, value_name = "PATH")]
    profile_file: Option<PathBuf>,

    /// Replace the white point: A, B, C, D50, D55, D65, D75, 9300K, E, F2, F7, F11
    #[arg(short, long)]
    illuminant: Option<String>,

    /// Replace the decoding gamma
    #[arg(short, long)]
    gamma: Option<f32>,
}

/// Arguments for the `separate` command.
#[derive(Args)]
struct SeparateArgs {
    /// Color as #RRGGBB, RRGGBB or r,g,b floats
    color: String,

    /// Color model: rgb, hsv, ycbcr, lab
    #[arg(short, long, default_value = "rgb")]
    model: SeparationKind,

    /// Separate into every model
    #[arg(short, long, conflicts_with = "model")]
    all: bool,

    #[command(flatten)]
    profile: ProfileArgs,
}

/// Arguments for the `matrix` command.
#[derive(Args)]
struct MatrixArgs {
    #[command(flatten)]
    profile: ProfileArgs,

    /// Also print the XYZ->RGB inverse
    #[arg(long)]
    inverse: bool,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Separate(args) => commands::separate::run(args, cli.verbose),
        Commands::Matrix(args) => commands::matrix::run(args, cli.verbose),
        Commands::Presets => commands::presets::run(cli.verbose),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_separate() {
        let cli = Cli::try_parse_from([
            "colorsep", "-vv", "separate", "#FF8000", "-m", "lab", "-p", "adobe rgb", "-i", "d50",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Separate(args) = cli.command else {
            panic!("expected separate");
        };
        assert_eq!(args.model, SeparationKind::Lab);
        assert_eq!(args.profile.profile, "adobe rgb");
        assert_eq!(args.profile.illuminant.as_deref(), Some("d50"));
    }

    #[test]
    fn test_parse_rejects_unknown_model() {
        assert!(Cli::try_parse_from(["colorsep", "separate", "FFFFFF", "-m", "cmyk"]).is_err());
    }

    #[test]
    fn test_profile_and_file_conflict() {
        let res = Cli::try_parse_from([
            "colorsep", "matrix", "-p", "sRGB", "--profile-file", "x.yaml",
        ]);
        assert!(res.is_err());
    }
}
