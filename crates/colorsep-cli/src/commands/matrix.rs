//! Matrix command
//!
//! Prints the RGB->XYZ matrix derived from a profile's chromaticities.

use crate::MatrixArgs;
use anyhow::{Context, Result};
use colorsep_math::Mat3;
use colorsep_primaries::ColorProfile;
use tracing::{debug, info};

pub fn run(args: MatrixArgs, verbose: u8) -> Result<()> {
    let profile = super::resolve_profile(&args.profile)?;
    info!(profile = %profile.name, "Deriving RGB->XYZ matrix");

    let m = derive(&profile)?;
    let p = &profile.primaries;

    println!("Profile  {}", profile.name);
    println!("Gamma    {}", profile.gamma);
    println!(
        "Red      ({:.4}, {:.4})   Green ({:.4}, {:.4})   Blue ({:.4}, {:.4})",
        p.r.x, p.r.y, p.g.x, p.g.y, p.b.x, p.b.y
    );
    println!("White    ({:.4}, {:.4})", p.w.x, p.w.y);
    println!();
    println!("RGB -> XYZ");
    print_matrix(&m);
    println!();
    println!("White XYZ {}", super::format_row(p.white_xyz().to_array()));

    if args.inverse {
        let inv = m
            .inverse()
            .context("RGB->XYZ matrix has no inverse")?;
        debug!("Inverted matrix");
        println!();
        println!("XYZ -> RGB");
        print_matrix(&inv);
    }

    if verbose > 0 {
        println!();
        println!("Determinant {:.6}", m.determinant());
    }
    Ok(())
}

fn derive(profile: &ColorProfile) -> Result<Mat3> {
    profile
        .rgb_to_xyz_matrix()
        .with_context(|| format!("Failed to derive matrix for {}", profile.name))
}

fn print_matrix(m: &Mat3) {
    for i in 0..3 {
        println!("  {}", super::format_row(m.row(i).to_array()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colorsep_math::Vec3;
    use colorsep_primaries::{Chromaticity, SRGB};

    #[test]
    fn test_derive_srgb() {
        let m = derive(&SRGB).unwrap();
        let white = m * Vec3::ONE;
        assert!((white.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_derive_collinear_fails_with_context() {
        let profile = SRGB.with_white_point(Chromaticity::new(0.3127, 0.3290));
        assert!(derive(&profile).is_ok());

        let mut bad = profile;
        bad.primaries.g = Chromaticity::new(0.395, 0.195);
        let err = derive(&bad).unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("sRGB"));
        assert!(msg.contains("geometry"));
    }
}
