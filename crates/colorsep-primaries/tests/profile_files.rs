//! Loading color profiles from YAML files on disk.

use colorsep_primaries::{ColorProfile, Illuminant, PrimariesError, ADOBE_RGB};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_profile(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("monitor")
        .suffix(".yaml")
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_named_profile() {
    let file = write_profile(
        "name: Studio\nred: [0.68, 0.32]\ngreen: [0.265, 0.69]\nblue: [0.15, 0.06]\nilluminant: D65\ngamma: 2.4\n",
    );
    let p = ColorProfile::from_file(file.path()).unwrap();
    assert_eq!(p.name, "Studio");
    assert_eq!(p.gamma, 2.4);
    assert_eq!(p.primaries.w, Illuminant::D65.chromaticity());
    assert!(p.rgb_to_xyz_matrix().is_ok());
}

#[test]
fn test_unnamed_profile_takes_file_stem() {
    let file = write_profile("red: [0.64, 0.33]\ngreen: [0.21, 0.71]\nblue: [0.15, 0.06]\nwhite: [0.3127, 0.3290]\n");
    let p = ColorProfile::from_file(file.path()).unwrap();

    let stem = file.path().file_stem().unwrap().to_string_lossy();
    assert_eq!(p.name, stem);
    assert!(p.name.starts_with("monitor"));
    assert_eq!(p.primaries, ADOBE_RGB.primaries);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");
    assert!(matches!(
        ColorProfile::from_file(&path),
        Err(PrimariesError::ProfileNotFound { .. })
    ));
}

#[test]
fn test_unknown_illuminant_in_file() {
    let file = write_profile("red: [0.64, 0.33]\ngreen: [0.30, 0.60]\nblue: [0.15, 0.06]\nilluminant: D93\n");
    assert!(matches!(
        ColorProfile::from_file(file.path()),
        Err(PrimariesError::UnknownIlluminant { .. })
    ));
}

#[test]
fn test_degenerate_profile_loads_but_fails_derivation() {
    let file = write_profile("red: [0.2, 0.2]\ngreen: [0.4, 0.4]\nblue: [0.3, 0.3]\nilluminant: E\n");
    let p = ColorProfile::from_file(file.path()).unwrap();
    assert!(matches!(
        p.rgb_to_xyz_matrix(),
        Err(PrimariesError::InvalidGeometry { .. })
    ));
}
