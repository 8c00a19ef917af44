//! Separate command
//!
//! Prints the model components of a color and the hex swatch for each
//! channel.

use crate::SeparateArgs;
use anyhow::{Context, Result};
use colorsep_core::Color;
use colorsep_primaries::ColorProfile;
use colorsep_separate::{Separation, SeparationKind};
use tracing::{debug, info, trace};

/// One output line: channel name, raw component, swatch.
pub struct ChannelRow {
    pub name: &'static str,
    pub value: f32,
    pub swatch: Color,
}

pub fn run(args: SeparateArgs, verbose: u8) -> Result<()> {
    let color = super::parse_color(&args.color)?;
    trace!(input = %args.color, %color, "separate");

    let kinds: Vec<SeparationKind> = if args.all {
        SeparationKind::ALL.to_vec()
    } else {
        vec![args.model]
    };

    // Only Lab reads the profile
    let profile = if kinds.iter().any(|k| k.is_parameterized()) {
        Some(super::resolve_profile(&args.profile)?)
    } else {
        None
    };

    println!("Input   {}  {}", color.to_hex(), color);

    for kind in kinds {
        let separation = build(kind, profile.as_ref())?;
        info!(model = %kind, "Separating");

        println!();
        match (&separation, &profile) {
            (Separation::Lab(lab), Some(p)) => {
                println!("Model   {} ({}, gamma {})", kind, p.name, lab.params().gamma)
            }
            _ => println!("Model   {}", kind),
        }
        for row in rows(&separation, color) {
            println!("  {:<3} {:>10.4}   {}", row.name, row.value, row.swatch.to_hex());
        }
    }

    if verbose > 0 {
        println!();
        println!("Done.");
    }
    Ok(())
}

fn build(kind: SeparationKind, profile: Option<&ColorProfile>) -> Result<Separation> {
    let fallback = ColorProfile::default();
    let profile = profile.unwrap_or(&fallback);
    debug!(model = %kind, profile = %profile.name, "Building separation");
    Separation::from_kind(kind, profile)
        .with_context(|| format!("Failed to build {} separation for {}", kind, profile.name))
}

/// Components and swatches of `color`, in channel order.
pub fn rows(separation: &Separation, color: Color) -> Vec<ChannelRow> {
    let names = separation.kind().channel_names();
    let values = separation.components(color);
    let swatches = separation.separate(color);
    (0..3)
        .map(|i| ChannelRow {
            name: names[i],
            value: values[i],
            swatch: swatches[i],
        })
        .collect()
}
