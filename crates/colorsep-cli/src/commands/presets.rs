//! Presets command

use anyhow::Result;
use colorsep_primaries::{Illuminant, PROFILES};
use colorsep_separate::SeparationKind;

pub fn run(verbose: u8) -> Result<()> {
    println!("Profiles");
    println!(
        "  {:<12} {:>15} {:>15} {:>15} {:>15} {:>6}",
        "name", "red", "green", "blue", "white", "gamma"
    );
    for p in &PROFILES {
        let c = &p.primaries;
        println!(
            "  {:<12} {:>15} {:>15} {:>15} {:>15} {:>6}",
            p.name,
            xy(c.r.x, c.r.y),
            xy(c.g.x, c.g.y),
            xy(c.b.x, c.b.y),
            xy(c.w.x, c.w.y),
            p.gamma
        );
    }

    println!();
    println!("Illuminants");
    for i in Illuminant::ALL {
        let w = i.chromaticity();
        println!("  {:<6} {}", i.name(), xy(w.x, w.y));
    }

    if verbose > 0 {
        println!();
        println!("Models");
        for kind in SeparationKind::ALL {
            println!("  {:<6} {}", kind.name(), kind.channel_names().join(", "));
        }
    }
    Ok(())
}

fn xy(x: f32, y: f32) -> String {
    format!("({:.4}, {:.4})", x, y)
}
