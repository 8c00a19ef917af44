//! Golden swatch outputs.
//!
//! Reference swatches were computed in double precision. Packed bytes may
//! differ by one where a channel lands on a rounding boundary.

use colorsep_core::Color;
use colorsep_primaries::SRGB;
use colorsep_separate::{Separation, SeparationKind};

struct Golden {
    input: u32,
    model: SeparationKind,
    swatches: [u32; 3],
}

const GOLDEN: &[Golden] = &[
    Golden { input: 0xE66619, model: SeparationKind::Rgb, swatches: [0xE60000, 0x006600, 0x000019] },
    Golden { input: 0xE66619, model: SeparationKind::Hsv, swatches: [0x101010, 0xE3E3E3, 0xE6E6E6] },
    Golden { input: 0xE66619, model: SeparationKind::YCbCr, swatches: [0x818181, 0x7FB44B, 0xBD427F] },
    Golden { input: 0xE66619, model: SeparationKind::Lab, swatches: [0x3A3A3A, 0xAE517F, 0xBF7F40] },
    Golden { input: 0x3366CC, model: SeparationKind::Hsv, swatches: [0x9C9C9C, 0xBFBFBF, 0xCCCCCC] },
    Golden { input: 0x3366CC, model: SeparationKind::YCbCr, swatches: [0x646464, 0x7F4BB4, 0x629D7F] },
    Golden { input: 0x3366CC, model: SeparationKind::Lab, swatches: [0x2D2D2D, 0x926D7F, 0x457FBA] },
    Golden { input: 0x808080, model: SeparationKind::Hsv, swatches: [0x000000, 0x000000, 0x808080] },
    Golden { input: 0x808080, model: SeparationKind::YCbCr, swatches: [0x7E7E7E, 0x7F8080, 0x807F7F] },
    Golden { input: 0x808080, model: SeparationKind::Lab, swatches: [0x363636, 0x80807F, 0x7F7F80] },
];

fn bytes(rgb: u32) -> [i32; 3] {
    [(rgb >> 16) as i32 & 0xFF, (rgb >> 8) as i32 & 0xFF, rgb as i32 & 0xFF]
}

fn close(a: u32, b: u32) -> bool {
    bytes(a).iter().zip(bytes(b)).all(|(x, y)| (x - y).abs() <= 1)
}

#[test]
fn test_golden_swatches() {
    for g in GOLDEN {
        let sep = Separation::from_kind(g.model, &SRGB).unwrap();
        let out = sep.separate(Color::from_packed(g.input)).map(Color::to_packed);
        for (i, (&got, &want)) in out.iter().zip(&g.swatches).enumerate() {
            assert!(
                close(got, want),
                "{:06X} {} channel {}: got {:06X}, want {:06X}",
                g.input,
                g.model,
                i,
                got,
                want
            );
        }
    }
}
