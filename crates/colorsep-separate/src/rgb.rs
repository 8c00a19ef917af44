//! RGB -> RGB separation: each raw channel shown in isolation.

use colorsep_core::Color;

/// Channel `i` blended from black towards primary `i`.
#[inline]
pub fn separate(color: Color) -> [Color; 3] {
    [
        Color::blend(Color::BLACK, Color::RED, color.red()),
        Color::blend(Color::BLACK, Color::GREEN, color.green()),
        Color::blend(Color::BLACK, Color::BLUE, color.blue()),
    ]
}
