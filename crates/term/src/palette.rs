//! Colors shared by every view.

use crate::fb::{CellStyle, Rgb};
use crate::types::Cell;

/// Block colors indexed by grid value. Index 0 is never drawn as a block.
pub const BLOCKS: [Rgb; 8] = [
    Rgb::hex(0x000000),
    Rgb::hex(0xf94144),
    Rgb::hex(0xf3722c),
    Rgb::hex(0xf9c74f),
    Rgb::hex(0x90be6d),
    Rgb::hex(0x43aa8b),
    Rgb::hex(0x577590),
    Rgb::hex(0xf8961e),
];

/// Playfield background
pub const FIELD: Rgb = Rgb::hex(0x0f1828);

pub const SCREEN: Rgb = Rgb::new(0, 0, 0);
pub const ACCENT: Rgb = Rgb::hex(0x43aa8b);
pub const WARN: Rgb = Rgb::hex(0xf94144);

/// Color for a grid value, `None` for empty or unknown values
pub fn block(value: Cell) -> Option<Rgb> {
    match value {
        1..=7 => Some(BLOCKS[value as usize]),
        _ => None,
    }
}

pub fn text() -> CellStyle {
    CellStyle::new(Rgb::new(200, 200, 200), SCREEN)
}

pub fn label() -> CellStyle {
    CellStyle::new(Rgb::new(220, 220, 220), SCREEN).bold()
}

pub fn muted() -> CellStyle {
    CellStyle::new(Rgb::new(120, 120, 130), SCREEN).dim()
}

pub fn border() -> CellStyle {
    CellStyle::new(Rgb::new(200, 200, 200), SCREEN)
}
