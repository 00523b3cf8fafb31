//! Rainbow palettes.
//!
//! Fixed, ordered color lists used by [`Fill::Rainbow`](super::Fill::Rainbow).
//! The light palette washes the table body; the medium palette highlights a
//! band on top of it. Lookups wrap around, so any position is valid.

use crate::color::Rgb;

/// Light rainbow tints, red through violet.
pub const LIGHT: [Rgb; 7] = [
    Rgb::from_u32(0xFFD9D9),
    Rgb::from_u32(0xFFE8CC),
    Rgb::from_u32(0xFFF6CC),
    Rgb::from_u32(0xE0F2D9),
    Rgb::from_u32(0xD9EAF7),
    Rgb::from_u32(0xE0DCF5),
    Rgb::from_u32(0xF3DCF0),
];

/// Medium rainbow tones, red through violet.
pub const MEDIUM: [Rgb; 7] = [
    Rgb::from_u32(0xFF9999),
    Rgb::from_u32(0xFFC285),
    Rgb::from_u32(0xFFE680),
    Rgb::from_u32(0xA9DB96),
    Rgb::from_u32(0x8EC3EE),
    Rgb::from_u32(0xA99CDB),
    Rgb::from_u32(0xDB9CD1),
];

/// Which rainbow palette to cycle through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Palette {
    Light,
    Medium,
}

impl Palette {
    pub fn colors(&self) -> &'static [Rgb] {
        match self {
            Palette::Light => &LIGHT,
            Palette::Medium => &MEDIUM,
        }
    }

    /// Color at `position`, wrapping around the palette length.
    pub fn at(&self, position: usize) -> Rgb {
        let colors = self.colors();
        colors[position % colors.len()]
    }
}
