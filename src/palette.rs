// Fixed set of colors particles are painted with

use crate::color::Color;
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Palette {
    pub colors: [Color; 4],
}

impl Palette {
    /// Blue, red, yellow and green at 60% opacity.
    pub const BRAND: Palette = Palette {
        colors: [
            Color::from_u32(0x4285_f499),
            Color::from_u32(0xea43_3599),
            Color::from_u32(0xfbbc_0599),
            Color::from_u32(0x34a8_5399),
        ],
    };

    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        // colors is never empty
        *self.colors.choose(rng).unwrap_or(&self.colors[0])
    }

    pub fn contains(&self, color: &Color) -> bool {
        self.colors.contains(color)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::BRAND
    }
}
