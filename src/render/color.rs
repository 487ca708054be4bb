//! Line colors.
//!
//! Every vertical line takes its color from a small fixed palette, cycling
//! by line index, so the walker dot and its column always match.

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0, a: 255 };
    pub const WHITE: Self = Self { r: 255, g: 255, b: 255, a: 255 };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same color with a new alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// `#rrggbb` form, used in logs.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Line palette, saturated enough to read on both light and dark boards.
pub const PALETTE: &[Rgba] = &[
    Rgba::rgb(0xe5, 0x39, 0x35), // red
    Rgba::rgb(0x1e, 0x88, 0xe5), // blue
    Rgba::rgb(0x43, 0xa0, 0x47), // green
    Rgba::rgb(0xfb, 0x8c, 0x00), // orange
    Rgba::rgb(0x8e, 0x24, 0xaa), // purple
    Rgba::rgb(0x00, 0xac, 0xc1), // cyan
    Rgba::rgb(0xd8, 0x1b, 0x60), // pink
    Rgba::rgb(0x6d, 0x4c, 0x41), // brown
];

/// Palette entry for a line position (wraps around).
#[inline]
pub fn palette_color(index: usize) -> Rgba {
    PALETTE[index % PALETTE.len()]
}
