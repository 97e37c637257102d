//! Color types and the RGB565 wire format.
//!
//! The composition substrate rasterizes into packed RGB565 (5 bits red,
//! 6 bits green, 5 bits blue), the native format of the hardware panel.
//! The software backend expands to ARGB8888 for its streaming texture.

use serde::Deserialize;

/// A color in RGBA format (0-255 per channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Build an opaque color from a `0xRRGGBB` literal.
    pub const fn hex(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Pack into RGB565. Low bits of each channel are discarded.
    pub const fn to_rgb565(self) -> u16 {
        ((self.r as u16 & 0xF8) << 8) | ((self.g as u16 & 0xFC) << 3) | (self.b as u16 >> 3)
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let rgb = u32::deserialize(deserializer)?;
        Ok(Color::hex(rgb))
    }
}

/// Expand one packed RGB565 pixel to opaque ARGB8888.
///
/// Each channel is widened by replicating its high bits into the vacated low
/// bits (`v << shift | v >> (bits - shift)`), so full-scale input maps to
/// full-scale output and no banding step is introduced at the top of the
/// range. The top 5 (or 6) bits of each output channel equal the source bits
/// exactly; only the replicated low bits are approximate.
pub const fn expand_rgb565(c: u16) -> u32 {
    let r = ((c >> 11) & 0x1F) as u32;
    let g = ((c >> 5) & 0x3F) as u32;
    let b = (c & 0x1F) as u32;
    let r = (r << 3) | (r >> 2);
    let g = (g << 2) | (g >> 4);
    let b = (b << 3) | (b >> 2);
    0xFF00_0000 | (r << 16) | (g << 8) | b
}
