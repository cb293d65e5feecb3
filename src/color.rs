//! Normalized RGBA colors and their markup hex form.

use std::fmt::{self, Write as _};

/// Color with channels normalized to 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::rgb(1.0, 0.92, 0.016);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    /// Opaque color.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Convert a `[u8; 4]` RGBA color to normalized channels.
    pub fn from_rgba8(rgba: [u8; 4]) -> Self {
        Self::rgba(
            rgba[0] as f32 / 255.0,
            rgba[1] as f32 / 255.0,
            rgba[2] as f32 / 255.0,
            rgba[3] as f32 / 255.0,
        )
    }

    /// Channels quantized to bytes, clamped and rounded to nearest.
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
            channel_to_u8(self.a),
        ]
    }

    /// Upper-case `RRGGBBAA` hex, as used inside `<color=#...>` markup.
    pub fn to_hex_rgba(self) -> String {
        let mut s = String::with_capacity(8);
        // Writing into a String cannot fail.
        let _ = self.write_hex_rgba(&mut s);
        s
    }

    /// Append the `RRGGBBAA` hex form to any writer.
    pub fn write_hex_rgba<W: fmt::Write>(self, out: &mut W) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba8();
        write!(out, "{r:02X}{g:02X}{b:02X}{a:02X}")
    }
}

fn channel_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('#')?;
        self.write_hex_rgba(f)
    }
}
