use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::ShotframeError;

/// Straight-alpha sRGB color parsed from a CSS-style hex string.
///
/// Colors are parsed once at the settings boundary; rendering never sees an unparseable color.
/// Accepted forms are `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa` (case-insensitive, `#` optional).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (straight, not premultiplied).
    pub a: u8,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque color from 8-bit channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from 8-bit channels including straight alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Return the same color with its alpha multiplied by `factor / 255`.
    ///
    /// Used for translucent washes: an opaque input ends up with exactly `factor` as alpha.
    pub fn with_alpha_scaled(self, factor: u8) -> Self {
        let a = ((u16::from(self.a) * u16::from(factor) + 127) / 255) as u8;
        Self { a, ..self }
    }

    /// Convert to premultiplied RGBA8.
    pub fn to_rgba8_premul(self) -> Rgba8Premul {
        Rgba8Premul::from_straight_rgba(self.r, self.g, self.b, self.a)
    }

    /// Canonical lowercase hex form; the alpha pair is omitted for opaque colors.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ShotframeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s).map_err(ShotframeError::validation)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_hex(&s).map_err(serde::de::Error::custom)
    }
}

fn parse_hex(s: &str) -> Result<Color, String> {
    let raw = s.trim();
    let digits = raw.strip_prefix('#').unwrap_or(raw);
    if !digits.is_ascii() {
        return Err(format!("invalid color \"{raw}\""));
    }

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    fn hex_nibble(c: &str) -> Result<u8, String> {
        let v = u8::from_str_radix(c, 16).map_err(|_| format!("invalid hex digit \"{c}\""))?;
        Ok(v * 17)
    }

    match digits.len() {
        3 | 4 => {
            let r = hex_nibble(&digits[0..1])?;
            let g = hex_nibble(&digits[1..2])?;
            let b = hex_nibble(&digits[2..3])?;
            let a = if digits.len() == 4 {
                hex_nibble(&digits[3..4])?
            } else {
                255
            };
            Ok(Color::rgba(r, g, b, a))
        }
        6 | 8 => {
            let r = hex_byte(&digits[0..2])?;
            let g = hex_byte(&digits[2..4])?;
            let b = hex_byte(&digits[4..6])?;
            let a = if digits.len() == 8 {
                hex_byte(&digits[6..8])?
            } else {
                255
            };
            Ok(Color::rgba(r, g, b, a))
        }
        _ => Err(format!(
            "color \"{raw}\" must be #RGB, #RGBA, #RRGGBB or #RRGGBBAA (case-insensitive)"
        )),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/color.rs"]
mod tests;
