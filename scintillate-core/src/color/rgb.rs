use std::fmt;
use std::str::FromStr;

use crate::foundation::error::ScintillateError;

/// Opaque sRGB color. Serialized as `#RRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Color from 8-bit channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uppercase `#RRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Straight linear blend in sRGB space, `t` clamped to `[0, 1]`.
    pub fn mix(self, other: Color, t: f64) -> Color {
        fn mix_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        Color {
            r: mix_u8(self.r, other.r, t),
            g: mix_u8(self.g, other.g, t),
            b: mix_u8(self.b, other.b, t),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ScintillateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s).map_err(ScintillateError::validation)
    }
}

fn parse_hex(s: &str) -> Result<Color, String> {
    let s = s.trim();
    let digits = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if digits.len() != 6 || !digits.is_ascii() {
        return Err(format!("color \"{s}\" must be #RRGGBB (case-insensitive)"));
    }
    Ok(Color {
        r: hex_byte(&digits[0..2])?,
        g: hex_byte(&digits[2..4])?,
        b: hex_byte(&digits[4..6])?,
    })
}

impl serde::Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/rgb.rs"]
mod tests;
