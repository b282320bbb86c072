//! RGB color values as stored by `color_rgb` fields.
//!
//! The color picker writes `[r, g, b]` triples; hand-written card configs
//! may also use `#rrggbb` strings, which the card accepts as well.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors produced when parsing a color
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid hex color '{0}', expected #rrggbb")]
    InvalidHex(String),
    #[error("expected an [r, g, b] array of integers 0-255")]
    InvalidTriple,
}

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the leading `#` is optional)
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(hex.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError::InvalidHex(hex.to_string()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Read a color from a configuration value (`[r, g, b]` or `"#rrggbb"`)
    pub fn from_value(value: &Value) -> Result<Self, ColorError> {
        if let Some(hex) = value.as_str() {
            return Self::from_hex(hex);
        }
        let channels = value.as_array().ok_or(ColorError::InvalidTriple)?;
        if channels.len() != 3 {
            return Err(ColorError::InvalidTriple);
        }
        let mut rgb = [0u8; 3];
        for (slot, channel) in rgb.iter_mut().zip(channels) {
            *slot = channel
                .as_u64()
                .and_then(|c| u8::try_from(c).ok())
                .ok_or(ColorError::InvalidTriple)?;
        }
        Ok(rgb.into())
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        [color.r, color.g, color.b]
    }
}
