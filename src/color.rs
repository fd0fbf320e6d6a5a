use std::fmt;
use std::str::FromStr;

use egui::Color32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("Color must start with '#': {0:?}")]
    MissingHash(String),

    #[error("Color must have exactly six hex digits: {0:?}")]
    InvalidLength(String),

    #[error("Invalid hex digit in color: {0:?}")]
    InvalidDigit(String),
}

/// An opaque RGB color written as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(Color32);

impl HexColor {
    pub const BLACK: Self = Self::from_rgb(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::from_rgb(0xFF, 0xFF, 0xFF);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(Color32::from_rgb(r, g, b))
    }

    /// Drops any alpha, the color stays opaque.
    pub fn from_color32(color: Color32) -> Self {
        Self::from_rgb(color.r(), color.g(), color.b())
    }

    pub fn color32(self) -> Color32 {
        self.0
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0.r(), self.0.g(), self.0.b())
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for HexColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_owned()))?;
        if digits.len() != 6 {
            return Err(ColorParseError::InvalidLength(s.to_owned()));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorParseError::InvalidDigit(s.to_owned()))?;
        // from_str_radix tolerates a leading '+'
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(s.to_owned()));
        }
        let [_, r, g, b] = value.to_be_bytes();
        Ok(Self::from_rgb(r, g, b))
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_hex()
    }
}

impl From<HexColor> for Color32 {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// The preset swatches shown under the toolbar.
pub const DEFAULT_PALETTE: [HexColor; 16] = [
    HexColor::from_rgb(0x00, 0x00, 0x00),
    HexColor::from_rgb(0xFF, 0x00, 0x00),
    HexColor::from_rgb(0x00, 0xFF, 0x00),
    HexColor::from_rgb(0x00, 0x00, 0xFF),
    HexColor::from_rgb(0xFF, 0xFF, 0x00),
    HexColor::from_rgb(0xFF, 0x00, 0xFF),
    HexColor::from_rgb(0x00, 0xFF, 0xFF),
    HexColor::from_rgb(0xFF, 0xA5, 0x00),
    HexColor::from_rgb(0x80, 0x00, 0x80),
    HexColor::from_rgb(0xFF, 0xC0, 0xCB),
    HexColor::from_rgb(0xA5, 0x2A, 0x2A),
    HexColor::from_rgb(0x80, 0x80, 0x80),
    HexColor::from_rgb(0x00, 0x00, 0x80),
    HexColor::from_rgb(0x00, 0x80, 0x00),
    HexColor::from_rgb(0xFF, 0x69, 0xB4),
    HexColor::from_rgb(0x87, 0xCE, 0xEB),
];
