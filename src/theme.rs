use crate::error::RulerError;
use serde::{Deserialize, Serialize};

/// Straight (non premultiplied) RGBA color, 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ColorInput", into = "ColorInput")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channels given as 0-255 values, clamped.
    pub fn from_tuple(channels: &[f64]) -> Result<Self, RulerError> {
        let clamp = |v: f64| -> Result<u8, RulerError> {
            if v.is_nan() {
                return Err(RulerError::UnrecognizedColor(format!("{:?}", channels)));
            }
            Ok(v.clamp(0.0, 255.0).round() as u8)
        };
        match channels {
            [r, g, b] => Ok(Self::rgb(clamp(*r)?, clamp(*g)?, clamp(*b)?)),
            [r, g, b, a] => Ok(Self::rgba(clamp(*r)?, clamp(*g)?, clamp(*b)?, clamp(*a)?)),
            _ => Err(RulerError::UnrecognizedColor(format!("{:?}", channels))),
        }
    }

    /// Channels given as 0.0-1.0 floats.
    pub fn from_unit(red: f64, green: f64, blue: f64, alpha: f64) -> Result<Self, RulerError> {
        Self::from_tuple(&[red * 255.0, green * 255.0, blue * 255.0, alpha * 255.0])
    }

    /// `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> Result<Self, RulerError> {
        let bad = || RulerError::UnrecognizedColor(hex.to_string());
        let digits = hex.strip_prefix('#').ok_or_else(bad)?;
        if !digits.is_ascii() || !(digits.len() == 6 || digits.len() == 8) {
            return Err(bad());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| bad());
        let a = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }

    /// Packed `0xAARRGGBB`, the layout of [`crate::buffer::OffscreenBuffer`].
    pub fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    pub fn from_argb(pixel: u32) -> Self {
        Self::rgba(
            (pixel >> 16) as u8,
            (pixel >> 8) as u8,
            pixel as u8,
            (pixel >> 24) as u8,
        )
    }
}

/// Accepted spellings of a color in configuration files.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorInput {
    Hex(String),
    Tuple(Vec<f64>),
    Rgba {
        red: f64,
        green: f64,
        blue: f64,
        #[serde(default = "opaque")]
        alpha: f64,
    },
}

fn opaque() -> f64 {
    1.0
}

impl TryFrom<ColorInput> for Color {
    type Error = RulerError;

    fn try_from(input: ColorInput) -> Result<Self, Self::Error> {
        match input {
            ColorInput::Hex(hex) => Color::from_hex(&hex),
            ColorInput::Tuple(channels) => Color::from_tuple(&channels),
            ColorInput::Rgba {
                red,
                green,
                blue,
                alpha,
            } => Color::from_unit(red, green, blue, alpha),
        }
    }
}

impl From<Color> for ColorInput {
    fn from(c: Color) -> Self {
        ColorInput::Hex(format!("#{:02x}{:02x}{:02x}{:02x}", c.r, c.g, c.b, c.a))
    }
}

/// Colors used by the ruler, injected instead of read from a UI theme.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    pub background: Color,
    /// Ticks and labels.
    pub foreground: Color,
    /// Even frame bands.
    pub active: Color,
    /// Odd frame bands.
    pub selected: Color,
    pub playhead: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            // #393f3f, Adwaita dark
            background: Color::rgb(57, 63, 63),
            foreground: Color::rgb(238, 238, 236),
            active: Color::rgb(45, 50, 50),
            selected: Color::rgb(74, 144, 217),
            playhead: Color::rgb(255, 0, 0),
        }
    }
}

impl ColorScheme {
    /// Band color for a [`crate::frames::FrameBand::color_index`].
    pub fn band(&self, color_index: usize) -> Color {
        if color_index % 2 == 0 {
            self.active
        } else {
            self.selected
        }
    }
}
