use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FigureError, FigureResult};

use super::named_colors::NAMED_COLORS;

/// RGBA color in normalized 0..=1 channel values.
///
/// Serialized as a CSS `rgba(r, g, b, a)` string with 0..=255 color channels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb8(0, 0, 0);
    pub const BLUE: Self = Self::rgb8(0, 0, 255);
    pub const RED: Self = Self::rgb8(255, 0, 0);
    pub const FUCHSIA: Self = Self::rgb8(255, 0, 255);
    pub const DEEP_SKY_BLUE: Self = Self::rgb8(0, 191, 255);
    pub const LIGHT_SLATE_GRAY: Self = Self::rgb8(119, 136, 153);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    pub fn validate(self) -> FigureResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(FigureError::InvalidConfig(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn to_css(self) -> String {
        let byte = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "rgba({}, {}, {}, {})",
            byte(self.red),
            byte(self.green),
            byte(self.blue),
            self.alpha
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_css()
    }
}

impl TryFrom<String> for Color {
    type Error = FigureError;

    fn try_from(value: String) -> FigureResult<Self> {
        value.parse()
    }
}

impl FromStr for Color {
    type Err = FigureError;

    /// Parses `rgb(r, g, b)`, `rgba(r, g, b, a)`, `#rgb`, `#rrggbb`,
    /// `#rrggbbaa` or a CSS color keyword, case-insensitively.
    fn from_str(input: &str) -> FigureResult<Self> {
        let invalid = || FigureError::InvalidConfig(format!("unsupported css color `{input}`"));
        let trimmed = input.trim().to_ascii_lowercase();
        let color = if let Some(hex) = trimmed.strip_prefix('#') {
            parse_hex(hex).ok_or_else(invalid)?
        } else if let Some(rest) = trimmed.strip_prefix("rgba(") {
            parse_functional(rest, true).ok_or_else(invalid)?
        } else if let Some(rest) = trimmed.strip_prefix("rgb(") {
            parse_functional(rest, false).ok_or_else(invalid)?
        } else if trimmed == "transparent" {
            Self::rgba(0.0, 0.0, 0.0, 0.0)
        } else {
            let index = NAMED_COLORS
                .binary_search_by(|(name, _)| (*name).cmp(trimmed.as_str()))
                .map_err(|_| invalid())?;
            let [r, g, b] = NAMED_COLORS[index].1;
            Self::rgb8(r, g, b)
        };
        color.validate()?;
        Ok(color)
    }
}

fn parse_functional(body: &str, expects_alpha: bool) -> Option<Color> {
    let parts = body
        .strip_suffix(')')?
        .split(',')
        .map(|part| part.trim().parse::<f64>().ok())
        .collect::<Option<Vec<_>>>()?;
    match (parts.as_slice(), expects_alpha) {
        ([r, g, b, a], true) => Some(Color::rgba(r / 255.0, g / 255.0, b / 255.0, *a)),
        ([r, g, b], false) => Some(Color::rgb(r / 255.0, g / 255.0, b / 255.0)),
        _ => None,
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok();
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => Some(Color::rgb8(digit(0)? * 17, digit(1)? * 17, digit(2)? * 17)),
        6 => Some(Color::rgb8(byte(0)?, byte(2)?, byte(4)?)),
        8 => {
            let alpha = f64::from(byte(6)?) / 255.0;
            Some(Color::rgba(
                f64::from(byte(0)?) / 255.0,
                f64::from(byte(2)?) / 255.0,
                f64::from(byte(4)?) / 255.0,
                alpha,
            ))
        }
        _ => None,
    }
}

/// Stroke used for curves, secants and rectangle outlines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: Color,
    pub width: f64,
}

impl LineStyle {
    #[must_use]
    pub const fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }

    pub fn validate(self) -> FigureResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(FigureError::InvalidConfig(
                "line width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Fill and diameter of point markers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub color: Color,
    pub size: f64,
}

impl MarkerStyle {
    #[must_use]
    pub const fn new(color: Color, size: f64) -> Self {
        Self { color, size }
    }

    pub fn validate(self) -> FigureResult<()> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(FigureError::InvalidConfig(
                "marker size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
