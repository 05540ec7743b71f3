//! Stroke and text styles for every element of the dial.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ClockError;
use crate::face::theme::Theme;

pub const RING_STROKE: f64 = 10.0;
pub const BIG_SCALE_STROKE: f64 = 7.0;
pub const BIG_SCALE_LEN: f64 = 40.0;
pub const SMALL_SCALE_STROKE: f64 = 4.0;
pub const SMALL_SCALE_LEN: f64 = 20.0;
pub const HOUR_STROKE: f64 = 25.0;
pub const MINUTE_STROKE: f64 = 15.0;
pub const SECOND_STROKE: f64 = 8.0;
pub const TEXT_SIZE: f64 = 50.0;

/// An opaque 24-bit colour. Serialized as `"#rrggbb"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl FromStr for Rgb {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ClockError::InvalidColor(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ClockError::InvalidColor(s.to_string()))
        };
        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ClockError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    Butt,
    Round,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgb,
    pub stroke_width: f64,
    pub stroke_cap: StrokeCap,
    pub anti_alias: bool,
}

impl StrokeStyle {
    fn new(color: Rgb, stroke_width: f64, stroke_cap: StrokeCap) -> Self {
        Self {
            color,
            stroke_width,
            stroke_cap,
            anti_alias: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: Rgb,
    pub text_size: f64,
    pub anti_alias: bool,
}

/// Optional colour overrides, one per element. Absent entries use the theme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorOverrides {
    pub ring_color: Option<Rgb>,
    pub big_scale_color: Option<Rgb>,
    pub small_scale_color: Option<Rgb>,
    pub hour_color: Option<Rgb>,
    pub minute_color: Option<Rgb>,
    pub second_color: Option<Rgb>,
    pub text_color: Option<Rgb>,
}

/// The seven element styles, built once and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockStyle {
    pub ring: StrokeStyle,
    pub big_scale: StrokeStyle,
    pub small_scale: StrokeStyle,
    pub hour: StrokeStyle,
    pub minute: StrokeStyle,
    pub second: StrokeStyle,
    pub text: TextStyle,
}

impl ClockStyle {
    pub fn from_overrides(colors: &ColorOverrides) -> Self {
        Self {
            ring: StrokeStyle::new(colors.ring_color.unwrap_or(Theme::RING), RING_STROKE, StrokeCap::Butt),
            big_scale: StrokeStyle::new(
                colors.big_scale_color.unwrap_or(Theme::BIG_SCALE),
                BIG_SCALE_STROKE,
                StrokeCap::Butt,
            ),
            small_scale: StrokeStyle::new(
                colors.small_scale_color.unwrap_or(Theme::SMALL_SCALE),
                SMALL_SCALE_STROKE,
                StrokeCap::Butt,
            ),
            hour: StrokeStyle::new(colors.hour_color.unwrap_or(Theme::HOUR_HAND), HOUR_STROKE, StrokeCap::Round),
            minute: StrokeStyle::new(
                colors.minute_color.unwrap_or(Theme::MINUTE_HAND),
                MINUTE_STROKE,
                StrokeCap::Round,
            ),
            second: StrokeStyle::new(
                colors.second_color.unwrap_or(Theme::SECOND_HAND),
                SECOND_STROKE,
                StrokeCap::Round,
            ),
            text: TextStyle {
                color: colors.text_color.unwrap_or(Theme::NUMBERS),
                text_size: TEXT_SIZE,
                anti_alias: true,
            },
        }
    }
}

impl Default for ClockStyle {
    fn default() -> Self {
        Self::from_overrides(&ColorOverrides::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!("#ff8000".parse::<Rgb>().unwrap(), Rgb(255, 128, 0));
        assert_eq!("0a0B0c".parse::<Rgb>().unwrap(), Rgb(10, 11, 12));
        assert_eq!(Rgb(1, 2, 255).to_string(), "#0102ff");
    }

    #[test]
    fn test_parse_bad_color() {
        assert!(matches!("#fff".parse::<Rgb>(), Err(ClockError::InvalidColor(_))));
        assert!("#gg0000".parse::<Rgb>().is_err());
        assert!("#ééé".parse::<Rgb>().is_err());
        assert!("#+f+f+f".parse::<Rgb>().is_err());
        assert!("-1-1-1".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_defaults_come_from_theme() {
        let style = ClockStyle::default();
        assert_eq!(style.ring.color, Theme::RING);
        assert_eq!(style.small_scale.color, Theme::BIG_SCALE);
        assert_eq!(style.text.color, Theme::NUMBERS);
        assert_eq!(style.text.text_size, TEXT_SIZE);
        assert_eq!(style.hour.stroke_cap, StrokeCap::Round);
        assert_eq!(style.ring.stroke_cap, StrokeCap::Butt);
        assert!(style.second.anti_alias);
    }

    #[test]
    fn test_overrides_replace_only_named_colors() {
        let colors = ColorOverrides {
            second_color: Some(Rgb(1, 2, 3)),
            ..Default::default()
        };
        let style = ClockStyle::from_overrides(&colors);
        assert_eq!(style.second.color, Rgb(1, 2, 3));
        assert_eq!(style.second.stroke_width, SECOND_STROKE);
        assert_eq!(style.minute.color, Theme::MINUTE_HAND);
    }
}
