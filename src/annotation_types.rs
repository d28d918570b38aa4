//! Highlight presentation types.
//!
//! A fragment's highlight slot is either empty or holds a fixed color that the
//! presentation layer paints behind the fragment's text. Colors are written in
//! CSS notation because that is what text-layer renderers consume directly.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An RGBA highlight color.
///
/// Serializes to and from its CSS form, e.g. `rgba(254 240 138 / 0.3)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HighlightColor {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Opacity (0.0 = transparent, 1.0 = opaque)
    pub alpha: f32,
}

impl HighlightColor {
    /// Create a color, rejecting an alpha outside `[0, 1]`.
    pub fn new(r: u8, g: u8, b: u8, alpha: f32) -> Result<Self> {
        if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
            return Err(Error::InvalidColor(format!("alpha {} outside [0, 1]", alpha)));
        }
        Ok(Self { r, g, b, alpha })
    }

    /// Translucent yellow marker, the default highlight.
    pub fn marker_yellow() -> Self {
        Self {
            r: 254,
            g: 240,
            b: 138,
            alpha: 0.3,
        }
    }

    /// CSS `rgba()` representation using the space-separated syntax.
    pub fn to_css(&self) -> String {
        self.to_string()
    }

    fn parse_hex(input: &str, hex: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor(input.to_string());
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) || (hex.len() != 6 && hex.len() != 8) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let alpha = if hex.len() == 8 {
            f32::from(channel(6)?) / 255.0
        } else {
            1.0
        };
        Self::new(channel(0)?, channel(2)?, channel(4)?, alpha)
    }

    fn parse_functional(input: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor(input.to_string());

        let open = input.find('(').ok_or_else(invalid)?;
        let name = input[..open].trim().to_ascii_lowercase();
        if name != "rgb" && name != "rgba" {
            return Err(invalid());
        }
        let body = input[open + 1..].strip_suffix(')').ok_or_else(invalid)?;

        let (channels, slash_alpha) = match body.split_once('/') {
            // Slash alpha belongs to the space-separated syntax only.
            Some((channels, _)) if channels.contains(',') => return Err(invalid()),
            Some((channels, alpha)) => (channels, Some(alpha.trim())),
            None => (body, None),
        };
        let mut parts: Vec<&str> = channels
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        // Legacy comma syntax carries alpha as a fourth component.
        let alpha = match (slash_alpha, parts.len()) {
            (Some(a), 3) => Some(a),
            (None, 4) => parts.pop(),
            (None, 3) => None,
            _ => return Err(invalid()),
        };

        let channel = |p: &str| p.parse::<u8>().map_err(|_| invalid());
        let alpha = match alpha {
            Some(a) => match a.strip_suffix('%') {
                Some(pct) => pct.trim().parse::<f32>().map_err(|_| invalid())? / 100.0,
                None => a.parse::<f32>().map_err(|_| invalid())?,
            },
            None => 1.0,
        };

        Self::new(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?, alpha)
    }
}

impl Default for HighlightColor {
    fn default() -> Self {
        Self::marker_yellow()
    }
}

impl fmt::Display for HighlightColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({} {} {} / {})", self.r, self.g, self.b, self.alpha)
    }
}

impl FromStr for HighlightColor {
    type Err = Error;

    /// Parse `#rrggbb`, `#rrggbbaa`, `rgb(...)` or `rgba(...)` in either the
    /// space/slash or the comma syntax.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        match trimmed.strip_prefix('#') {
            Some(hex) => Self::parse_hex(s, hex),
            None => Self::parse_functional(trimmed),
        }
    }
}

impl TryFrom<String> for HighlightColor {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<HighlightColor> for String {
    fn from(color: HighlightColor) -> Self {
        color.to_css()
    }
}

/// State of a fragment's highlight slot.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Option<HighlightColor>", into = "Option<HighlightColor>")]
pub enum HighlightStyle {
    /// No highlight (the renderer's default background)
    #[default]
    None,
    /// Painted with the given color
    Color(HighlightColor),
}

impl HighlightStyle {
    /// Whether the slot currently holds a color.
    pub fn is_highlighted(&self) -> bool {
        matches!(self, Self::Color(_))
    }

    /// The painted color, if any.
    pub fn color(&self) -> Option<HighlightColor> {
        match self {
            Self::None => None,
            Self::Color(c) => Some(*c),
        }
    }
}

impl From<Option<HighlightColor>> for HighlightStyle {
    fn from(color: Option<HighlightColor>) -> Self {
        color.map_or(Self::None, Self::Color)
    }
}

impl From<HighlightStyle> for Option<HighlightColor> {
    fn from(style: HighlightStyle) -> Self {
        style.color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_marker_yellow() {
        let c = HighlightColor::default();
        assert_eq!((c.r, c.g, c.b), (254, 240, 138));
        assert_eq!(c.alpha, 0.3);
        assert_eq!(c.to_css(), "rgba(254 240 138 / 0.3)");
    }

    #[test]
    fn test_parse_space_slash_syntax() {
        let c: HighlightColor = "rgba(254 240 138 / 0.3)".parse().unwrap();
        assert_eq!(c, HighlightColor::marker_yellow());
    }

    #[test]
    fn test_parse_comma_syntax() {
        let c: HighlightColor = "rgba(255, 0, 0, 0.5)".parse().unwrap();
        assert_eq!((c.r, c.g, c.b, c.alpha), (255, 0, 0, 0.5));

        let opaque: HighlightColor = "rgb(0,128,255)".parse().unwrap();
        assert_eq!((opaque.r, opaque.g, opaque.b, opaque.alpha), (0, 128, 255, 1.0));
    }

    #[test]
    fn test_parse_percent_alpha() {
        let c: HighlightColor = "rgb(10 20 30 / 50%)".parse().unwrap();
        assert_eq!(c.alpha, 0.5);
    }

    #[test]
    fn test_parse_hex() {
        let c: HighlightColor = "#ffff00".parse().unwrap();
        assert_eq!((c.r, c.g, c.b, c.alpha), (255, 255, 0, 1.0));

        let translucent: HighlightColor = "#00000000".parse().unwrap();
        assert_eq!(translucent.alpha, 0.0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in [
            "",
            "yellow",
            "#fff",
            "#gggggg",
            "rgba(1 2)",
            "rgba(1 2 3 4 5)",
            "rgb(256 0 0)",
            "hsl(0 0 0)",
            "rgba(1 2 3 / 2)",
            "rgba(1 2 3",
        ] {
            assert!(
                matches!(bad.parse::<HighlightColor>(), Err(Error::InvalidColor(_))),
                "expected {:?} to be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_parse_hex_rejects_sign_prefixes() {
        for bad in ["#+f+f+f", "#-1-1-1", "#+fffff", "#ff+fff00"] {
            assert!(
                matches!(bad.parse::<HighlightColor>(), Err(Error::InvalidColor(_))),
                "expected {:?} to be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_parse_rejects_comma_channels_with_slash_alpha() {
        for bad in ["rgba(1, 2, 3 / 0.5)", "rgb(1,2,3/50%)"] {
            assert!(
                matches!(bad.parse::<HighlightColor>(), Err(Error::InvalidColor(_))),
                "expected {:?} to be rejected",
                bad
            );
        }
        let ok: HighlightColor = "rgba(1 2 3 / 0.5)".parse().unwrap();
        assert_eq!(ok, HighlightColor::new(1, 2, 3, 0.5).unwrap());
    }

    #[test]
    fn test_new_rejects_nan_alpha() {
        assert!(HighlightColor::new(0, 0, 0, f32::NAN).is_err());
        assert!(HighlightColor::new(0, 0, 0, -0.1).is_err());
        assert!(HighlightColor::new(0, 0, 0, 1.0).is_ok());
    }

    #[test]
    fn test_color_serializes_as_css() {
        let json = serde_json::to_string(&HighlightColor::marker_yellow()).unwrap();
        assert_eq!(json, "\"rgba(254 240 138 / 0.3)\"");

        let back: HighlightColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, HighlightColor::marker_yellow());
    }

    #[test]
    fn test_style_serde_uses_null_for_none() {
        assert_eq!(serde_json::to_string(&HighlightStyle::None).unwrap(), "null");

        let style: HighlightStyle = serde_json::from_str("\"#ff0000\"").unwrap();
        assert!(style.is_highlighted());
        assert_eq!(style.color().map(|c| c.r), Some(255));
    }

    #[test]
    fn test_style_default_is_none() {
        let style = HighlightStyle::default();
        assert!(!style.is_highlighted());
        assert_eq!(style.color(), None);
    }
}
