//! Structured RGBA colour
//!
//! Palette entries arrive as CSS strings but are stored as channels plus a
//! separate alpha, so gradient stops can change opacity without touching
//! the string form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// An sRGB colour with straight (non-premultiplied) alpha
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in `0.0..=1.0`
    pub a: f32,
}

impl Rgba {
    /// Create a colour from channels
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque colour
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Same RGB with a different opacity
    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS `rgba(...)` notation accepted by canvas APIs
    pub fn to_css(self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }

    fn parse_hex(input: &str, digits: &str) -> Result<Self, ColorError> {
        let channel = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidChannel {
                input: input.to_string(),
                channel: s.to_string(),
            })
        };

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidChannel {
                input: input.to_string(),
                channel: digits.to_string(),
            });
        }

        match digits.len() {
            6 => Ok(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                // #abc expands to #aabbcc
                let r = channel(&digits[0..1])?;
                let g = channel(&digits[1..2])?;
                let b = channel(&digits[2..3])?;
                Ok(Self::rgb(r * 17, g * 17, b * 17))
            }
            _ => Err(ColorError::Unsupported(input.to_string())),
        }
    }

    fn parse_functional(input: &str, body: &str, with_alpha: bool) -> Result<Self, ColorError> {
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let expected = if with_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return Err(ColorError::Unsupported(input.to_string()));
        }

        let number = |s: &str| {
            s.parse::<f64>().map_err(|_| ColorError::InvalidChannel {
                input: input.to_string(),
                channel: s.to_string(),
            })
        };

        let mut rgb = [0u8; 3];
        for (slot, part) in rgb.iter_mut().zip(&parts) {
            let value = number(part)?;
            if !(0.0..=255.0).contains(&value) {
                return Err(ColorError::OutOfRange(input.to_string()));
            }
            *slot = value.round() as u8;
        }

        let alpha = if with_alpha {
            let value = number(parts[3])?;
            if !(0.0..=1.0).contains(&value) {
                return Err(ColorError::OutOfRange(input.to_string()));
            }
            value as f32
        } else {
            1.0
        };

        Ok(Self::new(rgb[0], rgb[1], rgb[2], alpha))
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let s = input.trim().to_ascii_lowercase();

        if let Some(digits) = s.strip_prefix('#') {
            return Self::parse_hex(input, digits);
        }

        let (body, with_alpha) = if let Some(rest) = s.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = s.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return Err(ColorError::Unsupported(input.to_string()));
        };

        let body = body
            .strip_suffix(')')
            .ok_or_else(|| ColorError::Unsupported(input.to_string()))?;
        Self::parse_functional(input, body, with_alpha)
    }
}

impl TryFrom<String> for Rgba {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_css()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgba() {
        let c: Rgba = "rgba(30, 0, 80, 0.5)".parse().unwrap();
        assert_eq!(c, Rgba::new(30, 0, 80, 0.5));
    }

    #[test]
    fn test_parse_rgba_without_spaces() {
        let c: Rgba = "rgba(80,180,255,0.7)".parse().unwrap();
        assert_eq!(c, Rgba::new(80, 180, 255, 0.7));
    }

    #[test]
    fn test_parse_rgb() {
        let c: Rgba = " RGB(1, 2, 3) ".parse().unwrap();
        assert_eq!(c, Rgba::rgb(1, 2, 3));
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!("#02010f".parse::<Rgba>().unwrap(), Rgba::rgb(2, 1, 15));
        assert_eq!("#FFF".parse::<Rgba>().unwrap(), Rgba::rgb(255, 255, 255));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!("blue".parse::<Rgba>(), Err(ColorError::Unsupported(_))));
        assert!(matches!("#12345".parse::<Rgba>(), Err(ColorError::Unsupported(_))));
        assert!(matches!(
            "rgba(1, 2, 3)".parse::<Rgba>(),
            Err(ColorError::Unsupported(_))
        ));
        assert!(matches!(
            "rgb(1, x, 3)".parse::<Rgba>(),
            Err(ColorError::InvalidChannel { .. })
        ));
        assert!(matches!(
            "rgb(1, 2, 300)".parse::<Rgba>(),
            Err(ColorError::OutOfRange(_))
        ));
        assert!(matches!(
            "rgba(1, 2, 3, 1.5)".parse::<Rgba>(),
            Err(ColorError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_parse_rejects_non_ascii_hex() {
        for input in ["#é1", "#aéxyz", "#ab\u{1F600}"] {
            assert!(
                matches!(input.parse::<Rgba>(), Err(ColorError::InvalidChannel { .. })),
                "{input} should be rejected"
            );
        }
        assert!(matches!("#zzzzzz".parse::<Rgba>(), Err(ColorError::InvalidChannel { .. })));
    }

    #[test]
    fn test_with_alpha_keeps_rgb() {
        let base = Rgba::new(0, 150, 255, 0.8);
        let edge = base.with_alpha(0.0);
        assert_eq!((edge.r, edge.g, edge.b), (0, 150, 255));
        assert_eq!(edge.a, 0.0);
        assert_eq!(base.with_alpha(4.0).a, 1.0);
    }

    #[test]
    fn test_to_css() {
        assert_eq!(Rgba::new(0, 200, 255, 0.8).to_css(), "rgba(0, 200, 255, 0.8)");
        assert_eq!(Rgba::rgb(2, 1, 15).to_css(), "rgba(2, 1, 15, 1)");
    }

    #[test]
    fn test_serde_uses_css_string() {
        let c = Rgba::new(28, 48, 94, 0.7);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"rgba(28, 48, 94, 0.7)\"");

        let back: Rgba = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);

        assert!(serde_json::from_str::<Rgba>("\"nope\"").is_err());
    }
}
