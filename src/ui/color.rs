// src/ui/color.rs

//! 8-bit RGB colors and the linear blend used by the prompt animation.
use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::error::SamaritanError;

/// An immutable RGB triple. Serializes as a `#rrggbb` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    fn from_channels([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

/// Interpolates each channel independently:
/// `round(fg * opacity + bg * (1 - opacity))`.
///
/// `opacity` is not clamped. Values outside `[0, 1]` saturate at the channel
/// bounds instead of wrapping.
pub fn blend(foreground: Rgb, opacity: f64, background: Rgb) -> Rgb {
    let fg = foreground.channels();
    let bg = background.channels();
    let mut out = [0u8; 3];
    for c in 0..3 {
        let mixed = fg[c] as f64 * opacity + bg[c] as f64 * (1.0 - opacity);
        // float -> int casts saturate
        out[c] = mixed.round() as u8;
    }
    Rgb::from_channels(out)
}

impl FromStr for Rgb {
    type Err = SamaritanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SamaritanError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match hex.len() {
            6 => {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
                Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
            }
            3 => {
                // #abc == #aabbcc
                let channel = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| invalid())
                };
                Ok(Rgb::new(channel(0)?, channel(1)?, channel(2)?))
            }
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Rgb {
    type Error = SamaritanError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Rgb> for Color {
    fn from(color: Rgb) -> Self {
        Color::Rgb(color.r, color.g, color.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [Rgb; 4] = [
        Rgb::new(0, 0, 0),
        Rgb::new(255, 255, 255),
        Rgb::new(204, 0, 0),
        Rgb::new(12, 200, 99),
    ];

    #[test]
    fn test_blend_endpoints() {
        for fg in SAMPLES {
            for bg in SAMPLES {
                assert_eq!(blend(fg, 1.0, bg), fg);
                assert_eq!(blend(fg, 0.0, bg), bg);
            }
        }
    }

    #[test]
    fn test_blend_is_monotonic_per_channel() {
        let fg = Rgb::new(204, 0, 90);
        let bg = Rgb::WHITE;
        let mut previous = blend(fg, 0.0, bg).channels();
        for step in 1..=20 {
            let current = blend(fg, step as f64 / 20.0, bg).channels();
            for c in 0..3 {
                if fg.channels()[c] <= bg.channels()[c] {
                    assert!(current[c] <= previous[c], "channel {c} rose at step {step}");
                } else {
                    assert!(current[c] >= previous[c], "channel {c} fell at step {step}");
                }
            }
            previous = current;
        }
    }

    #[test]
    fn test_blend_halfway_rounds() {
        // 204 * 0.5 + 255 * 0.5 = 229.5
        assert_eq!(blend(Rgb::new(204, 0, 0), 0.5, Rgb::WHITE), Rgb::new(230, 128, 128));
    }

    #[test]
    fn test_blend_out_of_range_saturates() {
        assert_eq!(blend(Rgb::new(0, 0, 0), -1.0, Rgb::WHITE), Rgb::WHITE);
        assert_eq!(blend(Rgb::WHITE, 2.0, Rgb::BLACK), Rgb::WHITE);
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!("#cc0000".parse::<Rgb>().unwrap(), Rgb::new(204, 0, 0));
        assert_eq!("#FFF".parse::<Rgb>().unwrap(), Rgb::WHITE);
        assert_eq!(Rgb::new(1, 171, 255).to_string(), "#01abff");
        assert!("cc0000".parse::<Rgb>().is_err());
        assert!("#cc00".parse::<Rgb>().is_err());
        assert!("#zz0000".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_into_ratatui_color() {
        assert_eq!(Color::from(Rgb::new(1, 2, 3)), Color::Rgb(1, 2, 3));
    }
}
