//! Normalized RGBA color and its portable record.

use crate::error::DecodeError;
use serde::{Deserialize, Serialize};

/// An RGBA color with every channel normalized to `[0, 1]`.
///
/// Converting to [`peniko::Color`] narrows each channel to `f32`, so a trip
/// through the host color type is lossy at roughly `1e-7` per channel.
/// Compare converted colors with a tolerance, never exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub opacity: f64,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a color. Channels are not checked here; use
    /// [`is_normalized`](Self::is_normalized) before trusting host input.
    pub const fn new(red: f64, green: f64, blue: f64, opacity: f64) -> Self {
        Self {
            red,
            green,
            blue,
            opacity,
        }
    }

    /// Opaque gray where `0.0` is black and `1.0` is white.
    pub const fn gray(level: f64) -> Self {
        Self::new(level, level, level, 1.0)
    }

    /// Create from 8-bit channels.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            f64::from(a) / 255.0,
        )
    }

    /// Same color with a different opacity.
    pub fn with_opacity(self, opacity: f64) -> Self {
        Self { opacity, ..self }
    }

    pub fn is_finite(&self) -> bool {
        self.channels().iter().all(|(_, value)| value.is_finite())
    }

    /// The portable record for this color.
    pub fn to_values(self) -> ColorValues {
        ColorValues {
            red: self.red,
            green: self.green,
            blue: self.blue,
            opacity: self.opacity,
        }
    }

    /// Parse a portable record, rejecting channels outside `[0, 1]`.
    pub fn from_values(values: ColorValues) -> Result<Self, DecodeError> {
        let color = Self::new(values.red, values.green, values.blue, values.opacity);
        match color.out_of_range() {
            Some((channel, value)) => Err(DecodeError::ColorOutOfRange { channel, value }),
            None => Ok(color),
        }
    }

    /// True when every channel lies in `[0, 1]`.
    pub fn is_normalized(&self) -> bool {
        self.out_of_range().is_none()
    }

    /// First channel outside `[0, 1]`, with its value.
    pub(crate) fn out_of_range(&self) -> Option<(&'static str, f64)> {
        self.channels()
            .into_iter()
            .find(|(_, value)| !(0.0..=1.0).contains(value))
    }

    fn channels(&self) -> [(&'static str, f64); 4] {
        [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("opacity", self.opacity),
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl From<peniko::Color> for Color {
    fn from(color: peniko::Color) -> Self {
        let [r, g, b, a] = color.components;
        Self::new(f64::from(r), f64::from(g), f64::from(b), f64::from(a))
    }
}

impl From<Color> for peniko::Color {
    fn from(color: Color) -> Self {
        peniko::Color::new([
            color.red as f32,
            color.green as f32,
            color.blue as f32,
            color.opacity as f32,
        ])
    }
}

/// Wire form of a [`Color`]: `{red, green, blue, opacity}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorValues {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub opacity: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn close(a: Color, b: Color) -> bool {
        (a.red - b.red).abs() < EPS
            && (a.green - b.green).abs() < EPS
            && (a.blue - b.blue).abs() < EPS
            && (a.opacity - b.opacity).abs() < EPS
    }

    #[test]
    fn test_peniko_round_trip_within_tolerance() {
        let color = Color::new(0.1, 0.2, 0.3, 0.4);
        let native: peniko::Color = color.into();
        let back = Color::from(native);
        assert!(close(color, back));
    }

    #[test]
    fn test_from_rgba8() {
        let color = Color::from_rgba8(255, 0, 51, 255);
        assert!(close(color, Color::new(1.0, 0.0, 0.2, 1.0)));
    }

    #[test]
    fn test_values_round_trip() {
        let color = Color::gray(0.8).with_opacity(0.5);
        let parsed = Color::from_values(color.to_values()).unwrap();
        assert_eq!(parsed, color);
    }

    #[test]
    fn test_out_of_range_channel_rejected() {
        let values = ColorValues {
            red: 0.5,
            green: 1.5,
            blue: 0.0,
            opacity: 1.0,
        };
        match Color::from_values(values) {
            Err(DecodeError::ColorOutOfRange { channel, value }) => {
                assert_eq!(channel, "green");
                assert!((value - 1.5).abs() < f64::EPSILON);
            }
            other => panic!("expected out of range error, got {other:?}"),
        }
    }

    #[test]
    fn test_is_normalized() {
        assert!(Color::WHITE.is_normalized());
        assert!(Color::TRANSPARENT.is_normalized());
        assert!(!Color::new(1.5, 0.0, 0.0, 1.0).is_normalized());
        assert!(!Color::new(0.0, 0.0, -0.1, 1.0).is_normalized());
        assert!(!Color::new(f64::NAN, 0.0, 0.0, 1.0).is_normalized());
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(Color::WHITE.to_values()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "red": 1.0, "green": 1.0, "blue": 1.0, "opacity": 1.0 })
        );
    }
}
