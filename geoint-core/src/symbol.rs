//! Simple marker, line and fill symbols.
//!
//! Symbols serialise to the rendering engine's JSON dialect: type tags
//! `esriSMS`, `esriSLS` and `esriSFS`, style names such as `esriSMSCircle`, and
//! colours as `[r, g, b, a]` byte arrays.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while decoding a [`Color`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    /// A colour array had the wrong number of channels.
    #[error("colour must have 3 or 4 channels, found {0}")]
    ChannelCount(usize),
    /// A hex colour string was not `#rrggbb` or `#rrggbbaa`.
    #[error("invalid hex colour {0:?}")]
    InvalidHex(String),
}

/// An RGBA colour with byte channels.
///
/// # Examples
/// ```
/// use geoint_core::Color;
///
/// # fn main() -> Result<(), geoint_core::ColorError> {
/// let sand = Color::from_hex("#d3c2a6")?;
/// assert_eq!(sand, Color::rgb(0xd3, 0xc2, 0xa6));
/// assert_eq!(sand.alpha, 255);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "[u8; 4]")]
pub struct Color {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
    /// Alpha channel; `255` is opaque.
    pub alpha: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// An opaque colour.
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 255)
    }

    /// A colour with explicit alpha.
    #[must_use]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Parse `#rrggbb` or `#rrggbbaa`.
    ///
    /// # Errors
    /// Returns [`ColorError::InvalidHex`] when the text is not a hex colour.
    pub fn from_hex(text: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidHex(text.to_owned());
        let digits = text.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let bytes: Vec<u8> = digits
            .as_bytes()
            .chunks(2)
            .map(|pair| {
                std::str::from_utf8(pair)
                    .ok()
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok())
            })
            .collect::<Option<_>>()
            .ok_or_else(invalid)?;
        match bytes.as_slice() {
            [red, green, blue] if digits.len() == 6 => Ok(Self::rgb(*red, *green, *blue)),
            [red, green, blue, alpha] if digits.len() == 8 => {
                Ok(Self::rgba(*red, *green, *blue, *alpha))
            }
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<Vec<u8>> for Color {
    type Error = ColorError;

    fn try_from(channels: Vec<u8>) -> Result<Self, Self::Error> {
        match channels.as_slice() {
            [red, green, blue] => Ok(Self::rgb(*red, *green, *blue)),
            [red, green, blue, alpha] => Ok(Self::rgba(*red, *green, *blue, *alpha)),
            other => Err(ColorError::ChannelCount(other.len())),
        }
    }
}

impl From<Color> for [u8; 4] {
    fn from(color: Color) -> Self {
        [color.red, color.green, color.blue, color.alpha]
    }
}

/// Marker shapes for [`SimpleMarkerSymbol`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SimpleMarkerStyle {
    /// A filled circle.
    #[default]
    #[serde(rename = "esriSMSCircle")]
    Circle,
    /// A plus sign.
    #[serde(rename = "esriSMSCross")]
    Cross,
    /// A diamond.
    #[serde(rename = "esriSMSDiamond")]
    Diamond,
    /// A square.
    #[serde(rename = "esriSMSSquare")]
    Square,
    /// A triangle.
    #[serde(rename = "esriSMSTriangle")]
    Triangle,
    /// A diagonal cross.
    #[serde(rename = "esriSMSX")]
    X,
}

/// Dash patterns for [`SimpleLineSymbol`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SimpleLineStyle {
    /// Continuous line.
    #[default]
    #[serde(rename = "esriSLSSolid")]
    Solid,
    /// Dashes.
    #[serde(rename = "esriSLSDash")]
    Dash,
    /// Dash dot.
    #[serde(rename = "esriSLSDashDot")]
    DashDot,
    /// Dash dot dot.
    #[serde(rename = "esriSLSDashDotDot")]
    DashDotDot,
    /// Dots.
    #[serde(rename = "esriSLSDot")]
    Dot,
    /// Invisible line.
    #[serde(rename = "esriSLSNull")]
    Null,
}

/// Fill patterns for [`SimpleFillSymbol`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SimpleFillStyle {
    /// Solid fill.
    #[default]
    #[serde(rename = "esriSFSSolid")]
    Solid,
    /// No fill.
    #[serde(rename = "esriSFSNull")]
    Null,
    /// Horizontal and vertical hatching.
    #[serde(rename = "esriSFSCross")]
    Cross,
    /// Diagonal cross hatching.
    #[serde(rename = "esriSFSDiagonalCross")]
    DiagonalCross,
    /// Forward diagonal hatching.
    #[serde(rename = "esriSFSForwardDiagonal")]
    ForwardDiagonal,
    /// Backward diagonal hatching.
    #[serde(rename = "esriSFSBackwardDiagonal")]
    BackwardDiagonal,
    /// Horizontal hatching.
    #[serde(rename = "esriSFSHorizontal")]
    Horizontal,
    /// Vertical hatching.
    #[serde(rename = "esriSFSVertical")]
    Vertical,
}

const fn default_line_width() -> f32 {
    1.0
}

const fn default_marker_size() -> f32 {
    8.0
}

/// A line drawn with a single colour and width, also used for outlines.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SimpleLineSymbol {
    /// Dash pattern.
    #[serde(default)]
    pub style: SimpleLineStyle,
    /// Line colour.
    #[serde(default)]
    pub color: Color,
    /// Width in points.
    #[serde(default = "default_line_width")]
    pub width: f32,
}

impl SimpleLineSymbol {
    /// Construct a line symbol.
    #[must_use]
    pub const fn new(style: SimpleLineStyle, color: Color, width: f32) -> Self {
        Self {
            style,
            color,
            width,
        }
    }
}

/// A point marker with an optional outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimpleMarkerSymbol {
    /// Marker shape.
    #[serde(default)]
    pub style: SimpleMarkerStyle,
    /// Fill colour of the marker.
    #[serde(default)]
    pub color: Color,
    /// Size in points.
    #[serde(default = "default_marker_size")]
    pub size: f32,
    /// Outline drawn around the marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline: Option<SimpleLineSymbol>,
}

impl SimpleMarkerSymbol {
    /// Construct a marker without outline.
    #[must_use]
    pub const fn new(style: SimpleMarkerStyle, color: Color, size: f32) -> Self {
        Self {
            style,
            color,
            size,
            outline: None,
        }
    }

    /// Attach an outline.
    #[must_use]
    pub const fn with_outline(mut self, outline: SimpleLineSymbol) -> Self {
        self.outline = Some(outline);
        self
    }
}

/// An area fill with an optional outline.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SimpleFillSymbol {
    /// Fill pattern.
    #[serde(default)]
    pub style: SimpleFillStyle,
    /// Fill colour.
    #[serde(default)]
    pub color: Color,
    /// Outline drawn along every ring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline: Option<SimpleLineSymbol>,
}

impl SimpleFillSymbol {
    /// Construct a fill without outline.
    #[must_use]
    pub const fn new(style: SimpleFillStyle, color: Color) -> Self {
        Self {
            style,
            color,
            outline: None,
        }
    }

    /// Attach an outline.
    #[must_use]
    pub const fn with_outline(mut self, outline: SimpleLineSymbol) -> Self {
        self.outline = Some(outline);
        self
    }
}

/// Any of the simple symbols, tagged with the engine's symbol type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Symbol {
    /// Point marker (`esriSMS`).
    #[serde(rename = "esriSMS")]
    Marker(SimpleMarkerSymbol),
    /// Line (`esriSLS`).
    #[serde(rename = "esriSLS")]
    Line(SimpleLineSymbol),
    /// Area fill (`esriSFS`).
    #[serde(rename = "esriSFS")]
    Fill(SimpleFillSymbol),
}

impl From<SimpleMarkerSymbol> for Symbol {
    fn from(symbol: SimpleMarkerSymbol) -> Self {
        Self::Marker(symbol)
    }
}

impl From<SimpleLineSymbol> for Symbol {
    fn from(symbol: SimpleLineSymbol) -> Self {
        Self::Line(symbol)
    }
}

impl From<SimpleFillSymbol> for Symbol {
    fn from(symbol: SimpleFillSymbol) -> Self {
        Self::Fill(symbol)
    }
}

#[cfg(test)]
mod tests {
    #![expect(
        clippy::expect_used,
        reason = "tests use expect for readable failures"
    )]

    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("#000000", Color::BLACK)]
    #[case("#d3c2a6", Color::rgb(0xd3, 0xc2, 0xa6))]
    #[case("#FF000080", Color::rgba(255, 0, 0, 0x80))]
    fn parses_hex_colours(#[case] text: &str, #[case] expected: Color) {
        assert_eq!(Color::from_hex(text), Ok(expected));
    }

    #[rstest]
    #[case("d3c2a6")]
    #[case("#d3c2a")]
    #[case("#zzzzzz")]
    #[case("#")]
    fn rejects_bad_hex_colours(#[case] text: &str) {
        assert!(matches!(
            Color::from_hex(text),
            Err(ColorError::InvalidHex(_))
        ));
    }

    #[rstest]
    fn colour_arrays_accept_three_channels() {
        let color: Color = serde_json::from_value(json!([1, 2, 3])).expect("decode colour");
        assert_eq!(color, Color::rgb(1, 2, 3));
    }

    #[rstest]
    fn colour_arrays_reject_two_channels() {
        let result: Result<Color, _> = serde_json::from_value(json!([1, 2]));
        assert!(result.is_err());
    }

    #[rstest]
    fn marker_serialises_with_engine_tags() {
        let symbol = Symbol::from(
            SimpleMarkerSymbol::new(SimpleMarkerStyle::Square, Color::BLACK, 10.0)
                .with_outline(SimpleLineSymbol::new(
                    SimpleLineStyle::Dash,
                    Color::rgb(255, 255, 255),
                    2.0,
                )),
        );
        let value = serde_json::to_value(symbol).expect("encode symbol");
        assert_eq!(
            value,
            json!({
                "type": "esriSMS",
                "style": "esriSMSSquare",
                "color": [0, 0, 0, 255],
                "size": 10.0,
                "outline": {"style": "esriSLSDash", "color": [255, 255, 255, 255], "width": 2.0}
            })
        );
    }

    #[rstest]
    fn fill_defaults_missing_members() {
        let symbol: Symbol =
            serde_json::from_value(json!({"type": "esriSFS"})).expect("decode fill");
        assert_eq!(symbol, Symbol::Fill(SimpleFillSymbol::default()));
    }
}
