//! Conversions between the notations the engine traffics in.
//!
//! The typed models under [`crate::models`] each implement only the
//! conversions that make sense for them, so every conversion path is
//! explicit:
//!
//! ```rust
//! use tintlab::models::Hsl;
//! let lch = Hsl::new(246.0, 98.0, 58.0) // create color in HSL.
//!     .to_srgb()                        // convert to sRGB.
//!     .to_lab()                         // via linear light and XYZ.
//!     .to_polar();                      // convert to LCH.
//! ```
//!
//! The free functions are the interchange boundary: hex codecs for callers
//! that traffic in strings, and the HSL↔LCH chain used by the
//! perceptually-uniform generation mode.

use std::fmt;

use crate::{
    color::{Component, Components, Hsla},
    math::normalize_hue,
    models::{Hsl, Lab, Lch, Srgb, SrgbLinear},
};

/// Error returned when a color string cannot be parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseColorError {
    /// The input is not a 3, 6 or 8 hex digit color, with or without a
    /// leading `#`.
    InvalidFormat,
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidFormat => write!(f, "invalid hex color format"),
        }
    }
}

impl std::error::Error for ParseColorError {}

impl Srgb {
    /// Convert a color specified in the sRGB color space to the HSL
    /// notation.
    pub fn to_hsl(&self) -> Hsl {
        util::rgb_to_hsl(&self.to_components()).into()
    }

    /// Convert this color to the rectangular form of CIE-Lab.
    pub fn to_lab(&self) -> Lab {
        self.to_linear_light().to_xyz().into()
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to the sRGB color space.
    pub fn to_srgb(&self) -> Srgb {
        util::hsl_to_rgb(&self.to_components()).into()
    }

    /// Convert this color to the cylindrical polar form of CIE-Lab.
    pub fn to_lch(&self) -> Lch {
        self.to_srgb().to_lab().to_polar()
    }
}

impl Lch {
    /// Convert this color back to the HSL notation.
    ///
    /// Values outside the sRGB gamut are clamped into it.
    pub fn to_hsl(&self) -> Hsl {
        let linear = SrgbLinear::from(self.to_rectangular().to_xyz());
        let srgb = Srgb::from(
            linear
                .to_gamma_encoded()
                .to_components()
                .map(|v| v.clamp(0.0, 1.0)),
        );
        srgb.to_hsl()
    }
}

/// Format an HSL color with alpha as a CSS hex string.
///
/// The hue is normalized into `[0, 360)` and the remaining channels are
/// clamped. The alpha byte is only appended when `alpha < 1`.
pub fn hsla_to_hex(
    hue: Component,
    saturation: Component,
    lightness: Component,
    alpha: Component,
) -> String {
    let rgb = util::hsl_to_rgb(&Components(
        normalize_hue(hue),
        saturation.clamp(0.0, 100.0),
        lightness.clamp(0.0, 100.0),
    ));

    let red = channel_to_byte(rgb.0);
    let green = channel_to_byte(rgb.1);
    let blue = channel_to_byte(rgb.2);

    let alpha = alpha.clamp(0.0, 1.0);
    if alpha < 1.0 {
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            red,
            green,
            blue,
            channel_to_byte(alpha)
        )
    } else {
        format!("#{:02x}{:02x}{:02x}", red, green, blue)
    }
}

/// Parse a 3, 6 or 8 hex digit color, with or without a leading `#`.
///
/// Hue, saturation and lightness are rounded to one decimal place to bound
/// floating point drift across repeated conversions.
pub fn hex_to_hsla(hex: &str) -> Result<Hsla, ParseColorError> {
    let body = hex.strip_prefix('#').unwrap_or(hex);

    if !body.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ParseColorError::InvalidFormat);
    }

    let (red, green, blue, alpha) = match body.len() {
        3 => (
            hex_nibble(&body[0..1])?,
            hex_nibble(&body[1..2])?,
            hex_nibble(&body[2..3])?,
            255,
        ),
        6 => (
            hex_byte(&body[0..2])?,
            hex_byte(&body[2..4])?,
            hex_byte(&body[4..6])?,
            255,
        ),
        8 => (
            hex_byte(&body[0..2])?,
            hex_byte(&body[2..4])?,
            hex_byte(&body[4..6])?,
            hex_byte(&body[6..8])?,
        ),
        _ => return Err(ParseColorError::InvalidFormat),
    };

    let Components(hue, saturation, lightness) = util::rgb_to_hsl(&Components(
        Component::from(red) / 255.0,
        Component::from(green) / 255.0,
        Component::from(blue) / 255.0,
    ));

    Ok(Hsla::new(
        round_to_decimal(hue),
        round_to_decimal(saturation),
        round_to_decimal(lightness),
        Component::from(alpha) / 255.0,
    ))
}

/// Convert a color in the cylindrical polar form of CIE-Lab to a CSS hex
/// string.
pub fn lch_to_hex(lch: &Lch, alpha: Component) -> String {
    let hsl = lch.to_hsl();
    hsla_to_hex(hsl.hue, hsl.saturation, hsl.lightness, alpha)
}

fn channel_to_byte(value: Component) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn hex_byte(digits: &str) -> Result<u8, ParseColorError> {
    u8::from_str_radix(digits, 16).map_err(|_| ParseColorError::InvalidFormat)
}

fn hex_nibble(digit: &str) -> Result<u8, ParseColorError> {
    let value = hex_byte(digit)?;
    Ok(value << 4 | value)
}

fn round_to_decimal(value: Component) -> Component {
    (value * 10.0).round() / 10.0
}

mod util {
    use crate::color::{Component, Components};
    use crate::math::normalize_hue;

    /// Convert from the HSL notation (degrees / percent) to RGB fractions
    /// via the chroma / intermediate / match decomposition.
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let hue = normalize_hue(from.0);
        let saturation = from.1 / 100.0;
        let lightness = from.2 / 100.0;

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let intermediate = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
        let matcher = lightness - chroma / 2.0;

        let (red, green, blue) = match (hue / 60.0) as u8 {
            0 => (chroma, intermediate, 0.0),
            1 => (intermediate, chroma, 0.0),
            2 => (0.0, chroma, intermediate),
            3 => (0.0, intermediate, chroma),
            4 => (intermediate, 0.0, chroma),
            _ => (chroma, 0.0, intermediate),
        };

        Components(red + matcher, green + matcher, blue + matcher)
    }

    /// Convert from RGB fractions to the HSL notation (degrees / percent)
    /// via the max / min decomposition.
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        let lightness = (max + min) / 2.0;

        let hue = if delta == 0.0 {
            0.0
        } else {
            60.0 * if max == red {
                ((green - blue) / delta).rem_euclid(6.0)
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            }
        };

        let saturation = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * lightness - 1.0).abs())
        };

        Components(hue, saturation * 100.0, lightness * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn hex_output_for_known_colors() {
        assert_eq!(hsla_to_hex(0.0, 0.0, 100.0, 1.0), "#ffffff");
        assert_eq!(hsla_to_hex(0.0, 0.0, 0.0, 1.0), "#000000");
        assert_eq!(hsla_to_hex(0.0, 100.0, 50.0, 1.0), "#ff0000");
        assert_eq!(hsla_to_hex(120.0, 100.0, 50.0, 1.0), "#00ff00");
        assert_eq!(hsla_to_hex(240.0, 100.0, 50.0, 1.0), "#0000ff");
    }

    #[test]
    fn alpha_byte_only_when_translucent() {
        assert_eq!(hsla_to_hex(0.0, 100.0, 50.0, 1.0), "#ff0000");
        assert_eq!(hsla_to_hex(0.0, 100.0, 50.0, 0.5), "#ff000080");
        assert_eq!(hsla_to_hex(0.0, 100.0, 50.0, 0.0), "#ff000000");
    }

    #[test]
    fn hue_is_normalized_before_formatting() {
        assert_eq!(
            hsla_to_hex(480.0, 100.0, 50.0, 1.0),
            hsla_to_hex(120.0, 100.0, 50.0, 1.0)
        );
    }

    #[test]
    fn parses_all_three_body_lengths() {
        let long = hex_to_hsla("#ff0000").unwrap();
        assert_eq!(long.hue, 0.0);
        assert_eq!(long.saturation, 100.0);
        assert_eq!(long.lightness, 50.0);
        assert_eq!(long.alpha, 1.0);

        let short = hex_to_hsla("f00").unwrap();
        assert_eq!(short, long);

        let translucent = hex_to_hsla("#ff000080").unwrap();
        assert_eq!(translucent.hue, 0.0);
        approx::assert_abs_diff_eq!(translucent.alpha, 0.50196, epsilon = 1.0e-4);
    }

    #[test]
    fn rejects_malformed_input() {
        for input in ["", "#", "#ff", "#ffff", "#fffff", "#fffffff", "#ggg", "red", "#ff00zz"] {
            assert_eq!(hex_to_hsla(input), Err(ParseColorError::InvalidFormat));
        }
    }

    #[test]
    fn gray_has_no_hue_or_saturation() {
        let gray = hex_to_hsla("#808080").unwrap();
        assert_eq!(gray.hue, 0.0);
        assert_eq!(gray.saturation, 0.0);
        assert_component_eq!(gray.lightness, 50.2);
    }

    #[test]
    fn hex_round_trip_stays_within_a_unit() {
        for (hue, saturation, lightness) in [
            (246.0, 98.0, 58.0),
            (25.0, 75.0, 47.1),
            (142.0, 72.0, 45.0),
            (38.0, 94.0, 52.0),
            (310.5, 62.0, 66.0),
        ] {
            let parsed = hex_to_hsla(&hsla_to_hex(hue, saturation, lightness, 1.0)).unwrap();
            approx::assert_abs_diff_eq!(parsed.hue, hue, epsilon = 1.0);
            approx::assert_abs_diff_eq!(parsed.saturation, saturation, epsilon = 1.0);
            approx::assert_abs_diff_eq!(parsed.lightness, lightness, epsilon = 1.0);
        }
    }

    #[test]
    fn lch_chain_round_trips_in_gamut_colors() {
        let hsl = Hsl::new(246.0, 98.0, 58.0);
        let back = hsl.to_lch().to_hsl();
        approx::assert_abs_diff_eq!(back.hue, hsl.hue, epsilon = 0.1);
        approx::assert_abs_diff_eq!(back.saturation, hsl.saturation, epsilon = 0.1);
        approx::assert_abs_diff_eq!(back.lightness, hsl.lightness, epsilon = 0.1);
    }

    #[test]
    fn achromatic_colors_have_no_chroma() {
        let lch = Hsl::new(0.0, 0.0, 50.0).to_lch();
        approx::assert_abs_diff_eq!(lch.chroma, 0.0, epsilon = 0.05);
    }

    #[test]
    fn lch_to_hex_matches_the_hsl_path() {
        let hsl = Hsl::new(25.0, 75.0, 47.1);
        let direct = hsla_to_hex(hsl.hue, hsl.saturation, hsl.lightness, 1.0);
        let via_lch = lch_to_hex(&hsl.to_lch(), 1.0);
        assert_eq!(via_lch, direct);
    }
}
