//! Core component types shared by every part of the engine, and the [`Hsla`]
//! value type that tokens and generated steps are expressed in.

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// A base color value in the HSL notation, with an alpha channel.
///
/// Hue is in degrees and normalized into `[0, 360)`. Saturation and
/// lightness are percentages in `[0, 100]`, alpha is in `[0, 1]`. Values
/// outside those ranges are clamped on construction, never rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsla {
    /// The hue component, in degrees.
    pub hue: Component,
    /// The saturation component, in percent.
    pub saturation: Component,
    /// The lightness component, in percent.
    pub lightness: Component,
    /// The alpha component.
    pub alpha: Component,
}

impl Hsla {
    /// Create a new value with each channel clamped into its legal range.
    pub fn new(
        hue: Component,
        saturation: Component,
        lightness: Component,
        alpha: Component,
    ) -> Self {
        Self {
            hue: crate::math::normalize_hue(hue),
            saturation: saturation.clamp(0.0, 100.0),
            lightness: lightness.clamp(0.0, 100.0),
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Create a fully opaque value.
    pub fn opaque(hue: Component, saturation: Component, lightness: Component) -> Self {
        Self::new(hue, saturation, lightness, 1.0)
    }

    /// Format this value as a CSS hex string. The alpha byte is only
    /// appended when the value is not fully opaque.
    pub fn to_hex(&self) -> String {
        crate::convert::hsla_to_hex(self.hue, self.saturation, self.lightness, self.alpha)
    }
}
