//! WCAG 2.1 contrast evaluation.
//!
//! Luminance is computed in sRGB relative-luminance space, which is where
//! the WCAG definition lives; callers that want to adjust a color in
//! response should do so in a perceptual space and re-check here.

use bitflags::bitflags;

use crate::color::{Component, Hsla};
use crate::models::{Hsl, Srgb};

/// Minimum contrast ratio for WCAG AA normal text.
pub const AA_MIN_RATIO: Component = 4.5;

/// Minimum contrast ratio for WCAG AAA normal text.
pub const AAA_MIN_RATIO: Component = 7.0;

bitflags! {
    /// The WCAG normal-text compliance levels met by a contrast ratio.
    ///
    /// Only the normal-text thresholds are modeled; there is no large-text
    /// tier.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Compliance: u8 {
        /// Ratio of at least 4.5:1.
        const AA = 1 << 0;
        /// Ratio of at least 7:1.
        const AAA = 1 << 1;
    }
}

impl Compliance {
    /// Classify a contrast ratio against the normal-text thresholds.
    pub fn from_ratio(ratio: Component) -> Self {
        let mut levels = Compliance::empty();
        if ratio >= AA_MIN_RATIO {
            levels |= Compliance::AA;
        }
        if ratio >= AAA_MIN_RATIO {
            levels |= Compliance::AAA;
        }
        levels
    }
}

/// Compute the relative luminance of a gamma-encoded sRGB color per
/// WCAG 2.1: linearize each channel, then weight 0.2126 / 0.7152 / 0.0722.
///
/// Returns a value in `[0, 1]` where 0 is black and 1 is white.
pub fn relative_luminance(color: &Srgb) -> Component {
    let linear = color.to_linear_light();
    0.2126 * linear.red + 0.7152 * linear.green + 0.0722 * linear.blue
}

/// Compute the WCAG 2.1 contrast ratio between two colors.
///
/// Returns a value in `[1, 21]`; the result is the same regardless of
/// argument order, and identical colors give exactly 1.
pub fn contrast_ratio(a: &Srgb, b: &Srgb) -> Component {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio with each color first alpha-blended over a white
/// backdrop.
///
/// The blend always assumes white; the actual rendering surface is never
/// consulted. A translucent color over a dark surface will therefore score
/// higher here than it renders.
pub fn contrast_ratio_alpha(a: &Hsla, b: &Hsla) -> Component {
    contrast_ratio(&blend_over_white(a), &blend_over_white(b))
}

fn blend_over_white(color: &Hsla) -> Srgb {
    let srgb = Hsl::new(color.hue, color.saturation, color.lightness).to_srgb();
    let alpha = color.alpha.clamp(0.0, 1.0);
    let over = |channel: Component| channel * alpha + (1.0 - alpha);
    Srgb::new(over(srgb.red), over(srgb.green), over(srgb.blue))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white() -> Srgb {
        Srgb::new(1.0, 1.0, 1.0)
    }

    fn black() -> Srgb {
        Srgb::new(0.0, 0.0, 0.0)
    }

    #[test]
    fn identical_colors_have_unit_ratio() {
        assert_eq!(contrast_ratio(&white(), &white()), 1.0);
        assert_eq!(contrast_ratio(&black(), &black()), 1.0);
    }

    #[test]
    fn black_on_white_is_maximal() {
        let ratio = contrast_ratio(&black(), &white());
        approx::assert_abs_diff_eq!(ratio, 21.0, epsilon = 0.05);
    }

    #[test]
    fn ratio_is_symmetric() {
        let a = Srgb::new(0.2, 0.4, 0.8);
        let b = Srgb::new(0.9, 0.9, 0.2);
        assert_eq!(contrast_ratio(&a, &b), contrast_ratio(&b, &a));
        assert!(contrast_ratio(&a, &b) >= 1.0);
    }

    #[test]
    fn luminance_weights_favor_green() {
        let green = relative_luminance(&Srgb::new(0.0, 1.0, 0.0));
        let blue = relative_luminance(&Srgb::new(0.0, 0.0, 1.0));
        assert!(green > blue);
        approx::assert_abs_diff_eq!(green, 0.7152, epsilon = 1.0e-4);
    }

    #[test]
    fn classification_thresholds() {
        assert_eq!(Compliance::from_ratio(3.0), Compliance::empty());
        assert_eq!(Compliance::from_ratio(4.5), Compliance::AA);
        assert_eq!(Compliance::from_ratio(6.9), Compliance::AA);
        assert_eq!(
            Compliance::from_ratio(7.0),
            Compliance::AA | Compliance::AAA
        );
        assert_eq!(
            Compliance::from_ratio(21.0),
            Compliance::AA | Compliance::AAA
        );
    }

    #[test]
    fn transparent_colors_read_as_the_white_backdrop() {
        let invisible = Hsla::new(0.0, 100.0, 50.0, 0.0);
        let white_bg = Hsla::opaque(0.0, 0.0, 100.0);
        assert_eq!(contrast_ratio_alpha(&invisible, &white_bg), 1.0);
    }

    #[test]
    fn translucency_reduces_contrast_against_white() {
        let solid = Hsla::opaque(246.0, 98.0, 30.0);
        let faded = Hsla::new(246.0, 98.0, 30.0, 0.4);
        let white_bg = Hsla::opaque(0.0, 0.0, 100.0);

        let solid_ratio = contrast_ratio_alpha(&solid, &white_bg);
        let faded_ratio = contrast_ratio_alpha(&faded, &white_bg);
        assert!(faded_ratio < solid_ratio);
    }
}
