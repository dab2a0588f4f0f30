//! Perceptual color difference (CIE76 ΔE) and the redundancy checks built
//! on it.
//!
//! ΔE is the Euclidean distance between two colors in the Lab space; values
//! at or below [`DEFAULT_REDUNDANCY_THRESHOLD`] mark steps a viewer cannot
//! reliably tell apart.

use crate::color::{Component, Hsla};
use crate::convert::{hex_to_hsla, ParseColorError};
use crate::models::{Hsl, Lab};
use crate::scale::Swatch;

/// Steps closer than this are flagged perceptually redundant.
pub const DEFAULT_REDUNDANCY_THRESHOLD: Component = 4.0;

/// The CIE76 distance between two Lab colors: the root of the summed
/// squared channel differences. Identical colors give exactly zero.
pub fn delta_e(a: &Lab, b: &Lab) -> Component {
    let dl = a.lightness - b.lightness;
    let da = a.a - b.a;
    let db = a.b - b.b;
    (dl * dl + da * da + db * db).sqrt()
}

/// The CIE76 distance between two hex colors.
pub fn delta_e_hex(a: &str, b: &str) -> Result<Component, ParseColorError> {
    Ok(delta_e(
        &lab_of(&hex_to_hsla(a)?),
        &lab_of(&hex_to_hsla(b)?),
    ))
}

/// Whether two colors sit at or below the redundancy threshold.
pub fn is_redundant(a: &Lab, b: &Lab, threshold: Component) -> bool {
    delta_e(a, b) <= threshold
}

/// Check one ramp index against every other step in the same ramp.
///
/// Returns the indices whose distance to `index` is at or below
/// `threshold`, with the distances. An out-of-range index returns an empty
/// set rather than failing.
pub fn redundant_steps(
    scale: &[Swatch],
    index: usize,
    threshold: Component,
) -> Vec<(usize, Component)> {
    let Some(subject) = scale.get(index) else {
        return Vec::new();
    };
    let subject = lab_of(&subject.color);

    scale
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .filter_map(|(i, swatch)| {
            let distance = delta_e(&subject, &lab_of(&swatch.color));
            (distance <= threshold).then_some((i, distance))
        })
        .collect()
}

fn lab_of(color: &Hsla) -> Lab {
    Hsl::new(color.hue, color.saturation, color.lightness)
        .to_srgb()
        .to_lab()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::{generate, ScaleMode};
    use crate::token::{ColorToken, Role};

    #[test]
    fn identical_colors_have_zero_distance() {
        assert_eq!(delta_e_hex("#ffffff", "#ffffff").unwrap(), 0.0);
        assert_eq!(delta_e_hex("#123456", "#123456").unwrap(), 0.0);
    }

    #[test]
    fn near_identical_whites_are_redundant() {
        let distance = delta_e_hex("#ffffff", "#fefefe").unwrap();
        assert!(distance < 1.0);
        assert!(distance > 0.0);

        let a = lab_of(&hex_to_hsla("#ffffff").unwrap());
        let b = lab_of(&hex_to_hsla("#fefefe").unwrap());
        assert!(is_redundant(&a, &b, DEFAULT_REDUNDANCY_THRESHOLD));
    }

    #[test]
    fn white_and_black_are_maximally_distant() {
        assert!(delta_e_hex("#ffffff", "#000000").unwrap() > 90.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let forward = delta_e_hex("#ff0000", "#0000ff").unwrap();
        let backward = delta_e_hex("#0000ff", "#ff0000").unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn malformed_hex_propagates() {
        assert!(delta_e_hex("#ffffff", "nope").is_err());
        assert!(delta_e_hex("nope", "#ffffff").is_err());
    }

    #[test]
    fn default_ramp_has_no_redundant_neighbors() {
        let token = ColorToken::for_role(Role::Primary);
        let scale = generate(&token, ScaleMode::Hsl);
        for index in 0..scale.len() {
            let flagged = redundant_steps(&scale, index, DEFAULT_REDUNDANCY_THRESHOLD);
            assert!(flagged.is_empty(), "step {index} flagged {flagged:?}");
        }
    }

    #[test]
    fn tight_ramp_flags_its_neighbors() {
        let mut token = ColorToken::for_role(Role::Primary);
        // Compress the whole ramp into a sliver so neighbors collide.
        token.lightness = 50.0;
        let scale = generate(&token, ScaleMode::Hsl);

        let mut tight = scale.clone();
        for swatch in &mut tight {
            swatch.color.lightness = 50.0;
            swatch.color.saturation = token.saturation;
        }
        let flagged = redundant_steps(&tight, 0, DEFAULT_REDUNDANCY_THRESHOLD);
        assert_eq!(flagged.len(), tight.len() - 1);
    }

    #[test]
    fn out_of_range_index_is_empty_not_fatal() {
        let token = ColorToken::for_role(Role::Primary);
        let scale = generate(&token, ScaleMode::Hsl);
        assert!(redundant_steps(&scale, 99, DEFAULT_REDUNDANCY_THRESHOLD).is_empty());
    }
}
