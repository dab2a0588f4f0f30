//! Step distribution: the dual-range eased sequences that turn one base
//! color into an ordered ramp, and the perceptually-uniform variant that
//! runs the same distribution in L*C*h.

use crate::color::{Component, Hsla};
use crate::curve::{apply_easing, Easing};
use crate::models::{Hsl, Lch};
use crate::token::{ColorToken, Role};

/// Which interpolation space a ramp is generated in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ScaleMode {
    /// Ease lightness and saturation directly in the HSL notation.
    #[default]
    Hsl,
    /// Ease in L*C*h for perceptually even steps.
    Perceptual,
}

/// One generated ramp entry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swatch {
    /// The sample in the HSL notation.
    pub color: Hsla,
    /// The sample formatted as a CSS hex string.
    pub hex: String,
}

/// An ordered ramp of swatches, index 0 lightest. Derived on demand from a
/// token, never persisted.
pub type StepScale = Vec<Swatch>;

/// Minimum lightness separation between neighboring steps.
pub const MIN_LIGHTNESS_GAP: Component = 1.0;

/// Lightness floor and ceiling for the HSL generation path.
///
/// The standard and perceptual paths historically used different standard
/// bounds; both pairs are kept at their call sites on purpose.
fn hsl_lightness_bounds(role: Role) -> (Component, Component) {
    if role.is_utility() {
        // The darkest utility step must stay well clear of black.
        (20.0, 95.0)
    } else {
        (2.0, 98.0)
    }
}

/// Lightness floor and ceiling for the perceptual generation path.
fn perceptual_lightness_bounds(role: Role) -> (Component, Component) {
    if role.is_utility() {
        (25.0, 95.0)
    } else {
        (5.0, 95.0)
    }
}

/// Distribute `n` values across the dual ranges around the primary index.
///
/// Index `p` is assigned `vp` exactly, with no easing. Indices below `p`
/// ease from `start` toward `vp`; indices above ease from `vp` toward
/// `end`. Either side may be empty when `p` sits on a boundary.
pub fn distribute(
    n: usize,
    p: usize,
    vp: Component,
    start: Component,
    end: Component,
    light: &Easing,
    dark: &Easing,
) -> Vec<Component> {
    let n = n.max(1);
    let p = p.min(n - 1);

    let mut values = vec![vp; n];

    for (i, value) in values.iter_mut().enumerate().take(p) {
        let t = i as Component / p as Component;
        *value = apply_easing(t, start, vp, light);
    }

    let tail = n - 1 - p;
    for (i, value) in values.iter_mut().enumerate().skip(p + 1) {
        let t = (i - p) as Component / tail as Component;
        *value = apply_easing(t, vp, end, dark);
    }

    values
}

/// Walk the sequence once and clamp any value that is not at least
/// `min_gap` darker than its lighter neighbor, flooring at `floor`.
///
/// The value at `pinned` is left untouched so the primary step keeps its
/// exact base value. The result is non-increasing regardless of how
/// aggressively the easing curves compress the range.
pub fn enforce_descending(
    values: &mut [Component],
    min_gap: Component,
    floor: Component,
    pinned: usize,
) {
    for i in 1..values.len() {
        if i == pinned {
            continue;
        }
        let limit = values[i - 1] - min_gap;
        if values[i] > limit {
            values[i] = limit.max(floor);
        }
    }
}

/// Derive the saturation band for a ramp from the primary saturation.
///
/// Lighter steps ease toward the lower bound and darker steps toward the
/// upper bound, so darker steps may end up more saturated than the primary
/// while lighter steps never do. The asymmetry is deliberate.
pub fn saturation_band(saturation: Component, role: Role) -> (Component, Component) {
    let sp = saturation.clamp(0.0, 100.0);

    let (mut lo, mut hi) = if sp <= 10.0 {
        // Near-grayscale: keep the whole ramp within sight of gray.
        (sp * 0.5, (sp * 1.5).min(12.0))
    } else if sp <= 30.0 {
        (sp * 0.3, (sp * 1.5).min(100.0))
    } else if sp <= 70.0 {
        (sp * 0.5, (sp + 30.0).min(100.0))
    } else {
        (sp * 0.6, 100.0)
    };

    if role == Role::Neutrals {
        lo = lo.min(15.0);
        hi = hi.min(15.0);
    }

    if role.is_utility() {
        // Tighter band keeps the semantic hue recognizable on every step.
        let mid = (lo + hi) / 2.0;
        let half = (hi - lo) / 2.0 * 0.6;
        lo = mid - half;
        hi = mid + half;
    }

    (lo, hi)
}

/// Generate the ramp for a token in the requested mode.
///
/// A pure function of its inputs: identical tokens always produce an
/// identical scale.
pub fn generate(token: &ColorToken, mode: ScaleMode) -> StepScale {
    match mode {
        ScaleMode::Hsl => generate_hsl(token),
        ScaleMode::Perceptual => generate_perceptual(token),
    }
}

fn generate_hsl(token: &ColorToken) -> StepScale {
    let n = (token.steps as usize).max(1);
    let p = (token.primary_step as usize).min(n - 1);

    let (floor, ceiling) = hsl_lightness_bounds(token.role);
    let mut lightness = distribute(
        n,
        p,
        token.lightness,
        ceiling,
        floor,
        &token.lightness_curves.light,
        &token.lightness_curves.dark,
    );
    enforce_descending(&mut lightness, MIN_LIGHTNESS_GAP, floor, p);

    let (lo, hi) = saturation_band(token.saturation, token.role);
    let saturation = distribute(
        n,
        p,
        token.saturation,
        lo,
        hi,
        &token.saturation_curves.light,
        &token.saturation_curves.dark,
    );

    (0..n)
        .map(|i| {
            let color = Hsla::new(token.hue, saturation[i], lightness[i], token.alpha);
            Swatch {
                hex: color.to_hex(),
                color,
            }
        })
        .collect()
}

fn generate_perceptual(token: &ColorToken) -> StepScale {
    let n = (token.steps as usize).max(1);
    let p = (token.primary_step as usize).min(n - 1);

    let base = Hsl::new(token.hue, token.saturation, token.lightness).to_lch();

    let (floor, ceiling) = perceptual_lightness_bounds(token.role);
    let mut lightness = distribute(
        n,
        p,
        base.lightness,
        ceiling,
        floor,
        &token.lightness_curves.light,
        &token.lightness_curves.dark,
    );
    enforce_descending(&mut lightness, MIN_LIGHTNESS_GAP, floor, p);

    let (lo, hi) = saturation_band(token.saturation, token.role);
    let proxy = distribute(
        n,
        p,
        token.saturation,
        lo,
        hi,
        &token.saturation_curves.light,
        &token.saturation_curves.dark,
    );

    let reduction = if token.role == Role::Neutrals { 0.8 } else { 0.3 };

    (0..n)
        .map(|i| {
            let chroma = if i == p {
                base.chroma
            } else {
                // Reconstruct a chroma for this step from a synthetic HSL
                // color, then pull it toward gray as L leaves the midtones.
                let synthetic = Hsl::new(
                    token.hue,
                    proxy[i].clamp(0.0, 100.0),
                    lightness[i].clamp(0.0, 100.0),
                );
                let attenuation = 1.0 - reduction * (lightness[i] - 50.0).abs() / 50.0;
                (synthetic.to_lch().chroma * attenuation).max(0.0)
            };

            let hsl = Lch::new(lightness[i], chroma, base.hue).to_hsl();
            let color = Hsla::new(hsl.hue, hsl.saturation, hsl.lightness, token.alpha);
            Swatch {
                hex: color.to_hex(),
                color,
            }
        })
        .collect()
}
