//! tintlab turns a single base color definition into a multi-step color
//! ramp, enforces perceptual-distinctness and accessibility guarantees on
//! that ramp, and keeps a small family of related color definitions
//! consistent under edits.
//!
//! Every function here is a deterministic, side-effect-free transformation:
//! identical inputs always yield bit-identical ramps, hex strings, contrast
//! ratios and ΔE values. The only shared resource is the caller-owned
//! [`TokenSet`], which is mutated exclusively through [`reduce`].

#![deny(missing_docs)]

mod color;
mod contrast;
mod convert;
mod curve;
mod distance;
mod harmony;
mod math;
pub mod models;
mod scale;
mod store;
#[cfg(test)]
mod test;
mod token;

pub use color::{Component, Components, Hsla};
pub use contrast::{
    contrast_ratio, contrast_ratio_alpha, relative_luminance, Compliance, AAA_MIN_RATIO,
    AA_MIN_RATIO,
};
pub use convert::{hex_to_hsla, hsla_to_hex, lch_to_hex, ParseColorError};
pub use curve::{
    apply_easing, compression_to_bezier, compression_to_curve, CubicBezier, CurveKind, Easing,
};
pub use distance::{
    delta_e, delta_e_hex, is_redundant, redundant_steps, DEFAULT_REDUNDANCY_THRESHOLD,
};
pub use harmony::{Harmony, HarmonyTarget};
pub use scale::{
    distribute, enforce_descending, generate, saturation_band, ScaleMode, StepScale, Swatch,
    MIN_LIGHTNESS_GAP,
};
pub use store::{reduce, Action, CurveInput, Store, TokenPatch};
pub use token::{ColorToken, CurvePair, Group, Role, TokenSet};
