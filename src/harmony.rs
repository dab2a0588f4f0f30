//! Hue-relationship formulas and the channel inheritance each relationship
//! applies to its dependent tokens.
//!
//! A harmony rule always reads from the primary token — no other source is
//! representable, so cyclic or mutual harmony cannot be constructed.

use crate::color::{Component, Hsla};
use crate::math::normalize_hue;
use crate::token::Role;

/// The hue relationship binding a dependent token to the primary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Harmony {
    /// Both dependents sit opposite the primary.
    Complementary,
    /// Dependents at 120 degree intervals.
    Triadic,
    /// Dependents adjacent to the primary.
    Analogous,
    /// Dependents flanking the primary's complement.
    SplitComplementary,
}

/// The two roles a harmony rule can drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum HarmonyTarget {
    /// The secondary token.
    Secondary,
    /// The accent token.
    Accent,
}

impl HarmonyTarget {
    /// The role this target addresses.
    pub fn role(self) -> Role {
        match self {
            HarmonyTarget::Secondary => Role::Secondary,
            HarmonyTarget::Accent => Role::Accent,
        }
    }
}

impl Harmony {
    /// The hue rotation, in degrees, applied for the given dependent.
    pub fn hue_offset(self, target: HarmonyTarget) -> Component {
        match (self, target) {
            (Harmony::Complementary, _) => 180.0,
            (Harmony::Triadic, HarmonyTarget::Secondary) => 120.0,
            (Harmony::Triadic, HarmonyTarget::Accent) => 240.0,
            (Harmony::Analogous, HarmonyTarget::Secondary) => 30.0,
            (Harmony::Analogous, HarmonyTarget::Accent) => -30.0,
            (Harmony::SplitComplementary, HarmonyTarget::Secondary) => 150.0,
            (Harmony::SplitComplementary, HarmonyTarget::Accent) => 210.0,
        }
    }

    /// The saturation and lightness multipliers applied for the given
    /// dependent. Complementary copies both channels unchanged.
    pub fn channel_factors(self, target: HarmonyTarget) -> (Component, Component) {
        match (self, target) {
            (Harmony::Complementary, _) => (1.0, 1.0),
            (Harmony::Triadic, _) => (0.85, 1.0),
            (Harmony::Analogous, HarmonyTarget::Secondary) => (0.9, 0.9),
            (Harmony::Analogous, HarmonyTarget::Accent) => (0.9, 1.1),
            (Harmony::SplitComplementary, HarmonyTarget::Secondary) => (0.95, 0.95),
            (Harmony::SplitComplementary, HarmonyTarget::Accent) => (0.95, 1.05),
        }
    }

    /// Derive the dependent's base color from the primary's. The dependent
    /// keeps its own alpha; only hue, saturation and lightness are read from
    /// the result.
    pub fn derive(self, target: HarmonyTarget, primary: &Hsla) -> Hsla {
        let (saturation, lightness) = self.channel_factors(target);
        Hsla::new(
            normalize_hue(primary.hue + self.hue_offset(target)),
            primary.saturation * saturation,
            primary.lightness * lightness,
            primary.alpha,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn complementary_wraps_past_360() {
        let primary = Hsla::opaque(200.0, 80.0, 50.0);
        let derived = Harmony::Complementary.derive(HarmonyTarget::Secondary, &primary);
        assert_component_eq!(derived.hue, 20.0);
        assert_component_eq!(derived.saturation, 80.0);
        assert_component_eq!(derived.lightness, 50.0);
    }

    #[test]
    fn triadic_spreads_by_thirds() {
        let primary = Hsla::opaque(10.0, 80.0, 50.0);
        let secondary = Harmony::Triadic.derive(HarmonyTarget::Secondary, &primary);
        let accent = Harmony::Triadic.derive(HarmonyTarget::Accent, &primary);
        assert_component_eq!(secondary.hue, 130.0);
        assert_component_eq!(accent.hue, 250.0);
        assert_component_eq!(secondary.saturation, 68.0);
        assert_component_eq!(secondary.lightness, 50.0);
    }

    #[test]
    fn analogous_damps_and_diverges_lightness() {
        let primary = Hsla::opaque(100.0, 80.0, 50.0);
        let secondary = Harmony::Analogous.derive(HarmonyTarget::Secondary, &primary);
        let accent = Harmony::Analogous.derive(HarmonyTarget::Accent, &primary);
        assert_component_eq!(secondary.hue, 130.0);
        assert_component_eq!(accent.hue, 70.0);
        assert_component_eq!(secondary.lightness, 45.0);
        assert_component_eq!(accent.lightness, 55.0);
        assert_component_eq!(accent.saturation, 72.0);
    }

    #[test]
    fn split_complementary_flanks_the_complement() {
        let primary = Hsla::opaque(0.0, 80.0, 60.0);
        let secondary = Harmony::SplitComplementary.derive(HarmonyTarget::Secondary, &primary);
        let accent = Harmony::SplitComplementary.derive(HarmonyTarget::Accent, &primary);
        assert_component_eq!(secondary.hue, 150.0);
        assert_component_eq!(accent.hue, 210.0);
        assert_component_eq!(secondary.lightness, 57.0);
        assert_component_eq!(accent.lightness, 63.0);
    }

    #[test]
    fn derived_channels_stay_in_range() {
        let primary = Hsla::opaque(40.0, 100.0, 95.0);
        let accent = Harmony::Analogous.derive(HarmonyTarget::Accent, &primary);
        assert_eq!(accent.lightness, 100.0);
        assert_component_eq!(accent.saturation, 90.0);
    }
}
