//! The persisted data model: roles, base color tokens, and the token set
//! that binds them together.

use std::ops::{Index, RangeInclusive};

use crate::color::{Component, Hsla};
use crate::curve::{CurveKind, Easing};
use crate::harmony::Harmony;
use crate::math::normalize_hue;
use crate::scale::{self, ScaleMode, StepScale};

/// The fixed set of ramp roles a token set carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Role {
    /// The brand's main color.
    Primary,
    /// The brand's supporting color.
    Secondary,
    /// The brand's highlight color.
    Accent,
    /// Low-saturation grays derived from the brand hue.
    Neutrals,
    /// Separator and outline color.
    Border,
    /// Surface background color.
    Background,
    /// Positive feedback color.
    Success,
    /// Cautionary feedback color.
    Warning,
    /// Destructive action color.
    Destructive,
}

/// The binding groups whose members share step geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Group {
    /// Primary, secondary and accent.
    Brand,
    /// Success, warning and destructive.
    Utility,
}

impl Group {
    /// The members of this group.
    pub fn members(self) -> [Role; 3] {
        match self {
            Group::Brand => [Role::Primary, Role::Secondary, Role::Accent],
            Group::Utility => [Role::Success, Role::Warning, Role::Destructive],
        }
    }
}

impl Role {
    /// Every role, in canonical order.
    pub const ALL: [Role; 9] = [
        Role::Primary,
        Role::Secondary,
        Role::Accent,
        Role::Neutrals,
        Role::Border,
        Role::Background,
        Role::Success,
        Role::Warning,
        Role::Destructive,
    ];

    /// Whether this is one of the semantic utility roles.
    pub fn is_utility(self) -> bool {
        matches!(self, Role::Success | Role::Warning | Role::Destructive)
    }

    /// The step-geometry group this role belongs to, if any.
    pub fn group(self) -> Option<Group> {
        match self {
            Role::Primary | Role::Secondary | Role::Accent => Some(Group::Brand),
            Role::Success | Role::Warning | Role::Destructive => Some(Group::Utility),
            _ => None,
        }
    }

    /// The legal range for a token's step count.
    pub fn steps_range(self) -> RangeInclusive<u32> {
        if self.is_utility() {
            3..=7
        } else {
            6..=14
        }
    }

    /// The saturation ceiling for this role.
    pub fn saturation_cap(self) -> Component {
        if self == Role::Neutrals {
            15.0
        } else {
            100.0
        }
    }
}

/// The light-side / dark-side easing selectors for one channel.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurvePair {
    /// Easing between the lightest step and the primary step.
    pub light: Easing,
    /// Easing between the primary step and the darkest step.
    pub dark: Easing,
}

impl Default for CurvePair {
    fn default() -> Self {
        Self {
            light: Easing::Named(CurveKind::EaseOut),
            dark: Easing::Named(CurveKind::EaseIn),
        }
    }
}

/// A base color definition from which a ramp is generated.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorToken {
    /// The role this token fills in the set.
    pub role: Role,
    /// Hue in degrees, normalized into `[0, 360)`.
    pub hue: Component,
    /// Saturation in percent, `[0, 100]`, capped at 15 for neutrals.
    pub saturation: Component,
    /// Lightness in percent, `[0, 100]`.
    pub lightness: Component,
    /// Alpha in `[0, 1]`.
    pub alpha: Component,
    /// Number of ramp steps; utility roles allow 3 to 7, others 6 to 14.
    pub steps: u32,
    /// The ramp index that reproduces the base color exactly.
    pub primary_step: u32,
    /// Easing selectors for the lightness channel.
    pub lightness_curves: CurvePair,
    /// Easing selectors for the saturation channel.
    pub saturation_curves: CurvePair,
    /// Harmony rule binding this token to the primary. Only honored on the
    /// secondary and accent roles; cleared everywhere else.
    pub harmony: Option<Harmony>,
}

impl ColorToken {
    /// Create a token with this role's defaults.
    pub fn for_role(role: Role) -> Self {
        let (hue, saturation, lightness, steps, primary_step) = match role {
            Role::Primary => (246.0, 98.0, 58.0, 9, 5),
            Role::Secondary => (286.0, 88.0, 60.0, 9, 5),
            Role::Accent => (16.0, 92.0, 62.0, 9, 5),
            Role::Neutrals => (246.0, 8.0, 55.0, 10, 5),
            Role::Border => (246.0, 12.0, 86.0, 8, 4),
            Role::Background => (246.0, 14.0, 97.0, 6, 3),
            Role::Success => (142.0, 72.0, 45.0, 5, 2),
            Role::Warning => (38.0, 94.0, 52.0, 5, 2),
            Role::Destructive => (4.0, 86.0, 50.0, 5, 2),
        };

        Self {
            role,
            hue,
            saturation,
            lightness,
            alpha: 1.0,
            steps,
            primary_step,
            lightness_curves: CurvePair::default(),
            saturation_curves: CurvePair::default(),
            harmony: None,
        }
    }

    /// The base color as an HSL value.
    pub fn hsla(&self) -> Hsla {
        Hsla::new(self.hue, self.saturation, self.lightness, self.alpha)
    }

    /// Clamp every numeric field into its legal range. Out-of-range input
    /// is corrected, never rejected.
    pub fn sanitize(&mut self) {
        self.hue = normalize_hue(self.hue);
        self.saturation = self.saturation.clamp(0.0, self.role.saturation_cap());
        self.lightness = self.lightness.clamp(0.0, 100.0);
        self.alpha = self.alpha.clamp(0.0, 1.0);

        let steps = self.role.steps_range();
        self.steps = self.steps.clamp(*steps.start(), *steps.end());
        self.primary_step = self.primary_step.min(self.steps - 1);

        if !matches!(self.role, Role::Secondary | Role::Accent) {
            self.harmony = None;
        }
    }

    /// Generate this token's ramp.
    pub fn scale(&self, mode: ScaleMode) -> StepScale {
        scale::generate(self, mode)
    }
}

/// The full family of color definitions, indexable by [`Role`].
///
/// Invariants (enforced by [`crate::reduce`], the only mutation path):
/// the brand roles share `steps` and `primary_step`, the utility roles
/// share theirs independently, and dependents with a harmony rule track
/// the primary.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenSet {
    tokens: [ColorToken; 9],
    /// Caller-defined extra ramps. An explicit extension point: never
    /// consulted by the group or harmony invariants.
    pub extensions: Vec<(String, ColorToken)>,
}

impl Default for TokenSet {
    fn default() -> Self {
        Self {
            tokens: Role::ALL.map(ColorToken::for_role),
            extensions: Vec::new(),
        }
    }
}

impl Index<Role> for TokenSet {
    type Output = ColorToken;

    fn index(&self, role: Role) -> &ColorToken {
        &self.tokens[role as usize]
    }
}

impl TokenSet {
    /// The token for a role.
    pub fn get(&self, role: Role) -> &ColorToken {
        &self[role]
    }

    pub(crate) fn get_mut(&mut self, role: Role) -> &mut ColorToken {
        &mut self.tokens[role as usize]
    }

    /// Iterate over the nine role tokens in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &ColorToken> {
        self.tokens.iter()
    }

    /// Generate the ramp for a role.
    pub fn scale(&self, role: Role, mode: ScaleMode) -> StepScale {
        self[role].scale(mode)
    }
}
