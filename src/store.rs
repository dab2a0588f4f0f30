//! The single serialized update path for a token set.
//!
//! Every mutation flows through [`reduce`]: the requested edit, range
//! clamping, group broadcast and harmony recomputation are applied in one
//! transition, so readers never observe a torn intermediate state. Nothing
//! else in the crate mutates a [`TokenSet`].

use crate::color::Component;
use crate::curve::{compression_to_bezier, CubicBezier, CurveKind, Easing};
use crate::harmony::{Harmony, HarmonyTarget};
use crate::token::{Role, TokenSet};

/// A curve as callers may express it, including the legacy numeric
/// shorthands.
///
/// Translated into a canonical [`Easing`] exactly once, at this boundary;
/// the generator never reads these.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CurveInput {
    /// One of the named curves.
    Named(CurveKind),
    /// Custom control points `(x1, y1, x2, y2)`.
    Bezier([Component; 4]),
    /// The compression slider shorthand in `[-100, 100]`.
    Compression(Component),
}

impl CurveInput {
    fn into_easing(self) -> Easing {
        match self {
            CurveInput::Named(kind) => Easing::Named(kind),
            CurveInput::Bezier([x1, y1, x2, y2]) => Easing::Custom(CubicBezier::new(x1, y1, x2, y2)),
            CurveInput::Compression(c) => Easing::Custom(compression_to_bezier(c)),
        }
    }
}

/// A partial edit of one token. `None` fields are left untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TokenPatch {
    /// New hue, in degrees.
    pub hue: Option<Component>,
    /// New saturation, in percent.
    pub saturation: Option<Component>,
    /// New lightness, in percent.
    pub lightness: Option<Component>,
    /// New alpha.
    pub alpha: Option<Component>,
    /// New step count.
    pub steps: Option<u32>,
    /// New primary step index.
    pub primary_step: Option<u32>,
    /// New light-side lightness curve.
    pub lightness_light: Option<CurveInput>,
    /// New dark-side lightness curve.
    pub lightness_dark: Option<CurveInput>,
    /// New light-side saturation curve.
    pub saturation_light: Option<CurveInput>,
    /// New dark-side saturation curve.
    pub saturation_dark: Option<CurveInput>,
}

/// An edit applied to a [`TokenSet`] through [`reduce`].
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Patch one token.
    Update {
        /// The token to edit.
        role: Role,
        /// The fields to change.
        patch: TokenPatch,
    },
    /// Attach or clear a harmony rule on a dependent role.
    SetHarmony {
        /// The dependent to rebind.
        target: HarmonyTarget,
        /// The rule, or `None` to detach.
        harmony: Option<Harmony>,
    },
    /// Replace the whole state, as used by undo and import.
    Replace(TokenSet),
}

/// Apply one action to a state, returning the next state.
///
/// Deterministic and side-effect free; the input state is never touched.
pub fn reduce(state: &TokenSet, action: &Action) -> TokenSet {
    let mut next = state.clone();

    match action {
        Action::Update { role, patch } => {
            apply_patch(&mut next, *role, patch);
            broadcast_geometry(&mut next, *role);
            if *role == Role::Primary {
                derive_dependents(&mut next);
            }
        }
        Action::SetHarmony { target, harmony } => {
            next.get_mut(target.role()).harmony = *harmony;
            derive_dependents(&mut next);
        }
        Action::Replace(replacement) => {
            next = replacement.clone();
            for role in Role::ALL {
                let token = next.get_mut(role);
                token.role = role;
                token.sanitize();
            }
            // The first member of each group is canonical on import.
            broadcast_geometry(&mut next, Role::Primary);
            broadcast_geometry(&mut next, Role::Success);
            derive_dependents(&mut next);
        }
    }

    next
}

fn apply_patch(state: &mut TokenSet, role: Role, patch: &TokenPatch) {
    let token = state.get_mut(role);

    if let Some(hue) = patch.hue {
        token.hue = hue;
    }
    if let Some(saturation) = patch.saturation {
        token.saturation = saturation;
    }
    if let Some(lightness) = patch.lightness {
        token.lightness = lightness;
    }
    if let Some(alpha) = patch.alpha {
        token.alpha = alpha;
    }
    if let Some(steps) = patch.steps {
        token.steps = steps;
    }
    if let Some(primary_step) = patch.primary_step {
        token.primary_step = primary_step;
    }
    if let Some(curve) = patch.lightness_light {
        token.lightness_curves.light = curve.into_easing();
    }
    if let Some(curve) = patch.lightness_dark {
        token.lightness_curves.dark = curve.into_easing();
    }
    if let Some(curve) = patch.saturation_light {
        token.saturation_curves.light = curve.into_easing();
    }
    if let Some(curve) = patch.saturation_dark {
        token.saturation_curves.dark = curve.into_easing();
    }

    token.sanitize();
}

/// Copy the edited member's step geometry to the rest of its group.
fn broadcast_geometry(state: &mut TokenSet, role: Role) {
    let Some(group) = role.group() else {
        return;
    };

    let steps = state[role].steps;
    let primary_step = state[role].primary_step;

    for member in group.members() {
        let token = state.get_mut(member);
        token.steps = steps;
        token.primary_step = primary_step;
        token.sanitize();
    }
}

/// Recompute every harmony-bound dependent from the current primary.
///
/// Dependents are recomputed fully on each call rather than patched
/// incrementally, so they can never drift stale.
fn derive_dependents(state: &mut TokenSet) {
    let primary = state[Role::Primary].hsla();

    for target in [HarmonyTarget::Secondary, HarmonyTarget::Accent] {
        let token = state.get_mut(target.role());
        if let Some(harmony) = token.harmony {
            let derived = harmony.derive(target, &primary);
            token.hue = derived.hue;
            token.saturation = derived.saturation;
            token.lightness = derived.lightness;
            token.sanitize();
        }
    }
}

/// Caller-owned state wrapper that routes every mutation through
/// [`reduce`].
#[derive(Clone, Debug, Default)]
pub struct Store {
    state: TokenSet,
}

impl Store {
    /// Create a store seeded with the default token set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state.
    pub fn state(&self) -> &TokenSet {
        &self.state
    }

    /// Apply an action and return the new state.
    pub fn dispatch(&mut self, action: &Action) -> &TokenSet {
        self.state = reduce(&self.state, action);
        &self.state
    }
}
