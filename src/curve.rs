//! The curve engine: named easing curves, custom cubic beziers, and the
//! compression shorthand that maps a single slider value onto a bezier.

use num_traits::Float;

use crate::color::Component;

/// Linearly interpolate from `a` to `b` using `t` as the progress between
/// them.
fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// A CSS-style cubic bezier easing curve, anchored at `(0, 0)` and `(1, 1)`.
///
/// The control point x values are clamped into `[0, 1]` on construction so
/// the curve stays a function of progress.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBezier {
    /// x of the first control point.
    pub x1: Component,
    /// y of the first control point.
    pub y1: Component,
    /// x of the second control point.
    pub x2: Component,
    /// y of the second control point.
    pub y2: Component,
}

impl CubicBezier {
    /// The identity curve.
    pub const LINEAR: Self = Self {
        x1: 0.0,
        y1: 0.0,
        x2: 1.0,
        y2: 1.0,
    };

    /// Create a curve from its two control points.
    pub fn new(x1: Component, y1: Component, x2: Component, y2: Component) -> Self {
        Self {
            x1: x1.clamp(0.0, 1.0),
            y1,
            x2: x2.clamp(0.0, 1.0),
            y2,
        }
    }

    fn x_at(&self, t: Component) -> Component {
        let mt = 1.0 - t;
        3.0 * mt * mt * t * self.x1 + 3.0 * mt * t * t * self.x2 + t * t * t
    }

    fn dx_at(&self, t: Component) -> Component {
        let mt = 1.0 - t;
        3.0 * mt * mt * self.x1
            + 6.0 * mt * t * (self.x2 - self.x1)
            + 3.0 * t * t * (1.0 - self.x2)
    }

    fn y_at(&self, t: Component) -> Component {
        let mt = 1.0 - t;
        3.0 * mt * mt * t * self.y1 + 3.0 * mt * t * t * self.y2 + t * t * t
    }

    /// Evaluate the curve at progress `x` in `[0, 1]`.
    ///
    /// Solves the x polynomial for the curve parameter with Newton-Raphson,
    /// falling back to bisection when the derivative collapses.
    pub fn at(&self, x: Component) -> Component {
        const EPSILON: Component = 1.0e-6;

        let x = x.clamp(0.0, 1.0);

        let mut t = x;
        for _ in 0..8 {
            let error = self.x_at(t) - x;
            if error.abs() < EPSILON {
                return self.y_at(t);
            }
            let slope = self.dx_at(t);
            if slope.abs() < EPSILON {
                break;
            }
            t = (t - error / slope).clamp(0.0, 1.0);
        }

        // x(t) is monotonic for x1, x2 in [0, 1], so bisection always lands.
        let mut lo = 0.0;
        let mut hi = 1.0;
        for _ in 0..32 {
            t = (lo + hi) / 2.0;
            if self.x_at(t) < x {
                lo = t;
            } else {
                hi = t;
            }
        }

        self.y_at(t)
    }
}

/// The named easing curves available to scale generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CurveKind {
    /// No easing.
    Linear,
    /// Slow start.
    EaseIn,
    /// Slow end.
    EaseOut,
    /// Slow start and end.
    EaseInOut,
    /// Stronger slow start.
    EaseInCubic,
    /// Stronger slow end.
    EaseOutCubic,
}

impl CurveKind {
    /// The control points of this curve.
    pub fn bezier(self) -> CubicBezier {
        match self {
            CurveKind::Linear => CubicBezier::LINEAR,
            CurveKind::EaseIn => CubicBezier::new(0.42, 0.0, 1.0, 1.0),
            CurveKind::EaseOut => CubicBezier::new(0.0, 0.0, 0.58, 1.0),
            CurveKind::EaseInOut => CubicBezier::new(0.42, 0.0, 0.58, 1.0),
            CurveKind::EaseInCubic => CubicBezier::new(0.55, 0.055, 0.675, 0.19),
            CurveKind::EaseOutCubic => CubicBezier::new(0.215, 0.61, 0.355, 1.0),
        }
    }
}

/// An easing selector: one of the named curves, or a custom bezier.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Easing {
    /// One of the named curves.
    Named(CurveKind),
    /// Caller-supplied control points.
    Custom(CubicBezier),
}

impl Easing {
    /// Evaluate the selected curve at progress `t`.
    pub fn at(&self, t: Component) -> Component {
        match self {
            Easing::Named(kind) => kind.bezier().at(t),
            Easing::Custom(bezier) => bezier.at(t),
        }
    }
}

impl From<CurveKind> for Easing {
    fn from(kind: CurveKind) -> Self {
        Easing::Named(kind)
    }
}

/// Map an eased progress into the `[from, to]` range:
/// `from + (to - from) * easing(t)`.
pub fn apply_easing(t: Component, from: Component, to: Component, easing: &Easing) -> Component {
    lerp(from, to, easing.at(t))
}

/// Map the compression shorthand `c` in `[-100, 100]` onto its bezier.
///
/// Zero is linear. Positive values pull the second control point's x toward
/// zero, approaching a strong ease-out at 100; negative values pull the
/// first control point's x toward one, approaching a strong ease-in at
/// -100. This mapping is the authoritative contract for the shorthand.
pub fn compression_to_bezier(compression: Component) -> CubicBezier {
    let c = compression.clamp(-100.0, 100.0);
    let strength = 0.42 * (c.abs() / 100.0);

    if c > 0.0 {
        CubicBezier::new(0.0, 0.0, 1.0 - strength, 1.0)
    } else if c < 0.0 {
        CubicBezier::new(strength, 0.0, 1.0, 1.0)
    } else {
        CubicBezier::LINEAR
    }
}

/// Snap a compression value to its closest display notch and name it.
///
/// Display-only: labels for a slider UI. The generator always consumes
/// [`compression_to_bezier`], which this quantizer must never alter.
pub fn compression_to_curve(compression: Component) -> CurveKind {
    const NOTCHES: [(Component, CurveKind); 5] = [
        (-66.0, CurveKind::EaseInCubic),
        (-33.0, CurveKind::EaseIn),
        (0.0, CurveKind::Linear),
        (33.0, CurveKind::EaseOut),
        (66.0, CurveKind::EaseOutCubic),
    ];

    let c = compression.clamp(-100.0, 100.0);
    let mut best = NOTCHES[0];
    for notch in NOTCHES {
        if (c - notch.0).abs() < (c - best.0).abs() {
            best = notch;
        }
    }
    best.1
}
