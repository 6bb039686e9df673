//! Easing curves
//!
//! Standard curves plus numerically solved cubic beziers for timelines that
//! need an exact CSS-style `cubic-bezier(x1, y1, x2, y2)` shape.

/// Easing function applied to unit progress
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    /// No easing, constant velocity
    #[default]
    Linear,
    /// Cubic acceleration from zero velocity
    EaseIn,
    /// Cubic deceleration to zero velocity
    EaseOut,
    /// Cubic acceleration then deceleration
    EaseInOut,
    /// Arbitrary cubic bezier through (0,0), (x1,y1), (x2,y2), (1,1)
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Map unit progress `t` through the curve
    ///
    /// Input is clamped to `[0, 1]`. Output stays in `[0, 1]` for the named
    /// curves; bezier curves may overshoot when their control points do.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(*x1, *y1, *x2, *y2, t),
        }
    }
}

// ============================================================================
// Cubic Bezier Solver
// ============================================================================

/// Evaluate one bezier axis at parameter `s` (endpoints pinned to 0 and 1)
fn sample_axis(c1: f32, c2: f32, s: f32) -> f32 {
    // Horner form of 3(1-s)²s·c1 + 3(1-s)s²·c2 + s³
    let c = 3.0 * c1;
    let b = 3.0 * (c2 - c1) - c;
    let a = 1.0 - c - b;
    ((a * s + b) * s + c) * s
}

fn sample_axis_derivative(c1: f32, c2: f32, s: f32) -> f32 {
    let c = 3.0 * c1;
    let b = 3.0 * (c2 - c1) - c;
    let a = 1.0 - c - b;
    (3.0 * a * s + 2.0 * b) * s + c
}

/// Find the parameter `s` where the x-axis polynomial equals `x`
///
/// Newton-Raphson converges in a handful of iterations for well-behaved
/// curves; a bisection pass covers the flat-derivative cases.
fn solve_for_s(x1: f32, x2: f32, x: f32) -> f32 {
    let mut s = x;
    for _ in 0..8 {
        let err = sample_axis(x1, x2, s) - x;
        if err.abs() < 1e-6 {
            return s;
        }
        let d = sample_axis_derivative(x1, x2, s);
        if d.abs() < 1e-6 {
            break;
        }
        s -= err / d;
    }

    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    s = x;
    while hi - lo > 1e-6 {
        if sample_axis(x1, x2, s) < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }
    s
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let s = solve_for_s(x1, x2, t);
    sample_axis(y1, y2, s)
}
