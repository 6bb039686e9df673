//! Interpolatable values
//!
//! Anything a track can tween implements [`Interpolate`]. Scalars drive
//! transforms and opacity; colors blend for particle fills.

use ovation_core::Color;

/// Value that can be blended between two endpoints
pub trait Interpolate: Clone {
    /// Linear blend from `self` toward `other` at unit progress `t`
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Magnitude of the difference, used to detect settled values
    fn distance(&self, other: &Self) -> f32;

    /// True when the two values are within `epsilon` of each other
    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.distance(other) <= epsilon
    }
}

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }

    fn distance(&self, other: &Self) -> f32 {
        (self - other).abs()
    }
}

impl Interpolate for Color {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Color::lerp(self, other, t)
    }

    fn distance(&self, other: &Self) -> f32 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        let da = self.a - other.a;
        (dr * dr + dg * dg + db * db + da * da).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f32_lerp() {
        assert!((0.0f32.lerp(&10.0, 0.5) - 5.0).abs() < 1e-6);
        assert!((1.3f32.lerp(&1.0, 0.0) - 1.3).abs() < 1e-6);
        assert!((1.3f32.lerp(&1.0, 1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_f32_lerp_extrapolates() {
        // Overshooting easings push t past 1
        assert!((0.0f32.lerp(&10.0, 1.2) - 12.0).abs() < 1e-6);
    }

    #[test]
    fn test_f32_distance() {
        assert!((3.0f32.distance(&-1.0) - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_color_lerp_midpoint() {
        let black = Color::rgb(0.0, 0.0, 0.0);
        let white = Color::rgb(1.0, 1.0, 1.0);
        let mid = Interpolate::lerp(&black, &white, 0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);
        assert!((mid.g - 0.5).abs() < 1e-6);
        assert!((mid.b - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_color_distance_zero_for_equal() {
        let c = Color::rgba(0.2, 0.4, 0.6, 0.8);
        assert!(c.distance(&c) < 1e-6);
    }

    #[test]
    fn test_approx_eq_within_epsilon() {
        assert!(1.0f32.approx_eq(&1.0005, 1e-3));
        assert!(!1.0f32.approx_eq(&1.1, 1e-3));
    }
}
