// extensions/easing.rs
//
// Pure easing and interpolation helpers.
// No dependencies on nodes or the scene, just math.

use std::f32::consts::PI;

/// Easing curve applied to a camera leg's fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant velocity.
    #[default]
    Linear,
    /// Slow start and end.
    SineInOut,
}

impl Easing {
    /// Apply to `t`, clamped to [0, 1]. Maps 0 → 0 and 1 → 1, monotonic in between.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
        }
    }
}

// ── Interpolation helpers ────────────────────────────────────────────────

/// Linearly interpolate between two values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linearly interpolate between two Vec3 values.
#[inline]
pub fn lerp_vec3(a: glam::Vec3, b: glam::Vec3, t: f32) -> glam::Vec3 {
    a + (b - a) * t
}

/// Where `value` sits between `a` and `b`, clamped to [0, 1].
/// A zero-width range counts as already complete.
#[inline]
pub fn inverse_lerp_clamped(a: f32, b: f32, value: f32) -> f32 {
    if (b - a).abs() <= f32::EPSILON {
        return if value >= b { 1.0 } else { 0.0 };
    }
    ((value - a) / (b - a)).clamp(0.0, 1.0)
}
