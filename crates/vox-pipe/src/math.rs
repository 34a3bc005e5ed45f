//! Shared numeric guards for directional computations

use glam::Vec3;

/// Below this length a vector is treated as degenerate
pub const DIR_EPS: f32 = 1e-6;

/// Positive floor for every radius handed to the kernel
pub const MIN_RADIUS: f32 = 0.01;

/// Canonical axis substituted for degenerate directions
pub const FALLBACK_AXIS: Vec3 = Vec3::X;

/// Normalize `v`, or return the canonical fallback axis if `v` is
/// near-zero. Every directional computation in the pipeline routes
/// through this so a degenerate input never reaches the kernel as
/// NaN/inf.
pub fn safe_normalize(v: Vec3) -> Vec3 {
    let len = v.length();
    if len > DIR_EPS { v / len } else { FALLBACK_AXIS }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_safe_normalize_preserves_direction() {
        let v = Vec3::new(3.0, -4.0, 12.0);
        let n = safe_normalize(v);
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(n.dot(v), v.length(), epsilon = 1e-4);
    }

    #[test]
    fn test_safe_normalize_degenerate_falls_back() {
        let n = safe_normalize(Vec3::splat(1e-8));
        assert_eq!(n, FALLBACK_AXIS);
        assert!(n.is_finite());

        let z = safe_normalize(Vec3::ZERO);
        assert_eq!(z, FALLBACK_AXIS);
    }
}
