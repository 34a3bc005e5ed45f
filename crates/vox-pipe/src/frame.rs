//! Orthonormal frame derivation
//!
//! Builds a stable (up, right, forward) basis from a direction and a
//! shared reference-up vector. Calling this with the *same* reference-up
//! at both pipe endpoints keeps the angular phase of both bolt-hole
//! patterns consistent against a shared world reference, which is what
//! lets two mating flanges bolt together ("clocking").

use glam::Vec3;

use crate::math::safe_normalize;

/// Threshold above which up and reference-up are considered parallel
const PARALLEL_DOT: f32 = 0.99;

/// A local orthonormal basis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Normalized input direction
    pub up: Vec3,
    /// Unit vector perpendicular to up
    pub right: Vec3,
    /// Unit vector perpendicular to both up and right
    pub forward: Vec3,
}

/// Derive a frame from a direction and a reference-up vector.
///
/// If the reference is nearly parallel to `up` it is replaced with a
/// world axis (Y unless up itself is mostly Y, then X) so the cross
/// product never degenerates.
pub fn solve_frame(up: Vec3, reference_up: Vec3) -> Frame {
    let up = safe_normalize(up);

    let mut reference = safe_normalize(reference_up);
    if up.dot(reference).abs() > PARALLEL_DOT {
        reference = if up.y.abs() < 0.9 { Vec3::Y } else { Vec3::X };
    }

    let right = safe_normalize(up.cross(reference));
    let forward = safe_normalize(right.cross(up));

    Frame { up, right, forward }
}
