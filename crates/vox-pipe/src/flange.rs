//! Flange construction
//!
//! A flange is an annular ring centered on a pipe endpoint, oriented by
//! that endpoint's tangent. The bore shares the pipe's wall thickness so
//! it lines up with the pipe's inner radius.

use glam::Vec3;
use vox_kernel::{Beam, Solid, SolidKernel};

use crate::error::PipeResult;
use crate::math::{MIN_RADIUS, safe_normalize};

/// Flange outer radius as a factor of the pipe outer radius
pub const FLANGE_OUTER_FACTOR: f32 = 1.35;

/// Build a flange ring centered at `center`, normal aligned to
/// `pipe_direction`.
///
/// # Arguments
/// * `center` - Pipe endpoint the flange sits on
/// * `pipe_direction` - Endpoint tangent (either orientation works, the
///   ring is symmetric about the center)
/// * `pipe_outer_radius` - Outer radius of the pipe being flanged
/// * `wall_thickness` - Pipe wall thickness; the bore is
///   `pipe_outer_radius - wall_thickness`
/// * `flange_thickness` - Ring extent along the tangent
pub fn make_flange(
    kernel: &dyn SolidKernel,
    center: Vec3,
    pipe_direction: Vec3,
    pipe_outer_radius: f32,
    wall_thickness: f32,
    flange_thickness: f32,
) -> PipeResult<Solid> {
    let dir = safe_normalize(pipe_direction);
    let half = dir * (flange_thickness * 0.5);
    let p1 = center - half;
    let p2 = center + half;

    let flange_outer = (pipe_outer_radius * FLANGE_OUTER_FACTOR).max(MIN_RADIUS);
    let flange_inner = (pipe_outer_radius - wall_thickness).max(MIN_RADIUS);

    let outer = kernel.create_beam(Beam::new(p1, flange_outer, p2, flange_outer, false))?;
    let inner = kernel.create_beam(Beam::new(p1, flange_inner, p2, flange_inner, false))?;
    Ok(kernel.difference(&outer, &inner)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vox_kernel::{CsgNode, LatticeKernel};

    #[test]
    fn test_flange_radii_and_span() {
        let kernel = LatticeKernel::new();
        let center = Vec3::new(50.0, 0.0, 0.0);
        let solid = make_flange(&kernel, center, Vec3::X, 20.0, 4.0, 4.0).unwrap();

        let node = kernel.node(&solid).unwrap();
        assert!(matches!(node, CsgNode::Difference(_, _)));

        let beams = kernel.beams(&solid).unwrap();
        assert_eq!(beams.len(), 2);
        assert_eq!(beams[0].radius_start, 27.0); // 20 * 1.35
        assert_eq!(beams[1].radius_start, 16.0); // 20 - 4
        // Ring spans center +/- thickness/2 along the tangent.
        assert!(beams[0].start.distance(Vec3::new(48.0, 0.0, 0.0)) < 1e-5);
        assert!(beams[0].end.distance(Vec3::new(52.0, 0.0, 0.0)) < 1e-5);
    }

    #[test]
    fn test_flange_degenerate_direction_uses_fallback() {
        let kernel = LatticeKernel::new();
        let solid = make_flange(&kernel, Vec3::ZERO, Vec3::ZERO, 20.0, 4.0, 4.0).unwrap();
        let beams = kernel.beams(&solid).unwrap();
        // Fallback axis is +X, so the ring spans along X.
        assert!(beams[0].start.distance(Vec3::new(-2.0, 0.0, 0.0)) < 1e-5);
        assert!(beams[0].end.distance(Vec3::new(2.0, 0.0, 0.0)) < 1e-5);
    }
}
