//! Bolt-hole pattern construction
//!
//! Places N cylindrical cutting solids evenly around a bolt circle on a
//! flange. The angular phase comes from [`crate::frame::solve_frame`]
//! with a caller-supplied reference-up: use the *same* reference-up for
//! both pipe ends and the two hole patterns stay clocked together.

use glam::Vec3;
use std::f32::consts::TAU;
use vox_kernel::{Beam, Solid, SolidKernel};

use crate::error::PipeResult;
use crate::frame::solve_frame;

/// Build the union of bolt-hole cutting cylinders for one flange.
///
/// # Arguments
/// * `center` - Flange center
/// * `normal` - Flange normal (the pipe tangent at that end)
/// * `hole_count` - Number of holes; zero yields an empty solid
/// * `hole_radius` - Radius of each hole
/// * `bolt_circle_radius` - Radius of the circle the holes sit on
/// * `flange_thickness` - Hole cylinders span the full flange thickness
/// * `reference_up` - Shared world reference locking the angular phase
///
/// The result is meant to be subtracted from the flange/pipe solid.
#[allow(clippy::too_many_arguments)]
pub fn make_bolt_holes(
    kernel: &dyn SolidKernel,
    center: Vec3,
    normal: Vec3,
    hole_count: u32,
    hole_radius: f32,
    bolt_circle_radius: f32,
    flange_thickness: f32,
    reference_up: Vec3,
) -> PipeResult<Solid> {
    if hole_count == 0 {
        return Ok(kernel.create_empty()?);
    }

    let frame = solve_frame(normal, reference_up);
    let half = frame.up * (flange_thickness * 0.5);

    let mut holes: Option<Solid> = None;
    for i in 0..hole_count {
        let angle = TAU * i as f32 / hole_count as f32;
        let radial = angle.cos() * frame.right + angle.sin() * frame.forward;

        let a = center - half + radial * bolt_circle_radius;
        let b = center + half + radial * bolt_circle_radius;

        let hole = kernel.create_beam(Beam::new(a, hole_radius, b, hole_radius, false))?;
        holes = Some(match holes {
            Some(acc) => kernel.union(&acc, &hole)?,
            None => hole,
        });
    }

    let Some(holes) = holes else {
        return Ok(kernel.create_empty()?);
    };
    Ok(holes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vox_kernel::{CsgNode, LatticeKernel};

    #[test]
    fn test_zero_holes_is_empty() {
        let kernel = LatticeKernel::new();
        let solid =
            make_bolt_holes(&kernel, Vec3::ZERO, Vec3::X, 0, 1.5, 23.0, 4.0, Vec3::X).unwrap();
        assert_eq!(kernel.node(&solid).unwrap(), CsgNode::Empty);
    }

    #[test]
    fn test_hole_count_and_placement() {
        let kernel = LatticeKernel::new();
        let center = Vec3::new(50.0, 0.0, 0.0);
        let solid = make_bolt_holes(&kernel, center, Vec3::X, 8, 1.5, 23.0, 4.0, Vec3::X).unwrap();

        let beams = kernel.beams(&solid).unwrap();
        assert_eq!(beams.len(), 8);
        for beam in &beams {
            assert_eq!(beam.radius_start, 1.5);
            // Hole axis spans the flange thickness along the normal.
            assert!((beam.length() - 4.0).abs() < 1e-4);
            // Hole midpoint sits on the bolt circle.
            let mid = (beam.start + beam.end) * 0.5;
            assert!((mid.distance(center) - 23.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_clocking_is_position_independent() {
        // Same normal and reference-up but different centers must give
        // identical radial directions for every hole.
        let kernel = LatticeKernel::new();
        let normal = Vec3::new(0.3, 0.8, -0.2);
        let ref_up = Vec3::X;

        let a = make_bolt_holes(&kernel, Vec3::ZERO, normal, 8, 1.5, 23.0, 4.0, ref_up).unwrap();
        let b = make_bolt_holes(
            &kernel,
            Vec3::new(120.0, -40.0, 7.0),
            normal,
            8,
            1.5,
            23.0,
            4.0,
            ref_up,
        )
        .unwrap();

        let beams_a = kernel.beams(&a).unwrap();
        let beams_b = kernel.beams(&b).unwrap();
        for (ba, bb) in beams_a.iter().zip(&beams_b) {
            let mid_a = (ba.start + ba.end) * 0.5;
            let mid_b = (bb.start + bb.end) * 0.5 - Vec3::new(120.0, -40.0, 7.0);
            assert!(mid_a.distance(mid_b) < 1e-3);
        }
    }
}
