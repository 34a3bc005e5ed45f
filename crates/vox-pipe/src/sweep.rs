//! Hollow-tube sweeping
//!
//! Walks a cleaned polyline and emits an outer and inner tube solid.
//! Each segment is extended past its endpoints by `outer_radius *
//! overlap_factor`: consecutive segments meeting exactly at a shared
//! endpoint can leave micro-gaps or non-manifold seams under voxelized
//! boolean union, and the overlap guarantees solid material at the joint
//! regardless of bend angle.

use glam::Vec3;
use vox_kernel::{Beam, Solid, SolidKernel};

use crate::error::PipeResult;
use crate::math::{MIN_RADIUS, safe_normalize};

/// Sweep a hollow tube along `path`.
///
/// # Arguments
/// * `path` - Cleaned polyline (see [`crate::path::clean_path`])
/// * `outer_radius` - Tube outer radius
/// * `wall_thickness` - Wall thickness; inner radius is clamped to a
///   positive floor if the wall would consume the whole radius
/// * `overlap_factor` - Per-segment endpoint extension, as a fraction of
///   the outer radius (negative values are treated as zero)
///
/// A path with fewer than two points produces the kernel's empty solid.
pub fn sweep_hollow_tube(
    kernel: &dyn SolidKernel,
    path: &[Vec3],
    outer_radius: f32,
    wall_thickness: f32,
    overlap_factor: f32,
) -> PipeResult<Solid> {
    if path.len() < 2 {
        tracing::debug!(points = path.len(), "sweep over degenerate path");
        return Ok(kernel.create_empty()?);
    }

    let inner_radius = (outer_radius - wall_thickness).max(MIN_RADIUS);
    let overlap = outer_radius * overlap_factor.max(0.0);

    let mut outer: Option<Solid> = None;
    let mut inner: Option<Solid> = None;

    for pair in path.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let dir = safe_normalize(b - a);

        // The overlap formula is a heuristic; segments shorter than the
        // extension can fold back on sharp bends.
        let seg_len = a.distance(b);
        if overlap > 0.0 && seg_len < overlap {
            tracing::warn!(seg_len, overlap, "segment shorter than overlap extension");
        }

        let a_ext = a - dir * overlap;
        let b_ext = b + dir * overlap;

        let seg_outer =
            kernel.create_beam(Beam::new(a_ext, outer_radius, b_ext, outer_radius, false))?;
        let seg_inner =
            kernel.create_beam(Beam::new(a_ext, inner_radius, b_ext, inner_radius, false))?;

        outer = Some(match outer {
            Some(acc) => kernel.union(&acc, &seg_outer)?,
            None => seg_outer,
        });
        inner = Some(match inner {
            Some(acc) => kernel.union(&acc, &seg_inner)?,
            None => seg_inner,
        });
    }

    let (Some(outer), Some(inner)) = (outer, inner) else {
        return Ok(kernel.create_empty()?);
    };

    Ok(kernel.difference(&outer, &inner)?)
}
