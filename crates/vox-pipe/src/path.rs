//! Path sampling and cleaning
//!
//! Turns a control-point curve into a polyline fit for sweeping: the
//! kernel evaluates the interpolated curve, then near-duplicate samples
//! are culled so no downstream sweep segment is shorter than
//! `min_seg_len`. Zero-length segments corrupt boolean operations in the
//! voxel backend, so cleaning is not optional.

use glam::Vec3;
use vox_kernel::SolidKernel;

use crate::error::PipeResult;

/// Sample an interpolated curve through `control_points` and clean the
/// result.
///
/// # Arguments
/// * `kernel` - Curve-evaluation collaborator
/// * `control_points` - Curve interpolation points
/// * `sample_count` - Number of raw samples along the curve (min 2)
/// * `min_seg_len` - Minimum distance between kept consecutive points
///
/// Fewer than two control points short-circuit to the input itself:
/// there is no curve to evaluate, and the caller decides what an
/// under-length path means.
pub fn sample_path(
    kernel: &dyn SolidKernel,
    control_points: &[Vec3],
    sample_count: usize,
    min_seg_len: f32,
) -> PipeResult<Vec<Vec3>> {
    if control_points.len() < 2 {
        return Ok(control_points.to_vec());
    }
    let raw = kernel.evaluate_curve(control_points, sample_count.max(2))?;
    let cleaned = clean_path(&raw, min_seg_len);
    tracing::debug!(
        raw = raw.len(),
        kept = cleaned.len(),
        "sampled and cleaned path"
    );
    Ok(cleaned)
}

/// Remove consecutive duplicates / too-short segments.
///
/// Greedy from the first point: a sample is kept only if it is at least
/// `min_seg_len` away from the last kept point. If everything collapses
/// onto the first point but the input had more than one sample, the
/// original last point is force-appended so a sweep is always possible.
pub fn clean_path(points: &[Vec3], min_seg_len: f32) -> Vec<Vec3> {
    let Some(&first) = points.first() else {
        return Vec::new();
    };

    let mut kept = vec![first];
    let mut last = first;
    for &p in &points[1..] {
        if p.distance(last) >= min_seg_len {
            kept.push(p);
            last = p;
        }
    }

    if kept.len() == 1 && points.len() > 1 {
        kept.push(points[points.len() - 1]);
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_empty_input() {
        assert!(clean_path(&[], 0.25).is_empty());
    }

    #[test]
    fn test_clean_enforces_min_segment_length() {
        let pts = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.1, 0.0, 0.0),
            Vec3::new(0.3, 0.0, 0.0),
            Vec3::new(0.35, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
        ];
        let cleaned = clean_path(&pts, 0.25);
        assert!(cleaned.len() >= 2);
        for pair in cleaned.windows(2) {
            assert!(pair[0].distance(pair[1]) >= 0.25);
        }
    }

    #[test]
    fn test_clean_total_collapse_keeps_two_points() {
        // All samples within min_seg_len of the first point.
        let pts = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.01, 0.0, 0.0),
            Vec3::new(0.02, 0.0, 0.0),
            Vec3::new(0.05, 0.0, 0.0),
        ];
        let cleaned = clean_path(&pts, 0.25);
        assert_eq!(cleaned.len(), 2);
        assert_eq!(cleaned[0], pts[0]);
        assert_eq!(cleaned[1], pts[3]);
    }

    #[test]
    fn test_clean_keeps_first_point() {
        let pts = vec![Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0)];
        let cleaned = clean_path(&pts, 0.25);
        assert_eq!(cleaned, pts);
    }
}
