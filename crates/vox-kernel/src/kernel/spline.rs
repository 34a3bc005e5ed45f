//! Catmull-Rom curve evaluation
//!
//! Uniform Catmull-Rom interpolation through a sequence of control
//! points, with phantom endpoints mirrored through the curve ends. The
//! curve passes through every control point and the endpoint tangents
//! follow the first and last control segments, which is what the pipe
//! pipeline needs for flange orientation.

use glam::Vec3;

/// Sample `sample_count` points along the interpolated curve.
///
/// Callers must supply at least two control points and request at least
/// two samples; validation happens at the kernel boundary.
pub fn catmull_rom(control_points: &[Vec3], sample_count: usize) -> Vec<Vec3> {
    let segments = control_points.len() - 1;
    let mut out = Vec::with_capacity(sample_count);
    for i in 0..sample_count {
        let t = i as f32 / (sample_count - 1) as f32 * segments as f32;
        let seg = (t.floor() as usize).min(segments - 1);
        let u = t - seg as f32;
        out.push(eval_segment(control_points, seg, u));
    }
    out
}

/// Evaluate one cubic segment at local parameter `u` in [0, 1].
///
/// Phantom endpoints are mirrored through the curve ends, which makes a
/// two-point curve an exact linear segment and gives the end tangents
/// the direction of the first/last control segment.
fn eval_segment(points: &[Vec3], seg: usize, u: f32) -> Vec3 {
    let p1 = points[seg];
    let p2 = points[seg + 1];
    let p0 = if seg == 0 {
        2.0 * p1 - p2
    } else {
        points[seg - 1]
    };
    let p3 = if seg + 2 < points.len() {
        points[seg + 2]
    } else {
        2.0 * p2 - p1
    };

    let u2 = u * u;
    let u3 = u2 * u;

    0.5 * (2.0 * p1
        + (p2 - p0) * u
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * u2
        + (3.0 * p1 - 3.0 * p2 - p0 + p3) * u3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_passes_through_endpoints() {
        let pts = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(10.0, 5.0, 0.0),
            Vec3::new(20.0, 0.0, 3.0),
        ];
        let samples = catmull_rom(&pts, 50);
        assert_eq!(samples.len(), 50);
        assert!(samples[0].distance(pts[0]) < 1e-5);
        assert!(samples[49].distance(pts[2]) < 1e-5);
    }

    #[test]
    fn test_curve_passes_through_interior_control_points() {
        let pts = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(10.0, 5.0, 0.0),
            Vec3::new(20.0, 0.0, 3.0),
        ];
        // 3 points = 2 segments; an odd sample grid lands a sample exactly
        // on the interior control point.
        let samples = catmull_rom(&pts, 101);
        assert!(samples[50].distance(pts[1]) < 1e-4);
    }

    #[test]
    fn test_two_point_curve_is_a_line() {
        let a = Vec3::ZERO;
        let b = Vec3::new(50.0, 0.0, 0.0);
        let samples = catmull_rom(&[a, b], 11);
        for (i, p) in samples.iter().enumerate() {
            let expected = a.lerp(b, i as f32 / 10.0);
            assert!(p.distance(expected) < 1e-4);
        }
    }
}
