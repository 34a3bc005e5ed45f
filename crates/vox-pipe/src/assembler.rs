//! Pipe assembly orchestration
//!
//! Builds the final solid from a [`PipeSpec`]: tube first, then both
//! flanges fused on, then both bolt-hole patterns cut out. Fusing must
//! finish before cutting starts, otherwise the holes would not perforate
//! the flange material; [`Assembly`] makes that ordering an explicit
//! contract instead of call-order discipline.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use vox_kernel::{Solid, SolidKernel};

use crate::bolts::make_bolt_holes;
use crate::error::{PipeError, PipeResult};
use crate::flange::make_flange;
use crate::math::safe_normalize;
use crate::path::sample_path;
use crate::sweep::sweep_hollow_tube;

/// Centerline of the pipe to generate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PipePath {
    /// A straight run between two points (no sampling needed)
    Straight {
        /// Start endpoint
        start: Vec3,
        /// End endpoint
        end: Vec3,
    },
    /// A spline-bent run interpolated through control points
    Bent {
        /// Curve interpolation points
        control_points: Vec<Vec3>,
    },
}

/// Immutable configuration for one generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipeSpec {
    /// Pipe outer radius
    pub outer_radius: f32,
    /// Pipe wall thickness
    pub wall_thickness: f32,
    /// Flange thickness
    pub flange_thickness: f32,
    /// Number of bolt holes per flange
    pub hole_count: u32,
    /// Bolt-hole radius
    pub hole_radius: f32,
    /// Radius of the bolt circle
    pub bolt_circle_radius: f32,
    /// Number of samples along the spline (bent mode)
    pub sample_count: usize,
    /// Minimum segment length after cleaning (bent mode)
    pub min_seg_len: f32,
    /// Segment endpoint extension as a fraction of the outer radius
    /// (bent mode)
    pub overlap_factor: f32,
    /// Shared world reference locking both flanges' bolt clocking
    pub reference_up: Vec3,
    /// Centerline to sweep along
    pub path: PipePath,
}

impl Default for PipeSpec {
    /// The demo bent pipe: a 10-point spline with standard flange and
    /// bolt dimensions.
    fn default() -> Self {
        Self {
            outer_radius: 20.0,
            wall_thickness: 4.0,
            flange_thickness: 4.0,
            hole_count: 8,
            hole_radius: 1.5,
            // Bolt circle slightly wider than the pipe outer radius
            bolt_circle_radius: 20.0 * 1.15,
            sample_count: 400,
            min_seg_len: 0.25,
            overlap_factor: 0.1,
            reference_up: Vec3::X,
            path: PipePath::Bent {
                control_points: vec![
                    Vec3::new(0.0, 0.0, 0.0),
                    Vec3::new(0.0, 40.0, 0.0),
                    Vec3::new(0.0, 50.0, 20.0),
                    Vec3::new(0.0, 60.0, 60.0),
                    Vec3::new(40.0, 60.0, 20.0),
                    Vec3::new(50.0, 80.0, 0.0),
                    Vec3::new(100.0, 80.0, 0.0),
                    Vec3::new(150.0, 80.0, 20.0),
                    Vec3::new(200.0, 80.0, 0.0),
                    Vec3::new(150.0, 90.0, 60.0),
                ],
            },
        }
    }
}

impl PipeSpec {
    /// The demo straight pipe from the origin along +X
    pub fn straight_demo() -> Self {
        Self {
            path: PipePath::Straight {
                start: Vec3::ZERO,
                end: Vec3::new(50.0, 0.0, 0.0),
            },
            ..Self::default()
        }
    }
}

/// Two-phase boolean accumulator: fuse, then cut.
///
/// Once the first cut happens, further fuses are rejected with
/// [`PipeError::FuseAfterCut`].
pub struct Assembly<'a> {
    kernel: &'a dyn SolidKernel,
    solid: Solid,
    cut_started: bool,
}

impl<'a> Assembly<'a> {
    /// Start an assembly from a base solid
    pub fn new(kernel: &'a dyn SolidKernel, base: Solid) -> Self {
        Self {
            kernel,
            solid: base,
            cut_started: false,
        }
    }

    /// Union another solid onto the assembly
    pub fn fuse(&mut self, other: &Solid) -> PipeResult<()> {
        if self.cut_started {
            return Err(PipeError::FuseAfterCut);
        }
        self.solid = self.kernel.union(&self.solid, other)?;
        Ok(())
    }

    /// Subtract a solid from the assembly; ends the fuse phase
    pub fn cut(&mut self, other: &Solid) -> PipeResult<()> {
        self.cut_started = true;
        self.solid = self.kernel.difference(&self.solid, other)?;
        Ok(())
    }

    /// Take the combined result
    pub fn finish(self) -> Solid {
        self.solid
    }
}

/// Orchestrates the full pipeline against one kernel
pub struct PipeAssembler<'a> {
    kernel: &'a dyn SolidKernel,
}

impl<'a> PipeAssembler<'a> {
    /// Create an assembler over a kernel
    pub fn new(kernel: &'a dyn SolidKernel) -> Self {
        Self { kernel }
    }

    /// Generate the complete flanged pipe described by `spec`.
    ///
    /// The pipeline is stateless and deterministic: identical specs
    /// produce geometrically identical solids.
    pub fn build(&self, spec: &PipeSpec) -> PipeResult<Solid> {
        // The straight path is already a 2-point polyline that exceeds
        // any sensible min segment length, so it skips sampling; it also
        // sweeps without overlap, which reproduces the direct
        // outer-minus-inner hollow pipe exactly.
        let (polyline, overlap_factor) = match &spec.path {
            PipePath::Straight { start, end } => (vec![*start, *end], 0.0),
            PipePath::Bent { control_points } => (
                sample_path(
                    self.kernel,
                    control_points,
                    spec.sample_count,
                    spec.min_seg_len,
                )?,
                spec.overlap_factor,
            ),
        };

        if polyline.len() < 2 {
            tracing::warn!(
                points = polyline.len(),
                "path too short to sweep, producing empty solid"
            );
            return Ok(self.kernel.create_empty()?);
        }

        let tube = sweep_hollow_tube(
            self.kernel,
            &polyline,
            spec.outer_radius,
            spec.wall_thickness,
            overlap_factor,
        )?;

        // Flange tangents come from the actual swept polyline, not the
        // control polygon, so flange orientation matches the geometry.
        let start = polyline[0];
        let end = polyline[polyline.len() - 1];
        let start_dir = safe_normalize(polyline[1] - polyline[0]);
        let end_dir = safe_normalize(polyline[polyline.len() - 1] - polyline[polyline.len() - 2]);

        let flange_start = make_flange(
            self.kernel,
            start,
            start_dir,
            spec.outer_radius,
            spec.wall_thickness,
            spec.flange_thickness,
        )?;
        let flange_end = make_flange(
            self.kernel,
            end,
            end_dir,
            spec.outer_radius,
            spec.wall_thickness,
            spec.flange_thickness,
        )?;

        // Shared reference-up keeps both hole patterns clocked together.
        let bolt_start = make_bolt_holes(
            self.kernel,
            start,
            start_dir,
            spec.hole_count,
            spec.hole_radius,
            spec.bolt_circle_radius,
            spec.flange_thickness,
            spec.reference_up,
        )?;
        let bolt_end = make_bolt_holes(
            self.kernel,
            end,
            end_dir,
            spec.hole_count,
            spec.hole_radius,
            spec.bolt_circle_radius,
            spec.flange_thickness,
            spec.reference_up,
        )?;

        let mut assembly = Assembly::new(self.kernel, tube);
        assembly.fuse(&flange_start)?;
        assembly.fuse(&flange_end)?;
        assembly.cut(&bolt_start)?;
        assembly.cut(&bolt_end)?;

        tracing::debug!(segments = polyline.len() - 1, "pipe assembled");
        Ok(assembly.finish())
    }
}
