//! Solid kernel trait definitions
//!
//! These traits define the interface that all solid kernels must implement.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// A volumetric solid handle
///
/// The handle is opaque to callers; the actual volume data lives inside
/// the kernel that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Solid {
    /// Unique identifier
    pub id: Uuid,
}

impl Solid {
    /// Create a new solid with the given ID
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

/// A capsule/cylinder-like primitive between two weighted endpoints
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Beam {
    /// First endpoint
    pub start: Vec3,
    /// Radius at the first endpoint
    pub radius_start: f32,
    /// Second endpoint
    pub end: Vec3,
    /// Radius at the second endpoint
    pub radius_end: f32,
    /// Whether the endpoints are capped with hemispheres
    pub capped: bool,
}

impl Beam {
    /// Create a new beam between two endpoints
    pub fn new(start: Vec3, radius_start: f32, end: Vec3, radius_end: f32, capped: bool) -> Self {
        Self {
            start,
            radius_start,
            end,
            radius_end,
            capped,
        }
    }

    /// Length of the beam axis
    pub fn length(&self) -> f32 {
        (self.end - self.start).length()
    }
}

/// Boolean operation type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BooleanType {
    /// Union (add)
    Union,
    /// Subtraction (cut)
    Subtract,
}

/// Error type for solid kernel operations
#[derive(Debug, Clone, Error)]
pub enum KernelError {
    #[error("Invalid primitive: {0}")]
    InvalidPrimitive(String),

    #[error("Boolean operation failed: {0}")]
    BooleanFailed(String),

    #[error("Curve evaluation failed: {0}")]
    CurveFailed(String),

    #[error("Unknown solid: {0}")]
    UnknownSolid(Uuid),

    #[error("Kernel not available: {0}")]
    KernelNotAvailable(String),
}

/// Result type for kernel operations
pub type KernelResult<T> = Result<T, KernelError>;

/// The main solid kernel trait
///
/// Implementations of this trait provide the actual volumetric operations
/// using different backends (in-memory CSG, voxel engines, etc.)
pub trait SolidKernel: Send + Sync {
    /// Get the name of this kernel
    fn name(&self) -> &str;

    /// Check if the kernel is available
    fn is_available(&self) -> bool;

    /// Create a beam primitive between two weighted endpoints
    ///
    /// # Arguments
    /// * `beam` - Endpoints, per-endpoint radii and capping
    fn create_beam(&self, beam: Beam) -> KernelResult<Solid>;

    /// Create an empty solid (contains no volume)
    fn create_empty(&self) -> KernelResult<Solid>;

    /// Perform a boolean operation on two solids
    ///
    /// # Arguments
    /// * `a` - The first solid
    /// * `b` - The second solid
    /// * `op` - The boolean operation type
    fn boolean(&self, a: &Solid, b: &Solid, op: BooleanType) -> KernelResult<Solid>;

    /// Evaluate an interpolated curve through the control points
    ///
    /// Returns `sample_count` points along the curve. The exact
    /// interpolation scheme is a backend concern; consecutive samples must
    /// approximate a smooth tangent at the curve's endpoints.
    fn evaluate_curve(
        &self,
        control_points: &[Vec3],
        sample_count: usize,
    ) -> KernelResult<Vec<Vec3>>;

    /// Union (add) two solids
    fn union(&self, a: &Solid, b: &Solid) -> KernelResult<Solid> {
        self.boolean(a, b, BooleanType::Union)
    }

    /// Difference (subtract `b` from `a`)
    fn difference(&self, a: &Solid, b: &Solid) -> KernelResult<Solid> {
        self.boolean(a, b, BooleanType::Subtract)
    }
}

/// A null kernel that always returns errors (used when no kernel is available)
#[derive(Debug, Default)]
pub struct NullKernel;

impl SolidKernel for NullKernel {
    fn name(&self) -> &str {
        "null"
    }

    fn is_available(&self) -> bool {
        false
    }

    fn create_beam(&self, _beam: Beam) -> KernelResult<Solid> {
        Err(KernelError::KernelNotAvailable(
            "No solid kernel available".into(),
        ))
    }

    fn create_empty(&self) -> KernelResult<Solid> {
        Err(KernelError::KernelNotAvailable(
            "No solid kernel available".into(),
        ))
    }

    fn boolean(&self, _a: &Solid, _b: &Solid, _op: BooleanType) -> KernelResult<Solid> {
        Err(KernelError::KernelNotAvailable(
            "No solid kernel available".into(),
        ))
    }

    fn evaluate_curve(
        &self,
        _control_points: &[Vec3],
        _sample_count: usize,
    ) -> KernelResult<Vec<Vec3>> {
        Err(KernelError::KernelNotAvailable(
            "No solid kernel available for curve evaluation".into(),
        ))
    }
}
