//! In-memory CSG kernel backend
//!
//! Records every solid as a CSG tree of beam primitives and boolean
//! nodes instead of rasterizing. This is the backend used for generation
//! runs and for tests: the recorded composition can be inspected,
//! compared for equality and serialized.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

use super::spline;
use super::{Beam, BooleanType, KernelError, KernelResult, Solid, SolidKernel};

/// One node of a recorded CSG composition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CsgNode {
    /// No volume
    Empty,
    /// A beam primitive leaf
    Beam(Beam),
    /// Union of two sub-compositions
    Union(Box<CsgNode>, Box<CsgNode>),
    /// Difference of two sub-compositions (left minus right)
    Difference(Box<CsgNode>, Box<CsgNode>),
}

impl CsgNode {
    /// Collect all beam leaves in depth-first order
    pub fn collect_beams(&self, out: &mut Vec<Beam>) {
        match self {
            CsgNode::Empty => {}
            CsgNode::Beam(beam) => out.push(*beam),
            CsgNode::Union(a, b) | CsgNode::Difference(a, b) => {
                a.collect_beams(out);
                b.collect_beams(out);
            }
        }
    }

    /// Number of beam leaves in the composition
    pub fn beam_count(&self) -> usize {
        match self {
            CsgNode::Empty => 0,
            CsgNode::Beam(_) => 1,
            CsgNode::Union(a, b) | CsgNode::Difference(a, b) => a.beam_count() + b.beam_count(),
        }
    }
}

/// In-memory CSG-recording kernel
pub struct LatticeKernel {
    /// Storage for composition data (keyed by UUID)
    solids: Mutex<HashMap<Uuid, CsgNode>>,
}

impl LatticeKernel {
    /// Create a new lattice kernel
    pub fn new() -> Self {
        Self {
            solids: Mutex::new(HashMap::new()),
        }
    }

    /// Store a composition and return a Solid handle
    fn store_node(&self, node: CsgNode) -> Solid {
        let id = Uuid::new_v4();
        let mut solids = self.solids.lock().unwrap();
        solids.insert(id, node);
        Solid::new(id)
    }

    /// Get the recorded composition of a solid
    pub fn node(&self, solid: &Solid) -> KernelResult<CsgNode> {
        let solids = self.solids.lock().unwrap();
        solids
            .get(&solid.id)
            .cloned()
            .ok_or(KernelError::UnknownSolid(solid.id))
    }

    /// Get all beam leaves of a solid's composition
    pub fn beams(&self, solid: &Solid) -> KernelResult<Vec<Beam>> {
        let node = self.node(solid)?;
        let mut out = Vec::new();
        node.collect_beams(&mut out);
        Ok(out)
    }

    /// Number of beam leaves in a solid's composition
    pub fn beam_count(&self, solid: &Solid) -> KernelResult<usize> {
        Ok(self.node(solid)?.beam_count())
    }
}

impl Default for LatticeKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl SolidKernel for LatticeKernel {
    fn name(&self) -> &str {
        "lattice"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn create_beam(&self, beam: Beam) -> KernelResult<Solid> {
        if beam.radius_start <= 0.0 || beam.radius_end <= 0.0 {
            return Err(KernelError::InvalidPrimitive(format!(
                "beam radii must be positive, got {} and {}",
                beam.radius_start, beam.radius_end
            )));
        }
        if !(beam.start.is_finite() && beam.end.is_finite()) {
            return Err(KernelError::InvalidPrimitive(
                "beam endpoints must be finite".into(),
            ));
        }
        tracing::trace!(length = beam.length(), "beam recorded");
        Ok(self.store_node(CsgNode::Beam(beam)))
    }

    fn create_empty(&self) -> KernelResult<Solid> {
        Ok(self.store_node(CsgNode::Empty))
    }

    fn boolean(&self, a: &Solid, b: &Solid, op: BooleanType) -> KernelResult<Solid> {
        let node_a = self.node(a)?;
        let node_b = self.node(b)?;
        let combined = match op {
            BooleanType::Union => CsgNode::Union(Box::new(node_a), Box::new(node_b)),
            BooleanType::Subtract => CsgNode::Difference(Box::new(node_a), Box::new(node_b)),
        };
        tracing::debug!(?op, beams = combined.beam_count(), "solids combined");
        Ok(self.store_node(combined))
    }

    fn evaluate_curve(
        &self,
        control_points: &[Vec3],
        sample_count: usize,
    ) -> KernelResult<Vec<Vec3>> {
        if control_points.len() < 2 {
            return Err(KernelError::CurveFailed(format!(
                "need at least 2 control points, got {}",
                control_points.len()
            )));
        }
        if sample_count < 2 {
            return Err(KernelError::CurveFailed(format!(
                "need at least 2 samples, got {sample_count}"
            )));
        }
        Ok(spline::catmull_rom(control_points, sample_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_beam_and_inspect() {
        let kernel = LatticeKernel::new();
        let beam = Beam::new(Vec3::ZERO, 2.0, Vec3::new(10.0, 0.0, 0.0), 2.0, false);
        let solid = kernel.create_beam(beam).unwrap();
        assert_eq!(kernel.node(&solid).unwrap(), CsgNode::Beam(beam));
        assert_eq!(kernel.beam_count(&solid).unwrap(), 1);
    }

    #[test]
    fn test_rejects_nonpositive_radius() {
        let kernel = LatticeKernel::new();
        let beam = Beam::new(Vec3::ZERO, 0.0, Vec3::X, 1.0, false);
        assert!(matches!(
            kernel.create_beam(beam),
            Err(KernelError::InvalidPrimitive(_))
        ));
    }

    #[test]
    fn test_boolean_builds_tree() {
        let kernel = LatticeKernel::new();
        let a = kernel
            .create_beam(Beam::new(Vec3::ZERO, 2.0, Vec3::X, 2.0, false))
            .unwrap();
        let b = kernel
            .create_beam(Beam::new(Vec3::ZERO, 1.0, Vec3::X, 1.0, false))
            .unwrap();
        let diff = kernel.difference(&a, &b).unwrap();
        let node = kernel.node(&diff).unwrap();
        assert!(matches!(node, CsgNode::Difference(_, _)));
        assert_eq!(node.beam_count(), 2);
    }

    #[test]
    fn test_unknown_solid_is_an_error() {
        let kernel = LatticeKernel::new();
        let stray = Solid::new(Uuid::new_v4());
        assert!(matches!(
            kernel.node(&stray),
            Err(KernelError::UnknownSolid(_))
        ));
    }

    #[test]
    fn test_curve_validation() {
        let kernel = LatticeKernel::new();
        assert!(kernel.evaluate_curve(&[Vec3::ZERO], 10).is_err());
        assert!(kernel.evaluate_curve(&[Vec3::ZERO, Vec3::X], 1).is_err());
        let pts = kernel.evaluate_curve(&[Vec3::ZERO, Vec3::X], 10).unwrap();
        assert_eq!(pts.len(), 10);
    }
}
