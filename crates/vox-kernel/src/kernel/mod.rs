//! Solid kernel backends
//!
//! The trait lives in [`traits`]; backends implement it. `LatticeKernel`
//! is the in-memory CSG recorder used for generation and tests.

mod lattice;
mod spline;
mod traits;

pub use lattice::{CsgNode, LatticeKernel};
pub use traits::{Beam, BooleanType, KernelError, KernelResult, NullKernel, Solid, SolidKernel};
