//! Solid Kernel Abstraction
//!
//! This crate provides:
//! - An abstract solid-kernel trait for beam primitives, boolean
//!   combination and curve evaluation
//! - An opaque `Solid` handle shared across backends
//! - `LatticeKernel`, an in-memory backend that records the CSG
//!   composition of every solid it produces
//! - `NullKernel`, used when no backend is available

pub mod kernel;

// Re-exports for convenience
pub use kernel::{
    Beam, BooleanType, CsgNode, KernelError, KernelResult, LatticeKernel, NullKernel, Solid,
    SolidKernel,
};
