//! Procedural Flanged-Pipe Geometry Pipeline
//!
//! This crate provides:
//! - Spline path sampling and degenerate-segment cleaning
//! - Stable orthonormal frame derivation with degeneracy fallback
//! - Watertight hollow-tube sweeping with segment overlap
//! - Flange and bolt-hole-pattern construction with cross-end clocking
//! - An assembler orchestrating the above into one final solid
//!
//! All volumetric work is delegated to a [`vox_kernel::SolidKernel`];
//! the pipeline only decides which primitives to emit and how to
//! combine them.

pub mod assembler;
pub mod bolts;
pub mod flange;
pub mod frame;
pub mod math;
pub mod path;
pub mod sweep;

mod error;

// Re-exports for convenience
pub use assembler::{Assembly, PipeAssembler, PipePath, PipeSpec};
pub use bolts::make_bolt_holes;
pub use error::{PipeError, PipeResult};
pub use flange::make_flange;
pub use frame::{Frame, solve_frame};
pub use math::safe_normalize;
pub use path::{clean_path, sample_path};
pub use sweep::sweep_hollow_tube;
