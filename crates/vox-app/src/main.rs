//! Voxpipe host application
//!
//! Generates the flanged pipe described by a RON spec file (or the
//! built-in demo spec) and writes the resulting CSG composition to disk
//! for downstream voxelization/viewing.
//!
//! Usage: `vox-app [spec.ron] [output.ron]`

use std::process::ExitCode;

use vox_kernel::LatticeKernel;
use vox_pipe::{PipeAssembler, PipeSpec};

fn main() -> ExitCode {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vox_app=info,vox_pipe=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("generation failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let spec_path = args.next();
    let out_path = args.next().unwrap_or_else(|| "pipe.csg.ron".into());

    let spec = match &spec_path {
        Some(path) => {
            tracing::info!(%path, "loading pipe spec");
            ron::from_str::<PipeSpec>(&std::fs::read_to_string(path)?)?
        }
        None => {
            tracing::info!("no spec file given, using the built-in demo spec");
            PipeSpec::default()
        }
    };

    let kernel = LatticeKernel::new();
    let solid = PipeAssembler::new(&kernel).build(&spec)?;

    let composition = kernel.node(&solid)?;
    tracing::info!(beams = composition.beam_count(), "pipe generated");

    let serialized = ron::ser::to_string_pretty(&composition, ron::ser::PrettyConfig::default())?;
    std::fs::write(&out_path, serialized)?;
    tracing::info!(path = %out_path, "composition written");

    Ok(())
}
