//! # MillPlane
//!
//! A Rust utility for generating raster surfacing (plane milling) G-code:
//! sweep a flat rectangular area with unidirectional full-width passes,
//! stepping down until a target depth is reached.
//!
//! ## Architecture
//!
//! MillPlane is organized as a workspace:
//!
//! 1. **millplane-core** - parameter model, motion-command stream, numeric
//!    formatting
//! 2. **millplane-cam** - toolpath planner and G-code emitter
//! 3. **millplane** - command-line binary that ties them together
//!
//! The planner is pure: it turns a validated [`SurfacingJob`] into an
//! ordered stream of [`MotionCommand`]s with no I/O. The emitter renders
//! that stream as line-oriented G-code into any writable sink.

pub use millplane_cam::{emit, plan, EmitError};
pub use millplane_core::{MotionCommand, ParameterError, SurfacingJob, SurfacingParams};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr, keeping stdout clean for piped G-code
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
