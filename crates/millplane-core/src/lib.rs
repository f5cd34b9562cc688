//! # MillPlane Core
//!
//! Core types for raster plane-milling toolpath generation:
//!
//! - [`params`]: machining parameter model and normalization
//! - [`command`]: the motion-command stream produced by the planner
//! - [`format`]: numeric formatting rules for G-code emission
//! - [`error`]: parameter validation errors
//!
//! This crate is pure computation; it performs no I/O.

pub mod command;
pub mod error;
pub mod format;
pub mod params;

pub use command::MotionCommand;
pub use error::{ParameterError, ParameterResult};
pub use params::{SurfacingJob, SurfacingParams};
