//! # MillPlane CAM
//!
//! Toolpath planning and G-code emission for raster plane milling:
//!
//! - [`planner`]: pure computation from a [`millplane_core::SurfacingJob`]
//!   to an ordered motion-command stream
//! - [`emitter`]: renders the command stream as line-oriented G-code and
//!   writes it to any [`std::io::Write`] sink
//! - [`error`]: emission errors

pub mod emitter;
pub mod error;
pub mod planner;

pub use emitter::{emit, render_command};
pub use error::{EmitError, EmitResult};
pub use planner::{depth_steps, plan, CLEARANCE_Z, PLUNGE_FEED, RETRACT_Z};
