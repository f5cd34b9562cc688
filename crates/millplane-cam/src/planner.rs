//! Raster surfacing toolpath planner.
//!
//! Pure computation: a [`SurfacingJob`] in, an ordered stream of
//! [`MotionCommand`]s out. No I/O, no text formatting; rendering is the
//! emitter's job.

use millplane_core::{MotionCommand, SurfacingJob};
use tracing::debug;

/// Z height considered safe for non-cutting repositioning (inches).
pub const CLEARANCE_Z: f64 = 0.125;
/// Z height of the final retract after the last pass (inches).
pub const RETRACT_Z: f64 = 0.25;
/// Feed rate for vertical plunges (inches/min).
pub const PLUNGE_FEED: f64 = 10.0;
/// Tool slot used for the surfacing cutter.
const TOOL_NUMBER: u32 = 1;

/// Computes the sequence of pass depths from the surface down to
/// `target_depth` in `step_down` decrements, clamped so the final pass
/// lands exactly on `target_depth` and never beyond it.
///
/// Empty when `target_depth` is zero.
pub fn depth_steps(target_depth: f64, step_down: f64) -> Vec<f64> {
    let mut steps = Vec::new();
    let mut current_depth = 0.0;
    while current_depth > target_depth {
        current_depth -= step_down;
        if current_depth < target_depth {
            current_depth = target_depth;
        }
        steps.push(current_depth);
    }
    steps
}

/// Plans the full surfacing program for a job.
///
/// The tool path overshoots the stock by one tool radius on each side of
/// the milling axis so the tool's edge, not its center, clears the full
/// stock width. Coordinates accumulate at full precision; rounding happens
/// only at emission.
pub fn plan(job: &SurfacingJob) -> Vec<MotionCommand> {
    let tool_radius = job.tool_diameter() / 2.0;
    let start_x = -tool_radius;
    let end_x = job.width() + tool_radius;

    let mut commands = vec![
        MotionCommand::SetUnits,
        MotionCommand::SetAbsoluteMode,
        MotionCommand::RapidMove {
            x: Some(0.0),
            y: Some(0.0),
            z: Some(CLEARANCE_Z),
        },
        MotionCommand::SpindleOff,
        MotionCommand::ToolChange {
            tool_number: TOOL_NUMBER,
            tool_diameter: job.tool_diameter(),
        },
        MotionCommand::SpindleOn { rpm: job.rpm() },
        MotionCommand::RapidMove {
            x: Some(start_x),
            y: Some(0.0),
            z: None,
        },
        MotionCommand::RapidMove {
            x: None,
            y: None,
            z: Some(CLEARANCE_Z),
        },
    ];

    // `current_height` is threaded through the depth loop without being
    // reset: a depth pass resumes wherever the previous one stopped, so
    // once the raster has swept past the stock height no further depth
    // pass cuts. Resetting it per depth pass changes the machining output
    // materially.
    let mut current_height = 0.0;
    let mut cutting_passes = 0usize;

    for pass_depth in depth_steps(job.target_depth(), job.step_down()) {
        while current_height <= job.height() {
            // Plunge to the cutting depth for this pass.
            commands.push(MotionCommand::LinearMove {
                x: None,
                y: None,
                z: Some(pass_depth),
                feed: Some(PLUNGE_FEED),
            });
            // Full-width cut at the current Y and depth.
            commands.push(MotionCommand::LinearMove {
                x: Some(end_x),
                y: None,
                z: None,
                feed: Some(job.feed_rate()),
            });
            // Retract and return to the start of the pass.
            commands.push(MotionCommand::RapidMove {
                x: Some(start_x),
                y: Some(current_height),
                z: Some(CLEARANCE_Z),
            });

            current_height += job.step_over();

            // Pre-position for the next pass, emitted even when the sweep
            // is about to terminate.
            commands.push(MotionCommand::RapidMove {
                x: Some(start_x),
                y: Some(current_height),
                z: Some(CLEARANCE_Z),
            });

            cutting_passes += 1;
        }
    }

    commands.push(MotionCommand::RapidMove {
        x: None,
        y: None,
        z: Some(RETRACT_Z),
    });
    commands.push(MotionCommand::SpindleOff);
    commands.push(MotionCommand::ProgramEnd);

    debug!(
        commands = commands.len(),
        cutting_passes,
        start_x,
        end_x,
        "planned surfacing toolpath"
    );
    commands
}
