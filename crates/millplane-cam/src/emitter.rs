//! Renders a motion-command stream as line-oriented G-code.
//!
//! One command per line in a compact GRBL-style dialect, wrapped in a `%`
//! program leader and an `(END)` trailer. All numeric formatting follows
//! [`millplane_core::format`].

use std::io::{self, BufWriter, Write};

use millplane_core::format::{format_coord, format_feed};
use millplane_core::MotionCommand;
use tracing::debug;

use crate::error::EmitResult;

const PROGRAM_LEADER: &str = "%";
const END_COMMENT: &str = "(END)";

/// Writes the rendered command stream to `sink`.
///
/// Output is buffered; whatever made it into the buffer is flushed before
/// returning, on the failure path as well as the success path. A failure
/// mid-stream leaves a truncated file behind; no recovery is attempted.
pub fn emit<W: Write>(commands: &[MotionCommand], sink: W) -> EmitResult<()> {
    let mut writer = BufWriter::new(sink);
    let write_result = write_program(&mut writer, commands);
    let flush_result = writer.flush();
    write_result?;
    flush_result?;
    debug!(commands = commands.len(), "emitted G-code program");
    Ok(())
}

fn write_program<W: Write>(writer: &mut W, commands: &[MotionCommand]) -> io::Result<()> {
    writeln!(writer, "{}", PROGRAM_LEADER)?;
    for command in commands {
        writeln!(writer, "{}", render_command(command))?;
    }
    writeln!(writer, "{}", END_COMMENT)?;
    Ok(())
}

/// Renders a single command in the output dialect. `ToolChange` renders as
/// two lines: a tool description comment and the change directive.
pub fn render_command(command: &MotionCommand) -> String {
    match command {
        MotionCommand::SetUnits => "G20".to_string(),
        MotionCommand::SetAbsoluteMode => "G90".to_string(),
        MotionCommand::RapidMove { x, y, z } => {
            let mut line = String::from("G0");
            push_axes(&mut line, *x, *y, *z);
            line
        }
        MotionCommand::LinearMove { x, y, z, feed } => {
            let mut line = String::from("G1");
            push_axes(&mut line, *x, *y, *z);
            if let Some(feed) = feed {
                line.push('F');
                line.push_str(&format_feed(*feed));
            }
            line
        }
        MotionCommand::SpindleOn { rpm } => format!("M03S{}", rpm),
        MotionCommand::SpindleOff => "M5".to_string(),
        MotionCommand::ToolChange {
            tool_number,
            tool_diameter,
        } => format!(
            "(TOOL/MILL,{:.3}, 0.000, 0.000, 0.00)\nM6T{}",
            tool_diameter, tool_number
        ),
        MotionCommand::ProgramEnd => "M30".to_string(),
    }
}

fn push_axes(line: &mut String, x: Option<f64>, y: Option<f64>, z: Option<f64>) {
    if let Some(x) = x {
        line.push('X');
        line.push_str(&format_coord(x));
    }
    if let Some(y) = y {
        line.push('Y');
        line.push_str(&format_coord(y));
    }
    if let Some(z) = z {
        line.push('Z');
        line.push_str(&format_coord(z));
    }
}
