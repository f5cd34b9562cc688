//! Motion-command stream produced by the toolpath planner.

/// A single machine motion command.
///
/// The planner produces an ordered stream of these; the order is
/// load-bearing, since a move's effect depends on the mode and position
/// established by the commands before it. The stream is write-once and
/// consumed exactly once by the emitter; nothing removes or reorders
/// commands after generation.
#[derive(Debug, Clone, PartialEq)]
pub enum MotionCommand {
    /// Select inch units (G20).
    SetUnits,
    /// Absolute distance mode (G90).
    SetAbsoluteMode,
    /// Non-cutting positioning move. Omitted axes stay where they are.
    RapidMove {
        x: Option<f64>,
        y: Option<f64>,
        z: Option<f64>,
    },
    /// Cutting move at a controlled feed rate. Omitted axes stay where
    /// they are; an omitted feed keeps the machine's current feed.
    LinearMove {
        x: Option<f64>,
        y: Option<f64>,
        z: Option<f64>,
        feed: Option<f64>,
    },
    /// Start the spindle clockwise at the given speed.
    SpindleOn { rpm: u32 },
    /// Stop the spindle.
    SpindleOff,
    /// Load the given tool slot; the diameter is carried for the tool
    /// description comment.
    ToolChange { tool_number: u32, tool_diameter: f64 },
    /// End of program.
    ProgramEnd,
}

impl MotionCommand {
    /// True for moves that cut material (linear moves at feed).
    pub fn is_cutting(&self) -> bool {
        matches!(self, MotionCommand::LinearMove { .. })
    }
}
