use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use millplane::{emit, init_logging, plan, SurfacingParams};
use millplane_core::params::{DEFAULT_FEED_RATE, DEFAULT_SPINDLE_RPM};

/// Utility for generating G-code for plane milling stock
#[derive(Parser, Debug)]
#[command(name = "millplane", version, about)]
struct Cli {
    /// Diameter of the tool (inches)
    #[arg(long, value_name = "INCHES")]
    tool_diameter: f64,

    /// Depth of material to remove (inches)
    #[arg(long, value_name = "INCHES")]
    depth: f64,

    /// Output filename
    #[arg(long, value_name = "FILE")]
    output: PathBuf,

    /// Spindle speed (RPM)
    #[arg(long, default_value_t = DEFAULT_SPINDLE_RPM)]
    rpm: u32,

    /// Cutting feed rate (inches/min)
    #[arg(long, default_value_t = DEFAULT_FEED_RATE)]
    feed: f64,

    /// Depth removed per pass (defaults to 0.1 x tool diameter)
    #[arg(long, value_name = "INCHES")]
    step_down: Option<f64>,

    /// Lateral distance between passes (defaults to 0.4 x tool diameter)
    #[arg(long, value_name = "INCHES")]
    step_over: Option<f64>,

    /// Width of stock (defaults to tool diameter)
    #[arg(long, value_name = "INCHES")]
    width: Option<f64>,

    /// Height of stock (defaults to tool diameter)
    #[arg(long, value_name = "INCHES")]
    height: Option<f64>,
}

fn main() -> Result<()> {
    init_logging()?;
    let cli = Cli::parse();

    let params = SurfacingParams {
        tool_diameter: cli.tool_diameter,
        depth: cli.depth,
        rpm: cli.rpm,
        feed_rate: cli.feed,
        step_down: cli.step_down,
        step_over: cli.step_over,
        width: cli.width,
        height: cli.height,
    };

    let job = params.normalize()?;
    let commands = plan(&job);

    let file = File::create(&cli.output)
        .with_context(|| format!("failed to create {}", cli.output.display()))?;
    emit(&commands, file)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    info!(
        commands = commands.len(),
        output = %cli.output.display(),
        "wrote surfacing program"
    );
    Ok(())
}
