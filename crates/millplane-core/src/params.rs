//! Machining parameter model and normalization.
//!
//! Raw parameters arrive as [`SurfacingParams`], with optional fields left
//! unset where the caller wants defaults. A single normalization step
//! produces an immutable [`SurfacingJob`] with every field populated and
//! every invariant established; the planner only ever sees jobs.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ParameterError, ParameterResult};

/// Fraction of the tool diameter used when no step-over is supplied.
pub const DEFAULT_STEP_OVER_FRACTION: f64 = 0.4;
/// Fraction of the tool diameter used when no step-down is supplied.
pub const DEFAULT_STEP_DOWN_FRACTION: f64 = 0.1;
/// Default spindle speed (RPM).
pub const DEFAULT_SPINDLE_RPM: u32 = 10_000;
/// Default cutting feed rate (inches/min).
pub const DEFAULT_FEED_RATE: f64 = 30.0;

/// Raw surfacing parameters as supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfacingParams {
    /// Diameter of the tool (inches).
    pub tool_diameter: f64,
    /// Depth of material to remove (inches). A positive magnitude is
    /// accepted and normalized to a negative Z target.
    pub depth: f64,
    /// Spindle speed (RPM).
    pub rpm: u32,
    /// Cutting feed rate (inches/min).
    pub feed_rate: f64,
    /// Depth removed per pass. Unset or non-positive selects the default.
    pub step_down: Option<f64>,
    /// Lateral distance between passes. Unset or non-positive selects the
    /// default.
    pub step_over: Option<f64>,
    /// Width of the stock. Clamped up to the tool diameter.
    pub width: Option<f64>,
    /// Height of the stock. Clamped up to the tool diameter.
    pub height: Option<f64>,
}

impl SurfacingParams {
    /// Creates parameters with the required fields set and everything else
    /// at its default.
    pub fn new(tool_diameter: f64, depth: f64) -> Self {
        Self {
            tool_diameter,
            depth,
            rpm: DEFAULT_SPINDLE_RPM,
            feed_rate: DEFAULT_FEED_RATE,
            step_down: None,
            step_over: None,
            width: None,
            height: None,
        }
    }

    /// Normalizes raw parameters into a fully-populated [`SurfacingJob`].
    ///
    /// Clampable values are corrected, never rejected: undersized stock is
    /// clamped up to the tool diameter, a positive depth is flipped below
    /// the surface, and missing or non-positive step sizes fall back to
    /// fractions of the tool diameter. Only values with no defined
    /// correction (non-positive tool diameter, feed rate, or spindle speed)
    /// produce an error.
    pub fn normalize(&self) -> ParameterResult<SurfacingJob> {
        if !(self.tool_diameter > 0.0) {
            return Err(ParameterError::NotPositive {
                name: "tool_diameter".to_string(),
                value: self.tool_diameter,
            });
        }
        if !(self.feed_rate > 0.0) {
            return Err(ParameterError::NotPositive {
                name: "feed_rate".to_string(),
                value: self.feed_rate,
            });
        }
        if self.rpm == 0 {
            return Err(ParameterError::InvalidValue {
                name: "rpm".to_string(),
                reason: "must be a positive integer".to_string(),
            });
        }

        let tool_diameter = self.tool_diameter;

        let width = match self.width {
            Some(w) if w >= tool_diameter => w,
            _ => tool_diameter,
        };
        let height = match self.height {
            Some(h) if h >= tool_diameter => h,
            _ => tool_diameter,
        };

        // Callers supply depth as a magnitude to remove; the machine works
        // below the surface.
        let target_depth = if self.depth > 0.0 {
            -self.depth
        } else {
            self.depth
        };

        let step_over = match self.step_over {
            Some(s) if s > 0.0 => s,
            _ => {
                let fallback = tool_diameter * DEFAULT_STEP_OVER_FRACTION;
                debug!(step_over = fallback, "step-over defaulted from tool diameter");
                fallback
            }
        };
        let step_down = match self.step_down {
            Some(s) if s > 0.0 => s,
            _ => {
                let fallback = tool_diameter * DEFAULT_STEP_DOWN_FRACTION;
                debug!(step_down = fallback, "step-down defaulted from tool diameter");
                fallback
            }
        };

        Ok(SurfacingJob {
            tool_diameter,
            target_depth,
            rpm: self.rpm,
            feed_rate: self.feed_rate,
            step_down,
            step_over,
            width,
            height,
        })
    }
}

/// A fully-populated, validated surfacing job.
///
/// Invariants: `tool_diameter > 0`, `width >= tool_diameter`,
/// `height >= tool_diameter`, `target_depth <= 0`, `step_over > 0`,
/// `step_down > 0`, `feed_rate > 0`, `rpm > 0`. Constructed only through
/// [`SurfacingParams::normalize`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfacingJob {
    tool_diameter: f64,
    target_depth: f64,
    rpm: u32,
    feed_rate: f64,
    step_down: f64,
    step_over: f64,
    width: f64,
    height: f64,
}

impl SurfacingJob {
    pub fn tool_diameter(&self) -> f64 {
        self.tool_diameter
    }

    /// Target depth, normalized to at or below the surface (Z <= 0).
    pub fn target_depth(&self) -> f64 {
        self.target_depth
    }

    pub fn rpm(&self) -> u32 {
        self.rpm
    }

    pub fn feed_rate(&self) -> f64 {
        self.feed_rate
    }

    pub fn step_down(&self) -> f64 {
        self.step_down
    }

    pub fn step_over(&self) -> f64 {
        self.step_over
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_derived_from_tool_diameter() {
        let job = SurfacingParams::new(0.25, 0.1).normalize().unwrap();
        assert_eq!(job.width(), 0.25);
        assert_eq!(job.height(), 0.25);
        assert_eq!(job.step_over(), 0.25 * DEFAULT_STEP_OVER_FRACTION);
        assert_eq!(job.step_down(), 0.25 * DEFAULT_STEP_DOWN_FRACTION);
        assert_eq!(job.rpm(), DEFAULT_SPINDLE_RPM);
        assert_eq!(job.feed_rate(), DEFAULT_FEED_RATE);
    }

    #[test]
    fn test_undersized_stock_is_clamped() {
        let mut params = SurfacingParams::new(0.25, 0.1);
        params.width = Some(0.1);
        params.height = Some(0.2);
        let job = params.normalize().unwrap();
        assert_eq!(job.width(), 0.25);
        assert_eq!(job.height(), 0.25);
    }

    #[test]
    fn test_oversized_stock_is_kept() {
        let mut params = SurfacingParams::new(0.25, 0.1);
        params.width = Some(3.0);
        params.height = Some(1.5);
        let job = params.normalize().unwrap();
        assert_eq!(job.width(), 3.0);
        assert_eq!(job.height(), 1.5);
    }

    #[test]
    fn test_depth_sign_is_normalized() {
        let positive = SurfacingParams::new(0.25, 5.0).normalize().unwrap();
        let negative = SurfacingParams::new(0.25, -5.0).normalize().unwrap();
        assert_eq!(positive.target_depth(), -5.0);
        assert_eq!(positive, negative);
    }

    #[test]
    fn test_zero_depth_stays_zero() {
        let job = SurfacingParams::new(0.25, 0.0).normalize().unwrap();
        assert_eq!(job.target_depth(), 0.0);
    }

    #[test]
    fn test_non_positive_steps_fall_back() {
        let mut params = SurfacingParams::new(0.5, 0.1);
        params.step_over = Some(0.0);
        params.step_down = Some(-0.05);
        let job = params.normalize().unwrap();
        assert_eq!(job.step_over(), 0.5 * DEFAULT_STEP_OVER_FRACTION);
        assert_eq!(job.step_down(), 0.5 * DEFAULT_STEP_DOWN_FRACTION);
    }

    #[test]
    fn test_explicit_steps_are_kept() {
        let mut params = SurfacingParams::new(0.5, 0.1);
        params.step_over = Some(0.3);
        params.step_down = Some(0.02);
        let job = params.normalize().unwrap();
        assert_eq!(job.step_over(), 0.3);
        assert_eq!(job.step_down(), 0.02);
    }

    #[test]
    fn test_non_positive_tool_diameter_is_rejected() {
        let err = SurfacingParams::new(0.0, 0.1).normalize().unwrap_err();
        assert!(matches!(err, ParameterError::NotPositive { .. }));

        let err = SurfacingParams::new(-1.0, 0.1).normalize().unwrap_err();
        assert!(matches!(err, ParameterError::NotPositive { .. }));
    }

    #[test]
    fn test_non_positive_feed_is_rejected() {
        let mut params = SurfacingParams::new(0.25, 0.1);
        params.feed_rate = 0.0;
        assert!(params.normalize().is_err());
    }

    #[test]
    fn test_zero_rpm_is_rejected() {
        let mut params = SurfacingParams::new(0.25, 0.1);
        params.rpm = 0;
        assert!(params.normalize().is_err());
    }
}
