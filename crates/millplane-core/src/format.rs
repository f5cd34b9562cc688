//! Numeric formatting rules for G-code emission.
//!
//! Coordinates accumulate at full precision inside the planner and are only
//! rounded here, at the point of emission, so rounding error never compounds
//! across passes.

/// Formats a coordinate value: rounded half-away-from-zero to 4 decimal
/// places, trailing zeros trimmed, at least one decimal digit kept.
pub fn format_coord(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        // Collapse -0.0 so a tiny negative residue never prints a sign.
        return "0.0".to_string();
    }
    trim_trailing_zeros(format!("{:.4}", rounded))
}

/// Formats a feed rate: up to 3 decimal places, trailing zeros trimmed
/// beyond the first.
pub fn format_feed(value: f64) -> String {
    trim_trailing_zeros(format!("{:.3}", value))
}

fn trim_trailing_zeros(mut s: String) -> String {
    while s.ends_with('0') && !s.ends_with(".0") {
        s.pop();
    }
    s
}
