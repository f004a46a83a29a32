//! Formatting utilities

use humansize::{DECIMAL, format_size};
use tf_math::Vector3;

/// Format a byte count in human-readable format
pub fn format_bytes(bytes: u64) -> String {
    format_size(bytes, DECIMAL)
}

/// Format a percentage
pub fn format_percentage(value: f64) -> String {
    format!("{value:.1}%")
}

/// Format the share of `part` in `total` as a percentage
pub fn format_share(part: usize, total: usize) -> String {
    if total == 0 {
        "N/A".to_string()
    } else {
        format_percentage(part as f64 / total as f64 * 100.0)
    }
}

/// Format a vector with three decimals per component
pub fn format_vector(v: Vector3) -> String {
    format!("({:.3}, {:.3}, {:.3})", v.x, v.y, v.z)
}
