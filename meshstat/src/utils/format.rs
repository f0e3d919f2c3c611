//! Formatting utilities

use chrono::{DateTime, TimeZone};
use obj_stat::BoundingBoxStats;

/// Placeholder for bounds of a scan that saw no vertices
pub const NOT_AVAILABLE: &str = "N/A";

/// Format a coordinate, keeping the decimal part of integral values
pub fn format_coord(value: f64) -> String {
    format!("{value:?}")
}

/// Format an optional coordinate
pub fn format_optional_coord(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), format_coord)
}

/// Format a timestamp for use in report file names
///
/// Colons and spaces are not used so the result is a valid file name
/// component on every platform.
pub fn format_report_timestamp<Tz: TimeZone>(datetime: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    datetime.format("%Y-%m-%d_%H-%M-%S%.6f").to_string()
}

/// Render the contents of a statistics report file
pub fn format_report(stats: &BoundingBoxStats) -> String {
    let bounds = stats.bounds();
    let fields = [
        ("minx", bounds.map(|b| b.min_x())),
        ("maxx", bounds.map(|b| b.max_x())),
        ("miny", bounds.map(|b| b.min_y())),
        ("maxy", bounds.map(|b| b.max_y())),
        ("minz", bounds.map(|b| b.min_z())),
        ("maxz", bounds.map(|b| b.max_z())),
    ];

    let mut report = format!("# of vertices: {}\n\n", stats.count());
    for (name, value) in fields {
        report.push_str(&format!("{name}: {}\n", format_optional_coord(value)));
    }
    report
}
