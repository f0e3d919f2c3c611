//! Table formatting utilities

use obj_stat::Bounds;
use prettytable::{Cell, Row, Table, format::consts::FORMAT_NO_LINESEP_WITH_TITLE};

use crate::utils::format::format_coord;

/// Per-axis minimum, maximum and extent of a bounding box
pub fn bounds_table(bounds: &Bounds) -> Table {
    let mut table = Table::new();
    table.set_format(*FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(Row::new(
        ["Axis", "Min", "Max", "Extent"]
            .into_iter()
            .map(|h| Cell::new(h).style_spec("b"))
            .collect(),
    ));

    let (dx, dy, dz) = bounds.extents();
    for (axis, min, max, extent) in [
        ("X", bounds.min_x(), bounds.max_x(), dx),
        ("Y", bounds.min_y(), bounds.max_y(), dy),
        ("Z", bounds.min_z(), bounds.max_z(), dz),
    ] {
        table.add_row(Row::new(vec![
            Cell::new(axis).style_spec("Fc"),
            Cell::new(&format_coord(min)),
            Cell::new(&format_coord(max)),
            Cell::new(&format_coord(extent)),
        ]));
    }

    table
}
