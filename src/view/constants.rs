//! Point-to-terminal scaling constants for the demo screen.
//!
//! Layout works in points; the terminal works in character cells. These
//! values decide how one maps onto the other.

/// Points covered by one terminal column.
pub const POINTS_PER_COLUMN: f64 = 8.0;

/// Points covered by one terminal row.
pub const POINTS_PER_ROW: f64 = 16.0;

/// Height of the status bar in lines.
///
/// Single line for the scroll position and keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Rows moved by PageUp/PageDown.
pub const PAGE_SCROLL_ROWS: u16 = 10;

/// Whole columns needed to show `points` horizontally.
pub fn points_to_columns(points: f64) -> u16 {
    scale(points, POINTS_PER_COLUMN)
}

/// Whole rows needed to show `points` vertically.
pub fn points_to_rows(points: f64) -> u16 {
    scale(points, POINTS_PER_ROW)
}

fn scale(points: f64, per_cell: f64) -> u16 {
    if !points.is_finite() || points <= 0.0 {
        return 0;
    }
    (points / per_cell).ceil().min(f64::from(u16::MAX)) as u16
}
