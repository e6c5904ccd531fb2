//! Plain-text layout report, one line per cell.
//!
//! Used by `--report` to inspect sizes without a terminal UI.

use super::layout::{CellLayout, ConversationLayout};
use crate::layout::{Role, StyleKind};
use crate::model::KindTag;
use std::fmt::Write;

fn kind_name(kind: KindTag) -> &'static str {
    match kind {
        KindTag::Text => "text",
        KindTag::AttributedText => "attributed",
        KindTag::Announcement => "announcement",
        KindTag::Warning => "warning",
        KindTag::Photo => "photo",
        KindTag::Custom => "custom",
    }
}

fn role_name(role: Role) -> &'static str {
    match role {
        Role::Incoming => "in",
        Role::Outgoing => "out",
    }
}

fn style_name(kind: StyleKind) -> &'static str {
    match kind {
        StyleKind::LeftBubble => "left",
        StyleKind::RightBubble => "right",
        StyleKind::Announcement => "announcement",
        StyleKind::Warning => "warning",
    }
}

/// One report line for `cell`.
///
/// Columns: index, kind, role, style, cell size, container size, then the
/// heights of date separator / sender name / time label / failed strip.
pub fn format_cell(cell: &CellLayout) -> String {
    let slots = &cell.attributes.slots;
    let size = cell.attributes.size;
    format!(
        "{:>3} {:<12} {:<3} {:<12} {}x{} container={}x{} labels={}/{}/{}/{}",
        cell.index,
        kind_name(cell.kind),
        role_name(cell.role),
        style_name(cell.style.kind),
        size.width,
        size.height,
        slots.message_container.width,
        slots.message_container.height,
        slots.cell_top_label.height,
        slots.message_top_label.height,
        slots.time_label.height,
        slots.cell_bottom_view.height,
    )
}

/// Full report: every cell, then the total height.
pub fn format_report(layout: &ConversationLayout) -> String {
    let mut out = String::new();
    for cell in layout.cells() {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{}", format_cell(cell));
    }
    let _ = write!(
        out,
        "total: {} cells, {}pt",
        layout.len(),
        layout.total_height()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample::announcement_conversation;
    use crate::view::layout::LayoutSettings;
    use chrono::{DateTime, Utc};

    #[test]
    fn empty_layout_reports_only_total() {
        let report = format_report(&ConversationLayout::default());
        assert_eq!(report, "total: 0 cells, 0pt");
    }

    #[test]
    fn report_has_one_line_per_cell_plus_total() {
        let now: DateTime<Utc> = "2019-08-27T10:00:00Z".parse().unwrap();
        let layout =
            ConversationLayout::build(&announcement_conversation(now), &LayoutSettings::default());
        let report = format_report(&layout);
        assert_eq!(report.lines().count(), 7);
        assert!(report.lines().next().unwrap().contains("announcement"));
        assert!(report.ends_with(&format!("{}pt", layout.total_height())));
    }
}
