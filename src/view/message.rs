//! Conversation widget: draws laid-out cells scaled from points to
//! terminal cells, clipped to a scroll window.

use super::constants::{points_to_columns, points_to_rows, POINTS_PER_COLUMN, POINTS_PER_ROW};
use super::layout::{CellLayout, ConversationLayout};
use super::styles::{border_type, CellStyles};
use crate::layout::{
    EdgeInsets, HorizontalAnchor, LabelAlignment, StyleKind, TextAlignment, VerticalAnchor,
};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

/// Text of the failed-send strip.
pub const FAILED_STRIP_TEXT: &str = "Not delivered";

/// Horizontal gap between a bubble and its time label, in points.
pub const TIME_LABEL_GAP: f64 = 8.0;

/// Rectangle in points, relative to the top-left corner of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointRect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl PointRect {
    fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    fn bottom(&self) -> f64 {
        self.y + self.height
    }

    fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Terminal cells covering this rectangle.
    ///
    /// Empty rectangles map to an empty `Rect`.
    pub fn to_cells(&self) -> Rect {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Rect::default();
        }
        let col = (self.x.max(0.0) / POINTS_PER_COLUMN).floor();
        let row = (self.y.max(0.0) / POINTS_PER_ROW).floor();
        let cols = points_to_columns(self.right()).saturating_sub(col as u16).max(1);
        let rows = points_to_rows(self.bottom()).saturating_sub(row as u16).max(1);
        Rect::new(col as u16, row as u16, cols, rows)
    }
}

/// Where each part of a cell sits, in points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CellFrame {
    /// Date separator (cell top label).
    pub date_separator: PointRect,
    /// Sender name (message top label).
    pub sender_name: PointRect,
    /// Avatar, when drawn.
    pub avatar: Option<PointRect>,
    /// Message container.
    pub container: PointRect,
    /// Time label.
    pub time_label: PointRect,
    /// Failed-send strip (cell bottom view).
    pub failed_strip: PointRect,
}

impl CellFrame {
    /// Place every part of `cell`.
    ///
    /// Banners are centered with the time label below them; bubbles hug
    /// their role's edge with the time label beside their last line.
    pub fn place(cell: &CellLayout) -> Self {
        let attrs = &cell.attributes;
        let slots = &attrs.slots;
        let width = attrs.size.width;
        let height = attrs.size.height;
        let padding = attrs.message_padding;
        let banner = matches!(cell.style.kind, StyleKind::Announcement | StyleKind::Warning);

        let date_separator = PointRect::new(0.0, 0.0, width, slots.cell_top_label.height);
        let sender_name = PointRect::new(
            0.0,
            date_separator.bottom(),
            width,
            slots.message_top_label.height,
        );

        let container_size = slots.message_container;
        let avatar_space = slots.avatar.width + attrs.avatar_leading_trailing_padding;
        let container_x = if banner {
            ((width - container_size.width) / 2.0).max(0.0)
        } else if cell.role.is_outgoing() {
            (width - avatar_space - padding.right - container_size.width).max(0.0)
        } else {
            avatar_space + padding.left
        };
        let container = PointRect::new(
            container_x,
            sender_name.bottom() + padding.top,
            container_size.width,
            container_size.height,
        );

        let avatar = cell.initials.as_ref().map(|_| {
            let size = slots.avatar;
            let x = match attrs.avatar_position.horizontal {
                HorizontalAnchor::CellTrailing => width - size.width,
                _ => 0.0,
            };
            let y = match attrs.avatar_position.vertical {
                VerticalAnchor::CellTop => 0.0,
                VerticalAnchor::MessageTop => container.y,
                VerticalAnchor::MessageCenter => container.y + (container.height - size.height) / 2.0,
                VerticalAnchor::MessageBottom => container.bottom() - size.height,
                VerticalAnchor::CellBottom => height - slots.cell_bottom_view.height - size.height,
                VerticalAnchor::MessageLabelTop | VerticalAnchor::None => sender_name.y,
            };
            PointRect::new(x, y.max(0.0), size.width, size.height)
        });

        let time = slots.time_label;
        let time_label = if banner {
            PointRect::new(
                0.0,
                container.bottom() + padding.bottom + slots.message_bottom_label.height,
                width,
                time.height,
            )
        } else {
            let x = if cell.role.is_outgoing() {
                (container.x - time.width - TIME_LABEL_GAP).max(0.0)
            } else {
                container.right() + TIME_LABEL_GAP
            };
            PointRect::new(x, (container.bottom() - time.height).max(0.0), time.width, time.height)
        };

        let strip_height = slots.cell_bottom_view.height;
        let failed_strip = PointRect::new(0.0, height - strip_height, width, strip_height);

        Self {
            date_separator,
            sender_name,
            avatar,
            container,
            time_label,
            failed_strip,
        }
    }
}

/// Top row and row count of every cell once scaled to the terminal.
pub fn row_spans(layout: &ConversationLayout) -> Vec<(usize, usize)> {
    let mut top = 0;
    layout
        .cells()
        .iter()
        .map(|cell| {
            let rows = usize::from(points_to_rows(cell.height()));
            let span = (top, rows);
            top += rows;
            span
        })
        .collect()
}

/// Total terminal rows of the laid-out conversation.
pub fn total_rows(layout: &ConversationLayout) -> usize {
    row_spans(layout).last().map_or(0, |(top, rows)| top + rows)
}

/// Conversation widget.
///
/// Scrolls by whole terminal rows; cells cut by the window edges are
/// clipped, not skipped.
pub struct ConversationView<'a> {
    layout: &'a ConversationLayout,
    styles: &'a CellStyles,
    scroll: usize,
}

impl<'a> ConversationView<'a> {
    /// Widget over `layout` starting `scroll` rows down.
    pub fn new(layout: &'a ConversationLayout, styles: &'a CellStyles, scroll: usize) -> Self {
        Self {
            layout,
            styles,
            scroll,
        }
    }
}

impl Widget for ConversationView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let window_end = self.scroll + usize::from(area.height);

        for (cell, (top, rows)) in self.layout.cells().iter().zip(row_spans(self.layout)) {
            if rows == 0 || top + rows <= self.scroll {
                continue;
            }
            if top >= window_end {
                break;
            }

            let width = points_to_columns(cell.attributes.size.width).min(area.width);
            let rows_u16 = u16::try_from(rows).unwrap_or(u16::MAX);
            let mut scratch = Buffer::empty(Rect::new(0, 0, width, rows_u16));
            render_cell(cell, self.styles, &mut scratch);

            for row in 0..rows {
                let absolute = top + row;
                if absolute < self.scroll || absolute >= window_end {
                    continue;
                }
                let dest_y = area.y + (absolute - self.scroll) as u16;
                for x in 0..width {
                    let src_y = row as u16;
                    if let (Some(src), Some(dst)) =
                        (scratch.cell((x, src_y)), buf.cell_mut((area.x + x, dest_y)))
                    {
                        *dst = src.clone();
                    }
                }
            }
        }
    }
}

fn alignment(label: &LabelAlignment) -> Alignment {
    match label.text_alignment {
        TextAlignment::Left => Alignment::Left,
        TextAlignment::Center => Alignment::Center,
        TextAlignment::Right => Alignment::Right,
    }
}

fn inset(rect: PointRect, insets: EdgeInsets) -> PointRect {
    PointRect::new(
        rect.x + insets.left,
        rect.y,
        (rect.width - insets.horizontal()).max(0.0),
        rect.height,
    )
}

fn clip(rect: PointRect, buf: &Buffer) -> Rect {
    rect.to_cells().intersection(buf.area)
}

fn render_label(text: &str, rect: PointRect, label: &LabelAlignment, style: Style, buf: &mut Buffer) {
    let area = clip(inset(rect, label.text_insets), buf);
    if area.is_empty() {
        return;
    }
    Paragraph::new(Line::styled(text, style))
        .alignment(alignment(label))
        .render(area, buf);
}

/// Draw one cell into `buf`, whose area is the whole cell.
pub fn render_cell(cell: &CellLayout, styles: &CellStyles, buf: &mut Buffer) {
    let frame = CellFrame::place(cell);
    let attrs = &cell.attributes;

    if let Some(date) = &cell.date_separator {
        render_label(
            date,
            frame.date_separator,
            &attrs.cell_top_label_alignment,
            styles.date_separator,
            buf,
        );
    }

    if let Some(name) = &cell.sender_name {
        render_label(
            name,
            frame.sender_name,
            &attrs.message_top_label_alignment,
            styles.sender_name,
            buf,
        );
    }

    if let (Some(avatar), Some(initials)) = (frame.avatar, &cell.initials) {
        let area = clip(avatar, buf);
        if !area.is_empty() {
            Paragraph::new(initials.as_str())
                .style(styles.avatar)
                .alignment(Alignment::Center)
                .render(area, buf);
        }
    }

    render_container(cell, frame.container, styles, buf);

    let time_alignment = if matches!(cell.style.kind, StyleKind::Announcement | StyleKind::Warning) {
        LabelAlignment::new(TextAlignment::Center, EdgeInsets::ZERO)
    } else {
        LabelAlignment::new(attrs.time_label_alignment.text_alignment, EdgeInsets::ZERO)
    };
    render_label(
        &cell.time_label,
        frame.time_label,
        &time_alignment,
        styles.time_label,
        buf,
    );

    if cell.failed {
        let strip = LabelAlignment::new(TextAlignment::Right, EdgeInsets::right(8.0));
        render_label(
            FAILED_STRIP_TEXT,
            frame.failed_strip,
            &strip,
            styles.failed_strip,
            buf,
        );
    }
}

fn render_container(cell: &CellLayout, rect: PointRect, styles: &CellStyles, buf: &mut Buffer) {
    let area = clip(rect, buf);
    if area.is_empty() {
        return;
    }

    let decision = &cell.style;
    let body_alignment = match decision.kind {
        StyleKind::Announcement | StyleKind::Warning => Alignment::Center,
        StyleKind::LeftBubble | StyleKind::RightBubble => Alignment::Left,
    };
    let mut paragraph = Paragraph::new(cell.body.as_str())
        .style(styles.container(decision))
        .alignment(body_alignment)
        .wrap(Wrap { trim: true });

    if area.height >= 3 && area.width >= 3 {
        paragraph = paragraph.block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type(decision))
                .border_style(styles.border(decision)),
        );
    }
    paragraph.render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample::announcement_conversation;
    use crate::view::layout::LayoutSettings;
    use crate::view::styles::ColorConfig;
    use chrono::{DateTime, Utc};

    fn sample() -> ConversationLayout {
        let now: DateTime<Utc> = "2019-08-27T10:00:00Z".parse().unwrap();
        ConversationLayout::build(&announcement_conversation(now), &LayoutSettings::default())
    }

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf.cell((x, y)).map_or(" ", |c| c.symbol()))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn point_rect_rounds_outward_to_cells() {
        let rect = PointRect::new(12.0, 20.0, 10.0, 10.0);
        assert_eq!(rect.to_cells(), Rect::new(1, 1, 2, 1));
        assert_eq!(PointRect::new(0.0, 0.0, 0.0, 5.0).to_cells(), Rect::default());
    }

    #[test]
    fn row_spans_are_contiguous() {
        let layout = sample();
        let spans = row_spans(&layout);
        assert_eq!(spans.len(), layout.len());
        let mut expected = 0;
        for (top, rows) in &spans {
            assert_eq!(*top, expected);
            expected += rows;
        }
        assert_eq!(total_rows(&layout), expected);
    }

    #[test]
    fn outgoing_bubble_hugs_trailing_edge() {
        let layout = sample();
        let outgoing = &layout.cells()[1];
        let frame = CellFrame::place(outgoing);
        let padding = outgoing.attributes.message_padding;
        assert_eq!(
            frame.container.right(),
            outgoing.attributes.size.width - padding.right
        );
        assert!(frame.avatar.is_none());
    }

    #[test]
    fn incoming_bubble_sits_after_avatar() {
        let layout = sample();
        let incoming = &layout.cells()[2];
        let frame = CellFrame::place(incoming);
        assert_eq!(frame.container.x, 40.0 + 8.0);
        let avatar = frame.avatar.expect("first incoming message shows an avatar");
        assert_eq!(avatar.x, 0.0);
        assert_eq!(avatar.y, frame.sender_name.y);
    }

    #[test]
    fn banner_time_label_sits_below_container() {
        let layout = sample();
        let banner = &layout.cells()[0];
        let frame = CellFrame::place(banner);
        assert_eq!(frame.time_label.y, frame.container.bottom());
        assert_eq!(frame.time_label.bottom(), banner.height());
    }

    #[test]
    fn render_cell_draws_body_and_labels() {
        let layout = sample();
        let styles = CellStyles::new(ColorConfig::fixed(false));
        let cell = &layout.cells()[2];
        let rows = points_to_rows(cell.height());
        let mut buf = Buffer::empty(Rect::new(0, 0, 47, rows));
        render_cell(cell, &styles, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("other user"), "sender name missing:\n{text}");
        assert!(text.contains("Here you are"), "body missing:\n{text}");
        assert!(text.contains("OU"), "avatar initials missing:\n{text}");
    }

    #[test]
    fn scrolling_clips_cells_above_window() {
        let layout = sample();
        let styles = CellStyles::new(ColorConfig::fixed(false));
        let first_rows = row_spans(&layout)[0].1;

        let mut top = Buffer::empty(Rect::new(0, 0, 47, 3));
        ConversationView::new(&layout, &styles, 0).render(top.area, &mut top);
        assert!(buffer_text(&top).contains("2019/08/27"));

        let mut scrolled = Buffer::empty(Rect::new(0, 0, 47, 3));
        ConversationView::new(&layout, &styles, first_rows).render(scrolled.area, &mut scrolled);
        assert!(!buffer_text(&scrolled).contains("2019/08/27"));
    }
}
