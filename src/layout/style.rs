//! Visual treatment of a message container.
//!
//! Styling is a pure function of the message kind, its failure/banner flags
//! and its role; it never reads slot sizes.

use super::role::Role;
use crate::model::Message;
use ratatui::style::Color;

/// Container shape discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKind {
    /// Incoming speech bubble, tail on the top-left corner.
    LeftBubble,
    /// Outgoing speech bubble, tail on the top-right corner.
    RightBubble,
    /// Rounded full-width banner.
    Announcement,
    /// Bordered full-width banner.
    Warning,
}

/// A corner of the container rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Top-left.
    TopLeft,
    /// Top-right.
    TopRight,
    /// Bottom-left.
    BottomLeft,
    /// Bottom-right.
    BottomRight,
}

/// Container border.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in points.
    pub width: f64,
}

/// Everything the renderer needs to draw a container.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleDecision {
    /// Shape.
    pub kind: StyleKind,
    /// Layer corner radius.
    pub corner_radius: f64,
    /// Corner radius of the bubble mask; `None` when no mask applies.
    pub mask_corner_radius: Option<f64>,
    /// Corners that are rounded; the rest stay square.
    pub rounded_corners: &'static [Corner],
    /// Border, if any.
    pub border: Option<Border>,
    /// Text color.
    pub text_color: Color,
    /// Fill color. `Color::Reset` is transparent.
    pub background_color: Color,
    /// Whether the sender avatar is drawn.
    pub show_avatar: bool,
}

const LEFT_BUBBLE_CORNERS: &[Corner] = &[Corner::TopRight, Corner::BottomLeft, Corner::BottomRight];
const RIGHT_BUBBLE_CORNERS: &[Corner] = &[Corner::TopLeft, Corner::BottomLeft, Corner::BottomRight];
const ALL_CORNERS: &[Corner] = &[
    Corner::TopLeft,
    Corner::TopRight,
    Corner::BottomLeft,
    Corner::BottomRight,
];

/// Shape for `message`: warning beats announcement beats role.
pub fn resolve_style(message: &Message, role: Role) -> StyleKind {
    if message.is_warning() {
        StyleKind::Warning
    } else if message.is_announcement() {
        StyleKind::Announcement
    } else if role.is_outgoing() {
        StyleKind::RightBubble
    } else {
        StyleKind::LeftBubble
    }
}

/// Full style decision for `message`.
///
/// `avatar_rule` is the position-based avatar visibility (see
/// `VisibilityRules::show_avatar`); banners and outgoing bubbles never show
/// an avatar regardless.
pub fn decide(message: &Message, role: Role, avatar_rule: bool) -> StyleDecision {
    let kind = resolve_style(message, role);
    match kind {
        StyleKind::Warning => StyleDecision {
            kind,
            corner_radius: 6.0,
            mask_corner_radius: None,
            rounded_corners: ALL_CORNERS,
            border: Some(Border {
                color: Color::Red,
                width: 1.0,
            }),
            text_color: Color::Red,
            background_color: Color::White,
            show_avatar: false,
        },
        StyleKind::Announcement => StyleDecision {
            kind,
            corner_radius: 30.0,
            mask_corner_radius: None,
            rounded_corners: ALL_CORNERS,
            border: None,
            text_color: Color::Black,
            background_color: Color::Gray,
            show_avatar: false,
        },
        StyleKind::LeftBubble | StyleKind::RightBubble => {
            let (text_color, bubble_color, corners) = if kind == StyleKind::RightBubble {
                (Color::White, Color::Green, RIGHT_BUBBLE_CORNERS)
            } else {
                (Color::Black, Color::Gray, LEFT_BUBBLE_CORNERS)
            };
            let background_color = if message.is_media() {
                Color::Reset
            } else {
                bubble_color
            };
            StyleDecision {
                kind,
                corner_radius: 4.0,
                mask_corner_radius: Some(10.0),
                rounded_corners: corners,
                border: None,
                text_color,
                background_color,
                show_avatar: kind == StyleKind::LeftBubble && avatar_rule,
            }
        }
    }
}
