//! Role-dependent layout constants.
//!
//! A [`LayoutConfiguration`] bundles every constant that differs between
//! incoming and outgoing messages. [`RoleConfigs`] holds one per role and
//! hands out the right one at layout time; nothing here is mutated during a
//! layout pass.

use super::geometry::{EdgeInsets, HorizontalEdgeInsets, Size};
use super::role::Role;

/// Horizontal placement of the avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAnchor {
    /// Leading edge of the cell.
    CellLeading,
    /// Trailing edge of the cell.
    CellTrailing,
    /// Leading for incoming, trailing for outgoing.
    Natural,
    /// No avatar column.
    None,
}

/// Vertical placement of the avatar, which also selects the height
/// composition formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAnchor {
    /// Top of the cell.
    CellTop,
    /// Top of the message top label.
    MessageLabelTop,
    /// Top of the message container.
    MessageTop,
    /// Vertically centered on the message container.
    MessageCenter,
    /// Bottom of the message container.
    MessageBottom,
    /// Bottom of the cell.
    CellBottom,
    /// No vertical anchor.
    None,
}

/// Avatar anchor on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvatarPosition {
    /// Horizontal anchor.
    pub horizontal: HorizontalAnchor,
    /// Vertical anchor.
    pub vertical: VerticalAnchor,
}

impl AvatarPosition {
    /// Natural horizontal anchor with the given vertical anchor.
    pub const fn vertical(vertical: VerticalAnchor) -> Self {
        Self {
            horizontal: HorizontalAnchor::Natural,
            vertical,
        }
    }

    /// Replace a `Natural` horizontal anchor with the concrete edge for `role`.
    pub fn resolved(self, role: Role) -> Self {
        let horizontal = match self.horizontal {
            HorizontalAnchor::Natural => match role {
                Role::Incoming => HorizontalAnchor::CellLeading,
                Role::Outgoing => HorizontalAnchor::CellTrailing,
            },
            other => other,
        };
        Self {
            horizontal,
            vertical: self.vertical,
        }
    }
}

/// Horizontal text alignment within a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlignment {
    /// Left aligned.
    Left,
    /// Centered.
    Center,
    /// Right aligned.
    Right,
}

/// Alignment plus insets for a label slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelAlignment {
    /// Text alignment.
    pub text_alignment: TextAlignment,
    /// Insets around the text.
    pub text_insets: EdgeInsets,
}

impl LabelAlignment {
    /// Create a label alignment.
    pub const fn new(text_alignment: TextAlignment, text_insets: EdgeInsets) -> Self {
        Self {
            text_alignment,
            text_insets,
        }
    }
}

/// Vertical placement of the accessory view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessoryPosition {
    /// Top of the message top label.
    MessageLabelTop,
    /// Top of the message container.
    MessageTop,
    /// Centered on the message container.
    MessageCenter,
    /// Bottom of the message container.
    MessageBottom,
    /// Top of the cell.
    CellTop,
    /// Bottom of the cell.
    CellBottom,
}

/// Layout constants for one role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfiguration {
    /// Avatar size.
    pub avatar_size: Size,
    /// Avatar anchor (horizontal may be `Natural`).
    pub avatar_position: AvatarPosition,
    /// Padding around the message container.
    pub message_padding: EdgeInsets,
    /// Cell top label (date separator).
    pub cell_top_label: LabelAlignment,
    /// Message top label (sender name).
    pub message_top_label: LabelAlignment,
    /// Message bottom label.
    pub message_bottom_label: LabelAlignment,
    /// Cell bottom label.
    pub cell_bottom_label: LabelAlignment,
    /// Time label.
    pub time_label: LabelAlignment,
    /// Accessory view size.
    pub accessory_size: Size,
    /// Accessory view padding.
    pub accessory_padding: HorizontalEdgeInsets,
    /// Accessory view placement.
    pub accessory_position: AccessoryPosition,
}

impl LayoutConfiguration {
    /// Defaults for messages from other people.
    pub const fn incoming() -> Self {
        Self {
            avatar_size: Size::new(40.0, 40.0),
            avatar_position: AvatarPosition::vertical(VerticalAnchor::MessageLabelTop),
            message_padding: EdgeInsets::new(0.0, 8.0, 0.0, 30.0),
            cell_top_label: LabelAlignment::new(TextAlignment::Center, EdgeInsets::ZERO),
            message_top_label: LabelAlignment::new(
                TextAlignment::Left,
                EdgeInsets::new(0.0, 46.0, 8.0, 0.0),
            ),
            message_bottom_label: LabelAlignment::new(TextAlignment::Left, EdgeInsets::left(46.0)),
            cell_bottom_label: LabelAlignment::new(TextAlignment::Left, EdgeInsets::left(46.0)),
            time_label: LabelAlignment::new(TextAlignment::Left, EdgeInsets::left(8.0)),
            accessory_size: Size::ZERO,
            accessory_padding: HorizontalEdgeInsets::ZERO,
            accessory_position: AccessoryPosition::MessageCenter,
        }
    }

    /// Defaults for messages from the viewer.
    pub const fn outgoing() -> Self {
        Self {
            avatar_size: Size::ZERO,
            avatar_position: AvatarPosition::vertical(VerticalAnchor::MessageLabelTop),
            message_padding: EdgeInsets::new(0.0, 30.0, 0.0, 8.0),
            cell_top_label: LabelAlignment::new(TextAlignment::Center, EdgeInsets::ZERO),
            message_top_label: LabelAlignment::new(
                TextAlignment::Right,
                EdgeInsets::new(0.0, 0.0, 8.0, 46.0),
            ),
            message_bottom_label: LabelAlignment::new(
                TextAlignment::Right,
                EdgeInsets::right(46.0),
            ),
            cell_bottom_label: LabelAlignment::new(TextAlignment::Right, EdgeInsets::right(46.0)),
            time_label: LabelAlignment::new(TextAlignment::Right, EdgeInsets::right(8.0)),
            accessory_size: Size::ZERO,
            accessory_padding: HorizontalEdgeInsets::ZERO,
            accessory_position: AccessoryPosition::MessageCenter,
        }
    }
}

/// One configuration per role, plus role-independent constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleConfigs {
    /// Configuration for incoming messages.
    pub incoming: LayoutConfiguration,
    /// Configuration for outgoing messages.
    pub outgoing: LayoutConfiguration,
    /// Extra horizontal space reserved beside the avatar.
    pub avatar_leading_trailing_padding: f64,
}

impl RoleConfigs {
    /// Select the configuration for `role`.
    pub fn for_role(&self, role: Role) -> &LayoutConfiguration {
        match role {
            Role::Incoming => &self.incoming,
            Role::Outgoing => &self.outgoing,
        }
    }
}

impl Default for RoleConfigs {
    fn default() -> Self {
        Self {
            incoming: LayoutConfiguration::incoming(),
            outgoing: LayoutConfiguration::outgoing(),
            avatar_leading_trailing_padding: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_anchor_resolves_by_role() {
        let position = AvatarPosition::vertical(VerticalAnchor::MessageBottom);
        assert_eq!(
            position.resolved(Role::Incoming).horizontal,
            HorizontalAnchor::CellLeading
        );
        assert_eq!(
            position.resolved(Role::Outgoing).horizontal,
            HorizontalAnchor::CellTrailing
        );
        assert_eq!(
            position.resolved(Role::Outgoing).vertical,
            VerticalAnchor::MessageBottom
        );
    }

    #[test]
    fn explicit_anchor_is_kept() {
        let position = AvatarPosition {
            horizontal: HorizontalAnchor::CellTrailing,
            vertical: VerticalAnchor::CellTop,
        };
        assert_eq!(position.resolved(Role::Incoming), position);
    }

    #[test]
    fn defaults_mirror_each_other() {
        let configs = RoleConfigs::default();
        let incoming = configs.for_role(Role::Incoming);
        let outgoing = configs.for_role(Role::Outgoing);

        assert_eq!(incoming.avatar_size, Size::new(40.0, 40.0));
        assert_eq!(outgoing.avatar_size, Size::ZERO);
        assert_eq!(incoming.message_padding.left, outgoing.message_padding.right);
        assert_eq!(incoming.time_label.text_alignment, TextAlignment::Left);
        assert_eq!(outgoing.time_label.text_alignment, TextAlignment::Right);
        assert_eq!(incoming.message_top_label.text_insets.bottom, 8.0);
    }
}
