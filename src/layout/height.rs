//! Cell content height composition.
//!
//! The avatar's vertical anchor decides which slots stack beside the avatar
//! and which stack above or below it. Whatever the anchor, the result is
//! raised to the accessory height and only then is the bottom view (action
//! strip) added underneath.

use super::config::VerticalAnchor;

/// Heights of every vertical contributor to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeightInputs {
    /// Cell top label (date separator).
    pub cell_top_label: f64,
    /// Message top label (sender name).
    pub message_top_label: f64,
    /// Message container.
    pub message_container: f64,
    /// Vertical padding around the message container.
    pub message_vertical_padding: f64,
    /// Message bottom label.
    pub message_bottom_label: f64,
    /// Cell bottom label.
    pub cell_bottom_label: f64,
    /// Bottom view (action strip).
    pub cell_bottom_view: f64,
    /// Avatar.
    pub avatar: f64,
    /// Accessory view.
    pub accessory: f64,
}

/// Total cell content height for the given avatar anchor.
///
/// Deterministic and monotonically non-decreasing in every input.
pub fn cell_content_height(inputs: &HeightInputs, anchor: VerticalAnchor) -> f64 {
    let h = inputs;
    let cell_height = match anchor {
        VerticalAnchor::MessageCenter
        | VerticalAnchor::CellTop
        | VerticalAnchor::CellBottom
        | VerticalAnchor::None => {
            let total_label_height = h.cell_top_label
                + h.message_top_label
                + h.message_container
                + h.message_vertical_padding
                + h.message_bottom_label
                + h.cell_bottom_label;
            h.avatar.max(total_label_height)
        }
        VerticalAnchor::MessageBottom => {
            let labels_above = h.message_container
                + h.message_vertical_padding
                + h.cell_top_label
                + h.message_top_label;
            h.message_bottom_label + h.cell_bottom_label + labels_above.max(h.avatar)
        }
        VerticalAnchor::MessageTop => {
            let labels_below = h.message_container
                + h.message_vertical_padding
                + h.message_bottom_label
                + h.cell_bottom_label;
            h.cell_top_label + h.message_top_label + labels_below.max(h.avatar)
        }
        VerticalAnchor::MessageLabelTop => {
            let message_labels = h.message_container
                + h.message_bottom_label
                + h.message_vertical_padding
                + h.message_top_label
                + h.cell_bottom_label;
            h.cell_top_label + message_labels.max(h.avatar)
        }
    };

    cell_height.max(h.accessory) + h.cell_bottom_view
}
