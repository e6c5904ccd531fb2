//! Reference label-height policy built on the conversation visibility rules.

use super::role::VisibilityRules;
use super::slots::{LabelHeightProvider, LabelSlot};
use crate::model::{AttributedText, Font, Message};

/// Heights used when a label is visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelHeights {
    /// Date separator above the cell.
    pub date_separator: f64,
    /// Sender name above the message.
    pub sender_name: f64,
    /// Time label.
    pub time_label: f64,
    /// Failed-send strip below the cell.
    pub failed_strip: f64,
}

impl Default for LabelHeights {
    fn default() -> Self {
        Self {
            date_separator: 40.0,
            sender_name: 24.0,
            time_label: 20.0,
            failed_strip: 24.0,
        }
    }
}

/// Font of the time label text.
pub const TIME_LABEL_FONT: Font = Font::regular(11.0);

/// Font of the sender name text.
pub const SENDER_NAME_FONT: Font = Font::regular(12.0);

/// Font of the date separator text.
pub const DATE_SEPARATOR_FONT: Font = Font::bold(14.0);

/// Label heights decided by [`VisibilityRules`].
///
/// Message bottom and cell bottom labels are always hidden.
#[derive(Clone, Copy)]
pub struct ConversationLabelPolicy<'a> {
    rules: VisibilityRules<'a>,
    heights: LabelHeights,
}

impl<'a> ConversationLabelPolicy<'a> {
    /// Policy over `rules` with the given visible heights.
    pub fn new(rules: VisibilityRules<'a>, heights: LabelHeights) -> Self {
        Self { rules, heights }
    }

    /// The rules this policy consults.
    pub fn rules(&self) -> &VisibilityRules<'a> {
        &self.rules
    }
}

impl LabelHeightProvider for ConversationLabelPolicy<'_> {
    fn height_for(&self, slot: LabelSlot, _message: &Message, index: usize) -> f64 {
        let visible = |shown: bool, height: f64| if shown { height } else { 0.0 };
        match slot {
            LabelSlot::CellTopLabel => visible(
                self.rules.show_date_separator(index),
                self.heights.date_separator,
            ),
            LabelSlot::MessageTopLabel => {
                visible(self.rules.show_sender_name(index), self.heights.sender_name)
            }
            LabelSlot::CellBottomView => visible(
                self.rules.show_failed_strip(index),
                self.heights.failed_strip,
            ),
            LabelSlot::TimeLabel => self.heights.time_label,
            LabelSlot::MessageBottomLabel | LabelSlot::CellBottomLabel => 0.0,
        }
    }

    fn time_label_text(&self, _message: &Message, index: usize) -> Option<AttributedText> {
        Some(AttributedText::new(
            self.rules.time_label_text(index),
            TIME_LABEL_FONT,
        ))
    }
}
