//! Laid-out conversation: one sized cell per message plus vertical offsets.
//!
//! # Invariants
//! - `cells[i].top = sum(cells[0..i].size.height)`
//! - `total_height = sum(cells[..].size.height)`

use crate::config::{ConfigError, ResolvedConfig};
use crate::layout::{
    decide, CellAttributes, CellSizeCalculator, ConversationLabelPolicy, DateStamper,
    LabelHeights, LayoutContext, MonospaceMeasurer, Role, StyleDecision, VisibilityRules,
};
use crate::model::{Conversation, ConversationSource, KindTag, MessageKind};
use tracing::debug;

/// Everything a layout pass needs besides the conversation.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSettings {
    /// List item width in points.
    pub item_width: f64,
    /// Visible label heights.
    pub label_heights: LabelHeights,
    /// Day keys and label text.
    pub dates: DateStamper,
    /// Text measurement.
    pub measurer: MonospaceMeasurer,
    /// Role configurations and kind sizers.
    pub calculator: CellSizeCalculator,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            item_width: 375.0,
            label_heights: LabelHeights::default(),
            dates: DateStamper::utc(),
            measurer: MonospaceMeasurer::default(),
            calculator: CellSizeCalculator::default(),
        }
    }
}

impl LayoutSettings {
    /// Settings for a resolved configuration, with default measurer and sizers.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when the configuration does not
    /// validate.
    pub fn from_config(config: &ResolvedConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            item_width: config.item_width,
            label_heights: config.label_heights,
            dates: config.date_stamper()?,
            ..Self::default()
        })
    }
}

/// One message cell, sized and styled.
#[derive(Debug, Clone, PartialEq)]
pub struct CellLayout {
    /// Message index in the conversation.
    pub index: usize,
    /// Message kind.
    pub kind: KindTag,
    /// Incoming or outgoing.
    pub role: Role,
    /// Slot sizes and alignments.
    pub attributes: CellAttributes,
    /// Container style.
    pub style: StyleDecision,
    /// Text shown inside the container.
    pub body: String,
    /// Avatar initials, when the avatar is drawn.
    pub initials: Option<String>,
    /// Sender name label, when shown.
    pub sender_name: Option<String>,
    /// Date separator label, when shown.
    pub date_separator: Option<String>,
    /// Time label text.
    pub time_label: String,
    /// Whether the failed-send strip is shown.
    pub failed: bool,
    /// Distance from the top of the list to the top of this cell, in points.
    pub top: f64,
}

impl CellLayout {
    /// Cell height in points.
    pub fn height(&self) -> f64 {
        self.attributes.size.height
    }

    /// Distance from the top of the list to the bottom of this cell.
    pub fn bottom(&self) -> f64 {
        self.top + self.height()
    }
}

/// A whole conversation laid out top to bottom.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConversationLayout {
    cells: Vec<CellLayout>,
    total_height: f64,
}

impl ConversationLayout {
    /// Lay out every message of `conversation`.
    ///
    /// # Panics
    /// Panics when a message kind has no registered sizer. Conversations
    /// loaded through [`crate::source::InputSource`] have been checked.
    pub fn build(conversation: &Conversation, settings: &LayoutSettings) -> Self {
        let rules = VisibilityRules::new(conversation, &settings.dates);
        let policy = ConversationLabelPolicy::new(rules, settings.label_heights);
        let ctx = LayoutContext {
            conversation,
            labels: &policy,
            measurer: &settings.measurer,
            item_width: settings.item_width,
        };

        let mut cells = Vec::with_capacity(conversation.count());
        let mut top = 0.0;
        for index in 0..conversation.count() {
            let message = conversation.message_at(index);
            let role = rules.role(index);
            let attributes = settings.calculator.configure(ctx, index);
            let style = decide(message, role, rules.show_avatar(index));
            let initials = style
                .show_avatar
                .then(|| message.sender.initials());

            let cell = CellLayout {
                index,
                kind: message.kind.tag(),
                role,
                body: body_text(&message.kind),
                initials,
                sender_name: rules.sender_name_text(index),
                date_separator: rules.date_separator_text(index),
                time_label: rules.time_label_text(index),
                failed: rules.show_failed_strip(index),
                top,
                style,
                attributes,
            };
            top = cell.bottom();
            cells.push(cell);
        }

        debug!(
            cells = cells.len(),
            total_height = top,
            item_width = settings.item_width,
            "Laid out conversation"
        );

        Self {
            cells,
            total_height: top,
        }
    }

    /// Cells in display order.
    pub fn cells(&self) -> &[CellLayout] {
        &self.cells
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when there are no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Sum of all cell heights in points.
    pub fn total_height(&self) -> f64 {
        self.total_height
    }

    /// Index of the cell covering vertical offset `y`, in points.
    ///
    /// Returns `None` for offsets outside the list.
    pub fn cell_at_offset(&self, y: f64) -> Option<usize> {
        if y < 0.0 || y >= self.total_height {
            return None;
        }
        let index = self.cells.partition_point(|cell| cell.bottom() <= y);
        (index < self.cells.len()).then_some(index)
    }
}

fn body_text(kind: &MessageKind) -> String {
    match kind {
        MessageKind::Photo(media) => match &media.url {
            Some(url) => format!("[photo {}]", url),
            None => "[photo]".to_string(),
        },
        MessageKind::Custom(tag) => format!("[{}]", tag),
        other => other.text().unwrap_or_default(),
    }
}
