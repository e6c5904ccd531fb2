//! Per-slot size resolution for one message cell.

use super::config::{
    AccessoryPosition, AvatarPosition, LabelAlignment, LayoutConfiguration, RoleConfigs,
};
use super::container::{ContainerSizer, SizerContext, SizerTable};
use super::geometry::{EdgeInsets, HorizontalEdgeInsets, Size};
use super::height::HeightInputs;
use super::metrics::{label_size, TextMeasurer};
use super::role::Role;
use crate::model::{AttributedText, ConversationSource, Message};
use tracing::warn;

/// Slots whose height is a policy decision of the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelSlot {
    /// Label above the whole cell (date separator).
    CellTopLabel,
    /// Label above the message container (sender name).
    MessageTopLabel,
    /// Label below the message container.
    MessageBottomLabel,
    /// Label below the whole cell.
    CellBottomLabel,
    /// View below everything else (action strip).
    CellBottomView,
    /// Time label.
    TimeLabel,
}

/// Host-supplied label heights and label text.
pub trait LabelHeightProvider {
    /// Height of `slot` for the message at `index`. Zero hides the slot.
    fn height_for(&self, slot: LabelSlot, message: &Message, index: usize) -> f64;

    /// Time label text for the message at `index`, if any.
    fn time_label_text(&self, _message: &Message, _index: usize) -> Option<AttributedText> {
        None
    }
}

/// Capabilities a layout pass reads from its host.
#[derive(Clone, Copy)]
pub struct LayoutContext<'a> {
    /// Conversation being laid out.
    pub conversation: &'a dyn ConversationSource,
    /// Label height policy.
    pub labels: &'a dyn LabelHeightProvider,
    /// Text measurement.
    pub measurer: &'a dyn TextMeasurer,
    /// Current list item width.
    pub item_width: f64,
}

/// Size of every slot of one cell. Owned by the layout pass that computed it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SlotSizes {
    /// Avatar.
    pub avatar: Size,
    /// Cell top label.
    pub cell_top_label: Size,
    /// Message top label.
    pub message_top_label: Size,
    /// Message container.
    pub message_container: Size,
    /// Message bottom label.
    pub message_bottom_label: Size,
    /// Cell bottom label.
    pub cell_bottom_label: Size,
    /// Cell bottom view (action strip).
    pub cell_bottom_view: Size,
    /// Accessory view.
    pub accessory_view: Size,
    /// Time label.
    pub time_label: Size,
}

/// Resolves slot sizes from role configuration, kind sizers and host capabilities.
///
/// Stateless apart from the borrowed configuration; safe to share across
/// threads whenever the borrowed capabilities are.
#[derive(Clone, Copy)]
pub struct ElementSizeResolver<'a> {
    configs: &'a RoleConfigs,
    sizers: &'a SizerTable,
    ctx: LayoutContext<'a>,
}

impl<'a> ElementSizeResolver<'a> {
    /// Resolver over the given tables and context.
    pub fn new(configs: &'a RoleConfigs, sizers: &'a SizerTable, ctx: LayoutContext<'a>) -> Self {
        Self {
            configs,
            sizers,
            ctx,
        }
    }

    /// The context this resolver reads from.
    pub fn context(&self) -> &LayoutContext<'a> {
        &self.ctx
    }

    /// Role of `message` relative to the viewer.
    pub fn role(&self, message: &Message) -> Role {
        Role::of(message, self.ctx.conversation.viewer())
    }

    /// Role configuration for `message`.
    pub fn config(&self, message: &Message) -> &'a LayoutConfiguration {
        self.configs.for_role(self.role(message))
    }

    /// Kind sizer for `message`.
    ///
    /// # Panics
    /// Panics when the message kind has no registered sizer.
    pub fn sizer(&self, message: &Message) -> &'a ContainerSizer {
        self.sizers.sizer_for(message.kind.tag())
    }

    // ===== Avatar =====

    /// Avatar size; zero for kinds that suppress avatars.
    pub fn avatar_size(&self, message: &Message) -> Size {
        match self.sizer(message).avatar_override() {
            Some((size, _)) => size,
            None => self.config(message).avatar_size,
        }
    }

    /// Avatar position with a `Natural` horizontal anchor resolved.
    pub fn avatar_position(&self, message: &Message) -> AvatarPosition {
        match self.sizer(message).avatar_override() {
            Some((_, position)) => position,
            None => self.config(message).avatar_position.resolved(self.role(message)),
        }
    }

    /// Horizontal gap reserved beside the avatar.
    pub fn avatar_leading_trailing_padding(&self) -> f64 {
        self.configs.avatar_leading_trailing_padding
    }

    // ===== Labels =====

    /// Full-width label of host-decided height.
    pub fn label_size(&self, slot: LabelSlot, message: &Message, index: usize) -> Size {
        let height = self.ctx.labels.height_for(slot, message, index);
        Size::new(self.ctx.item_width, height)
    }

    /// Alignment for a label slot. The cell bottom view has none.
    pub fn label_alignment(&self, slot: LabelSlot, message: &Message) -> Option<LabelAlignment> {
        let config = self.config(message);
        match slot {
            LabelSlot::CellTopLabel => Some(config.cell_top_label),
            LabelSlot::MessageTopLabel => Some(config.message_top_label),
            LabelSlot::MessageBottomLabel => Some(config.message_bottom_label),
            LabelSlot::CellBottomLabel => Some(config.cell_bottom_label),
            LabelSlot::TimeLabel => Some(config.time_label),
            LabelSlot::CellBottomView => None,
        }
    }

    /// Time label: measured text width plus the role's horizontal inset,
    /// or the full item width when there is no text.
    pub fn time_label_size(&self, message: &Message, index: usize) -> Size {
        let height = self
            .ctx
            .labels
            .height_for(LabelSlot::TimeLabel, message, index);
        let width = match self.ctx.labels.time_label_text(message, index) {
            Some(text) => {
                let inset = self.config(message).time_label.text_insets.horizontal();
                label_size(self.ctx.measurer, &text, self.ctx.item_width).width + inset
            }
            None => self.ctx.item_width,
        };
        Size::new(width, height)
    }

    // ===== Accessory =====

    /// Accessory view size.
    pub fn accessory_size(&self, message: &Message) -> Size {
        self.config(message).accessory_size
    }

    /// Accessory view padding.
    pub fn accessory_padding(&self, message: &Message) -> HorizontalEdgeInsets {
        self.config(message).accessory_padding
    }

    /// Accessory view placement.
    pub fn accessory_position(&self, message: &Message) -> AccessoryPosition {
        self.config(message).accessory_position
    }

    // ===== Message container =====

    /// Padding around the message container.
    pub fn message_padding(&self, message: &Message) -> EdgeInsets {
        self.config(message).message_padding
    }

    /// Width available to the message container.
    ///
    /// A combination of avatar, padding and accessory wider than the item
    /// would give a negative width; that is clamped to zero and logged.
    pub fn container_max_width(&self, message: &Message) -> f64 {
        let item_width = self.ctx.item_width;
        let raw = self
            .sizer(message)
            .max_width_override(item_width)
            .unwrap_or_else(|| {
                item_width
                    - self.avatar_size(message).width
                    - self.message_padding(message).horizontal()
                    - self.accessory_size(message).width
                    - self.accessory_padding(message).horizontal()
                    - self.avatar_leading_trailing_padding()
            });

        if raw < 0.0 {
            warn!(
                message_id = %message.id,
                item_width,
                max_width = raw,
                "Negative message container width clamped to zero"
            );
            0.0
        } else {
            raw
        }
    }

    /// Kind-specific container size.
    pub fn container_size(&self, message: &Message) -> Size {
        let ctx = SizerContext {
            measurer: self.ctx.measurer,
            item_width: self.ctx.item_width,
            max_width: self.container_max_width(message),
            role: self.role(message),
        };
        self.sizer(message).size(message, &ctx)
    }

    // ===== All slots =====

    /// Every slot size for the message at `index`.
    ///
    /// # Panics
    /// Panics when `index` is out of bounds or the kind has no sizer.
    pub fn slot_sizes(&self, index: usize) -> SlotSizes {
        let message = self.ctx.conversation.message_at(index);
        SlotSizes {
            avatar: self.avatar_size(message),
            cell_top_label: self.label_size(LabelSlot::CellTopLabel, message, index),
            message_top_label: self.label_size(LabelSlot::MessageTopLabel, message, index),
            message_container: self.container_size(message),
            message_bottom_label: self.label_size(LabelSlot::MessageBottomLabel, message, index),
            cell_bottom_label: self.label_size(LabelSlot::CellBottomLabel, message, index),
            cell_bottom_view: self.label_size(LabelSlot::CellBottomView, message, index),
            accessory_view: self.accessory_size(message),
            time_label: self.time_label_size(message, index),
        }
    }

    /// Height composition inputs for `message` from already resolved slots.
    pub fn height_inputs(&self, message: &Message, slots: &SlotSizes) -> HeightInputs {
        HeightInputs {
            cell_top_label: slots.cell_top_label.height,
            message_top_label: slots.message_top_label.height,
            message_container: slots.message_container.height,
            message_vertical_padding: self.message_padding(message).vertical(),
            message_bottom_label: slots.message_bottom_label.height,
            cell_bottom_label: slots.cell_bottom_label.height,
            cell_bottom_view: slots.cell_bottom_view.height,
            avatar: slots.avatar.height,
            accessory: slots.accessory_view.height,
        }
    }
}
