//! Cell size calculator: the entry point of a layout pass.
//!
//! # Data flow
//! message + neighbors → role → slot sizes (text metrics, kind sizer)
//! → height composition → cell size.

use super::config::{
    AccessoryPosition, AvatarPosition, LabelAlignment, RoleConfigs,
};
use super::container::SizerTable;
use super::geometry::{EdgeInsets, HorizontalEdgeInsets, Size};
use super::height::cell_content_height;
use super::slots::{ElementSizeResolver, LabelSlot, LayoutContext, SlotSizes};
use crate::model::Font;
use tracing::trace;

/// Layout attributes for one cell, as handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct CellAttributes {
    /// Every slot size.
    pub slots: SlotSizes,
    /// Avatar position with horizontal anchor resolved.
    pub avatar_position: AvatarPosition,
    /// Gap reserved beside the avatar.
    pub avatar_leading_trailing_padding: f64,
    /// Padding around the message container.
    pub message_padding: EdgeInsets,
    /// Cell top label alignment.
    pub cell_top_label_alignment: LabelAlignment,
    /// Message top label alignment.
    pub message_top_label_alignment: LabelAlignment,
    /// Message bottom label alignment.
    pub message_bottom_label_alignment: LabelAlignment,
    /// Cell bottom label alignment.
    pub cell_bottom_label_alignment: LabelAlignment,
    /// Time label alignment.
    pub time_label_alignment: LabelAlignment,
    /// Accessory view padding.
    pub accessory_padding: HorizontalEdgeInsets,
    /// Accessory view placement.
    pub accessory_position: AccessoryPosition,
    /// Font for the message label, for kinds that carry text.
    pub message_label_font: Option<Font>,
    /// Insets around the message label, for kinds that carry text.
    pub message_label_insets: Option<EdgeInsets>,
    /// Total cell size.
    pub size: Size,
}

/// Computes cell sizes and attributes from immutable configuration.
///
/// Holds no per-call state: concurrent layout passes over different cells
/// may share one calculator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellSizeCalculator {
    configs: RoleConfigs,
    sizers: SizerTable,
}

impl CellSizeCalculator {
    /// Calculator with the given role configurations and kind sizers.
    pub fn new(configs: RoleConfigs, sizers: SizerTable) -> Self {
        Self { configs, sizers }
    }

    /// Role configurations.
    pub fn configs(&self) -> &RoleConfigs {
        &self.configs
    }

    /// Kind sizers.
    pub fn sizers(&self) -> &SizerTable {
        &self.sizers
    }

    /// Slot resolver bound to `ctx`.
    pub fn resolver<'a>(&'a self, ctx: LayoutContext<'a>) -> ElementSizeResolver<'a> {
        ElementSizeResolver::new(&self.configs, &self.sizers, ctx)
    }

    fn content_height(resolver: &ElementSizeResolver<'_>, index: usize, slots: &SlotSizes) -> f64 {
        let message = resolver.context().conversation.message_at(index);
        let inputs = resolver.height_inputs(message, slots);
        let anchor = resolver.avatar_position(message).vertical;
        let mut height = cell_content_height(&inputs, anchor);
        if resolver.sizer(message).adds_time_label_height() {
            height += slots.time_label.height;
        }
        height
    }

    /// Content height of the cell at `index`.
    ///
    /// # Panics
    /// Panics when `index` is out of bounds or the message kind has no sizer.
    pub fn cell_content_height(&self, ctx: LayoutContext<'_>, index: usize) -> f64 {
        let resolver = self.resolver(ctx);
        let slots = resolver.slot_sizes(index);
        Self::content_height(&resolver, index, &slots)
    }

    /// Size of the cell at `index`: item width by content height.
    ///
    /// # Panics
    /// See [`cell_content_height`](Self::cell_content_height).
    pub fn size_for_item(&self, ctx: LayoutContext<'_>, index: usize) -> Size {
        let height = self.cell_content_height(ctx, index);
        trace!(index, height, "Sized cell");
        Size::new(ctx.item_width, height)
    }

    /// Full layout attributes for the cell at `index`.
    ///
    /// # Panics
    /// See [`cell_content_height`](Self::cell_content_height).
    pub fn configure(&self, ctx: LayoutContext<'_>, index: usize) -> CellAttributes {
        let resolver = self.resolver(ctx);
        let message = ctx.conversation.message_at(index);
        let config = resolver.config(message);
        let sizer = resolver.sizer(message);
        let slots = resolver.slot_sizes(index);
        let height = Self::content_height(&resolver, index, &slots);

        CellAttributes {
            slots,
            avatar_position: resolver.avatar_position(message),
            avatar_leading_trailing_padding: resolver.avatar_leading_trailing_padding(),
            message_padding: resolver.message_padding(message),
            cell_top_label_alignment: config.cell_top_label,
            message_top_label_alignment: config.message_top_label,
            message_bottom_label_alignment: config.message_bottom_label,
            cell_bottom_label_alignment: config.cell_bottom_label,
            time_label_alignment: config.time_label,
            accessory_padding: resolver.accessory_padding(message),
            accessory_position: resolver.accessory_position(message),
            message_label_font: sizer.label_font(message),
            message_label_insets: sizer.label_insets(resolver.role(message)),
            size: Size::new(ctx.item_width, height),
        }
    }

    /// Sizes of every cell, in display order.
    pub fn size_all(&self, ctx: LayoutContext<'_>) -> Vec<Size> {
        (0..ctx.conversation.count())
            .map(|index| self.size_for_item(ctx, index))
            .collect()
    }

    /// Height of one label slot for the cell at `index`.
    pub fn label_height(&self, ctx: LayoutContext<'_>, slot: LabelSlot, index: usize) -> f64 {
        let message = ctx.conversation.message_at(index);
        self.resolver(ctx).label_size(slot, message, index).height
    }
}
