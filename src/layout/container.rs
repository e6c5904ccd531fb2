//! Per-kind message container sizing.
//!
//! Every message kind that can be laid out has an entry in a [`SizerTable`].
//! A kind without an entry, or a message handed to a sizer that does not
//! understand its kind, is a programming error and panics instead of
//! producing a wrong size.

use super::config::{AvatarPosition, HorizontalAnchor, VerticalAnchor};
use super::geometry::{EdgeInsets, Size};
use super::metrics::{label_size, TextMeasurer};
use super::role::Role;
use crate::model::{AttributedText, Font, KindTag, Message, MessageKind};
use std::collections::BTreeMap;
use tracing::warn;

/// Inputs a container sizer may read.
#[derive(Clone, Copy)]
pub struct SizerContext<'a> {
    /// Text measurement capability.
    pub measurer: &'a dyn TextMeasurer,
    /// Current list item width.
    pub item_width: f64,
    /// Maximum container width, already clamped to be non-negative.
    pub max_width: f64,
    /// Role of the message being sized.
    pub role: Role,
}

// ===== Announcement =====

/// Full-width banner sizing for announcements and warnings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnouncementSizer {
    /// Base label font.
    pub label_font: Font,
    /// Insets between the banner edge and its text.
    pub label_insets: EdgeInsets,
    /// Insets between the cell edge and the banner.
    pub container_insets: EdgeInsets,
}

impl Default for AnnouncementSizer {
    fn default() -> Self {
        Self {
            label_font: Font::BODY,
            label_insets: EdgeInsets::new(16.0, 20.0, 16.0, 20.0),
            container_insets: EdgeInsets::new(0.0, 32.0, 0.0, 32.0),
        }
    }
}

impl AnnouncementSizer {
    /// Banners never show an avatar.
    pub const AVATAR_POSITION: AvatarPosition = AvatarPosition {
        horizontal: HorizontalAnchor::None,
        vertical: VerticalAnchor::None,
    };

    /// Label font for `message`.
    ///
    /// For rich text, the font of the first run (when the text is non-empty
    /// and that run names a font) replaces the base font. Later runs never
    /// influence it.
    pub fn resolved_font(&self, message: &Message) -> Font {
        match &message.kind {
            MessageKind::AttributedText(text) if !text.is_empty() => {
                text.leading_font().unwrap_or(self.label_font)
            }
            _ => self.label_font,
        }
    }

    /// Banner width budget: the item width minus the container insets.
    pub fn max_width(&self, item_width: f64) -> f64 {
        item_width - self.container_insets.horizontal()
    }

    fn size(&self, message: &Message, ctx: &SizerContext<'_>) -> Size {
        let font = self.resolved_font(message);
        let text = match &message.kind {
            MessageKind::Announcement(text) | MessageKind::Warning(text) => {
                AttributedText::new(text.clone(), font)
            }
            MessageKind::AttributedText(text) => AttributedText::new(text.string(), font),
            other => unhandled("announcement", other),
        };

        let measured = label_size(ctx.measurer, &text, ctx.max_width);
        Size::new(
            ctx.max_width + self.label_insets.horizontal(),
            measured.height + self.label_insets.vertical(),
        )
    }
}

// ===== Text =====

/// Bubble sizing for plain and rich text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextSizer {
    /// Font for runs that do not name one.
    pub label_font: Font,
    /// Text insets inside incoming bubbles.
    pub incoming_label_insets: EdgeInsets,
    /// Text insets inside outgoing bubbles.
    pub outgoing_label_insets: EdgeInsets,
}

impl Default for TextSizer {
    fn default() -> Self {
        Self {
            label_font: Font::BODY,
            incoming_label_insets: EdgeInsets::new(7.0, 18.0, 7.0, 14.0),
            outgoing_label_insets: EdgeInsets::new(7.0, 14.0, 7.0, 18.0),
        }
    }
}

impl TextSizer {
    /// Text insets for `role`.
    pub fn label_insets(&self, role: Role) -> EdgeInsets {
        match role {
            Role::Incoming => self.incoming_label_insets,
            Role::Outgoing => self.outgoing_label_insets,
        }
    }

    fn size(&self, message: &Message, ctx: &SizerContext<'_>) -> Size {
        let text = match &message.kind {
            MessageKind::Text(text) => AttributedText::new(text.clone(), self.label_font),
            MessageKind::AttributedText(text) => text.with_base_font(self.label_font),
            other => unhandled("text", other),
        };

        let insets = self.label_insets(ctx.role);
        let text_width = (ctx.max_width - insets.horizontal()).max(0.0);
        let measured = label_size(ctx.measurer, &text, text_width);
        Size::new(
            measured.width + insets.horizontal(),
            measured.height + insets.vertical(),
        )
    }
}

// ===== Media =====

/// Photo sizing: natural size, scaled down to fit the container width.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MediaSizer;

impl MediaSizer {
    fn size(&self, message: &Message, ctx: &SizerContext<'_>) -> Size {
        let natural = match &message.kind {
            MessageKind::Photo(media) => media.size,
            other => unhandled("media", other),
        };

        let natural = clamp_photo_size(message, natural);
        if natural.width <= ctx.max_width || natural.width == 0.0 {
            return natural;
        }
        Size::new(ctx.max_width, ctx.max_width * natural.height / natural.width)
    }
}

/// Negative or non-finite photo dimensions become zero.
fn clamp_photo_size(message: &Message, size: Size) -> Size {
    let valid = |v: f64| v.is_finite() && v >= 0.0;
    if valid(size.width) && valid(size.height) {
        return size;
    }
    warn!(
        message_id = %message.id,
        width = size.width,
        height = size.height,
        "Invalid photo size clamped to zero"
    );
    let clamp = |v: f64| if valid(v) { v } else { 0.0 };
    Size::new(clamp(size.width), clamp(size.height))
}

// ===== Dispatch =====

/// Container sizing strategy for one message kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContainerSizer {
    /// Always `Size::ZERO`; for kinds that render labels only.
    Zero,
    /// Full-width banner.
    Announcement(AnnouncementSizer),
    /// Text bubble.
    Text(TextSizer),
    /// Photo bubble.
    Media(MediaSizer),
}

impl ContainerSizer {
    /// Size of the message container for `message`.
    ///
    /// # Panics
    /// Panics when `message.kind` is not a kind this sizer understands.
    pub fn size(&self, message: &Message, ctx: &SizerContext<'_>) -> Size {
        match self {
            ContainerSizer::Zero => Size::ZERO,
            ContainerSizer::Announcement(sizer) => sizer.size(message, ctx),
            ContainerSizer::Text(sizer) => sizer.size(message, ctx),
            ContainerSizer::Media(sizer) => sizer.size(message, ctx),
        }
    }

    /// Replacement for the role-based container max width, if any.
    pub fn max_width_override(&self, item_width: f64) -> Option<f64> {
        match self {
            ContainerSizer::Announcement(sizer) => Some(sizer.max_width(item_width)),
            _ => None,
        }
    }

    /// Replacement avatar size and position, if the kind suppresses avatars.
    pub fn avatar_override(&self) -> Option<(Size, AvatarPosition)> {
        match self {
            ContainerSizer::Announcement(_) => {
                Some((Size::ZERO, AnnouncementSizer::AVATAR_POSITION))
            }
            _ => None,
        }
    }

    /// Whether the time label sits below the content and adds to the cell height.
    pub fn adds_time_label_height(&self) -> bool {
        matches!(self, ContainerSizer::Announcement(_))
    }

    /// Font the message label is drawn with, for kinds that carry text.
    pub fn label_font(&self, message: &Message) -> Option<Font> {
        match self {
            ContainerSizer::Announcement(sizer) => Some(sizer.resolved_font(message)),
            ContainerSizer::Text(sizer) => Some(sizer.label_font),
            ContainerSizer::Zero | ContainerSizer::Media(_) => None,
        }
    }

    /// Insets around the message label, for kinds that carry text.
    pub fn label_insets(&self, role: Role) -> Option<EdgeInsets> {
        match self {
            ContainerSizer::Announcement(sizer) => Some(sizer.label_insets),
            ContainerSizer::Text(sizer) => Some(sizer.label_insets(role)),
            ContainerSizer::Zero | ContainerSizer::Media(_) => None,
        }
    }
}

/// Map from message kind to its container sizer.
#[derive(Debug, Clone, PartialEq)]
pub struct SizerTable {
    entries: BTreeMap<KindTag, ContainerSizer>,
}

impl SizerTable {
    /// Table with no entries.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Register (or replace) the sizer for `tag`.
    pub fn register(&mut self, tag: KindTag, sizer: ContainerSizer) -> &mut Self {
        self.entries.insert(tag, sizer);
        self
    }

    /// Sizer for `tag`, if registered.
    pub fn get(&self, tag: KindTag) -> Option<&ContainerSizer> {
        self.entries.get(&tag)
    }

    /// Sizer for `tag`.
    ///
    /// # Panics
    /// Panics when no sizer is registered for `tag`.
    pub fn sizer_for(&self, tag: KindTag) -> &ContainerSizer {
        self.get(tag).unwrap_or_else(|| {
            panic!("messageContainerSize received unhandled message kind: {tag:?}")
        })
    }
}

impl Default for SizerTable {
    /// Built-in kinds. `Custom` is left unregistered.
    fn default() -> Self {
        let text = ContainerSizer::Text(TextSizer::default());
        let banner = ContainerSizer::Announcement(AnnouncementSizer::default());
        let mut table = Self::empty();
        table
            .register(KindTag::Text, text)
            .register(KindTag::AttributedText, text)
            .register(KindTag::Announcement, banner)
            .register(KindTag::Warning, banner)
            .register(KindTag::Photo, ContainerSizer::Media(MediaSizer));
        table
    }
}

fn unhandled(sizer: &str, kind: &MessageKind) -> ! {
    panic!(
        "messageContainerSize received unhandled message kind for {} sizer: {:?}",
        sizer,
        kind.tag()
    )
}
