//! Incoming/outgoing classification and per-position visibility rules.

use super::dates::DateStamper;
use crate::model::{ConversationSource, Identity, Message};

/// Which side of the conversation a message belongs to, relative to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Sent by someone else.
    Incoming,
    /// Sent by the viewer.
    Outgoing,
}

impl Role {
    /// Classify `message` for `viewer`.
    pub fn of(message: &Message, viewer: &Identity) -> Self {
        if is_outgoing(message, viewer) {
            Role::Outgoing
        } else {
            Role::Incoming
        }
    }

    /// True for [`Role::Outgoing`].
    pub fn is_outgoing(self) -> bool {
        self == Role::Outgoing
    }
}

/// True when the viewer sent `message`.
pub fn is_outgoing(message: &Message, viewer: &Identity) -> bool {
    message.sender.id() == viewer.id()
}

/// Visibility decisions that depend on a message's position in a conversation.
///
/// Borrows the conversation and a date stamper; holds no state of its own,
/// so one instance can answer for any index.
///
/// # Panics
/// Every method panics when `index >= source.count()`.
#[derive(Clone, Copy)]
pub struct VisibilityRules<'a> {
    source: &'a dyn ConversationSource,
    dates: &'a DateStamper,
}

impl<'a> VisibilityRules<'a> {
    /// Rules over `source`, comparing days with `dates`.
    pub fn new(source: &'a dyn ConversationSource, dates: &'a DateStamper) -> Self {
        Self { source, dates }
    }

    fn checked(&self, index: usize) -> &'a Message {
        assert!(
            index < self.source.count(),
            "message couldn't be found: index {} out of bounds (count: {})",
            index,
            self.source.count()
        );
        self.source.message_at(index)
    }

    fn previous(&self, index: usize) -> Option<&'a Message> {
        index.checked_sub(1).map(|prev| self.source.message_at(prev))
    }

    fn same_day_as_previous(&self, index: usize) -> bool {
        let current = self.checked(index);
        self.previous(index)
            .is_some_and(|prev| self.dates.same_day(current.created_at, prev.created_at))
    }

    fn same_sender_as_previous(&self, index: usize) -> bool {
        let current = self.checked(index);
        self.previous(index)
            .is_some_and(|prev| prev.sender.id() == current.sender.id())
    }

    /// Role of the message at `index`.
    pub fn role(&self, index: usize) -> Role {
        Role::of(self.checked(index), self.source.viewer())
    }

    /// Whether the sender's name is shown above the message.
    ///
    /// Never for outgoing messages or announcements. Otherwise shown on the
    /// first message, and whenever the day or the sender changes from the
    /// previous message.
    pub fn show_sender_name(&self, index: usize) -> bool {
        let message = self.checked(index);
        if self.role(index).is_outgoing() || message.is_announcement() {
            return false;
        }
        if index == 0 {
            return true;
        }
        !self.same_day_as_previous(index) || !self.same_sender_as_previous(index)
    }

    /// Whether a date separator is shown above the message.
    pub fn show_date_separator(&self, index: usize) -> bool {
        !self.same_day_as_previous(index)
    }

    /// Whether the failed-send strip is shown below the message.
    pub fn show_failed_strip(&self, index: usize) -> bool {
        let message = self.checked(index);
        self.role(index).is_outgoing() && message.failed
    }

    /// Whether the sender avatar is shown.
    ///
    /// Only incoming, non-announcement messages that also show the sender
    /// name get an avatar.
    pub fn show_avatar(&self, index: usize) -> bool {
        let message = self.checked(index);
        !self.role(index).is_outgoing()
            && !message.is_announcement()
            && self.show_sender_name(index)
    }

    /// Sender name text, when it is shown.
    pub fn sender_name_text(&self, index: usize) -> Option<String> {
        self.show_sender_name(index)
            .then(|| self.checked(index).sender.display_name().to_string())
    }

    /// Date separator text, when it is shown.
    pub fn date_separator_text(&self, index: usize) -> Option<String> {
        self.show_date_separator(index)
            .then(|| self.dates.date_label(self.checked(index).created_at))
    }

    /// Time label text. Always present.
    pub fn time_label_text(&self, index: usize) -> String {
        self.dates.time_label(self.checked(index).created_at)
    }
}
