//! Ordered message sequence and the accessor the layout engine reads through.

use super::identity::Identity;
use super::message::Message;
use serde::{Deserialize, Serialize};

/// Read access to a conversation.
///
/// `message_at` with an index at or beyond `count` is a caller bug;
/// implementations panic instead of returning a fallback message.
pub trait ConversationSource {
    /// Number of messages.
    fn count(&self) -> usize;

    /// Message at a display position.
    fn message_at(&self, index: usize) -> &Message;

    /// Identity of the person viewing the conversation.
    fn viewer(&self) -> &Identity;
}

/// Messages in display order, plus the viewing identity.
///
/// Display order is insertion order; timestamps are not required to be
/// monotonic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    viewer: Identity,
    #[serde(default)]
    messages: Vec<Message>,
}

impl Conversation {
    /// Create a conversation.
    pub fn new(viewer: Identity, messages: Vec<Message>) -> Self {
        Self { viewer, messages }
    }

    /// All messages in display order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// True when there are no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Append a message at the end.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }
}

impl ConversationSource for Conversation {
    fn count(&self) -> usize {
        self.messages.len()
    }

    fn message_at(&self, index: usize) -> &Message {
        assert!(
            index < self.messages.len(),
            "message index {} out of bounds (count: {})",
            index,
            self.messages.len()
        );
        &self.messages[index]
    }

    fn viewer(&self) -> &Identity {
        &self.viewer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MessageKind;
    use chrono::{DateTime, Utc};

    fn me() -> Identity {
        Identity::new("me", "my user").unwrap()
    }

    fn timestamp() -> DateTime<Utc> {
        "2019-08-27T10:30:00Z".parse().unwrap()
    }

    #[test]
    fn display_order_is_insertion_order() {
        let later: DateTime<Utc> = "2019-08-28T10:30:00Z".parse().unwrap();
        let mut conversation = Conversation::new(me(), Vec::new());
        conversation.push(Message::new("a", me(), later, MessageKind::Text("a".into())));
        conversation.push(Message::new("b", me(), timestamp(), MessageKind::Text("b".into())));

        assert_eq!(conversation.count(), 2);
        assert_eq!(conversation.message_at(0).id, "a");
        assert_eq!(conversation.message_at(1).id, "b");
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn message_at_past_end_panics() {
        let conversation = Conversation::new(me(), Vec::new());
        let _ = conversation.message_at(0);
    }

    #[test]
    fn viewer_is_exposed() {
        let conversation = Conversation::new(me(), Vec::new());
        assert_eq!(conversation.viewer().id(), "me");
        assert!(conversation.is_empty());
    }
}
