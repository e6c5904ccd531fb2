//! Built-in announcement conversation used by the demo screen.

use super::{Conversation, Identity, MediaRef, Message, MessageKind};
use chrono::{DateTime, Utc};

/// Id of the viewing user in the sample.
pub const ME_ID: &str = "me";

/// Id of the other participant in the sample.
pub const OTHER_ID: &str = "other";

/// The viewing user.
pub fn me() -> Identity {
    Identity::new(ME_ID, "my user").expect("sample id is non-empty")
}

/// The other participant.
pub fn other() -> Identity {
    Identity::new(OTHER_ID, "other user").expect("sample id is non-empty")
}

/// Announcement, chat and warning messages all stamped `now`.
pub fn announcement_conversation(now: DateTime<Utc>) -> Conversation {
    let me = me();
    let other = other();
    let messages = vec![
        Message::new(
            "1",
            other.clone(),
            now,
            MessageKind::Announcement("First announcement".into()),
        ),
        Message::new(
            "2",
            me,
            now,
            MessageKind::Text("Please send a picture".into()),
        ),
        Message::new("3", other.clone(), now, MessageKind::Text("Here you are".into())),
        Message::new(
            "4",
            other.clone(),
            now,
            MessageKind::Photo(MediaRef {
                url: None,
                size: MediaRef::PLACEHOLDER_SIZE,
            }),
        ),
        Message::new(
            "5",
            other.clone(),
            now,
            MessageKind::Announcement("Last announcement".into()),
        ),
        Message::new("6", other, now, MessageKind::Warning("WARNING".into())),
    ];
    Conversation::new(self::me(), messages)
}
