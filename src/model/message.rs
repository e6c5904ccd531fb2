//! Message values and their payload kinds.

use super::identity::Identity;
use crate::layout::geometry::Size;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ===== Text =====

/// Font weight used by text runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    /// Regular weight.
    #[default]
    Regular,
    /// Bold weight.
    Bold,
}

/// Font description used for text measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Point size.
    pub size: f64,
    /// Weight.
    #[serde(default)]
    pub weight: FontWeight,
}

impl Font {
    /// Body text font (17pt regular).
    pub const BODY: Self = Self::regular(17.0);

    /// Regular font of the given size.
    pub const fn regular(size: f64) -> Self {
        Self {
            size,
            weight: FontWeight::Regular,
        }
    }

    /// Bold font of the given size.
    pub const fn bold(size: f64) -> Self {
        Self {
            size,
            weight: FontWeight::Bold,
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::BODY
    }
}

/// Run of text sharing one font.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// Text content.
    pub text: String,
    /// Font override; `None` means the label's base font.
    #[serde(default)]
    pub font: Option<Font>,
}

/// Text made of font-attributed runs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AttributedText {
    /// Runs in display order.
    pub runs: Vec<TextRun>,
}

impl AttributedText {
    /// Single run in the given font.
    pub fn new(text: impl Into<String>, font: Font) -> Self {
        Self {
            runs: vec![TextRun {
                text: text.into(),
                font: Some(font),
            }],
        }
    }

    /// Single run with no font override.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            runs: vec![TextRun {
                text: text.into(),
                font: None,
            }],
        }
    }

    /// Concatenated text of all runs.
    pub fn string(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// True when no run carries any text.
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|run| run.text.is_empty())
    }

    /// Font of the run at character offset 0, if that run names one.
    pub fn leading_font(&self) -> Option<Font> {
        self.runs
            .iter()
            .find(|run| !run.text.is_empty())
            .and_then(|run| run.font)
    }

    /// Copy of this text with every run lacking a font given `font`.
    pub fn with_base_font(&self, font: Font) -> Self {
        Self {
            runs: self
                .runs
                .iter()
                .map(|run| TextRun {
                    text: run.text.clone(),
                    font: Some(run.font.unwrap_or(font)),
                })
                .collect(),
        }
    }
}

// ===== Message =====

/// Reference to a media item attached to a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaRef {
    /// Location of the media, if it is remote.
    #[serde(default)]
    pub url: Option<String>,
    /// Natural display size.
    pub size: Size,
}

impl MediaRef {
    /// Placeholder image size used for local photos.
    pub const PLACEHOLDER_SIZE: Size = Size::new(182.0, 182.0);
}

/// Discriminant of [`MessageKind`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KindTag {
    /// Plain text.
    Text,
    /// Rich text.
    AttributedText,
    /// Announcement banner.
    Announcement,
    /// Warning banner.
    Warning,
    /// Photo.
    Photo,
    /// Application-defined kind.
    Custom,
}

/// Payload of a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum MessageKind {
    /// Plain text bubble.
    Text(String),
    /// Rich text bubble.
    AttributedText(AttributedText),
    /// Full-width announcement banner.
    Announcement(String),
    /// Full-width warning banner.
    Warning(String),
    /// Photo bubble.
    Photo(MediaRef),
    /// Application-defined kind identified by name.
    Custom(String),
}

impl MessageKind {
    /// The payload-free discriminant.
    pub fn tag(&self) -> KindTag {
        match self {
            MessageKind::Text(_) => KindTag::Text,
            MessageKind::AttributedText(_) => KindTag::AttributedText,
            MessageKind::Announcement(_) => KindTag::Announcement,
            MessageKind::Warning(_) => KindTag::Warning,
            MessageKind::Photo(_) => KindTag::Photo,
            MessageKind::Custom(_) => KindTag::Custom,
        }
    }

    /// Plain text content, when the kind carries text.
    pub fn text(&self) -> Option<String> {
        match self {
            MessageKind::Text(text)
            | MessageKind::Announcement(text)
            | MessageKind::Warning(text) => Some(text.clone()),
            MessageKind::AttributedText(text) => Some(text.string()),
            MessageKind::Photo(_) | MessageKind::Custom(_) => None,
        }
    }
}

/// A chat message. Immutable once built.
///
/// Position-derived flags (first of day, same sender as previous) are not
/// stored here; they are computed from the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Message id.
    pub id: String,
    /// Sender.
    pub sender: Identity,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Payload.
    pub kind: MessageKind,
    /// True when sending this message failed.
    #[serde(default)]
    pub failed: bool,
}

impl Message {
    /// Create a message that was sent successfully.
    pub fn new(
        id: impl Into<String>,
        sender: Identity,
        created_at: DateTime<Utc>,
        kind: MessageKind,
    ) -> Self {
        Self {
            id: id.into(),
            sender,
            created_at,
            kind,
            failed: false,
        }
    }

    /// Mark this message as a failed send.
    pub fn with_failed(mut self, failed: bool) -> Self {
        self.failed = failed;
        self
    }

    /// True for announcement banners.
    pub fn is_announcement(&self) -> bool {
        matches!(self.kind, MessageKind::Announcement(_))
    }

    /// True for warning banners.
    pub fn is_warning(&self) -> bool {
        matches!(self.kind, MessageKind::Warning(_))
    }

    /// True for photo messages.
    pub fn is_media(&self) -> bool {
        matches!(self.kind, MessageKind::Photo(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sender() -> Identity {
        Identity::new("other", "other user").unwrap()
    }

    fn timestamp() -> DateTime<Utc> {
        "2019-08-27T10:30:00Z".parse().unwrap()
    }

    #[test]
    fn leading_font_skips_empty_runs() {
        let text = AttributedText {
            runs: vec![
                TextRun {
                    text: String::new(),
                    font: Some(Font::bold(30.0)),
                },
                TextRun {
                    text: "hello".into(),
                    font: Some(Font::regular(12.0)),
                },
            ],
        };
        assert_eq!(text.leading_font(), Some(Font::regular(12.0)));
    }

    #[test]
    fn leading_font_none_without_override() {
        assert_eq!(AttributedText::plain("hi").leading_font(), None);
        assert_eq!(AttributedText::default().leading_font(), None);
    }

    #[test]
    fn with_base_font_fills_missing_fonts_only() {
        let text = AttributedText {
            runs: vec![
                TextRun {
                    text: "a".into(),
                    font: None,
                },
                TextRun {
                    text: "b".into(),
                    font: Some(Font::bold(20.0)),
                },
            ],
        };
        let filled = text.with_base_font(Font::regular(11.0));
        assert_eq!(filled.runs[0].font, Some(Font::regular(11.0)));
        assert_eq!(filled.runs[1].font, Some(Font::bold(20.0)));
    }

    #[test]
    fn kind_flags() {
        let announcement = Message::new(
            "1",
            sender(),
            timestamp(),
            MessageKind::Announcement("First announcement".into()),
        );
        assert!(announcement.is_announcement());
        assert!(!announcement.is_warning());

        let warning = Message::new("2", sender(), timestamp(), MessageKind::Warning("W".into()));
        assert!(warning.is_warning());
        assert_eq!(warning.kind.tag(), KindTag::Warning);
    }

    #[test]
    fn message_deserializes_from_json() {
        let json = r#"{
            "id": "m1",
            "sender": {"id": "me", "display_name": "my user"},
            "created_at": "2019-08-27T10:30:00Z",
            "kind": {"type": "text", "value": "Please send a picture"}
        }"#;
        let message: Message = serde_json::from_str(json).unwrap();
        assert_eq!(message.kind, MessageKind::Text("Please send a picture".into()));
        assert!(!message.failed);
    }

    #[test]
    fn photo_kind_deserializes() {
        let json = r#"{"type": "photo", "value": {"size": {"width": 182.0, "height": 182.0}}}"#;
        let kind: MessageKind = serde_json::from_str(json).unwrap();
        assert_eq!(
            kind,
            MessageKind::Photo(MediaRef {
                url: None,
                size: MediaRef::PLACEHOLDER_SIZE
            })
        );
    }
}
