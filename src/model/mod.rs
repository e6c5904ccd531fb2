//! Domain model types (pure).
//!
//! Messages and conversations are populated once by a data source and are
//! read-only to the layout engine.

pub mod conversation;
pub mod error;
pub mod identity;
pub mod message;
pub mod sample;

// Re-export for convenience
pub use conversation::{Conversation, ConversationSource};
pub use error::{AppError, InputError};
pub use identity::{Identity, InvalidIdentity};
pub use message::{
    AttributedText, Font, FontWeight, KindTag, MediaRef, Message, MessageKind, TextRun,
};
