//! Conversation input sources.
//!
//! A conversation is either loaded from a JSON document on disk or taken
//! from the built-in announcement sample.

use crate::layout::SizerTable;
use crate::model::error::InputError;
use crate::model::{sample, Conversation};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where the demo conversation comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// JSON file on disk.
    File(PathBuf),
    /// Built-in announcement sample.
    Sample,
}

impl InputSource {
    /// File source when a path is given, sample otherwise.
    pub fn detect(file: Option<PathBuf>) -> Self {
        match file {
            Some(path) => InputSource::File(path),
            None => InputSource::Sample,
        }
    }

    /// Load the conversation.
    ///
    /// `now` stamps the sample messages; file sources carry their own
    /// timestamps. File messages must have a kind registered in `sizers`.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist,
    /// `InputError::InvalidConversation` if it is not a valid document or
    /// holds a kind `sizers` cannot lay out, and `InputError::Io` for other
    /// read failures.
    pub fn load(
        &self,
        now: DateTime<Utc>,
        sizers: &SizerTable,
    ) -> Result<Conversation, InputError> {
        match self {
            InputSource::File(path) => load_conversation_file(path, sizers),
            InputSource::Sample => {
                info!("Using built-in announcement conversation");
                Ok(sample::announcement_conversation(now))
            }
        }
    }
}

/// Parse a conversation document from a JSON file.
///
/// # Errors
///
/// See [`InputSource::load`].
pub fn load_conversation_file(
    path: &Path,
    sizers: &SizerTable,
) -> Result<Conversation, InputError> {
    if !path.exists() {
        return Err(InputError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(path)?;
    let conversation = parse_conversation(&contents).map_err(|e| {
        InputError::InvalidConversation {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    })?;
    check_sizable(&conversation, sizers).map_err(|message| InputError::InvalidConversation {
        path: path.to_path_buf(),
        message,
    })?;

    debug!(
        path = %path.display(),
        messages = conversation.messages().len(),
        "Loaded conversation file"
    );
    Ok(conversation)
}

/// Parse a conversation document from a JSON string.
pub fn parse_conversation(json: &str) -> Result<Conversation, serde_json::Error> {
    serde_json::from_str(json)
}

/// Reject messages whose kind has no sizer in `sizers`.
///
/// Layout panics on such kinds, so file content is checked up front.
pub fn check_sizable(conversation: &Conversation, sizers: &SizerTable) -> Result<(), String> {
    match conversation
        .messages()
        .iter()
        .find(|message| sizers.get(message.kind.tag()).is_none())
    {
        Some(message) => Err(format!(
            "message {} has kind {:?} with no registered sizer",
            message.id,
            message.kind.tag()
        )),
        None => Ok(()),
    }
}
