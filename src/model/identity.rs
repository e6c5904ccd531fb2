//! Sender identity with a validating smart constructor.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// Error returned when an identity id is empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Identity id must not be empty (display name: {display_name:?})")]
pub struct InvalidIdentity {
    /// Display name that came with the rejected id.
    pub display_name: String,
}

/// A message sender.
///
/// Two identities are equal when their ids are equal; the display name is
/// presentation only and never takes part in comparisons.
#[derive(Debug, Clone, Serialize)]
pub struct Identity {
    id: String,
    display_name: String,
}

impl Identity {
    /// Smart constructor: validates a non-empty id.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Result<Self, InvalidIdentity> {
        let id = id.into();
        let display_name = display_name.into();
        if id.is_empty() {
            return Err(InvalidIdentity { display_name });
        }
        Ok(Self { id, display_name })
    }

    /// Unique id of the sender.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human readable name.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Avatar initials: first letter of up to two words of the display name.
    ///
    /// Falls back to the first letter of the id when the name is blank.
    pub fn initials(&self) -> String {
        let from_name: String = self
            .display_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if from_name.is_empty() {
            self.id.chars().take(1).flat_map(char::to_uppercase).collect()
        } else {
            from_name
        }
    }
}

impl PartialEq for Identity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Identity {}

impl Hash for Identity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name, self.id)
    }
}

impl<'de> Deserialize<'de> for Identity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            id: String,
            #[serde(default)]
            display_name: String,
        }

        let raw = Raw::deserialize(deserializer)?;
        Identity::new(raw.id, raw.display_name).map_err(serde::de::Error::custom)
    }
}
