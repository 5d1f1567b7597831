use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Store-native key of a persisted document.
///
/// Identifiers cross the HTTP boundary as opaque strings; parsing them here keeps
/// the key format out of the use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(Uuid);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed document id: {raw}")]
pub struct MalformedDocumentId {
    pub raw: String,
}

impl DocumentId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn parse(raw: &str) -> Result<Self, MalformedDocumentId> {
        Uuid::parse_str(raw.trim())
            .map(Self)
            .map_err(|_| MalformedDocumentId {
                raw: raw.to_string(),
            })
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for DocumentId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl FromStr for DocumentId {
    type Err = MalformedDocumentId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
