//! Profile record kinds and batched record responses

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Record kinds shown on a profile
///
/// Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// Avatar picture URL
    Pic,
    /// Website URL
    Url,
    /// Twitter handle
    Twitter,
    /// Telegram handle
    Telegram,
}

impl RecordKind {
    /// Every kind, in display order
    pub const ALL: [RecordKind; 4] = [Self::Pic, Self::Url, Self::Twitter, Self::Telegram];

    /// Record name as stored on chain
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pic => "pic",
            Self::Url => "url",
            Self::Twitter => "twitter",
            Self::Telegram => "telegram",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| crate::Error::Decode(format!("Unknown record kind: {}", s)))
    }
}

/// Non-null slot of a batched record response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordEntry {
    /// Record kind
    pub kind: RecordKind,
    /// Deserialized record content
    pub content: String,
}

impl RecordEntry {
    /// Create new entry
    pub fn new(kind: RecordKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }
}

/// Options for a batched record request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordFetchOptions {
    /// Return decoded string content instead of raw account data
    pub deserialize: bool,
}

impl RecordFetchOptions {
    /// Request decoded content
    pub const fn decoded() -> Self {
        Self { deserialize: true }
    }
}
