//! Metadata block carried at the top of every note file.

use chrono::{DateTime, Utc};
use std::fmt;

/// Number of words in a note's plaintext body, as recorded at save time.
///
/// Notes written in the legacy header format (or whose metadata block has no
/// usable `word_count`) have no count. On disk that state is written as `-1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WordCount {
    /// Count not computed.
    #[default]
    Unknown,
    /// Count computed over the plaintext body.
    Counted(usize),
}

impl WordCount {
    /// Value written to disk when the count is unknown.
    pub const SENTINEL: i64 = -1;

    /// Interprets a raw on-disk value. Negative values are unknown.
    pub fn from_raw(raw: i64) -> Self {
        usize::try_from(raw).map_or(Self::Unknown, Self::Counted)
    }

    /// Returns the on-disk representation.
    pub fn to_raw(self) -> i64 {
        match self {
            Self::Unknown => Self::SENTINEL,
            Self::Counted(n) => n as i64,
        }
    }

    /// Returns the count, if known.
    pub fn get(self) -> Option<usize> {
        match self {
            Self::Unknown => None,
            Self::Counted(n) => Some(n),
        }
    }
}

impl From<usize> for WordCount {
    fn from(n: usize) -> Self {
        Self::Counted(n)
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => f.pad("-"),
            Self::Counted(n) => f.pad(&n.to_string()),
        }
    }
}

/// Fields parsed from a note's frontmatter block.
///
/// A missing timestamp is `None`. The default value (empty title, no
/// timestamps, not encrypted, unknown word count) is what the parser returns
/// when no block was recognised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: String,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub encrypted: bool,
    pub word_count: WordCount,
}

impl FrontMatter {
    /// Returns true when any identifying field was found.
    ///
    /// Files without one are treated as legacy header-format notes.
    pub fn is_recognized(&self) -> bool {
        !self.title.is_empty() || self.created.is_some() || self.updated.is_some()
    }
}
