//! Errors returned by journal operations.

use crate::domain::Note;
use crate::infra::{CryptoError, FsError};
use thiserror::Error;

/// Errors from [`Journal`](super::Journal) operations.
#[derive(Debug, Error)]
pub enum JournalError {
    /// Reading, listing or writing a note file failed.
    #[error(transparent)]
    Store(#[from] FsError),

    /// Encrypting a body failed, or no key is configured.
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// The note's metadata loaded but its body could not be decrypted.
    ///
    /// `note` holds everything except the plaintext content.
    #[error("failed to decrypt note {}: {source}", .note.filename())]
    Decrypt {
        note: Box<Note>,
        #[source]
        source: CryptoError,
    },
}

impl JournalError {
    /// Returns true if the operation needed a key and none was configured.
    pub fn is_missing_key(&self) -> bool {
        matches!(
            self,
            JournalError::Crypto(CryptoError::MissingKey)
                | JournalError::Decrypt {
                    source: CryptoError::MissingKey,
                    ..
                }
        )
    }

    /// Returns the note whose body could not be decrypted, if any.
    pub fn partial_note(&self) -> Option<&Note> {
        match self {
            JournalError::Decrypt { note, .. } => Some(note.as_ref()),
            _ => None,
        }
    }

    /// Consumes the error, returning the note whose body could not be decrypted.
    pub fn into_partial_note(self) -> Option<Note> {
        match self {
            JournalError::Decrypt { note, .. } => Some(*note),
            _ => None,
        }
    }
}

/// Result type for journal operations.
pub type JournalResult<T> = Result<T, JournalError>;

/// A file skipped by [`Journal::scan_notes`](super::Journal::scan_notes).
#[derive(Debug, Error)]
#[error("{filename}: {source}")]
pub struct ScanError {
    pub filename: String,
    #[source]
    pub source: FsError,
}
