//! Construction-time settings for a [`Journal`](super::Journal).

use std::path::{Path, PathBuf};

/// Whether and how note bodies are encrypted on save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncryptionSettings {
    /// Encrypt bodies of newly saved or updated notes.
    pub enabled: bool,
    /// SSH key file used to encrypt and decrypt. Loading an encrypted note
    /// needs it even when `enabled` is false.
    pub key_path: Option<PathBuf>,
}

impl EncryptionSettings {
    /// Encryption on, with the given key file.
    pub fn with_key(key_path: impl Into<PathBuf>) -> Self {
        Self {
            enabled: true,
            key_path: Some(key_path.into()),
        }
    }

    pub fn key_path(&self) -> Option<&Path> {
        self.key_path.as_deref()
    }
}

/// Everything a journal needs, supplied once at construction.
///
/// The journal never reads the process environment; callers resolve
/// directories and key paths (see `cli::config`) and pass them here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalConfig {
    /// Directory holding the note files.
    pub root: PathBuf,
    pub encryption: EncryptionSettings,
}

impl JournalConfig {
    /// Plaintext journal rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            encryption: EncryptionSettings::default(),
        }
    }

    /// Returns a copy with the given encryption settings.
    pub fn with_encryption(mut self, encryption: EncryptionSettings) -> Self {
        self.encryption = encryption;
        self
    }
}
