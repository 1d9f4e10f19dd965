//! Journal service: save, update, load and list notes in a directory.

mod config;
mod error;
mod service;


pub use config::{EncryptionSettings, JournalConfig};
pub use error::{JournalError, JournalResult, ScanError};
pub use service::{Journal, NoteScan};
