//! Output format types for CLI commands.

use chrono::{DateTime, SecondsFormat, Utc};
use clap::ValueEnum;
use serde::Serialize;

use crate::domain::NoteInfo;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
    /// Plain file paths, one per line
    Paths,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single note in listing output.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    pub filename: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    pub modified: String,
    pub encrypted: bool,
    /// `None` when the note predates word counting.
    pub word_count: Option<usize>,
}

impl From<&NoteInfo> for NoteListing {
    fn from(info: &NoteInfo) -> Self {
        Self {
            filename: info.filename().to_string(),
            title: info.title().to_string(),
            created: info.created().map(rfc3339),
            updated: info.updated().map(rfc3339),
            modified: rfc3339(info.mod_time()),
            encrypted: info.encrypted(),
            word_count: info.word_count().get(),
        }
    }
}

fn rfc3339(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}
