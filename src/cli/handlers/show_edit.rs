//! Show and Edit command handlers.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use super::journal_error;
use super::new::open_in_editor;
use crate::cli::config::Config;
use crate::cli::{EditArgs, ShowArgs};
use crate::domain::Note;
use crate::journal::{EncryptionSettings, Journal, JournalConfig};

pub fn handle_show(args: &ShowArgs, journal: &Journal) -> Result<()> {
    match journal.load_note(&args.filename) {
        Ok(note) => {
            if args.meta {
                println!("{}", format_metadata(&note));
                println!();
            }
            if !note.content().is_empty() {
                println!("{}", note.content());
            }
            Ok(())
        }
        Err(err) => {
            // Metadata is stored in the clear, so show what we have
            if let Some(note) = err.partial_note() {
                println!("{}", format_metadata(note));
                return Err(journal_error(err)).context("unable to decrypt note body");
            }
            Err(journal_error(err))
                .with_context(|| format!("failed to load note: {}", args.filename))
        }
    }
}

/// Renders the header block printed by `show --meta`.
pub(crate) fn format_metadata(note: &Note) -> String {
    let stamp = |at: Option<chrono::DateTime<chrono::Utc>>| {
        at.map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string())
    };

    let mut lines = vec![
        format!("# {}", note.title()),
        String::new(),
        format!(
            "Created: {}  Updated: {}  Modified: {}",
            stamp(note.created()),
            stamp(note.updated()),
            note.mod_time().format("%Y-%m-%d %H:%M")
        ),
        format!("Words: {}", note.word_count()),
    ];
    if note.encrypted() {
        lines.push("Encrypted: yes".to_string());
    }
    lines.join("\n")
}

/// Trait for launching an editor (allows mocking in tests).
pub(crate) trait EditorLauncher {
    fn open(&self, path: &Path) -> Result<()>;
}

struct ConfiguredEditor<'a>(&'a Config);

impl EditorLauncher for ConfiguredEditor<'_> {
    fn open(&self, path: &Path) -> Result<()> {
        open_in_editor(path, self.0)
    }
}

/// Passes a note's plaintext body through the editor and writes the result
/// back under the same filename.
///
/// The body is edited in a temporary file so encrypted notes never reach the
/// journal directory in plaintext. A note that was encrypted is written back
/// encrypted even if encryption is off for new notes. A legacy note without
/// a creation time keeps its modification time as `created`. Returns `false`
/// if nothing changed, in which case the note is left untouched.
pub(crate) fn edit_note<E: EditorLauncher>(
    journal: &Journal,
    filename: &str,
    new_title: Option<&str>,
    editor: &E,
) -> Result<bool> {
    let note = journal
        .load_note(filename)
        .map_err(journal_error)
        .with_context(|| format!("failed to load note: {filename}"))?;

    let body = edit_text(note.content(), editor)?;
    let title = new_title.unwrap_or(note.title());
    if body == note.content() && title == note.title() {
        return Ok(false);
    }

    let created = note.created().unwrap_or(note.mod_time());
    let sealed;
    let target = if note.encrypted() && !journal.encryption().enabled {
        sealed = keep_encrypted(journal);
        &sealed
    } else {
        journal
    };
    target
        .update_note(filename, title, &body, created)
        .map_err(journal_error)
        .with_context(|| format!("failed to update note: {filename}"))?;
    Ok(true)
}

fn keep_encrypted(journal: &Journal) -> Journal {
    let encryption = EncryptionSettings {
        enabled: true,
        ..journal.encryption().clone()
    };
    Journal::new(JournalConfig::new(journal.root()).with_encryption(encryption))
}

fn edit_text<E: EditorLauncher>(text: &str, editor: &E) -> Result<String> {
    let mut temp = tempfile::Builder::new()
        .prefix("a7-")
        .suffix(".md")
        .tempfile()
        .context("failed to create temporary file for editing")?;
    temp.write_all(text.as_bytes())
        .and_then(|()| temp.flush())
        .context("failed to write temporary file for editing")?;

    editor.open(temp.path())?;

    std::fs::read_to_string(temp.path()).context("failed to read edited text")
}

pub fn handle_edit(args: &EditArgs, journal: &Journal, config: &Config) -> Result<()> {
    let changed = edit_note(
        journal,
        &args.filename,
        args.title.as_deref(),
        &ConfiguredEditor(config),
    )?;

    if changed {
        println!("Edited: {}", args.filename);
    } else {
        println!("No changes: {}", args.filename);
    }
    Ok(())
}

pub(crate) fn edit_new_note(journal: &Journal, filename: &str, config: &Config) -> Result<bool> {
    edit_note(journal, filename, None, &ConfiguredEditor(config))
}
