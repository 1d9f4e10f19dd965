//! The journal service.

use super::{EncryptionSettings, JournalConfig, JournalError, JournalResult, ScanError};
use crate::domain::{FrontMatter, Note, NoteInfo, WordCount};
use crate::infra::{
    FsError, NoteStore, build_filename, count_words, decrypt_body, maybe_encrypt_body,
    parse_front_matter, parse_header, render_content,
};
use chrono::{DateTime, Utc};
use std::path::Path;
use tracing::{debug, warn};

/// Result of a listing that tolerates unreadable files.
#[derive(Debug, Default)]
pub struct NoteScan {
    /// Readable notes, most recently modified first.
    pub notes: Vec<NoteInfo>,
    /// Files that were listed but could not be read.
    pub errors: Vec<ScanError>,
}

/// A directory of journal notes.
///
/// Every operation works directly against the filesystem: there is no cache
/// or index, so changes made by other programs are always visible. Calls
/// block until their I/O and cryptography are done. Nothing coordinates
/// concurrent writers; two saves resolving to the same filename leave
/// whichever wrote last.
#[derive(Debug, Clone)]
pub struct Journal {
    store: NoteStore,
    encryption: EncryptionSettings,
}

impl Journal {
    pub fn new(config: JournalConfig) -> Self {
        Self {
            store: NoteStore::new(config.root),
            encryption: config.encryption,
        }
    }

    /// Returns the journal directory.
    pub fn root(&self) -> &Path {
        self.store.root()
    }

    pub fn encryption(&self) -> &EncryptionSettings {
        &self.encryption
    }

    /// Lists every note with its metadata, most recently modified first.
    ///
    /// Each file is read and its frontmatter (or legacy header) attached to
    /// the entry. Encrypted bodies are not decrypted; their metadata is
    /// stored in the clear.
    ///
    /// # Errors
    ///
    /// Fails if the directory cannot be listed or if any single file cannot
    /// be read. Use [`Journal::scan_notes`] to skip unreadable files instead.
    pub fn list_notes(&self) -> JournalResult<Vec<NoteInfo>> {
        let entries = self.store.list_markdown()?;
        debug!(root = %self.root().display(), count = entries.len(), "listing notes");

        let notes = entries
            .into_iter()
            .map(|info| self.describe(info))
            .collect::<Result<Vec<_>, FsError>>()?;
        Ok(notes)
    }

    /// Like [`Journal::list_notes`], but files that cannot be read are
    /// reported in [`NoteScan::errors`] instead of failing the call.
    ///
    /// # Errors
    ///
    /// Fails only if the directory itself cannot be listed.
    pub fn scan_notes(&self) -> JournalResult<NoteScan> {
        let entries = self.store.list_markdown()?;
        debug!(root = %self.root().display(), count = entries.len(), "scanning notes");

        let mut scan = NoteScan::default();
        for info in entries {
            let filename = info.filename().to_string();
            match self.describe(info) {
                Ok(info) => scan.notes.push(info),
                Err(source) => {
                    warn!(filename = %filename, error = %source, "skipping unreadable note");
                    scan.errors.push(ScanError { filename, source });
                }
            }
        }
        Ok(scan)
    }

    fn describe(&self, info: NoteInfo) -> Result<NoteInfo, FsError> {
        let (content, _) = self.store.read(info.filename())?;
        Ok(info.with_front_matter(read_metadata(&content)))
    }

    /// Loads a note, decrypting its body if it was stored encrypted.
    ///
    /// Files without recognisable frontmatter are read as legacy
    /// `# {timestamp} {title}` notes: not encrypted, word count unknown.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::Store` if the file cannot be read.
    /// Returns `JournalError::Decrypt` if the body cannot be decrypted; the
    /// error carries the note with its metadata and an empty body.
    pub fn load_note(&self, filename: &str) -> JournalResult<Note> {
        let (content, mod_time) = self.store.read(filename)?;

        let (matter, body) = parse_front_matter(&content);
        if !matter.is_recognized() {
            debug!(filename, "no frontmatter, reading legacy header");
            let (title, created, body) = parse_header(&content);
            return Ok(Note::from_legacy(filename, title, created, body, mod_time));
        }

        if !matter.encrypted {
            return Ok(Note::from_front_matter(filename, matter, body, mod_time));
        }

        let mut note = Note::from_front_matter(filename, matter, String::new(), mod_time);
        match decrypt_body(body, self.encryption.key_path()) {
            Ok(plaintext) => {
                note.set_content(plaintext);
                Ok(note)
            }
            Err(source) => {
                warn!(filename, error = %source, "failed to decrypt note");
                Err(JournalError::Decrypt {
                    note: Box::new(note),
                    source,
                })
            }
        }
    }

    /// Saves a new note and returns its filename.
    ///
    /// `created` defaults to now. The filename is derived from the title and
    /// `created`, so saving the same title twice within one minute replaces
    /// the earlier file.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::Crypto` if encryption is enabled and fails
    /// (including a missing key), and `JournalError::Store` if the write
    /// fails. Nothing is written on error.
    pub fn save_note(
        &self,
        title: &str,
        body: &str,
        created: Option<DateTime<Utc>>,
    ) -> JournalResult<String> {
        let now = Utc::now();
        let created = created.unwrap_or(now);
        let filename = build_filename(title, created);

        self.write_note(&filename, title, body, created, now)?;
        Ok(filename)
    }

    /// Rewrites an existing note in place.
    ///
    /// The note keeps `filename` even if the title changed. `created` must be
    /// the note's original creation time; `updated` is set to now.
    ///
    /// # Errors
    ///
    /// Same as [`Journal::save_note`].
    pub fn update_note(
        &self,
        filename: &str,
        title: &str,
        body: &str,
        created: DateTime<Utc>,
    ) -> JournalResult<()> {
        self.write_note(filename, title, body, created, Utc::now())
    }

    fn write_note(
        &self,
        filename: &str,
        title: &str,
        body: &str,
        created: DateTime<Utc>,
        updated: DateTime<Utc>,
    ) -> JournalResult<()> {
        // Counted before encryption so it reflects the plaintext
        let word_count = WordCount::Counted(count_words(body));

        let (stored_body, encrypted) =
            maybe_encrypt_body(body, self.encryption.enabled, self.encryption.key_path())?;
        let content = render_content(
            title,
            &stored_body,
            Some(created),
            Some(updated),
            encrypted,
            word_count,
        );

        self.store.write(filename, &content)?;
        debug!(filename, encrypted, words = %word_count, "saved note");
        Ok(())
    }
}

/// Reads the metadata of a note file, falling back to the legacy header.
fn read_metadata(content: &str) -> FrontMatter {
    let (matter, _) = parse_front_matter(content);
    if matter.is_recognized() {
        return matter;
    }

    let (title, created, _) = parse_header(content);
    FrontMatter {
        title,
        created,
        ..FrontMatter::default()
    }
}
