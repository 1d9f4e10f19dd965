//! Journal entries and their listing projection.

use crate::domain::{FrontMatter, WordCount};
use chrono::{DateTime, Utc};
use std::fmt;

/// A journal entry as returned by `Journal::load_note`.
///
/// `content` is always plaintext. Whether the body was stored encrypted is
/// visible only through [`Note::encrypted`].
///
/// # Examples
///
/// ```
/// use a7::journal::{Journal, JournalConfig};
///
/// let dir = tempfile::tempdir().unwrap();
/// let journal = Journal::new(JournalConfig::new(dir.path()));
/// let filename = journal.save_note("Morning", "coffee first", None).unwrap();
///
/// let note = journal.load_note(&filename).unwrap();
/// assert_eq!(note.title(), "Morning");
/// assert_eq!(note.content(), "coffee first");
/// assert_eq!(note.word_count().get(), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    filename: String,
    title: String,
    content: String,
    created: Option<DateTime<Utc>>,
    updated: Option<DateTime<Utc>>,
    mod_time: DateTime<Utc>,
    encrypted: bool,
    word_count: WordCount,
}

impl Note {
    /// Creates a note from parsed frontmatter and its (plaintext) body.
    pub(crate) fn from_front_matter(
        filename: impl Into<String>,
        matter: FrontMatter,
        content: impl Into<String>,
        mod_time: DateTime<Utc>,
    ) -> Self {
        Self {
            filename: filename.into(),
            title: matter.title,
            content: content.into(),
            created: matter.created,
            updated: matter.updated,
            mod_time,
            encrypted: matter.encrypted,
            word_count: matter.word_count,
        }
    }

    /// Creates a note from a legacy `# {timestamp} {title}` file.
    pub(crate) fn from_legacy(
        filename: impl Into<String>,
        title: impl Into<String>,
        created: Option<DateTime<Utc>>,
        content: impl Into<String>,
        mod_time: DateTime<Utc>,
    ) -> Self {
        Self {
            filename: filename.into(),
            title: title.into(),
            content: content.into(),
            created,
            updated: None,
            mod_time,
            encrypted: false,
            word_count: WordCount::Unknown,
        }
    }

    pub(crate) fn set_content(&mut self, content: String) {
        self.content = content;
    }

    /// Returns the file name, the note's identity within a journal.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the plaintext body.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns when the note was first saved, if recorded.
    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.created
    }

    /// Returns when the note was last saved, if recorded.
    pub fn updated(&self) -> Option<DateTime<Utc>> {
        self.updated
    }

    /// Returns the file's modification time as reported by the filesystem.
    pub fn mod_time(&self) -> DateTime<Utc> {
        self.mod_time
    }

    /// Returns true if the body is stored encrypted on disk.
    pub fn encrypted(&self) -> bool {
        self.encrypted
    }

    /// Returns the word count recorded at the last save.
    pub fn word_count(&self) -> WordCount {
        self.word_count
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.filename)
    }
}

/// One entry of a journal listing.
///
/// The store fills in `filename` and `mod_time`; the journal attaches the
/// descriptive fields read from each file's metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteInfo {
    filename: String,
    mod_time: DateTime<Utc>,
    title: String,
    created: Option<DateTime<Utc>>,
    updated: Option<DateTime<Utc>>,
    encrypted: bool,
    word_count: WordCount,
}

impl NoteInfo {
    /// Creates an entry carrying only what the filesystem reports.
    pub fn new(filename: impl Into<String>, mod_time: DateTime<Utc>) -> Self {
        Self {
            filename: filename.into(),
            mod_time,
            title: String::new(),
            created: None,
            updated: None,
            encrypted: false,
            word_count: WordCount::Unknown,
        }
    }

    /// Returns a copy with the descriptive fields taken from `matter`.
    pub fn with_front_matter(self, matter: FrontMatter) -> Self {
        Self {
            title: matter.title,
            created: matter.created,
            updated: matter.updated,
            encrypted: matter.encrypted,
            word_count: matter.word_count,
            ..self
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn mod_time(&self) -> DateTime<Utc> {
        self.mod_time
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.created
    }

    pub fn updated(&self) -> Option<DateTime<Utc>> {
        self.updated
    }

    pub fn encrypted(&self) -> bool {
        self.encrypted
    }

    pub fn word_count(&self) -> WordCount {
        self.word_count
    }
}
