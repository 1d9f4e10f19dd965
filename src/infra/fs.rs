//! Journal directory access with atomic writes.
//!
//! [`NoteStore`] is the only type in the crate that touches the filesystem
//! for notes. It deals in filenames and raw text; it knows nothing about
//! frontmatter or encryption.

use crate::domain::NoteInfo;
use crate::infra::slug::NOTE_EXTENSION;
use chrono::{DateTime, Utc};
use std::cmp::Reverse;
use std::io::{self, Write as IoWrite};
use std::path::{Component, Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::warn;
use walkdir::{DirEntry, WalkDir};

/// Errors during file system operations on notes.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("note file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to scan {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("invalid note filename: {filename:?}")]
    InvalidFilename { filename: String },
}

impl FsError {
    /// Creates an appropriate FsError from an io::Error.
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path: path.into() },
            _ => FsError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}

/// A journal directory holding one `.md` file per note.
#[derive(Debug, Clone)]
pub struct NoteStore {
    root: PathBuf,
}

impl NoteStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the journal directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lists note files in the journal directory, most recently modified first.
    ///
    /// Only direct children of the root are considered; subdirectories are
    /// neither listed nor descended into. Symlinks are listed when they point
    /// at a file. A `.md` link whose target is missing is still listed, with
    /// the link's own modification time, so reading it reports the failure
    /// for that one file. Entries without the note extension are never
    /// inspected.
    ///
    /// # Errors
    ///
    /// Returns `FsError::NotFound` if the root doesn't exist.
    /// Returns `FsError::NotADirectory` if the root is not a directory.
    /// Returns `FsError::Walk` if the root cannot be read.
    pub fn list_markdown(&self) -> Result<Vec<NoteInfo>, FsError> {
        if !self.root.exists() {
            return Err(FsError::NotFound {
                path: self.root.clone(),
            });
        }
        if !self.root.is_dir() {
            return Err(FsError::NotADirectory {
                path: self.root.clone(),
            });
        }

        let mut notes = Vec::new();
        for entry in WalkDir::new(&self.root).min_depth(1).max_depth(1) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    return Err(FsError::Walk {
                        path: self.root.clone(),
                        source: err,
                    });
                }
                Err(err) => {
                    warn!(error = %err, "skipping unreadable directory entry");
                    continue;
                }
            };
            if !has_md_extension(&entry) {
                continue;
            }
            let Some(mod_time) = entry_mod_time(&entry) else {
                continue;
            };

            let filename = entry.file_name().to_string_lossy().into_owned();
            notes.push(NoteInfo::new(filename, mod_time));
        }

        notes.sort_by_key(|n| Reverse(n.mod_time()));
        Ok(notes)
    }

    /// Reads a note file and its modification time.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
    /// failing the read.
    ///
    /// # Errors
    ///
    /// Returns `FsError::NotFound` if the file doesn't exist.
    /// Returns `FsError::PermissionDenied` if access is denied.
    pub fn read(&self, filename: &str) -> Result<(String, DateTime<Utc>), FsError> {
        let path = self.path_for(filename)?;

        let bytes = std::fs::read(&path).map_err(|e| FsError::from_io(&path, e))?;
        let mod_time = modified_time(&path)?;

        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(err) => {
                warn!(
                    path = %path.display(),
                    valid_up_to = err.utf8_error().valid_up_to(),
                    "note is not valid UTF-8, replacing invalid bytes"
                );
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        };

        Ok((content, mod_time))
    }

    /// Writes a note file atomically, creating the journal directory if needed.
    ///
    /// Content goes to a temporary file in the journal directory which is then
    /// renamed over `filename`, replacing any previous version.
    ///
    /// # Errors
    ///
    /// Returns `FsError::Io` if the directory or temp file cannot be created.
    /// Returns `FsError::AtomicWrite` if the atomic rename fails.
    pub fn write(&self, filename: &str, content: &str) -> Result<(), FsError> {
        let path = self.path_for(filename)?;

        std::fs::create_dir_all(&self.root).map_err(|e| FsError::from_io(&self.root, e))?;

        let mut temp = NamedTempFile::new_in(&self.root).map_err(|e| FsError::Io {
            path: path.clone(),
            source: e,
        })?;

        temp.write_all(content.as_bytes())
            .map_err(|e| FsError::Io {
                path: path.clone(),
                source: e,
            })?;

        temp.persist(&path).map_err(|e| FsError::AtomicWrite {
            path: path.clone(),
            source: e.error,
        })?;

        Ok(())
    }

    /// Resolves a filename to a path directly inside the root.
    fn path_for(&self, filename: &str) -> Result<PathBuf, FsError> {
        let mut components = Path::new(filename).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(self.root.join(filename)),
            _ => Err(FsError::InvalidFilename {
                filename: filename.to_string(),
            }),
        }
    }
}

fn modified_time(path: &Path) -> Result<DateTime<Utc>, FsError> {
    std::fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map(DateTime::<Utc>::from)
        .map_err(|e| FsError::from_io(path, e))
}

/// Modification time of a listable entry, or `None` for entries that are not
/// notes (directories, links to directories, special files).
fn entry_mod_time(entry: &DirEntry) -> Option<DateTime<Utc>> {
    let meta = if entry.path_is_symlink() {
        match std::fs::metadata(entry.path()) {
            Ok(target) => target,
            // Dangling: list it so the read reports the missing target
            Err(_) => return link_mod_time(entry),
        }
    } else {
        entry.metadata().ok()?
    };
    if !meta.is_file() {
        return None;
    }
    meta.modified().ok().map(DateTime::<Utc>::from)
}

fn link_mod_time(entry: &DirEntry) -> Option<DateTime<Utc>> {
    let meta = entry.metadata().ok()?;
    meta.modified().ok().map(DateTime::<Utc>::from)
}

fn has_md_extension(entry: &DirEntry) -> bool {
    entry
        .path()
        .extension()
        .is_some_and(|e| e == NOTE_EXTENSION)
}
