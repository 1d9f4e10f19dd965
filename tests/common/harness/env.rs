//! Isolated test environment with temp directory.

#![allow(dead_code)]

use super::{A7Command, TestNote};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment.
///
/// Holds a journal directory and a fake home directory inside one temp dir.
/// Commands run with `HOME` and `XDG_CONFIG_HOME` pointed into it, so the
/// user's real config file is never read or written.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    journal_dir: PathBuf,
    home_dir: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment with an empty journal.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let journal_dir = temp_dir.path().join("journal");
        let home_dir = temp_dir.path().join("home");
        std::fs::create_dir_all(&journal_dir).expect("Failed to create journal directory");
        std::fs::create_dir_all(&home_dir).expect("Failed to create home directory");
        Self {
            _temp_dir: temp_dir,
            journal_dir,
            home_dir,
        }
    }

    /// Returns the path to the journal directory.
    pub fn journal_dir(&self) -> &Path {
        &self.journal_dir
    }

    pub fn home_dir(&self) -> &Path {
        &self.home_dir
    }

    /// Directory the binary resolves its config file under.
    pub fn config_dir(&self) -> PathBuf {
        self.home_dir.join(".config")
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir().join("a7-journal").join("config.toml")
    }

    /// Writes a test note into the journal and returns its filename.
    pub fn add_note(&self, note: &TestNote) -> String {
        let filename = note.filename();
        self.write_file(&filename, note.render());
        filename
    }

    /// Writes raw bytes into the journal directory.
    pub fn write_file(&self, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.journal_dir.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.journal_dir.join(name)).expect("Failed to read file")
    }

    /// Returns the names of the `.md` files in the journal, sorted.
    pub fn note_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(&self.journal_dir)
            .expect("Failed to read journal directory")
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".md"))
            .collect();
        names.sort();
        names
    }

    /// Writes an executable editor script that replaces the edited file
    /// with `replacement`.
    #[cfg(unix)]
    pub fn editor_script(&self, replacement: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.home_dir.join("editor.sh");
        let script = format!("#!/bin/sh\nprintf '%s' '{replacement}' > \"$1\"\n");
        std::fs::write(&path, script).expect("Failed to write editor script");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make editor script executable");
        path
    }

    /// Command with the isolated environment but no `--dir`.
    pub fn bare_cmd(&self) -> A7Command {
        A7Command::new()
            .env("HOME", &self.home_dir)
            .env("XDG_CONFIG_HOME", self.config_dir())
    }

    /// Command pointed at this environment's journal.
    pub fn cmd(&self) -> A7Command {
        self.bare_cmd().dir(&self.journal_dir)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
