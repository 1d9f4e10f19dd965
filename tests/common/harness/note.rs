//! Builder for test notes with sensible defaults.

#![allow(dead_code)]

use a7::domain::WordCount;
use a7::infra::{build_filename, count_words, render_content};
use chrono::{DateTime, TimeZone, Utc};

/// A plaintext note written straight to disk, bypassing the CLI.
#[derive(Debug)]
pub struct TestNote {
    title: String,
    created: DateTime<Utc>,
    body: String,
    legacy: bool,
}

impl TestNote {
    /// Creates a note with the given title, created at a fixed time.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            created: Utc
                .with_ymd_and_hms(2024, 1, 15, 10, 30, 0)
                .single()
                .expect("valid timestamp"),
            body: String::new(),
            legacy: false,
        }
    }

    pub fn created(mut self, created: DateTime<Utc>) -> Self {
        self.created = created;
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Writes the note in the `# {timestamp} {title}` format instead of
    /// with frontmatter.
    pub fn legacy(mut self) -> Self {
        self.legacy = true;
        self
    }

    pub fn filename(&self) -> String {
        build_filename(&self.title, self.created)
    }

    pub fn get_title(&self) -> &str {
        &self.title
    }

    pub fn get_body(&self) -> &str {
        &self.body
    }

    /// Returns the full file contents.
    pub fn render(&self) -> String {
        if self.legacy {
            return format!(
                "# {} {}\n\n{}",
                self.created.format("%Y-%m-%d_%H-%M"),
                self.title,
                self.body
            );
        }
        render_content(
            &self.title,
            &self.body,
            Some(self.created),
            Some(self.created),
            false,
            WordCount::Counted(count_words(&self.body)),
        )
    }
}
