//! Frontmatter codec for journal entry files.
//!
//! Current format:
//!
//! ```text
//! ---
//! title: Note Title
//! created: 2024-01-15T10:30:00Z
//! updated: 2024-01-15T10:30:00Z
//! encrypted: false
//! word_count: 3
//! ---
//!
//! Body content here...
//! ```
//!
//! Older notes carry a single `# 2024-01-15_10-30 Note Title` header line
//! instead; [`parse_header`] reads those.

use crate::domain::{FrontMatter, WordCount};
use crate::infra::slug::TIMESTAMP_LAYOUT;
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

const DELIMITER: &str = "---";
const HEADER_PREFIX: &str = "# ";

/// Renders a complete note file: metadata block, blank line, raw body.
///
/// `body` is written verbatim and may be ciphertext. Keys are written in
/// lower case in a fixed order. Line breaks in `title` are replaced with
/// spaces so the block stays one key per line.
pub fn render_content(
    title: &str,
    body: &str,
    created: Option<DateTime<Utc>>,
    updated: Option<DateTime<Utc>>,
    encrypted: bool,
    word_count: WordCount,
) -> String {
    let title = title.replace(['\r', '\n'], " ");
    format!(
        "{DELIMITER}\n\
         title: {}\n\
         created: {}\n\
         updated: {}\n\
         encrypted: {}\n\
         word_count: {}\n\
         {DELIMITER}\n\n{}",
        title,
        format_timestamp(created),
        format_timestamp(updated),
        encrypted,
        word_count.to_raw(),
        body
    )
}

/// Splits a note file into its metadata and body.
///
/// Returns `FrontMatter::default()` together with the untouched input when
/// no block is recognised: fewer than three lines, a first non-empty line
/// other than `---`, or a missing closing `---`. A partially parsed block is
/// never returned.
///
/// Inside the block, keys are case-insensitive, values are trimmed, lines
/// without a colon and unknown keys are skipped, and a repeated key
/// overwrites the earlier value.
pub fn parse_front_matter(content: &str) -> (FrontMatter, &str) {
    let unrecognized = (FrontMatter::default(), content);

    if content.split('\n').count() < 3 {
        return unrecognized;
    }

    let mut lines = content.split('\n');
    let mut offset = 0;

    // Opening delimiter: the first non-empty line
    loop {
        let Some(line) = lines.next() else {
            return unrecognized;
        };
        offset += line.len() + 1;

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed != DELIMITER {
            return unrecognized;
        }
        break;
    }

    let mut matter = FrontMatter::default();
    for line in lines {
        offset += line.len() + 1;

        let line = line.trim();
        if line == DELIMITER {
            let rest = content.get(offset..).unwrap_or("");
            let body = rest.strip_prefix('\n').unwrap_or(rest);
            return (matter, body);
        }

        if let Some((key, value)) = line.split_once(':') {
            apply_field(&mut matter, key, value.trim());
        }
    }

    unrecognized
}

fn apply_field(matter: &mut FrontMatter, key: &str, value: &str) {
    match key.trim().to_ascii_lowercase().as_str() {
        "title" => matter.title = value.to_string(),
        "created" => matter.created = parse_timestamp(value),
        "updated" => matter.updated = parse_timestamp(value),
        "encrypted" => matter.encrypted = value.eq_ignore_ascii_case("true"),
        "word_count" => {
            if let Ok(raw) = value.parse::<i64>() {
                matter.word_count = WordCount::from_raw(raw);
            }
        }
        _ => {}
    }
}

/// Parses a legacy `# {timestamp} {title}` header line.
///
/// Returns `(title, created, body)`:
/// - no `# ` prefix, or no space between timestamp and title: empty title,
///   `None`, and the untouched input
/// - unparseable timestamp: the title, `None`, and everything after the
///   header line
/// - otherwise: the title, the timestamp, and the remaining text with one
///   leading blank line removed
pub fn parse_header(content: &str) -> (String, Option<DateTime<Utc>>, &str) {
    let (first, rest) = content.split_once('\n').unwrap_or((content, ""));

    let Some(header) = first.trim().strip_prefix(HEADER_PREFIX) else {
        return (String::new(), None, content);
    };
    let Some((stamp, title)) = header.split_once(' ') else {
        return (String::new(), None, content);
    };
    let title = title.trim().to_string();

    match NaiveDateTime::parse_from_str(stamp, TIMESTAMP_LAYOUT) {
        Ok(naive) => (
            title,
            Some(naive.and_utc()),
            rest.strip_prefix('\n').unwrap_or(rest),
        ),
        Err(_) => (title, None, rest),
    }
}

/// Parses an RFC 3339 timestamp, falling back to the minute-precision
/// filename layout. Anything else is `None`.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if value.is_empty() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, TIMESTAMP_LAYOUT)
        .ok()
        .map(|naive| naive.and_utc())
}

fn format_timestamp(ts: Option<DateTime<Utc>>) -> String {
    ts.map(|ts| ts.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_default()
}

/// Counts whitespace-delimited words.
pub fn count_words(content: &str) -> usize {
    content.split_whitespace().count()
}
