//! Filename derivation for journal entries.

use chrono::{DateTime, Utc};

/// chrono format of the minute-precision timestamp used in filenames and
/// legacy `# {timestamp} {title}` headers.
pub const TIMESTAMP_LAYOUT: &str = "%Y-%m-%d_%H-%M";

/// Extension of note files.
pub const NOTE_EXTENSION: &str = "md";

/// Replaces every character outside `[A-Za-z0-9]` with `_`.
///
/// Each character maps to exactly one `_`, so multi-byte characters do not
/// widen the result and nothing is collapsed or trimmed.
///
/// # Examples
///
/// ```
/// use a7::infra::sanitize_title;
///
/// assert_eq!(sanitize_title("My Note!"), "My_Note_");
/// assert_eq!(sanitize_title("Café"), "Caf_");
/// ```
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Builds the filename for a note from its title and creation time.
///
/// Format: `{YYYY-MM-DD_HH-MM}_{sanitized-title}.md`
///
/// The result depends only on its inputs, so a note can always be addressed
/// again by the name it was first saved under.
///
/// # Examples
///
/// ```
/// use a7::infra::build_filename;
/// use chrono::{TimeZone, Utc};
///
/// let created = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
/// assert_eq!(build_filename("First Note", created), "2024-01-02_03-04_First_Note.md");
/// ```
pub fn build_filename(title: &str, created: DateTime<Utc>) -> String {
    format!(
        "{}_{}.{}",
        created.format(TIMESTAMP_LAYOUT),
        sanitize_title(title),
        NOTE_EXTENSION
    )
}
