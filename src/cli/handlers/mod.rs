//! Command handlers for the CLI.

mod completions;
mod init;
mod list;
mod new;
mod show_edit;


use crate::journal::JournalError;

// Re-export public items
pub use completions::handle_completions;
pub use init::handle_init;
pub use list::handle_list;
pub use new::handle_new;
pub use show_edit::{handle_edit, handle_show};

// Re-export for tests
#[cfg(test)]
pub(crate) use init::apply_init;
#[cfg(test)]
pub(crate) use show_edit::{EditorLauncher, edit_note, format_metadata};

// ===========================================
// Shared Utilities
// ===========================================

/// Converts a journal error, adding a setup hint when no key is configured.
pub(crate) fn journal_error(err: JournalError) -> anyhow::Error {
    if err.is_missing_key() {
        anyhow::Error::new(err)
            .context("no SSH key configured; pass --key or run `a7 init --ssh-key <file>`")
    } else {
        err.into()
    }
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
