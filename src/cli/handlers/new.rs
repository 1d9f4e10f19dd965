//! New note command handler.

use anyhow::{Context, Result, bail};
use std::path::Path;
use std::process::Command;

use super::journal_error;
use super::show_edit::edit_new_note;
use crate::cli::NewArgs;
use crate::cli::config::Config;
use crate::journal::Journal;

/// Opens a file in the user's configured editor.
pub(crate) fn open_in_editor(path: &Path, config: &Config) -> Result<()> {
    let editor = config.editor();

    // Parse editor command (may include args like "code --wait")
    let parts: Vec<&str> = editor.split_whitespace().collect();
    let Some((cmd, args)) = parts.split_first() else {
        bail!("editor command is empty");
    };

    let status = Command::new(cmd)
        .args(args)
        .arg(path)
        .status()
        .with_context(|| format!("failed to launch editor '{}'", editor))?;

    if !status.success() {
        bail!("editor '{}' exited with non-zero status", editor);
    }

    Ok(())
}

pub fn handle_new(args: &NewArgs, journal: &Journal, config: &Config) -> Result<()> {
    let title = args.title.trim();
    if title.is_empty() {
        bail!("title cannot be empty");
    }

    let filename = journal
        .save_note(title, &args.body, None)
        .map_err(journal_error)
        .with_context(|| format!("failed to save note '{title}'"))?;

    println!("Created: {title}");
    println!("  {}", journal.root().join(&filename).display());

    if args.edit {
        edit_new_note(journal, &filename, config)?;
    }

    Ok(())
}
