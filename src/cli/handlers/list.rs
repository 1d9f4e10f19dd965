//! List command handler.

use anyhow::{Context, Result};

use super::{journal_error, truncate_str};
use crate::cli::ListArgs;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::domain::NoteInfo;
use crate::journal::Journal;

pub fn handle_list(args: &ListArgs, journal: &Journal) -> Result<()> {
    // A journal that was never written to is empty, not an error
    let notes = if !journal.root().exists() {
        Vec::new()
    } else if args.strict {
        journal
            .list_notes()
            .map_err(journal_error)
            .with_context(|| format!("failed to list {}", journal.root().display()))?
    } else {
        let scan = journal
            .scan_notes()
            .map_err(journal_error)
            .with_context(|| format!("failed to list {}", journal.root().display()))?;
        for failure in &scan.errors {
            eprintln!("warning: skipped {failure}");
        }
        scan.notes
    };

    match args.format {
        OutputFormat::Human => print_table(&notes),
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = notes.iter().map(NoteListing::from).collect();
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Paths => {
            for note in &notes {
                println!("{}", journal.root().join(note.filename()).display());
            }
        }
    }

    Ok(())
}

fn print_table(notes: &[NoteInfo]) {
    if notes.is_empty() {
        println!("No notes found.");
        return;
    }

    println!("{:<16}  {:<40}  {:>6}  {}", "Created", "Title", "Words", "File");
    println!(
        "{:<16}  {:<40}  {:>6}  {}",
        "----------------",
        "----------------------------------------",
        "------",
        "----"
    );

    for note in notes {
        let created = note
            .created()
            .unwrap_or(note.mod_time())
            .format("%Y-%m-%d %H:%M")
            .to_string();
        let mut title = truncate_str(note.title(), 40);
        if note.encrypted() {
            title = truncate_str(&format!("{title} [enc]"), 40);
        }
        println!(
            "{:<16}  {:<40}  {:>6}  {}",
            created,
            title,
            note.word_count(),
            note.filename()
        );
    }

    println!();
    println!("{} note(s)", notes.len());
}
