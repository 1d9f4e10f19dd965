//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use config::Overrides;
use output::OutputFormat;

/// a7 - a plain-file journal with optional SSH-key encryption
#[derive(Parser, Debug)]
#[command(name = "a7", version, about, long_about = None)]
pub struct Cli {
    /// Journal directory (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// SSH key file used to encrypt and decrypt notes
    #[arg(short = 'k', long, global = true)]
    pub key: Option<PathBuf>,

    /// Encrypt notes on save
    #[arg(long, global = true, conflicts_with = "no_encrypt")]
    pub encrypt: bool,

    /// Save notes in plaintext even if the config enables encryption
    #[arg(long, global = true)]
    pub no_encrypt: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Settings given on the command line, for merging over the config file.
    pub fn overrides(&self) -> Overrides {
        let encrypt = match (self.encrypt, self.no_encrypt) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        Overrides {
            dir: self.dir.clone(),
            key: self.key.clone(),
            encrypt,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List notes, most recently modified first
    #[command(name = "ls")]
    List(ListArgs),

    /// Show a note's contents
    Show(ShowArgs),

    /// Create a new note
    New(NewArgs),

    /// Edit a note in your editor
    Edit(EditArgs),

    /// Write the config file and create the journal directory
    Init(InitArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Fail on the first unreadable file instead of skipping it
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note filename
    pub filename: String,

    /// Print metadata above the body
    #[arg(long)]
    pub meta: bool,
}

/// Arguments for the `new` command
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Note title
    pub title: String,

    /// Note body
    #[arg(short, long, default_value = "")]
    pub body: String,

    /// Open the new note in your editor
    #[arg(short, long)]
    pub edit: bool,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note filename
    pub filename: String,

    /// Replace the title (the filename stays the same)
    #[arg(long)]
    pub title: Option<String>,
}

/// Arguments for the `init` command
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Journal directory to store in the config file
    #[arg(long)]
    pub journal_dir: Option<PathBuf>,

    /// SSH key file to store in the config file
    #[arg(long)]
    pub ssh_key: Option<PathBuf>,

    /// Enable encryption in the config file
    #[arg(long)]
    pub encrypt: bool,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn overrides_leave_encryption_unset_by_default() {
        let cli = Cli::parse_from(["a7", "ls"]);
        assert_eq!(cli.overrides().encrypt, None);
    }

    #[test]
    fn overrides_map_encryption_flags() {
        let cli = Cli::parse_from(["a7", "--encrypt", "ls"]);
        assert_eq!(cli.overrides().encrypt, Some(true));

        let cli = Cli::parse_from(["a7", "ls", "--no-encrypt"]);
        assert_eq!(cli.overrides().encrypt, Some(false));
    }

    #[test]
    fn encrypt_flags_conflict() {
        assert!(Cli::try_parse_from(["a7", "--encrypt", "--no-encrypt", "ls"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["a7", "show", "note.md", "-d", "/tmp/j", "-k", "/tmp/key"]);
        let overrides = cli.overrides();
        assert_eq!(overrides.dir, Some(PathBuf::from("/tmp/j")));
        assert_eq!(overrides.key, Some(PathBuf::from("/tmp/key")));
    }
}
