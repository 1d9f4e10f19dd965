//! a7 - a plain-file journal with optional SSH-key encryption

pub mod cli;
pub mod domain;
pub mod infra;
pub mod journal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use journal::Journal;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_completions, handle_edit, handle_init, handle_list, handle_new, handle_show,
    },
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load()?;
    let journal = Journal::new(config.journal_config(&cli.overrides()));

    match &cli.command {
        Command::List(args) => handle_list(args, &journal),
        Command::Show(args) => handle_show(args, &journal),
        Command::New(args) => handle_new(args, &journal, &config),
        Command::Edit(args) => handle_edit(args, &journal, &config),
        Command::Init(args) => handle_init(args, &config),
        Command::Completions(args) => handle_completions(args),
    }
}

/// Installs a stderr subscriber. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A subscriber may already be installed when run() is embedded
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
