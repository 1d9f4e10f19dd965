//! Init command handler.

use anyhow::{Context, Result, bail};

use crate::cli::InitArgs;
use crate::cli::config::Config;
use crate::infra::KeyFile;

/// Merges `init` arguments into the current config.
///
/// A new key must be usable for encryption, and encryption cannot be turned
/// on without a key.
pub(crate) fn apply_init(args: &InitArgs, current: &Config) -> Result<Config> {
    let mut config = current.clone();

    if let Some(dir) = &args.journal_dir {
        config.journal_dir = Some(dir.clone());
    }

    if let Some(key) = &args.ssh_key {
        KeyFile::new(key)
            .resolve_recipient()
            .with_context(|| format!("unusable SSH key: {}", key.display()))?;
        config.ssh_key_file = Some(key.clone());
    }

    if args.encrypt {
        if config.ssh_key_file.is_none() {
            bail!("--encrypt needs an SSH key; pass --ssh-key <file>");
        }
        config.encrypt = Some(true);
    }

    Ok(config)
}

pub fn handle_init(args: &InitArgs, current: &Config) -> Result<()> {
    let config = apply_init(args, current)?;

    let journal_dir = config.journal_dir(None);
    std::fs::create_dir_all(&journal_dir)
        .with_context(|| format!("failed to create {}", journal_dir.display()))?;

    let config_path = config.save()?;

    println!("Wrote config: {}", config_path.display());
    println!("Journal directory: {}", journal_dir.display());
    if config.encrypt == Some(true) {
        println!("Encryption: on");
    }
    Ok(())
}
