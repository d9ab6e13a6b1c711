//! Sync the docs index with the root README.
//!
//! The README is the source of truth; the destination is replaced wholesale
//! with its text. No transformation happens between the read and the write.

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::Config;
use crate::diff;

/// Command to run when `--mode check` finds a stale index.
pub const REGENERATE_COMMAND: &str = "prepare-docs";

#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum, Default)]
pub enum Mode {
    /// Copy the README to the docs index.
    #[default]
    Write,
    /// Don't write, error if the docs index is out of date.
    Check,
    /// Print the content that would be written to stdout.
    DryRun,
}

/// Copy `README.md` to `docs/index.md` under `root`, replacing any prior content.
/// The `docs` directory is never created.
pub fn prepare(root: &Path) -> Result<()> {
    sync(root, &Config::default()).map(|_| ())
}

/// Run one preparation pass in the given mode.
pub fn run(root: &Path, config: &Config, mode: Mode) -> Result<()> {
    let name = config.destination.display();

    match mode {
        Mode::DryRun => {
            let content = read_source(config, root)?;
            print!("{content}");
        }
        Mode::Check => {
            let content = read_source(config, root)?;
            let current = std::fs::read(config.destination_path(root)).ok();
            if current.as_deref() == Some(content.as_bytes()) {
                println!("Up-to-date: {name}");
            } else {
                let current = current
                    .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
                    .unwrap_or_default();
                if let Some(diff) = diff::render(&current, &content) {
                    eprint!("{diff}");
                }
                anyhow::bail!("{name} changed, please run `{REGENERATE_COMMAND}`");
            }
        }
        Mode::Write => {
            if sync(root, config)? {
                println!("Updated: {name}");
            } else {
                println!("Up-to-date: {name}");
            }
        }
    }
    Ok(())
}

/// Read the source and write it to the destination, unconditionally.
/// Returns whether the destination content changed.
fn sync(root: &Path, config: &Config) -> Result<bool> {
    let content = read_source(config, root)?;
    let changed = !std::fs::read(config.destination_path(root))
        .is_ok_and(|current| current == content.as_bytes());
    write_destination(config, root, &content)?;
    Ok(changed)
}

fn read_source(config: &Config, root: &Path) -> Result<String> {
    let path = config.source_path(root);
    std::fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))
}

fn write_destination(config: &Config, root: &Path, content: &str) -> Result<()> {
    let path = config.destination_path(root);
    std::fs::write(&path, content).with_context(|| format!("failed to write {}", path.display()))
}
