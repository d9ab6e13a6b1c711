use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Per-project config file, looked up directly under the root.
pub const CONFIG_FILE: &str = "prepare-docs.toml";

#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Source document, relative to the root.
    pub source: PathBuf,
    /// Destination document, relative to the root.
    pub destination: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::from("README.md"),
            destination: PathBuf::from("docs").join("index.md"),
        }
    }
}

impl Config {
    pub fn source_path(&self, root: &Path) -> PathBuf {
        root.join(&self.source)
    }

    pub fn destination_path(&self, root: &Path) -> PathBuf {
        root.join(&self.destination)
    }
}

/// Load config from `<root>/prepare-docs.toml`, or return defaults.
/// Paths in the file must be relative to the root.
pub fn load(root: &Path) -> Result<Config> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
    for (key, value) in [("source", &config.source), ("destination", &config.destination)] {
        if value.is_absolute() {
            anyhow::bail!(
                "{}: `{key}` must be relative to the project root, got {}",
                path.display(),
                value.display()
            );
        }
    }
    Ok(config)
}
