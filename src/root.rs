use anyhow::Result;
use std::path::{Path, PathBuf};

/// Project root, two levels up from `src/main.rs`.
pub const ROOT_DIR: &str = env!("CARGO_MANIFEST_DIR");

/// Resolve the project root. Falls back to [`ROOT_DIR`] so the result never
/// depends on the current working directory.
pub fn resolve(root_override: Option<&Path>) -> Result<PathBuf> {
    let root = match root_override {
        Some(r) => r.to_path_buf(),
        None => PathBuf::from(ROOT_DIR),
    };
    if !root.is_dir() {
        anyhow::bail!("root directory not found: {}", root.display());
    }
    Ok(root)
}
