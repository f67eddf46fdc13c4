//! Checks applied to files the tool reads (config, fixture) and writes (graph).

use crate::shared::Result;
use anyhow::{bail, Context};
use std::fs;
use std::path::Path;

/// Largest config or fixture document accepted (16 MB)
pub const MAX_INPUT_SIZE: u64 = 16 * 1024 * 1024;

/// Fails if `path` exists and is a symbolic link. A missing path is fine,
/// since output files are usually created fresh.
pub fn reject_symlink(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => bail!(
            "{} is a symbolic link; refusing to write through it",
            path.display()
        ),
        _ => Ok(()),
    }
}

/// Reads a text input after checking that it is a regular file of bounded size.
///
/// `what` names the file in error messages ("config file", "fixture repository").
pub fn read_input_file(path: &Path, what: &str) -> Result<String> {
    // symlink_metadata inspects the link itself rather than its target
    let metadata =
        fs::symlink_metadata(path).with_context(|| format!("Failed to read {} metadata", what))?;

    if metadata.is_symlink() {
        bail!("{} is a symbolic link, which is not accepted as {}", path.display(), what);
    }
    if !metadata.is_file() {
        bail!("{} is not a regular file", path.display());
    }
    if metadata.len() > MAX_INPUT_SIZE {
        bail!(
            "{} is too large ({} bytes, limit {})",
            path.display(),
            metadata.len(),
            MAX_INPUT_SIZE
        );
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read {}", what))
}
