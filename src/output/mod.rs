//! JSON output with atomic writes

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Serialize;

/// Write `value` as pretty-printed JSON (2-space indent, UTF-8).
///
/// Goes through a temp file next to `path` and a rename, so a failed run never
/// leaves a truncated file behind.
pub fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output JSON")?;

    let temp = temp_path(path)?;
    fs::write(&temp, json)
        .with_context(|| format!("Failed to write output temp file: {}", temp.display()))?;

    if let Err(err) = fs::rename(&temp, path) {
        let _ = fs::remove_file(&temp);
        return Err(err)
            .with_context(|| format!("Failed to move output into place: {}", path.display()));
    }

    Ok(())
}

fn temp_path(path: &Path) -> Result<PathBuf> {
    let Some(name) = path.file_name() else {
        bail!("Output path has no file name: {}", path.display());
    };
    let mut temp_name = name.to_os_string();
    temp_name.push(".tmp");
    Ok(path.with_file_name(temp_name))
}
