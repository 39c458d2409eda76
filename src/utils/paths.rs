use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};

/// Open an input file after checking that it is a regular file.
///
/// Metadata is read from the open handle so the check and the read see the same file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened (missing, permission denied)
/// - The path is a directory or other non-regular file
pub fn open_input_file(path: &Path) -> Result<File> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    if !metadata.is_file() {
        bail!("Not a regular file: {}", path.display());
    }

    Ok(file)
}

/// Validate an input path without keeping it open (for inputs opened by another library)
pub fn validate_input_file(path: &Path) -> Result<()> {
    open_input_file(path).map(drop)
}
