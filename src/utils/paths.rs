use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

// Maximum size for a clippings export: 10MB. Real exports are a few hundred
// kilobytes at most; anything bigger is the wrong file.
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Validates that a clippings file's size is within acceptable limits (10MB)
///
/// Takes an open file handle to avoid TOCTOU (time-of-check-time-of-use)
/// race conditions where the file could be modified between the size check
/// and subsequent file operations.
///
/// # Errors
///
/// Returns an error if the file metadata cannot be read or the file exceeds
/// the size limit.
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        bail!(
            "Clippings file too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_FILE_SIZE_BYTES
        );
    }

    Ok(())
}

/// Default output path for a book: `<title>.md` in the working directory.
///
/// Path separators in the title are replaced so a book named
/// `"Crime / Punishment"` does not resolve into a subdirectory.
pub fn default_output_path(title: &str) -> PathBuf {
    let safe: String =
        title.chars().map(|c| if matches!(c, '/' | '\\') { '_' } else { c }).collect();
    PathBuf::from(format!("{}.md", safe.trim()))
}
