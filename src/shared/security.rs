use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Upper bound for any document read from disk (100 MB)
pub const MAX_DOCUMENT_SIZE: u64 = 100 * 1024 * 1024;

/// Checks that `path` is a regular, non-symlinked file no larger than
/// [`MAX_DOCUMENT_SIZE`] and returns its size.
///
/// `symlink_metadata()` is used so the link itself is inspected, not its target.
pub fn validate_document_file(path: &Path, description: &str) -> Result<u64> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. Symbolic links are not accepted as {}.",
            path.display(),
            description
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    let size = metadata.len();
    if size > MAX_DOCUMENT_SIZE {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            size,
            MAX_DOCUMENT_SIZE
        );
    }

    Ok(size)
}

/// Rejects a write target that already exists as a symbolic link.
pub fn validate_write_target(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => anyhow::bail!(
            "Security: {} is a symbolic link. Writing through symbolic links is not allowed.",
            path.display()
        ),
        _ => Ok(()),
    }
}
