use crate::error::Result;
use std::fs;
use std::path::Path;

// Overwrites in place, no backup is kept.
pub fn write_manifest(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "manifest written");
    Ok(())
}
