use crate::error::{PbxError, Result};
use std::fs::{self, metadata};
use std::path::Path;

const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024; //10MB

/// Reads the whole manifest into memory.
pub fn read_manifest(path: &Path) -> Result<String> {
    let metadata = metadata(path)?;
    if metadata.len() > MAX_FILE_SIZE {
        return Err(PbxError::TooLarge {
            size: metadata.len(),
            max: MAX_FILE_SIZE,
        });
    }

    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|_| PbxError::NotText(path.to_path_buf()))
}
