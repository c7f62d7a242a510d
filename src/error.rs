//! Error types for manifest editing.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PbxError>;

#[derive(Error, Debug)]
pub enum PbxError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Manifest too large: {size} bytes (max: {max} bytes)")]
    TooLarge { size: u64, max: u64 },

    #[error("Manifest is not valid UTF-8: {}", .0.display())]
    NotText(PathBuf),

    #[error("Invalid plan: {0}")]
    Plan(#[from] serde_json::Error),

    /// The root group the files belong under is absent.
    #[error("Could not find main {0} group")]
    MainGroupNotFound(String),

    #[error("Could not find all required group UUIDs (missing: {})", .0.join(", "))]
    GroupsNotFound(Vec<String>),
}
