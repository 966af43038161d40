//! Error types for file profiling.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while profiling a single file.
///
/// Batch profiling never propagates these; they are recorded on the file's
/// profile as a failure detail instead.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error(transparent)]
    Ingest(#[from] hq_ingest::IngestError),

    #[error("failed to parse JSON {path}: {message}")]
    Json { path: PathBuf, message: String },

    #[error("failed to parse XML {path}: {message}")]
    Xml { path: PathBuf, message: String },
}

/// Result type for profiling operations.
pub type Result<T> = std::result::Result<T, ProfileError>;
