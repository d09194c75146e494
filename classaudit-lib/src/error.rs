//! Error types for the audit pipeline.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuditError {
    /// The directory to scan does not exist or is not a directory.
    #[error("Scan root '{}' is not a readable directory", .0.display())]
    RootNotFound(PathBuf),

    /// A document or stylesheet could not be read.
    #[error("Could not read file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An entry under the scan root could not be walked. Logged, never fatal.
    #[error("Skipping unreadable entry: {0}")]
    Walk(#[from] ignore::Error),
}

impl AuditError {
    /// True when the underlying failure is a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AuditError::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

pub type Result<T> = std::result::Result<T, AuditError>;
