//! Reading documents and stylesheets from disk.

use crate::error::{AuditError, Result};
use std::fs;
use std::path::Path;

/// Supplies the full text of a file.
pub trait TextSource {
    fn read_text(&self, path: &Path) -> Result<String>;
}

/// Reads from the local filesystem. Invalid UTF-8 is replaced rather than rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSource;

impl TextSource for FsSource {
    fn read_text(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).map_err(|source| AuditError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
