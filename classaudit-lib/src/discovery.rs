//! Recursive discovery of markup documents under the scan root.

use crate::config::AuditConfig;
use crate::error::{AuditError, Result};
use ignore::{DirEntry, WalkBuilder};
use log::{debug, warn};
use std::path::PathBuf;

/// Returns every regular file under `config.root_dir` whose extension is a
/// configured markup extension.
///
/// Hidden files and git-ignored paths are included. Entries are visited in
/// file-name order so the result is stable for a given filesystem state.
/// Entries that cannot be read are logged and skipped.
pub fn discover_documents(config: &AuditConfig) -> Result<Vec<PathBuf>> {
    if !config.root_dir.is_dir() {
        return Err(AuditError::RootNotFound(config.root_dir.clone()));
    }

    let mut builder = WalkBuilder::new(&config.root_dir);
    builder
        .standard_filters(false)
        .hidden(false)
        .sort_by_file_name(|a, b| a.cmp(b));

    let mut documents = Vec::new();
    for entry in builder.build() {
        if let Some(path) = accept_entry(config, entry) {
            documents.push(path);
        }
    }

    debug!(
        "Discovered {} document(s) under {}",
        documents.len(),
        config.root_dir.display()
    );
    Ok(documents)
}

/// Keeps markup files; logs walk errors as [`AuditError::Walk`] and drops them.
fn accept_entry(
    config: &AuditConfig,
    entry: std::result::Result<DirEntry, ignore::Error>,
) -> Option<PathBuf> {
    match entry {
        Ok(entry) => (entry.path().is_file() && config.is_markup(entry.path()))
            .then(|| entry.into_path()),
        Err(err) => {
            warn!("{}", AuditError::from(err));
            None
        }
    }
}
