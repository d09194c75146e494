//! Audit configuration.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Markup extensions scanned when none are configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &["html", "php"];

/// Where to look for documents and how to resolve the stylesheets they link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditConfig {
    /// Directory scanned recursively for markup documents.
    pub root_dir: PathBuf,
    /// Base directory that stylesheet `href`s are resolved against.
    pub project_root: PathBuf,
    /// File extensions (without the dot) treated as markup. Matched case-sensitively.
    pub extensions: Vec<String>,
}

impl AuditConfig {
    pub fn new(root_dir: impl Into<PathBuf>, project_root: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            project_root: project_root.into(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        }
    }

    /// Uses the parent of `root_dir` as the project root, falling back to
    /// `root_dir` itself when it has no parent.
    pub fn for_root(root_dir: impl Into<PathBuf>) -> Self {
        let root_dir = root_dir.into();
        let project_root = root_dir
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| root_dir.clone());
        Self::new(root_dir, project_root)
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|ext| ext.into().trim_start_matches('.').to_string())
            .collect();
        self
    }

    pub fn is_markup(&self, path: &Path) -> bool {
        path.extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| self.extensions.iter().any(|wanted| wanted == ext))
    }
}
