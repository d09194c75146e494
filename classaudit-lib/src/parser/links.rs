//! Extraction and resolution of `<link rel="stylesheet">` references.

use crate::dom::dom_tree::Document;
use crate::parser::html::create_dom_tree;
use std::fs;
use std::path::{Path, PathBuf};

/// Parses `html_content` and returns the resolved stylesheet paths it links to,
/// in document order. Links that do not resolve to an existing file are dropped.
pub fn extract_stylesheet_links(html_content: &str, project_root: &Path) -> Vec<PathBuf> {
    if html_content.trim().is_empty() {
        return Vec::new();
    }
    stylesheet_links_in(&create_dom_tree(html_content), project_root)
}

/// Collects resolved stylesheet paths from an already parsed document.
pub fn stylesheet_links_in(document: &Document, project_root: &Path) -> Vec<PathBuf> {
    let mut links = Vec::new();
    document.for_each_element(|elem| {
        if elem.tag != "link" || elem.attr("rel") != Some("stylesheet") {
            return;
        }
        if let Some(path) = elem.attr("href").and_then(|href| resolve_href(href, project_root)) {
            links.push(path);
        }
    });
    links
}

/// Resolves an `href` against the project root, not the linking document's
/// directory. Returns the canonical path only if it names an existing file.
pub fn resolve_href(href: &str, project_root: &Path) -> Option<PathBuf> {
    // Leading slashes mean "site root"; left in place, `join` would discard the project root.
    let relative = href.trim_start_matches('/');
    fs::canonicalize(project_root.join(relative))
        .ok()
        .filter(|path| path.is_file())
}
