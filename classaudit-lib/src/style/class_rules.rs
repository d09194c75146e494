//! Class-selector rule extraction from stylesheet text.
//!
//! This is a pattern scan, not a CSS parser. Only `.name { body }` shapes are
//! recognised:
//!
//! * the body runs to the first `}`, so a nested block truncates it and the
//!   nested rule itself is swallowed;
//! * in a compound selector such as `.a.b { }` only the class written directly
//!   before the `{` is captured;
//! * class rules nested inside at-rule blocks (`@media`) are still found,
//!   since the scan does not track block depth.

use crate::ordered::OrderedMap;
use crate::source::TextSource;
use log::warn;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Class name (no leading `.`) to trimmed rule body. A class defined twice in
/// one stylesheet keeps the later body.
pub type StylesheetRuleMap = OrderedMap<String, String>;

/// Parsed stylesheets keyed by their resolved path, in first-reference order.
pub type StylesheetCache = OrderedMap<PathBuf, StylesheetRuleMap>;

static CLASS_RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.([a-zA-Z0-9_-]+)\s*\{([^}]*)\}").expect("class rule pattern is valid")
});

/// Scans `css_text` for class rules.
pub fn parse_class_rules(css_text: &str) -> StylesheetRuleMap {
    let mut rules = StylesheetRuleMap::new();
    for caps in CLASS_RULE.captures_iter(css_text) {
        rules.insert(caps[1].to_string(), caps[2].trim().to_string());
    }
    rules
}

/// Reads and scans the stylesheet at `path`.
///
/// A missing file defines no classes. Any other read failure is logged and
/// also treated as defining no classes.
pub fn load_class_rules<S: TextSource + ?Sized>(path: &Path, source: &S) -> StylesheetRuleMap {
    match source.read_text(path) {
        Ok(css_text) => parse_class_rules(&css_text),
        Err(err) if err.is_not_found() => StylesheetRuleMap::new(),
        Err(err) => {
            warn!("{}", err);
            StylesheetRuleMap::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::FsSource;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn entries(rules: &StylesheetRuleMap) -> Vec<(&str, &str)> {
        rules
            .iter()
            .map(|(name, body)| (name.as_str(), body.as_str()))
            .collect()
    }

    #[test]
    fn captures_class_rules_with_trimmed_bodies() {
        let css = r#"
            .box { margin: 0; }
            .nav-item_2{
                padding: 4px;
                color: #333;
            }
        "#;
        let rules = parse_class_rules(css);

        assert_eq!(
            entries(&rules),
            vec![
                ("box", "margin: 0;"),
                ("nav-item_2", "padding: 4px;\n                color: #333;"),
            ]
        );
    }

    #[test]
    fn ignores_non_class_selectors() {
        let rules = parse_class_rules("#id {color:red}\ndiv {color:blue}\na:hover { color: green }");
        assert!(rules.is_empty());
    }

    #[test]
    fn later_definition_wins() {
        let rules = parse_class_rules(".btn { color: red; }\n.card { margin: 0 }\n.btn { color: blue; }");
        assert_eq!(entries(&rules), vec![("btn", "color: blue;"), ("card", "margin: 0")]);
    }

    #[test]
    fn nested_braces_truncate_at_first_close() {
        let rules = parse_class_rules(".outer { .inner { color: red; } margin: 0; }");
        assert_eq!(entries(&rules), vec![("outer", ".inner { color: red;")]);

        let rules = parse_class_rules(".outer { color: red; & span { x: y } }");
        assert_eq!(entries(&rules), vec![("outer", "color: red; & span { x: y")]);
    }

    #[test]
    fn compound_and_descendant_selectors_capture_last_class_only() {
        let rules = parse_class_rules(".a.b { color: red; }\n.c .d { margin: 0; }\n.e, .f { top: 0 }");
        assert_eq!(
            entries(&rules),
            vec![("b", "color: red;"), ("d", "margin: 0;"), ("f", "top: 0")]
        );
    }

    #[test]
    fn pseudo_class_rules_are_skipped() {
        let rules = parse_class_rules(".link:hover { color: red; }\n.link { color: blue; }");
        assert_eq!(entries(&rules), vec![("link", "color: blue;")]);
    }

    #[test]
    fn class_rules_inside_media_blocks_are_found() {
        let rules = parse_class_rules("@media (max-width: 600px) { .col { width: 100%; } }");
        assert_eq!(entries(&rules), vec![("col", "width: 100%;")]);
    }

    #[test]
    fn missing_file_defines_nothing() {
        let dir = TempDir::new().expect("tempdir should create");
        let rules = load_class_rules(&dir.path().join("gone.css"), &FsSource);
        assert!(rules.is_empty());
    }

    #[test]
    fn loads_from_disk() {
        let dir = TempDir::new().expect("tempdir should create");
        let path = dir.path().join("site.css");
        fs::write(&path, ".box { margin: 0; }").expect("write should succeed");

        let rules = load_class_rules(&path, &FsSource);
        assert_eq!(entries(&rules), vec![("box", "margin: 0;")]);
    }
}
