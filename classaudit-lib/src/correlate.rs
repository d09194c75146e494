//! Correlates class usage across documents with the stylesheets they link.

use crate::config::AuditConfig;
use crate::discovery::discover_documents;
use crate::error::Result;
use crate::ordered::OrderedMap;
use crate::parser::elements::{elements_in, ExtractedElement};
use crate::parser::html::create_dom_tree;
use crate::parser::links::stylesheet_links_in;
use crate::report::{ClassUsage, Report, StylesheetMatch};
use crate::source::{FsSource, TextSource};
use crate::style::class_rules::{load_class_rules, StylesheetCache};
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// A class-bearing element, attributed to the document it was first seen in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementRecord {
    pub tag: String,
    pub class_attr: String,
    pub inline_style: String,
    pub source_file: PathBuf,
}

impl ElementRecord {
    pub fn new(element: ExtractedElement, source_file: &Path) -> Self {
        Self {
            tag: element.tag,
            class_attr: element.class_attr,
            inline_style: element.inline_style,
            source_file: source_file.to_path_buf(),
        }
    }

    /// `tag::class_attr`, compared as an exact string.
    pub fn identity_key(&self) -> String {
        format!("{}::{}", self.tag, self.class_attr)
    }
}

/// Identity key to the first record seen with that key.
pub type ElementTable = OrderedMap<String, ElementRecord>;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AuditStats {
    pub documents_discovered: usize,
    pub documents_read: usize,
    pub documents_skipped: usize,
    pub stylesheets_parsed: usize,
}

/// Output of one correlation run.
#[derive(Debug, Default)]
pub struct Audit {
    pub elements: ElementTable,
    pub stylesheets: StylesheetCache,
    pub stats: AuditStats,
}

/// Discovers documents under `config.root_dir` and correlates them from disk.
pub fn run_audit(config: &AuditConfig) -> Result<Audit> {
    let documents = discover_documents(config)?;
    Ok(correlate(&documents, &config.project_root, &FsSource))
}

/// Folds `documents` into an [`Audit`].
///
/// Unreadable documents are logged and skipped. Each distinct stylesheet path
/// is read and parsed once, however many documents link it.
pub fn correlate<S: TextSource + ?Sized>(
    documents: &[PathBuf],
    project_root: &Path,
    source: &S,
) -> Audit {
    let mut audit = Audit::default();
    audit.stats.documents_discovered = documents.len();

    for path in documents {
        let html_content = match source.read_text(path) {
            Ok(text) => text,
            Err(err) => {
                warn!("{}", err);
                audit.stats.documents_skipped += 1;
                continue;
            }
        };
        audit.stats.documents_read += 1;

        if html_content.trim().is_empty() {
            continue;
        }
        let document = create_dom_tree(&html_content);

        for stylesheet in stylesheet_links_in(&document, project_root) {
            if audit.stylesheets.contains_key(&stylesheet) {
                continue;
            }
            debug!("Parsing stylesheet {}", stylesheet.display());
            let rules = load_class_rules(&stylesheet, source);
            audit.stylesheets.insert(stylesheet, rules);
            audit.stats.stylesheets_parsed += 1;
        }

        for element in elements_in(&document) {
            let record = ElementRecord::new(element, path);
            audit.elements.insert_if_absent(record.identity_key(), record);
        }
    }

    audit
}

impl Audit {
    /// Expands the element table into per-token usages and attaches every
    /// cached stylesheet rule that defines each token.
    pub fn class_report(&self) -> Report {
        let mut usages: OrderedMap<String, ClassUsage> = OrderedMap::new();

        for record in self.elements.values() {
            for token in record.class_attr.split_whitespace() {
                let usage = usages.get_or_insert_with(token.to_string(), || ClassUsage::new(token));
                if !record.inline_style.is_empty() {
                    usage.inline_styles.push(record.inline_style.clone());
                }
                if !usage.files.contains(&record.source_file) {
                    usage.files.push(record.source_file.clone());
                }
            }
        }

        let classes = usages
            .into_values()
            .map(|mut usage| {
                for (stylesheet, rules) in self.stylesheets.iter() {
                    if let Some(rule_body) = rules.get(usage.token.as_str()) {
                        usage.stylesheet_matches.push(StylesheetMatch {
                            stylesheet: stylesheet.clone(),
                            rule_body: rule_body.clone(),
                        });
                    }
                }
                usage
            })
            .collect();

        Report { classes }
    }
}
