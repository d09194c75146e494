//! Extraction of class-bearing elements from a parsed document.

use crate::dom::dom_tree::Document;
use crate::parser::html::create_dom_tree;

/// One element that carries a `class` attribute, as found in the markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedElement {
    pub tag: String,
    /// The raw `class` attribute, not split or normalized.
    pub class_attr: String,
    /// The raw `style` attribute, or an empty string when absent.
    pub inline_style: String,
}

/// Parses `html_content` and returns every element with a `class` attribute,
/// in document order.
///
/// Whitespace-only input short-circuits to an empty list without parsing.
pub fn extract_elements(html_content: &str) -> Vec<ExtractedElement> {
    if html_content.trim().is_empty() {
        return Vec::new();
    }
    elements_in(&create_dom_tree(html_content))
}

/// Collects class-bearing elements from an already parsed document.
pub fn elements_in(document: &Document) -> Vec<ExtractedElement> {
    let mut elements = Vec::new();
    document.for_each_element(|elem| {
        if let Some(class_attr) = elem.attr("class") {
            elements.push(ExtractedElement {
                tag: elem.tag.clone(),
                class_attr: class_attr.to_string(),
                inline_style: elem.attr("style").unwrap_or_default().to_string(),
            });
        }
    });
    elements
}
