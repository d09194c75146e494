//! Lenient HTML parsing into the owned DOM tree from `crate::dom::dom_tree`.
//!
//! html5ever recovers from anything a browser would recover from (missing
//! doctype, unclosed tags, stray end tags). Parse errors are dropped at the
//! sink so a malformed document still yields a best-effort tree.

use crate::dom::dom_tree::{self, ElementNode, Handle, Node, NodeKind};
use html5ever::tendril::{StrTendril, TendrilSink};
use html5ever::{
    interface::{ElemName, ElementFlags, NodeOrText, QuirksMode, TreeSink},
    Attribute, LocalName, Namespace, QualName,
};
use log::trace;
use std::borrow::Cow;
use std::rc::Rc;

/// Parses `html_content` into a [`dom_tree::Document`], tolerating malformed markup.
pub fn create_dom_tree(html_content: &str) -> dom_tree::Document {
    html5ever::parse_document(AuditTreeSink::new(), Default::default()).one(html_content)
}

/// A `TreeSink` that builds the owned DOM tree and swallows parse errors.
pub struct AuditTreeSink {
    document: dom_tree::Document,
}

impl AuditTreeSink {
    /// Creates a sink holding an empty document.
    pub fn new() -> Self {
        Self {
            document: dom_tree::new_document(),
        }
    }

    /// Turns appended text into a fresh text node.
    fn into_handle(child: NodeOrText<Handle>) -> Handle {
        match child {
            NodeOrText::AppendNode(node) => node,
            NodeOrText::AppendText(text) => Node::new_handle(NodeKind::Text(text.to_string())),
        }
    }
}

impl Default for AuditTreeSink {
    fn default() -> Self {
        Self::new()
    }
}

/// Owned namespace and local name of an element, as html5ever asks for them.
#[derive(Debug)]
pub struct AuditElemName {
    ns: Namespace,
    local: LocalName,
}

impl ElemName for AuditElemName {
    fn local_name(&self) -> &LocalName {
        &self.local
    }

    fn ns(&self) -> &Namespace {
        &self.ns
    }
}

impl TreeSink for AuditTreeSink {
    type Handle = Handle;
    type Output = dom_tree::Document;
    type ElemName<'a>
        = AuditElemName
    where
        Self: 'a;

    /// Returns the finished document.
    fn finish(self) -> Self::Output {
        self.document
    }

    /// Drops the error; malformed markup is expected input.
    fn parse_error(&self, msg: Cow<'static, str>) {
        trace!("suppressed HTML parse error: {}", msg);
    }

    /// Returns the handle to the document root.
    fn get_document(&self) -> Self::Handle {
        Rc::clone(&self.document.root)
    }

    /// Returns the element name for the given handle.
    fn elem_name<'a>(&'a self, target: &'a Self::Handle) -> Self::ElemName<'a> {
        match target.borrow().as_element() {
            Some(elem) => AuditElemName {
                ns: elem.qual_name.ns.clone(),
                local: elem.qual_name.local.clone(),
            },
            // html5ever only asks for names of elements.
            None => AuditElemName {
                ns: Namespace::from(""),
                local: LocalName::from(""),
            },
        }
    }

    /// Creates an element node, keeping attributes in source order.
    fn create_element(
        &self,
        name: QualName,
        attrs: Vec<Attribute>,
        _flags: ElementFlags,
    ) -> Self::Handle {
        let attributes = attrs
            .into_iter()
            .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
            .collect();
        Node::new_handle(NodeKind::Element(ElementNode::new(name, attributes)))
    }

    /// Creates a comment node.
    fn create_comment(&self, text: StrTendril) -> Self::Handle {
        Node::new_handle(NodeKind::Comment(text.to_string()))
    }

    /// Stores a processing instruction as a comment.
    fn create_pi(&self, target: StrTendril, data: StrTendril) -> Self::Handle {
        Node::new_handle(NodeKind::Comment(format!("{} {}", target, data)))
    }

    /// Appends a node or text as the last child of `parent`.
    fn append(&self, parent: &Self::Handle, child: NodeOrText<Self::Handle>) {
        dom_tree::append_child(parent, Self::into_handle(child));
    }

    /// Foster-parenting entry point: inserts before `element` when it is
    /// attached, otherwise appends to `prev_element`.
    fn append_based_on_parent_node(
        &self,
        element: &Self::Handle,
        prev_element: &Self::Handle,
        child: NodeOrText<Self::Handle>,
    ) {
        if element.borrow().parent.is_some() {
            self.append_before_sibling(element, child);
        } else {
            self.append(prev_element, child);
        }
    }

    /// The doctype carries nothing the audit needs.
    fn append_doctype_to_document(
        &self,
        _name: StrTendril,
        _public_id: StrTendril,
        _system_id: StrTendril,
    ) {
    }

    /// Returns the template element itself as its content holder.
    fn get_template_contents(&self, target: &Self::Handle) -> Self::Handle {
        // Template content stays inline so classes used inside <template> are audited too.
        Rc::clone(target)
    }

    /// Determines if two handles refer to the same node.
    fn same_node(&self, x: &Self::Handle, y: &Self::Handle) -> bool {
        Rc::ptr_eq(x, y)
    }

    fn set_quirks_mode(&self, _mode: QuirksMode) {}

    /// Inserts a node or text immediately before `sibling`.
    fn append_before_sibling(&self, sibling: &Self::Handle, child: NodeOrText<Self::Handle>) {
        dom_tree::insert_before(sibling, Self::into_handle(child));
    }

    /// Merges attributes from a repeated `<html>` or `<body>` tag without
    /// overwriting existing ones.
    fn add_attrs_if_missing(&self, target: &Self::Handle, attrs: Vec<Attribute>) {
        let mut target_node = target.borrow_mut();
        if let NodeKind::Element(elem) = &mut target_node.kind {
            for attr in attrs {
                let key = attr.name.local.to_string();
                if elem.attr(&key).is_none() {
                    elem.attributes.push((key, attr.value.to_string()));
                }
            }
        }
    }

    /// Detaches `target` from its parent.
    fn remove_from_parent(&self, target: &Self::Handle) {
        dom_tree::detach(target);
    }

    /// Moves all children of `node` to the end of `new_parent`.
    fn reparent_children(&self, node: &Self::Handle, new_parent: &Self::Handle) {
        dom_tree::move_children(node, new_parent);
    }
}
