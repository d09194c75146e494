use html5ever::QualName;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub mod dom_tree {
    use super::*;

    pub type Handle = Rc<RefCell<Node>>;

    #[derive(Debug)]
    pub enum NodeKind {
        DocumentRoot,
        Element(ElementNode),
        Text(String),
        Comment(String),
    }

    #[derive(Debug)]
    pub struct Node {
        pub kind: NodeKind,
        pub parent: Option<Weak<RefCell<Node>>>,
        pub children: Vec<Handle>,
    }

    #[derive(Debug, Clone)]
    pub struct ElementNode {
        pub tag: String,
        pub qual_name: QualName,
        /// Attributes in source order. The tokenizer already drops duplicates.
        pub attributes: Vec<(String, String)>,
    }

    #[derive(Debug)]
    pub struct Document {
        pub root: Handle,
    }

    impl Node {
        pub fn new_handle(kind: NodeKind) -> Handle {
            Rc::new(RefCell::new(Node {
                kind,
                parent: None,
                children: Vec::new(),
            }))
        }

        pub fn as_element(&self) -> Option<&ElementNode> {
            match &self.kind {
                NodeKind::Element(elem) => Some(elem),
                _ => None,
            }
        }

        fn parent_handle(&self) -> Option<Handle> {
            self.parent.as_ref().and_then(Weak::upgrade)
        }
    }

    impl ElementNode {
        pub fn new(qual_name: QualName, attributes: Vec<(String, String)>) -> Self {
            ElementNode {
                tag: qual_name.local.to_string(),
                qual_name,
                attributes,
            }
        }

        /// Returns the value of the named attribute, if present.
        pub fn attr(&self, name: &str) -> Option<&str> {
            self.attributes
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str())
        }
    }

    impl Document {
        /// Visits every element node in document (pre-order) order.
        pub fn for_each_element<F>(&self, mut visit: F)
        where
            F: FnMut(&ElementNode),
        {
            let mut stack = vec![Rc::clone(&self.root)];
            while let Some(handle) = stack.pop() {
                let node = handle.borrow();
                if let Some(elem) = node.as_element() {
                    visit(elem);
                }
                stack.extend(node.children.iter().rev().cloned());
            }
        }
    }

    pub fn new_document() -> Document {
        Document {
            root: Node::new_handle(NodeKind::DocumentRoot),
        }
    }

    /// Appends `child` as the last child of `parent`.
    pub fn append_child(parent: &Handle, child: Handle) {
        child.borrow_mut().parent = Some(Rc::downgrade(parent));
        parent.borrow_mut().children.push(child);
    }

    /// Inserts `child` immediately before `sibling`. Does nothing if `sibling`
    /// is detached.
    pub fn insert_before(sibling: &Handle, child: Handle) {
        let Some(parent) = sibling.borrow().parent_handle() else {
            return;
        };
        let mut parent_node = parent.borrow_mut();
        let Some(index) = parent_node
            .children
            .iter()
            .position(|candidate| Rc::ptr_eq(candidate, sibling))
        else {
            return;
        };
        child.borrow_mut().parent = Some(Rc::downgrade(&parent));
        parent_node.children.insert(index, child);
    }

    /// Removes `target` from its parent's child list.
    pub fn detach(target: &Handle) {
        let parent = target.borrow_mut().parent.take().and_then(|p| p.upgrade());
        if let Some(parent) = parent {
            parent
                .borrow_mut()
                .children
                .retain(|candidate| !Rc::ptr_eq(candidate, target));
        }
    }

    /// Moves every child of `from` to the end of `to`, keeping their order.
    pub fn move_children(from: &Handle, to: &Handle) {
        let children = std::mem::take(&mut from.borrow_mut().children);
        for child in &children {
            child.borrow_mut().parent = Some(Rc::downgrade(to));
        }
        to.borrow_mut().children.extend(children);
    }
}
