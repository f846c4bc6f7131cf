//! The arena that owns every node.

use std::fmt;

use crate::element::{ElementData, HtmlElementType, Namespace};
use crate::hooks::{DomHooks, NoopHooks};
use crate::node::{
    DocumentData, DocumentKind, DocumentTypeData, Node, NodeType, ShadowRootData, TextData,
};
use crate::{DomError, NodeId};

/// Arena-based DOM tree with O(1) node access and traversal.
///
/// [§ 4 Nodes](https://dom.spec.whatwg.org/#nodes)
///
/// "The DOM represents a document as a tree. A tree is a finite hierarchical
/// tree structure."
///
/// This structure stores all nodes in a contiguous vector, using indices
/// for all relationships. A node that is not reachable from any child list
/// stays in the arena until the tree is dropped. Several documents can live
/// in one arena, which is what cross-document adoption needs.
pub struct DomTree {
    /// All nodes in the tree, indexed by NodeId.
    /// The Document node is always at index 0 (NodeId::ROOT).
    pub(crate) nodes: Vec<Node>,

    /// Extension points for observers, ranges and custom elements.
    pub(crate) hooks: Box<dyn DomHooks>,
}

impl fmt::Debug for DomTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomTree")
            .field("nodes", &self.nodes)
            .finish_non_exhaustive()
    }
}

impl DomTree {
    /// Create a new DOM tree with just the Document node.
    #[must_use]
    pub fn new() -> Self {
        Self::with_hooks(Box::new(NoopHooks))
    }

    /// Create a new DOM tree whose mutation algorithms call into `hooks`.
    #[must_use]
    pub fn with_hooks(hooks: Box<dyn DomHooks>) -> Self {
        let document = Node::new(NodeType::Document(DocumentData::default()), NodeId::ROOT);
        Self {
            nodes: vec![document],
            hooks,
        }
    }

    /// Replace the installed hooks, returning the previous ones.
    pub fn set_hooks(&mut self, hooks: Box<dyn DomHooks>) -> Box<dyn DomHooks> {
        std::mem::replace(&mut self.hooks, hooks)
    }

    /// Get the root document node ID.
    #[must_use]
    pub const fn root_document(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get a mutable reference to a node by its ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    pub(crate) fn node(&self, id: NodeId) -> Result<&Node, DomError> {
        self.nodes.get(id.0).ok_or(DomError::InvalidNode(id))
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, DomError> {
        self.nodes.get_mut(id.0).ok_or(DomError::InvalidNode(id))
    }

    /// Get the number of nodes in the arena, attached or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty (should always have at least the Document).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a new node owned by the root document and return its ID.
    /// The node is not yet attached to the tree.
    pub fn alloc(&mut self, node_type: NodeType) -> NodeId {
        self.alloc_in(node_type, NodeId::ROOT)
    }

    /// Allocate a new detached node whose node document is `document`.
    pub fn alloc_in(&mut self, node_type: NodeType, document: NodeId) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(node_type, document));
        id
    }

    // ===== node creation =====

    /// Create a new, empty document of the given kind. Its node document is
    /// itself.
    pub fn create_document(&mut self, kind: DocumentKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        let data = DocumentData {
            kind,
            ..DocumentData::default()
        };
        self.nodes.push(Node::new(NodeType::Document(data), id));
        id
    }

    /// [§ 4.9 Create an element](https://dom.spec.whatwg.org/#concept-create-element)
    ///
    /// Creates a detached element in the root document. Template elements get
    /// their template contents fragment at the same time.
    pub fn create_element(&mut self, local_name: &str, namespace: Namespace) -> NodeId {
        self.create_element_in(NodeId::ROOT, local_name, namespace)
    }

    /// Creates a detached element whose node document is `document`.
    pub fn create_element_in(
        &mut self,
        document: NodeId,
        local_name: &str,
        namespace: Namespace,
    ) -> NodeId {
        let data = ElementData::new(local_name, namespace);
        let is_template = data.is_html(HtmlElementType::Template);
        let element = self.alloc_in(NodeType::Element(data), document);
        if is_template {
            let contents =
                self.alloc_in(NodeType::DocumentFragment { host: Some(element) }, document);
            if let NodeType::Element(data) = &mut self.nodes[element.0].node_type {
                data.template_contents = Some(contents);
            }
        }
        element
    }

    /// Creates a detached text node in the root document.
    pub fn create_text(&mut self, data: &str) -> NodeId {
        self.alloc(NodeType::Text(TextData::new(data)))
    }

    /// Creates a detached comment node in the root document.
    pub fn create_comment(&mut self, data: &str) -> NodeId {
        self.alloc(NodeType::Comment(data.to_string()))
    }

    /// Creates a detached, empty document fragment in the root document.
    pub fn create_document_fragment(&mut self) -> NodeId {
        self.alloc(NodeType::DocumentFragment { host: None })
    }

    /// Creates a detached doctype node in the root document.
    pub fn create_doctype(&mut self, name: &str, public_id: &str, system_id: &str) -> NodeId {
        self.alloc(NodeType::DocumentType(DocumentTypeData {
            name: name.to_string(),
            public_id: public_id.to_string(),
            system_id: system_id.to_string(),
        }))
    }

    // ===== structural queries =====

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Get the first child of a node.
    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.children.first().copied())
    }

    /// Get the last child of a node.
    #[must_use]
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.children.last().copied())
    }

    /// [§ 4.2.1](https://dom.spec.whatwg.org/#concept-tree-index)
    ///
    /// "The index of an object is its number of preceding siblings, or 0 if it
    /// has none."
    #[must_use]
    pub fn index(&self, id: NodeId) -> usize {
        self.parent(id)
            .and_then(|p| self.children(p).iter().position(|&c| c == id))
            .unwrap_or(0)
    }

    /// Get the next sibling of a node.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        let siblings = self.children(self.parent(id)?);
        let index = siblings.iter().position(|&c| c == id)?;
        siblings.get(index + 1).copied()
    }

    /// Get the previous sibling of a node.
    #[must_use]
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        let siblings = self.children(self.parent(id)?);
        let index = siblings.iter().position(|&c| c == id)?;
        index.checked_sub(1).map(|i| siblings[i])
    }

    /// [§ 4.2 Length](https://dom.spec.whatwg.org/#concept-node-length)
    ///
    /// Doctypes have length 0, character data its number of characters, and
    /// everything else its number of children.
    #[must_use]
    pub fn length(&self, id: NodeId) -> usize {
        self.get(id).map_or(0, |n| match &n.node_type {
            NodeType::DocumentType(_) => 0,
            NodeType::Text(text) => text.data.chars().count(),
            NodeType::Comment(data) => data.chars().count(),
            _ => n.children.len(),
        })
    }

    /// [§ 4.2.1 Root](https://dom.spec.whatwg.org/#concept-tree-root)
    ///
    /// "The root of an object is itself, if its parent is null, or else it is
    /// the root of its parent."
    #[must_use]
    pub fn root(&self, id: NodeId) -> NodeId {
        self.ancestors(id).last().unwrap_or(id)
    }

    /// [§ 4.2.6 Descendant](https://dom.spec.whatwg.org/#concept-tree-descendant)
    ///
    /// "An object A is called a descendant of an object B, if either A is a
    /// child of B or A is a child of an object C that is a descendant of B."
    #[must_use]
    pub fn is_descendant_of(&self, descendant: NodeId, ancestor: NodeId) -> bool {
        self.ancestors(descendant).any(|id| id == ancestor)
    }

    /// "An inclusive ancestor is an object or one of its ancestors."
    #[must_use]
    pub fn is_inclusive_ancestor_of(&self, ancestor: NodeId, node: NodeId) -> bool {
        ancestor == node || self.is_descendant_of(node, ancestor)
    }

    /// [§ 4.7](https://dom.spec.whatwg.org/#concept-tree-host-including-inclusive-ancestor)
    ///
    /// "An object A is a host-including inclusive ancestor of an object B, if
    /// either A is an inclusive ancestor of B, or if B's root has a non-null
    /// host and A is a host-including inclusive ancestor of B's root's host."
    #[must_use]
    pub fn is_host_including_inclusive_ancestor_of(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = node;
        loop {
            if self.is_inclusive_ancestor_of(ancestor, current) {
                return true;
            }
            match self.fragment_host(self.root(current)) {
                Some(host) => current = host,
                None => return false,
            }
        }
    }

    /// The host of a document fragment or shadow root, if any.
    #[must_use]
    pub fn fragment_host(&self, id: NodeId) -> Option<NodeId> {
        match &self.get(id)?.node_type {
            NodeType::DocumentFragment { host } => *host,
            NodeType::ShadowRoot(data) => Some(data.host),
            _ => None,
        }
    }

    /// The node document of `id`.
    #[must_use]
    pub fn node_document(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(Node::node_document)
    }

    // ===== typed access =====

    /// Get element data if this node is an element.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Get mutable element data if this node is an element.
    ///
    /// Attribute changes made through this bypass the attribute change steps;
    /// use [`DomTree::set_attribute`] for `slot` and `name`.
    pub fn as_element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.get_mut(id).and_then(|n| match &mut n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }

    pub(crate) fn element(&self, id: NodeId) -> Result<&ElementData, DomError> {
        self.as_element(id).ok_or(DomError::WrongNodeType {
            node: id,
            expected: "an element",
        })
    }

    pub(crate) fn element_mut(&mut self, id: NodeId) -> Result<&mut ElementData, DomError> {
        self.as_element_mut(id).ok_or(DomError::WrongNodeType {
            node: id,
            expected: "an element",
        })
    }

    /// Get text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Text(text) => Some(text.data.as_str()),
            _ => None,
        })
    }

    /// Get document data if this node is a document.
    #[must_use]
    pub fn as_document(&self, id: NodeId) -> Option<&DocumentData> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Document(data) => Some(data),
            _ => None,
        })
    }

    /// Get mutable document data if this node is a document.
    pub fn as_document_mut(&mut self, id: NodeId) -> Option<&mut DocumentData> {
        self.get_mut(id).and_then(|n| match &mut n.node_type {
            NodeType::Document(data) => Some(data),
            _ => None,
        })
    }

    /// Get shadow root data if this node is a shadow root.
    #[must_use]
    pub fn as_shadow_root(&self, id: NodeId) -> Option<&ShadowRootData> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::ShadowRoot(data) => Some(data),
            _ => None,
        })
    }

    /// Is `id` a document node?
    #[must_use]
    pub fn is_document(&self, id: NodeId) -> bool {
        self.as_document(id).is_some()
    }

    /// Is `id` a shadow root?
    #[must_use]
    pub fn is_shadow_root(&self, id: NodeId) -> bool {
        self.as_shadow_root(id).is_some()
    }

    /// Is `id` an HTML `<slot>` element?
    #[must_use]
    pub fn is_slot(&self, id: NodeId) -> bool {
        self.as_element(id).is_some_and(ElementData::is_slot)
    }

    /// [§ 3.1.1 The document element](https://html.spec.whatwg.org/multipage/dom.html#the-html-element-2)
    ///
    /// "The document element of a document is the element whose parent is that
    /// document, if it exists; otherwise null."
    #[must_use]
    pub fn document_element(&self) -> Option<NodeId> {
        self.children(NodeId::ROOT)
            .iter()
            .find(|&&id| self.as_element(id).is_some())
            .copied()
    }

    /// [§ 3.1.3 The body element](https://html.spec.whatwg.org/multipage/dom.html#the-body-element-2)
    ///
    /// "The body element of a document is the first of the html element's children
    /// that is either a body element or a frameset element, or null if there is
    /// no such element."
    #[must_use]
    pub fn body(&self) -> Option<NodeId> {
        let html = self.document_element()?;

        self.children(html)
            .iter()
            .find(|&&id| {
                self.as_element(id).is_some_and(|e| {
                    e.is_html(HtmlElementType::Body) || e.is_html(HtmlElementType::Frameset)
                })
            })
            .copied()
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}
