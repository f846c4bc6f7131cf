//! Node identity and per-kind node data.

use strum_macros::Display;

use crate::element::{ElementData, SlottableData};
use crate::events::EventListener;

/// A type-safe index into the DOM tree.
///
/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
/// "Each node has an associated node document..."
///
/// NodeId provides O(1) access to any node in the tree without borrowing issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root document node is always at index 0.
    pub const ROOT: Self = Self(0);
}

/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
///
/// "Node is an abstract interface that is used by all nodes in a tree."
///
/// Parent links are back-references only: a node is owned by the child list
/// it appears in. Siblings are derived from the parent's child list.
#[derive(Debug, Clone)]
pub struct Node {
    /// "Each node has an associated node type"
    pub node_type: NodeType,

    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-parent)
    /// "An object that participates in a tree has a parent, which is either
    /// null or an object."
    pub(crate) parent: Option<NodeId>,

    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-child)
    /// "A node has an associated list of children"
    pub(crate) children: Vec<NodeId>,

    /// "Each node has an associated node document, set upon creation, that is
    /// a document."
    pub(crate) node_document: NodeId,

    /// [§ 2.7 Interface EventTarget](https://dom.spec.whatwg.org/#concept-event-listener-list)
    /// "Each EventTarget object has an associated event listener list"
    pub(crate) event_listeners: Vec<EventListener>,
}

impl Node {
    pub(crate) const fn new(node_type: NodeType, node_document: NodeId) -> Self {
        Self {
            node_type,
            parent: None,
            children: Vec::new(),
            node_document,
            event_listeners: Vec::new(),
        }
    }

    /// The node's parent, if attached.
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The node's children in tree order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The node's node document.
    #[must_use]
    pub const fn node_document(&self) -> NodeId {
        self.node_document
    }

    /// Slottable state, for elements and text nodes.
    #[must_use]
    pub fn slottable(&self) -> Option<&SlottableData> {
        match &self.node_type {
            NodeType::Element(data) => Some(&data.slottable),
            NodeType::Text(data) => Some(&data.slottable),
            _ => None,
        }
    }

    pub(crate) fn slottable_mut(&mut self) -> Option<&mut SlottableData> {
        match &mut self.node_type {
            NodeType::Element(data) => Some(&mut data.slottable),
            NodeType::Text(data) => Some(&mut data.slottable),
            _ => None,
        }
    }
}

/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
///
/// "Each node has an associated node type"
#[derive(Debug, Clone)]
pub enum NodeType {
    /// [§ 4.5 Interface Document](https://dom.spec.whatwg.org/#interface-document)
    Document(DocumentData),
    /// [§ 4.6 Interface DocumentType](https://dom.spec.whatwg.org/#interface-documenttype)
    DocumentType(DocumentTypeData),
    /// [§ 4.7 Interface DocumentFragment](https://dom.spec.whatwg.org/#interface-documentfragment)
    /// "A DocumentFragment node has an associated host (null or an element in a
    /// different node tree)."
    DocumentFragment {
        /// Template contents record their template element here.
        host: Option<NodeId>,
    },
    /// [§ 4.8 Interface ShadowRoot](https://dom.spec.whatwg.org/#interface-shadowroot)
    /// A document fragment whose host is always set.
    ShadowRoot(ShadowRootData),
    /// [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element)
    /// "Element nodes are simply known as elements."
    Element(ElementData),
    /// [§ 4.11 Interface Text](https://dom.spec.whatwg.org/#interface-text)
    /// "Text nodes are known as text."
    Text(TextData),
    /// [§ 4.14 Interface Comment](https://dom.spec.whatwg.org/#interface-comment)
    /// "Comment nodes are known as comments."
    Comment(String),
}

impl NodeType {
    /// "A DocumentFragment node" in the DOM sense, which includes shadow roots.
    #[must_use]
    pub const fn is_document_fragment(&self) -> bool {
        matches!(self, Self::DocumentFragment { .. } | Self::ShadowRoot(_))
    }

    /// [§ 4.10 CharacterData](https://dom.spec.whatwg.org/#interface-characterdata)
    #[must_use]
    pub const fn is_character_data(&self) -> bool {
        matches!(self, Self::Text(_) | Self::Comment(_))
    }

    /// The `nodeName` of this kind of node.
    #[must_use]
    pub fn node_name(&self) -> &str {
        match self {
            Self::Document(_) => "#document",
            Self::DocumentType(data) => &data.name,
            Self::DocumentFragment { .. } | Self::ShadowRoot(_) => "#document-fragment",
            Self::Element(data) => &data.local_name,
            Self::Text(_) => "#text",
            Self::Comment(_) => "#comment",
        }
    }
}

/// [§ 4.5](https://dom.spec.whatwg.org/#concept-document-mode)
///
/// "Each document has an associated ... mode ("no-quirks", "quirks", or
/// "limited-quirks")"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum DocumentMode {
    /// "no-quirks"
    #[default]
    NoQuirks,
    /// "quirks"
    Quirks,
    /// "limited-quirks"
    LimitedQuirks,
}

/// [§ 4.5](https://dom.spec.whatwg.org/#concept-document-type)
///
/// "Each document has an associated type ("xml" or "html")"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "lowercase")]
pub enum DocumentKind {
    /// An HTML document.
    #[default]
    Html,
    /// An XML document.
    Xml,
}

/// Document-specific data.
#[derive(Debug, Clone, Default)]
pub struct DocumentData {
    /// The document's quirks mode.
    pub mode: DocumentMode,
    /// Whether this is an HTML or an XML document.
    pub kind: DocumentKind,
}

/// Document type data.
///
/// "Doctypes have an associated name, public ID, and system ID."
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentTypeData {
    /// The doctype name.
    pub name: String,
    /// The public identifier (empty if absent).
    pub public_id: String,
    /// The system identifier (empty if absent).
    pub system_id: String,
}

/// "A shadow root has an associated mode ("open" or "closed")."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ShadowRootMode {
    /// Reachable from script through the host.
    #[default]
    Open,
    /// Hidden from script on the host.
    Closed,
}

/// "A shadow root has an associated slot assignment ("manual" or "named")."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SlotAssignmentMode {
    /// Slottables are matched to slots by name.
    #[default]
    Named,
    /// Slottables are assigned explicitly with `assign`.
    Manual,
}

/// Shadow root data.
#[derive(Debug, Clone)]
pub struct ShadowRootData {
    /// The element this shadow root is attached to.
    pub host: NodeId,
    /// Open or closed.
    pub mode: ShadowRootMode,
    /// Named or manual slot assignment.
    pub slot_assignment: SlotAssignmentMode,
    /// "A shadow root has an associated delegates focus (a boolean)."
    pub delegates_focus: bool,
}

/// Text node data: the character data plus slottable state.
#[derive(Debug, Clone, Default)]
pub struct TextData {
    /// "Each node inheriting from the CharacterData interface has an
    /// associated mutable string called data."
    pub data: String,
    /// Text nodes are slottables.
    pub slottable: SlottableData,
}

impl TextData {
    /// Text data with the given contents.
    #[must_use]
    pub fn new(data: &str) -> Self {
        Self {
            data: data.to_string(),
            slottable: SlottableData::default(),
        }
    }
}

/// [§ 4.2.2.1](https://dom.spec.whatwg.org/#concept-slotable)
///
/// "Element and Text nodes are slottables." A slottable is one of those two
/// node kinds, tagged so algorithms that only make sense for slottables can
/// require one in their signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slottable {
    /// An element slottable.
    Element(NodeId),
    /// A text slottable.
    Text(NodeId),
}

impl Slottable {
    /// Wrap `node` if it is an element or text node.
    #[must_use]
    pub fn from_node(node: &Node, id: NodeId) -> Option<Self> {
        match node.node_type {
            NodeType::Element(_) => Some(Self::Element(id)),
            NodeType::Text(_) => Some(Self::Text(id)),
            _ => None,
        }
    }

    /// The underlying node.
    #[must_use]
    pub const fn node(self) -> NodeId {
        match self {
            Self::Element(id) | Self::Text(id) => id,
        }
    }
}
