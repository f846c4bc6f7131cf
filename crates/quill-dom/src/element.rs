//! Element data: namespaces, attributes, and the slot/slottable state.

use std::collections::{HashMap, HashSet};

use quill_common::chars::is_ascii_whitespace;
use strum_macros::{Display, EnumString, IntoStaticStr};

use crate::NodeId;

/// Map of qualified attribute names to attribute records for an element.
pub type AttributesMap = HashMap<String, Attr>;

/// [§ 1.6 Namespaces](https://infra.spec.whatwg.org/#namespaces)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum Namespace {
    /// "http://www.w3.org/1999/xhtml"
    #[default]
    #[strum(serialize = "http://www.w3.org/1999/xhtml")]
    Html,
    /// "http://www.w3.org/2000/svg"
    #[strum(serialize = "http://www.w3.org/2000/svg")]
    Svg,
    /// "http://www.w3.org/1998/Math/MathML"
    #[strum(serialize = "http://www.w3.org/1998/Math/MathML")]
    MathMl,
}

/// Classification of an HTML element's local name.
///
/// Only elements in the HTML namespace are classified; everything else
/// (including foreign elements and custom elements) is [`HtmlElementType::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[allow(missing_docs)]
pub enum HtmlElementType {
    A,
    Abbr,
    Address,
    Applet,
    Area,
    Article,
    Aside,
    Audio,
    B,
    Base,
    Basefont,
    Bgsound,
    Big,
    Blockquote,
    Body,
    Br,
    Button,
    Canvas,
    Caption,
    Center,
    Cite,
    Code,
    Col,
    Colgroup,
    Dd,
    Details,
    Dialog,
    Dir,
    Div,
    Dl,
    Dt,
    Em,
    Embed,
    Fieldset,
    Figcaption,
    Figure,
    Font,
    Footer,
    Form,
    Frame,
    Frameset,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Head,
    Header,
    Hgroup,
    Hr,
    Html,
    I,
    Iframe,
    Img,
    Input,
    Keygen,
    Label,
    Li,
    Link,
    Listing,
    Main,
    Marquee,
    Menu,
    Meta,
    Nav,
    Nobr,
    Noembed,
    Noframes,
    Noscript,
    Object,
    Ol,
    Optgroup,
    Option,
    P,
    Param,
    Plaintext,
    Pre,
    Rb,
    Rp,
    Rt,
    Rtc,
    Ruby,
    S,
    Script,
    Search,
    Section,
    Select,
    Slot,
    Small,
    Source,
    Span,
    Strike,
    Strong,
    Style,
    Sub,
    Summary,
    Sup,
    Table,
    Tbody,
    Td,
    Template,
    Textarea,
    Tfoot,
    Th,
    Thead,
    Title,
    Tr,
    Track,
    Tt,
    U,
    Ul,
    Var,
    Wbr,
    Xmp,
    /// Any local name not listed above.
    #[strum(disabled)]
    Unknown,
}

impl HtmlElementType {
    /// Classify an element by namespace and local name.
    #[must_use]
    pub fn classify(namespace: Namespace, local_name: &str) -> Self {
        if namespace != Namespace::Html {
            return Self::Unknown;
        }
        local_name.parse().unwrap_or(Self::Unknown)
    }

    /// "td" or "th"
    #[must_use]
    pub const fn is_table_cell(self) -> bool {
        matches!(self, Self::Td | Self::Th)
    }

    /// "tbody", "thead" or "tfoot"
    #[must_use]
    pub const fn is_table_section(self) -> bool {
        matches!(self, Self::Tbody | Self::Thead | Self::Tfoot)
    }

    /// [§ 13.2.4.3 Formatting](https://html.spec.whatwg.org/multipage/parsing.html#formatting)
    ///
    /// "The following HTML elements are those that end up in the list of active
    /// formatting elements: a, b, big, code, em, font, i, nobr, s, small, strike,
    /// strong, tt, and u."
    #[must_use]
    pub const fn is_formatting(self) -> bool {
        matches!(
            self,
            Self::A
                | Self::B
                | Self::Big
                | Self::Code
                | Self::Em
                | Self::Font
                | Self::I
                | Self::Nobr
                | Self::S
                | Self::Small
                | Self::Strike
                | Self::Strong
                | Self::Tt
                | Self::U
        )
    }

    /// [§ 4.2.2 Valid shadow host name](https://dom.spec.whatwg.org/#valid-shadow-host-name)
    #[must_use]
    pub const fn is_valid_shadow_host(self) -> bool {
        matches!(
            self,
            Self::Article
                | Self::Aside
                | Self::Blockquote
                | Self::Body
                | Self::Div
                | Self::Footer
                | Self::H1
                | Self::H2
                | Self::H3
                | Self::H4
                | Self::H5
                | Self::H6
                | Self::Header
                | Self::Main
                | Self::Nav
                | Self::P
                | Self::Section
                | Self::Span
        )
    }
}

/// [§ 4.9.2 Interface Attr](https://dom.spec.whatwg.org/#interface-attr)
///
/// "Attr nodes are simply known as attributes."
/// Attributes have their own node document, which is kept in step with the
/// owning element's during adoption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    /// "An attribute has a local name"
    pub local_name: String,
    /// "An attribute has ... a value"
    pub value: String,
    /// "Each node has an associated node document"
    pub node_document: NodeId,
}

/// [§ 4.2.2.1 Slottables](https://dom.spec.whatwg.org/#light-tree-slotables)
///
/// State carried by every slottable (elements and text nodes).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlottableData {
    /// "A slottable has an associated name (a string). Unless stated
    /// otherwise it is the empty string."
    pub name: String,
    /// "A slottable has an associated assigned slot (null or a slot)."
    pub assigned_slot: Option<NodeId>,
    /// "A slottable has an associated manual slot assignment (null or a slot)."
    pub manual_slot_assignment: Option<NodeId>,
}

/// [§ 4.2.2.1 Slots](https://dom.spec.whatwg.org/#shadow-tree-slots)
///
/// State carried by `<slot>` elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotData {
    /// "A slot has an associated name (a string). Unless stated otherwise it
    /// is the empty string."
    pub name: String,
    /// "A slot has an associated assigned nodes (a list of slottables)."
    pub assigned_nodes: Vec<NodeId>,
    /// [HTMLSlotElement](https://html.spec.whatwg.org/multipage/scripting.html#manually-assigned-nodes)
    /// "manually assigned nodes, an ordered set of slottables"
    pub manually_assigned_nodes: Vec<NodeId>,
}

/// Element-specific data.
///
/// Per [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element):
/// - "Elements have an associated namespace, namespace prefix, local name, custom element state,
///    custom element definition, is value."
/// - "When an element is created, its local name is always given."
#[derive(Debug, Clone)]
pub struct ElementData {
    /// "An element's local name"
    pub local_name: String,
    /// "An element's namespace"
    pub namespace: Namespace,
    /// "An element has an associated attribute list"
    pub attrs: AttributesMap,
    /// Classification of `local_name` for HTML elements.
    pub element_type: HtmlElementType,
    /// "An element also has an associated shadow root (null or a shadow root)."
    pub shadow_root: Option<NodeId>,
    /// Slottable state (elements are slottables).
    pub slottable: SlottableData,
    /// Present only for HTML `<slot>` elements.
    pub slot: Option<SlotData>,
    /// [§ 4.12.3 The template element](https://html.spec.whatwg.org/multipage/scripting.html#template-contents)
    /// "Each template element has an associated DocumentFragment object that is
    /// its template contents."
    pub template_contents: Option<NodeId>,
    /// "An element whose custom element state is "custom" is said to be custom."
    pub is_custom: bool,
}

impl ElementData {
    /// Element data for a freshly created element with no attributes.
    #[must_use]
    pub fn new(local_name: &str, namespace: Namespace) -> Self {
        let element_type = HtmlElementType::classify(namespace, local_name);
        Self {
            local_name: local_name.to_string(),
            namespace,
            attrs: AttributesMap::new(),
            element_type,
            shadow_root: None,
            slottable: SlottableData::default(),
            slot: (element_type == HtmlElementType::Slot).then(SlotData::default),
            template_contents: None,
            is_custom: false,
        }
    }

    /// Value of the attribute with the given qualified name.
    #[must_use]
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(|attr| attr.value.as_str())
    }

    /// Returns the element's id attribute value if present.
    ///
    /// Per [§ 3.2.6 Global attributes](https://html.spec.whatwg.org/multipage/dom.html#global-attributes):
    /// "The id attribute specifies its element's unique identifier (ID)."
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.get_attribute("id")
    }

    /// Returns the set of class names from the class attribute, split on
    /// ASCII whitespace.
    #[must_use]
    pub fn classes(&self) -> HashSet<&str> {
        self.get_attribute("class")
            .map(|list| {
                list.split(|c: char| is_ascii_whitespace(u32::from(c)))
                    .filter(|class| !class.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Is this element in the HTML namespace with the given type?
    #[must_use]
    pub fn is_html(&self, element_type: HtmlElementType) -> bool {
        self.namespace == Namespace::Html && self.element_type == element_type
    }

    /// [§ 4.2.2.1](https://dom.spec.whatwg.org/#concept-slot)
    /// "A slot is an HTMLSlotElement."
    #[must_use]
    pub const fn is_slot(&self) -> bool {
        self.slot.is_some()
    }
}
