//! [§ 4.2.2 Shadow tree](https://dom.spec.whatwg.org/#concept-shadow-tree)

use crate::element::Namespace;
use crate::node::{NodeType, ShadowRootData, ShadowRootMode, SlotAssignmentMode};
use crate::{DomError, DomTree, NodeId};

/// Options for [`DomTree::attach_shadow`], mirroring `ShadowRootInit`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShadowRootInit {
    /// Open or closed.
    pub mode: ShadowRootMode,
    /// Named or manual slot assignment.
    pub slot_assignment: SlotAssignmentMode,
    /// Whether focus is delegated to the shadow tree.
    pub delegates_focus: bool,
}

/// [§ 4.13.3 Valid custom element name](https://html.spec.whatwg.org/multipage/custom-elements.html#valid-custom-element-name)
///
/// A lowercase ASCII letter first and a hyphen somewhere after it. The
/// reserved SVG/MathML names are excluded.
#[must_use]
pub fn is_valid_custom_element_name(name: &str) -> bool {
    const RESERVED: [&str; 8] = [
        "annotation-xml",
        "color-profile",
        "font-face",
        "font-face-src",
        "font-face-uri",
        "font-face-format",
        "font-face-name",
        "missing-glyph",
    ];
    name.starts_with(|c: char| c.is_ascii_lowercase())
        && name.contains('-')
        && !name.chars().any(|c| c.is_ascii_uppercase())
        && !RESERVED.contains(&name)
}

impl DomTree {
    /// [§ 4.9 Attach a shadow root](https://dom.spec.whatwg.org/#concept-attach-a-shadow-root)
    ///
    /// Creates a shadow root for `host` and returns it. The shadow root's node
    /// document is the host's.
    pub fn attach_shadow(&mut self, host: NodeId, init: ShadowRootInit) -> Result<NodeId, DomError> {
        let element = self.element(host)?;

        // STEP 1: "If element's namespace is not the HTML namespace, then throw
        //          a "NotSupportedError" DOMException."
        if element.namespace != Namespace::Html {
            return Err(DomError::NotSupported(
                "shadow roots can only be attached to HTML elements",
            ));
        }

        // STEP 2: "If element's local name is not a valid shadow host name,
        //          then throw a "NotSupportedError" DOMException."
        if !element.element_type.is_valid_shadow_host()
            && !is_valid_custom_element_name(&element.local_name)
        {
            return Err(DomError::NotSupported("element cannot host a shadow root"));
        }

        // STEP 4: "If element is a shadow host, then throw a
        //          "NotSupportedError" DOMException."
        if element.shadow_root.is_some() {
            return Err(DomError::NotSupported("element already hosts a shadow root"));
        }

        // STEP 5-6: "Let shadow be a new shadow root whose node document is
        //            element's node document, host is element, and mode is mode."
        let document = self.node(host)?.node_document;
        let shadow = self.alloc_in(
            NodeType::ShadowRoot(ShadowRootData {
                host,
                mode: init.mode,
                slot_assignment: init.slot_assignment,
                delegates_focus: init.delegates_focus,
            }),
            document,
        );

        // STEP 13: "Set element's shadow root to shadow."
        self.element_mut(host)?.shadow_root = Some(shadow);
        log::trace!(target: "quill.dom", "attach {} shadow root {shadow:?} to {host:?}", init.mode);
        Ok(shadow)
    }

    /// The shadow root attached to `host`, if any.
    #[must_use]
    pub fn shadow_root(&self, host: NodeId) -> Option<NodeId> {
        self.as_element(host).and_then(|e| e.shadow_root)
    }

    /// [§ 4.9 shadowRoot getter](https://dom.spec.whatwg.org/#dom-element-shadowroot)
    ///
    /// "If shadow is null or its mode is "closed", then return null."
    #[must_use]
    pub fn open_shadow_root(&self, host: NodeId) -> Option<NodeId> {
        self.shadow_root(host)
            .filter(|&root| self.as_shadow_root(root).is_some_and(|r| r.mode == ShadowRootMode::Open))
    }

    /// "An element is a shadow host if its shadow root is non-null."
    #[must_use]
    pub fn is_shadow_host(&self, id: NodeId) -> bool {
        self.shadow_root(id).is_some()
    }
}
