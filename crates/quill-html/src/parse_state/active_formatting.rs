use quill_dom::NodeId;

use crate::tokenizer::{Attribute, Token};

/// [§ 13.2.4.3 The list of active formatting elements](https://html.spec.whatwg.org/multipage/parsing.html#the-list-of-active-formatting-elements)
///
/// The list contains entries that are either elements or markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveFormattingElement {
    /// A formatting element entry.
    Element {
        /// The `NodeId` of the element in the DOM tree.
        node_id: NodeId,
        /// The start tag that created the element, kept so the element can be
        /// recreated when reconstructing the list.
        token: Token,
    },
    /// "A marker is an entry in the list of active formatting elements that is
    /// distinct from any element."
    ///
    /// Pushed when entering applet, object, marquee, template, td, th and caption.
    Marker,
}

impl ActiveFormattingElement {
    /// The element for element entries.
    #[must_use]
    pub const fn node_id(&self) -> Option<NodeId> {
        match self {
            Self::Element { node_id, .. } => Some(*node_id),
            Self::Marker => None,
        }
    }
}

/// The list itself, oldest entry first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveFormattingElements {
    entries: Vec<ActiveFormattingElement>,
}

impl ActiveFormattingElements {
    /// "Initially, the list of active formatting elements is empty."
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert a marker.
    pub fn push_marker(&mut self) {
        self.entries.push(ActiveFormattingElement::Marker);
    }

    /// [§ 13.2.4.3 Push onto the list of active formatting elements](https://html.spec.whatwg.org/multipage/parsing.html#push-onto-the-list-of-active-formatting-elements)
    ///
    /// Includes the Noah's Ark clause: "If there are already three elements
    /// in the list of active formatting elements after the last marker, if
    /// any, or anywhere in the list if there are no markers, that have the
    /// same tag name, namespace, and attributes as element, then remove the
    /// earliest such element from the list."
    pub fn push(&mut self, node_id: NodeId, token: &Token) {
        if let Token::StartTag {
            name, attributes, ..
        } = token
        {
            let matches: Vec<usize> = self
                .entries
                .iter()
                .enumerate()
                .rev()
                .take_while(|(_, entry)| !matches!(entry, ActiveFormattingElement::Marker))
                .filter(|(_, entry)| match entry {
                    ActiveFormattingElement::Element {
                        token:
                            Token::StartTag {
                                name: entry_name,
                                attributes: entry_attrs,
                                ..
                            },
                        ..
                    } => entry_name == name && same_attributes(entry_attrs, attributes),
                    _ => false,
                })
                .map(|(i, _)| i)
                .collect();

            if matches.len() >= 3
                && let Some(&earliest) = matches.last()
            {
                let _ = self.entries.remove(earliest);
            }
        }

        self.entries.push(ActiveFormattingElement::Element {
            node_id,
            token: token.clone(),
        });
    }

    /// [§ 13.2.4.3 Clear the list of active formatting elements up to the last marker](https://html.spec.whatwg.org/multipage/parsing.html#clear-the-list-of-active-formatting-elements-up-to-the-last-marker)
    ///
    /// "1. Let entry be the last (most recently added) entry in the list.
    /// 2. Remove entry from the list.
    /// 3. If entry was a marker, stop. Otherwise, go to step 1."
    pub fn clear_to_last_marker(&mut self) {
        while let Some(entry) = self.entries.pop() {
            if matches!(entry, ActiveFormattingElement::Marker) {
                break;
            }
        }
    }

    /// The last element entry after the last marker whose tag name is `name`.
    #[must_use]
    pub fn last_element_after_marker_named(&self, name: &str) -> Option<NodeId> {
        self.entries
            .iter()
            .rev()
            .take_while(|entry| !matches!(entry, ActiveFormattingElement::Marker))
            .find_map(|entry| match entry {
                ActiveFormattingElement::Element { node_id, token } if token.is_start_tag_named(name) => {
                    Some(*node_id)
                }
                _ => None,
            })
    }

    /// Whether `node_id` has an entry.
    #[must_use]
    pub fn contains(&self, node_id: NodeId) -> bool {
        self.position(node_id).is_some()
    }

    /// Index of the entry for `node_id`.
    #[must_use]
    pub fn position(&self, node_id: NodeId) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.node_id() == Some(node_id))
    }

    /// Remove the entry for `node_id`. Returns whether one existed.
    pub fn remove(&mut self, node_id: NodeId) -> bool {
        match self.position(node_id) {
            Some(index) => {
                let _ = self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Point the entry for `old` at `new`, keeping its token.
    pub fn replace(&mut self, old: NodeId, new: NodeId) -> bool {
        for entry in &mut self.entries {
            if let ActiveFormattingElement::Element { node_id, .. } = entry
                && *node_id == old
            {
                *node_id = new;
                return true;
            }
        }
        false
    }

    /// The most recently added entry.
    #[must_use]
    pub fn last(&self) -> Option<&ActiveFormattingElement> {
        self.entries.last()
    }

    /// Entries oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &ActiveFormattingElement> + '_ {
        self.entries.iter()
    }

    /// Number of entries, markers included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Attribute lists compare as sets; order does not matter.
fn same_attributes(a: &[Attribute], b: &[Attribute]) -> bool {
    a.len() == b.len() && a.iter().all(|attr| b.contains(attr))
}
