//! Tree traversal.
//!
//! Every iterator here is lazy: each step looks at the tree as it is at that
//! moment rather than at a snapshot taken when iteration began. The iterators
//! borrow the tree, so the compiler rejects mutation while one is alive;
//! callers that need to mutate while walking collect the ids first.

use crate::{DomTree, NodeId, NodeType};

impl DomTree {
    /// Iterate over all ancestors of a node, from parent to root.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> AncestorIterator<'_> {
        AncestorIterator {
            tree: self,
            current: self.parent(id),
        }
    }

    /// Iterate over preceding siblings (from immediately before to first child).
    #[must_use]
    pub fn preceding_siblings(&self, id: NodeId) -> PrecedingSiblingIterator<'_> {
        PrecedingSiblingIterator {
            tree: self,
            current: self.prev_sibling(id),
        }
    }

    /// Iterate over following siblings (from immediately after to last child).
    #[must_use]
    pub fn following_siblings(&self, id: NodeId) -> FollowingSiblingIterator<'_> {
        FollowingSiblingIterator {
            tree: self,
            current: self.next_sibling(id),
        }
    }

    /// Descendants of `id` in tree order (depth-first pre-order), excluding `id`.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> DescendantIterator<'_> {
        DescendantIterator {
            tree: self,
            root: id,
            next: self.first_child(id),
            shadow_including: false,
        }
    }

    /// `id` followed by its descendants in tree order.
    #[must_use]
    pub fn inclusive_descendants(&self, id: NodeId) -> DescendantIterator<'_> {
        DescendantIterator {
            tree: self,
            root: id,
            next: self.get(id).map(|_| id),
            shadow_including: false,
        }
    }

    /// [§ 4.8](https://dom.spec.whatwg.org/#concept-shadow-including-tree-order)
    ///
    /// "In shadow-including tree order is shadow-including preorder,
    /// depth-first traversal of a node tree. Shadow-including preorder,
    /// depth-first traversal of a node tree tree is preorder, depth-first
    /// traversal of tree, with for each shadow host encountered in tree,
    /// shadow-including preorder, depth-first traversal of that element's
    /// shadow root's node tree just after it is encountered."
    #[must_use]
    pub fn shadow_including_descendants(&self, id: NodeId) -> DescendantIterator<'_> {
        let mut iter = self.shadow_including_inclusive_descendants(id);
        let _ = iter.next();
        iter
    }

    /// `id` followed by its shadow-including descendants.
    #[must_use]
    pub fn shadow_including_inclusive_descendants(&self, id: NodeId) -> DescendantIterator<'_> {
        DescendantIterator {
            tree: self,
            root: id,
            next: self.get(id).map(|_| id),
            shadow_including: true,
        }
    }

    /// Shadow-including ancestors: the parent, or the host for a shadow root.
    #[must_use]
    pub fn shadow_including_ancestors(&self, id: NodeId) -> ShadowIncludingAncestorIterator<'_> {
        ShadowIncludingAncestorIterator {
            tree: self,
            current: self.shadow_including_parent(id),
        }
    }

    /// [§ 4.8](https://dom.spec.whatwg.org/#concept-shadow-including-root)
    ///
    /// "The shadow-including root of an object is its root's host's
    /// shadow-including root, if the object's root is a shadow root; otherwise
    /// its root."
    #[must_use]
    pub fn shadow_including_root(&self, id: NodeId) -> NodeId {
        let mut root = self.root(id);
        while let Some(shadow) = self.as_shadow_root(root) {
            root = self.root(shadow.host);
        }
        root
    }

    /// [§ 4.8](https://dom.spec.whatwg.org/#concept-shadow-including-descendant)
    ///
    /// "An object A is a shadow-including descendant of an object B, if A is a
    /// descendant of B, or A's root is a shadow root and A's root's host is a
    /// shadow-including inclusive descendant of B."
    #[must_use]
    pub fn is_shadow_including_descendant_of(&self, descendant: NodeId, ancestor: NodeId) -> bool {
        self.shadow_including_ancestors(descendant)
            .any(|id| id == ancestor)
    }

    /// [§ 4.4](https://dom.spec.whatwg.org/#connected)
    ///
    /// "An element is connected if its shadow-including root is a document."
    #[must_use]
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.is_document(self.shadow_including_root(id))
    }

    fn shadow_including_parent(&self, id: NodeId) -> Option<NodeId> {
        let node = self.get(id)?;
        match &node.node_type {
            NodeType::ShadowRoot(data) => Some(data.host),
            _ => node.parent,
        }
    }

    fn attached_shadow_root(&self, id: NodeId) -> Option<NodeId> {
        self.as_element(id).and_then(|e| e.shadow_root)
    }

    /// The node after `id` in (shadow-including) pre-order, without leaving
    /// the subtree rooted at `root`.
    fn following_within(&self, id: NodeId, root: NodeId, shadow_including: bool) -> Option<NodeId> {
        let shadow = self.attached_shadow_root(id).filter(|_| shadow_including);
        if let Some(shadow) = shadow {
            return Some(shadow);
        }
        if let Some(child) = self.first_child(id) {
            return Some(child);
        }
        let mut node = id;
        loop {
            if node == root {
                return None;
            }
            if let Some(sibling) = self.next_sibling(node) {
                return Some(sibling);
            }
            match self.parent(node) {
                Some(parent) => node = parent,
                None if shadow_including => {
                    // A finished shadow tree continues with its host's light tree.
                    let host = self.as_shadow_root(node)?.host;
                    if let Some(child) = self.first_child(host) {
                        return Some(child);
                    }
                    node = host;
                }
                None => return None,
            }
        }
    }
}

/// Iterator over ancestors of a node.
pub struct AncestorIterator<'a> {
    tree: &'a DomTree,
    current: Option<NodeId>,
}

impl Iterator for AncestorIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}

/// Iterator over shadow-including ancestors of a node.
pub struct ShadowIncludingAncestorIterator<'a> {
    tree: &'a DomTree,
    current: Option<NodeId>,
}

impl Iterator for ShadowIncludingAncestorIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.shadow_including_parent(id);
        Some(id)
    }
}

/// Iterator over preceding siblings of a node.
pub struct PrecedingSiblingIterator<'a> {
    tree: &'a DomTree,
    current: Option<NodeId>,
}

impl Iterator for PrecedingSiblingIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.prev_sibling(id);
        Some(id)
    }
}

/// Iterator over following siblings of a node.
pub struct FollowingSiblingIterator<'a> {
    tree: &'a DomTree,
    current: Option<NodeId>,
}

impl Iterator for FollowingSiblingIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.next_sibling(id);
        Some(id)
    }
}

/// Depth-first pre-order walk of a subtree, optionally descending into
/// shadow trees.
pub struct DescendantIterator<'a> {
    tree: &'a DomTree,
    root: NodeId,
    next: Option<NodeId>,
    shadow_including: bool,
}

impl Iterator for DescendantIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = self
            .tree
            .following_within(id, self.root, self.shadow_including);
        Some(id)
    }
}
