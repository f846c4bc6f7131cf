//! [§ 4.2.3 Mutation algorithms](https://dom.spec.whatwg.org/#mutation-algorithms)
//!
//! `insert`, `remove` and `adopt` are the unchecked algorithms tree
//! construction uses directly. `pre_insert`, `append_child`, `insert_before`
//! and `remove_child` validate first, the way the public DOM methods do.

use crate::hooks::{CustomElementReaction, TreeMutationRecord};
use crate::node::{Node, NodeType, SlotAssignmentMode, Slottable};
use crate::{DomError, DomTree, NodeId};

impl DomTree {
    /// [§ 4.2.3 Insert](https://dom.spec.whatwg.org/#concept-node-insert)
    ///
    /// "To insert a node into a parent before a child, with an optional
    /// suppress observers flag"
    ///
    /// Inserts `node` (or, for a document fragment, its children) into
    /// `parent` before `before`, or at the end when `before` is `None`.
    /// Hierarchy constraints are not checked; see [`DomTree::pre_insert`].
    pub fn insert(
        &mut self,
        node: NodeId,
        parent: NodeId,
        before: Option<NodeId>,
        suppress_observers: bool,
    ) -> Result<(), DomError> {
        let _ = self.node(parent)?;
        if before == Some(node) {
            return Err(DomError::HierarchyRequest("cannot insert a node before itself"));
        }
        if let Some(child) = before {
            self.check_child_of(parent, child)?;
        }

        // STEP 1: "Let nodes be node's children, if node is a DocumentFragment
        //          node; otherwise « node »."
        let is_fragment = self.node(node)?.node_type.is_document_fragment();
        let nodes: Vec<NodeId> = if is_fragment {
            self.children(node).to_vec()
        } else {
            vec![node]
        };

        // STEP 2-3: "Let count be nodes's size. If count is 0, then return."
        let count = nodes.len();
        if count == 0 {
            return Ok(());
        }

        // STEP 4: "If node is a DocumentFragment node, then:"
        if is_fragment {
            // STEP 4.1: "Remove its children with the suppress observers flag set."
            for &child in &nodes {
                self.remove(child, true)?;
            }
            // STEP 4.2: "Queue a tree mutation record for node with « », nodes,
            //            null, and null."
            self.hooks.queue_tree_mutation_record(TreeMutationRecord {
                target: node,
                added_nodes: Vec::new(),
                removed_nodes: nodes.clone(),
                previous_sibling: None,
                next_sibling: None,
            });
        }

        // STEP 5: "If child is non-null, then:" live range adjustment.
        if let Some(child) = before {
            let index = self.index(child);
            self.hooks.live_range_pre_insert(parent, index, count);
        }

        // STEP 6: "Let previousSibling be child's previous sibling or parent's
        //          last child if child is null."
        let previous_sibling = match before {
            Some(child) => self.prev_sibling(child),
            None => self.last_child(parent),
        };

        let document = self.node(parent)?.node_document;
        let parent_slot_assignment = self
            .as_element(parent)
            .and_then(|e| e.shadow_root)
            .and_then(|root| self.as_shadow_root(root))
            .map(|root| root.slot_assignment);

        // STEP 7: "For each node in nodes, in tree order:"
        for &inserted in &nodes {
            // STEP 7.1: "Adopt node into parent's node document."
            self.adopt(inserted, document)?;

            // STEP 7.2-7.3: insert before child, or append. The index is
            // recomputed because adopting may have removed a sibling.
            let index = match before {
                Some(child) => self.index_in(parent, child)?,
                None => self.children(parent).len(),
            };
            self.attach(inserted, parent, index);
            log::trace!(target: "quill.dom", "insert {inserted:?} into {parent:?} at {index}");

            // STEP 7.4: "If parent is a shadow host whose shadow root's slot
            //            assignment is "named" and node is a slottable, then
            //            assign a slot for node."
            if parent_slot_assignment == Some(SlotAssignmentMode::Named) {
                if let Some(slottable) = self.slottable(inserted) {
                    self.assign_a_slot(slottable);
                }
            }

            // STEP 7.5: "If parent's root is a shadow root, and parent is a slot
            //            whose assigned nodes is the empty list, then run signal
            //            a slot change for parent."
            self.signal_if_empty_slot_in_shadow_tree(parent);

            // STEP 7.6: "Run assign slottables for a tree with node's root."
            self.assign_slottables_for_tree(self.root(inserted));

            // STEP 7.7: "For each shadow-including inclusive descendant
            //            inclusiveDescendant of node, in shadow-including tree
            //            order:"
            let descendants: Vec<NodeId> =
                self.shadow_including_inclusive_descendants(inserted).collect();
            for descendant in descendants {
                self.hooks.insertion_steps(descendant);
                if self.is_connected(descendant) && self.is_custom(descendant) {
                    self.hooks
                        .enqueue_custom_element_reaction(descendant, CustomElementReaction::Connected);
                }
            }
        }

        // STEP 8: "If suppress observers flag is unset, then queue a tree
        //          mutation record for parent with nodes, « », previousSibling,
        //          and child."
        if !suppress_observers {
            self.hooks.queue_tree_mutation_record(TreeMutationRecord {
                target: parent,
                added_nodes: nodes,
                removed_nodes: Vec::new(),
                previous_sibling,
                next_sibling: before,
            });
        }

        // STEP 9: "Run the children changed steps for parent."
        self.hooks.children_changed_steps(parent);
        Ok(())
    }

    /// [§ 4.2.3 Ensure pre-insertion validity](https://dom.spec.whatwg.org/#concept-node-ensure-pre-insertion-validity)
    pub fn ensure_pre_insertion_validity(
        &self,
        node: NodeId,
        parent: NodeId,
        child: Option<NodeId>,
    ) -> Result<(), DomError> {
        let parent_type = &self.node(parent)?.node_type;
        let node_type = &self.node(node)?.node_type;

        // STEP 1: "If parent is not a Document, DocumentFragment, or Element
        //          node, then throw a "HierarchyRequestError" DOMException."
        if !matches!(parent_type, NodeType::Document(_) | NodeType::Element(_))
            && !parent_type.is_document_fragment()
        {
            return Err(DomError::HierarchyRequest(
                "parent must be a document, fragment or element",
            ));
        }

        // STEP 2: "If node is a host-including inclusive ancestor of parent,
        //          then throw a "HierarchyRequestError" DOMException."
        if self.is_host_including_inclusive_ancestor_of(node, parent) {
            return Err(DomError::HierarchyRequest(
                "node is a host-including inclusive ancestor of parent",
            ));
        }

        // STEP 3: "If child is non-null and its parent is not parent, then
        //          throw a "NotFoundError" DOMException."
        if let Some(child) = child {
            self.check_child_of(parent, child)?;
        }

        // STEP 4: "If node is not a DocumentFragment, DocumentType, Element, or
        //          CharacterData node, then throw a "HierarchyRequestError"."
        if matches!(node_type, NodeType::Document(_)) {
            return Err(DomError::HierarchyRequest("a document cannot be inserted"));
        }

        // STEP 5: "If either node is a Text node and parent is a document, or
        //          node is a doctype and parent is not a document, then throw."
        let parent_is_document = matches!(parent_type, NodeType::Document(_));
        match node_type {
            NodeType::Text(_) if parent_is_document => {
                return Err(DomError::HierarchyRequest(
                    "text cannot be a child of a document",
                ));
            }
            NodeType::DocumentType(_) if !parent_is_document => {
                return Err(DomError::HierarchyRequest(
                    "a doctype can only be a child of a document",
                ));
            }
            _ => {}
        }

        // STEP 6: "If parent is a document, and any of the statements below,
        //          switched on the interface node implements, are true, then
        //          throw a "HierarchyRequestError" DOMException."
        if parent_is_document {
            self.check_document_child(node, parent, child)?;
        }
        Ok(())
    }

    fn check_document_child(
        &self,
        node: NodeId,
        parent: NodeId,
        child: Option<NodeId>,
    ) -> Result<(), DomError> {
        let is_element = |id: NodeId| self.as_element(id).is_some();
        let is_doctype =
            |id: NodeId| matches!(self.get(id).map(|n| &n.node_type), Some(NodeType::DocumentType(_)));
        let parent_has_element = self.children(parent).iter().any(|&c| is_element(c));
        let child_is_doctype = child.is_some_and(is_doctype);
        let doctype_follows_child =
            child.is_some_and(|c| self.following_siblings(c).any(is_doctype));

        match &self.node(node)?.node_type {
            NodeType::DocumentFragment { .. } | NodeType::ShadowRoot(_) => {
                // "If node has more than one element child or has a Text node
                //  child. Otherwise, if node has one element child and either
                //  parent has an element child, child is a doctype, or child is
                //  non-null and a doctype is following child."
                let children = self.children(node);
                let element_children = children.iter().filter(|&&c| is_element(c)).count();
                let has_text = children.iter().any(|&c| self.as_text(c).is_some());
                if element_children > 1 || has_text {
                    return Err(DomError::HierarchyRequest(
                        "a document can only have one element child and no text",
                    ));
                }
                if element_children == 1
                    && (parent_has_element || child_is_doctype || doctype_follows_child)
                {
                    return Err(DomError::HierarchyRequest(
                        "a document can only have one element child",
                    ));
                }
            }
            NodeType::Element(_) => {
                // "parent has an element child, child is a doctype, or child is
                //  non-null and a doctype is following child."
                if parent_has_element || child_is_doctype || doctype_follows_child {
                    return Err(DomError::HierarchyRequest(
                        "a document can only have one element child",
                    ));
                }
            }
            NodeType::DocumentType(_) => {
                // "parent has a doctype child, child is non-null and an element
                //  is preceding child, or child is null and parent has an
                //  element child."
                let parent_has_doctype = self.children(parent).iter().any(|&c| is_doctype(c));
                let element_precedes_child =
                    child.is_some_and(|c| self.preceding_siblings(c).any(is_element));
                if parent_has_doctype
                    || element_precedes_child
                    || (child.is_none() && parent_has_element)
                {
                    return Err(DomError::HierarchyRequest(
                        "a doctype must come first and only once",
                    ));
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// [§ 4.2.3 Pre-insert](https://dom.spec.whatwg.org/#concept-node-pre-insert)
    ///
    /// Validates, then inserts `node` into `parent` before `child`.
    /// Returns `node`.
    pub fn pre_insert(
        &mut self,
        node: NodeId,
        parent: NodeId,
        child: Option<NodeId>,
    ) -> Result<NodeId, DomError> {
        // STEP 1: "Ensure pre-insertion validity of node into parent before child."
        self.ensure_pre_insertion_validity(node, parent, child)?;

        // STEP 2-3: "Let referenceChild be child. If referenceChild is node,
        //            then set referenceChild to node's next sibling."
        let reference_child = if child == Some(node) {
            self.next_sibling(node)
        } else {
            child
        };

        // STEP 4: "Insert node into parent before referenceChild."
        self.insert(node, parent, reference_child, false)?;

        // STEP 5: "Return node."
        Ok(node)
    }

    /// [§ 4.2.2 Append](https://dom.spec.whatwg.org/#concept-node-append)
    ///
    /// "To append a node to a parent, pre-insert node into parent before null."
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<NodeId, DomError> {
        self.pre_insert(child, parent, None)
    }

    /// `Node.insertBefore(node, child)`
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        node: NodeId,
        child: Option<NodeId>,
    ) -> Result<NodeId, DomError> {
        self.pre_insert(node, parent, child)
    }

    /// [§ 4.2.3 Pre-remove](https://dom.spec.whatwg.org/#concept-node-pre-remove)
    ///
    /// "If child's parent is not parent, then throw a "NotFoundError"
    /// DOMException. Remove child. Return child."
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<NodeId, DomError> {
        self.check_child_of(parent, child)?;
        self.remove(child, false)?;
        Ok(child)
    }

    /// [§ 4.2.3 Remove](https://dom.spec.whatwg.org/#concept-node-remove)
    ///
    /// Detaches `node` from its parent and reruns slot assignment on both
    /// sides of the cut. Fails with [`DomError::NoParent`] if `node` is not
    /// attached.
    pub fn remove(&mut self, node: NodeId, suppress_observers: bool) -> Result<(), DomError> {
        // STEP 1-2: "Let parent be node's parent. Assert: parent is non-null."
        let parent = self.node(node)?.parent.ok_or(DomError::NoParent(node))?;

        // STEP 3-7: live range adjustment
        let index = self.index(node);
        self.hooks.live_range_pre_remove(node, parent, index);

        // STEP 8-9: "Let oldPreviousSibling be node's previous sibling. Let
        //            oldNextSibling be node's next sibling."
        let old_previous_sibling = self.prev_sibling(node);
        let old_next_sibling = self.next_sibling(node);

        // STEP 10: "Remove node from its parent's children."
        self.detach(node);
        log::trace!(target: "quill.dom", "remove {node:?} from {parent:?}");

        // STEP 11: "If node is assigned, then run assign slottables for node's
        //           assigned slot."
        let assigned_slot = self
            .get(node)
            .and_then(|n| n.slottable())
            .and_then(|s| s.assigned_slot);
        if let Some(slot) = assigned_slot {
            self.assign_slottables(slot);
        }

        // STEP 12: "If parent's root is a shadow root, and parent is a slot
        //           whose assigned nodes is the empty list, then run signal a
        //           slot change for parent."
        self.signal_if_empty_slot_in_shadow_tree(parent);

        // STEP 13: "If node has an inclusive descendant that is a slot, then:"
        if self.inclusive_descendants(node).any(|id| self.is_slot(id)) {
            // STEP 13.1: "Run assign slottables for a tree with parent's root."
            self.assign_slottables_for_tree(self.root(parent));
            // STEP 13.2: "Run assign slottables for a tree with node."
            self.assign_slottables_for_tree(node);
        }

        // STEP 14: "Run the removing steps with node and parent."
        self.hooks.removing_steps(node, Some(parent));

        // STEP 15: "Let isParentConnected be parent's connected."
        let is_parent_connected = self.is_connected(parent);

        // STEP 16: "If node is custom and isParentConnected is true, then
        //           enqueue a custom element callback reaction with node,
        //           callback name "disconnectedCallback", and « »."
        if is_parent_connected && self.is_custom(node) {
            self.hooks
                .enqueue_custom_element_reaction(node, CustomElementReaction::Disconnected);
        }

        // STEP 17: "For each shadow-including descendant descendant of node,
        //           in shadow-including tree order, then:"
        let descendants: Vec<NodeId> = self.shadow_including_descendants(node).collect();
        for descendant in descendants {
            self.hooks.removing_steps(descendant, None);
            if is_parent_connected && self.is_custom(descendant) {
                self.hooks.enqueue_custom_element_reaction(
                    descendant,
                    CustomElementReaction::Disconnected,
                );
            }
        }

        // STEP 19: "If suppress observers flag is unset, then queue a tree
        //           mutation record for parent with « », « node »,
        //           oldPreviousSibling, and oldNextSibling."
        if !suppress_observers {
            self.hooks.queue_tree_mutation_record(TreeMutationRecord {
                target: parent,
                added_nodes: Vec::new(),
                removed_nodes: vec![node],
                previous_sibling: old_previous_sibling,
                next_sibling: old_next_sibling,
            });
        }

        // STEP 20: "Run the children changed steps for parent."
        self.hooks.children_changed_steps(parent);
        Ok(())
    }

    /// [§ 4.5 Adopt](https://dom.spec.whatwg.org/#concept-node-adopt)
    ///
    /// Removes `node` from its parent, then moves its shadow-including
    /// inclusive descendants (and their attributes) into `document`. The
    /// document update is skipped when `document` is already the node
    /// document.
    pub fn adopt(&mut self, node: NodeId, document: NodeId) -> Result<(), DomError> {
        if !self.is_document(document) {
            return Err(DomError::WrongNodeType {
                node: document,
                expected: "a document",
            });
        }

        // STEP 1: "Let oldDocument be node's node document."
        let old_document = self.node(node)?.node_document;

        // STEP 2: "If node's parent is non-null, then remove node."
        if self.node(node)?.parent.is_some() {
            self.remove(node, false)?;
        }

        // STEP 3: "If document is not oldDocument, then:"
        if document == old_document {
            return Ok(());
        }
        log::trace!(target: "quill.dom", "adopt {node:?} from {old_document:?} into {document:?}");

        let descendants: Vec<NodeId> = self.shadow_including_inclusive_descendants(node).collect();

        // STEP 3.1: "For each inclusiveDescendant in node's shadow-including
        //            inclusive descendants: set inclusiveDescendant's node
        //            document to document. If inclusiveDescendant is an element,
        //            then set the node document of each attribute in
        //            inclusiveDescendant's attribute list to document."
        for &descendant in &descendants {
            let entry = self.node_mut(descendant)?;
            entry.node_document = document;
            if let NodeType::Element(data) = &mut entry.node_type {
                for attr in data.attrs.values_mut() {
                    attr.node_document = document;
                }
            }
        }

        // STEP 3.2: "For each inclusiveDescendant in node's shadow-including
        //            inclusive descendants that is custom, enqueue a custom
        //            element callback reaction with inclusiveDescendant, callback
        //            name "adoptedCallback", and « oldDocument, document »."
        for &descendant in &descendants {
            if self.is_custom(descendant) {
                self.hooks.enqueue_custom_element_reaction(
                    descendant,
                    CustomElementReaction::Adopted {
                        old_document,
                        new_document: document,
                    },
                );
            }
        }

        // STEP 3.3: "For each inclusiveDescendant in node's shadow-including
        //            inclusive descendants, in shadow-including tree order, run
        //            the adopting steps with inclusiveDescendant and oldDocument."
        for &descendant in &descendants {
            self.hooks.adopting_steps(descendant, old_document);
        }
        Ok(())
    }

    /// [§ 4.5 adoptNode](https://dom.spec.whatwg.org/#dom-document-adoptnode)
    ///
    /// "If node is a document, then throw a "NotSupportedError" DOMException.
    /// If node is a shadow root, then throw a "HierarchyRequestError"
    /// DOMException."
    pub fn adopt_node(&mut self, node: NodeId, document: NodeId) -> Result<NodeId, DomError> {
        match &self.node(node)?.node_type {
            NodeType::Document(_) => Err(DomError::NotSupported("cannot adopt a document")),
            NodeType::ShadowRoot(_) => {
                Err(DomError::HierarchyRequest("cannot adopt a shadow root"))
            }
            _ => {
                self.adopt(node, document)?;
                Ok(node)
            }
        }
    }

    /// Move every child of `from` to the end of `to`, preserving order.
    pub fn move_children(&mut self, from: NodeId, to: NodeId) -> Result<(), DomError> {
        let children = self.children(from).to_vec();
        for child in children {
            self.insert(child, to, None, false)?;
        }
        Ok(())
    }

    // ===== internals =====

    fn check_child_of(&self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if self.node(child)?.parent == Some(parent) {
            Ok(())
        } else {
            Err(DomError::NotFound { parent, child })
        }
    }

    fn index_in(&self, parent: NodeId, child: NodeId) -> Result<usize, DomError> {
        self.children(parent)
            .iter()
            .position(|&c| c == child)
            .ok_or(DomError::NotFound { parent, child })
    }

    /// Splice `node` into `parent`'s children at `index`.
    fn attach(&mut self, node: NodeId, parent: NodeId, index: usize) {
        self.raw_mut(parent).children.insert(index, node);
        self.raw_mut(node).parent = Some(parent);
    }

    /// Unlink `node` from its parent's children.
    fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.parent(node) {
            self.raw_mut(parent).children.retain(|&c| c != node);
        }
        self.raw_mut(node).parent = None;
    }

    fn raw_mut(&mut self, id: NodeId) -> &mut Node {
        // Callers only pass ids they already resolved.
        &mut self.nodes[id.0]
    }

    /// `id` as a [`Slottable`], if it is an element or text node.
    #[must_use]
    pub fn slottable(&self, id: NodeId) -> Option<Slottable> {
        self.get(id).and_then(|n| Slottable::from_node(n, id))
    }

    pub(crate) fn is_custom(&self, id: NodeId) -> bool {
        self.as_element(id).is_some_and(|e| e.is_custom)
    }
}
