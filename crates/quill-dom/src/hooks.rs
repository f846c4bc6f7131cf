//! Extension points the tree core calls into.
//!
//! Mutation observers, live ranges, custom element reactions and slot change
//! events belong to layers above the tree. The mutation algorithms call these
//! hooks at the points the DOM Standard names; what happens there is up to
//! the embedder. Every method defaults to doing nothing.

use crate::NodeId;

/// [§ 4.13.4 Custom element reactions](https://html.spec.whatwg.org/multipage/custom-elements.html#custom-element-reactions)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomElementReaction {
    /// "connectedCallback"
    Connected,
    /// "disconnectedCallback"
    Disconnected,
    /// "adoptedCallback", with the old and new documents.
    Adopted {
        /// The document the element came from.
        old_document: NodeId,
        /// The document the element now belongs to.
        new_document: NodeId,
    },
    /// "attributeChangedCallback"
    AttributeChanged {
        /// Qualified name of the attribute.
        name: String,
        /// Value before the change.
        old_value: Option<String>,
        /// Value after the change.
        new_value: Option<String>,
    },
}

/// A queued "childList" mutation record.
///
/// [§ 4.3.2 Queueing a tree mutation record](https://dom.spec.whatwg.org/#queue-a-tree-mutation-record)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeMutationRecord {
    /// The parent whose children changed.
    pub target: NodeId,
    /// Nodes added, in tree order.
    pub added_nodes: Vec<NodeId>,
    /// Nodes removed, in tree order.
    pub removed_nodes: Vec<NodeId>,
    /// Sibling before the change point.
    pub previous_sibling: Option<NodeId>,
    /// Sibling after the change point.
    pub next_sibling: Option<NodeId>,
}

/// Callbacks invoked by the mutation algorithms.
#[allow(unused_variables)]
pub trait DomHooks {
    /// [§ 4.3.2](https://dom.spec.whatwg.org/#queue-a-tree-mutation-record)
    fn queue_tree_mutation_record(&mut self, record: TreeMutationRecord) {}

    /// [§ 4.3.2](https://dom.spec.whatwg.org/#queue-a-mutation-record) for
    /// "attributes" records.
    fn queue_attribute_mutation_record(
        &mut self,
        target: NodeId,
        name: &str,
        old_value: Option<&str>,
    ) {
    }

    /// [§ 4.3.2](https://dom.spec.whatwg.org/#queue-a-mutation-record) for
    /// "characterData" records.
    fn queue_character_data_mutation_record(&mut self, target: NodeId, old_value: &str) {}

    /// Insert steps 5.1 and 5.2: live ranges whose boundary is after `index`
    /// in `parent` shift by `count`.
    fn live_range_pre_insert(&mut self, parent: NodeId, index: usize, count: usize) {}

    /// Remove steps 4 through 7: live ranges inside `node` collapse to
    /// `parent` at `index`.
    fn live_range_pre_remove(&mut self, node: NodeId, parent: NodeId, index: usize) {}

    /// Replace data steps 8 through 11.
    fn live_range_replace_data(&mut self, node: NodeId, offset: usize, count: usize, len: usize) {
    }

    /// [Enqueue a custom element callback reaction](https://html.spec.whatwg.org/multipage/custom-elements.html#enqueue-a-custom-element-callback-reaction)
    fn enqueue_custom_element_reaction(
        &mut self,
        element: NodeId,
        reaction: CustomElementReaction,
    ) {
    }

    /// [§ 4.2.2.5 Signal a slot change](https://dom.spec.whatwg.org/#signal-a-slot-change)
    fn signal_slot_change(&mut self, slot: NodeId) {}

    /// [Insertion steps](https://dom.spec.whatwg.org/#concept-node-insert-ext)
    fn insertion_steps(&mut self, node: NodeId) {}

    /// [Removing steps](https://dom.spec.whatwg.org/#concept-node-remove-ext)
    fn removing_steps(&mut self, node: NodeId, old_parent: Option<NodeId>) {}

    /// [Adopting steps](https://dom.spec.whatwg.org/#concept-node-adopt-ext)
    fn adopting_steps(&mut self, node: NodeId, old_document: NodeId) {}

    /// [Children changed steps](https://dom.spec.whatwg.org/#concept-node-children-changed-ext)
    fn children_changed_steps(&mut self, parent: NodeId) {}
}

/// Hooks that do nothing. Installed by [`crate::DomTree::new`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHooks;

impl DomHooks for NoopHooks {}
