//! [§ 4.2.2.3 Finding slots and slottables](https://dom.spec.whatwg.org/#finding-slots-and-slotables)
//! and [§ 4.2.2.4 Assigning slottables and slots](https://dom.spec.whatwg.org/#assigning-slotables-and-slots).

use crate::element::SlotData;
use crate::node::{ShadowRootMode, SlotAssignmentMode, Slottable};
use crate::{DomError, DomTree, NodeId};

impl DomTree {
    /// [§ 4.2.2.3 Find a slot](https://dom.spec.whatwg.org/#find-a-slot)
    ///
    /// "To find a slot for a given slottable slottable and an optional open
    /// flag (default unset), run these steps:"
    #[must_use]
    pub fn find_slot(&self, slottable: Slottable, open: bool) -> Option<NodeId> {
        let node = slottable.node();

        // STEP 1: "If slottable's parent is null, then return null."
        let parent = self.parent(node)?;

        // STEP 2: "Let shadow be slottable's parent's shadow root."
        // STEP 3: "If shadow is null, then return null."
        let shadow_id = self.shadow_root(parent)?;
        let shadow = self.as_shadow_root(shadow_id)?;

        // STEP 4: "If the open flag is set and shadow's mode is not "open",
        //          then return null."
        if open && shadow.mode != ShadowRootMode::Open {
            return None;
        }

        let mut slots = self.descendants(shadow_id).filter(|&id| self.is_slot(id));
        match shadow.slot_assignment {
            // STEP 5: "If shadow's slot assignment is "manual", then return the
            //          slot in shadow's descendants whose manually assigned
            //          nodes contains slottable, if any; otherwise null."
            SlotAssignmentMode::Manual => slots.find(|&slot| {
                self.slot_data(slot)
                    .is_some_and(|data| data.manually_assigned_nodes.contains(&node))
            }),
            // STEP 6: "Return the first slot in tree order in shadow's
            //          descendants whose name is slottable's name, if any;
            //          otherwise null."
            SlotAssignmentMode::Named => {
                let name = self.get(node)?.slottable()?.name.as_str();
                slots.find(|&slot| self.slot_data(slot).is_some_and(|data| data.name == name))
            }
        }
    }

    /// [§ 4.2.2.3 Find slottables](https://dom.spec.whatwg.org/#find-slotables)
    ///
    /// The slottables that belong in `slot`, in host child order for named
    /// assignment or manual assignment order otherwise.
    #[must_use]
    pub fn find_slottables(&self, slot: NodeId) -> Vec<NodeId> {
        // STEP 1: "Let result be « »."
        // STEP 2: "If slot's root is not a shadow root, then return result."
        let root = self.root(slot);
        let Some(shadow) = self.as_shadow_root(root) else {
            return Vec::new();
        };
        let Some(data) = self.slot_data(slot) else {
            return Vec::new();
        };

        // STEP 3: "Let host be slot's root's host."
        let host = shadow.host;

        match shadow.slot_assignment {
            // STEP 4: "If root's slot assignment is "manual", then: for each
            //          slottable of slot's manually assigned nodes, if
            //          slottable's parent is host, append slottable to result."
            SlotAssignmentMode::Manual => data
                .manually_assigned_nodes
                .iter()
                .copied()
                .filter(|&node| self.parent(node) == Some(host))
                .collect(),
            // STEP 5: "Otherwise, for each slottable child slottable of host,
            //          in tree order: let foundSlot be the result of finding a
            //          slot given slottable. If foundSlot is slot, then append
            //          slottable to result."
            SlotAssignmentMode::Named => self
                .children(host)
                .iter()
                .filter_map(|&child| self.slottable(child))
                .filter(|&slottable| self.find_slot(slottable, false) == Some(slot))
                .map(Slottable::node)
                .collect(),
        }
    }

    /// [§ 4.2.2.3 Find flattened slottables](https://dom.spec.whatwg.org/#find-flattened-slotables)
    ///
    /// Expands nested slots so the result only contains non-slot slottables,
    /// falling back to the slot's own children when nothing is assigned.
    #[must_use]
    pub fn find_flattened_slottables(&self, slot: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();

        // STEP 2: "If slot's root is not a shadow root, then return result."
        if !self.is_shadow_root(self.root(slot)) {
            return result;
        }

        // STEP 3: "Let slottables be the result of finding slottables given slot."
        let mut slottables = self.find_slottables(slot);

        // STEP 4: "If slottables is the empty list, then append each slottable
        //          child of slot, in tree order, to slottables."
        if slottables.is_empty() {
            slottables = self
                .children(slot)
                .iter()
                .copied()
                .filter(|&child| self.slottable(child).is_some())
                .collect();
        }

        // STEP 5: "For each node in slottables:"
        for node in slottables {
            // STEP 5.1: "If node is a slot whose root is a shadow root, then"
            //           append its flattened slottables.
            if self.is_slot(node) && self.is_shadow_root(self.root(node)) {
                result.extend(self.find_flattened_slottables(node));
            } else {
                // STEP 5.2: "Otherwise, append node to result."
                result.push(node);
            }
        }
        result
    }

    /// [§ 4.2.2.4 Assign slottables](https://dom.spec.whatwg.org/#assign-slotables)
    ///
    /// Recomputes `slot`'s assigned nodes, signals a slot change if they
    /// differ, and updates the assigned-slot back-references. Slottables that
    /// drop out of the list and still point at `slot` are cleared.
    pub fn assign_slottables(&mut self, slot: NodeId) {
        // STEP 1: "Let slottables be the result of finding slottables for slot."
        let slottables = self.find_slottables(slot);
        let Some(previous) = self.slot_data(slot).map(|d| d.assigned_nodes.clone()) else {
            return;
        };

        // STEP 2: "If suppress signaling flag is unset, and slottables and
        //          slot's assigned nodes are not identical, then run signal a
        //          slot change for slot."
        if previous != slottables {
            self.signal_slot_change(slot);
        }

        for &stale in previous.iter().filter(|n| !slottables.contains(*n)) {
            if let Some(data) = self.get_mut(stale).and_then(|n| n.slottable_mut()) {
                if data.assigned_slot == Some(slot) {
                    data.assigned_slot = None;
                }
            }
        }

        // STEP 4: "For each slottable in slottables, set slottable's assigned
        //          slot to slot."
        for &slottable in &slottables {
            if let Some(data) = self.get_mut(slottable).and_then(|n| n.slottable_mut()) {
                data.assigned_slot = Some(slot);
            }
        }

        // STEP 3: "Set slot's assigned nodes to slottables."
        if let Some(data) = self.slot_data_mut(slot) {
            data.assigned_nodes = slottables;
        }
    }

    /// [§ 4.2.2.4 Assign slottables for a tree](https://dom.spec.whatwg.org/#assign-slotables-for-a-tree)
    ///
    /// "To assign slottables for a tree, given a node root, run assign
    /// slottables for each slot of root's inclusive descendants, in tree order."
    pub fn assign_slottables_for_tree(&mut self, root: NodeId) {
        let slots: Vec<NodeId> = self
            .inclusive_descendants(root)
            .filter(|&id| self.is_slot(id))
            .collect();
        for slot in slots {
            self.assign_slottables(slot);
        }
    }

    /// [§ 4.2.2.4 Assign a slot](https://dom.spec.whatwg.org/#assign-a-slot)
    ///
    /// "To assign a slot, given a slottable slottable, run these steps: Let
    /// slot be the result of finding a slot with slottable. If slot is
    /// non-null, then run assign slottables for slot."
    pub fn assign_a_slot(&mut self, slottable: Slottable) {
        if let Some(slot) = self.find_slot(slottable, false) {
            self.assign_slottables(slot);
        }
    }

    /// [HTMLSlotElement.assign()](https://html.spec.whatwg.org/multipage/scripting.html#dom-slot-assign)
    ///
    /// Manual slot assignment. Each node is taken away from any slot it was
    /// manually assigned to before, then the slot's tree is reassigned.
    pub fn assign(&mut self, slot: NodeId, nodes: &[NodeId]) -> Result<(), DomError> {
        if !self.is_slot(slot) {
            return Err(DomError::WrongNodeType {
                node: slot,
                expected: "a slot element",
            });
        }
        for &node in nodes {
            if self.slottable(node).is_none() {
                return Err(DomError::WrongNodeType {
                    node,
                    expected: "an element or text node",
                });
            }
        }

        // STEP 1: "For each slottable of this's manually assigned nodes, set
        //          slottable's manual slot assignment to null."
        let previous = self
            .slot_data(slot)
            .map(|d| d.manually_assigned_nodes.clone())
            .unwrap_or_default();
        for node in previous {
            if let Some(data) = self.get_mut(node).and_then(|n| n.slottable_mut()) {
                data.manual_slot_assignment = None;
            }
        }

        // STEP 2: "Let nodesSet be a new ordered set."
        let mut nodes_set: Vec<NodeId> = Vec::with_capacity(nodes.len());

        // STEP 3: "For each node of nodes:"
        for &node in nodes {
            // STEP 3.1: "If node's manual slot assignment refers to a slot, then
            //            remove node from that slot's manually assigned nodes."
            let old_slot = self
                .get(node)
                .and_then(|n| n.slottable())
                .and_then(|s| s.manual_slot_assignment);
            if let Some(data) = old_slot.and_then(|old| self.slot_data_mut(old)) {
                data.manually_assigned_nodes.retain(|&n| n != node);
            }
            // STEP 3.2: "Set node's manual slot assignment to this."
            if let Some(data) = self.get_mut(node).and_then(|n| n.slottable_mut()) {
                data.manual_slot_assignment = Some(slot);
            }
            // STEP 3.3: "Append node to nodesSet."
            if !nodes_set.contains(&node) {
                nodes_set.push(node);
            }
        }

        // STEP 4: "Set this's manually assigned nodes to nodesSet."
        if let Some(data) = self.slot_data_mut(slot) {
            data.manually_assigned_nodes = nodes_set;
        }

        // STEP 5: "Run assign slottables for a tree for this's root."
        self.assign_slottables_for_tree(self.root(slot));
        Ok(())
    }

    /// A slot's assigned nodes.
    #[must_use]
    pub fn assigned_nodes(&self, slot: NodeId) -> &[NodeId] {
        self.slot_data(slot)
            .map(|d| d.assigned_nodes.as_slice())
            .unwrap_or(&[])
    }

    /// A slottable's assigned slot.
    #[must_use]
    pub fn assigned_slot(&self, node: NodeId) -> Option<NodeId> {
        self.get(node)
            .and_then(|n| n.slottable())
            .and_then(|s| s.assigned_slot)
    }

    /// [§ 4.2.2.5 Signal a slot change](https://dom.spec.whatwg.org/#signal-a-slot-change)
    pub(crate) fn signal_slot_change(&mut self, slot: NodeId) {
        log::trace!(target: "quill.dom", "slot change on {slot:?}");
        self.hooks.signal_slot_change(slot);
    }

    /// Insert step 7.5 and remove step 12: a slot in a shadow tree that has
    /// nothing assigned falls back to its own children, so any change to
    /// those children is a slot change.
    pub(crate) fn signal_if_empty_slot_in_shadow_tree(&mut self, parent: NodeId) {
        let empty_slot = self
            .slot_data(parent)
            .is_some_and(|d| d.assigned_nodes.is_empty());
        if empty_slot && self.is_shadow_root(self.root(parent)) {
            self.signal_slot_change(parent);
        }
    }

    pub(crate) fn slot_data(&self, id: NodeId) -> Option<&SlotData> {
        self.as_element(id).and_then(|e| e.slot.as_ref())
    }

    pub(crate) fn slot_data_mut(&mut self, id: NodeId) -> Option<&mut SlotData> {
        self.as_element_mut(id).and_then(|e| e.slot.as_mut())
    }
}
