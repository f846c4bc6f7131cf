//! [§ 4.9 Attributes](https://dom.spec.whatwg.org/#concept-element-attributes-change)
//!
//! Attribute writes go through here so that mutation records, custom element
//! reactions and the slot-related attribute change steps run.

use crate::element::{Attr, Namespace};
use crate::hooks::CustomElementReaction;
use crate::node::{DocumentKind, Slottable};
use crate::{DomError, DomTree, NodeId};

impl DomTree {
    /// The value of `element`'s attribute `name`.
    #[must_use]
    pub fn get_attribute(&self, element: NodeId, name: &str) -> Option<&str> {
        self.as_element(element)?.get_attribute(name)
    }

    /// [§ 4.9 setAttribute](https://dom.spec.whatwg.org/#dom-element-setattribute)
    ///
    /// Sets (or adds) an attribute. For HTML elements in HTML documents the
    /// name is lowercased first.
    pub fn set_attribute(
        &mut self,
        element: NodeId,
        name: &str,
        value: &str,
    ) -> Result<(), DomError> {
        let document = self.node(element)?.node_document;
        let name = self.normalize_attribute_name(element, name)?;
        let data = self.element_mut(element)?;

        let old_value = match data.attrs.get_mut(&name) {
            // "change an attribute"
            Some(attr) => Some(std::mem::replace(&mut attr.value, value.to_string())),
            // "append an attribute"
            None => {
                let _ = data.attrs.insert(
                    name.clone(),
                    Attr {
                        local_name: name.clone(),
                        value: value.to_string(),
                        node_document: document,
                    },
                );
                None
            }
        };
        self.handle_attribute_changes(element, &name, old_value, Some(value.to_string()));
        Ok(())
    }

    /// [§ 4.9 removeAttribute](https://dom.spec.whatwg.org/#dom-element-removeattribute)
    ///
    /// Returns the removed value, if the attribute existed.
    pub fn remove_attribute(
        &mut self,
        element: NodeId,
        name: &str,
    ) -> Result<Option<String>, DomError> {
        let name = self.normalize_attribute_name(element, name)?;
        let Some(removed) = self.element_mut(element)?.attrs.remove(&name) else {
            return Ok(None);
        };
        self.handle_attribute_changes(element, &name, Some(removed.value.clone()), None);
        Ok(Some(removed.value))
    }

    /// Set the name of a slottable directly.
    ///
    /// For elements this is what changing the `slot` attribute does. Text
    /// nodes have no attributes, so this is the only way to name them.
    pub fn set_slottable_name(&mut self, node: NodeId, name: &str) -> Result<(), DomError> {
        let slottable = self.slottable(node).ok_or(DomError::WrongNodeType {
            node,
            expected: "an element or text node",
        })?;
        let data = self
            .node_mut(node)?
            .slottable_mut()
            .ok_or(DomError::InvalidNode(node))?;
        if data.name == name {
            return Ok(());
        }
        data.name = name.to_string();
        self.reassign_slottable(slottable);
        Ok(())
    }

    fn normalize_attribute_name(&self, element: NodeId, name: &str) -> Result<String, DomError> {
        let data = self.element(element)?;
        let html_document = self
            .node_document(element)
            .and_then(|doc| self.as_document(doc))
            .is_some_and(|doc| doc.kind == DocumentKind::Html);
        if data.namespace == Namespace::Html && html_document {
            Ok(name.to_ascii_lowercase())
        } else {
            Ok(name.to_string())
        }
    }

    /// [§ 4.9 Handle attribute changes](https://dom.spec.whatwg.org/#handle-attribute-changes)
    fn handle_attribute_changes(
        &mut self,
        element: NodeId,
        name: &str,
        old_value: Option<String>,
        new_value: Option<String>,
    ) {
        // STEP 1: "Queue a mutation record of "attributes" for element with
        //          attribute's local name, attribute's namespace, oldValue,
        //          « », « », null, and null."
        self.hooks
            .queue_attribute_mutation_record(element, name, old_value.as_deref());

        // STEP 2: "If element is custom, then enqueue a custom element callback
        //          reaction with element, callback name
        //          "attributeChangedCallback", and « attribute's local name,
        //          oldValue, newValue, attribute's namespace »."
        if self.is_custom(element) {
            self.hooks.enqueue_custom_element_reaction(
                element,
                CustomElementReaction::AttributeChanged {
                    name: name.to_string(),
                    old_value: old_value.clone(),
                    new_value: new_value.clone(),
                },
            );
        }

        // STEP 3: "Run the attribute change steps with element, attribute's
        //          local name, oldValue, newValue, and attribute's namespace."
        self.attribute_change_steps(element, name, old_value.as_deref(), new_value.as_deref());
    }

    /// The slot-related attribute change steps from
    /// [§ 4.2.2.1 Slots](https://dom.spec.whatwg.org/#shadow-tree-slots) and
    /// [Slottables](https://dom.spec.whatwg.org/#light-tree-slotables).
    fn attribute_change_steps(
        &mut self,
        element: NodeId,
        name: &str,
        old_value: Option<&str>,
        value: Option<&str>,
    ) {
        // "If value is oldValue, then return. If value is null and oldValue is
        //  the empty string, then return. If value is the empty string and
        //  oldValue is null, then return."
        match (old_value, value) {
            (old, new) if old == new => return,
            (Some(""), None) | (None, Some("")) => return,
            _ => {}
        }
        let new_name = value.unwrap_or_default().to_string();

        match name {
            "name" if self.is_slot(element) => {
                // "Set element's name to the empty string / value."
                if let Some(slot) = self.slot_data_mut(element) {
                    slot.name = new_name;
                }
                // "Run assign slottables for a tree with element's root."
                self.assign_slottables_for_tree(self.root(element));
            }
            "slot" => {
                if let Some(data) = self.as_element_mut(element) {
                    data.slottable.name = new_name;
                }
                self.reassign_slottable(Slottable::Element(element));
            }
            _ => {}
        }
    }

    /// "If element is assigned, then run assign slottables for element's
    /// assigned slot. Run assign a slot for element."
    fn reassign_slottable(&mut self, slottable: Slottable) {
        if let Some(slot) = self.assigned_slot(slottable.node()) {
            self.assign_slottables(slot);
        }
        self.assign_a_slot(slottable);
    }
}
