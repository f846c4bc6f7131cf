//! [§ 4.10 Interface CharacterData](https://dom.spec.whatwg.org/#interface-characterdata)
//!
//! Offsets and counts are in characters (Unicode scalar values).

use crate::node::NodeType;
use crate::{DomError, DomTree, NodeId};

impl DomTree {
    /// The data of a text or comment node.
    #[must_use]
    pub fn data(&self, node: NodeId) -> Option<&str> {
        match &self.get(node)?.node_type {
            NodeType::Text(text) => Some(&text.data),
            NodeType::Comment(data) => Some(data),
            _ => None,
        }
    }

    /// [§ 4.10 Replace data](https://dom.spec.whatwg.org/#concept-cd-replace)
    pub fn replace_data(
        &mut self,
        node: NodeId,
        offset: usize,
        count: usize,
        data: &str,
    ) -> Result<(), DomError> {
        // STEP 1: "Let length be node's length."
        let length = self.length(node);

        // STEP 2: "If offset is greater than length, then throw an
        //          "IndexSizeError" DOMException."
        if offset > length {
            return Err(DomError::IndexSize { offset, length });
        }

        // STEP 3: "If offset plus count is greater than length, then set count
        //          to length minus offset."
        let count = count.min(length - offset);

        let current = self.data_mut(node)?;
        let old_value = current.clone();
        let start = byte_offset(current, offset);
        let end = byte_offset(current, offset + count);
        current.replace_range(start..end, data);

        // STEP 4: "Queue a mutation record of "characterData" for node with
        //          null, null, node's data, « », « », null, and null."
        self.hooks
            .queue_character_data_mutation_record(node, &old_value);

        // STEP 8-11: live range offsets
        self.hooks
            .live_range_replace_data(node, offset, count, data.chars().count());

        // STEP 12: "If node's parent is non-null, then run the children changed
        //           steps for node's parent."
        if let Some(parent) = self.parent(node) {
            self.hooks.children_changed_steps(parent);
        }
        Ok(())
    }

    /// `appendData(data)`: "replace data with node this, offset this's length,
    /// count 0, and data data."
    pub fn append_data(&mut self, node: NodeId, data: &str) -> Result<(), DomError> {
        let length = self.length(node);
        self.replace_data(node, length, 0, data)
    }

    /// `insertData(offset, data)`
    pub fn insert_data(&mut self, node: NodeId, offset: usize, data: &str) -> Result<(), DomError> {
        self.replace_data(node, offset, 0, data)
    }

    /// `deleteData(offset, count)`
    pub fn delete_data(&mut self, node: NodeId, offset: usize, count: usize) -> Result<(), DomError> {
        self.replace_data(node, offset, count, "")
    }

    /// [§ 4.10 Substring data](https://dom.spec.whatwg.org/#concept-cd-substring)
    pub fn substring_data(
        &self,
        node: NodeId,
        offset: usize,
        count: usize,
    ) -> Result<String, DomError> {
        let data = self.data(node).ok_or(DomError::WrongNodeType {
            node,
            expected: "a text or comment node",
        })?;
        let length = data.chars().count();
        if offset > length {
            return Err(DomError::IndexSize { offset, length });
        }
        Ok(data.chars().skip(offset).take(count).collect())
    }

    fn data_mut(&mut self, node: NodeId) -> Result<&mut String, DomError> {
        match &mut self.node_mut(node)?.node_type {
            NodeType::Text(text) => Ok(&mut text.data),
            NodeType::Comment(data) => Ok(data),
            _ => Err(DomError::WrongNodeType {
                node,
                expected: "a text or comment node",
            }),
        }
    }
}

fn byte_offset(data: &str, chars: usize) -> usize {
    data.char_indices().nth(chars).map_or(data.len(), |(i, _)| i)
}
