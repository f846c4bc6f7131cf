//! Errors raised by structural misuse of the tree.

use thiserror::Error;

use crate::NodeId;

/// Failures of the DOM mutation algorithms.
///
/// These mirror the `DOMException` names the DOM Standard throws. They
/// always indicate a caller bug; the tree is left unchanged when one is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// [§ 4.2.3 Remove](https://dom.spec.whatwg.org/#concept-node-remove)
    ///
    /// "Let parent be node's parent. Assert: parent is non-null."
    #[error("node {0:?} has no parent")]
    NoParent(NodeId),

    /// The id does not refer to a node allocated in this tree.
    #[error("node {0:?} does not exist in this tree")]
    InvalidNode(NodeId),

    /// The node exists but has the wrong kind for the operation.
    #[error("node {node:?} is not {expected}")]
    WrongNodeType {
        /// The offending node.
        node: NodeId,
        /// What the operation needed, e.g. "an element".
        expected: &'static str,
    },

    /// "NotFoundError": a reference child is not a child of the parent.
    #[error("node {child:?} is not a child of {parent:?}")]
    NotFound {
        /// The parent that was searched.
        parent: NodeId,
        /// The child that was expected to be in it.
        child: NodeId,
    },

    /// "HierarchyRequestError": the insertion would produce an invalid tree.
    #[error("hierarchy request error: {0}")]
    HierarchyRequest(&'static str),

    /// "IndexSizeError": an offset past the end of character data.
    #[error("offset {offset} is greater than the node length {length}")]
    IndexSize {
        /// The requested offset.
        offset: usize,
        /// The node's length.
        length: usize,
    },

    /// "NotSupportedError"
    #[error("not supported: {0}")]
    NotSupported(&'static str),
}
