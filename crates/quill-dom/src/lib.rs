//! DOM tree core for the Quill HTML engine.
//!
//! This crate provides an arena-based DOM tree structure following the
//! [DOM Living Standard](https://dom.spec.whatwg.org/): nodes, shadow trees,
//! slot assignment and the insert/remove/adopt mutation algorithms that tree
//! construction drives.
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all relationships,
//! providing O(1) access and traversal without borrow checker issues. Parent
//! and assigned-slot links are plain ids that never keep a node alive; a node
//! belongs to the child list it appears in. Observers, live ranges and custom
//! element reactions are reached through [`DomHooks`].

mod attributes;
mod character_data;
pub mod element;
mod error;
pub mod events;
pub mod hooks;
mod mutation;
pub mod node;
mod shadow;
mod slots;
pub mod traversal;
mod tree;

pub use element::{Attr, AttributesMap, ElementData, HtmlElementType, Namespace};
pub use error::DomError;
pub use events::{CallbackId, EventListener};
pub use hooks::{CustomElementReaction, DomHooks, NoopHooks, TreeMutationRecord};
pub use node::{
    DocumentData, DocumentKind, DocumentMode, DocumentTypeData, Node, NodeId, NodeType,
    ShadowRootData, ShadowRootMode, SlotAssignmentMode, Slottable, TextData,
};
pub use shadow::{ShadowRootInit, is_valid_custom_element_name};
pub use tree::DomTree;
