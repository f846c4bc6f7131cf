//! Common utilities for the Quill HTML engine.
//!
//! This crate provides shared infrastructure used by the tokenizer and the DOM:
//! - **Warning System** - deduplicated warnings routed through the `log` facade
//! - **Code point classes** - the Infra predicates the tokenizer state table relies on

pub mod chars;
pub mod warning;
