//! HTML tokenizer module.
//!
//! Implements [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//! of the WHATWG HTML Living Standard.
//!
//! The state handlers are split by family: text states, tag states, markup
//! declarations and character references. Each state is one `handle_*` method.

/// Character reference states per § 13.2.5.72 through § 13.2.5.80.
mod character_reference;
/// Data, RCDATA, RAWTEXT, PLAINTEXT and script data states.
mod data_states;
/// Helper methods for tokenizer state transitions.
mod helpers;
/// The input stream with newline normalization and lookahead.
pub mod input;
/// Comment, DOCTYPE and CDATA states.
mod markup_states;
/// Named character reference lookup table per § 13.5.
pub mod named_character_references;
/// The tokenizer state enumeration.
pub mod state;
/// Tag and attribute states.
mod tag_states;
/// Token types produced by the tokenizer.
pub mod token;
/// The tokenizer struct and its pull loop.
mod core;

pub use core::{HTMLTokenizer, TokenizerOptions};
pub use input::InputCursor;
pub use state::TokenizerState;
pub use token::{Attribute, Token};
