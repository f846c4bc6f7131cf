//! HTML tokenizer and tree-construction state for the Quill DOM.
//!
//! # Scope
//!
//! This crate implements:
//! - **Input stream** ([WHATWG § 13.2.3.5](https://html.spec.whatwg.org/multipage/parsing.html#preprocessing-the-input-stream))
//!   - Newline normalization, lookahead and pushback, offset and line tracking
//!
//! - **HTML Tokenizer** ([WHATWG § 13.2.5](https://html.spec.whatwg.org/multipage/parsing.html#tokenization))
//!   - Every tokenizer state, including script data escapes, DOCTYPE identifiers and CDATA
//!   - Named and numeric character references
//!   - Parse errors with input positions
//!
//! - **Parse state** ([WHATWG § 13.2.4](https://html.spec.whatwg.org/multipage/parsing.html#parse-state))
//!   - Insertion modes and "reset the insertion mode appropriately"
//!   - Stack of open elements with scope queries
//!   - List of active formatting elements
//!
//! # Not Implemented
//!
//! - The tree construction rules themselves. A tree constructor drives the
//!   tokenizer with [`HTMLTokenizer::next_token`], mutates a
//!   [`quill_dom::DomTree`] and keeps its context in a [`ParseState`].
//! - Encoding sniffing. Input is already decoded text.

/// Tokenizer parse errors and the hook that receives them.
pub mod errors;
/// Insertion modes, open elements and active formatting elements.
pub mod parse_state;
/// HTML tokenizer for converting input into tokens.
pub mod tokenizer;

pub use errors::{ParseError, ParseErrorSink, ParseIssue};
pub use parse_state::{
    ActiveFormattingElement, ActiveFormattingElements, InsertionMode, ParseState, Scope,
    StackOfOpenElements,
};
pub use tokenizer::{
    Attribute, HTMLTokenizer, InputCursor, Token, TokenizerOptions, TokenizerState,
};
