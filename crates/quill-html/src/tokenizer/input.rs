//! The input stream the tokenizer consumes from.
//!
//! [§ 13.2.3.5 Preprocessing the input stream](https://html.spec.whatwg.org/multipage/parsing.html#preprocessing-the-input-stream)
//!
//! "Before the tokenization stage, the input stream must be preprocessed by
//! normalizing newlines." Every U+000D CARRIAGE RETURN followed by U+000A LINE
//! FEED collapses to a single LF and every lone CR becomes an LF, so the
//! tokenizer never sees a CR.

use std::collections::VecDeque;
use std::fmt;
use std::iter::{Fuse, Peekable};

/// Byte order mark, discarded from the start of the input on request.
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// A character cursor with arbitrary lookahead and single-character pushback.
///
/// The cursor tracks how many characters have been handed out (`offset`) and on
/// which line the next character sits. Both follow [`InputCursor::rewind`].
pub struct InputCursor<'a> {
    source: Peekable<Fuse<Box<dyn Iterator<Item = char> + 'a>>>,
    /// Normalized characters pulled from `source` but not yet consumed.
    lookahead: VecDeque<char>,
    offset: usize,
    line: usize,
}

impl<'a> InputCursor<'a> {
    /// Wrap a string slice.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::from_chars(input.chars())
    }

    /// Wrap any character source. Characters are pulled lazily.
    pub fn from_chars(chars: impl Iterator<Item = char> + 'a) -> Self {
        let boxed: Box<dyn Iterator<Item = char> + 'a> = Box::new(chars);
        Self {
            source: boxed.fuse().peekable(),
            lookahead: VecDeque::new(),
            offset: 0,
            line: 1,
        }
    }

    /// Pull one normalized character out of the underlying source.
    fn pull(&mut self) -> Option<char> {
        match self.source.next()? {
            '\r' => {
                // CRLF collapses to one LF.
                let _ = self.source.next_if_eq(&'\n');
                Some('\n')
            }
            c => Some(c),
        }
    }

    /// Make sure at least `count` characters are buffered, if the input has them.
    fn fill(&mut self, count: usize) {
        while self.lookahead.len() < count {
            match self.pull() {
                Some(c) => self.lookahead.push_back(c),
                None => break,
            }
        }
    }

    /// Consume and return the next character, or `None` at end of input.
    pub fn next(&mut self) -> Option<char> {
        self.fill(1);
        let c = self.lookahead.pop_front()?;
        self.offset += 1;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    /// The character `k` positions ahead without consuming anything.
    /// `peek(0)` is the character [`InputCursor::next`] would return.
    pub fn peek(&mut self, k: usize) -> Option<char> {
        self.fill(k + 1);
        self.lookahead.get(k).copied()
    }

    /// Up to `n` upcoming characters as a string. Shorter near end of input.
    pub fn peek_as_string(&mut self, n: usize) -> String {
        self.fill(n);
        self.lookahead.iter().take(n).collect()
    }

    /// Push a consumed character back so it is returned again.
    ///
    /// `None` stands for end of input and is never pushed back; the source
    /// stays exhausted so the next [`InputCursor::next`] yields `None` again.
    pub fn rewind(&mut self, c: Option<char>) {
        let Some(c) = c else {
            return;
        };
        self.lookahead.push_front(c);
        self.offset = self.offset.saturating_sub(1);
        if c == '\n' {
            self.line = self.line.saturating_sub(1).max(1);
        }
    }

    /// Consume `n` characters, stopping early at end of input.
    pub fn skip(&mut self, n: usize) {
        for _ in 0..n {
            if self.next().is_none() {
                break;
            }
        }
    }

    /// Drop a leading U+FEFF. Returns whether one was present.
    ///
    /// Only meaningful before anything has been consumed.
    pub fn skip_bom(&mut self) -> bool {
        if self.offset == 0 && self.peek(0) == Some(BYTE_ORDER_MARK) {
            let _ = self.lookahead.pop_front();
            return true;
        }
        false
    }

    /// Number of characters consumed so far.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// 1-based line of the next character.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// True once every character has been consumed.
    pub fn is_at_end(&mut self) -> bool {
        self.peek(0).is_none()
    }
}

impl fmt::Debug for InputCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputCursor")
            .field("lookahead", &self.lookahead)
            .field("offset", &self.offset)
            .field("line", &self.line)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crlf_and_lone_cr_become_lf() {
        let mut cursor = InputCursor::new("a\r\nb\rc");
        let out: String = std::iter::from_fn(|| cursor.next()).collect();
        assert_eq!(out, "a\nb\nc");
        assert_eq!(cursor.line(), 3);
    }

    #[test]
    fn test_bom_only_at_start() {
        let mut cursor = InputCursor::new("\u{FEFF}x\u{FEFF}");
        assert!(cursor.skip_bom());
        assert_eq!(cursor.next(), Some('x'));
        assert!(!cursor.skip_bom());
        assert_eq!(cursor.next(), Some('\u{FEFF}'));
    }
}
