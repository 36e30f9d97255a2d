use log::trace;

use crate::{internal::CharIndexMap, Anchoring, Pattern, Result, ScanError, ScanErrorKind};

/// A character scanner over a borrowed input string.
///
/// The scanner addresses the input by logical character index. Internally every index is
/// translated to a byte offset through a table that is built once in [Scanner::new], so that the
/// returned substrings are always cut at character boundaries, also for multi-byte input.
/// If the input contains only single-byte characters, the table is skipped and indices are used
/// as byte offsets directly.
///
/// All consuming operations either advance past the returned text or leave the position
/// unchanged and return an empty string. Running out of input is never an error.
///
/// A grammar usually owns one scanner per document:
/// ```rust
/// use markscan::{Pattern, Scanner};
///
/// let number = Pattern::sticky(r"\d+").unwrap();
/// let mut scanner = Scanner::new("<w>42</w>");
/// assert_eq!(scanner.consume_string("<w>"), "<w>");
/// assert_eq!(scanner.consume_match(&number).unwrap(), "42");
/// assert_eq!(scanner.consume_until_string("</"), "");
/// assert_eq!(scanner.consume_string("</w>"), "</w>");
/// assert!(scanner.is_at_end());
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'h> {
    source: &'h str,
    map: CharIndexMap,
    position: usize,
}

impl<'h> Scanner<'h> {
    /// Creates a new scanner positioned at the start of `source`.
    pub fn new(source: &'h str) -> Self {
        Self {
            source,
            map: CharIndexMap::new(source),
            position: 0,
        }
    }

    /// The complete input.
    #[inline]
    pub fn source(&self) -> &'h str {
        self.source
    }

    /// The number of logical characters in the input.
    #[inline]
    pub fn char_count(&self) -> usize {
        self.map.char_count()
    }

    /// True if at least one character of the input is encoded with more than one byte.
    #[inline]
    pub fn is_multi_byte(&self) -> bool {
        self.map.is_multi_byte()
    }

    /// The current logical character index.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// True if all characters have been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.map.char_count()
    }

    /// The byte offset of the character at `index`, or the input length for indices at or past
    /// the end.
    #[inline]
    pub fn byte_offset(&self, index: usize) -> usize {
        self.map.byte_offset(index)
    }

    /// The logical length of `text` as counted by this scanner.
    #[inline]
    pub fn char_length(&self, text: &str) -> usize {
        self.map.char_length(text)
    }

    /// The character at `index`, if any.
    pub fn char_at(&self, index: usize) -> Option<char> {
        if index >= self.map.char_count() {
            None
        } else if self.map.is_multi_byte() {
            self.source[self.map.byte_offset(index)..].chars().next()
        } else {
            Some(self.source.as_bytes()[index] as char)
        }
    }

    /// The text between the character indices `start` and `end`. Both are clamped to the input.
    pub fn slice(&self, start: usize, end: usize) -> &'h str {
        let end = end.min(self.map.char_count());
        let start = start.min(end);
        &self.source[self.map.byte_offset(start)..self.map.byte_offset(end)]
    }

    /// The not yet consumed rest of the input.
    #[inline]
    pub fn rest(&self) -> &'h str {
        &self.source[self.map.byte_offset(self.position)..]
    }

    /// The input consumed so far.
    #[inline]
    pub fn consumed(&self) -> &'h str {
        &self.source[..self.map.byte_offset(self.position)]
    }

    /// Advances the position by `count` characters, stopping at the end of the input.
    #[inline]
    pub fn advance(&mut self, count: usize) {
        self.position = self
            .position
            .saturating_add(count)
            .min(self.map.char_count());
    }

    /// Advances the position by one character.
    #[inline]
    pub fn advance_one(&mut self) {
        self.advance(1);
    }

    /// Moves the position.
    ///
    /// A non-negative `index` is an absolute character index, clamped to the end of the input.
    /// A negative `index` rewinds relative to the current position, clamped to the start.
    pub fn reset(&mut self, index: isize) {
        self.position = if index >= 0 {
            index.unsigned_abs().min(self.map.char_count())
        } else {
            self.position.saturating_sub(index.unsigned_abs())
        };
        trace!("Reset to {}", self.position);
    }

    /// Moves the position back to the start of the input.
    #[inline]
    pub fn reset_to_start(&mut self) {
        self.reset(0);
    }

    /// Returns the next character without advancing, or an empty string at the end.
    #[inline]
    pub fn peek(&self) -> &'h str {
        if self.is_at_end() {
            ""
        } else if self.map.is_multi_byte() {
            self.slice(self.position, self.position + 1)
        } else {
            &self.source[self.position..self.position + 1]
        }
    }

    /// Returns the next `count` characters without advancing. Near the end of the input fewer
    /// characters are returned.
    #[inline]
    pub fn peek_n(&self, count: usize) -> &'h str {
        if count == 1 {
            self.peek()
        } else {
            self.slice(self.position, self.position.saturating_add(count))
        }
    }

    /// Consumes the next character.
    pub fn consume(&mut self) -> &'h str {
        let text = self.peek();
        self.advance_one();
        text
    }

    /// Consumes the next `count` characters. Near the end of the input fewer characters are
    /// consumed.
    pub fn consume_n(&mut self, count: usize) -> &'h str {
        let text = self.peek_n(count);
        self.advance(count);
        text
    }

    /// Consumes characters as long as `predicate` holds for them.
    pub fn consume_match_fn<F>(&mut self, mut predicate: F) -> &'h str
    where
        F: FnMut(char) -> bool,
    {
        let rest = self.rest();
        let mut end = 0;
        let mut count = 0;
        for c in rest.chars() {
            if !predicate(c) {
                break;
            }
            end += c.len_utf8();
            count += 1;
        }
        self.advance(count);
        &rest[..end]
    }

    /// Consumes whitespace as defined by [char::is_whitespace].
    #[inline]
    pub fn skip_whitespace(&mut self) -> &'h str {
        self.consume_match_fn(char::is_whitespace)
    }

    /// Consumes `text` if the input continues with it.
    ///
    /// This variant counts `text` by bytes. It gives the right answer for every `text` that
    /// consists of single-byte characters and rejects most others. Use [Scanner::consume_string]
    /// if `text` may contain multi-byte characters.
    pub fn consume_string_fast(&mut self, text: &str) -> &'h str {
        let first = self.source.as_bytes().get(self.map.byte_offset(self.position));
        if first.is_none() || first != text.as_bytes().first() {
            return "";
        }
        let peeked = self.peek_n(text.len());
        if peeked == text {
            self.advance(text.len());
            peeked
        } else {
            ""
        }
    }

    /// Consumes `text` if the input continues with it.
    pub fn consume_string(&mut self, text: &str) -> &'h str {
        let consumed = self.consume_string_fast(text);
        if !consumed.is_empty() || !self.map.is_multi_byte() {
            return consumed;
        }
        let count = self.map.char_length(text);
        let peeked = self.peek_n(count);
        if !peeked.is_empty() && peeked == text {
            self.advance(count);
            peeked
        } else {
            ""
        }
    }

    /// Consumes the text matched by a sticky `pattern` at the current position.
    ///
    /// An empty match counts as no match. Passing a global pattern is an error.
    pub fn consume_match(&mut self, pattern: &Pattern) -> Result<&'h str> {
        Self::check_anchoring("consume_match", pattern, Anchoring::Sticky)?;
        let start = self.map.byte_offset(self.position);
        match pattern.search_at(self.source, start) {
            Some(m) if !m.is_empty() => {
                let matched = &self.source[m.range()];
                self.advance(self.map.char_length(matched));
                Ok(matched)
            }
            _ => Ok(""),
        }
    }

    /// Consumes the text up to the next match of a global `pattern`. The match itself is not
    /// consumed.
    ///
    /// If the pattern matches at the current position or nowhere, nothing is consumed. Passing
    /// a sticky pattern is an error.
    pub fn consume_until_match(&mut self, pattern: &Pattern) -> Result<&'h str> {
        Self::check_anchoring("consume_until_match", pattern, Anchoring::Global)?;
        let start = self.map.byte_offset(self.position);
        match pattern.search_at(self.source, start) {
            Some(m) if m.start() > start => {
                let skipped = &self.source[start..m.start()];
                self.advance(self.map.char_length(skipped));
                Ok(skipped)
            }
            _ => Ok(""),
        }
    }

    /// Consumes the text up to the next occurrence of `text`. The occurrence itself is not
    /// consumed.
    ///
    /// If `text` occurs at the current position or nowhere, nothing is consumed.
    pub fn consume_until_string(&mut self, text: &str) -> &'h str {
        let rest = self.rest();
        match rest.find(text) {
            Some(found) if found > 0 => {
                let skipped = &rest[..found];
                self.advance(self.map.char_length(skipped));
                skipped
            }
            _ => "",
        }
    }

    fn check_anchoring(
        operation: &'static str,
        pattern: &Pattern,
        expected: Anchoring,
    ) -> Result<()> {
        if pattern.anchoring() == expected {
            Ok(())
        } else {
            Err(ScanError::new(ScanErrorKind::AnchoringMismatch {
                operation,
                expected,
                found: pattern.anchoring(),
                pattern: pattern.as_str().to_string(),
            }))
        }
    }
}
