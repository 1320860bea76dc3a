//! Character classification for word, sentence and paragraph scanning.
//!
//! Every code point falls into exactly one [`CharClass`]:
//! - **Blank**: any whitespace, newlines included
//! - **Word**: letters, digits, `_`, plus any configured keyword characters
//! - **Punctuation**: everything else
//!
//! So `foo_bar` is one word, `foo->bar` is three, and `foo->bar` is a single
//! WORD.

use crate::error::{MotionError, Result};
use crate::traits::TextView;

/// Character categories for word motions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Blank,
    Punctuation,
    Word,
}

/// Classifies characters, optionally treating extra characters as Word
/// (Vim's `iskeyword` additions).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classifier {
    extra_word_chars: Vec<char>,
}

impl Classifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat `chars` as Word characters in addition to the defaults.
    /// Whitespace is ignored; it always stays Blank.
    pub fn with_word_chars(chars: impl IntoIterator<Item = char>) -> Self {
        let mut extra: Vec<char> = chars.into_iter().filter(|c| !c.is_whitespace()).collect();
        extra.sort_unstable();
        extra.dedup();
        Self {
            extra_word_chars: extra,
        }
    }

    pub fn class_of(&self, ch: char) -> CharClass {
        match class_of(ch) {
            CharClass::Punctuation if self.extra_word_chars.binary_search(&ch).is_ok() => {
                CharClass::Word
            }
            class => class,
        }
    }

    /// Class of the character at `offset`. Fails when `offset >= len`.
    pub fn classify<T: TextView + ?Sized>(&self, text: &T, offset: usize) -> Result<CharClass> {
        let len = text.len();
        if offset >= len {
            return Err(MotionError::OutOfRange { offset, len });
        }
        Ok(self.class_of(text.char_at(offset)?))
    }
}

/// Default classification of a single character.
pub fn class_of(ch: char) -> CharClass {
    if ch.is_whitespace() {
        CharClass::Blank
    } else if ch.is_alphanumeric() || ch == '_' {
        CharClass::Word
    } else {
        CharClass::Punctuation
    }
}

/// Default classification of the character at `offset`.
pub fn classify<T: TextView + ?Sized>(text: &T, offset: usize) -> Result<CharClass> {
    Classifier::default().classify(text, offset)
}

/// `.`, `!` and `?` end a sentence when followed by a line end or white space.
pub fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// Closing characters allowed between a terminator and the white space that
/// follows it, as in `(Done.)` or `"Really?"`.
pub fn is_sentence_closer(ch: char) -> bool {
    matches!(ch, ')' | ']' | '"' | '\'')
}

/// True if `[line_start, line_end)` holds only Blank characters or nothing.
pub fn is_blank_line<T: TextView + ?Sized>(
    text: &T,
    line_start: usize,
    line_end: usize,
) -> Result<bool> {
    for offset in line_start..line_end {
        if class_of(text.char_at(offset)?) != CharClass::Blank {
            return Ok(false);
        }
    }
    Ok(true)
}

/// True if the line containing `offset` is blank and borders non-blank text
/// on at least one side, i.e. it separates (or closes) a paragraph.
pub fn is_paragraph_boundary<T: TextView + ?Sized>(text: &T, offset: usize) -> Result<bool> {
    let (start, end) = text.line_bounds(offset)?;
    if !is_blank_line(text, start, end)? {
        return Ok(false);
    }
    if start > 0 {
        let (prev_start, prev_end) = text.line_bounds(start - 1)?;
        if !is_blank_line(text, prev_start, prev_end)? {
            return Ok(true);
        }
    }
    if end < text.len() {
        let (next_start, next_end) = text.line_bounds(end + 1)?;
        // The phantom line after a trailing newline has no content.
        if next_start < text.len() && !is_blank_line(text, next_start, next_end)? {
            return Ok(true);
        }
    }
    Ok(false)
}
