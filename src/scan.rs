use crate::classify::{CharClass, Classifier};
use crate::error::{MotionError, Result};
use crate::traits::TextView;
use crate::types::WordKind;

/// Per-query view over a buffer: the text, its length and the classifier.
///
/// Nothing here outlives a single call into the engine; line tables are
/// rebuilt on demand.
pub(crate) struct Scanner<'a, T: TextView + ?Sized> {
    text: &'a T,
    classifier: &'a Classifier,
    len: usize,
}

impl<'a, T: TextView + ?Sized> Scanner<'a, T> {
    pub(crate) fn new(text: &'a T, classifier: &'a Classifier) -> Self {
        Self {
            text,
            classifier,
            len: text.len(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Fails unless `offset` is within `[0, len]`.
    pub(crate) fn check(&self, offset: usize) -> Result<()> {
        if offset > self.len {
            return Err(MotionError::OutOfRange {
                offset,
                len: self.len,
            });
        }
        Ok(())
    }

    pub(crate) fn char_at(&self, offset: usize) -> Result<char> {
        self.text.char_at(offset)
    }

    /// Class of the character at `offset`; for WORDs every non-blank
    /// character counts as Word.
    pub(crate) fn class(&self, offset: usize, kind: WordKind) -> Result<CharClass> {
        let class = self.classifier.classify(self.text, offset)?;
        Ok(match (kind, class) {
            (WordKind::Big, CharClass::Punctuation) => CharClass::Word,
            (_, class) => class,
        })
    }

    pub(crate) fn is_blank(&self, offset: usize) -> Result<bool> {
        Ok(self.classifier.classify(self.text, offset)? == CharClass::Blank)
    }

    /// Blank but not a line break.
    pub(crate) fn is_inline_blank(&self, offset: usize) -> Result<bool> {
        Ok(self.char_at(offset)? != '\n' && self.is_blank(offset)?)
    }

    /// True if `offset` is the `\n` of a zero-length line.
    pub(crate) fn is_empty_line(&self, offset: usize) -> Result<bool> {
        if self.char_at(offset)? != '\n' {
            return Ok(false);
        }
        Ok(offset == 0 || self.char_at(offset - 1)? == '\n')
    }

    pub(crate) fn line_bounds(&self, offset: usize) -> Result<(usize, usize)> {
        self.text.line_bounds(offset)
    }

    pub(crate) fn is_blank_line(&self, start: usize, end: usize) -> Result<bool> {
        crate::classify::is_blank_line(self.text, start, end)
    }

    /// Bounds of every line. A trailing `\n` does not open an extra line; an
    /// empty buffer has a single empty line.
    pub(crate) fn lines(&self) -> Result<Vec<(usize, usize)>> {
        let mut lines = Vec::new();
        let mut start = 0;
        loop {
            let (_, end) = self.line_bounds(start)?;
            lines.push((start, end));
            start = end + 1;
            if start >= self.len {
                break;
            }
        }
        Ok(lines)
    }

    /// Offset just past the line, including its line break if it has one.
    pub(crate) fn line_end_inclusive(&self, line: (usize, usize)) -> usize {
        if line.1 < self.len { line.1 + 1 } else { line.1 }
    }
}

/// Index into `lines` of the line holding `offset`.
pub(crate) fn line_index(lines: &[(usize, usize)], offset: usize) -> usize {
    lines
        .partition_point(|&(start, _)| start <= offset)
        .saturating_sub(1)
}
