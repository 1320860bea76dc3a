use crate::error::{MotionError, Result};

/// Read-only view of a buffer snapshot, indexed by code point.
///
/// Offsets run from `0` to `len()` inclusive; `len()` itself is the
/// one-past-end position. Hosts implement this over whatever storage they
/// use (rope, gap buffer, plain `Vec<char>`), and must keep the snapshot
/// unchanged for the duration of a query.
pub trait TextView {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Character at `offset`. Fails when `offset >= len()`.
    fn char_at(&self, offset: usize) -> Result<char>;

    /// Bounds of the line containing `offset`.
    ///
    /// `start` is the first character of the line, `end` is the offset of its
    /// terminating `\n` (or `len()` for the last line). An offset sitting on a
    /// `\n` belongs to the line that newline terminates.
    fn line_bounds(&self, offset: usize) -> Result<(usize, usize)> {
        let len = self.len();
        if offset > len {
            return Err(MotionError::OutOfRange { offset, len });
        }
        let mut start = offset;
        while start > 0 && self.char_at(start - 1)? != '\n' {
            start -= 1;
        }
        let mut end = offset;
        while end < len && self.char_at(end)? != '\n' {
            end += 1;
        }
        Ok((start, end))
    }
}

impl TextView for [char] {
    fn len(&self) -> usize {
        <[char]>::len(self)
    }

    fn char_at(&self, offset: usize) -> Result<char> {
        self.get(offset).copied().ok_or(MotionError::OutOfRange {
            offset,
            len: <[char]>::len(self),
        })
    }
}

impl TextView for Vec<char> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn char_at(&self, offset: usize) -> Result<char> {
        self.as_slice().char_at(offset)
    }
}

/// Owned, code-point indexed snapshot of a string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharBuffer {
    chars: Vec<char>,
}

impl CharBuffer {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }

    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }
}

impl From<&str> for CharBuffer {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl TextView for CharBuffer {
    fn len(&self) -> usize {
        self.chars.len()
    }

    fn char_at(&self, offset: usize) -> Result<char> {
        self.chars.as_slice().char_at(offset)
    }
}
