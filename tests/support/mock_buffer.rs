use ropey::Rope;
use vim_motions::{MotionError, Result, TextView};

/// Rope-backed buffer, standing in for a host editor's storage.
pub struct MockBuffer {
    rope: Rope,
}

impl MockBuffer {
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    fn out_of_range(&self, offset: usize) -> MotionError {
        MotionError::OutOfRange {
            offset,
            len: self.rope.len_chars(),
        }
    }
}

impl TextView for MockBuffer {
    fn len(&self) -> usize {
        self.rope.len_chars()
    }

    fn char_at(&self, offset: usize) -> Result<char> {
        self.rope
            .get_char(offset)
            .ok_or_else(|| self.out_of_range(offset))
    }

    // Uses the rope's line index instead of scanning for newlines.
    fn line_bounds(&self, offset: usize) -> Result<(usize, usize)> {
        if offset > self.len() {
            return Err(self.out_of_range(offset));
        }
        let line = self.rope.char_to_line(offset);
        let start = self.rope.line_to_char(line);
        let mut end = start + self.rope.line(line).len_chars();
        if end > start && self.rope.char(end - 1) == '\n' {
            end -= 1;
        }
        Ok((start, end))
    }
}
