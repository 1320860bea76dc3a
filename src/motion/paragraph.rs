//! Paragraph boundaries: a paragraph is a run of non-blank lines, separated
//! by runs of blank lines that each count once.

use crate::error::Result;
use crate::scan::{Scanner, line_index};
use crate::traits::TextView;

/// Line bounds plus blankness, built once per query.
pub(crate) struct LineTable {
    pub(crate) lines: Vec<(usize, usize)>,
    pub(crate) blank: Vec<bool>,
}

impl LineTable {
    pub(crate) fn new<T: TextView + ?Sized>(s: &Scanner<'_, T>) -> Result<Self> {
        let lines = s.lines()?;
        let blank = lines
            .iter()
            .map(|&(start, end)| s.is_blank_line(start, end))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { lines, blank })
    }

    pub(crate) fn index_of(&self, offset: usize) -> usize {
        line_index(&self.lines, offset)
    }

    /// First and last line of the run of equally blank lines holding `line`.
    pub(crate) fn run_of(&self, line: usize) -> (usize, usize) {
        let blank = self.blank[line];
        let mut first = line;
        while first > 0 && self.blank[first - 1] == blank {
            first -= 1;
        }
        let mut last = line;
        while last + 1 < self.lines.len() && self.blank[last + 1] == blank {
            last += 1;
        }
        (first, last)
    }

    /// `}`: first blank line after the paragraph at or below `pos`, or `len`.
    pub(super) fn next_boundary(&self, pos: usize, len: usize) -> usize {
        let count = self.lines.len();
        let mut j = self.index_of(pos);
        while j < count && self.blank[j] {
            j += 1;
        }
        while j < count && !self.blank[j] {
            j += 1;
        }
        self.lines.get(j).map_or(len, |&(start, _)| start)
    }

    /// `{`: last blank line before the paragraph at or above `pos`, or the
    /// buffer start.
    pub(super) fn prev_boundary(&self, pos: usize) -> usize {
        let mut j = self.index_of(pos);
        while j > 0 && self.blank[j] {
            j -= 1;
        }
        while j > 0 && !self.blank[j] {
            j -= 1;
        }
        if self.blank[j] { self.lines[j].0 } else { 0 }
    }
}
