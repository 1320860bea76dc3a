//! Sentence boundaries.
//!
//! A sentence ends at `.`, `!` or `?`, optionally followed by closing
//! characters, and then a line end or spaces/tabs. The next sentence starts at
//! the first non-blank after that. A run of blank lines is a single sentence
//! of its own, starting at its first line.

use crate::classify::{is_sentence_closer, is_sentence_terminator};
use crate::error::Result;
use crate::scan::Scanner;
use crate::traits::TextView;

/// Sorted start offsets of every sentence in the buffer.
pub(crate) fn sentence_starts<T: TextView + ?Sized>(s: &Scanner<'_, T>) -> Result<Vec<usize>> {
    let mut starts = Vec::new();
    let mut in_blank_run = false;
    // The next non-blank line begins a sentence.
    let mut pending = true;

    for (start, end) in s.lines()? {
        if s.is_blank_line(start, end)? {
            if !in_blank_run {
                starts.push(start);
            }
            in_blank_run = true;
            pending = true;
            continue;
        }
        in_blank_run = false;

        let mut j = start;
        while j < end && s.is_blank(j)? {
            j += 1;
        }
        if pending {
            starts.push(j);
            pending = false;
        }

        while j < end {
            if !is_sentence_terminator(s.char_at(j)?) {
                j += 1;
                continue;
            }
            let mut k = j + 1;
            while k < end && is_sentence_closer(s.char_at(k)?) {
                k += 1;
            }
            if k == end {
                pending = true;
                break;
            }
            if !matches!(s.char_at(k)?, ' ' | '\t') {
                j = k;
                continue;
            }
            while k < end && s.is_blank(k)? {
                k += 1;
            }
            if k == end {
                pending = true;
                break;
            }
            starts.push(k);
            j = k;
        }
    }
    Ok(starts)
}

/// First sentence start after `pos`, or `len`.
pub(super) fn next_start(starts: &[usize], pos: usize, len: usize) -> usize {
    let idx = starts.partition_point(|&start| start <= pos);
    starts.get(idx).copied().unwrap_or(len)
}

/// Start of the sentence holding `pos` unless already there, else the one
/// before it. Falls back to the buffer start.
pub(super) fn prev_start(starts: &[usize], pos: usize) -> usize {
    let idx = starts.partition_point(|&start| start < pos);
    idx.checked_sub(1).map_or(0, |i| starts[i])
}
