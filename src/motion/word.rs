//! Single steps of the word motions.
//!
//! An empty line counts as a word for `w`, `b` and `ge`, but `e` skips it.

use crate::classify::CharClass;
use crate::error::Result;
use crate::scan::Scanner;
use crate::traits::TextView;
use crate::types::WordKind;

/// `w`: start of the next word, or `len` when there is none.
pub(super) fn next_begin<T: TextView + ?Sized>(
    s: &Scanner<'_, T>,
    pos: usize,
    kind: WordKind,
) -> Result<Option<usize>> {
    let len = s.len();
    if pos >= len {
        return Ok(None);
    }

    let mut i = pos;
    let class = s.class(i, kind)?;
    if class != CharClass::Blank {
        while i < len && s.class(i, kind)? == class {
            i += 1;
        }
    }

    while i < len && s.is_blank(i)? {
        let line_break = s.char_at(i)? == '\n';
        i += 1;
        if line_break && i < len && s.char_at(i)? == '\n' {
            return Ok(Some(i));
        }
    }
    Ok(Some(i))
}

/// `b`: start of the current word if inside one, else of the previous one.
pub(super) fn prev_begin<T: TextView + ?Sized>(
    s: &Scanner<'_, T>,
    pos: usize,
    kind: WordKind,
) -> Result<Option<usize>> {
    if pos == 0 {
        return Ok(None);
    }

    let mut i = pos - 1;
    while s.is_blank(i)? {
        if i == 0 || s.is_empty_line(i)? {
            return Ok(Some(i));
        }
        i -= 1;
    }

    let class = s.class(i, kind)?;
    while i > 0 && s.class(i - 1, kind)? == class {
        i -= 1;
    }
    Ok(Some(i))
}

/// `e`: last character of the current word if not already there, else of the
/// next one. `None` when no word follows.
pub(super) fn next_end<T: TextView + ?Sized>(
    s: &Scanner<'_, T>,
    pos: usize,
    kind: WordKind,
) -> Result<Option<usize>> {
    let len = s.len();
    let mut i = pos + 1;
    while i < len && s.is_blank(i)? {
        i += 1;
    }
    if i >= len {
        return Ok(None);
    }

    let class = s.class(i, kind)?;
    while i + 1 < len && s.class(i + 1, kind)? == class {
        i += 1;
    }
    Ok(Some(i))
}

/// `ge`: last character of the previous word.
pub(super) fn prev_end<T: TextView + ?Sized>(
    s: &Scanner<'_, T>,
    pos: usize,
    kind: WordKind,
) -> Result<Option<usize>> {
    if pos == 0 {
        return Ok(None);
    }

    let mut i = pos;
    if i < s.len() && !s.is_blank(i)? {
        let class = s.class(i, kind)?;
        while i > 0 && s.class(i - 1, kind)? == class {
            i -= 1;
        }
        if i == 0 {
            return Ok(Some(0));
        }
    }

    i -= 1;
    while s.is_blank(i)? {
        if i == 0 || s.is_empty_line(i)? {
            return Ok(Some(i));
        }
        i -= 1;
    }
    Ok(Some(i))
}
