use crate::classify::Classifier;
use crate::error::Result;
use crate::objects::Scope;
use crate::scan::Scanner;
use crate::traits::TextView;
use crate::types::{Span, WordKind};

/// Start of the word holding `offset`. Returns `offset` itself on a blank or
/// at the end of the buffer.
pub fn word_start<T: TextView + ?Sized>(text: &T, offset: usize) -> Result<usize> {
    let classifier = Classifier::default();
    run_start(&Scanner::new(text, &classifier), offset, WordKind::Small)
}

/// Exclusive end of the word holding `offset`. Returns `offset` itself on a
/// blank or at the end of the buffer.
pub fn word_end<T: TextView + ?Sized>(text: &T, offset: usize) -> Result<usize> {
    let classifier = Classifier::default();
    run_end(&Scanner::new(text, &classifier), offset, WordKind::Small)
}

/// Start of the WORD holding `offset`, or `offset` on a blank.
pub fn big_word_start<T: TextView + ?Sized>(text: &T, offset: usize) -> Result<usize> {
    let classifier = Classifier::default();
    run_start(&Scanner::new(text, &classifier), offset, WordKind::Big)
}

/// Exclusive end of the WORD holding `offset`, or `offset` on a blank.
///
/// ```
/// use vim_motions::{CharBuffer, objects::big_word_end};
///
/// let buf = CharBuffer::new("xyz x._a1  xx");
/// assert_eq!(big_word_end(&buf, 0), Ok(3));
/// assert_eq!(big_word_end(&buf, 5), Ok(9));
/// assert_eq!(big_word_end(&buf, 10), Ok(10));
/// ```
pub fn big_word_end<T: TextView + ?Sized>(text: &T, offset: usize) -> Result<usize> {
    let classifier = Classifier::default();
    run_end(&Scanner::new(text, &classifier), offset, WordKind::Big)
}

fn run_start<T: TextView + ?Sized>(
    s: &Scanner<'_, T>,
    offset: usize,
    kind: WordKind,
) -> Result<usize> {
    s.check(offset)?;
    if offset == s.len() || s.is_blank(offset)? {
        return Ok(offset);
    }
    let class = s.class(offset, kind)?;
    let mut i = offset;
    while i > 0 && s.class(i - 1, kind)? == class {
        i -= 1;
    }
    Ok(i)
}

fn run_end<T: TextView + ?Sized>(
    s: &Scanner<'_, T>,
    offset: usize,
    kind: WordKind,
) -> Result<usize> {
    s.check(offset)?;
    let len = s.len();
    if offset == len || s.is_blank(offset)? {
        return Ok(offset);
    }
    let class = s.class(offset, kind)?;
    let mut i = offset + 1;
    while i < len && s.class(i, kind)? == class {
        i += 1;
    }
    Ok(i)
}

/// The word, blank run or line break at `offset`, which must be `< len`.
fn run_at<T: TextView + ?Sized>(
    s: &Scanner<'_, T>,
    offset: usize,
    kind: WordKind,
) -> Result<(usize, usize)> {
    if s.char_at(offset)? == '\n' {
        return Ok((offset, offset + 1));
    }
    if !s.is_blank(offset)? {
        return Ok((run_start(s, offset, kind)?, run_end(s, offset, kind)?));
    }
    let mut begin = offset;
    while begin > 0 && s.is_inline_blank(begin - 1)? {
        begin -= 1;
    }
    let mut end = offset + 1;
    while end < s.len() && s.is_inline_blank(end)? {
        end += 1;
    }
    Ok((begin, end))
}

fn skip_inline_blanks<T: TextView + ?Sized>(s: &Scanner<'_, T>, mut i: usize) -> Result<usize> {
    while i < s.len() && s.is_inline_blank(i)? {
        i += 1;
    }
    Ok(i)
}

pub(super) fn word_object<T: TextView + ?Sized>(
    s: &Scanner<'_, T>,
    offset: usize,
    kind: WordKind,
    scope: Scope,
    count: usize,
) -> Result<Option<Span>> {
    let len = s.len();
    if offset >= len {
        return Ok(None);
    }

    let (mut begin, mut end) = run_at(s, offset, kind)?;
    match scope {
        // Blank runs count as objects of their own.
        Scope::Inner => {
            for _ in 1..count {
                if end >= len {
                    break;
                }
                end = run_at(s, end, kind)?.1;
            }
        }
        Scope::Around => {
            let on_blank = s.is_inline_blank(offset)?;
            if on_blank && end < len && !s.is_blank(end)? {
                end = run_at(s, end, kind)?.1;
            }
            for _ in 1..count {
                let next = skip_inline_blanks(s, end)?;
                if next >= len || s.is_blank(next)? {
                    break;
                }
                end = run_at(s, next, kind)?.1;
            }
            if !on_blank {
                let trailing = skip_inline_blanks(s, end)?;
                if trailing > end {
                    end = trailing;
                } else {
                    while begin > 0 && s.is_inline_blank(begin - 1)? {
                        begin -= 1;
                    }
                }
            }
        }
    }
    Ok(Some(Span::exclusive(begin, end)))
}
