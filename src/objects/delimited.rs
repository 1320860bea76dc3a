//! Bracket and quote objects.

use crate::error::Result;
use crate::objects::{Bracket, Quote, Scope};
use crate::scan::Scanner;
use crate::traits::TextView;
use crate::types::Span;

/// Nearest unmatched `open` strictly before `before`.
fn unmatched_open<T: TextView + ?Sized>(
    s: &Scanner<'_, T>,
    before: usize,
    (open, close): (char, char),
) -> Result<Option<usize>> {
    let mut depth = 0usize;
    for i in (0..before).rev() {
        let c = s.char_at(i)?;
        if c == close {
            depth += 1;
        } else if c == open {
            if depth == 0 {
                return Ok(Some(i));
            }
            depth -= 1;
        }
    }
    Ok(None)
}

/// Nearest unmatched `close` at or after `from`.
fn unmatched_close<T: TextView + ?Sized>(
    s: &Scanner<'_, T>,
    from: usize,
    (open, close): (char, char),
) -> Result<Option<usize>> {
    let mut depth = 0usize;
    for i in from..s.len() {
        let c = s.char_at(i)?;
        if c == open {
            depth += 1;
        } else if c == close {
            if depth == 0 {
                return Ok(Some(i));
            }
            depth -= 1;
        }
    }
    Ok(None)
}

pub(super) fn bracket_object<T: TextView + ?Sized>(
    s: &Scanner<'_, T>,
    offset: usize,
    bracket: Bracket,
    scope: Scope,
    count: usize,
) -> Result<Option<Span>> {
    if offset >= s.len() {
        return Ok(None);
    }
    let pair = bracket.delimiters();
    let (open, close) = pair;

    // A bracket under the cursor is its own near boundary.
    let ch = s.char_at(offset)?;
    let begin = if ch == open {
        Some(offset)
    } else {
        unmatched_open(s, offset, pair)?
    };
    let end = if ch == close {
        Some(offset)
    } else if ch == open {
        unmatched_close(s, offset + 1, pair)?
    } else {
        unmatched_close(s, offset, pair)?
    };
    let (Some(mut begin), Some(mut end)) = (begin, end) else {
        return Ok(None);
    };

    for _ in 1..count {
        let outer_open = unmatched_open(s, begin, pair)?;
        let outer_close = unmatched_close(s, end + 1, pair)?;
        match (outer_open, outer_close) {
            (Some(o), Some(c)) => (begin, end) = (o, c),
            _ => return Ok(None),
        }
    }

    if scope == Scope::Around {
        return Ok(Some(Span::exclusive(begin, end + 1)));
    }

    // Inner blocks spanning lines leave out the line break after the opener
    // and the indentation before the closer.
    let mut inner_begin = begin + 1;
    let mut inner_end = end;
    if inner_begin < inner_end && s.char_at(inner_begin)? == '\n' {
        inner_begin += 1;
    }
    let (closer_line, _) = s.line_bounds(end)?;
    if closer_line > begin && s.is_blank_line(closer_line, end)? {
        inner_end = closer_line.max(inner_begin);
    }
    Ok(Some(Span::exclusive(inner_begin, inner_end)))
}

/// Unescaped quote offsets on `[start, end)`.
fn quotes_on_line<T: TextView + ?Sized>(
    s: &Scanner<'_, T>,
    (start, end): (usize, usize),
    quote: char,
    escape: Option<char>,
) -> Result<Vec<usize>> {
    let mut quotes = Vec::new();
    let mut escaped = false;
    for i in start..end {
        let c = s.char_at(i)?;
        if escaped {
            escaped = false;
        } else if Some(c) == escape {
            escaped = true;
        } else if c == quote {
            quotes.push(i);
        }
    }
    Ok(quotes)
}

pub(super) fn quote_object<T: TextView + ?Sized>(
    s: &Scanner<'_, T>,
    offset: usize,
    quote: Quote,
    scope: Scope,
    escape: Option<char>,
) -> Result<Option<Span>> {
    if offset >= s.len() {
        return Ok(None);
    }
    let line = s.line_bounds(offset)?;
    let quotes = quotes_on_line(s, line, quote.delimiter(), escape)?;

    let pair = match quotes.binary_search(&offset) {
        // On a quote: an even number of quotes before it makes it an opener.
        Ok(k) if k % 2 == 0 => quotes.get(k + 1).map(|&close| (quotes[k], close)),
        Ok(k) => Some((quotes[k - 1], quotes[k])),
        // Nothing before the cursor: use the first pair after it.
        Err(0) => quotes.get(1).map(|&close| (quotes[0], close)),
        Err(after) => quotes.get(after).map(|&close| (quotes[after - 1], close)),
    };
    let Some((open, close)) = pair else {
        return Ok(None);
    };

    if scope == Scope::Inner {
        return Ok(Some(Span::exclusive(open + 1, close)));
    }

    let (line_start, line_end) = line;
    let mut begin = open;
    let mut end = close + 1;
    let mut trailing = end;
    while trailing < line_end && s.is_blank(trailing)? {
        trailing += 1;
    }
    if trailing > end {
        end = trailing;
    } else {
        while begin > line_start && s.is_blank(begin - 1)? {
            begin -= 1;
        }
    }
    Ok(Some(Span::exclusive(begin, end)))
}
