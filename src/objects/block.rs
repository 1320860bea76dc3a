//! Sentence and paragraph objects.

use crate::error::Result;
use crate::motion::{LineTable, sentence_starts};
use crate::objects::Scope;
use crate::scan::Scanner;
use crate::traits::TextView;
use crate::types::Span;

pub(super) fn sentence_object<T: TextView + ?Sized>(
    s: &Scanner<'_, T>,
    offset: usize,
    scope: Scope,
    count: usize,
) -> Result<Option<Span>> {
    let len = s.len();
    if offset >= len {
        return Ok(None);
    }

    let starts = sentence_starts(s)?;
    if scope == Scope::Around {
        let idx = starts.partition_point(|&start| start <= offset);
        let begin = idx.checked_sub(1).map_or(0, |i| starts[i]);
        let end = starts
            .get(idx.saturating_add(count - 1))
            .copied()
            .unwrap_or(len);
        return Ok(Some(Span::exclusive(begin, end)));
    }

    // Inner objects alternate between sentence bodies and the white space
    // after them; each one counts.
    let segments = inner_segments(s, &starts)?;
    let first = segments
        .partition_point(|&(begin, _)| begin <= offset)
        .saturating_sub(1);
    let last = first.saturating_add(count - 1).min(segments.len() - 1);
    Ok(Some(Span::exclusive(segments[first].0, segments[last].1)))
}

/// Sentence bodies and trailing white space as consecutive `[begin, end)`
/// pieces covering the whole buffer. A run of blank lines is one piece.
fn inner_segments<T: TextView + ?Sized>(
    s: &Scanner<'_, T>,
    starts: &[usize],
) -> Result<Vec<(usize, usize)>> {
    let len = s.len();
    let mut segments = Vec::with_capacity(starts.len() * 2 + 1);
    if let Some(&first) = starts.first()
        && first > 0
    {
        segments.push((0, first));
    }
    for (i, &begin) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(len);
        let mut trimmed = end;
        while trimmed > begin && s.is_blank(trimmed - 1)? {
            trimmed -= 1;
        }
        if trimmed == begin {
            segments.push((begin, end));
            continue;
        }
        segments.push((begin, trimmed));
        if trimmed < end {
            segments.push((trimmed, end));
        }
    }
    Ok(segments)
}

pub(super) fn paragraph_object<T: TextView + ?Sized>(
    s: &Scanner<'_, T>,
    offset: usize,
    scope: Scope,
    count: usize,
) -> Result<Option<Span>> {
    if offset >= s.len() {
        return Ok(None);
    }

    let table = LineTable::new(s)?;
    let lines = table.lines.len();
    let line = table.index_of(offset);
    let (mut first, mut last) = table.run_of(line);

    match scope {
        Scope::Inner => {
            for _ in 1..count {
                if last + 1 >= lines {
                    break;
                }
                last = table.run_of(last + 1).1;
            }
        }
        Scope::Around => {
            let started_blank = table.blank[line];
            for n in 0..count {
                if n > 0 {
                    if last + 1 >= lines {
                        break;
                    }
                    last = table.run_of(last + 1).1;
                }
                if last + 1 < lines {
                    last = table.run_of(last + 1).1;
                } else if n == 0 && !started_blank && first > 0 {
                    // No blank lines after the last paragraph: take the ones
                    // before it.
                    first = table.run_of(first - 1).0;
                }
            }
        }
    }

    let begin = table.lines[first].0;
    let end = s.line_end_inclusive(table.lines[last]);
    Ok(Some(Span::exclusive(begin, end)))
}
