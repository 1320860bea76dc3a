//! Cursor motions: `w W b B e E ge gE ( ) { }`.
//!
//! Every motion is a repeated single step. The step reports where it would
//! land; the first step has to move, later ones stop quietly once the cursor
//! is stuck. Forward motions that run off the end of the buffer clamp
//! according to the query's [`Inclusivity`].

mod paragraph;
mod sentence;
mod word;

pub(crate) use paragraph::LineTable;
pub(crate) use sentence::sentence_starts;

use tracing::{debug, trace};

use crate::classify::Classifier;
use crate::error::Result;
use crate::scan::Scanner;
use crate::traits::TextView;
use crate::types::{Direction, Inclusivity, Query, WordKind};

/// Motion kinds understood by [`MotionEngine::motion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    /// `w` / `b`
    WordBegin,
    /// `W` / `B`
    BigWordBegin,
    /// `e` / `ge`
    WordEnd,
    /// `E` / `gE`
    BigWordEnd,
    /// `)` / `(`
    Sentence,
    /// `}` / `{`
    Paragraph,
}

/// Stateless resolver for motions and text objects.
///
/// Holds only configuration, so one instance can serve any number of
/// buffers and threads.
#[derive(Debug, Clone)]
pub struct MotionEngine {
    pub(crate) classifier: Classifier,
    pub(crate) quote_escape: Option<char>,
}

pub struct MotionEngineBuilder {
    word_chars: Vec<char>,
    quote_escape: Option<char>,
}

impl Default for MotionEngineBuilder {
    fn default() -> Self {
        Self {
            word_chars: Vec::new(),
            quote_escape: Some('\\'),
        }
    }
}

impl MotionEngineBuilder {
    /// Extra characters to treat as part of a word, like Vim's `iskeyword`.
    pub fn word_chars(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.word_chars.extend(chars);
        self
    }

    /// Character that escapes a quote inside a quoted string. `None` disables
    /// escaping.
    pub fn quote_escape(mut self, escape: Option<char>) -> Self {
        self.quote_escape = escape;
        self
    }

    pub fn build(self) -> MotionEngine {
        MotionEngine {
            classifier: Classifier::with_word_chars(self.word_chars),
            quote_escape: self.quote_escape,
        }
    }
}

impl Default for MotionEngine {
    fn default() -> Self {
        MotionEngineBuilder::default().build()
    }
}

impl MotionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> MotionEngineBuilder {
        MotionEngineBuilder::default()
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub(crate) fn scanner<'a, T: TextView + ?Sized>(&'a self, text: &'a T) -> Scanner<'a, T> {
        Scanner::new(text, &self.classifier)
    }

    pub fn motion<T: TextView + ?Sized>(
        &self,
        text: &T,
        kind: MotionKind,
        query: Query,
    ) -> Result<Option<usize>> {
        trace!(
            ?kind,
            offset = query.offset,
            count = query.count,
            direction = ?query.direction,
            "motion query"
        );
        match kind {
            MotionKind::WordBegin => self.word_begin(text, query),
            MotionKind::BigWordBegin => self.big_word_begin(text, query),
            MotionKind::WordEnd => self.word_end(text, query),
            MotionKind::BigWordEnd => self.big_word_end(text, query),
            MotionKind::Sentence => self.sentence(text, query),
            MotionKind::Paragraph => self.paragraph(text, query),
        }
    }

    /// `w` forward, `b` backward.
    pub fn word_begin<T: TextView + ?Sized>(
        &self,
        text: &T,
        query: Query,
    ) -> Result<Option<usize>> {
        self.begin_motion(text, query, WordKind::Small)
    }

    /// `W` forward, `B` backward.
    pub fn big_word_begin<T: TextView + ?Sized>(
        &self,
        text: &T,
        query: Query,
    ) -> Result<Option<usize>> {
        self.begin_motion(text, query, WordKind::Big)
    }

    /// `e` forward, `ge` backward.
    pub fn word_end<T: TextView + ?Sized>(
        &self,
        text: &T,
        query: Query,
    ) -> Result<Option<usize>> {
        self.end_motion(text, query, WordKind::Small)
    }

    /// `E` forward, `gE` backward.
    pub fn big_word_end<T: TextView + ?Sized>(
        &self,
        text: &T,
        query: Query,
    ) -> Result<Option<usize>> {
        self.end_motion(text, query, WordKind::Big)
    }

    /// `)` forward, `(` backward.
    pub fn sentence<T: TextView + ?Sized>(
        &self,
        text: &T,
        query: Query,
    ) -> Result<Option<usize>> {
        let s = self.scanner(text);
        s.check(query.offset)?;
        let starts = sentence_starts(&s)?;
        let len = s.len();
        let landed = repeat(query, |pos| {
            Ok(Some(match query.direction {
                Direction::Forward => sentence::next_start(&starts, pos, len),
                Direction::Backward => sentence::prev_start(&starts, pos),
            }))
        })?;
        Ok(finish(query, landed, len))
    }

    /// `}` forward, `{` backward.
    pub fn paragraph<T: TextView + ?Sized>(
        &self,
        text: &T,
        query: Query,
    ) -> Result<Option<usize>> {
        let s = self.scanner(text);
        s.check(query.offset)?;
        let table = paragraph::LineTable::new(&s)?;
        let landed = repeat(query, |pos| {
            Ok(Some(match query.direction {
                Direction::Forward => table.next_boundary(pos, s.len()),
                Direction::Backward => table.prev_boundary(pos),
            }))
        })?;
        Ok(finish(query, landed, s.len()))
    }

    fn begin_motion<T: TextView + ?Sized>(
        &self,
        text: &T,
        query: Query,
        kind: WordKind,
    ) -> Result<Option<usize>> {
        let s = self.scanner(text);
        s.check(query.offset)?;
        let landed = repeat(query, |pos| match query.direction {
            Direction::Forward => word::next_begin(&s, pos, kind),
            Direction::Backward => word::prev_begin(&s, pos, kind),
        })?;
        Ok(finish(query, landed, s.len()))
    }

    fn end_motion<T: TextView + ?Sized>(
        &self,
        text: &T,
        query: Query,
        kind: WordKind,
    ) -> Result<Option<usize>> {
        let s = self.scanner(text);
        s.check(query.offset)?;
        let landed = repeat(query, |pos| match query.direction {
            Direction::Forward => word::next_end(&s, pos, kind),
            Direction::Backward => word::prev_end(&s, pos, kind),
        })?;
        Ok(finish(query, landed, s.len()))
    }
}

/// Runs `step` up to `query.count` times from `query.offset`.
///
/// Returns `None` if the very first step cannot move. Later steps that
/// cannot move end the repetition at the last landing offset.
fn repeat<F>(query: Query, mut step: F) -> Result<Option<usize>>
where
    F: FnMut(usize) -> Result<Option<usize>>,
{
    let mut pos = query.offset;
    for n in 0..query.count {
        match step(pos)? {
            Some(next) if next != pos => pos = next,
            _ if n == 0 => return Ok(None),
            _ => {
                debug!(step = n, offset = pos, count = query.count, "motion stopped early");
                break;
            }
        }
    }
    Ok(Some(pos))
}

/// Applies the end-of-buffer clamp and drops results that did not move.
fn finish(query: Query, landed: Option<usize>, len: usize) -> Option<usize> {
    let pos = landed?;
    let pos = match query.inclusivity {
        Inclusivity::Inclusive if pos >= len => len.saturating_sub(1),
        _ => pos.min(len),
    };
    (pos != query.offset).then_some(pos)
}
