//! Text objects: words, sentences, paragraphs, bracket pairs and quotes,
//! each with an inner (`iw`, `i(`) and an around (`aw`, `a(`) form.
//!
//! Every object resolves to a half-open [`Span`], or `None` when nothing
//! suitable surrounds the offset.

mod block;
mod delimited;
mod word;

pub use word::{big_word_end, big_word_start, word_end, word_start};

use tracing::trace;

use crate::error::Result;
use crate::motion::MotionEngine;
use crate::traits::TextView;
use crate::types::{Span, WordKind};

/// `i` selects the contents only, `a` adds delimiters or surrounding blanks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Inner,
    Around,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    Paren,
    Square,
    Curly,
    Angle,
}

impl Bracket {
    /// Opening and closing characters.
    pub fn delimiters(self) -> (char, char) {
        match self {
            Bracket::Paren => ('(', ')'),
            Bracket::Square => ('[', ']'),
            Bracket::Curly => ('{', '}'),
            Bracket::Angle => ('<', '>'),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    Double,
    Single,
    Backtick,
}

impl Quote {
    pub fn delimiter(self) -> char {
        match self {
            Quote::Double => '"',
            Quote::Single => '\'',
            Quote::Backtick => '`',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextObject {
    Word(WordKind, Scope),
    Sentence(Scope),
    Paragraph(Scope),
    Bracket(Bracket, Scope),
    Quote(Quote, Scope),
}

impl TextObject {
    /// Object named by the key typed after `i` or `a`, as in `di(` or `ya"`.
    pub fn from_key(key: char, scope: Scope) -> Option<Self> {
        let object = match key {
            'w' => TextObject::Word(WordKind::Small, scope),
            'W' => TextObject::Word(WordKind::Big, scope),
            's' => TextObject::Sentence(scope),
            'p' => TextObject::Paragraph(scope),
            '(' | ')' | 'b' => TextObject::Bracket(Bracket::Paren, scope),
            '[' | ']' => TextObject::Bracket(Bracket::Square, scope),
            '{' | '}' | 'B' => TextObject::Bracket(Bracket::Curly, scope),
            '<' | '>' => TextObject::Bracket(Bracket::Angle, scope),
            '"' => TextObject::Quote(Quote::Double, scope),
            '\'' => TextObject::Quote(Quote::Single, scope),
            '`' => TextObject::Quote(Quote::Backtick, scope),
            _ => return None,
        };
        Some(object)
    }
}

impl MotionEngine {
    pub fn text_object<T: TextView + ?Sized>(
        &self,
        text: &T,
        object: TextObject,
        offset: usize,
        count: usize,
    ) -> Result<Option<Span>> {
        trace!(?object, offset, count, "text object query");
        match object {
            TextObject::Word(kind, scope) => self.word_object(text, offset, kind, scope, count),
            TextObject::Sentence(scope) => self.sentence_object(text, offset, scope, count),
            TextObject::Paragraph(scope) => self.paragraph_object(text, offset, scope, count),
            TextObject::Bracket(bracket, scope) => {
                self.bracket_object(text, offset, bracket, scope, count)
            }
            TextObject::Quote(quote, scope) => self.quote_object(text, offset, quote, scope),
        }
    }

    /// `iw`, `aw`, `iW`, `aW`.
    pub fn word_object<T: TextView + ?Sized>(
        &self,
        text: &T,
        offset: usize,
        kind: WordKind,
        scope: Scope,
        count: usize,
    ) -> Result<Option<Span>> {
        let s = self.scanner(text);
        s.check(offset)?;
        word::word_object(&s, offset, kind, scope, count.max(1))
    }

    /// `is`, `as`.
    pub fn sentence_object<T: TextView + ?Sized>(
        &self,
        text: &T,
        offset: usize,
        scope: Scope,
        count: usize,
    ) -> Result<Option<Span>> {
        let s = self.scanner(text);
        s.check(offset)?;
        block::sentence_object(&s, offset, scope, count.max(1))
    }

    /// `ip`, `ap`.
    pub fn paragraph_object<T: TextView + ?Sized>(
        &self,
        text: &T,
        offset: usize,
        scope: Scope,
        count: usize,
    ) -> Result<Option<Span>> {
        let s = self.scanner(text);
        s.check(offset)?;
        block::paragraph_object(&s, offset, scope, count.max(1))
    }

    /// `i(`, `a(` and the other bracket pairs. `count` picks the n-th
    /// enclosing pair.
    pub fn bracket_object<T: TextView + ?Sized>(
        &self,
        text: &T,
        offset: usize,
        bracket: Bracket,
        scope: Scope,
        count: usize,
    ) -> Result<Option<Span>> {
        let s = self.scanner(text);
        s.check(offset)?;
        delimited::bracket_object(&s, offset, bracket, scope, count.max(1))
    }

    /// `i"`, `a"` and the other quotes. Only the line holding `offset` is
    /// searched.
    pub fn quote_object<T: TextView + ?Sized>(
        &self,
        text: &T,
        offset: usize,
        quote: Quote,
        scope: Scope,
    ) -> Result<Option<Span>> {
        let s = self.scanner(text);
        s.check(offset)?;
        delimited::quote_object(&s, offset, quote, scope, self.quote_escape)
    }
}
