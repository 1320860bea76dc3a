use std::ops::Range;

/// Direction of a motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// Small words split on Word/Punctuation changes; WORDs only on blanks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordKind {
    #[default]
    Small,
    Big,
}

/// Whether the landing offset is part of the affected range.
///
/// Also decides where a forward motion clamps when it runs off the end of the
/// buffer: exclusive motions stop at `len`, inclusive ones on the last
/// character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Inclusivity {
    Inclusive,
    #[default]
    Exclusive,
}

/// A single motion request.
///
/// `count` is the number of times the atomic motion is repeated; it is never
/// less than one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    pub offset: usize,
    pub count: usize,
    pub direction: Direction,
    pub inclusivity: Inclusivity,
}

impl Query {
    pub fn forward(offset: usize) -> Self {
        Self {
            offset,
            count: 1,
            direction: Direction::Forward,
            inclusivity: Inclusivity::default(),
        }
    }

    pub fn backward(offset: usize) -> Self {
        Self {
            direction: Direction::Backward,
            ..Self::forward(offset)
        }
    }

    pub fn count(mut self, count: usize) -> Self {
        self.count = count.max(1);
        self
    }

    pub fn inclusive(mut self) -> Self {
        self.inclusivity = Inclusivity::Inclusive;
        self
    }

    pub fn exclusive(mut self) -> Self {
        self.inclusivity = Inclusivity::Exclusive;
        self
    }

    pub fn with_inclusivity(mut self, inclusivity: Inclusivity) -> Self {
        self.inclusivity = inclusivity;
        self
    }
}

/// A range of offsets produced by a text object or an operator motion.
///
/// `begin <= end` always holds. When `inclusive` is set, the character at
/// `end` is part of the span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub begin: usize,
    pub end: usize,
    pub inclusive: bool,
}

impl Span {
    /// Half-open span `[begin, end)`.
    pub fn exclusive(begin: usize, end: usize) -> Self {
        Self {
            begin: begin.min(end),
            end: begin.max(end),
            inclusive: false,
        }
    }

    /// Closed span `[begin, end]`.
    pub fn inclusive(begin: usize, end: usize) -> Self {
        Self {
            begin: begin.min(end),
            end: begin.max(end),
            inclusive: true,
        }
    }

    pub fn end_exclusive(&self) -> usize {
        if self.inclusive {
            self.end.saturating_add(1)
        } else {
            self.end
        }
    }

    pub fn len(&self) -> usize {
        self.end_exclusive().saturating_sub(self.begin)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_range(&self) -> Range<usize> {
        self.begin..self.end_exclusive()
    }
}

/// The current mode of the command layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Insert,
    Replace,
    Visual,
    /// An operator was typed and is waiting for its motion or text object.
    OperatorPending(Operator),
}

/// Operators that consume a motion or text object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Delete,
    Change,
    Yank,
}

/// Commands emitted by the command layer for the host to execute.
///
/// The engine never edits text itself; the host applies these to its buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor to an offset.
    SetCursor(usize),
    /// Set or clear the visual selection.
    SetSelection(Option<Span>),
    /// Apply an operator to a span.
    Operate { op: Operator, span: Span },
    /// The mode changed.
    SetMode(Mode),
}
