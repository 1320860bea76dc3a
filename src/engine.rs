use tracing::trace;

use crate::error::{MotionError, Result};
use crate::key::{InputEvent, KeyCode, KeyEvent};
use crate::motion::{MotionEngine, MotionKind};
use crate::objects::{Scope, TextObject};
use crate::traits::TextView;
use crate::types::{Command, Direction, Inclusivity, Mode, Operator, Query, Span};

#[derive(Debug, Default, Clone)]
struct Counts {
    current: Option<usize>,
    // Count typed before the operator, as the 2 in `2d3w`.
    operator: Option<usize>,
}

impl Counts {
    fn push_digit(&mut self, d: usize) {
        let next = self
            .current
            .unwrap_or(0)
            .saturating_mul(10)
            .saturating_add(d);
        self.current = Some(next);
    }

    fn stash_for_operator(&mut self) {
        self.operator = self.current.take();
    }

    /// Effective count: the motion count times the operator count.
    fn take(&mut self) -> usize {
        let motion = self.current.take().unwrap_or(1);
        let operator = self.operator.take().unwrap_or(1);
        motion.saturating_mul(operator).max(1)
    }

    fn clear(&mut self) {
        self.current = None;
        self.operator = None;
    }
}

#[derive(Debug, Clone, Copy)]
enum PendingKey {
    None,
    G, // for `ge` and `gE`
    Object(Scope),
}

/// Modal command layer: turns keys into motion and text-object queries and
/// reports the outcome as [`Command`]s.
#[derive(Debug, Clone)]
pub struct Engine {
    mode: Mode,
    counts: Counts,
    pending: PendingKey,
    anchor: Option<usize>,
    motions: MotionEngine,
}

#[derive(Debug, Clone)]
pub struct EngineSnapshot {
    pub mode: Mode,
    pub pending_count: Option<usize>,
    pub visual_anchor: Option<usize>,
}

pub struct EngineBuilder {
    mode: Mode,
    motions: MotionEngine,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            mode: Mode::Normal,
            motions: MotionEngine::default(),
        }
    }
}

impl EngineBuilder {
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn motions(mut self, motions: MotionEngine) -> Self {
        self.motions = motions;
        self
    }

    pub fn build(self) -> Engine {
        Engine {
            mode: self.mode,
            counts: Counts::default(),
            pending: PendingKey::None,
            anchor: None,
            motions: self.motions,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        EngineBuilder::default().build()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn motions(&self) -> &MotionEngine {
        &self.motions
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            mode: self.mode,
            pending_count: self.counts.current,
            visual_anchor: self.anchor,
        }
    }

    /// Handles one input against a snapshot of the buffer with the cursor at
    /// `cursor`. Returns the new cursor offset and the commands the host
    /// should apply.
    pub fn handle_event<T: TextView + ?Sized>(
        &mut self,
        text: &T,
        cursor: usize,
        input: InputEvent,
    ) -> Result<(usize, Vec<Command>)> {
        trace!(?input, mode = ?self.mode, cursor, "handle event");
        let len = text.len();
        if cursor > len {
            return Err(MotionError::OutOfRange {
                offset: cursor,
                len,
            });
        }

        match (self.mode, input) {
            (
                _,
                InputEvent::Key(KeyEvent {
                    code: KeyCode::Esc, ..
                }),
            ) => self.escape(text, cursor),
            (Mode::Insert | Mode::Replace, InputEvent::ReceivedChar(_)) => {
                // The host writes the character; the cursor moves past it.
                let pos = cursor + 1;
                Ok((pos, vec![Command::SetCursor(pos)]))
            }
            (Mode::Insert | Mode::Replace, InputEvent::Key(_)) => Ok((cursor, vec![])),
            (_, InputEvent::ReceivedChar(_)) => Ok((cursor, vec![])),
            (_, InputEvent::Key(key)) if key.mods.is_chord() => Ok(self.cancel(cursor)),
            (
                _,
                InputEvent::Key(KeyEvent {
                    code: KeyCode::Char(c),
                    ..
                }),
            ) => self.command_key(text, cursor, c),
        }
    }

    fn command_key<T: TextView + ?Sized>(
        &mut self,
        text: &T,
        cursor: usize,
        c: char,
    ) -> Result<(usize, Vec<Command>)> {
        match self.pending {
            PendingKey::Object(scope) => {
                self.pending = PendingKey::None;
                return self.apply_object(text, cursor, c, scope);
            }
            PendingKey::G => {
                self.pending = PendingKey::None;
                let kind = match c {
                    'e' => Some(MotionKind::WordEnd),
                    'E' => Some(MotionKind::BigWordEnd),
                    // Anything else is processed normally.
                    _ => None,
                };
                if let Some(kind) = kind {
                    return self.apply_motion(text, cursor, kind, Direction::Backward);
                }
            }
            PendingKey::None => {}
        }

        // Count digits; a leading zero is the line-start motion.
        if let Some(d) = c.to_digit(10)
            && !(d == 0 && self.counts.current.is_none())
        {
            self.counts.push_digit(d as usize);
            return Ok((cursor, vec![]));
        }

        if let Some((kind, direction)) = motion_key(c) {
            return self.apply_motion(text, cursor, kind, direction);
        }

        match c {
            '0' => {
                let (start, _) = text.line_bounds(cursor)?;
                self.counts.clear();
                if start == cursor {
                    return Ok(self.cancel(cursor));
                }
                self.land(cursor, start, Inclusivity::Exclusive)
            }
            'g' => {
                self.pending = PendingKey::G;
                Ok((cursor, vec![]))
            }
            'd' => Ok(self.operator_key(cursor, Operator::Delete)),
            'c' => Ok(self.operator_key(cursor, Operator::Change)),
            'y' => Ok(self.operator_key(cursor, Operator::Yank)),
            'i' | 'a' => {
                let scope = if c == 'i' { Scope::Inner } else { Scope::Around };
                match self.mode {
                    Mode::Visual | Mode::OperatorPending(_) => {
                        self.pending = PendingKey::Object(scope);
                        Ok((cursor, vec![]))
                    }
                    _ => {
                        self.counts.clear();
                        let pos = if c == 'a' {
                            (cursor + 1).min(text.len())
                        } else {
                            cursor
                        };
                        self.mode = Mode::Insert;
                        Ok((pos, vec![Command::SetCursor(pos), Command::SetMode(Mode::Insert)]))
                    }
                }
            }
            'v' => Ok(self.toggle_visual(cursor)),
            'R' if self.mode == Mode::Normal => {
                self.counts.clear();
                self.mode = Mode::Replace;
                Ok((cursor, vec![Command::SetMode(Mode::Replace)]))
            }
            _ => Ok(self.cancel(cursor)),
        }
    }

    fn apply_motion<T: TextView + ?Sized>(
        &mut self,
        text: &T,
        cursor: usize,
        kind: MotionKind,
        direction: Direction,
    ) -> Result<(usize, Vec<Command>)> {
        let count = self.counts.take();
        let inclusive_kind = matches!(kind, MotionKind::WordEnd | MotionKind::BigWordEnd);
        // The cursor always rests on a character; operators respect the
        // motion's own inclusivity.
        let inclusivity = match self.mode {
            Mode::OperatorPending(_) if !inclusive_kind => Inclusivity::Exclusive,
            _ => Inclusivity::Inclusive,
        };
        let query = Query {
            offset: cursor,
            count,
            direction,
            inclusivity,
        };
        match self.motions.motion(text, kind, query)? {
            Some(target) => self.land(cursor, target, inclusivity),
            None => Ok(self.cancel(cursor)),
        }
    }

    fn land(
        &mut self,
        cursor: usize,
        target: usize,
        inclusivity: Inclusivity,
    ) -> Result<(usize, Vec<Command>)> {
        match self.mode {
            Mode::OperatorPending(op) => {
                let span = match inclusivity {
                    Inclusivity::Inclusive => Span::inclusive(cursor, target),
                    Inclusivity::Exclusive => Span::exclusive(cursor, target),
                };
                Ok(self.operate(op, span))
            }
            Mode::Visual => {
                let anchor = self.anchor.unwrap_or(cursor);
                let selection = Span::inclusive(anchor, target);
                Ok((
                    target,
                    vec![
                        Command::SetCursor(target),
                        Command::SetSelection(Some(selection)),
                    ],
                ))
            }
            _ => Ok((target, vec![Command::SetCursor(target)])),
        }
    }

    fn apply_object<T: TextView + ?Sized>(
        &mut self,
        text: &T,
        cursor: usize,
        key: char,
        scope: Scope,
    ) -> Result<(usize, Vec<Command>)> {
        let count = self.counts.take();
        let Some(object) = TextObject::from_key(key, scope) else {
            return Ok(self.cancel(cursor));
        };
        let Some(span) = self.motions.text_object(text, object, cursor, count)? else {
            return Ok(self.cancel(cursor));
        };

        match self.mode {
            Mode::OperatorPending(op) => Ok(self.operate(op, span)),
            Mode::Visual => {
                let pos = span.end_exclusive().saturating_sub(1).max(span.begin);
                self.anchor = Some(span.begin);
                Ok((
                    pos,
                    vec![Command::SetCursor(pos), Command::SetSelection(Some(span))],
                ))
            }
            _ => Ok((cursor, vec![])),
        }
    }

    fn operator_key(&mut self, cursor: usize, op: Operator) -> (usize, Vec<Command>) {
        match self.mode {
            Mode::Normal => {
                self.counts.stash_for_operator();
                self.mode = Mode::OperatorPending(op);
                (cursor, vec![Command::SetMode(self.mode)])
            }
            Mode::Visual => {
                let anchor = self.anchor.unwrap_or(cursor);
                let (pos, mut cmds) = self.operate(op, Span::inclusive(anchor, cursor));
                cmds.insert(1, Command::SetSelection(None));
                (pos, cmds)
            }
            // Linewise doubling (`dd`) is outside the motion grammar.
            _ => self.cancel(cursor),
        }
    }

    fn operate(&mut self, op: Operator, span: Span) -> (usize, Vec<Command>) {
        let next = match op {
            Operator::Change => Mode::Insert,
            Operator::Delete | Operator::Yank => Mode::Normal,
        };
        self.mode = next;
        self.anchor = None;
        self.counts.clear();
        let pos = span.begin;
        (
            pos,
            vec![
                Command::Operate { op, span },
                Command::SetCursor(pos),
                Command::SetMode(next),
            ],
        )
    }

    fn toggle_visual(&mut self, cursor: usize) -> (usize, Vec<Command>) {
        self.counts.clear();
        match self.mode {
            Mode::Normal => {
                self.mode = Mode::Visual;
                self.anchor = Some(cursor);
                (
                    cursor,
                    vec![
                        Command::SetMode(Mode::Visual),
                        Command::SetSelection(Some(Span::inclusive(cursor, cursor))),
                    ],
                )
            }
            Mode::Visual => {
                self.mode = Mode::Normal;
                self.anchor = None;
                (
                    cursor,
                    vec![Command::SetSelection(None), Command::SetMode(Mode::Normal)],
                )
            }
            _ => self.cancel(cursor),
        }
    }

    /// Drops pending keys and counts. A pending operator is abandoned.
    fn cancel(&mut self, cursor: usize) -> (usize, Vec<Command>) {
        self.counts.clear();
        self.pending = PendingKey::None;
        if let Mode::OperatorPending(_) = self.mode {
            self.mode = Mode::Normal;
            return (cursor, vec![Command::SetMode(Mode::Normal)]);
        }
        (cursor, vec![])
    }

    fn escape<T: TextView + ?Sized>(
        &mut self,
        text: &T,
        cursor: usize,
    ) -> Result<(usize, Vec<Command>)> {
        self.counts.clear();
        self.pending = PendingKey::None;
        let mut pos = cursor;
        let mut cmds = Vec::new();
        match self.mode {
            Mode::Normal => return Ok((cursor, cmds)),
            Mode::Visual => {
                self.anchor = None;
                cmds.push(Command::SetSelection(None));
            }
            // Leaving insert steps back onto the last typed character.
            Mode::Insert | Mode::Replace => {
                let (line_start, _) = text.line_bounds(cursor)?;
                if cursor > line_start {
                    pos = cursor - 1;
                    cmds.push(Command::SetCursor(pos));
                }
            }
            Mode::OperatorPending(_) => {}
        }
        self.mode = Mode::Normal;
        cmds.push(Command::SetMode(Mode::Normal));
        Ok((pos, cmds))
    }
}

/// Motion and direction bound to a plain key.
fn motion_key(c: char) -> Option<(MotionKind, Direction)> {
    let motion = match c {
        'w' => (MotionKind::WordBegin, Direction::Forward),
        'b' => (MotionKind::WordBegin, Direction::Backward),
        'W' => (MotionKind::BigWordBegin, Direction::Forward),
        'B' => (MotionKind::BigWordBegin, Direction::Backward),
        'e' => (MotionKind::WordEnd, Direction::Forward),
        'E' => (MotionKind::BigWordEnd, Direction::Forward),
        ')' => (MotionKind::Sentence, Direction::Forward),
        '(' => (MotionKind::Sentence, Direction::Backward),
        '}' => (MotionKind::Paragraph, Direction::Forward),
        '{' => (MotionKind::Paragraph, Direction::Backward),
        _ => return None,
    };
    Some(motion)
}
