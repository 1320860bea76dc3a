/// Keys the command layer reacts to.
///
/// Hosts map their platform key events onto these codes. Motions, operators
/// and text objects all arrive as `Char`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    /// A character key, case preserved: `w` and `W` are different motions.
    Char(char),
    /// Leaves any mode and drops pending counts or operators.
    Esc,
}

bitflags::bitflags! {
    /// Keyboard modifier flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const CTRL  = 0b0010;
        const ALT   = 0b0100;
        const META  = 0b1000;
    }
}

impl Modifiers {
    /// Modifiers that turn a character key into a chord the motion grammar
    /// does not understand. Shift is not one of them; it is already folded
    /// into the character.
    pub fn is_chord(self) -> bool {
        self.intersects(Modifiers::CTRL | Modifiers::ALT | Modifiers::META)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub mods: Modifiers,
}

impl KeyEvent {
    pub fn new(code: KeyCode, mods: Modifiers) -> Self {
        Self { code, mods }
    }

    /// An unmodified character key.
    pub fn char(c: char) -> Self {
        Self::new(KeyCode::Char(c), Modifiers::empty())
    }

    pub fn esc() -> Self {
        Self::new(KeyCode::Esc, Modifiers::empty())
    }
}

impl From<char> for KeyEvent {
    fn from(c: char) -> Self {
        Self::char(c)
    }
}

/// Input delivered to [`Engine::handle_event`](crate::Engine::handle_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A key press in a command mode (Normal, Visual, operator-pending).
    Key(KeyEvent),
    /// Text typed in Insert or Replace mode. The host inserts it; the engine
    /// only tracks the cursor.
    ReceivedChar(char),
}

impl From<KeyEvent> for InputEvent {
    fn from(key: KeyEvent) -> Self {
        InputEvent::Key(key)
    }
}
