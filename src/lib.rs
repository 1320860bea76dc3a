pub mod classify;
pub mod engine;
pub mod error;
pub mod key;
pub mod motion;
pub mod objects;
mod scan;
pub mod traits;
pub mod types;

pub use crate::classify::{CharClass, Classifier};
pub use crate::engine::{Engine, EngineBuilder, EngineSnapshot};
pub use crate::error::{MotionError, Result};
pub use crate::key::{InputEvent, KeyCode, KeyEvent, Modifiers};
pub use crate::motion::{MotionEngine, MotionEngineBuilder, MotionKind};
pub use crate::objects::{Bracket, Quote, Scope, TextObject};
pub use crate::traits::{CharBuffer, TextView};
pub use crate::types::{
    Command, Direction, Inclusivity, Mode, Operator, Query, Span, WordKind,
};
