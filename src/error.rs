use thiserror::Error;

/// Errors surfaced by motion and text-object queries.
///
/// Only caller mistakes are errors. A motion or object that simply does not
/// exist at the given position is reported as `Ok(None)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MotionError {
    /// The offset lies outside the buffer.
    #[error("offset {offset} is out of range for a buffer of length {len}")]
    OutOfRange { offset: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, MotionError>;
