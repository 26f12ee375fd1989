//! Error types for message packing.

use thiserror::Error;

/// Reasons a text message cannot be packed into an FT8 payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    /// Nothing but whitespace
    #[error("message is empty")]
    Empty,

    /// Not a standard message, and free text does not allow this character
    #[error("unsupported character '{0}' in free text")]
    InvalidCharacter(char),

    /// Not a standard message, and too long for free text
    #[error("free text is {len} characters, at most {max} fit")]
    TooLong {
        /// Characters in the normalized message.
        len: usize,
        /// Free-text capacity.
        max: usize,
    },
}

impl PackError {
    /// Negative status code reported by the command-line tool.
    pub fn code(&self) -> i32 {
        match self {
            PackError::Empty => -1,
            PackError::InvalidCharacter(_) => -2,
            PackError::TooLong { .. } => -3,
        }
    }
}
