use std::fmt::{self, Display, Formatter};

/// External input that could not be turned into a legal action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidMoveError {
    pub input: String,
    pub reason: String,
}

impl InvalidMoveError {
    pub fn new(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

impl Display for InvalidMoveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid move '{}': {}", self.input, self.reason)
    }
}

impl std::error::Error for InvalidMoveError {}
