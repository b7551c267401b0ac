//! Error types for quizdesk-core.
//!
//! Load and save failures carry the file path; format failures carry the
//! 1-based line number of the offending record so the caller can point the
//! user at it.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using [`QuizError`].
pub type Result<T> = std::result::Result<T, QuizError>;

/// Errors raised by the codec, the store, and the quiz engine.
#[derive(Debug, Error)]
pub enum QuizError {
    /// A data file was missing or could not be read.
    #[error("failed to load {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data file could not be written.
    #[error("failed to save {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record line was malformed.
    #[error("line {line}: {message}")]
    Format { line: usize, message: String },

    /// A data file was read but one of its records was malformed.
    #[error("malformed data in {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: Box<QuizError>,
    },

    /// A caller broke an operation's contract (programming error).
    #[error("precondition violated: {0}")]
    Precondition(String),

    /// Registration input was rejected.
    #[error("registration rejected: {0}")]
    Registration(String),

    /// The answer source failed to produce a choice.
    #[error("failed to read answer: {0}")]
    Interaction(#[source] std::io::Error),
}

impl QuizError {
    pub(crate) fn format(line: usize, message: impl Into<String>) -> Self {
        QuizError::Format {
            line,
            message: message.into(),
        }
    }

    /// Returns `true` for malformed-content errors, including ones wrapped
    /// with the path of the file they came from.
    pub fn is_format(&self) -> bool {
        match self {
            QuizError::Format { .. } => true,
            QuizError::Malformed { source, .. } => source.is_format(),
            _ => false,
        }
    }

    /// Returns `true` when the underlying file could not be opened.
    pub fn is_load(&self) -> bool {
        matches!(self, QuizError::Load { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_wraps_format() {
        let err = QuizError::Malformed {
            path: PathBuf::from("users.txt"),
            source: Box::new(QuizError::format(3, "missing field `age`")),
        };
        assert!(err.is_format());
        assert!(!err.is_load());
        assert_eq!(
            err.to_string(),
            "malformed data in users.txt: line 3: missing field `age`"
        );
    }
}
