//! Shared error types for the services crate.

use thiserror::Error;

use vocab_core::model::ResultsError;

use crate::quiz::{Operation, QuizState};

/// Errors emitted by the quiz engine and session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no vocabulary available to build a quiz")]
    EmptyCorpus,
    #[error("cannot {operation} while the quiz is {state}")]
    InvalidStateTransition {
        operation: Operation,
        state: QuizState,
    },
    #[error("a quiz holds at most {max} questions, got {len}")]
    TooManyQuestions { len: usize, max: u32 },
    #[error("option {index} is out of range (question has {len} options)")]
    OutOfRangeOption { index: usize, len: usize },
    #[error(transparent)]
    Results(#[from] ResultsError),
}

/// Errors emitted by speech backends.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SpeechError {
    #[error("speech synthesis is not available")]
    Unavailable,
    #[error("speech backend failed: {0}")]
    Backend(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
