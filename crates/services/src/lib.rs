#![forbid(unsafe_code)]

pub mod error;
pub mod quiz;
pub mod speech;

pub use vocab_core::Clock;

pub use error::{QuizError, SpeechError};
pub use quiz::{
    Advance, AnswerOutcome, AnswerRecord, Operation, QuestionGenerator, QuizEngine, QuizProgress,
    QuizSession, QuizState, sample_options,
};
pub use speech::{
    PronunciationDisplay, SpeechBackend, SpeechOutcome, SpeechService, SpeechSettings, Utterance,
    Voice,
};
