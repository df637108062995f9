use thiserror::Error;

/// Hard cap on questions in one quiz.
pub const MAX_QUESTIONS: u32 = 15;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("question limit must be between 1 and {MAX_QUESTIONS}, got {0}")]
    InvalidQuestionLimit(u32),
}

/// Configuration for building a quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSettings {
    question_limit: u32,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            question_limit: MAX_QUESTIONS,
        }
    }
}

impl QuizSettings {
    /// Creates settings with a custom question limit.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidQuestionLimit` if the limit is zero or above `MAX_QUESTIONS`.
    pub fn new(question_limit: u32) -> Result<Self, SettingsError> {
        if question_limit == 0 || question_limit > MAX_QUESTIONS {
            return Err(SettingsError::InvalidQuestionLimit(question_limit));
        }
        Ok(Self { question_limit })
    }

    #[must_use]
    pub fn question_limit(&self) -> u32 {
        self.question_limit
    }
}
