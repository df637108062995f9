use std::collections::HashSet;
use thiserror::Error;

use crate::model::category::Category;
use crate::model::ids::EntryId;

/// Upper bound on answer options per question (the correct answer plus three distractors).
pub const MAX_OPTIONS: usize = 4;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("correct answer must appear exactly once among the options (found {found})")]
    CorrectAnswerCount { found: usize },

    #[error("duplicate option: {0}")]
    DuplicateOption(String),

    #[error("too many options: {len} (max {MAX_OPTIONS})")]
    TooManyOptions { len: usize },
}

/// A multiple-choice question built from a single vocabulary entry.
///
/// The option list may hold fewer than `MAX_OPTIONS` entries when the source
/// category does not have enough distinct answers; callers must not assume a
/// fixed width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    entry_id: EntryId,
    category: Category,
    prompt: String,
    correct_answer: String,
    options: Vec<String>,
}

impl Question {
    /// Build a question, checking the option invariants.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt is blank, the correct answer is not
    /// present exactly once, options repeat, or there are more than `MAX_OPTIONS`.
    pub fn new(
        entry_id: EntryId,
        category: Category,
        prompt: impl Into<String>,
        correct_answer: impl Into<String>,
        options: Vec<String>,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        let correct_answer = correct_answer.into();

        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if options.len() > MAX_OPTIONS {
            return Err(QuestionError::TooManyOptions { len: options.len() });
        }

        let mut seen = HashSet::with_capacity(options.len());
        for option in &options {
            if !seen.insert(option.as_str()) {
                return Err(QuestionError::DuplicateOption(option.clone()));
            }
        }

        let found = options.iter().filter(|o| **o == correct_answer).count();
        if found != 1 {
            return Err(QuestionError::CorrectAnswerCount { found });
        }

        Ok(Self {
            entry_id,
            category,
            prompt,
            correct_answer,
            options,
        })
    }

    #[must_use]
    pub fn entry_id(&self) -> EntryId {
        self.entry_id
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    /// Exact string comparison against the correct answer.
    #[must_use]
    pub fn is_correct(&self, selected: &str) -> bool {
        selected == self.correct_answer
    }
}
