use chrono::{DateTime, Utc};
use std::fmt;

use vocab_core::model::{EntryId, MAX_QUESTIONS, Question, QuizResults};

use super::progress::QuizProgress;
use crate::error::QuizError;

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Lifecycle of a quiz as seen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizState {
    NotStarted,
    /// The current question is waiting for an answer.
    InProgress,
    /// The current question was answered; waiting for `advance`.
    AwaitingNext,
    Completed,
}

impl fmt::Display for QuizState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QuizState::NotStarted => "not started",
            QuizState::InProgress => "in progress",
            QuizState::AwaitingNext => "awaiting next question",
            QuizState::Completed => "completed",
        })
    }
}

/// Operations that are only valid in some states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    SubmitAnswer,
    Advance,
    Results,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::SubmitAnswer => "submit an answer",
            Operation::Advance => "advance",
            Operation::Results => "show results",
        })
    }
}

//
// ─── ANSWERS ───────────────────────────────────────────────────────────────────
//

/// What the caller needs to render feedback for one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_answer: String,
    /// Running score after this answer.
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub entry_id: EntryId,
    pub selected: String,
    pub correct: bool,
}

/// Result of moving past an answered question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    Next(Question),
    Completed(QuizResults),
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One run of the quiz from the first question to the results.
///
/// The question list is fixed at creation. Each question accepts exactly one
/// answer, after which the session must be advanced.
pub struct QuizSession {
    questions: Vec<Question>,
    current: usize,
    score: u32,
    answered: bool,
    records: Vec<AnswerRecord>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// # Errors
    ///
    /// Returns `QuizError::EmptyCorpus` if `questions` is empty.
    /// Returns `QuizError::TooManyQuestions` if there are more than `MAX_QUESTIONS`.
    pub fn new(questions: Vec<Question>, started_at: DateTime<Utc>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyCorpus);
        }
        if questions.len() > MAX_QUESTIONS as usize {
            return Err(QuizError::TooManyQuestions {
                len: questions.len(),
                max: MAX_QUESTIONS,
            });
        }
        Ok(Self {
            records: Vec::with_capacity(questions.len()),
            questions,
            current: 0,
            score: 0,
            answered: false,
            started_at,
            completed_at: None,
        })
    }

    #[must_use]
    pub fn state(&self) -> QuizState {
        if self.completed_at.is_some() {
            QuizState::Completed
        } else if self.answered {
            QuizState::AwaitingNext
        } else {
            QuizState::InProgress
        }
    }

    /// The question being shown; `None` once the quiz is completed.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.completed_at.is_some() {
            return None;
        }
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// 0-based index of the current question.
    #[must_use]
    pub fn index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        u32::try_from(self.questions.len()).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn records(&self) -> &[AnswerRecord] {
        &self.records
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        let answered = self.records.len();
        QuizProgress {
            total: self.questions.len(),
            answered,
            remaining: self.questions.len().saturating_sub(answered),
            score: self.score,
            is_complete: self.completed_at.is_some(),
        }
    }

    fn require(&self, operation: Operation, expected: QuizState) -> Result<(), QuizError> {
        let state = self.state();
        if state == expected {
            Ok(())
        } else {
            Err(QuizError::InvalidStateTransition { operation, state })
        }
    }

    /// Grade `selected` against the current question by exact string equality.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidStateTransition` if the current question was
    /// already answered or the quiz is complete.
    pub fn submit_answer(&mut self, selected: &str) -> Result<AnswerOutcome, QuizError> {
        self.require(Operation::SubmitAnswer, QuizState::InProgress)?;
        let question = &self.questions[self.current];

        let correct = question.is_correct(selected);
        if correct {
            self.score += 1;
        }
        self.answered = true;
        self.records.push(AnswerRecord {
            entry_id: question.entry_id(),
            selected: selected.to_owned(),
            correct,
        });

        Ok(AnswerOutcome {
            correct,
            correct_answer: question.correct_answer().to_owned(),
            score: self.score,
        })
    }

    /// Answer with the option at `index` of the current question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::OutOfRangeOption` if `index` is past the option list;
    /// the question stays unanswered. Otherwise as `submit_answer`.
    pub fn submit_option(&mut self, index: usize) -> Result<AnswerOutcome, QuizError> {
        self.require(Operation::SubmitAnswer, QuizState::InProgress)?;
        let question = &self.questions[self.current];
        let selected = question
            .option(index)
            .ok_or(QuizError::OutOfRangeOption {
                index,
                len: question.options().len(),
            })?
            .to_owned();
        self.submit_answer(&selected)
    }

    /// Move past the answered question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidStateTransition` unless the current question
    /// has been answered.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<Advance, QuizError> {
        self.require(Operation::Advance, QuizState::AwaitingNext)?;
        self.current += 1;
        self.answered = false;

        match self.questions.get(self.current) {
            Some(next) => Ok(Advance::Next(next.clone())),
            None => {
                self.completed_at = Some(now.max(self.started_at));
                Ok(Advance::Completed(self.results()?))
            }
        }
    }

    /// # Errors
    ///
    /// Returns `QuizError::InvalidStateTransition` unless the quiz is completed.
    pub fn results(&self) -> Result<QuizResults, QuizError> {
        self.require(Operation::Results, QuizState::Completed)?;
        let completed_at = self.completed_at.unwrap_or(self.started_at);
        Ok(QuizResults::new(
            self.score,
            self.total(),
            self.started_at,
            completed_at,
        )?)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("score", &self.score)
            .field("answered", &self.answered)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
