use rand::Rng;
use rand::rngs::ThreadRng;

use vocab_core::model::{Question, QuizResults, QuizSettings, VocabularyStore};

use super::generator::QuestionGenerator;
use super::progress::QuizProgress;
use super::session::{Advance, AnswerOutcome, Operation, QuizSession, QuizState};
use crate::Clock;
use crate::error::QuizError;

/// Drives quizzes over a vocabulary store: start, answer, advance, results.
///
/// At most one quiz is live at a time. Starting again discards whatever was
/// in progress.
pub struct QuizEngine<R = ThreadRng> {
    rng: R,
    clock: Clock,
    generator: QuestionGenerator,
    session: Option<QuizSession>,
}

impl QuizEngine<ThreadRng> {
    #[must_use]
    pub fn new(settings: &QuizSettings) -> Self {
        Self::with_rng(settings, rand::rng())
    }
}

impl<R: Rng> QuizEngine<R> {
    /// Engine with a caller-supplied random source, seeded in tests.
    #[must_use]
    pub fn with_rng(settings: &QuizSettings, rng: R) -> Self {
        Self {
            rng,
            clock: Clock::default(),
            generator: QuestionGenerator::new(settings),
            session: None,
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    /// Build a fresh question list and show the first question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyCorpus` if the store yields no questions; the
    /// engine is then back in `NotStarted`.
    pub fn start(&mut self, store: &VocabularyStore) -> Result<&Question, QuizError> {
        if self.session.take().is_some() {
            tracing::debug!("discarding quiz in progress");
        }

        let questions = self.generator.generate(store, &mut self.rng);
        let session = QuizSession::new(questions, self.clock.now())?;
        tracing::info!(questions = session.questions().len(), "quiz started");

        let session = self.session.insert(session);
        session.current_question().ok_or(QuizError::EmptyCorpus)
    }

    fn live(&mut self, operation: Operation) -> Result<&mut QuizSession, QuizError> {
        self.session
            .as_mut()
            .ok_or(QuizError::InvalidStateTransition {
                operation,
                state: QuizState::NotStarted,
            })
    }

    /// # Errors
    ///
    /// Returns `QuizError::InvalidStateTransition` unless a question is waiting
    /// for an answer.
    pub fn submit_answer(&mut self, selected: &str) -> Result<AnswerOutcome, QuizError> {
        let outcome = self.live(Operation::SubmitAnswer)?.submit_answer(selected)?;
        tracing::debug!(correct = outcome.correct, score = outcome.score, "answer graded");
        Ok(outcome)
    }

    /// # Errors
    ///
    /// Returns `QuizError::OutOfRangeOption` for an index past the options, or
    /// `QuizError::InvalidStateTransition` as `submit_answer`.
    pub fn submit_option(&mut self, index: usize) -> Result<AnswerOutcome, QuizError> {
        let outcome = self.live(Operation::SubmitAnswer)?.submit_option(index)?;
        tracing::debug!(correct = outcome.correct, score = outcome.score, "answer graded");
        Ok(outcome)
    }

    /// # Errors
    ///
    /// Returns `QuizError::InvalidStateTransition` unless the current question
    /// has been answered.
    pub fn advance(&mut self) -> Result<Advance, QuizError> {
        let now = self.clock.now();
        let step = self.live(Operation::Advance)?.advance(now)?;
        if let Advance::Completed(results) = &step {
            tracing::info!(
                score = results.score(),
                total = results.total(),
                percentage = results.percentage(),
                "quiz completed"
            );
        }
        Ok(step)
    }

    /// # Errors
    ///
    /// Returns `QuizError::InvalidStateTransition` unless the quiz is completed.
    pub fn results(&self) -> Result<QuizResults, QuizError> {
        match &self.session {
            Some(session) => session.results(),
            None => Err(QuizError::InvalidStateTransition {
                operation: Operation::Results,
                state: QuizState::NotStarted,
            }),
        }
    }

    #[must_use]
    pub fn state(&self) -> QuizState {
        self.session
            .as_ref()
            .map_or(QuizState::NotStarted, QuizSession::state)
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.session.as_ref().and_then(QuizSession::current_question)
    }

    #[must_use]
    pub fn progress(&self) -> Option<QuizProgress> {
        self.session.as_ref().map(QuizSession::progress)
    }

    #[must_use]
    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }
}

impl<R> std::fmt::Debug for QuizEngine<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizEngine")
            .field("clock", &self.clock)
            .field("generator", &self.generator)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
