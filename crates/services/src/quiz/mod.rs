mod engine;
mod generator;
mod progress;
mod sampler;
mod session;

// Public API of the quiz subsystem.
pub use engine::QuizEngine;
pub use generator::QuestionGenerator;
pub use progress::QuizProgress;
pub use sampler::sample_options;
pub use session::{Advance, AnswerOutcome, AnswerRecord, Operation, QuizSession, QuizState};
