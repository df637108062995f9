mod category;
mod entry;
mod ids;
mod question;
mod score;
mod settings;
mod store;

pub use category::{Category, Field, QuestionTemplate};
pub use entry::{EntryDetails, EntryDraft, EntryError, VocabularyEntry};
pub use ids::EntryId;
pub use question::{MAX_OPTIONS, Question, QuestionError};
pub use score::{FeedbackTier, QuizResults, ResultsError, percentage};
pub use settings::{MAX_QUESTIONS, QuizSettings, SettingsError};
pub use store::{DEFAULT_LANGUAGE, VocabularyStore, VocabularyStoreBuilder};
