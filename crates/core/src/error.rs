use thiserror::Error;

use crate::model::{EntryError, QuestionError, ResultsError, SettingsError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Entry(#[from] EntryError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Results(#[from] ResultsError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}
