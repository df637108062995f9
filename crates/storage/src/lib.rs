#![forbid(unsafe_code)]

pub mod builtin;
pub mod json;
pub mod repository;

pub use builtin::BuiltinSource;
pub use json::JsonFileSource;
pub use repository::{InMemorySource, StorageError, VocabularySource, load_vocabulary};
