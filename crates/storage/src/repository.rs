use std::path::PathBuf;

use thiserror::Error;
use vocab_core::model::VocabularyStore;

/// Errors surfaced by vocabulary sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed vocabulary document: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Anything that can produce a vocabulary store.
pub trait VocabularySource {
    /// Short description used in log lines.
    fn describe(&self) -> String;

    /// Load the full store.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the underlying data cannot be read or parsed.
    fn load(&self) -> Result<VocabularyStore, StorageError>;
}

/// Load vocabulary, falling back to an empty store on failure.
///
/// An empty store is a valid input to the quiz; it produces zero questions
/// and the quiz reports an empty corpus when started.
#[must_use]
pub fn load_vocabulary(source: &dyn VocabularySource) -> VocabularyStore {
    match source.load() {
        Ok(store) => {
            tracing::info!(
                source = %source.describe(),
                entries = store.len(),
                "vocabulary loaded"
            );
            store
        }
        Err(err) => {
            tracing::warn!(
                source = %source.describe(),
                error = %err,
                "failed to load vocabulary, using an empty store"
            );
            VocabularyStore::empty()
        }
    }
}

/// Source backed by a store that is already in memory, for tests and prototyping.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    store: VocabularyStore,
}

impl InMemorySource {
    #[must_use]
    pub fn new(store: VocabularyStore) -> Self {
        Self { store }
    }
}

impl VocabularySource for InMemorySource {
    fn describe(&self) -> String {
        "in-memory".to_string()
    }

    fn load(&self) -> Result<VocabularyStore, StorageError> {
        Ok(self.store.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vocab_core::model::{Category, EntryDetails, EntryDraft};

    struct FailingSource;

    impl VocabularySource for FailingSource {
        fn describe(&self) -> String {
            "failing".to_string()
        }

        fn load(&self) -> Result<VocabularyStore, StorageError> {
            Err(StorageError::Io {
                path: PathBuf::from("missing.json"),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            })
        }
    }

    #[test]
    fn load_vocabulary_falls_back_to_empty_store() {
        let store = load_vocabulary(&FailingSource);
        assert!(store.is_empty());
    }

    #[test]
    fn in_memory_source_returns_its_store() {
        let mut builder = VocabularyStore::builder();
        builder
            .push(
                Category::BasicWords,
                EntryDraft::new(
                    "ус",
                    "us",
                    EntryDetails::Phrase {
                        english: "water".into(),
                    },
                ),
            )
            .unwrap();
        let store = builder.build();

        let loaded = load_vocabulary(&InMemorySource::new(store.clone()));
        assert_eq!(loaded, store);
    }
}
