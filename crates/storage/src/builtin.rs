use vocab_core::model::VocabularyStore;

use crate::json::parse_document;
use crate::repository::{StorageError, VocabularySource};

const MONGOLIAN_JSON: &str = include_str!("../data/mongolian.json");

/// The Mongolian dataset bundled with the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

impl VocabularySource for BuiltinSource {
    fn describe(&self) -> String {
        "builtin:mongolian".to_string()
    }

    fn load(&self) -> Result<VocabularyStore, StorageError> {
        parse_document(MONGOLIAN_JSON)
    }
}
