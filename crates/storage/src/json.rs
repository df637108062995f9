//! JSON vocabulary documents.
//!
//! The document mirrors the layout of the static data the cards are rendered
//! from: one array per section, camelCase keys, with the alphabet nested under
//! `alphabet.cyrillic`. Romantic and cultural phrases are separate arrays in
//! the document but feed the same quiz category.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use vocab_core::model::{Category, EntryDetails, EntryDraft, VocabularyStore};

use crate::repository::{StorageError, VocabularySource};

//
// ─── DOCUMENT SHAPE ────────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VocabularyDocument {
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    alphabet: AlphabetSection,
    #[serde(default)]
    numbers: Vec<NumberRecord>,
    #[serde(default)]
    basic_words: Vec<PhraseRecord>,
    #[serde(default)]
    travel_phrases: Vec<PhraseRecord>,
    #[serde(default)]
    essential_verbs: Vec<VerbRecord>,
    #[serde(default)]
    travel_vocabulary: Vec<PhraseRecord>,
    #[serde(default)]
    romantic_phrases: Vec<PhraseRecord>,
    #[serde(default)]
    cultural_phrases: Vec<PhraseRecord>,
}

#[derive(Debug, Default, Deserialize)]
struct AlphabetSection {
    #[serde(default)]
    cyrillic: Vec<LetterRecord>,
}

#[derive(Debug, Deserialize)]
struct LetterRecord {
    letter: String,
    pronunciation: String,
    #[serde(default)]
    ipa: Option<String>,
    #[serde(default)]
    example: String,
}

#[derive(Debug, Deserialize)]
struct NumberRecord {
    number: u32,
    mongolian: String,
    pronunciation: String,
    #[serde(default)]
    ipa: Option<String>,
    english: String,
}

#[derive(Debug, Deserialize)]
struct PhraseRecord {
    mongolian: String,
    pronunciation: String,
    #[serde(default)]
    ipa: Option<String>,
    english: String,
}

#[derive(Debug, Deserialize)]
struct VerbRecord {
    mongolian: String,
    pronunciation: String,
    #[serde(default)]
    ipa: Option<String>,
    english: String,
    present: String,
    #[serde(default)]
    past: String,
    #[serde(default)]
    future: String,
}

fn draft(term: String, pronunciation: String, ipa: Option<String>, details: EntryDetails) -> EntryDraft {
    EntryDraft {
        term,
        pronunciation,
        ipa,
        details,
    }
}

impl From<LetterRecord> for EntryDraft {
    fn from(r: LetterRecord) -> Self {
        draft(
            r.letter,
            r.pronunciation,
            r.ipa,
            EntryDetails::Letter { example: r.example },
        )
    }
}

impl From<NumberRecord> for EntryDraft {
    fn from(r: NumberRecord) -> Self {
        draft(
            r.mongolian,
            r.pronunciation,
            r.ipa,
            EntryDetails::Number {
                value: r.number,
                english: r.english,
            },
        )
    }
}

impl From<PhraseRecord> for EntryDraft {
    fn from(r: PhraseRecord) -> Self {
        draft(
            r.mongolian,
            r.pronunciation,
            r.ipa,
            EntryDetails::Phrase { english: r.english },
        )
    }
}

impl From<VerbRecord> for EntryDraft {
    fn from(r: VerbRecord) -> Self {
        draft(
            r.mongolian,
            r.pronunciation,
            r.ipa,
            EntryDetails::Verb {
                english: r.english,
                present: r.present,
                past: r.past,
                future: r.future,
            },
        )
    }
}

impl VocabularyDocument {
    fn into_store(self) -> VocabularyStore {
        let mut builder = VocabularyStore::builder();
        if let Some(language) = self.language {
            builder = builder.language(language);
        }

        let sections: [(Category, Vec<EntryDraft>); 8] = [
            (Category::Alphabet, drafts(self.alphabet.cyrillic)),
            (Category::Numbers, drafts(self.numbers)),
            (Category::BasicWords, drafts(self.basic_words)),
            (Category::TravelPhrases, drafts(self.travel_phrases)),
            (Category::Verbs, drafts(self.essential_verbs)),
            (Category::TravelVocabulary, drafts(self.travel_vocabulary)),
            (Category::RomanticCultural, drafts(self.romantic_phrases)),
            (Category::RomanticCultural, drafts(self.cultural_phrases)),
        ];

        for (category, entries) in sections {
            for (index, entry) in entries.into_iter().enumerate() {
                if let Err(err) = builder.push(category, entry) {
                    tracing::warn!(%category, index, error = %err, "skipping invalid vocabulary entry");
                }
            }
        }

        builder.build()
    }
}

fn drafts<T: Into<EntryDraft>>(records: Vec<T>) -> Vec<EntryDraft> {
    records.into_iter().map(Into::into).collect()
}

//
// ─── PARSING ───────────────────────────────────────────────────────────────────
//

/// Parse a vocabulary document from JSON text.
///
/// Entries that fail validation are skipped with a warning; a document that
/// is not valid JSON (or has wrongly typed fields) is an error.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if the text is not a valid document.
pub fn parse_document(json: &str) -> Result<VocabularyStore, StorageError> {
    let document: VocabularyDocument = serde_json::from_str(json)?;
    Ok(document.into_store())
}

/// Vocabulary read from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl VocabularySource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<VocabularyStore, StorageError> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse_document(&text)
    }
}
