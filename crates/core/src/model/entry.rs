use thiserror::Error;

use crate::model::category::{Category, Field};
use crate::model::ids::EntryId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EntryError {
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    #[error("{kind} entries do not belong in {category}")]
    CategoryMismatch {
        category: Category,
        kind: &'static str,
    },
}

//
// ─── DETAILS ───────────────────────────────────────────────────────────────────
//

/// Category-specific payload of an entry.
///
/// Only the English gloss and the present tense are read by the quiz; the rest
/// is reference material for the cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryDetails {
    Letter {
        example: String,
    },
    Number {
        value: u32,
        english: String,
    },
    Phrase {
        english: String,
    },
    Verb {
        english: String,
        present: String,
        past: String,
        future: String,
    },
}

impl EntryDetails {
    fn kind(&self) -> &'static str {
        match self {
            EntryDetails::Letter { .. } => "letter",
            EntryDetails::Number { .. } => "number",
            EntryDetails::Phrase { .. } => "phrase",
            EntryDetails::Verb { .. } => "verb",
        }
    }

    fn fits(&self, category: Category) -> bool {
        match self {
            EntryDetails::Letter { .. } => category == Category::Alphabet,
            EntryDetails::Number { .. } => category == Category::Numbers,
            EntryDetails::Verb { .. } => category == Category::Verbs,
            EntryDetails::Phrase { .. } => matches!(
                category,
                Category::BasicWords
                    | Category::TravelPhrases
                    | Category::TravelVocabulary
                    | Category::RomanticCultural
            ),
        }
    }

    #[must_use]
    pub fn english(&self) -> Option<&str> {
        match self {
            EntryDetails::Letter { .. } => None,
            EntryDetails::Number { english, .. }
            | EntryDetails::Phrase { english }
            | EntryDetails::Verb { english, .. } => Some(english),
        }
    }

    fn normalize(self) -> Result<Self, EntryError> {
        Ok(match self {
            EntryDetails::Letter { example } => EntryDetails::Letter {
                example: example.trim().to_owned(),
            },
            EntryDetails::Number { value, english } => EntryDetails::Number {
                value,
                english: required(english, "english")?,
            },
            EntryDetails::Phrase { english } => EntryDetails::Phrase {
                english: required(english, "english")?,
            },
            EntryDetails::Verb {
                english,
                present,
                past,
                future,
            } => EntryDetails::Verb {
                english: required(english, "english")?,
                present: required(present, "present tense")?,
                past: past.trim().to_owned(),
                future: future.trim().to_owned(),
            },
        })
    }
}

fn required(value: String, field: &'static str) -> Result<String, EntryError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EntryError::EmptyField { field });
    }
    Ok(trimmed.to_owned())
}

//
// ─── ENTRY ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated entry as read from a vocabulary source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub term: String,
    pub pronunciation: String,
    pub ipa: Option<String>,
    pub details: EntryDetails,
}

impl EntryDraft {
    #[must_use]
    pub fn new(
        term: impl Into<String>,
        pronunciation: impl Into<String>,
        details: EntryDetails,
    ) -> Self {
        Self {
            term: term.into(),
            pronunciation: pronunciation.into(),
            ipa: None,
            details,
        }
    }

    #[must_use]
    pub fn with_ipa(mut self, ipa: impl Into<String>) -> Self {
        self.ipa = Some(ipa.into());
        self
    }

    /// Validate the draft for `category` and assign it an id.
    ///
    /// # Errors
    ///
    /// Returns `EntryError::CategoryMismatch` if the details do not fit the category.
    /// Returns `EntryError::EmptyField` if a field the quiz reads is blank.
    pub fn validate(self, id: EntryId, category: Category) -> Result<VocabularyEntry, EntryError> {
        if !self.details.fits(category) {
            return Err(EntryError::CategoryMismatch {
                category,
                kind: self.details.kind(),
            });
        }

        let term = required(self.term, "term")?;
        let pronunciation = required(self.pronunciation, "pronunciation")?;
        let ipa = self
            .ipa
            .map(|ipa| ipa.trim().to_owned())
            .filter(|ipa| !ipa.is_empty());
        let details = self.details.normalize()?;

        Ok(VocabularyEntry {
            id,
            category,
            term,
            pronunciation,
            ipa,
            details,
        })
    }
}

/// One immutable vocabulary record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyEntry {
    id: EntryId,
    category: Category,
    term: String,
    pronunciation: String,
    ipa: Option<String>,
    details: EntryDetails,
}

impl VocabularyEntry {
    #[must_use]
    pub fn id(&self) -> EntryId {
        self.id
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    #[must_use]
    pub fn pronunciation(&self) -> &str {
        &self.pronunciation
    }

    #[must_use]
    pub fn ipa(&self) -> Option<&str> {
        self.ipa.as_deref()
    }

    #[must_use]
    pub fn details(&self) -> &EntryDetails {
        &self.details
    }

    #[must_use]
    pub fn english(&self) -> Option<&str> {
        self.details.english()
    }

    /// Read a template field; `None` when this kind of entry has no such field.
    #[must_use]
    pub fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::Term => Some(&self.term),
            Field::Pronunciation => Some(&self.pronunciation),
            Field::English => self.english(),
            Field::Present => match &self.details {
                EntryDetails::Verb { present, .. } => Some(present),
                _ => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrase(english: &str) -> EntryDetails {
        EntryDetails::Phrase {
            english: english.to_string(),
        }
    }

    #[test]
    fn validate_trims_fields_and_drops_blank_ipa() {
        let entry = EntryDraft::new("  ус ", " us", phrase(" water "))
            .with_ipa("  ")
            .validate(EntryId::new(1), Category::BasicWords)
            .unwrap();

        assert_eq!(entry.term(), "ус");
        assert_eq!(entry.pronunciation(), "us");
        assert_eq!(entry.english(), Some("water"));
        assert_eq!(entry.ipa(), None);
    }

    #[test]
    fn validate_rejects_empty_term() {
        let err = EntryDraft::new("   ", "us", phrase("water"))
            .validate(EntryId::new(1), Category::BasicWords)
            .unwrap_err();
        assert_eq!(err, EntryError::EmptyField { field: "term" });
    }

    #[test]
    fn validate_rejects_verb_without_present_tense() {
        let details = EntryDetails::Verb {
            english: "to go".into(),
            present: " ".into(),
            past: "явсан".into(),
            future: "явна".into(),
        };
        let err = EntryDraft::new("явах", "yavakh", details)
            .validate(EntryId::new(3), Category::Verbs)
            .unwrap_err();
        assert_eq!(
            err,
            EntryError::EmptyField {
                field: "present tense"
            }
        );
    }

    #[test]
    fn validate_rejects_details_from_other_category() {
        let err = EntryDraft::new(
            "А",
            "a",
            EntryDetails::Letter {
                example: "ам".into(),
            },
        )
        .validate(EntryId::new(1), Category::Numbers)
        .unwrap_err();
        assert!(matches!(
            err,
            EntryError::CategoryMismatch {
                category: Category::Numbers,
                kind: "letter"
            }
        ));
    }

    #[test]
    fn field_lookup_follows_details() {
        let letter = EntryDraft::new("Б", "b", EntryDetails::Letter { example: "бар".into() })
            .validate(EntryId::new(1), Category::Alphabet)
            .unwrap();
        assert_eq!(letter.field(Field::Term), Some("Б"));
        assert_eq!(letter.field(Field::English), None);
        assert_eq!(letter.field(Field::Present), None);

        let verb = EntryDraft::new(
            "идэх",
            "idekh",
            EntryDetails::Verb {
                english: "to eat".into(),
                present: "идэж байна".into(),
                past: "идсэн".into(),
                future: "иднэ".into(),
            },
        )
        .validate(EntryId::new(2), Category::Verbs)
        .unwrap();
        assert_eq!(verb.field(Field::Present), Some("идэж байна"));
        assert_eq!(verb.field(Field::English), Some("to eat"));
    }
}
