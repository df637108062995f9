use std::collections::BTreeMap;

use crate::model::category::Category;
use crate::model::entry::{EntryDraft, EntryError, VocabularyEntry};
use crate::model::ids::EntryId;

/// Target language named in prompts when a source does not specify one.
pub const DEFAULT_LANGUAGE: &str = "Mongolian";

/// Read-only collection of vocabulary entries, grouped by category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyStore {
    language: String,
    entries: BTreeMap<Category, Vec<VocabularyEntry>>,
}

impl Default for VocabularyStore {
    fn default() -> Self {
        Self::empty()
    }
}

impl VocabularyStore {
    /// A store with every category empty.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            entries: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn builder() -> VocabularyStoreBuilder {
        VocabularyStoreBuilder::default()
    }

    /// Display name of the language being learned.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Entries of one category in load order.
    #[must_use]
    pub fn entries(&self, category: Category) -> &[VocabularyEntry] {
        self.entries.get(&category).map_or(&[], Vec::as_slice)
    }

    /// All entries, category by category.
    pub fn iter(&self) -> impl Iterator<Item = &VocabularyEntry> {
        Category::ALL
            .into_iter()
            .flat_map(move |category| self.entries(category).iter())
    }

    #[must_use]
    pub fn get(&self, id: EntryId) -> Option<&VocabularyEntry> {
        self.iter().find(|entry| entry.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Accumulates validated entries and hands out sequential ids.
#[derive(Debug)]
pub struct VocabularyStoreBuilder {
    language: String,
    next_id: u64,
    entries: BTreeMap<Category, Vec<VocabularyEntry>>,
}

impl Default for VocabularyStoreBuilder {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            next_id: 1,
            entries: BTreeMap::new(),
        }
    }
}

impl VocabularyStoreBuilder {
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        let language = language.into();
        if !language.trim().is_empty() {
            self.language = language.trim().to_string();
        }
        self
    }

    /// Validate and append an entry to `category`.
    ///
    /// Ids are only consumed by entries that pass validation.
    ///
    /// # Errors
    ///
    /// Returns `EntryError` if the draft fails validation.
    pub fn push(&mut self, category: Category, draft: EntryDraft) -> Result<EntryId, EntryError> {
        let id = EntryId::new(self.next_id);
        let entry = draft.validate(id, category)?;
        self.next_id += 1;
        self.entries.entry(category).or_default().push(entry);
        Ok(id)
    }

    #[must_use]
    pub fn build(self) -> VocabularyStore {
        VocabularyStore {
            language: self.language,
            entries: self.entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entry::EntryDetails;

    fn word(term: &str, english: &str) -> EntryDraft {
        EntryDraft::new(
            term,
            term,
            EntryDetails::Phrase {
                english: english.to_string(),
            },
        )
    }

    #[test]
    fn empty_store_has_no_entries_in_any_category() {
        let store = VocabularyStore::empty();
        assert!(store.is_empty());
        assert_eq!(store.language(), DEFAULT_LANGUAGE);
        for category in Category::ALL {
            assert!(store.entries(category).is_empty());
        }
    }

    #[test]
    fn builder_assigns_sequential_ids_and_skips_failed_drafts() {
        let mut builder = VocabularyStore::builder().language("Mongolian");
        let first = builder.push(Category::BasicWords, word("ус", "water")).unwrap();
        assert!(builder.push(Category::BasicWords, word("", "nothing")).is_err());
        let second = builder
            .push(Category::TravelVocabulary, word("такси", "taxi"))
            .unwrap();
        let store = builder.build();

        assert_eq!(first, EntryId::new(1));
        assert_eq!(second, EntryId::new(2));
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(second).unwrap().term(), "такси");
    }

    #[test]
    fn iter_follows_category_order() {
        let mut builder = VocabularyStore::builder();
        builder
            .push(Category::RomanticCultural, word("хадаг", "ceremonial scarf"))
            .unwrap();
        builder.push(Category::BasicWords, word("гэр", "home")).unwrap();
        let store = builder.build();

        let terms: Vec<_> = store.iter().map(VocabularyEntry::term).collect();
        assert_eq!(terms, vec!["гэр", "хадаг"]);
    }

    #[test]
    fn blank_language_keeps_default() {
        let store = VocabularyStore::builder().language("  ").build();
        assert_eq!(store.language(), DEFAULT_LANGUAGE);
    }
}
