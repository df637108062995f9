use std::fmt;

//
// ─── CATEGORY ──────────────────────────────────────────────────────────────────
//

/// The seven vocabulary groupings a store is split into.
///
/// Declaration order is the order categories are iterated in when building a
/// quiz, before the combined question list is shuffled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Alphabet,
    Numbers,
    BasicWords,
    TravelPhrases,
    Verbs,
    TravelVocabulary,
    RomanticCultural,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Alphabet,
        Category::Numbers,
        Category::BasicWords,
        Category::TravelPhrases,
        Category::Verbs,
        Category::TravelVocabulary,
        Category::RomanticCultural,
    ];

    /// Human-readable section title.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Alphabet => "Alphabet",
            Category::Numbers => "Numbers",
            Category::BasicWords => "Basic Words",
            Category::TravelPhrases => "Travel Phrases",
            Category::Verbs => "Essential Verbs",
            Category::TravelVocabulary => "Travel Vocabulary",
            Category::RomanticCultural => "Romantic & Cultural Phrases",
        }
    }

    /// Card icon for the category.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Category::Alphabet => "🔤",
            Category::Numbers => "🔢",
            Category::BasicWords => "💬",
            Category::TravelPhrases => "✈️",
            Category::Verbs => "🏃",
            Category::TravelVocabulary => "📚",
            Category::RomanticCultural => "💕",
        }
    }

    /// The prompt/answer pairing used to turn an entry of this category into a question.
    #[must_use]
    pub fn template(self) -> QuestionTemplate {
        match self {
            Category::Alphabet => QuestionTemplate {
                prompt: PromptFormat::PronunciationOf,
                answer: Field::Pronunciation,
            },
            Category::Numbers => QuestionTemplate {
                prompt: PromptFormat::SayInLanguage,
                answer: Field::Pronunciation,
            },
            Category::BasicWords | Category::RomanticCultural => QuestionTemplate {
                prompt: PromptFormat::MeaningOf,
                answer: Field::English,
            },
            Category::TravelPhrases => QuestionTemplate {
                prompt: PromptFormat::Translate,
                answer: Field::Pronunciation,
            },
            Category::Verbs => QuestionTemplate {
                prompt: PromptFormat::PresentTenseOf,
                answer: Field::Present,
            },
            Category::TravelVocabulary => QuestionTemplate {
                prompt: PromptFormat::WhatIsInLanguage,
                answer: Field::Pronunciation,
            },
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── TEMPLATES ─────────────────────────────────────────────────────────────────
//

/// A readable field of a vocabulary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The target-language term (letter, word or phrase).
    Term,
    English,
    Pronunciation,
    /// Present-tense form of a verb.
    Present,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptFormat {
    PronunciationOf,
    SayInLanguage,
    MeaningOf,
    Translate,
    PresentTenseOf,
    WhatIsInLanguage,
}

/// Maps a category to the field shown in the prompt and the field expected as answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionTemplate {
    prompt: PromptFormat,
    answer: Field,
}

impl QuestionTemplate {
    /// Field interpolated into the prompt text.
    #[must_use]
    pub fn prompt_field(&self) -> Field {
        match self.prompt {
            PromptFormat::PronunciationOf
            | PromptFormat::MeaningOf
            | PromptFormat::PresentTenseOf => Field::Term,
            PromptFormat::SayInLanguage
            | PromptFormat::Translate
            | PromptFormat::WhatIsInLanguage => Field::English,
        }
    }

    /// Field holding the correct answer.
    #[must_use]
    pub fn answer_field(&self) -> Field {
        self.answer
    }

    /// Render the prompt for `subject`, naming the target `language` where the
    /// template needs it.
    #[must_use]
    pub fn render_prompt(&self, subject: &str, language: &str) -> String {
        match self.prompt {
            PromptFormat::PronunciationOf => {
                format!("What is the pronunciation of \"{subject}\"?")
            }
            PromptFormat::SayInLanguage => format!("How do you say \"{subject}\" in {language}?"),
            PromptFormat::MeaningOf => format!("What does \"{subject}\" mean?"),
            PromptFormat::Translate => format!("Translate: \"{subject}\""),
            PromptFormat::PresentTenseOf => {
                format!("What is the present tense of \"{subject}\"?")
            }
            PromptFormat::WhatIsInLanguage => format!("What is \"{subject}\" in {language}?"),
        }
    }
}
