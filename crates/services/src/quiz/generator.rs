use rand::Rng;
use rand::seq::SliceRandom;

use vocab_core::model::{Category, Question, QuizSettings, VocabularyStore};

use super::sampler::sample_options;

/// Turns a vocabulary store into a shuffled, capped question list.
#[derive(Debug, Clone)]
pub struct QuestionGenerator {
    limit: usize,
}

impl QuestionGenerator {
    #[must_use]
    pub fn new(settings: &QuizSettings) -> Self {
        Self {
            limit: usize::try_from(settings.question_limit()).unwrap_or(usize::MAX),
        }
    }

    /// One question per usable entry across all categories, shuffled and
    /// truncated to the configured limit.
    pub fn generate<R: Rng + ?Sized>(&self, store: &VocabularyStore, rng: &mut R) -> Vec<Question> {
        let mut questions = Vec::new();
        for category in Category::ALL {
            questions.extend(category_questions(store, category, rng));
        }

        let available = questions.len();
        questions.shuffle(rng);
        questions.truncate(self.limit);

        tracing::debug!(available, selected = questions.len(), "generated quiz questions");
        questions
    }
}

/// Distractors for a category come only from that category's own answers.
fn category_questions<R: Rng + ?Sized>(
    store: &VocabularyStore,
    category: Category,
    rng: &mut R,
) -> Vec<Question> {
    let template = category.template();
    let entries = store.entries(category);
    let pool: Vec<&str> = entries
        .iter()
        .filter_map(|entry| entry.field(template.answer_field()))
        .collect();

    let mut questions = Vec::with_capacity(entries.len());
    for entry in entries {
        let (Some(subject), Some(answer)) = (
            entry.field(template.prompt_field()),
            entry.field(template.answer_field()),
        ) else {
            tracing::debug!(entry = %entry.id(), %category, "entry lacks a template field, skipping");
            continue;
        };

        let options = sample_options(&pool, answer, rng);
        let prompt = template.render_prompt(subject, store.language());
        match Question::new(entry.id(), category, prompt, answer, options) {
            Ok(question) => questions.push(question),
            Err(err) => {
                tracing::warn!(entry = %entry.id(), %category, error = %err, "dropping malformed question");
            }
        }
    }
    questions
}
