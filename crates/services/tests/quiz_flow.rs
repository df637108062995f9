use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use services::{Advance, Clock, QuizEngine, QuizError, QuizState};
use storage::{BuiltinSource, InMemorySource, load_vocabulary};
use vocab_core::model::{
    Category, EntryDetails, EntryDraft, FeedbackTier, MAX_QUESTIONS, QuizSettings,
    VocabularyStore,
};
use vocab_core::time::fixed_now;

fn engine(seed: u64) -> QuizEngine<StdRng> {
    QuizEngine::with_rng(&QuizSettings::default(), StdRng::seed_from_u64(seed))
        .with_clock(Clock::fixed(fixed_now()))
}

fn numbers_store() -> VocabularyStore {
    let mut builder = VocabularyStore::builder();
    for (value, term, pron, english) in [
        (1, "нэг", "neg", "one"),
        (2, "хоёр", "khoyor", "two"),
        (3, "гурав", "gurav", "three"),
        (4, "дөрөв", "döröv", "four"),
        (5, "тав", "tav", "five"),
    ] {
        builder
            .push(
                Category::Numbers,
                EntryDraft::new(
                    term,
                    pron,
                    EntryDetails::Number {
                        value,
                        english: english.to_string(),
                    },
                ),
            )
            .unwrap();
    }
    builder.build()
}

#[test]
fn all_correct_answers_reach_mastery() {
    let store = load_vocabulary(&InMemorySource::new(numbers_store()));
    let mut engine = engine(3);
    engine.start(&store).unwrap();

    let results = loop {
        let answer = engine.current_question().unwrap().correct_answer().to_owned();
        engine.submit_answer(&answer).unwrap();
        if let Advance::Completed(results) = engine.advance().unwrap() {
            break results;
        }
    };

    assert_eq!(results.score(), 5);
    assert_eq!(results.total(), 5);
    assert_eq!(results.percentage(), 100);
    assert_eq!(results.tier(), FeedbackTier::Mastery);
    assert_eq!(
        results.tier().message(store.language()),
        "🎉 Excellent! You're a Mongolian language master!"
    );
}

#[test]
fn empty_corpus_cannot_start() {
    let mut engine = engine(0);
    assert_eq!(
        engine.start(&VocabularyStore::empty()).unwrap_err(),
        QuizError::EmptyCorpus
    );
    assert_eq!(engine.state(), QuizState::NotStarted);
}

#[test]
fn builtin_vocabulary_runs_a_full_quiz() {
    let store = load_vocabulary(&BuiltinSource);
    let mut engine = engine(2024);
    engine.start(&store).unwrap();

    let mut seen = HashSet::new();
    let mut answered = 0;
    let results = loop {
        let question = engine.current_question().unwrap().clone();
        assert!(seen.insert(question.entry_id()), "question repeated");
        assert_eq!(question.options().len(), 4);

        // Alternate right and wrong answers.
        let pick = if answered % 2 == 0 {
            question.correct_answer().to_owned()
        } else {
            question
                .options()
                .iter()
                .find(|o| *o != question.correct_answer())
                .unwrap()
                .clone()
        };
        engine.submit_answer(&pick).unwrap();
        answered += 1;

        match engine.advance().unwrap() {
            Advance::Next(_) => {}
            Advance::Completed(results) => break results,
        }
    };

    assert_eq!(answered, MAX_QUESTIONS as usize);
    assert_eq!(results.total(), MAX_QUESTIONS);
    assert_eq!(results.score(), 8);
    assert_eq!(results.percentage(), 53);
    assert_eq!(results.tier(), FeedbackTier::NeedsReview);
}
