use rand::Rng;
use rand::seq::SliceRandom;

use vocab_core::model::MAX_OPTIONS;

/// Build the option list for one question.
///
/// Starts from `correct`, then draws candidates uniformly without replacement,
/// keeping each one that is not already an option, until `MAX_OPTIONS - 1`
/// distractors are collected or the pool runs dry. The result is shuffled, so
/// it is shorter than `MAX_OPTIONS` only when `candidates` lacks enough
/// distinct values.
pub fn sample_options<S, R>(candidates: &[S], correct: &str, rng: &mut R) -> Vec<String>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let mut options = Vec::with_capacity(MAX_OPTIONS);
    options.push(correct.to_owned());

    let mut pool: Vec<&str> = candidates.iter().map(AsRef::as_ref).collect();
    while options.len() < MAX_OPTIONS && !pool.is_empty() {
        let pick = pool.swap_remove(rng.random_range(0..pool.len()));
        if !options.iter().any(|option| option == pick) {
            options.push(pick.to_owned());
        }
    }

    options.shuffle(rng);
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn picks_three_distinct_distractors_when_available() {
        let pool = ["neg", "khoyor", "gurav", "döröv", "tav", "zurgaa"];
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let options = sample_options(&pool, "gurav", &mut rng);

            assert_eq!(options.len(), 4);
            assert_eq!(options.iter().filter(|o| *o == "gurav").count(), 1);
            let unique: HashSet<_> = options.iter().collect();
            assert_eq!(unique.len(), 4);
            assert!(options.iter().all(|o| pool.contains(&o.as_str())));
        }
    }

    #[test]
    fn degrades_to_available_distinct_answers() {
        let pool = ["i", "i", "a", "a", "i"];
        let mut rng = StdRng::seed_from_u64(7);
        let mut options = sample_options(&pool, "i", &mut rng);
        options.sort();
        assert_eq!(options, vec!["a".to_string(), "i".to_string()]);
    }

    #[test]
    fn single_entry_category_yields_only_the_answer() {
        let mut rng = StdRng::seed_from_u64(1);
        let options = sample_options(&["us"], "us", &mut rng);
        assert_eq!(options, vec!["us".to_string()]);
    }

    #[test]
    fn correct_answer_not_in_pool_is_still_included() {
        let mut rng = StdRng::seed_from_u64(3);
        let options = sample_options(&["b", "c"], "a", &mut rng);
        assert_eq!(options.len(), 3);
        assert!(options.contains(&"a".to_string()));
    }

    #[test]
    fn correct_answer_position_varies_across_draws() {
        let pool = ["a", "b", "c", "d", "e"];
        let mut rng = StdRng::seed_from_u64(11);
        let positions: HashSet<_> = (0..64)
            .map(|_| {
                sample_options(&pool, "a", &mut rng)
                    .iter()
                    .position(|o| o == "a")
                    .unwrap()
            })
            .collect();
        assert!(positions.len() > 1);
    }
}
