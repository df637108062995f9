use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

//
// ─── PERCENTAGE ────────────────────────────────────────────────────────────────
//

/// `round(100 * score / total)`, rounding halves away from zero.
///
/// Integer arithmetic: `floor((200 * score + total) / (2 * total))`.
/// Returns 0 for an empty quiz.
#[must_use]
pub fn percentage(score: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let numerator = 200 * u64::from(score) + u64::from(total);
    let denominator = 2 * u64::from(total);
    u32::try_from(numerator / denominator).unwrap_or(u32::MAX)
}

//
// ─── FEEDBACK ──────────────────────────────────────────────────────────────────
//

/// Feedback band for a final percentage. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackTier {
    /// 90% and above.
    Mastery,
    /// 70–89%.
    Good,
    /// 50–69%.
    NeedsReview,
    /// Below 50%.
    Retry,
}

impl FeedbackTier {
    #[must_use]
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => FeedbackTier::Mastery,
            70..=89 => FeedbackTier::Good,
            50..=69 => FeedbackTier::NeedsReview,
            _ => FeedbackTier::Retry,
        }
    }

    /// Default English message for the tier.
    #[must_use]
    pub fn message(self, language: &str) -> String {
        match self {
            FeedbackTier::Mastery => format!("🎉 Excellent! You're a {language} language master!"),
            FeedbackTier::Good => "👍 Good work! Keep practicing!".to_string(),
            FeedbackTier::NeedsReview => {
                "📚 Not bad! Review the material and try again!".to_string()
            }
            FeedbackTier::Retry => "💪 Keep studying! Practice makes perfect!".to_string(),
        }
    }
}

//
// ─── RESULTS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResultsError {
    #[error("quiz has no questions")]
    NoQuestions,

    #[error("score {score} exceeds question count {total}")]
    ScoreExceedsTotal { score: u32, total: u32 },

    #[error("completed_at must be >= started_at")]
    InvalidTimeRange,
}

/// Final summary of a completed quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResults {
    score: u32,
    total: u32,
    percentage: u32,
    tier: FeedbackTier,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl QuizResults {
    /// Compute percentage and tier for a finished quiz.
    ///
    /// # Errors
    ///
    /// Returns `ResultsError::NoQuestions` if `total` is zero.
    /// Returns `ResultsError::ScoreExceedsTotal` if `score > total`.
    /// Returns `ResultsError::InvalidTimeRange` if `completed_at` is before `started_at`.
    pub fn new(
        score: u32,
        total: u32,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, ResultsError> {
        if total == 0 {
            return Err(ResultsError::NoQuestions);
        }
        if score > total {
            return Err(ResultsError::ScoreExceedsTotal { score, total });
        }
        if completed_at < started_at {
            return Err(ResultsError::InvalidTimeRange);
        }

        let percentage = percentage(score, total);
        Ok(Self {
            score,
            total,
            percentage,
            tier: FeedbackTier::from_percentage(percentage),
            started_at,
            completed_at,
        })
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn percentage(&self) -> u32 {
        self.percentage
    }

    #[must_use]
    pub fn tier(&self) -> FeedbackTier {
        self.tier
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.completed_at - self.started_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn percentage_rounds_half_away_from_zero() {
        assert_eq!(percentage(0, 10), 0);
        assert_eq!(percentage(1, 8), 13); // 12.5
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(7, 8), 88); // 87.5
        assert_eq!(percentage(15, 15), 100);
        assert_eq!(percentage(3, 0), 0);
    }

    #[test]
    fn tier_boundaries_are_inclusive_lower_bounds() {
        assert_eq!(FeedbackTier::from_percentage(100), FeedbackTier::Mastery);
        assert_eq!(FeedbackTier::from_percentage(90), FeedbackTier::Mastery);
        assert_eq!(FeedbackTier::from_percentage(89), FeedbackTier::Good);
        assert_eq!(FeedbackTier::from_percentage(70), FeedbackTier::Good);
        assert_eq!(FeedbackTier::from_percentage(69), FeedbackTier::NeedsReview);
        assert_eq!(FeedbackTier::from_percentage(50), FeedbackTier::NeedsReview);
        assert_eq!(FeedbackTier::from_percentage(49), FeedbackTier::Retry);
        assert_eq!(FeedbackTier::from_percentage(0), FeedbackTier::Retry);
    }

    #[test]
    fn results_derive_percentage_and_tier() {
        let now = fixed_now();
        let results = QuizResults::new(9, 10, now, now + Duration::seconds(75)).unwrap();
        assert_eq!(results.percentage(), 90);
        assert_eq!(results.tier(), FeedbackTier::Mastery);
        assert_eq!(results.duration(), Duration::seconds(75));

        let results = QuizResults::new(7, 10, now, now).unwrap();
        assert_eq!(results.tier(), FeedbackTier::Good);
    }

    #[test]
    fn results_reject_inconsistent_input() {
        let now = fixed_now();
        assert_eq!(
            QuizResults::new(0, 0, now, now).unwrap_err(),
            ResultsError::NoQuestions
        );
        assert_eq!(
            QuizResults::new(6, 5, now, now).unwrap_err(),
            ResultsError::ScoreExceedsTotal { score: 6, total: 5 }
        );
        assert_eq!(
            QuizResults::new(1, 5, now, now - Duration::seconds(1)).unwrap_err(),
            ResultsError::InvalidTimeRange
        );
    }

    #[test]
    fn mastery_message_names_language() {
        assert!(FeedbackTier::Mastery.message("Mongolian").contains("Mongolian"));
    }
}
