/// Aggregated view of quiz progress, for rendering a progress line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub score: u32,
    pub is_complete: bool,
}

impl QuizProgress {
    /// 1-based position of the question being shown, clamped to `total`.
    #[must_use]
    pub fn position(&self) -> usize {
        if self.is_complete {
            self.total
        } else {
            (self.answered + 1).min(self.total)
        }
    }
}
