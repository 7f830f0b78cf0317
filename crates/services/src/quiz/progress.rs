/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuizProgress {
    /// Questions issued so far, including the one on screen.
    pub asked: u32,
    pub max_questions: u32,
    pub score: u32,
}

impl QuizProgress {
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.asked >= self.max_questions
    }

    /// `"<asked> / <max>"`
    #[must_use]
    pub fn fraction(&self) -> String {
        format!("{} / {}", self.asked, self.max_questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhausted_once_budget_is_reached() {
        let progress = QuizProgress {
            asked: 3,
            max_questions: 2,
            score: 0,
        };
        assert!(progress.is_exhausted());
        assert_eq!(progress.fraction(), "3 / 2");
    }
}
