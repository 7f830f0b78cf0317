/// Number of questions in a set unless overridden at startup.
pub const DEFAULT_MAX_QUESTIONS: u32 = 10;

/// Startup configuration for a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSettings {
    max_questions: u32,
}

impl QuizSettings {
    /// A question budget of `0` is valid: the first question request yields the summary.
    #[must_use]
    pub fn new(max_questions: u32) -> Self {
        Self { max_questions }
    }

    #[must_use]
    pub fn max_questions(&self) -> u32 {
        self.max_questions
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_QUESTIONS)
    }
}
