use tracing::warn;
use trainer_core::model::{DEFAULT_MAX_QUESTIONS, QuizSettings};

pub const MAX_QUESTIONS_ENV: &str = "TRAINER_MAX_QUESTIONS";
pub const LOG_FILTER_ENV: &str = "TRAINER_LOG";

/// Startup settings from the process environment.
#[must_use]
pub fn settings_from_env() -> QuizSettings {
    settings_from_lookup(|key| std::env::var(key).ok())
}

/// Settings from an arbitrary key lookup. Invalid values fall back to defaults.
pub fn settings_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> QuizSettings {
    let max_questions = match lookup(MAX_QUESTIONS_ENV) {
        None => DEFAULT_MAX_QUESTIONS,
        Some(raw) => raw.trim().parse::<u32>().unwrap_or_else(|_| {
            warn!(
                value = %raw,
                default = DEFAULT_MAX_QUESTIONS,
                "invalid {MAX_QUESTIONS_ENV}; using default"
            );
            DEFAULT_MAX_QUESTIONS
        }),
    };
    QuizSettings::new(max_questions)
}
