use thiserror::Error;

/// Errors raised while reading a user's answer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnswerError {
    #[error("You must enter an integer")]
    InvalidFormat { raw: String },
}

/// Parse a free-form answer as an integer.
///
/// Surrounding whitespace is ignored and a leading `+` or `-` is accepted.
///
/// # Errors
///
/// Returns `AnswerError::InvalidFormat` if the trimmed input is not an integer.
pub fn parse_answer(raw: &str) -> Result<i64, AnswerError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AnswerError::InvalidFormat {
            raw: raw.to_string(),
        })
}
