//! Shared error types for the services crate.

use thiserror::Error;

use crate::quiz::QuizPhase;

/// Errors emitted by `QuizController` when a front end drives it out of order.
///
/// Invalid answer text is not an error here: the controller handles it by
/// re-rendering the question.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no operation at menu index {index} ({available} available)")]
    UnknownOperation { index: usize, available: usize },
    #[error("no operation selected")]
    NoOperationSelected,
    #[error("no question is awaiting an answer")]
    NoPendingQuestion,
    #[error("cannot {action} while in {phase:?}")]
    UnexpectedAction {
        action: &'static str,
        phase: QuizPhase,
    },
}
