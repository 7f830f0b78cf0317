use thiserror::Error;

/// Errors emitted by the console front end.
///
/// Quiz state errors never surface here: the driver only sends intents the
/// current phase accepts and logs anything the controller still rejects.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConsoleError {
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
