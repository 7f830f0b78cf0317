use trainer_core::model::{OperationCatalog, QuizSettings};

/// A presentation surface that owns the quiz loop.
///
/// `launch` builds a `QuizController` around the front end's view, starts it
/// (rendering the main menu) and runs the input loop. It returns only once the
/// user leaves: the console on `EXIT` or end of input, the desktop window when
/// it is closed.
pub trait Frontend {
    type Error: std::error::Error + Send + Sync + 'static;

    /// # Errors
    ///
    /// Returns the front end's own error type for I/O or runtime failures.
    fn launch(self, catalog: OperationCatalog, settings: QuizSettings) -> Result<(), Self::Error>;
}
