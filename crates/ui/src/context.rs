use trainer_core::model::{OperationCatalog, QuizSettings};

/// Startup data the root component needs to build its controller.
///
/// Provided by the launch glue through the Dioxus context.
#[derive(Clone, Debug)]
pub struct QuizContext {
    catalog: OperationCatalog,
    settings: QuizSettings,
}

impl QuizContext {
    #[must_use]
    pub fn new(catalog: OperationCatalog, settings: QuizSettings) -> Self {
        Self { catalog, settings }
    }

    #[must_use]
    pub fn catalog(&self) -> OperationCatalog {
        self.catalog.clone()
    }

    #[must_use]
    pub fn settings(&self) -> QuizSettings {
        self.settings
    }
}

/// Build a `QuizContext` from the composition root's choices.
#[must_use]
pub fn build_quiz_context(catalog: OperationCatalog, settings: QuizSettings) -> QuizContext {
    QuizContext::new(catalog, settings)
}
