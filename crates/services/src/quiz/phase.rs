/// Where the quiz currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuizPhase {
    #[default]
    MainMenu,
    QuestionPending,
    ResultShown,
    Summary,
}

/// User intents a front end forwards to the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    /// 0-based catalog index.
    SelectOperation(usize),
    SubmitAnswer(String),
    NextQuestion,
    MainMenu,
}
