use services::{MainMenuScreen, QuestionScreen, QuizProgress, ResultScreen, SummaryScreen};
use trainer_core::model::AnswerError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuOptionVm {
    pub index: usize,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MainMenuVm {
    pub title: String,
    pub subtitle: String,
    pub options: Vec<MenuOptionVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub progress_label: String,
    pub prompt: String,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub progress_label: String,
    pub message: String,
    pub is_correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub message: String,
}

/// Everything the window shows at one time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ScreenVm {
    /// Nothing rendered yet.
    #[default]
    Blank,
    MainMenu(MainMenuVm),
    Question(QuestionVm),
    Result(ResultVm),
    Summary(SummaryVm),
}

fn progress_label(progress: &QuizProgress) -> String {
    format!("Progress: {}", progress.fraction())
}

#[must_use]
pub fn map_main_menu(screen: &MainMenuScreen) -> MainMenuVm {
    MainMenuVm {
        title: MainMenuScreen::TITLE.to_string(),
        subtitle: "Choose a test:".to_string(),
        options: screen
            .entries
            .iter()
            .map(|entry| MenuOptionVm {
                index: entry.index,
                label: entry.name.clone(),
            })
            .collect(),
    }
}

#[must_use]
pub fn map_question(screen: &QuestionScreen, error: Option<&AnswerError>) -> QuestionVm {
    QuestionVm {
        progress_label: progress_label(&screen.progress),
        prompt: screen.prompt(),
        error: error.map(ToString::to_string),
    }
}

#[must_use]
pub fn map_result(screen: &ResultScreen) -> ResultVm {
    ResultVm {
        progress_label: progress_label(&screen.progress),
        message: screen.message(),
        is_correct: screen.is_correct,
    }
}

#[must_use]
pub fn map_summary(screen: &SummaryScreen) -> SummaryVm {
    SummaryVm {
        message: screen.message(),
    }
}
