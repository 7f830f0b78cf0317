use trainer_core::model::{OperationCatalog, Question, Score};

use super::progress::QuizProgress;

//
// ─── MAIN MENU ────────────────────────────────────────────────────────────────
//

/// One selectable operation. `position` is 1-based, `index` is the catalog index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub index: usize,
    pub position: usize,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainMenuScreen {
    pub entries: Vec<MenuEntry>,
}

impl MainMenuScreen {
    pub const TITLE: &'static str = "Welcome to Mental Math Trainer!";

    #[must_use]
    pub fn from_catalog(catalog: &OperationCatalog) -> Self {
        let entries = catalog
            .iter()
            .enumerate()
            .map(|(index, entry)| MenuEntry {
                index,
                position: index + 1,
                name: entry.name().to_string(),
            })
            .collect();
        Self { entries }
    }

    /// Map a 1-based menu position to a catalog index.
    #[must_use]
    pub fn index_for_position(&self, position: usize) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| entry.position == position)
            .map(|entry| entry.index)
    }
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionScreen {
    pub progress: QuizProgress,
    pub question: Question,
}

impl QuestionScreen {
    /// `"<left> <operator> <right> ?"`
    #[must_use]
    pub fn prompt(&self) -> String {
        self.question.to_string()
    }
}

//
// ─── RESULT ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultScreen {
    pub progress: QuizProgress,
    pub submitted: i64,
    pub expected: i64,
    pub is_correct: bool,
}

impl ResultScreen {
    #[must_use]
    pub fn message(&self) -> String {
        if self.is_correct {
            format!("You answered {}. This is correct!", self.submitted)
        } else {
            format!(
                "You answered {}. Wrong answer! The correct answer was {}",
                self.submitted, self.expected
            )
        }
    }
}

//
// ─── SUMMARY ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryScreen {
    pub score: Score,
}

impl SummaryScreen {
    /// `"Your score: <correct> / <answered>"`
    #[must_use]
    pub fn message(&self) -> String {
        format!("Your score: {}", self.score)
    }
}
