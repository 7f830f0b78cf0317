mod menu;
mod question;
mod result;
mod screen;
mod summary;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use menu::MainMenuPage;
pub use question::QuestionPage;
pub use result::ResultPage;
pub use screen::QuizScreen;
pub use summary::SummaryPage;
