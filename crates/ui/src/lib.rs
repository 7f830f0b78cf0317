#![allow(non_snake_case)]

pub mod app;
pub mod context;
pub mod launch;
pub mod view;
pub mod views;
pub mod vm;

pub use app::App;
pub use context::{QuizContext, build_quiz_context};
pub use launch::DesktopFrontend;
pub use view::DesktopView;
