use std::convert::Infallible;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use services::Frontend;
use tracing::info;
use trainer_core::model::{OperationCatalog, QuizSettings};

use crate::app::App;
use crate::context::build_quiz_context;

pub const WINDOW_TITLE: &str = "Operation Trainer";

/// Desktop window front end.
///
/// `launch` blocks inside the Dioxus event loop until the window is closed.
#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopFrontend;

impl DesktopFrontend {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn window() -> WindowBuilder {
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(1280.0, 720.0))
            .with_min_inner_size(LogicalSize::new(480.0, 360.0))
            .with_max_inner_size(LogicalSize::new(1280.0, 720.0))
            // Some dev setups default to an always-on-top window.
            .with_always_on_top(false)
    }
}

impl Frontend for DesktopFrontend {
    type Error = Infallible;

    fn launch(self, catalog: OperationCatalog, settings: QuizSettings) -> Result<(), Infallible> {
        info!(operations = catalog.len(), "launching desktop window");
        let context = build_quiz_context(catalog, settings);
        let desktop_cfg = DesktopConfig::new().with_window(Self::window());

        LaunchBuilder::desktop()
            .with_cfg(desktop_cfg)
            .with_context(context)
            .launch(App);
        Ok(())
    }
}
