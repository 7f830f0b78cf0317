use dioxus::prelude::*;
use services::{QuizController, QuizIntent};
use tracing::warn;

use crate::context::QuizContext;
use crate::view::DesktopView;
use crate::views::QuizScreen;

/// Window theme: steel-blue background, white text, large type.
pub const THEME_CSS: &str = r#"
body { margin: 0; background: steelblue; color: white; font-family: "Courier New", monospace; }
.app-root { min-height: 100vh; display: flex; align-items: center; justify-content: center; }
.page { display: flex; flex-direction: column; align-items: center; gap: 24px; }
.view-title { font-size: 40px; margin: 0; }
.view-subtitle { font-size: 25px; margin: 0; }
.progress { font-size: 40px; }
.prompt { font-size: 40px; }
.message { font-size: 20px; }
.error { font-size: 28px; }
.answer-input { width: 5em; font-size: 20px; text-align: center; }
.btn { font-size: 20px; padding: 6px 18px; }
.actions { display: flex; flex-direction: column; gap: 12px; }
"#;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<QuizContext>();
    let mut controller = use_signal(move || {
        let mut controller = QuizController::new(DesktopView::new(), ctx.catalog(), ctx.settings());
        controller.start();
        controller
    });

    let screen = controller.read().view().screen().clone();
    let on_intent = move |intent: QuizIntent| {
        if let Err(err) = controller.write().dispatch(intent) {
            warn!(%err, "ui intent rejected");
        }
    };

    rsx! {
        style { "{THEME_CSS}" }
        div { class: "app-root",
            QuizScreen { screen, on_intent }
        }
    }
}
