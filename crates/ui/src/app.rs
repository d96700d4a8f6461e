use dioxus::prelude::*;
use services::{Intent, Transition, ViewController, ViewMode};

use crate::context::AppContext;
use crate::views::{GrandDeckView, GrandQuizView, HomeView, TopicView};

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Samskrita Praveshah" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Shell {}
            }
        }
    }
}

/// Owns the controller signal and picks the screen for the current mode.
#[component]
pub fn Shell() -> Element {
    let ctx = use_context::<AppContext>();
    let controller = use_signal(|| ctx.controller());
    use_context_provider(|| controller);

    let (mode, busy) = {
        let ctrl = controller.read();
        (ctrl.mode(), ctrl.is_busy())
    };

    rsx! {
        Header { generation_available: ctx.generation_available() }
        main { class: "content",
            if busy {
                LoadingOverlay {}
            }
            match mode {
                ViewMode::Home => rsx! { HomeView {} },
                ViewMode::Topic(topic) => {
                    let topic_id = topic.id().value();
                    rsx! { TopicView { key: "{topic_id}", topic_id } }
                }
                ViewMode::GrandQuiz => rsx! { GrandQuizView {} },
                ViewMode::GrandFlashcards => rsx! { GrandDeckView {} },
            }
        }
    }
}

#[component]
fn Header(generation_available: bool) -> Element {
    let mut controller = use_context::<Signal<ViewController>>();
    let (admin, notice) = {
        let ctrl = controller.read();
        (ctrl.admin_mode(), ctrl.operator_notice().map(str::to_string))
    };
    let toggle_class = if admin {
        "admin-toggle admin-toggle--on"
    } else {
        "admin-toggle"
    };

    rsx! {
        header { class: "app-header",
            h1 {
                class: "app-title",
                onclick: move |_| navigate(controller, Intent::Exit),
                "Samskrita "
                span { class: "app-title-accent", "Praveshah" }
            }
            div { class: "admin-capture",
                span { "Admin Capture" }
                button {
                    class: "{toggle_class}",
                    r#type: "button",
                    aria_pressed: "{admin}",
                    onclick: move |_| {
                        controller.write().toggle_admin_mode();
                    },
                    span { class: "admin-toggle-knob" }
                }
            }
        }
        if admin && !generation_available {
            div { class: "operator-notice operator-notice--info",
                "No API key configured. Set SAMSKRITA_API_KEY to fetch missing lessons."
            }
        }
        if let Some(message) = notice {
            div { class: "operator-notice",
                span { "{message}" }
                button {
                    class: "operator-notice-dismiss",
                    r#type: "button",
                    onclick: move |_| controller.write().dismiss_notice(),
                    "×"
                }
            }
        }
    }
}

#[component]
fn LoadingOverlay() -> Element {
    rsx! {
        div { class: "loading-overlay",
            div { class: "spinner" }
            p { class: "loading-title", "Fetching from Gemini AI..." }
            p { class: "loading-hint", "Updating curriculum memory" }
        }
    }
}

/// Apply `intent`, running any fetch it needs in the background.
///
/// Intents rejected while a fetch is in flight are dropped.
pub(crate) fn navigate(mut controller: Signal<ViewController>, intent: Intent) {
    let transition = controller.write().begin(intent);
    if let Ok(Transition::Pending(pending)) = transition {
        spawn(async move {
            let outcome = pending.run().await;
            controller.write().finish(outcome);
        });
    }
}
