use dioxus::prelude::*;
use samskrita_core::model::TopicId;
use services::{Intent, QuizScope, ViewController};

use crate::app::navigate;
use crate::views::{FlashcardItem, QuizPanel};

#[component]
pub fn TopicView(topic_id: u32) -> Element {
    let controller = use_context::<Signal<ViewController>>();
    let id = TopicId::new(topic_id);
    let (topic, content, completed) = {
        let ctrl = controller.read();
        (
            ctrl.progress().catalog().get(id),
            ctrl.resolver().content_for(id),
            ctrl.progress().is_complete(id),
        )
    };

    let Some(topic) = topic else {
        return rsx! {
            div { class: "page",
                p { "This lesson is not part of the course." }
            }
        };
    };

    let title = topic.title();
    let page_number = topic.page_number();
    let summary_english = content.summary_english().to_string();
    let summary_marathi = content.summary_marathi().to_string();
    let questions = content.practice_questions().to_vec();
    let cards = content.flashcards().iter().enumerate().map(|(idx, card)| {
        rsx! {
            FlashcardItem {
                key: "{idx}",
                front: card.front().to_string(),
                back: card.back().to_string(),
            }
        }
    });

    rsx! {
        div { class: "page topic-page",
            button {
                class: "back-link",
                r#type: "button",
                onclick: move |_| navigate(controller, Intent::Exit),
                "← Back"
            }
            header { class: "view-header",
                h2 { class: "view-title devanagari", "{title}" }
                p { class: "view-subtitle", "Page {page_number}" }
                if completed {
                    span { class: "topic-complete", "Completed" }
                }
            }
            section { class: "summary-grid",
                div { class: "summary summary--english",
                    h3 { "English Summary" }
                    p { "{summary_english}" }
                }
                div { class: "summary summary--marathi",
                    h3 { "मराठी सारांश" }
                    p { class: "devanagari", "{summary_marathi}" }
                }
            }
            section { class: "topic-section",
                h3 { class: "section-title", "Practice Questions" }
                QuizPanel { scope: QuizScope::Topic(id), questions }
            }
            section { class: "topic-section",
                h3 { class: "section-title", "Flashcards" }
                if content.flashcards().is_empty() {
                    p { class: "flashcard-empty", "No flashcards for this lesson yet." }
                } else {
                    div { class: "flashcard-grid",
                        {cards}
                    }
                }
            }
        }
    }
}
