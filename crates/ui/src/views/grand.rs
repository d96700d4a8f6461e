use dioxus::prelude::*;
use services::{Intent, QuizScope, ViewController};

use crate::app::navigate;
use crate::views::{FlashcardItem, QuizPanel};

#[component]
pub fn GrandQuizView() -> Element {
    let controller = use_context::<Signal<ViewController>>();
    let questions = controller.read().resolver().grand_quiz().questions().to_vec();

    rsx! {
        div { class: "page grand-page",
            button {
                class: "back-link",
                r#type: "button",
                onclick: move |_| navigate(controller, Intent::Exit),
                "← Exit"
            }
            h2 { class: "view-title view-title--center", "Grand Quiz" }
            QuizPanel { scope: QuizScope::Grand, questions }
        }
    }
}

#[component]
pub fn GrandDeckView() -> Element {
    let controller = use_context::<Signal<ViewController>>();
    let deck = controller.read().resolver().grand_deck();
    let cards = deck.flashcards().iter().enumerate().map(|(idx, card)| {
        rsx! {
            FlashcardItem {
                key: "{idx}",
                front: card.front().to_string(),
                back: card.back().to_string(),
            }
        }
    });

    rsx! {
        div { class: "page grand-page",
            button {
                class: "back-link back-link--green",
                r#type: "button",
                onclick: move |_| navigate(controller, Intent::Exit),
                "← Back"
            }
            h2 { class: "view-title view-title--center", "Master Deck" }
            div { class: "flashcard-grid flashcard-grid--wide",
                {cards}
            }
        }
    }
}
