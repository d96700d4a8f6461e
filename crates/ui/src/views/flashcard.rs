use dioxus::prelude::*;

/// A card showing the Sanskrit side until clicked.
#[component]
pub fn FlashcardItem(front: String, back: String) -> Element {
    let mut flipped = use_signal(|| false);
    let class = if flipped() {
        "flashcard flashcard--flipped"
    } else {
        "flashcard"
    };

    rsx! {
        div {
            class: "{class}",
            onclick: move |_| flipped.set(!flipped()),
            div { class: "flashcard-inner",
                div { class: "flashcard-face flashcard-front",
                    span { class: "flashcard-label", "Sanskrit" }
                    p { class: "flashcard-text devanagari", "{front}" }
                }
                div { class: "flashcard-face flashcard-back",
                    span { class: "flashcard-label", "Meaning" }
                    p { class: "flashcard-text", "{back}" }
                }
            }
            div { class: "flashcard-hint", "Tap to flip" }
        }
    }
}
