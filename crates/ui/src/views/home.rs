use dioxus::prelude::*;
use samskrita_core::model::TopicId;
use services::{Intent, ViewController};

use crate::app::navigate;

#[derive(Clone, Debug, PartialEq, Eq)]
struct TopicTile {
    id: TopicId,
    title: &'static str,
    page_number: u32,
    captured: bool,
    completed: bool,
}

#[component]
pub fn HomeView() -> Element {
    let controller = use_context::<Signal<ViewController>>();
    let (admin, percentage, tiles) = {
        let ctrl = controller.read();
        let completed = ctrl.progress().completed();
        let tiles = ctrl
            .progress()
            .catalog()
            .topics()
            .iter()
            .map(|topic| TopicTile {
                id: topic.id(),
                title: topic.title(),
                page_number: topic.page_number(),
                captured: ctrl.resolver().lookup(topic.id()).is_some(),
                completed: completed.contains(topic.id()),
            })
            .collect::<Vec<_>>();
        (ctrl.admin_mode(), ctrl.progress().percentage(), tiles)
    };

    let subtitle = if admin {
        "Admin Mode Active: Click topics to fetch and save their content using AI."
    } else {
        "Welcome student! Choose a topic below to begin your journey."
    };

    let topic_buttons = tiles.into_iter().map(|tile| {
        let id = tile.id;
        let tile_class = if tile.captured {
            "topic-tile topic-tile--captured"
        } else {
            "topic-tile"
        };
        let (badge_class, badge_label) = if tile.captured {
            ("topic-badge topic-badge--captured", "Captured")
        } else {
            ("topic-badge", "Empty")
        };
        rsx! {
            button {
                key: "{id}",
                class: "{tile_class}",
                r#type: "button",
                onclick: move |_| navigate(controller, Intent::OpenTopic(id)),
                div { class: "topic-tile-main",
                    span { class: "topic-number", "{id}" }
                    div {
                        h4 { class: "topic-title devanagari", "{tile.title}" }
                        p { class: "topic-page", "Page {tile.page_number}" }
                    }
                }
                if tile.completed {
                    span { class: "topic-done", "✓" }
                }
                if admin {
                    span { class: "{badge_class}", "{badge_label}" }
                }
            }
        }
    });

    rsx! {
        div { class: "page home-page",
            header { class: "view-header view-header--center",
                h2 { class: "view-title", "Sanskrit Learning Portal" }
                p { class: "view-subtitle", "{subtitle}" }
            }
            div { class: "progress",
                div { class: "progress-label",
                    span { "Course progress" }
                    span { class: "progress-value", "{percentage}%" }
                }
                div { class: "progress-track",
                    div { class: "progress-fill", style: "width: {percentage}%" }
                }
            }
            div { class: "grand-actions",
                button {
                    class: "grand-card grand-card--quiz",
                    r#type: "button",
                    onclick: move |_| navigate(controller, Intent::GrandQuiz),
                    h3 { "Grand Quiz" }
                    p { "30 Master Questions" }
                }
                button {
                    class: "grand-card grand-card--deck",
                    r#type: "button",
                    onclick: move |_| navigate(controller, Intent::GrandFlashcards),
                    h3 { "Master Deck" }
                    p { "30 Revision Cards" }
                }
            }
            div { class: "topic-grid",
                {topic_buttons}
            }
        }
    }
}
