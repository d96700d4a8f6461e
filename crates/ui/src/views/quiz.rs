use dioxus::prelude::*;
use samskrita_core::model::{Difficulty, Question};
use services::{Intent, QuizCompleted, QuizScope, QuizSession, ViewController};

use crate::app::navigate;

#[derive(Clone, Debug, PartialEq, Eq)]
enum SaveState {
    Idle,
    Saving,
    Saved,
    Failed(String),
}

#[component]
pub fn QuizPanel(scope: QuizScope, questions: Vec<Question>) -> Element {
    let controller = use_context::<Signal<ViewController>>();
    let mut session = use_signal(|| QuizSession::new(scope, questions.clone()));
    let mut save_state = use_signal(|| SaveState::Idle);

    let on_complete = move |event: QuizCompleted| {
        let ctrl = controller.read().clone();
        let mut save_state = save_state;
        spawn(async move {
            save_state.set(SaveState::Saving);
            match ctrl.on_quiz_completed(event).await {
                Ok(_) => save_state.set(SaveState::Saved),
                Err(err) => save_state.set(SaveState::Failed(err.to_string())),
            }
        });
    };

    let quiz = session.read().clone();
    if quiz.total() == 0 {
        return rsx! {
            p { class: "quiz-empty", "No practice questions for this lesson yet." }
        };
    }

    if quiz.is_finished() {
        let score = quiz.score();
        let total = quiz.total();
        let save_message = match save_state() {
            SaveState::Idle => None,
            SaveState::Saving => Some(("quiz-save", "Saving progress...".to_string())),
            SaveState::Saved => match scope {
                QuizScope::Topic(_) => Some(("quiz-save", "Lesson marked complete.".to_string())),
                QuizScope::Grand => None,
            },
            SaveState::Failed(message) => Some((
                "quiz-save quiz-save--error",
                format!("Could not save progress: {message}"),
            )),
        };
        return rsx! {
            div { class: "quiz-card quiz-card--done",
                h3 { class: "quiz-done-title", "Quiz Completed!" }
                p { class: "quiz-done-score", "{score} / {total}" }
                if let Some((class, message)) = save_message {
                    p { class: "{class}", "{message}" }
                }
                div { class: "quiz-done-actions",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            save_state.set(SaveState::Idle);
                            session.write().restart();
                        },
                        "Restart"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| navigate(controller, Intent::Exit),
                        "Go Home"
                    }
                }
            }
        };
    }

    let Some(question) = quiz.current().cloned() else {
        return rsx! {};
    };
    let position = quiz.position() + 1;
    let total = quiz.total();
    let revealed = quiz.is_revealed();
    let selected = quiz.selected().map(str::to_string);
    let prompt = question.question().to_string();
    let explanation = question.explanation().to_string();
    let difficulty = question.difficulty();
    let difficulty_class = match difficulty {
        Difficulty::Easy => "difficulty difficulty--easy",
        Difficulty::Medium => "difficulty difficulty--medium",
        Difficulty::Hard => "difficulty difficulty--hard",
    };

    let options = question.options().iter().map(|option| {
        let is_selected = selected.as_deref() == Some(option.as_str());
        let is_correct = question.is_correct(option);
        let class = match (is_selected, revealed, is_correct) {
            (true, false, _) => "quiz-option quiz-option--selected",
            (true, true, true) | (false, true, true) => "quiz-option quiz-option--correct",
            (true, true, false) => "quiz-option quiz-option--wrong",
            _ => "quiz-option",
        };
        let value = option.clone();
        let mut session = session;
        rsx! {
            button {
                key: "{option}",
                class: "{class}",
                r#type: "button",
                onclick: move |_| {
                    session.write().select(&value);
                },
                span { class: "devanagari", "{option}" }
            }
        }
    });

    let action_label = if revealed { "Next Question" } else { "Check Answer" };

    rsx! {
        div { class: "quiz-card",
            div { class: "quiz-meta",
                span { class: "quiz-position", "Question {position} / {total}" }
                span { class: "{difficulty_class}", "{difficulty}" }
            }
            h3 { class: "quiz-question devanagari", "{prompt}" }
            div { class: "quiz-options",
                {options}
            }
            if revealed {
                div { class: "quiz-explanation",
                    p { class: "quiz-explanation-title", "Explanation:" }
                    p { "{explanation}" }
                }
            }
            button {
                class: "btn btn-primary quiz-action",
                r#type: "button",
                disabled: selected.is_none(),
                onclick: move |_| {
                    let completed = {
                        let mut quiz = session.write();
                        if quiz.is_revealed() {
                            quiz.next()
                        } else {
                            quiz.check();
                            None
                        }
                    };
                    if let Some(event) = completed {
                        on_complete(event);
                    }
                },
                "{action_label}"
            }
        }
    }
}
