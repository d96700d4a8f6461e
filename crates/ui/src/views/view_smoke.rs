use std::sync::Arc;

use samskrita_core::model::{GrandDeck, GrandQuiz, PLACEHOLDER_ENGLISH, TopicContent, TopicId};
use services::{ContentGenerator, GenerationError};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_generator};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_catalog() {
    let mut harness = setup_view_harness(ViewKind::Home, false).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Sanskrit Learning Portal"), "missing title in {html}");
    assert!(html.contains("Grand Quiz"), "missing grand quiz in {html}");
    assert!(html.contains("Master Deck"), "missing master deck in {html}");
    assert!(html.contains("उपसर्गाः"), "missing topic 23 in {html}");
    assert!(html.contains("Page 172"), "missing topic 42 page in {html}");
    assert!(html.contains("0%"), "missing progress in {html}");
    assert!(!html.contains("Captured"), "badges shown outside admin mode: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_completed_percentage() {
    let mut harness = setup_view_harness(ViewKind::Home, false).await;
    harness
        .services
        .progress()
        .mark_complete(TopicId::new(1))
        .await
        .expect("mark complete");
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("4%"), "missing 4% in {html}");
    assert!(html.contains("✓"), "missing completion mark in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_admin_badges() {
    let mut harness = setup_view_harness(ViewKind::Home, true).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Admin Mode Active"), "missing admin subtitle in {html}");
    assert_eq!(html.matches("Captured").count(), 3, "expected 3 captured in {html}");
    assert_eq!(html.matches("Empty").count(), 25, "expected 25 empty in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn topic_view_smoke_renders_preloaded_lesson() {
    let mut harness = setup_view_harness(ViewKind::Topic(1), false).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("English Summary"), "missing summary heading in {html}");
    assert!(html.contains("मराठी सारांश"), "missing marathi heading in {html}");
    assert!(html.contains("Question 1 / 5"), "missing quiz position in {html}");
    assert!(html.contains("Check Answer"), "missing quiz action in {html}");
    assert!(html.contains("भवत्याः"), "missing flashcard in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn topic_view_smoke_renders_placeholder() {
    let mut harness = setup_view_harness(ViewKind::Topic(23), false).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains(PLACEHOLDER_ENGLISH), "missing placeholder in {html}");
    assert!(
        html.contains("No practice questions for this lesson yet."),
        "missing empty quiz text in {html}"
    );
    assert!(
        html.contains("No flashcards for this lesson yet."),
        "missing empty deck text in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn grand_views_smoke_render_preloaded_aggregates() {
    let mut quiz = setup_view_harness(ViewKind::GrandQuiz, false).await;
    quiz.rebuild();
    let html = quiz.render();
    assert!(html.contains("Question 1 / 30"), "missing grand quiz position in {html}");

    let mut deck = setup_view_harness(ViewKind::GrandDeck, false).await;
    deck.rebuild();
    let html = deck.render();
    assert!(html.contains("Master Deck"), "missing deck title in {html}");
    assert!(html.contains("अद्य"), "missing first card in {html}");
    assert_eq!(html.matches("Tap to flip").count(), 30, "expected 30 cards in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn shell_smoke_renders_header_and_home() {
    let mut harness = setup_view_harness(ViewKind::Shell, true).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Admin Capture"), "missing admin toggle in {html}");
    assert!(html.contains("Sanskrit Learning Portal"), "missing home in {html}");
    assert!(
        html.contains("No API key configured"),
        "missing capability hint in {html}"
    );
    assert!(!html.contains("Fetching from Gemini AI"), "overlay shown while idle: {html}");
}

struct OfflineGenerator;

#[async_trait::async_trait]
impl ContentGenerator for OfflineGenerator {
    async fn generate_topic(&self, _title: &str) -> Result<TopicContent, GenerationError> {
        Err(GenerationError::EmptyResponse)
    }

    async fn generate_grand_quiz(&self) -> Result<GrandQuiz, GenerationError> {
        Err(GenerationError::EmptyResponse)
    }

    async fn generate_grand_deck(&self) -> Result<GrandDeck, GenerationError> {
        Err(GenerationError::EmptyResponse)
    }
}

#[tokio::test(flavor = "current_thread")]
async fn shell_smoke_hides_hint_when_generator_configured() {
    let mut harness =
        setup_view_harness_with_generator(ViewKind::Shell, true, Some(Arc::new(OfflineGenerator)))
            .await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Admin Capture"), "missing admin toggle in {html}");
    assert!(!html.contains("No API key configured"), "unexpected hint in {html}");
}
