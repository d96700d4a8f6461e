//! Picks the lesson material shown for a topic.
//!
//! Precedence: content captured this session, then digitized pre-loaded
//! content, then (admin mode with a generator) a remote fetch, then the
//! generic placeholder. Remote failures are logged and degrade; they never
//! reach the caller as errors.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use samskrita_core::ContentStore;
use samskrita_core::model::{GrandDeck, GrandQuiz, Topic, TopicContent, TopicId};
use samskrita_core::preloaded;
use tracing::{debug, info, warn};

use crate::ai::ContentGenerator;
use crate::error::GenerationError;

/// Where a resolved piece of content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    Session,
    Preloaded,
    Generated,
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub content: TopicContent,
    pub source: ContentSource,
    /// Remote failure message, when a fetch was attempted and failed.
    pub failure: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrandQuizResolution {
    pub quiz: GrandQuiz,
    pub source: ContentSource,
    pub failure: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrandDeckResolution {
    pub deck: GrandDeck,
    pub source: ContentSource,
    pub failure: Option<String>,
}

/// Content captured from the generator during this run. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct SessionCache {
    topics: HashMap<TopicId, TopicContent>,
    grand_quiz: Option<GrandQuiz>,
    grand_deck: Option<GrandDeck>,
}

impl SessionCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn topic(&self, id: TopicId) -> Option<&TopicContent> {
        self.topics.get(&id)
    }

    /// Capture content for `id`. An earlier capture wins.
    pub fn capture_topic(&mut self, id: TopicId, content: TopicContent) -> &TopicContent {
        self.topics.entry(id).or_insert(content)
    }

    #[must_use]
    pub fn grand_quiz(&self) -> Option<&GrandQuiz> {
        self.grand_quiz.as_ref()
    }

    pub fn capture_grand_quiz(&mut self, quiz: GrandQuiz) -> &GrandQuiz {
        self.grand_quiz.get_or_insert(quiz)
    }

    #[must_use]
    pub fn grand_deck(&self) -> Option<&GrandDeck> {
        self.grand_deck.as_ref()
    }

    pub fn capture_grand_deck(&mut self, deck: GrandDeck) -> &GrandDeck {
        self.grand_deck.get_or_insert(deck)
    }

    #[must_use]
    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }
}

#[derive(Clone)]
pub struct ContentResolver {
    preloaded: Arc<ContentStore>,
    session: Arc<Mutex<SessionCache>>,
    generator: Option<Arc<dyn ContentGenerator>>,
}

impl ContentResolver {
    #[must_use]
    pub fn new(preloaded: ContentStore, generator: Option<Arc<dyn ContentGenerator>>) -> Self {
        Self {
            preloaded: Arc::new(preloaded),
            session: Arc::new(Mutex::new(SessionCache::new())),
            generator,
        }
    }

    /// Whether a generator is wired in.
    #[must_use]
    pub fn is_capable(&self) -> bool {
        self.generator.is_some()
    }

    fn with_session<T>(&self, f: impl FnOnce(&mut SessionCache) -> T) -> T {
        let mut guard = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    fn lookup_with_source(&self, id: TopicId) -> Option<(TopicContent, ContentSource)> {
        if let Some(content) = self.with_session(|cache| cache.topic(id).cloned()) {
            return Some((content, ContentSource::Session));
        }
        self.preloaded
            .digitized(id)
            .map(|content| (content.clone(), ContentSource::Preloaded))
    }

    /// Real content for `id` without touching the network.
    #[must_use]
    pub fn lookup(&self, id: TopicId) -> Option<TopicContent> {
        self.lookup_with_source(id).map(|(content, _)| content)
    }

    /// What the topic view renders: real content or the placeholder.
    #[must_use]
    pub fn content_for(&self, id: TopicId) -> TopicContent {
        self.lookup(id).unwrap_or_else(TopicContent::placeholder)
    }

    /// Whether `resolve` would call the generator.
    #[must_use]
    pub fn requires_fetch(&self, id: TopicId, admin_mode: bool) -> bool {
        admin_mode && self.is_capable() && self.lookup_with_source(id).is_none()
    }

    #[must_use]
    pub fn grand_quiz_requires_fetch(&self, admin_mode: bool) -> bool {
        admin_mode && self.is_capable() && self.with_session(|cache| cache.grand_quiz().is_none())
    }

    #[must_use]
    pub fn grand_deck_requires_fetch(&self, admin_mode: bool) -> bool {
        admin_mode && self.is_capable() && self.with_session(|cache| cache.grand_deck().is_none())
    }

    /// Resolve content for `topic`. Never fails.
    pub async fn resolve(&self, topic: Topic, admin_mode: bool) -> Resolution {
        let id = topic.id();
        if let Some((content, source)) = self.lookup_with_source(id) {
            debug!(topic = %id, ?source, "resolved topic content");
            return Resolution {
                content,
                source,
                failure: None,
            };
        }

        let mut failure = None;
        if admin_mode && let Some(generator) = self.generator.clone() {
            let generated = generator
                .generate_topic(topic.title())
                .await
                .and_then(|content| {
                    if content.is_digitized() {
                        Ok(content)
                    } else {
                        Err(GenerationError::PlaceholderContent)
                    }
                });
            match generated {
                Ok(content) => {
                    info!(topic = %id, title = topic.title(), "captured generated topic content");
                    let content = self.with_session(|cache| cache.capture_topic(id, content).clone());
                    return Resolution {
                        content,
                        source: ContentSource::Generated,
                        failure: None,
                    };
                }
                Err(err) => {
                    warn!(topic = %id, error = %err, "topic generation failed; using placeholder");
                    failure = Some(format!("Could not fetch \"{}\": {err}", topic.title()));
                }
            }
        }

        debug!(topic = %id, "resolved topic placeholder");
        Resolution {
            content: TopicContent::placeholder(),
            source: ContentSource::Placeholder,
            failure,
        }
    }

    /// Captured grand quiz, or the pre-loaded one.
    #[must_use]
    pub fn grand_quiz(&self) -> GrandQuiz {
        self.with_session(|cache| cache.grand_quiz().cloned())
            .unwrap_or_else(preloaded::grand_quiz)
    }

    #[must_use]
    pub fn grand_deck(&self) -> GrandDeck {
        self.with_session(|cache| cache.grand_deck().cloned())
            .unwrap_or_else(preloaded::grand_deck)
    }

    pub async fn resolve_grand_quiz(&self, admin_mode: bool) -> GrandQuizResolution {
        if let Some(quiz) = self.with_session(|cache| cache.grand_quiz().cloned()) {
            return GrandQuizResolution {
                quiz,
                source: ContentSource::Session,
                failure: None,
            };
        }

        let mut failure = None;
        if admin_mode && let Some(generator) = self.generator.clone() {
            match generator.generate_grand_quiz().await {
                Ok(quiz) => {
                    info!(questions = quiz.questions().len(), "captured generated grand quiz");
                    let quiz = self.with_session(|cache| cache.capture_grand_quiz(quiz).clone());
                    return GrandQuizResolution {
                        quiz,
                        source: ContentSource::Generated,
                        failure: None,
                    };
                }
                Err(err) => {
                    warn!(error = %err, "grand quiz generation failed; using pre-loaded quiz");
                    failure = Some(format!("Could not fetch the grand quiz: {err}"));
                }
            }
        }

        GrandQuizResolution {
            quiz: preloaded::grand_quiz(),
            source: ContentSource::Preloaded,
            failure,
        }
    }

    pub async fn resolve_grand_deck(&self, admin_mode: bool) -> GrandDeckResolution {
        if let Some(deck) = self.with_session(|cache| cache.grand_deck().cloned()) {
            return GrandDeckResolution {
                deck,
                source: ContentSource::Session,
                failure: None,
            };
        }

        let mut failure = None;
        if admin_mode && let Some(generator) = self.generator.clone() {
            match generator.generate_grand_deck().await {
                Ok(deck) => {
                    info!(cards = deck.flashcards().len(), "captured generated grand deck");
                    let deck = self.with_session(|cache| cache.capture_grand_deck(deck).clone());
                    return GrandDeckResolution {
                        deck,
                        source: ContentSource::Generated,
                        failure: None,
                    };
                }
                Err(err) => {
                    warn!(error = %err, "grand deck generation failed; using pre-loaded deck");
                    failure = Some(format!("Could not fetch the master deck: {err}"));
                }
            }
        }

        GrandDeckResolution {
            deck: preloaded::grand_deck(),
            source: ContentSource::Preloaded,
            failure,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use samskrita_core::Catalog;
    use samskrita_core::model::ContentStatus;

    use super::*;
    use crate::ai::gemini::{parse_grand_deck, parse_grand_quiz, parse_topic_payload};

    const GENERATED: &str = r#"{
        "summaryEnglish": "Generated summary.",
        "summaryMarathi": "तयार सारांश.",
        "practiceQuestions": [],
        "flashcards": [{ "front": "f", "back": "b" }]
    }"#;

    #[derive(Default)]
    struct CountingGenerator {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ContentGenerator for CountingGenerator {
        async fn generate_topic(&self, _title: &str) -> Result<TopicContent, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            parse_topic_payload(GENERATED)
        }

        async fn generate_grand_quiz(&self) -> Result<GrandQuiz, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            parse_grand_quiz(r#"[{"question":"q","options":["a","b","c","d"],"correctAnswer":"a"}]"#)
        }

        async fn generate_grand_deck(&self) -> Result<GrandDeck, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            parse_grand_deck(r#"[{"front":"f","back":"b"}]"#)
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl ContentGenerator for FailingGenerator {
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

    fn topic(id: u32) -> Topic {
        Catalog::builtin().get(TopicId::new(id)).expect("catalog topic")
    }

    #[tokio::test]
    async fn preloaded_digitized_content_wins_without_generator() {
        let resolver = ContentResolver::new(ContentStore::builtin(), None);
        let resolution = resolver.resolve(topic(1), true).await;
        assert_eq!(resolution.source, ContentSource::Preloaded);
        assert_eq!(resolution.content.practice_questions().len(), 5);
        assert_eq!(resolution.content.flashcards().len(), 5);
    }

    #[tokio::test]
    async fn missing_topic_without_admin_is_placeholder() {
        let generator = Arc::new(CountingGenerator::default());
        let resolver = ContentResolver::new(ContentStore::builtin(), Some(generator.clone()));

        let resolution = resolver.resolve(topic(23), false).await;
        assert_eq!(resolution.source, ContentSource::Placeholder);
        assert_eq!(resolution.content, TopicContent::placeholder());
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
        assert!(!resolver.requires_fetch(TopicId::new(23), false));
    }

    #[tokio::test]
    async fn generated_content_is_captured_once() {
        let generator = Arc::new(CountingGenerator::default());
        let resolver = ContentResolver::new(ContentStore::builtin(), Some(generator.clone()));
        assert!(resolver.requires_fetch(TopicId::new(23), true));

        let first = resolver.resolve(topic(23), true).await;
        assert_eq!(first.source, ContentSource::Generated);
        assert_eq!(first.content.status(), ContentStatus::Digitized);

        let second = resolver.resolve(topic(23), true).await;
        assert_eq!(second.source, ContentSource::Session);
        assert_eq!(second.content, first.content);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
        assert!(!resolver.requires_fetch(TopicId::new(23), true));
        assert_eq!(resolver.lookup(TopicId::new(23)), Some(first.content));
    }

    #[tokio::test]
    async fn generator_failure_degrades_to_placeholder() {
        let resolver = ContentResolver::new(ContentStore::builtin(), Some(Arc::new(FailingGenerator)));
        let resolution = resolver.resolve(topic(24), true).await;
        assert_eq!(resolution.source, ContentSource::Placeholder);
        assert!(resolution.failure.is_some());
        assert_eq!(resolver.lookup(TopicId::new(24)), None);
    }

    struct PlaceholderGenerator;

    #[async_trait]
    impl ContentGenerator for PlaceholderGenerator {
        async fn generate_topic(&self, _title: &str) -> Result<TopicContent, GenerationError> {
            parse_topic_payload(
                r#"{
                    "summaryEnglish": "Full content for this topic is being digitized from the Bhaashaa Praveshah book.",
                    "summaryMarathi": "मजकूर लवकरच.",
                    "practiceQuestions": [],
                    "flashcards": []
                }"#,
            )
        }

        async fn generate_grand_quiz(&self) -> Result<GrandQuiz, GenerationError> {
            Err(GenerationError::EmptyResponse)
        }

        async fn generate_grand_deck(&self) -> Result<GrandDeck, GenerationError> {
            Err(GenerationError::EmptyResponse)
        }
    }

    #[tokio::test]
    async fn generated_placeholder_is_not_captured() {
        let resolver =
            ContentResolver::new(ContentStore::builtin(), Some(Arc::new(PlaceholderGenerator)));
        let resolution = resolver.resolve(topic(23), true).await;
        assert_eq!(resolution.source, ContentSource::Placeholder);
        assert_eq!(resolution.content, TopicContent::placeholder());
        assert!(resolution.failure.is_some());
        assert_eq!(resolver.lookup(TopicId::new(23)), None);
        assert!(resolver.requires_fetch(TopicId::new(23), true));
    }

    #[tokio::test]
    async fn grand_aggregates_fall_back_to_preloaded() {
        let resolver = ContentResolver::new(ContentStore::builtin(), Some(Arc::new(FailingGenerator)));

        let quiz = resolver.resolve_grand_quiz(true).await;
        assert_eq!(quiz.source, ContentSource::Preloaded);
        assert_eq!(quiz.quiz.questions().len(), 30);
        assert!(quiz.failure.is_some());

        let deck = resolver.resolve_grand_deck(false).await;
        assert_eq!(deck.source, ContentSource::Preloaded);
        assert_eq!(deck.deck.flashcards().len(), 30);
        assert!(deck.failure.is_none());
    }

    #[tokio::test]
    async fn grand_aggregates_are_captured() {
        let generator = Arc::new(CountingGenerator::default());
        let resolver = ContentResolver::new(ContentStore::builtin(), Some(generator.clone()));

        assert!(resolver.grand_quiz_requires_fetch(true));
        let quiz = resolver.resolve_grand_quiz(true).await;
        assert_eq!(quiz.source, ContentSource::Generated);
        assert_eq!(resolver.grand_quiz().questions().len(), 1);
        assert!(!resolver.grand_quiz_requires_fetch(true));

        let deck = resolver.resolve_grand_deck(true).await;
        assert_eq!(deck.source, ContentSource::Generated);
        let again = resolver.resolve_grand_deck(true).await;
        assert_eq!(again.source, ContentSource::Session);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn session_cache_keeps_first_capture() {
        let mut cache = SessionCache::new();
        let first = parse_topic_payload(GENERATED).unwrap();
        let id = TopicId::new(3);
        cache.capture_topic(id, first.clone());
        cache.capture_topic(id, TopicContent::placeholder());
        assert_eq!(cache.topic(id), Some(&first));
        assert_eq!(cache.topic_count(), 1);
    }
}
