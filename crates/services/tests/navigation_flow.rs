use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use samskrita_core::model::{
    ContentStatus, GrandDeck, GrandQuiz, PLACEHOLDER_ENGLISH, TopicContent, TopicContentDraft,
    TopicId,
};
use samskrita_core::{Catalog, ContentStore};
use services::{
    AppServices, ContentGenerator, ContentResolver, ContentSource, GenerationError, Intent,
    QuizScope, QuizSession, ViewMode,
};
use storage::repository::{KeyValueStore, Storage, StorageError};

struct ThrowingGenerator;

#[async_trait]
impl ContentGenerator for ThrowingGenerator {
    async fn generate_topic(&self, _title: &str) -> Result<TopicContent, GenerationError> {
        Err(GenerationError::HttpStatus(reqwest::StatusCode::INTERNAL_SERVER_ERROR))
    }

    async fn generate_grand_quiz(&self) -> Result<GrandQuiz, GenerationError> {
        Err(GenerationError::EmptyResponse)
    }

    async fn generate_grand_deck(&self) -> Result<GrandDeck, GenerationError> {
        Err(GenerationError::EmptyResponse)
    }
}

/// Store that counts writes, to observe persistence calls.
#[derive(Default)]
struct CountingStore {
    inner: storage::repository::InMemoryRepository,
    writes: AtomicUsize,
}

#[async_trait]
impl KeyValueStore for CountingStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.set(key, value).await
    }
}

fn draft(summary: &str) -> TopicContentDraft {
    TopicContentDraft {
        summary_english: summary.to_string(),
        summary_marathi: "सारांश".to_string(),
        ..TopicContentDraft::default()
    }
}

#[tokio::test]
async fn every_topic_resolves_with_empty_sources_and_throwing_generator() {
    let resolver = ContentResolver::new(ContentStore::empty(), Some(Arc::new(ThrowingGenerator)));
    for topic in Catalog::builtin().topics() {
        for admin in [false, true] {
            let resolution = resolver.resolve(*topic, admin).await;
            assert_eq!(resolution.source, ContentSource::Placeholder);
            assert_eq!(resolution.content.summary_english(), PLACEHOLDER_ENGLISH);
            assert_eq!(resolution.failure.is_some(), admin);
        }
    }
}

#[tokio::test]
async fn topic_one_resolves_to_its_preloaded_content() {
    let resolver = ContentResolver::new(ContentStore::builtin(), None);
    let topic = Catalog::builtin().get(TopicId::new(1)).unwrap();
    let resolution = resolver.resolve(topic, false).await;

    let expected = ContentStore::builtin().get(TopicId::new(1)).cloned().unwrap();
    assert_eq!(resolution.source, ContentSource::Preloaded);
    assert_eq!(resolution.content, expected);
    assert_eq!(resolution.content.practice_questions().len(), 5);
    assert_eq!(resolution.content.flashcards().len(), 5);
}

#[tokio::test]
async fn placeholder_status_preloaded_entry_is_treated_as_absent() {
    let mut preloaded = ContentStore::builtin();
    let legacy = draft("This lesson is being digitized from the Bhaashaa Praveshah book.")
        .validate()
        .unwrap();
    assert_eq!(legacy.status(), ContentStatus::Placeholder);
    preloaded.insert(TopicId::new(23), legacy);

    let resolver = ContentResolver::new(preloaded, None);
    assert_eq!(resolver.lookup(TopicId::new(23)), None);

    let topic = Catalog::builtin().get(TopicId::new(23)).unwrap();
    let resolution = resolver.resolve(topic, false).await;
    assert_eq!(resolution.content, TopicContent::placeholder());
    assert_eq!(resolution.source, ContentSource::Placeholder);
}

#[tokio::test]
async fn session_capture_beats_preloaded() {
    struct FixedGenerator;

    #[async_trait]
    impl ContentGenerator for FixedGenerator {
        async fn generate_topic(&self, _title: &str) -> Result<TopicContent, GenerationError> {
            Ok(draft("Fresh lesson.").validate()?)
        }

        async fn generate_grand_quiz(&self) -> Result<GrandQuiz, GenerationError> {
            Err(GenerationError::EmptyResponse)
        }

        async fn generate_grand_deck(&self) -> Result<GrandDeck, GenerationError> {
            Err(GenerationError::EmptyResponse)
        }
    }

    // Topic 5 has no digitized content, so admin mode captures it.
    let resolver = ContentResolver::new(ContentStore::empty(), Some(Arc::new(FixedGenerator)));
    let topic = Catalog::builtin().get(TopicId::new(5)).unwrap();
    let captured = resolver.resolve(topic, true).await;
    assert_eq!(captured.source, ContentSource::Generated);

    let again = resolver.resolve(topic, false).await;
    assert_eq!(again.source, ContentSource::Session);
    assert_eq!(again.content.summary_english(), "Fresh lesson.");
}

#[tokio::test]
async fn admin_off_never_calls_generator_for_topic_23() {
    let services = AppServices::from_parts(
        Storage::in_memory(),
        ContentStore::builtin(),
        Some(Arc::new(ThrowingGenerator)),
    )
    .await;
    let mut ctrl = services.controller(false);

    ctrl.dispatch(Intent::OpenTopic(TopicId::new(23))).await.unwrap();
    assert!(matches!(ctrl.mode(), ViewMode::Topic(topic) if topic.id() == TopicId::new(23)));
    assert_eq!(
        ctrl.resolver().content_for(TopicId::new(23)),
        TopicContent::placeholder()
    );
    assert_eq!(ctrl.operator_notice(), None);
    assert!(!ctrl.is_busy());
}

#[tokio::test]
async fn throwing_generator_in_admin_mode_still_shows_content() {
    let services = AppServices::from_parts(
        Storage::in_memory(),
        ContentStore::builtin(),
        Some(Arc::new(ThrowingGenerator)),
    )
    .await;
    let mut ctrl = services.controller(true);

    ctrl.dispatch(Intent::OpenTopic(TopicId::new(41))).await.unwrap();
    assert!(!ctrl.is_busy());
    assert_eq!(
        ctrl.resolver().content_for(TopicId::new(41)).summary_english(),
        PLACEHOLDER_ENGLISH
    );
    assert!(ctrl.operator_notice().is_some());

    ctrl.dispatch(Intent::Exit).await.unwrap();
    ctrl.dispatch(Intent::OpenTopic(TopicId::new(1))).await.unwrap();
    assert_eq!(ctrl.operator_notice(), None);
}

#[tokio::test]
async fn completing_topic_one_quiz_marks_progress_once() {
    let store = Arc::new(CountingStore::default());
    let storage = Storage {
        kv: store.clone(),
    };
    let services = AppServices::from_parts(storage, ContentStore::builtin(), None).await;
    let mut ctrl = services.controller(false);

    ctrl.dispatch(Intent::OpenTopic(TopicId::new(1))).await.unwrap();
    let content = ctrl.resolver().content_for(TopicId::new(1));
    let mut quiz = QuizSession::new(
        QuizScope::Topic(TopicId::new(1)),
        content.practice_questions().to_vec(),
    );

    let mut completions = Vec::new();
    while let Some(question) = quiz.current().cloned() {
        quiz.select(question.correct_answer());
        quiz.check();
        if let Some(done) = quiz.next() {
            completions.push(done);
        }
    }

    assert_eq!(completions.len(), 1);
    assert_eq!(completions[0].score, 5);
    assert_eq!(completions[0].total, 5);

    assert!(ctrl.on_quiz_completed(completions[0]).await.unwrap());
    assert_eq!(store.writes.load(Ordering::SeqCst), 1);
    assert_eq!(ctrl.progress().percentage(), 4);
    assert!(ctrl.progress().is_complete(TopicId::new(1)));

    ctrl.dispatch(Intent::Exit).await.unwrap();
    assert_eq!(ctrl.mode(), ViewMode::Home);
    assert_eq!(ctrl.progress().percentage(), 4);
}
