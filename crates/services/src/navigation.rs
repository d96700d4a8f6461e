//! Screen selection and the single in-flight loading flag.
//!
//! Navigation runs in two phases so a UI can release its state borrow while
//! the remote call is pending: `begin` validates the intent and either applies
//! it or hands back a [`PendingFetch`]; the caller awaits [`PendingFetch::run`]
//! and passes the outcome to `finish`. An `Exit` while the fetch is in flight
//! detaches it: the outcome still clears the busy flag but no longer moves
//! the screen.

use samskrita_core::model::{Topic, TopicId};
use tracing::debug;

use crate::content_resolver::ContentResolver;
use crate::error::{NavigationError, ProgressError};
use crate::progress::ProgressTracker;
use crate::quiz_session::{QuizCompleted, QuizScope};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Home,
    Topic(Topic),
    GrandQuiz,
    GrandFlashcards,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    OpenTopic(TopicId),
    GrandQuiz,
    GrandFlashcards,
    Exit,
}

/// Result of [`ViewController::begin`].
pub enum Transition {
    /// The new mode is already in place.
    Applied,
    /// A remote fetch must finish first; the busy flag is set.
    Pending(PendingFetch),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchTarget {
    Topic(Topic),
    GrandQuiz,
    GrandDeck,
}

impl FetchTarget {
    fn mode(self) -> ViewMode {
        match self {
            FetchTarget::Topic(topic) => ViewMode::Topic(topic),
            FetchTarget::GrandQuiz => ViewMode::GrandQuiz,
            FetchTarget::GrandDeck => ViewMode::GrandFlashcards,
        }
    }
}

/// A fetch detached from the controller, safe to await without holding it.
pub struct PendingFetch {
    resolver: ContentResolver,
    target: FetchTarget,
    admin_mode: bool,
    request: u64,
}

impl PendingFetch {
    /// Run the fetch. Captured content lands in the session cache even if the
    /// outcome is never applied.
    pub async fn run(self) -> FetchOutcome {
        let failure = match self.target {
            FetchTarget::Topic(topic) => {
                self.resolver.resolve(topic, self.admin_mode).await.failure
            }
            FetchTarget::GrandQuiz => {
                self.resolver
                    .resolve_grand_quiz(self.admin_mode)
                    .await
                    .failure
            }
            FetchTarget::GrandDeck => {
                self.resolver
                    .resolve_grand_deck(self.admin_mode)
                    .await
                    .failure
            }
        };
        FetchOutcome {
            mode: self.target.mode(),
            failure,
            request: self.request,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    pub mode: ViewMode,
    pub failure: Option<String>,
    request: u64,
}

/// Owns the current screen, the admin flag and the busy flag.
#[derive(Clone)]
pub struct ViewController {
    resolver: ContentResolver,
    progress: ProgressTracker,
    mode: ViewMode,
    admin_mode: bool,
    busy: bool,
    notice: Option<String>,
    next_request: u64,
    awaited: Option<u64>,
}

impl ViewController {
    #[must_use]
    pub fn new(resolver: ContentResolver, progress: ProgressTracker) -> Self {
        Self {
            resolver,
            progress,
            mode: ViewMode::Home,
            admin_mode: false,
            busy: false,
            notice: None,
            next_request: 0,
            awaited: None,
        }
    }

    #[must_use]
    pub fn with_admin_mode(mut self, enabled: bool) -> Self {
        self.admin_mode = enabled;
        self
    }

    #[must_use]
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    #[must_use]
    pub fn admin_mode(&self) -> bool {
        self.admin_mode
    }

    pub fn set_admin_mode(&mut self, enabled: bool) {
        self.admin_mode = enabled;
    }

    pub fn toggle_admin_mode(&mut self) -> bool {
        self.admin_mode = !self.admin_mode;
        self.admin_mode
    }

    #[must_use]
    pub fn resolver(&self) -> &ContentResolver {
        &self.resolver
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    /// Last remote failure, shown only while admin mode is on.
    #[must_use]
    pub fn operator_notice(&self) -> Option<&str> {
        if self.admin_mode {
            self.notice.as_deref()
        } else {
            None
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Validate `intent` and apply it, or start the fetch it needs.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::Busy` while a fetch is in flight (except for
    /// `Exit`), `NavigationError::NotAtHome` when a screen is opened from
    /// anywhere but home, and `NavigationError::UnknownTopic` for ids outside
    /// the catalog.
    pub fn begin(&mut self, intent: Intent) -> Result<Transition, NavigationError> {
        if intent == Intent::Exit {
            self.mode = ViewMode::Home;
            self.awaited = None;
            return Ok(Transition::Applied);
        }
        if self.busy {
            return Err(NavigationError::Busy);
        }
        if self.mode != ViewMode::Home {
            return Err(NavigationError::NotAtHome);
        }

        let target = match intent {
            Intent::OpenTopic(id) => {
                let topic = self
                    .progress
                    .catalog()
                    .get(id)
                    .ok_or(NavigationError::UnknownTopic(id))?;
                FetchTarget::Topic(topic)
            }
            Intent::GrandQuiz => FetchTarget::GrandQuiz,
            Intent::GrandFlashcards => FetchTarget::GrandDeck,
            Intent::Exit => return Ok(Transition::Applied),
        };

        let needs_fetch = match target {
            FetchTarget::Topic(topic) => self.resolver.requires_fetch(topic.id(), self.admin_mode),
            FetchTarget::GrandQuiz => self.resolver.grand_quiz_requires_fetch(self.admin_mode),
            FetchTarget::GrandDeck => self.resolver.grand_deck_requires_fetch(self.admin_mode),
        };

        if !needs_fetch {
            self.mode = target.mode();
            self.notice = None;
            debug!(mode = ?self.mode, "navigated");
            return Ok(Transition::Applied);
        }

        let request = self.next_request;
        self.next_request += 1;
        self.awaited = Some(request);
        self.busy = true;
        Ok(Transition::Pending(PendingFetch {
            resolver: self.resolver.clone(),
            target,
            admin_mode: self.admin_mode,
            request,
        }))
    }

    /// Clear the busy flag and record the fetch failure, if any.
    ///
    /// The screen only changes when the outcome answers the request still
    /// awaited; an `Exit` in between keeps the user on home.
    pub fn finish(&mut self, outcome: FetchOutcome) {
        self.busy = false;
        self.notice = outcome.failure;
        if self.awaited.take() == Some(outcome.request) {
            self.mode = outcome.mode;
            debug!(mode = ?self.mode, "navigated after fetch");
        } else {
            debug!(mode = ?outcome.mode, "fetch finished after exit; staying put");
        }
    }

    /// `begin`, the fetch if any, then `finish`.
    ///
    /// # Errors
    ///
    /// See [`ViewController::begin`].
    pub async fn dispatch(&mut self, intent: Intent) -> Result<(), NavigationError> {
        if let Transition::Pending(pending) = self.begin(intent)? {
            let outcome = pending.run().await;
            self.finish(outcome);
        }
        Ok(())
    }

    /// Record a finished quiz. Topic quizzes mark their topic complete.
    ///
    /// # Errors
    ///
    /// Propagates `ProgressError` from the tracker.
    pub async fn on_quiz_completed(&self, event: QuizCompleted) -> Result<bool, ProgressError> {
        match event.scope {
            QuizScope::Topic(id) => self.progress.mark_complete(id).await,
            QuizScope::Grand => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use samskrita_core::model::{GrandDeck, GrandQuiz, TopicContent};
    use samskrita_core::{Catalog, ContentStore};
    use storage::repository::InMemoryRepository;

    use super::*;
    use crate::ai::ContentGenerator;
    use crate::error::GenerationError;

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

    async fn controller(generator: Option<Arc<dyn ContentGenerator>>) -> ViewController {
        let resolver = ContentResolver::new(ContentStore::builtin(), generator);
        let progress =
            ProgressTracker::load(Arc::new(InMemoryRepository::new()), Catalog::builtin()).await;
        ViewController::new(resolver, progress)
    }

    #[tokio::test]
    async fn starts_home_and_exit_returns_home() {
        let mut ctrl = controller(None).await;
        assert_eq!(ctrl.mode(), ViewMode::Home);

        ctrl.dispatch(Intent::GrandQuiz).await.unwrap();
        assert_eq!(ctrl.mode(), ViewMode::GrandQuiz);
        ctrl.dispatch(Intent::Exit).await.unwrap();
        assert_eq!(ctrl.mode(), ViewMode::Home);
    }

    #[tokio::test]
    async fn unknown_topic_is_rejected() {
        let mut ctrl = controller(None).await;
        let err = ctrl.dispatch(Intent::OpenTopic(TopicId::new(22))).await.unwrap_err();
        assert_eq!(err, NavigationError::UnknownTopic(TopicId::new(22)));
        assert_eq!(ctrl.mode(), ViewMode::Home);
    }

    #[tokio::test]
    async fn busy_blocks_other_intents_until_finish() {
        let mut ctrl = controller(Some(Arc::new(FailingGenerator))).await;
        ctrl.set_admin_mode(true);

        let Transition::Pending(pending) = ctrl.begin(Intent::OpenTopic(TopicId::new(23))).unwrap()
        else {
            panic!("topic 23 needs a fetch in admin mode");
        };
        assert!(ctrl.is_busy());
        assert!(matches!(
            ctrl.begin(Intent::GrandFlashcards),
            Err(NavigationError::Busy)
        ));

        let outcome = pending.run().await;
        ctrl.finish(outcome);
        assert!(!ctrl.is_busy());
        assert!(matches!(ctrl.mode(), ViewMode::Topic(topic) if topic.id() == TopicId::new(23)));
        assert!(ctrl.operator_notice().is_some());

        ctrl.set_admin_mode(false);
        assert_eq!(ctrl.operator_notice(), None);
    }

    #[tokio::test]
    async fn exit_is_allowed_while_busy() {
        let mut ctrl = controller(Some(Arc::new(FailingGenerator))).await;
        ctrl.set_admin_mode(true);
        let transition = ctrl.begin(Intent::GrandQuiz).unwrap();
        assert!(matches!(transition, Transition::Pending(_)));
        assert!(matches!(ctrl.begin(Intent::Exit), Ok(Transition::Applied)));
        assert_eq!(ctrl.mode(), ViewMode::Home);
    }

    #[tokio::test]
    async fn late_fetch_after_exit_stays_home() {
        let mut ctrl = controller(Some(Arc::new(FailingGenerator))).await;
        ctrl.set_admin_mode(true);

        let Transition::Pending(pending) = ctrl.begin(Intent::OpenTopic(TopicId::new(23))).unwrap()
        else {
            panic!("topic 23 needs a fetch in admin mode");
        };
        assert!(matches!(ctrl.begin(Intent::Exit), Ok(Transition::Applied)));

        let outcome = pending.run().await;
        ctrl.finish(outcome);
        assert_eq!(ctrl.mode(), ViewMode::Home);
        assert!(!ctrl.is_busy());
        assert!(ctrl.operator_notice().is_some());

        ctrl.dispatch(Intent::GrandFlashcards).await.unwrap();
        assert_eq!(ctrl.mode(), ViewMode::GrandFlashcards);
    }

    #[tokio::test]
    async fn screens_open_only_from_home() {
        let mut ctrl = controller(None).await;
        ctrl.dispatch(Intent::OpenTopic(TopicId::new(1))).await.unwrap();

        assert!(matches!(
            ctrl.begin(Intent::GrandQuiz),
            Err(NavigationError::NotAtHome)
        ));
        assert!(matches!(
            ctrl.begin(Intent::OpenTopic(TopicId::new(2))),
            Err(NavigationError::NotAtHome)
        ));
        assert!(matches!(ctrl.mode(), ViewMode::Topic(topic) if topic.id() == TopicId::new(1)));

        ctrl.dispatch(Intent::Exit).await.unwrap();
        ctrl.dispatch(Intent::OpenTopic(TopicId::new(2))).await.unwrap();
        assert!(matches!(ctrl.mode(), ViewMode::Topic(topic) if topic.id() == TopicId::new(2)));
    }

    #[tokio::test]
    async fn preloaded_topic_does_not_set_busy() {
        let mut ctrl = controller(Some(Arc::new(FailingGenerator))).await;
        ctrl.set_admin_mode(true);
        let transition = ctrl.begin(Intent::OpenTopic(TopicId::new(1))).unwrap();
        assert!(matches!(transition, Transition::Applied));
        assert!(!ctrl.is_busy());
    }

    #[tokio::test]
    async fn admin_toggle_flips_flag() {
        let mut ctrl = controller(None).await;
        assert!(ctrl.toggle_admin_mode());
        assert!(ctrl.admin_mode());
        assert!(!ctrl.toggle_admin_mode());
    }

    #[tokio::test]
    async fn grand_completion_does_not_touch_progress() {
        let ctrl = controller(None).await;
        let event = QuizCompleted {
            scope: QuizScope::Grand,
            score: 30,
            total: 30,
        };
        assert!(!ctrl.on_quiz_completed(event).await.unwrap());
        assert_eq!(ctrl.progress().percentage(), 0);
    }
}
