#![forbid(unsafe_code)]

pub mod ai;
pub mod app_services;
pub mod content_resolver;
pub mod error;
pub mod navigation;
pub mod progress;
pub mod quiz_session;

pub use ai::{ContentGenerator, GeminiGenerator, GeneratorCapability};
pub use app_services::AppServices;
pub use content_resolver::{
    ContentResolver, ContentSource, GrandDeckResolution, GrandQuizResolution, Resolution,
    SessionCache,
};
pub use error::{AppServicesError, GenerationError, NavigationError, ProgressError};
pub use navigation::{FetchOutcome, Intent, PendingFetch, Transition, ViewController, ViewMode};
pub use progress::{PROGRESS_KEY, ProgressTracker};
pub use quiz_session::{QuizCompleted, QuizScope, QuizSession};
