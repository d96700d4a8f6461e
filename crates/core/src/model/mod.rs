mod content;
mod grand;
mod ids;
mod progress;
mod question;
mod settings;
mod topic;

pub use content::{
    ContentStatus, ContentValidationError, DIGITIZING_SENTINEL, PLACEHOLDER_ENGLISH,
    PLACEHOLDER_MARATHI, TopicContent, TopicContentDraft,
};
pub use grand::{GrandDeck, GrandDeckDraft, GrandQuiz, GrandQuizDraft};
pub use ids::{ParseIdError, TopicId};
pub use progress::CompletedTopics;
pub use question::{
    Difficulty, Flashcard, FlashcardDraft, FlashcardError, OPTION_COUNT, Question, QuestionDraft,
    QuestionError,
};
pub use settings::{GeneratorSettings, GeneratorSettingsDraft, SettingsError};
pub use topic::Topic;
