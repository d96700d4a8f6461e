use serde::Deserialize;

use crate::model::content::{ContentValidationError, validate_flashcards, validate_questions};
use crate::model::question::{Flashcard, FlashcardDraft, Question, QuestionDraft};

/// Cross-topic revision quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrandQuiz {
    questions: Vec<Question>,
}

impl GrandQuiz {
    pub(crate) fn builtin(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

/// Cross-topic revision flashcards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrandDeck {
    flashcards: Vec<Flashcard>,
}

impl GrandDeck {
    pub(crate) fn builtin(flashcards: Vec<Flashcard>) -> Self {
        Self { flashcards }
    }

    #[must_use]
    pub fn flashcards(&self) -> &[Flashcard] {
        &self.flashcards
    }
}

/// Remote grand-quiz payload: either `{"questions": [...]}` or a bare array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum GrandQuizDraft {
    Wrapped { questions: Vec<QuestionDraft> },
    Bare(Vec<QuestionDraft>),
}

impl GrandQuizDraft {
    /// # Errors
    ///
    /// Returns `ContentValidationError` when the collection is empty or any
    /// question is invalid.
    pub fn validate(self) -> Result<GrandQuiz, ContentValidationError> {
        let drafts = match self {
            GrandQuizDraft::Wrapped { questions } | GrandQuizDraft::Bare(questions) => questions,
        };
        if drafts.is_empty() {
            return Err(ContentValidationError::EmptyCollection);
        }
        Ok(GrandQuiz {
            questions: validate_questions(drafts)?,
        })
    }
}

/// Remote grand-deck payload: either `{"flashcards": [...]}` or a bare array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum GrandDeckDraft {
    Wrapped { flashcards: Vec<FlashcardDraft> },
    Bare(Vec<FlashcardDraft>),
}

impl GrandDeckDraft {
    /// # Errors
    ///
    /// Returns `ContentValidationError` when the collection is empty or any
    /// card is invalid.
    pub fn validate(self) -> Result<GrandDeck, ContentValidationError> {
        let drafts = match self {
            GrandDeckDraft::Wrapped { flashcards } | GrandDeckDraft::Bare(flashcards) => {
                flashcards
            }
        };
        if drafts.is_empty() {
            return Err(ContentValidationError::EmptyCollection);
        }
        Ok(GrandDeck {
            flashcards: validate_flashcards(drafts)?,
        })
    }
}
