use serde::Deserialize;
use thiserror::Error;

use crate::model::question::{
    Flashcard, FlashcardDraft, FlashcardError, Question, QuestionDraft, QuestionError,
};

/// Phrase that marks legacy "still being digitized" filler text.
///
/// Only consulted when decoding payloads that carry no explicit status.
pub const DIGITIZING_SENTINEL: &str = "digitized from the Bhaashaa Praveshah book";

pub const PLACEHOLDER_ENGLISH: &str =
    "Placeholder content. Enable Admin Mode to fetch live data.";
pub const PLACEHOLDER_MARATHI: &str =
    "येथे मजकूर नाही. डेटा मिळवण्यासाठी ॲडमिन मोड सुरू करा.";

//
// ─── STATUS ────────────────────────────────────────────────────────────────────
//

/// Whether a content entry is real lesson material or filler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum ContentStatus {
    Digitized,
    Placeholder,
}

impl ContentStatus {
    /// Classify legacy content that predates the explicit status field.
    #[must_use]
    pub fn infer_from_summary(summary_english: &str) -> Self {
        if summary_english.contains(DIGITIZING_SENTINEL) {
            ContentStatus::Placeholder
        } else {
            ContentStatus::Digitized
        }
    }
}

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContentValidationError {
    #[error("english summary cannot be empty")]
    EmptyEnglishSummary,

    #[error("marathi summary cannot be empty")]
    EmptyMarathiSummary,

    #[error("invalid question {index}: {source}")]
    Question {
        index: usize,
        #[source]
        source: QuestionError,
    },

    #[error("invalid flashcard {index}: {source}")]
    Flashcard {
        index: usize,
        #[source]
        source: FlashcardError,
    },

    #[error("collection is empty")]
    EmptyCollection,
}

pub(crate) fn validate_questions(
    drafts: Vec<QuestionDraft>,
) -> Result<Vec<Question>, ContentValidationError> {
    drafts
        .into_iter()
        .enumerate()
        .map(|(index, draft)| {
            draft
                .validate()
                .map_err(|source| ContentValidationError::Question { index, source })
        })
        .collect()
}

pub(crate) fn validate_flashcards(
    drafts: Vec<FlashcardDraft>,
) -> Result<Vec<Flashcard>, ContentValidationError> {
    drafts
        .into_iter()
        .enumerate()
        .map(|(index, draft)| {
            draft
                .validate()
                .map_err(|source| ContentValidationError::Flashcard { index, source })
        })
        .collect()
}

//
// ─── TOPIC CONTENT ─────────────────────────────────────────────────────────────
//

/// Untrusted lesson content, shaped like the generator's JSON response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicContentDraft {
    pub summary_english: String,
    pub summary_marathi: String,
    #[serde(default)]
    pub practice_questions: Vec<QuestionDraft>,
    #[serde(default)]
    pub flashcards: Vec<FlashcardDraft>,
    #[serde(default)]
    pub status: Option<ContentStatus>,
}

impl TopicContentDraft {
    /// Validate every field and nested item.
    ///
    /// # Errors
    ///
    /// Returns `ContentValidationError` on the first invalid field.
    pub fn validate(self) -> Result<TopicContent, ContentValidationError> {
        let summary_english = self.summary_english.trim().to_string();
        if summary_english.is_empty() {
            return Err(ContentValidationError::EmptyEnglishSummary);
        }
        let summary_marathi = self.summary_marathi.trim().to_string();
        if summary_marathi.is_empty() {
            return Err(ContentValidationError::EmptyMarathiSummary);
        }

        let status = self
            .status
            .unwrap_or_else(|| ContentStatus::infer_from_summary(&summary_english));

        Ok(TopicContent {
            summary_english,
            summary_marathi,
            practice_questions: validate_questions(self.practice_questions)?,
            flashcards: validate_flashcards(self.flashcards)?,
            status,
        })
    }
}

/// Bilingual lesson material for one topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicContent {
    summary_english: String,
    summary_marathi: String,
    practice_questions: Vec<Question>,
    flashcards: Vec<Flashcard>,
    status: ContentStatus,
}

impl TopicContent {
    pub(crate) fn builtin(
        summary_english: &str,
        summary_marathi: &str,
        practice_questions: Vec<Question>,
        flashcards: Vec<Flashcard>,
    ) -> Self {
        Self {
            summary_english: summary_english.to_string(),
            summary_marathi: summary_marathi.to_string(),
            practice_questions,
            flashcards,
            status: ContentStatus::Digitized,
        }
    }

    /// The generic content shown when nothing better is available.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            summary_english: PLACEHOLDER_ENGLISH.to_string(),
            summary_marathi: PLACEHOLDER_MARATHI.to_string(),
            practice_questions: Vec::new(),
            flashcards: Vec::new(),
            status: ContentStatus::Placeholder,
        }
    }

    /// Returns the same content with an overridden status.
    #[must_use]
    pub fn with_status(mut self, status: ContentStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn summary_english(&self) -> &str {
        &self.summary_english
    }

    #[must_use]
    pub fn summary_marathi(&self) -> &str {
        &self.summary_marathi
    }

    #[must_use]
    pub fn practice_questions(&self) -> &[Question] {
        &self.practice_questions
    }

    #[must_use]
    pub fn flashcards(&self) -> &[Flashcard] {
        &self.flashcards
    }

    #[must_use]
    pub fn status(&self) -> ContentStatus {
        self.status
    }

    #[must_use]
    pub fn is_digitized(&self) -> bool {
        self.status == ContentStatus::Digitized
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
