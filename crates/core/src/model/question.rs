use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Number of answer options every multiple-choice question carries.
pub const OPTION_COUNT: usize = 4;

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = QuestionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(QuestionError::UnknownDifficulty(s.to_string())),
        }
    }
}

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyQuestion,

    #[error("expected {OPTION_COUNT} options, got {0}")]
    OptionCount(usize),

    #[error("option {0} is empty")]
    EmptyOption(usize),

    #[error("correct answer is not one of the options")]
    AnswerNotInOptions,

    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FlashcardError {
    #[error("flashcard front cannot be empty")]
    EmptyFront,

    #[error("flashcard back cannot be empty")]
    EmptyBack,
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// Untrusted multiple-choice question, as it arrives from a remote payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub difficulty: Option<String>,
}

impl QuestionDraft {
    /// Validate the draft into a `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the text is blank, the option count is not
    /// four, an option is blank, the correct answer is not among the options,
    /// or the difficulty is not recognised.
    pub fn validate(self) -> Result<Question, QuestionError> {
        let question = self.question.trim().to_string();
        if question.is_empty() {
            return Err(QuestionError::EmptyQuestion);
        }

        let count = self.options.len();
        let options: [String; OPTION_COUNT] = self
            .options
            .into_iter()
            .map(|opt| opt.trim().to_string())
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|_| QuestionError::OptionCount(count))?;
        if let Some(idx) = options.iter().position(String::is_empty) {
            return Err(QuestionError::EmptyOption(idx));
        }

        let correct_answer = self.correct_answer.trim().to_string();
        if !options.contains(&correct_answer) {
            return Err(QuestionError::AnswerNotInOptions);
        }

        let difficulty = match self.difficulty.as_deref() {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => Difficulty::default(),
        };

        Ok(Question {
            question,
            options,
            correct_answer,
            explanation: self.explanation.trim().to_string(),
            difficulty,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    question: String,
    options: [String; OPTION_COUNT],
    correct_answer: String,
    explanation: String,
    difficulty: Difficulty,
}

impl Question {
    /// Build a question from compiled-in curriculum data.
    pub(crate) fn builtin(
        question: &str,
        options: [&str; OPTION_COUNT],
        correct_answer: &str,
        explanation: &str,
        difficulty: Difficulty,
    ) -> Self {
        debug_assert!(options.contains(&correct_answer));
        Self {
            question: question.to_string(),
            options: options.map(str::to_string),
            correct_answer: correct_answer.to_string(),
            explanation: explanation.to_string(),
            difficulty,
        }
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn is_correct(&self, option: &str) -> bool {
        self.correct_answer == option
    }
}

//
// ─── FLASHCARD ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FlashcardDraft {
    pub front: String,
    pub back: String,
}

impl FlashcardDraft {
    /// # Errors
    ///
    /// Returns `FlashcardError` if either side is blank.
    pub fn validate(self) -> Result<Flashcard, FlashcardError> {
        let front = self.front.trim().to_string();
        if front.is_empty() {
            return Err(FlashcardError::EmptyFront);
        }
        let back = self.back.trim().to_string();
        if back.is_empty() {
            return Err(FlashcardError::EmptyBack);
        }
        Ok(Flashcard { front, back })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    front: String,
    back: String,
}

impl Flashcard {
    pub(crate) fn builtin(front: &str, back: &str) -> Self {
        Self {
            front: front.to_string(),
            back: back.to_string(),
        }
    }

    #[must_use]
    pub fn front(&self) -> &str {
        &self.front
    }

    #[must_use]
    pub fn back(&self) -> &str {
        &self.back
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
