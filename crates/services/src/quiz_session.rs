//! Step-by-step multiple-choice quiz state.

use samskrita_core::model::{Question, TopicId};

/// Which quiz a completion event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    Topic(TopicId),
    Grand,
}

/// Emitted once, when the last question of a quiz is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizCompleted {
    pub scope: QuizScope,
    pub score: usize,
    pub total: usize,
}

/// Select, check, then advance through a fixed list of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    scope: QuizScope,
    questions: Vec<Question>,
    index: usize,
    selected: Option<String>,
    revealed: bool,
    score: usize,
    finished: bool,
}

impl QuizSession {
    /// An empty question list starts out finished and never completes.
    #[must_use]
    pub fn new(scope: QuizScope, questions: Vec<Question>) -> Self {
        let finished = questions.is_empty();
        Self {
            scope,
            questions,
            index: 0,
            selected: None,
            revealed: false,
            score: 0,
            finished,
        }
    }

    #[must_use]
    pub fn scope(&self) -> QuizScope {
        self.scope
    }

    #[must_use]
    pub fn current(&self) -> Option<&Question> {
        if self.finished {
            return None;
        }
        self.questions.get(self.index)
    }

    /// Zero-based position of the current question.
    #[must_use]
    pub fn position(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Choose an option. Ignored once the answer is revealed or for text that
    /// is not one of the current options.
    pub fn select(&mut self, option: &str) -> bool {
        if self.revealed {
            return false;
        }
        let Some(question) = self.current() else {
            return false;
        };
        if !question.options().iter().any(|opt| opt == option) {
            return false;
        }
        self.selected = Some(option.to_string());
        true
    }

    /// Reveal correctness and the explanation. Requires a selection.
    pub fn check(&mut self) -> bool {
        if self.revealed || self.selected.is_none() || self.current().is_none() {
            return false;
        }
        self.revealed = true;
        true
    }

    /// Whether the current selection is right, once revealed.
    #[must_use]
    pub fn verdict(&self) -> Option<bool> {
        if !self.revealed {
            return None;
        }
        let question = self.current()?;
        let selected = self.selected.as_deref()?;
        Some(question.is_correct(selected))
    }

    /// Score the revealed answer and move on.
    ///
    /// Returns the completion event after the last question; every other call
    /// returns `None`.
    pub fn next(&mut self) -> Option<QuizCompleted> {
        if !self.revealed {
            return None;
        }
        if self.verdict() == Some(true) {
            self.score += 1;
        }
        self.selected = None;
        self.revealed = false;

        if self.index + 1 < self.questions.len() {
            self.index += 1;
            return None;
        }

        self.finished = true;
        Some(QuizCompleted {
            scope: self.scope,
            score: self.score,
            total: self.questions.len(),
        })
    }

    /// Start over with the same questions.
    pub fn restart(&mut self) {
        *self = Self::new(self.scope, std::mem::take(&mut self.questions));
    }
}
