//! The trivia prompt guarding the book.

use thiserror::Error;

/// Result of submitting an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

/// One selectable answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    label: String,
}

impl AnswerOption {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Error building a trivia prompt.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TriviaError {
    #[error("a prompt needs at least 2 options, got {0}")]
    TooFewOptions(usize),
    #[error("correct option index {index} out of range for {count} options")]
    CorrectOutOfRange { index: usize, count: usize },
}

/// A fixed question with an enumerated option set, exactly one of which
/// is designated correct at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriviaPrompt {
    question: String,
    options: Vec<AnswerOption>,
    correct: usize,
}

impl TriviaPrompt {
    pub fn new(
        question: impl Into<String>,
        options: Vec<AnswerOption>,
        correct: usize,
    ) -> Result<Self, TriviaError> {
        if options.len() < 2 {
            return Err(TriviaError::TooFewOptions(options.len()));
        }
        if correct >= options.len() {
            return Err(TriviaError::CorrectOutOfRange {
                index: correct,
                count: options.len(),
            });
        }
        Ok(Self {
            question: question.into(),
            options,
            correct,
        })
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    /// Grade a choice. Total over the option set: every index in range
    /// is either correct or incorrect.
    #[must_use]
    pub fn grade(&self, choice: usize) -> Outcome {
        if choice == self.correct {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        }
    }
}
