//! Quiz answer-index validation policy.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::records::QuizQuestion;

/// How to treat a quiz question whose `correctAnswer` does not index an
/// existing option.
///
/// - `Permissive` keeps the question; it can never be graded correct.
/// - `Strict` rejects the whole quiz document at load time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizAnswerPolicy {
    #[default]
    Permissive,
    Strict,
}

impl QuizAnswerPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Permissive => "permissive",
            Self::Strict => "strict",
        }
    }

    /// Apply the policy to a decoded quiz document.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] under `Strict` when any question's
    /// answer index is out of range. The message names every offending
    /// question (1-based, as displayed on the page).
    pub fn validate(self, questions: &[QuizQuestion]) -> Result<(), CoreError> {
        if self == Self::Permissive {
            return Ok(());
        }

        let offending: Vec<String> = questions
            .iter()
            .enumerate()
            .filter(|(_, q)| !q.answer_in_range())
            .map(|(i, q)| {
                format!(
                    "question {} has correctAnswer {} but {} options",
                    i + 1,
                    q.correct_answer,
                    q.options.len()
                )
            })
            .collect();

        if offending.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(offending.join("; ")))
        }
    }
}

impl fmt::Display for QuizAnswerPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
