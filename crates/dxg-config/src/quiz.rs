//! Quiz configuration.

use dxg_core::QuizAnswerPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QuizConfig {
    /// What to do with out-of-range `correctAnswer` indices.
    #[serde(default)]
    pub answer_policy: QuizAnswerPolicy,
}
