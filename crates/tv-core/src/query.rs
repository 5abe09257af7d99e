//! The question/answer pair and answer checking.

use serde::{Deserialize, Serialize};

/// A question and the answer it expects.
///
/// Built once by a generator, shown to the player, then discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    prompt: String,
    answer: String,
}

impl QueryResult {
    /// Pair a prompt with its expected answer.
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }

    /// The question text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The expected answer.
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Exact, case-sensitive comparison after trimming surrounding whitespace
    /// from the response.
    pub fn is_correct(&self, response: &str) -> bool {
        response.trim() == self.answer
    }
}
