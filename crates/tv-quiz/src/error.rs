//! Error types for quizzes and sessions.

use thiserror::Error;
use tv_core::ContractViolation;

/// Result type for quiz operations.
pub type QuizResult<T> = Result<T, QuizError>;

/// Errors that can occur while selecting, checking, or playing a quiz.
#[derive(Debug, Error)]
pub enum QuizError {
    /// No quiz with this name exists in the catalog.
    #[error("unknown quiz: {0}")]
    UnknownQuiz(String),

    /// A quiz was registered without any generators.
    #[error("quiz '{0}' has no generators")]
    NoGenerators(String),

    /// A row of a quiz table is mis-annotated.
    #[error("quiz '{quiz}': {source}")]
    Contract {
        /// Name of the quiz whose table failed the check.
        quiz: String,
        /// The violation found.
        source: ContractViolation,
    },

    /// Reading the response or writing the prompt failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
