//! Error types for entity annotation mistakes.

use thiserror::Error;

/// Alias for `Result<T, ContractViolation>`.
pub type CoreResult<T> = Result<T, ContractViolation>;

/// A mis-annotated entity, discovered when a question is built from it.
///
/// These are authoring mistakes in static quiz data rather than run-time
/// input errors. [`crate::build_cross_query`] turns them into a panic;
/// [`crate::try_build_cross_query`] hands them back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    /// No field is annotated `given` or `all`.
    #[error("no field can be stated as a given")]
    NoGivenField,

    /// No field is annotated `guess` or `all`.
    #[error("no field can be asked for as a guess")]
    NoGuessField,

    /// A given-eligible field has no other guess-eligible field to pair with.
    #[error("given field '{field}' has no other field to ask for")]
    NoDistinctPair {
        /// Name of the stranded given field.
        field: String,
    },

    /// Two fields of one entity share a name.
    #[error("field '{field}' is listed more than once")]
    DuplicateField {
        /// The repeated field name.
        field: String,
    },

    /// A list-valued field has nothing to pick from.
    #[error("field '{field}' holds an empty list")]
    EmptyList {
        /// Name of the offending field.
        field: String,
    },
}
