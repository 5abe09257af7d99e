//! Quiz modules and the question/answer session for Trivium.
//!
//! Each quiz pairs a static, compiled-in table with one or more generator
//! functions. Generators either hand a table row to the cross-query engine
//! in `tv-core` or build a question with custom logic (ordinal comparisons,
//! adjacency lookups, filtered subsets). The [`Session`] drives the
//! prompt/response loop and keeps score.

pub mod catalog;
pub mod config;
pub mod error;
pub mod quizzes;
pub mod session;

pub use catalog::{Generator, Quiz, catalog, find, pick_random};
pub use config::SessionConfig;
pub use error::{QuizError, QuizResult};
pub use session::{Outcome, Round, Scorecard, Session, Tally, ask, format_elapsed};
