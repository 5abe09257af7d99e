//! Core types for Trivium: annotated entity fields and the cross-query engine.
//!
//! A quiz entity describes its fields through the [`Annotated`] trait. Each
//! field carries a [`Role`] saying whether it may be stated in a question,
//! asked for, or both. [`build_cross_query`] pairs two distinct fields of one
//! entity into a "what is X given Y" question with its expected answer.

/// The cross-query engine.
pub mod cross;
/// Contract violations raised for mis-annotated entities.
pub mod error;
/// Field roles, values, and the [`Annotated`] descriptor trait.
pub mod field;
/// The question/answer pair produced by every generator.
pub mod query;
/// Ahead-of-time checks for entity annotations.
pub mod validate;

/// Re-export the engine entry points.
pub use cross::{build_cross_query, format_prompt, render_field, try_build_cross_query};
/// Re-export error types.
pub use error::{ContractViolation, CoreResult};
/// Re-export the entity metadata model.
pub use field::{Annotated, Field, Role, Value};
/// Re-export the query result.
pub use query::QueryResult;
/// Re-export annotation checking.
pub use validate::check_annotations;
