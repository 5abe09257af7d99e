//! The built-in quiz modules.
//!
//! Each module owns a static table and exports a `QUIZ` descriptor that the
//! catalog registers.

pub mod countries;
pub mod elements;
pub mod greek;
pub mod http;
pub mod nato;
pub mod planets;
pub mod presidents;
pub mod roman;

use tv_core::{Annotated, CoreResult, Field, check_annotations};

/// English ordinal for `n`: 1st, 2nd, 3rd, 4th, 11th, 22nd.
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Run the annotation check over every row of a table.
fn check_table<T: Annotated>(table: &[T]) -> CoreResult<()> {
    table.iter().try_for_each(check_annotations)
}

/// The annotated fields of a table's first row.
fn describe_table<T: Annotated>(table: &[T]) -> Vec<Field> {
    table.first().map(T::fields).unwrap_or_default()
}
