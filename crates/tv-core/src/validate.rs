//! Ahead-of-time checks that an entity can always produce a question.

use std::collections::HashSet;

use crate::error::{ContractViolation, CoreResult};
use crate::field::{Annotated, Value};

/// Check that `entity` can always produce a cross-query.
///
/// Stricter than the engine's own checks: it also rejects entities where some
/// given-eligible field has no other guess-eligible field (the draw for a
/// guess would never end), repeated field names, and list values that are
/// empty anywhere, including nested lists.
pub fn check_annotations<E>(entity: &E) -> CoreResult<()>
where
    E: Annotated + ?Sized,
{
    let fields = entity.fields();

    let mut names = HashSet::new();
    for field in &fields {
        if !names.insert(field.name()) {
            return Err(ContractViolation::DuplicateField {
                field: field.name().to_string(),
            });
        }
        check_value(field.name(), field.value())?;
    }

    if !fields.iter().any(|f| f.role().can_give()) {
        return Err(ContractViolation::NoGivenField);
    }
    if !fields.iter().any(|f| f.role().can_guess()) {
        return Err(ContractViolation::NoGuessField);
    }

    for (i, given) in fields.iter().enumerate() {
        if !given.role().can_give() {
            continue;
        }
        let has_partner = fields
            .iter()
            .enumerate()
            .any(|(j, guess)| j != i && guess.role().can_guess());
        if !has_partner {
            return Err(ContractViolation::NoDistinctPair {
                field: given.name().to_string(),
            });
        }
    }

    Ok(())
}

fn check_value(name: &str, value: &Value) -> CoreResult<()> {
    match value {
        Value::List(items) if items.is_empty() => Err(ContractViolation::EmptyList {
            field: name.to_string(),
        }),
        Value::List(items) => items.iter().try_for_each(|item| check_value(name, item)),
        Value::Text(_) | Value::Integer(_) => Ok(()),
    }
}
