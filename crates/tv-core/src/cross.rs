//! Cross-query construction.
//!
//! Given an annotated entity, pick one field to state and a different field
//! to ask for, render both values as text, and phrase the question:
//!
//! ```text
//! What is the {guess} of the {label} with {given} of {value}?
//! ```
//!
//! The guess is drawn by rejection sampling: keep drawing from the
//! guess-eligible fields until the draw is not the given field. Identity is
//! the field's position in the descriptor, so two fields holding equal values
//! are still distinct. Callers must supply entities in which every
//! given-eligible field has some other guess-eligible field; otherwise the
//! draw never ends. [`crate::check_annotations`] verifies this ahead of time.

use rand::Rng;
use tracing::trace;

use crate::error::{ContractViolation, CoreResult};
use crate::field::{Annotated, Field, Value};
use crate::query::QueryResult;

/// Build a random question about `entity`, panicking on a mis-annotated
/// entity.
///
/// `label` names the entity's category (e.g. "country") and is inserted
/// verbatim into the question.
///
/// # Panics
///
/// Panics if the entity has no given-eligible or no guess-eligible field, or
/// if the chosen field holds an empty list. These are authoring mistakes in
/// static quiz data.
pub fn build_cross_query<E, R>(label: &str, entity: &E, rng: &mut R) -> QueryResult
where
    E: Annotated + ?Sized,
    R: Rng + ?Sized,
{
    match try_build_cross_query(label, entity, rng) {
        Ok(query) => query,
        Err(e) => panic!("cannot build a {label} question: {e}"),
    }
}

/// Build a random question about `entity`, returning contract violations
/// instead of panicking.
pub fn try_build_cross_query<E, R>(label: &str, entity: &E, rng: &mut R) -> CoreResult<QueryResult>
where
    E: Annotated + ?Sized,
    R: Rng + ?Sized,
{
    let fields = entity.fields();

    let givens: Vec<usize> = eligible(&fields, |f| f.role().can_give());
    let guesses: Vec<usize> = eligible(&fields, |f| f.role().can_guess());

    if givens.is_empty() {
        return Err(ContractViolation::NoGivenField);
    }
    if guesses.is_empty() {
        return Err(ContractViolation::NoGuessField);
    }

    let given = givens[rng.random_range(0..givens.len())];
    let guess = loop {
        let candidate = guesses[rng.random_range(0..guesses.len())];
        if candidate != given {
            break candidate;
        }
    };

    let given = &fields[given];
    let guess = &fields[guess];
    trace!(label = label, given = given.name(), guess = guess.name(), "picked fields");

    let given_value = render_field(given, rng)?;
    let answer = render_field(guess, rng)?;

    Ok(QueryResult::new(
        format_prompt(label, guess.display_name(), given.display_name(), &given_value),
        answer,
    ))
}

/// Render a field's value as answer text.
///
/// Text renders as itself, integers in base 10, and lists by picking one
/// element at random and rendering that (recursively for nested lists).
pub fn render_field<R>(field: &Field, rng: &mut R) -> CoreResult<String>
where
    R: Rng + ?Sized,
{
    render(field.name(), field.value(), rng)
}

fn render<R>(name: &str, value: &Value, rng: &mut R) -> CoreResult<String>
where
    R: Rng + ?Sized,
{
    match value {
        Value::Text(s) => Ok(s.clone()),
        Value::Integer(n) => Ok(n.to_string()),
        Value::List(items) => {
            if items.is_empty() {
                return Err(ContractViolation::EmptyList {
                    field: name.to_string(),
                });
            }
            let item = &items[rng.random_range(0..items.len())];
            render(name, item, rng)
        }
    }
}

/// Phrase a cross-query question.
pub fn format_prompt(label: &str, guess: &str, given: &str, given_value: &str) -> String {
    format!("What is the {guess} of the {label} with {given} of {given_value}?")
}

fn eligible(fields: &[Field], pred: impl Fn(&Field) -> bool) -> Vec<usize> {
    fields
        .iter()
        .enumerate()
        .filter(|(_, f)| pred(f))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Role;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    struct Country {
        name: &'static str,
        capital: &'static str,
        area_rank: u32,
        languages: &'static [&'static str],
    }

    impl Annotated for Country {
        fn fields(&self) -> Vec<Field> {
            vec![
                Field::new("name", Role::All, self.name),
                Field::new("capital", Role::All, self.capital).display("capital"),
                Field::new("rankInArea", Role::Guess, self.area_rank).display("size rank"),
                Field::new("languages", Role::Guess, self.languages).display("language"),
            ]
        }
    }

    const FRANCE: Country = Country {
        name: "France",
        capital: "Paris",
        area_rank: 42,
        languages: &["French"],
    };

    fn http_status() -> Vec<Field> {
        vec![
            Field::new("code", Role::All, 404u16),
            Field::new("message", Role::All, "Not Found"),
        ]
    }

    /// Split a prompt back into (guess display name, given display name).
    fn parse_prompt<'a>(prompt: &'a str, label: &str) -> (&'a str, &'a str) {
        let rest = prompt.strip_prefix("What is the ").unwrap();
        let (guess, rest) = rest.split_once(&format!(" of the {label} with ")).unwrap();
        let (given, _) = rest.split_once(" of ").unwrap();
        (guess, given)
    }

    #[test]
    fn formats_country_capital_question() {
        let fields = vec![
            Field::new("name", Role::All, "France"),
            Field::new("capital", Role::All, "Paris").display("capital"),
        ];
        let mut rng = StdRng::seed_from_u64(0);
        let mut found = false;
        for _ in 0..100 {
            let q = build_cross_query("country", &fields, &mut rng);
            if q.prompt().starts_with("What is the capital") {
                assert_eq!(
                    (q.prompt(), q.answer()),
                    ("What is the capital of the country with name of France?", "Paris")
                );
                found = true;
            }
        }
        assert!(found, "capital was never asked for");
    }

    #[test]
    fn prompt_template() {
        insta::assert_snapshot!(
            format_prompt("element", "symbol", "name", "Iron"),
            @"What is the symbol of the element with name of Iron?"
        );
    }

    #[test]
    fn http_status_both_directions_observed() {
        let entity = http_status();
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            let q = build_cross_query("HTTP status", &entity, &mut rng);
            seen.insert((q.prompt().to_string(), q.answer().to_string()));
        }
        assert!(seen.contains(&(
            "What is the message of the HTTP status with code of 404?".to_string(),
            "Not Found".to_string()
        )));
        assert!(seen.contains(&(
            "What is the code of the HTTP status with message of Not Found?".to_string(),
            "404".to_string()
        )));
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn all_field_serves_both_roles() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut as_given = false;
        let mut as_guess = false;
        for _ in 0..1000 {
            let q = build_cross_query("country", &FRANCE, &mut rng);
            let (guess, given) = parse_prompt(q.prompt(), "country");
            as_given |= given == "name";
            as_guess |= guess == "name";
        }
        assert!(as_given && as_guess);
    }

    #[test]
    fn display_override_replaces_field_name() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut saw_rank = false;
        for _ in 0..500 {
            let q = build_cross_query("country", &FRANCE, &mut rng);
            assert!(!q.prompt().contains("rankInArea"));
            if q.prompt().starts_with("What is the size rank of the country") {
                assert_eq!(q.answer(), "42");
                saw_rank = true;
            }
        }
        assert!(saw_rank);
    }

    #[test]
    fn guess_only_fields_are_never_stated() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..500 {
            let q = build_cross_query("country", &FRANCE, &mut rng);
            let (_, given) = parse_prompt(q.prompt(), "country");
            assert!(given == "name" || given == "capital", "stated {given}");
        }
    }

    #[test]
    fn same_seed_same_questions() {
        let mut a = StdRng::seed_from_u64(1234);
        let mut b = StdRng::seed_from_u64(1234);
        for _ in 0..50 {
            assert_eq!(
                build_cross_query("country", &FRANCE, &mut a),
                build_cross_query("country", &FRANCE, &mut b)
            );
        }
    }

    #[test]
    fn equal_values_in_distinct_fields_are_distinct() {
        let fields = vec![
            Field::new("wins", Role::All, 0i64),
            Field::new("losses", Role::All, 0i64),
        ];
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            let q = build_cross_query("team", &fields, &mut rng);
            assert_eq!(q.answer(), "0");
            let (guess, given) = parse_prompt(q.prompt(), "team");
            assert_ne!(guess, given);
        }
    }

    #[test]
    fn renders_negative_integers() {
        let field = Field::new("founded", Role::All, -753i64);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(render_field(&field, &mut rng).unwrap(), "-753");
    }

    #[test]
    fn renders_nested_lists_to_a_leaf() {
        let nested: &[&[&str]] = &[&["a", "b"], &["c"]];
        let field = Field::new("letters", Role::Guess, nested);
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            seen.insert(render_field(&field, &mut rng).unwrap());
        }
        let expected: HashSet<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn empty_list_is_reported() {
        let empty: &[&str] = &[];
        let fields = vec![
            Field::new("name", Role::Given, "Atlantis"),
            Field::new("languages", Role::Guess, empty),
        ];
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            try_build_cross_query("country", &fields, &mut rng),
            Err(ContractViolation::EmptyList {
                field: "languages".to_string()
            })
        );
    }

    #[test]
    fn missing_guess_field_is_reported() {
        let fields = vec![
            Field::new("name", Role::Given, "France"),
            Field::new("capital", Role::Given, "Paris"),
        ];
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            try_build_cross_query("country", &fields, &mut rng),
            Err(ContractViolation::NoGuessField)
        );
    }

    #[test]
    #[should_panic(expected = "no field can be stated as a given")]
    fn missing_given_field_panics() {
        let fields = vec![
            Field::new("name", Role::Guess, "France"),
            Field::new("capital", Role::Guess, "Paris"),
        ];
        let mut rng = StdRng::seed_from_u64(0);
        build_cross_query("country", &fields, &mut rng);
    }

    #[test]
    #[should_panic(expected = "cannot build a country question")]
    fn unannotated_entity_panics() {
        let fields: Vec<Field> = Vec::new();
        let mut rng = StdRng::seed_from_u64(0);
        build_cross_query("country", &fields, &mut rng);
    }

    const NAMES: [&str; 6] = ["a", "b", "c", "d", "e", "f"];

    proptest! {
        #[test]
        fn given_and_guess_always_differ(
            seed in any::<u64>(),
            values in prop::collection::vec("[A-Za-z ]{1,12}", 2..6),
        ) {
            let fields: Vec<Field> = values
                .iter()
                .enumerate()
                .map(|(i, v)| Field::new(NAMES[i], Role::All, v.clone()))
                .collect();
            let mut rng = StdRng::seed_from_u64(seed);
            let q = build_cross_query("thing", &fields, &mut rng);
            let (guess, given) = parse_prompt(q.prompt(), "thing");
            prop_assert_ne!(guess, given);
        }

        #[test]
        fn list_render_is_a_member(
            seed in any::<u64>(),
            items in prop::collection::vec("[a-z]{1,8}", 1..10),
        ) {
            let field = Field::new("items", Role::Guess, items.as_slice());
            let mut rng = StdRng::seed_from_u64(seed);
            let rendered = render_field(&field, &mut rng).unwrap();
            prop_assert!(items.contains(&rendered));
        }

        #[test]
        fn integers_render_in_base_ten(n in any::<i64>(), seed in any::<u64>()) {
            let field = Field::new("n", Role::All, n);
            let mut rng = StdRng::seed_from_u64(seed);
            let rendered = render_field(&field, &mut rng).unwrap();
            prop_assert_eq!(&rendered, &n.to_string());
            if n >= 0 {
                prop_assert!(!rendered.starts_with('+'));
                prop_assert!(rendered == "0" || !rendered.starts_with('0'));
            }
        }
    }
}
