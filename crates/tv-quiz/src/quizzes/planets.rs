//! Planets of the solar system.

use rand::Rng;
use rand::rngs::StdRng;

use tv_core::{Annotated, CoreResult, Field, QueryResult, Role, build_cross_query};

use super::{check_table, describe_table, ordinal};
use crate::catalog::{Generator, Quiz};

struct Planet {
    name: &'static str,
    order: u8,
    kind: &'static str,
}

impl Annotated for Planet {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("name", Role::All, self.name),
            Field::new("order", Role::All, self.order).display("position from the sun"),
            Field::new("kind", Role::Guess, self.kind).display("planet type"),
        ]
    }
}

const fn planet(name: &'static str, order: u8, kind: &'static str) -> Planet {
    Planet { name, order, kind }
}

static PLANETS: &[Planet] = &[
    planet("Mercury", 1, "terrestrial"),
    planet("Venus", 2, "terrestrial"),
    planet("Earth", 3, "terrestrial"),
    planet("Mars", 4, "terrestrial"),
    planet("Jupiter", 5, "gas giant"),
    planet("Saturn", 6, "gas giant"),
    planet("Uranus", 7, "ice giant"),
    planet("Neptune", 8, "ice giant"),
];

fn cross(rng: &mut StdRng) -> QueryResult {
    let planet = &PLANETS[rng.random_range(0..PLANETS.len())];
    build_cross_query("planet", planet, rng)
}

fn nth(rng: &mut StdRng) -> QueryResult {
    let planet = &PLANETS[rng.random_range(0..PLANETS.len())];
    QueryResult::new(
        format!(
            "Which planet is {} from the sun?",
            ordinal(u32::from(planet.order))
        ),
        planet.name,
    )
}

fn closer(rng: &mut StdRng) -> QueryResult {
    let a = rng.random_range(0..PLANETS.len());
    let b = loop {
        let candidate = rng.random_range(0..PLANETS.len());
        if candidate != a {
            break candidate;
        }
    };
    let (a, b) = (&PLANETS[a], &PLANETS[b]);
    let answer = if a.order < b.order { a.name } else { b.name };
    QueryResult::new(
        format!("Which is closer to the sun: {} or {}?", a.name, b.name),
        answer,
    )
}

fn validate() -> CoreResult<()> {
    check_table(PLANETS)
}

fn describe() -> Vec<Field> {
    describe_table(PLANETS)
}

const GENERATORS: &[Generator] = &[cross, cross, nth, closer];

/// Planets of the solar system.
pub const QUIZ: Quiz = Quiz {
    name: "planets",
    description: "Planets of the solar system: order and type",
    generators: GENERATORS,
    validate,
    describe,
};

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn order_matches_table_position() {
        for (i, p) in PLANETS.iter().enumerate() {
            assert_eq!(usize::from(p.order), i + 1);
        }
    }

    #[test]
    fn third_planet_is_earth() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..100 {
            let q = nth(&mut rng);
            if q.prompt() == "Which planet is 3rd from the sun?" {
                assert_eq!(q.answer(), "Earth");
            }
        }
    }

    #[test]
    fn closer_picks_lower_order() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..100 {
            let q = closer(&mut rng);
            let rest = q
                .prompt()
                .strip_prefix("Which is closer to the sun: ")
                .unwrap();
            let (a, b) = rest.trim_end_matches('?').split_once(" or ").unwrap();
            let order = |name: &str| PLANETS.iter().find(|p| p.name == name).unwrap().order;
            assert_eq!(q.answer(), if order(a) < order(b) { a } else { b });
        }
    }
}
