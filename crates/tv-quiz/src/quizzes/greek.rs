//! The Greek alphabet.

use rand::Rng;
use rand::rngs::StdRng;

use tv_core::{Annotated, CoreResult, Field, QueryResult, Role, build_cross_query};

use super::{check_table, describe_table};
use crate::catalog::{Generator, Quiz};

struct Letter {
    position: u8,
    name: &'static str,
    upper: &'static str,
    lower: &'static str,
}

impl Annotated for Letter {
    fn fields(&self) -> Vec<Field> {
        // Glyphs are hard to type, so they are only ever stated.
        vec![
            Field::new("name", Role::All, self.name),
            Field::new("position", Role::All, self.position),
            Field::new("upper", Role::Given, self.upper).display("uppercase form"),
            Field::new("lower", Role::Given, self.lower).display("lowercase form"),
        ]
    }
}

const fn letter(
    position: u8,
    name: &'static str,
    upper: &'static str,
    lower: &'static str,
) -> Letter {
    Letter {
        position,
        name,
        upper,
        lower,
    }
}

static LETTERS: &[Letter] = &[
    letter(1, "Alpha", "Α", "α"),
    letter(2, "Beta", "Β", "β"),
    letter(3, "Gamma", "Γ", "γ"),
    letter(4, "Delta", "Δ", "δ"),
    letter(5, "Epsilon", "Ε", "ε"),
    letter(6, "Zeta", "Ζ", "ζ"),
    letter(7, "Eta", "Η", "η"),
    letter(8, "Theta", "Θ", "θ"),
    letter(9, "Iota", "Ι", "ι"),
    letter(10, "Kappa", "Κ", "κ"),
    letter(11, "Lambda", "Λ", "λ"),
    letter(12, "Mu", "Μ", "μ"),
    letter(13, "Nu", "Ν", "ν"),
    letter(14, "Xi", "Ξ", "ξ"),
    letter(15, "Omicron", "Ο", "ο"),
    letter(16, "Pi", "Π", "π"),
    letter(17, "Rho", "Ρ", "ρ"),
    letter(18, "Sigma", "Σ", "σ"),
    letter(19, "Tau", "Τ", "τ"),
    letter(20, "Upsilon", "Υ", "υ"),
    letter(21, "Phi", "Φ", "φ"),
    letter(22, "Chi", "Χ", "χ"),
    letter(23, "Psi", "Ψ", "ψ"),
    letter(24, "Omega", "Ω", "ω"),
];

fn cross(rng: &mut StdRng) -> QueryResult {
    let entry = &LETTERS[rng.random_range(0..LETTERS.len())];
    build_cross_query("Greek letter", entry, rng)
}

fn next(rng: &mut StdRng) -> QueryResult {
    let i = rng.random_range(0..LETTERS.len() - 1);
    QueryResult::new(
        format!("Which Greek letter comes after {}?", LETTERS[i].name),
        LETTERS[i + 1].name,
    )
}

fn previous(rng: &mut StdRng) -> QueryResult {
    let i = rng.random_range(1..LETTERS.len());
    QueryResult::new(
        format!("Which Greek letter comes before {}?", LETTERS[i].name),
        LETTERS[i - 1].name,
    )
}

fn validate() -> CoreResult<()> {
    check_table(LETTERS)
}

fn describe() -> Vec<Field> {
    describe_table(LETTERS)
}

const GENERATORS: &[Generator] = &[cross, cross, next, previous];

/// The Greek alphabet.
pub const QUIZ: Quiz = Quiz {
    name: "greek",
    description: "The Greek alphabet: names, order, and letter forms",
    generators: GENERATORS,
    validate,
    describe,
};
