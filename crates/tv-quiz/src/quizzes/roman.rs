//! Roman numerals.

use rand::Rng;
use rand::rngs::StdRng;

use tv_core::{Annotated, CoreResult, Field, QueryResult, Role, build_cross_query};

use super::{check_table, describe_table};
use crate::catalog::{Generator, Quiz};

/// Largest number written with standard numerals.
const MAX: u32 = 3999;

struct Symbol {
    numeral: &'static str,
    value: u32,
}

impl Annotated for Symbol {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("numeral", Role::All, self.numeral),
            Field::new("value", Role::All, self.value),
        ]
    }
}

/// Greedy conversion table, subtractive pairs included, largest first.
static SYMBOLS: &[Symbol] = &[
    Symbol { numeral: "M", value: 1000 },
    Symbol { numeral: "CM", value: 900 },
    Symbol { numeral: "D", value: 500 },
    Symbol { numeral: "CD", value: 400 },
    Symbol { numeral: "C", value: 100 },
    Symbol { numeral: "XC", value: 90 },
    Symbol { numeral: "L", value: 50 },
    Symbol { numeral: "XL", value: 40 },
    Symbol { numeral: "X", value: 10 },
    Symbol { numeral: "IX", value: 9 },
    Symbol { numeral: "V", value: 5 },
    Symbol { numeral: "IV", value: 4 },
    Symbol { numeral: "I", value: 1 },
];

/// Write `n` (1..=3999) in Roman numerals. Returns `None` outside that range.
fn to_roman(mut n: u32) -> Option<String> {
    if !(1..=MAX).contains(&n) {
        return None;
    }
    let mut out = String::new();
    for symbol in SYMBOLS {
        while n >= symbol.value {
            out.push_str(symbol.numeral);
            n -= symbol.value;
        }
    }
    Some(out)
}

fn to_numeral(rng: &mut StdRng) -> QueryResult {
    let n = rng.random_range(1..=2100);
    let numeral = to_roman(n).unwrap_or_default();
    QueryResult::new(format!("How is {n} written in Roman numerals?"), numeral)
}

fn from_numeral(rng: &mut StdRng) -> QueryResult {
    let n = rng.random_range(1..=2100);
    let numeral = to_roman(n).unwrap_or_default();
    QueryResult::new(
        format!("What number is written {numeral} in Roman numerals?"),
        n.to_string(),
    )
}

fn symbol(rng: &mut StdRng) -> QueryResult {
    let singles: Vec<&Symbol> = SYMBOLS.iter().filter(|s| s.numeral.len() == 1).collect();
    let entry = singles[rng.random_range(0..singles.len())];
    build_cross_query("Roman numeral symbol", entry, rng)
}

fn validate() -> CoreResult<()> {
    check_table(SYMBOLS)
}

fn describe() -> Vec<Field> {
    describe_table(SYMBOLS)
}

const GENERATORS: &[Generator] = &[to_numeral, to_numeral, from_numeral, symbol];

/// Roman numerals.
pub const QUIZ: Quiz = Quiz {
    name: "roman",
    description: "Roman numerals to and from decimal",
    generators: GENERATORS,
    validate,
    describe,
};
