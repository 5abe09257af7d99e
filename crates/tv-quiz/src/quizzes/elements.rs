//! Chemical elements: names, symbols, atomic numbers.

use rand::Rng;
use rand::rngs::StdRng;

use tv_core::{Annotated, CoreResult, Field, QueryResult, Role, build_cross_query};

use super::{check_table, describe_table};
use crate::catalog::{Generator, Quiz};

struct Element {
    number: u8,
    symbol: &'static str,
    name: &'static str,
    noble_gas: bool,
}

impl Annotated for Element {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("number", Role::All, self.number).display("atomic number"),
            Field::new("symbol", Role::All, self.symbol),
            Field::new("name", Role::All, self.name),
        ]
    }
}

const fn element(number: u8, symbol: &'static str, name: &'static str) -> Element {
    Element {
        number,
        symbol,
        name,
        noble_gas: false,
    }
}

const fn noble(number: u8, symbol: &'static str, name: &'static str) -> Element {
    Element {
        noble_gas: true,
        ..element(number, symbol, name)
    }
}

static ELEMENTS: &[Element] = &[
    element(1, "H", "Hydrogen"),
    noble(2, "He", "Helium"),
    element(3, "Li", "Lithium"),
    element(4, "Be", "Beryllium"),
    element(5, "B", "Boron"),
    element(6, "C", "Carbon"),
    element(7, "N", "Nitrogen"),
    element(8, "O", "Oxygen"),
    element(9, "F", "Fluorine"),
    noble(10, "Ne", "Neon"),
    element(11, "Na", "Sodium"),
    element(12, "Mg", "Magnesium"),
    element(13, "Al", "Aluminium"),
    element(14, "Si", "Silicon"),
    element(15, "P", "Phosphorus"),
    element(16, "S", "Sulfur"),
    element(17, "Cl", "Chlorine"),
    noble(18, "Ar", "Argon"),
    element(19, "K", "Potassium"),
    element(20, "Ca", "Calcium"),
    element(21, "Sc", "Scandium"),
    element(22, "Ti", "Titanium"),
    element(23, "V", "Vanadium"),
    element(24, "Cr", "Chromium"),
    element(25, "Mn", "Manganese"),
    element(26, "Fe", "Iron"),
    element(27, "Co", "Cobalt"),
    element(28, "Ni", "Nickel"),
    element(29, "Cu", "Copper"),
    element(30, "Zn", "Zinc"),
    element(31, "Ga", "Gallium"),
    element(32, "Ge", "Germanium"),
    element(33, "As", "Arsenic"),
    element(34, "Se", "Selenium"),
    element(35, "Br", "Bromine"),
    noble(36, "Kr", "Krypton"),
    element(47, "Ag", "Silver"),
    element(50, "Sn", "Tin"),
    element(53, "I", "Iodine"),
    noble(54, "Xe", "Xenon"),
    element(74, "W", "Tungsten"),
    element(78, "Pt", "Platinum"),
    element(79, "Au", "Gold"),
    element(80, "Hg", "Mercury"),
    element(82, "Pb", "Lead"),
    noble(86, "Rn", "Radon"),
    element(92, "U", "Uranium"),
];

fn cross(rng: &mut StdRng) -> QueryResult {
    let element = &ELEMENTS[rng.random_range(0..ELEMENTS.len())];
    build_cross_query("element", element, rng)
}

fn noble_gas(rng: &mut StdRng) -> QueryResult {
    let gases: Vec<&Element> = ELEMENTS.iter().filter(|e| e.noble_gas).collect();
    let gas = gases[rng.random_range(0..gases.len())];
    build_cross_query("noble gas", gas, rng)
}

fn heavier(rng: &mut StdRng) -> QueryResult {
    let a = &ELEMENTS[rng.random_range(0..ELEMENTS.len())];
    let b = loop {
        let candidate = &ELEMENTS[rng.random_range(0..ELEMENTS.len())];
        if candidate.number != a.number {
            break candidate;
        }
    };
    let answer = if a.number > b.number { a.name } else { b.name };
    QueryResult::new(
        format!(
            "Which element has the higher atomic number: {} or {}?",
            a.name, b.name
        ),
        answer,
    )
}

fn validate() -> CoreResult<()> {
    check_table(ELEMENTS)
}

fn describe() -> Vec<Field> {
    describe_table(ELEMENTS)
}

const GENERATORS: &[Generator] = &[cross, cross, cross, noble_gas, heavier];

/// Chemical elements.
pub const QUIZ: Quiz = Quiz {
    name: "elements",
    description: "Chemical elements: symbols, names, atomic numbers",
    generators: GENERATORS,
    validate,
    describe,
};
