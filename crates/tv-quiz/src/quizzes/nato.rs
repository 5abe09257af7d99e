//! The NATO phonetic alphabet.

use rand::Rng;
use rand::rngs::StdRng;

use tv_core::{Annotated, CoreResult, Field, QueryResult, Role, build_cross_query};

use super::{check_table, describe_table};
use crate::catalog::{Generator, Quiz};

struct CodeWord {
    letter: &'static str,
    word: &'static str,
}

impl Annotated for CodeWord {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("letter", Role::All, self.letter),
            Field::new("word", Role::All, self.word).display("code word"),
        ]
    }
}

const fn code(letter: &'static str, word: &'static str) -> CodeWord {
    CodeWord { letter, word }
}

static ALPHABET: &[CodeWord] = &[
    code("A", "Alfa"),
    code("B", "Bravo"),
    code("C", "Charlie"),
    code("D", "Delta"),
    code("E", "Echo"),
    code("F", "Foxtrot"),
    code("G", "Golf"),
    code("H", "Hotel"),
    code("I", "India"),
    code("J", "Juliett"),
    code("K", "Kilo"),
    code("L", "Lima"),
    code("M", "Mike"),
    code("N", "November"),
    code("O", "Oscar"),
    code("P", "Papa"),
    code("Q", "Quebec"),
    code("R", "Romeo"),
    code("S", "Sierra"),
    code("T", "Tango"),
    code("U", "Uniform"),
    code("V", "Victor"),
    code("W", "Whiskey"),
    code("X", "X-ray"),
    code("Y", "Yankee"),
    code("Z", "Zulu"),
];

/// Short words to spell out.
static WORDS: &[&str] = &[
    "CAT", "DOG", "SKY", "MAP", "FOX", "JAZZ", "QUIZ", "ECHO", "RADIO", "ZEBRA",
];

/// Spell `word` with code words, separated by spaces.
fn spell(word: &str) -> String {
    word.chars()
        .filter_map(|c| {
            let upper = c.to_ascii_uppercase().to_string();
            ALPHABET.iter().find(|w| w.letter == upper).map(|w| w.word)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn cross(rng: &mut StdRng) -> QueryResult {
    let entry = &ALPHABET[rng.random_range(0..ALPHABET.len())];
    build_cross_query("NATO alphabet entry", entry, rng)
}

fn spell_word(rng: &mut StdRng) -> QueryResult {
    let word = WORDS[rng.random_range(0..WORDS.len())];
    QueryResult::new(
        format!("How is {word} spelled in the NATO alphabet (code words separated by spaces)?"),
        spell(word),
    )
}

fn validate() -> CoreResult<()> {
    check_table(ALPHABET)
}

fn describe() -> Vec<Field> {
    describe_table(ALPHABET)
}

const GENERATORS: &[Generator] = &[cross, cross, cross, spell_word];

/// The NATO phonetic alphabet.
pub const QUIZ: Quiz = Quiz {
    name: "nato",
    description: "The NATO phonetic alphabet",
    generators: GENERATORS,
    validate,
    describe,
};

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn covers_a_to_z_in_order() {
        let letters: String = ALPHABET.iter().map(|w| w.letter).collect();
        assert_eq!(letters, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }

    #[test]
    fn spelling() {
        assert_eq!(spell("cat"), "Charlie Alfa Tango");
        assert_eq!(spell("QUIZ"), "Quebec Uniform India Zulu");
        assert_eq!(spell("a-b"), "Alfa Bravo");
    }

    #[test]
    fn cross_questions_name_letter_or_word() {
        let mut rng = StdRng::seed_from_u64(1);
        let q = cross(&mut rng);
        assert!(
            q.prompt().starts_with("What is the letter of the NATO alphabet entry with code word of ")
                || q.prompt().starts_with("What is the code word of the NATO alphabet entry with letter of ")
        );
    }
}
