//! Countries: capitals, continents, currencies, languages, and ISO codes.

use rand::Rng;
use rand::rngs::StdRng;

use tv_core::{Annotated, CoreResult, Field, QueryResult, Role, build_cross_query};

use super::{check_table, describe_table};
use crate::catalog::{Generator, Quiz};

struct Country {
    name: &'static str,
    capital: &'static str,
    continent: &'static str,
    currency: &'static str,
    iso: &'static str,
    languages: &'static [&'static str],
}

impl Annotated for Country {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("name", Role::All, self.name),
            Field::new("capital", Role::All, self.capital),
            Field::new("iso", Role::All, self.iso).display("ISO code"),
            Field::new("continent", Role::Guess, self.continent),
            Field::new("currency", Role::Guess, self.currency),
            Field::new("languages", Role::Guess, self.languages).display("official language"),
        ]
    }
}

const fn country(
    name: &'static str,
    capital: &'static str,
    continent: &'static str,
    currency: &'static str,
    iso: &'static str,
    languages: &'static [&'static str],
) -> Country {
    Country {
        name,
        capital,
        continent,
        currency,
        iso,
        languages,
    }
}

static COUNTRIES: &[Country] = &[
    country("Argentina", "Buenos Aires", "South America", "Argentine peso", "ARG", &["Spanish"]),
    country("Australia", "Canberra", "Oceania", "Australian dollar", "AUS", &["English"]),
    country("Belgium", "Brussels", "Europe", "Euro", "BEL", &["Dutch", "French", "German"]),
    country("Brazil", "Brasilia", "South America", "Brazilian real", "BRA", &["Portuguese"]),
    country("Canada", "Ottawa", "North America", "Canadian dollar", "CAN", &["English", "French"]),
    country("China", "Beijing", "Asia", "Renminbi", "CHN", &["Mandarin"]),
    country("Egypt", "Cairo", "Africa", "Egyptian pound", "EGY", &["Arabic"]),
    country("Finland", "Helsinki", "Europe", "Euro", "FIN", &["Finnish", "Swedish"]),
    country("France", "Paris", "Europe", "Euro", "FRA", &["French"]),
    country("Germany", "Berlin", "Europe", "Euro", "DEU", &["German"]),
    country("India", "New Delhi", "Asia", "Indian rupee", "IND", &["Hindi", "English"]),
    country("Ireland", "Dublin", "Europe", "Euro", "IRL", &["Irish", "English"]),
    country("Italy", "Rome", "Europe", "Euro", "ITA", &["Italian"]),
    country("Japan", "Tokyo", "Asia", "Yen", "JPN", &["Japanese"]),
    country("Kenya", "Nairobi", "Africa", "Kenyan shilling", "KEN", &["English", "Swahili"]),
    country("Mexico", "Mexico City", "North America", "Mexican peso", "MEX", &["Spanish"]),
    country("Netherlands", "Amsterdam", "Europe", "Euro", "NLD", &["Dutch"]),
    country("New Zealand", "Wellington", "Oceania", "New Zealand dollar", "NZL", &["English", "Maori"]),
    country("Norway", "Oslo", "Europe", "Norwegian krone", "NOR", &["Norwegian"]),
    country("Poland", "Warsaw", "Europe", "Zloty", "POL", &["Polish"]),
    country("Portugal", "Lisbon", "Europe", "Euro", "PRT", &["Portuguese"]),
    country("South Korea", "Seoul", "Asia", "South Korean won", "KOR", &["Korean"]),
    country("Spain", "Madrid", "Europe", "Euro", "ESP", &["Spanish"]),
    country("Sweden", "Stockholm", "Europe", "Swedish krona", "SWE", &["Swedish"]),
    country("Switzerland", "Bern", "Europe", "Swiss franc", "CHE", &["German", "French", "Italian", "Romansh"]),
    country("Thailand", "Bangkok", "Asia", "Baht", "THA", &["Thai"]),
];

fn random_country(rng: &mut StdRng) -> &'static Country {
    &COUNTRIES[rng.random_range(0..COUNTRIES.len())]
}

fn cross(rng: &mut StdRng) -> QueryResult {
    let country = random_country(rng);
    build_cross_query("country", country, rng)
}

fn capital(rng: &mut StdRng) -> QueryResult {
    let country = random_country(rng);
    QueryResult::new(
        format!("{} is the capital of which country?", country.capital),
        country.name,
    )
}

fn validate() -> CoreResult<()> {
    check_table(COUNTRIES)
}

fn describe() -> Vec<Field> {
    describe_table(COUNTRIES)
}

const GENERATORS: &[Generator] = &[cross, cross, cross, capital];

/// Countries of the world.
pub const QUIZ: Quiz = Quiz {
    name: "countries",
    description: "Capitals, continents, currencies, and languages of countries",
    generators: GENERATORS,
    validate,
    describe,
};

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn names_and_capitals_are_unique() {
        let mut names: Vec<_> = COUNTRIES.iter().map(|c| c.name).collect();
        let mut capitals: Vec<_> = COUNTRIES.iter().map(|c| c.capital).collect();
        let mut codes: Vec<_> = COUNTRIES.iter().map(|c| c.iso).collect();
        for v in [&mut names, &mut capitals, &mut codes] {
            v.sort_unstable();
            v.dedup();
            assert_eq!(v.len(), COUNTRIES.len());
        }
    }

    #[test]
    fn iso_codes_are_three_capitals() {
        for c in COUNTRIES {
            assert_eq!(c.iso.len(), 3, "{}", c.name);
            assert!(c.iso.chars().all(|ch| ch.is_ascii_uppercase()), "{}", c.name);
        }
    }

    #[test]
    fn language_answers_come_from_the_row() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut asked = 0;
        for _ in 0..2000 {
            let q = cross(&mut rng);
            if let Some(rest) = q.prompt().strip_prefix("What is the official language of the country with name of ") {
                let name = rest.trim_end_matches('?');
                let row = COUNTRIES.iter().find(|c| c.name == name).unwrap();
                assert!(row.languages.contains(&q.answer()));
                asked += 1;
            }
        }
        assert!(asked > 0);
    }

    #[test]
    fn capital_question_answers_with_country() {
        let mut rng = StdRng::seed_from_u64(0);
        let q = capital(&mut rng);
        let city = q.prompt().trim_end_matches(" is the capital of which country?");
        let row = COUNTRIES.iter().find(|c| c.capital == city).unwrap();
        assert_eq!(q.answer(), row.name);
    }
}
