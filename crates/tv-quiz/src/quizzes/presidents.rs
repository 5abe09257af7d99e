//! Presidents of the United States.
//!
//! Presidents who served non-consecutive terms appear once, with every
//! number they hold.

use rand::Rng;
use rand::rngs::StdRng;

use tv_core::{Annotated, CoreResult, Field, QueryResult, Role, build_cross_query};

use super::{check_table, describe_table, ordinal};
use crate::catalog::{Generator, Quiz};

struct President {
    name: &'static str,
    numbers: &'static [u8],
    took_office: u16,
    party: &'static str,
}

impl Annotated for President {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("name", Role::All, self.name),
            Field::new("numbers", Role::All, self.numbers).display("number"),
            Field::new("took_office", Role::Guess, self.took_office)
                .display("year of first inauguration"),
            Field::new("party", Role::Guess, self.party),
        ]
    }
}

const fn president(
    name: &'static str,
    numbers: &'static [u8],
    took_office: u16,
    party: &'static str,
) -> President {
    President {
        name,
        numbers,
        took_office,
        party,
    }
}

/// In order of first inauguration.
static PRESIDENTS: &[President] = &[
    president("George Washington", &[1], 1789, "Unaffiliated"),
    president("John Adams", &[2], 1797, "Federalist"),
    president("Thomas Jefferson", &[3], 1801, "Democratic-Republican"),
    president("James Madison", &[4], 1809, "Democratic-Republican"),
    president("James Monroe", &[5], 1817, "Democratic-Republican"),
    president("John Quincy Adams", &[6], 1825, "Democratic-Republican"),
    president("Andrew Jackson", &[7], 1829, "Democratic"),
    president("Martin Van Buren", &[8], 1837, "Democratic"),
    president("William Henry Harrison", &[9], 1841, "Whig"),
    president("John Tyler", &[10], 1841, "Whig"),
    president("James K. Polk", &[11], 1845, "Democratic"),
    president("Zachary Taylor", &[12], 1849, "Whig"),
    president("Millard Fillmore", &[13], 1850, "Whig"),
    president("Franklin Pierce", &[14], 1853, "Democratic"),
    president("James Buchanan", &[15], 1857, "Democratic"),
    president("Abraham Lincoln", &[16], 1861, "Republican"),
    president("Andrew Johnson", &[17], 1865, "National Union"),
    president("Ulysses S. Grant", &[18], 1869, "Republican"),
    president("Rutherford B. Hayes", &[19], 1877, "Republican"),
    president("James A. Garfield", &[20], 1881, "Republican"),
    president("Chester A. Arthur", &[21], 1881, "Republican"),
    president("Grover Cleveland", &[22, 24], 1885, "Democratic"),
    president("Benjamin Harrison", &[23], 1889, "Republican"),
    president("William McKinley", &[25], 1897, "Republican"),
    president("Theodore Roosevelt", &[26], 1901, "Republican"),
    president("William Howard Taft", &[27], 1909, "Republican"),
    president("Woodrow Wilson", &[28], 1913, "Democratic"),
    president("Warren G. Harding", &[29], 1921, "Republican"),
    president("Calvin Coolidge", &[30], 1923, "Republican"),
    president("Herbert Hoover", &[31], 1929, "Republican"),
    president("Franklin D. Roosevelt", &[32], 1933, "Democratic"),
    president("Harry S. Truman", &[33], 1945, "Democratic"),
    president("Dwight D. Eisenhower", &[34], 1953, "Republican"),
    president("John F. Kennedy", &[35], 1961, "Democratic"),
    president("Lyndon B. Johnson", &[36], 1963, "Democratic"),
    president("Richard Nixon", &[37], 1969, "Republican"),
    president("Gerald Ford", &[38], 1974, "Republican"),
    president("Jimmy Carter", &[39], 1977, "Democratic"),
    president("Ronald Reagan", &[40], 1981, "Republican"),
    president("George H. W. Bush", &[41], 1989, "Republican"),
    president("Bill Clinton", &[42], 1993, "Democratic"),
    president("George W. Bush", &[43], 2001, "Republican"),
    president("Barack Obama", &[44], 2009, "Democratic"),
    president("Donald Trump", &[45, 47], 2017, "Republican"),
    president("Joe Biden", &[46], 2021, "Democratic"),
];

/// The president holding number `n`, if any.
fn by_number(n: u8) -> Option<&'static President> {
    PRESIDENTS.iter().find(|p| p.numbers.contains(&n))
}

/// Highest number held by anyone.
fn latest_number() -> u8 {
    PRESIDENTS
        .iter()
        .flat_map(|p| p.numbers.iter().copied())
        .max()
        .unwrap_or(0)
}

fn cross(rng: &mut StdRng) -> QueryResult {
    let president = &PRESIDENTS[rng.random_range(0..PRESIDENTS.len())];
    build_cross_query("president", president, rng)
}

fn successor(rng: &mut StdRng) -> QueryResult {
    let n = rng.random_range(1..latest_number());
    successor_of(n).unwrap_or_else(|| numbered(rng))
}

/// "Who followed the n-th president?", if both numbers are held.
fn successor_of(n: u8) -> Option<QueryResult> {
    let before = by_number(n)?;
    let after = by_number(n.checked_add(1)?)?;
    Some(QueryResult::new(
        format!(
            "Who followed {}, the {} president?",
            before.name,
            ordinal(u32::from(n))
        ),
        after.name,
    ))
}

fn numbered(rng: &mut StdRng) -> QueryResult {
    let n = rng.random_range(1..=latest_number());
    let name = by_number(n).map_or("", |p| p.name);
    QueryResult::new(format!("Who was the {} president?", ordinal(u32::from(n))), name)
}

fn earlier(rng: &mut StdRng) -> QueryResult {
    let a = rng.random_range(0..PRESIDENTS.len());
    let b = loop {
        let candidate = rng.random_range(0..PRESIDENTS.len());
        if candidate != a {
            break candidate;
        }
    };
    let first = PRESIDENTS[a.min(b)].name;
    QueryResult::new(
        format!(
            "Who took office first: {} or {}?",
            PRESIDENTS[a].name, PRESIDENTS[b].name
        ),
        first,
    )
}

fn validate() -> CoreResult<()> {
    check_table(PRESIDENTS)
}

fn describe() -> Vec<Field> {
    describe_table(PRESIDENTS)
}

const GENERATORS: &[Generator] = &[cross, cross, successor, numbered, earlier];

/// Presidents of the United States.
pub const QUIZ: Quiz = Quiz {
    name: "presidents",
    description: "Presidents of the United States: order, parties, inaugurations",
    generators: GENERATORS,
    validate,
    describe,
};
