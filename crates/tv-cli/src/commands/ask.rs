use colored::Colorize;
use serde::Serialize;

use tv_core::QueryResult;
use tv_quiz::pick_random;

/// JSON shape of an asked question: the quiz name plus the query's fields.
#[derive(Serialize)]
struct Asked<'a> {
    quiz: &'a str,
    #[serde(flatten)]
    query: &'a QueryResult,
}

pub fn run(quiz: Option<&str>, seed: Option<u64>, as_json: bool) -> Result<(), String> {
    let fixed = super::resolve(quiz)?;
    let mut rng = super::config(seed).rng();

    let quiz = match fixed {
        Some(quiz) => quiz,
        None => pick_random(&mut rng),
    };
    let query = quiz.ask(&mut rng);

    if as_json {
        let asked = Asked {
            quiz: quiz.name,
            query: &query,
        };
        let text = serde_json::to_string_pretty(&asked).map_err(|e| e.to_string())?;
        println!("{text}");
    } else {
        println!("  [{}] {}", quiz.name.cyan(), query.prompt());
        println!("  {} {}", "Answer:".bold(), query.answer());
    }

    Ok(())
}
