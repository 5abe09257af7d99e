use std::io::{self, Write};

use colored::Colorize;
use tracing::debug;

use tv_quiz::{Outcome, Session, format_elapsed};

use crate::chart;

pub fn run(quiz: Option<&str>, rounds: u32, seed: Option<u64>) -> Result<(), String> {
    let fixed = super::resolve(quiz)?;
    let config = super::config(seed).with_rounds(rounds);
    debug!(?seed, rounds = config.rounds, "starting session");
    let mut session = Session::new(config);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    let title = fixed.map_or("mixed", |q| q.name);
    writeln!(output, "  {} {title} quiz", "Starting".bold()).map_err(|e| e.to_string())?;
    writeln!(output, "  Answer exactly; case matters. End input to stop.\n")
        .map_err(|e| e.to_string())?;

    let total = session.config().rounds;
    let mut number = 0;
    while !session.is_finished() {
        number += 1;
        let header = format!("Question {number}/{total}");
        writeln!(output, "{}", header.dimmed()).map_err(|e| e.to_string())?;

        let round = session
            .round(fixed, &mut input, &mut output)
            .map_err(|e| e.to_string())?;

        let verdict = match round.outcome {
            Outcome::Correct => format!("{}\n", "Correct!".green()),
            Outcome::Incorrect => format!(
                "{} The answer was: {}\n",
                "Wrong.".red(),
                round.query.answer().bold()
            ),
            Outcome::Quit => String::new(),
        };
        writeln!(output, "{verdict}").map_err(|e| e.to_string())?;
    }

    let card = session.scorecard();
    let totals = card.totals();
    writeln!(
        output,
        "  {} {}/{} correct ({:.0}%) in {}",
        "Score:".bold(),
        totals.correct,
        totals.total(),
        totals.percent(),
        format_elapsed(card.elapsed_now()),
    )
    .map_err(|e| e.to_string())?;

    let rows: Vec<_> = card.rows().collect();
    if !rows.is_empty() {
        writeln!(output).map_err(|e| e.to_string())?;
        write!(output, "{}", chart::bar_chart(&rows, chart::WIDTH)).map_err(|e| e.to_string())?;
    }

    Ok(())
}
