//! The prompt/response loop and score keeping.
//!
//! A round shows one prompt, blocks for one line of input, and compares the
//! trimmed line to the expected answer exactly. There is no retry and no
//! partial credit; an empty response is simply wrong. End of input ends the
//! session.

use std::collections::BTreeMap;
use std::io::{BufRead, Write};

use chrono::{DateTime, TimeDelta, Utc};
use rand::rngs::StdRng;
use tracing::debug;

use tv_core::QueryResult;

use crate::catalog::{Quiz, pick_random};
use crate::config::SessionConfig;
use crate::error::QuizResult;

/// How one prompt was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The response matched the expected answer.
    Correct,
    /// The response did not match (including an empty response).
    Incorrect,
    /// Input ended before a response was read.
    Quit,
}

/// Show `query`'s prompt on `output` and judge one line read from `input`.
pub fn ask<R, W>(query: &QueryResult, input: &mut R, output: &mut W) -> QuizResult<Outcome>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", query.prompt())?;
    write!(output, "> ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        debug!("input closed");
        return Ok(Outcome::Quit);
    }

    if query.is_correct(&line) {
        Ok(Outcome::Correct)
    } else {
        Ok(Outcome::Incorrect)
    }
}

/// Correct/incorrect counts for one quiz.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Questions answered correctly.
    pub correct: u32,
    /// Questions answered incorrectly.
    pub incorrect: u32,
}

impl Tally {
    /// Number of questions answered.
    pub fn total(&self) -> u32 {
        self.correct + self.incorrect
    }

    /// Share of correct answers, 0-100. Zero when nothing was answered.
    pub fn percent(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => f64::from(self.correct) * 100.0 / f64::from(total),
        }
    }
}

/// Per-quiz score for a session.
#[derive(Debug, Clone)]
pub struct Scorecard {
    started_at: DateTime<Utc>,
    tallies: BTreeMap<&'static str, Tally>,
}

impl Default for Scorecard {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorecard {
    /// An empty scorecard starting now.
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            tallies: BTreeMap::new(),
        }
    }

    /// Count an outcome against a quiz. `Quit` is not counted.
    pub fn record(&mut self, quiz: &'static str, outcome: Outcome) {
        match outcome {
            Outcome::Correct => self.tallies.entry(quiz).or_default().correct += 1,
            Outcome::Incorrect => self.tallies.entry(quiz).or_default().incorrect += 1,
            Outcome::Quit => {}
        }
    }

    /// Sum over all quizzes.
    pub fn totals(&self) -> Tally {
        self.tallies.values().fold(Tally::default(), |acc, t| Tally {
            correct: acc.correct + t.correct,
            incorrect: acc.incorrect + t.incorrect,
        })
    }

    /// Per-quiz tallies, ordered by quiz name.
    pub fn rows(&self) -> impl Iterator<Item = (&'static str, Tally)> + '_ {
        self.tallies.iter().map(|(name, tally)| (*name, *tally))
    }

    /// When the session started.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Time elapsed since the start.
    pub fn elapsed_now(&self) -> TimeDelta {
        self.elapsed(Utc::now())
    }

    /// Time elapsed between the start and `now`.
    pub fn elapsed(&self, now: DateTime<Utc>) -> TimeDelta {
        now - self.started_at
    }
}

/// Format a duration as `1h 02m 03s`, `2m 05s`, or `7s`.
pub fn format_elapsed(elapsed: TimeDelta) -> String {
    let secs = elapsed.num_seconds().max(0);
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if h > 0 {
        format!("{h}h {m:02}m {s:02}s")
    } else if m > 0 {
        format!("{m}m {s:02}s")
    } else {
        format!("{s}s")
    }
}

/// One played round.
#[derive(Debug, Clone)]
pub struct Round {
    /// Name of the quiz the question came from.
    pub quiz: &'static str,
    /// The question that was asked.
    pub query: QueryResult,
    /// How it was answered.
    pub outcome: Outcome,
}

/// A quiz session: a random source, a round budget, and a scorecard.
pub struct Session {
    config: SessionConfig,
    rng: StdRng,
    scorecard: Scorecard,
    played: u32,
}

impl Session {
    /// Start a session from its configuration.
    pub fn new(config: SessionConfig) -> Self {
        let rng = config.rng();
        Self {
            config,
            rng,
            scorecard: Scorecard::new(),
            played: 0,
        }
    }

    /// The session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The running score.
    pub fn scorecard(&self) -> &Scorecard {
        &self.scorecard
    }

    /// True once the configured number of rounds has been played.
    pub fn is_finished(&self) -> bool {
        self.played >= self.config.rounds
    }

    /// Draw the next question, from `fixed` if given, otherwise from a quiz
    /// picked at random.
    pub fn next_question(&mut self, fixed: Option<&'static Quiz>) -> (&'static Quiz, QueryResult) {
        let quiz = match fixed {
            Some(quiz) => quiz,
            None => pick_random(&mut self.rng),
        };
        (quiz, quiz.ask(&mut self.rng))
    }

    /// Play one round against `input`/`output` and record the outcome.
    pub fn round<R, W>(
        &mut self,
        fixed: Option<&'static Quiz>,
        input: &mut R,
        output: &mut W,
    ) -> QuizResult<Round>
    where
        R: BufRead,
        W: Write,
    {
        let (quiz, query) = self.next_question(fixed);
        let outcome = ask(&query, input, output)?;
        self.scorecard.record(quiz.name, outcome);
        if outcome == Outcome::Quit {
            self.played = self.config.rounds;
        } else {
            self.played += 1;
        }
        Ok(Round {
            quiz: quiz.name,
            query,
            outcome,
        })
    }
}
