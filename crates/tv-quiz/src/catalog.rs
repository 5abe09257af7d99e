//! The quiz catalog and generator dispatch.

use rand::Rng;
use rand::rngs::StdRng;
use tracing::debug;

use tv_core::{CoreResult, Field, QueryResult};

use crate::error::{QuizError, QuizResult};
use crate::quizzes;

/// A zero-argument question generator (apart from the random source).
pub type Generator = fn(&mut StdRng) -> QueryResult;

/// A quiz module: a static table plus the generators that draw on it.
#[derive(Debug, Clone, Copy)]
pub struct Quiz {
    /// Short name used on the command line.
    pub name: &'static str,
    /// One-line description for listings.
    pub description: &'static str,
    /// Generators to pick from. A generator listed more than once is drawn
    /// proportionally more often.
    pub generators: &'static [Generator],
    /// Checks every row of the quiz's table against the engine's contract.
    pub validate: fn() -> CoreResult<()>,
    /// Describes the annotated fields of the quiz's entities, using the first
    /// row of its table.
    pub describe: fn() -> Vec<Field>,
}

impl Quiz {
    /// Ask one question, picking a generator uniformly from the list.
    ///
    /// # Panics
    ///
    /// Panics if the quiz has no generators; [`Quiz::check`] reports this.
    pub fn ask(&self, rng: &mut StdRng) -> QueryResult {
        let index = rng.random_range(0..self.generators.len());
        debug!(quiz = self.name, generator = index, "asking");
        (self.generators[index])(rng)
    }

    /// Check that the quiz has generators and a well-annotated table.
    pub fn check(&self) -> QuizResult<()> {
        if self.generators.is_empty() {
            return Err(QuizError::NoGenerators(self.name.to_string()));
        }
        (self.validate)().map_err(|source| QuizError::Contract {
            quiz: self.name.to_string(),
            source,
        })
    }
}

static CATALOG: &[Quiz] = &[
    quizzes::countries::QUIZ,
    quizzes::presidents::QUIZ,
    quizzes::elements::QUIZ,
    quizzes::greek::QUIZ,
    quizzes::nato::QUIZ,
    quizzes::http::QUIZ,
    quizzes::planets::QUIZ,
    quizzes::roman::QUIZ,
];

/// All registered quizzes, in listing order.
pub fn catalog() -> &'static [Quiz] {
    CATALOG
}

/// Find a quiz by name (case-insensitive).
pub fn find(name: &str) -> QuizResult<&'static Quiz> {
    CATALOG
        .iter()
        .find(|q| q.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| QuizError::UnknownQuiz(name.to_string()))
}

/// Pick a quiz uniformly at random.
pub fn pick_random(rng: &mut StdRng) -> &'static Quiz {
    let quiz = &CATALOG[rng.random_range(0..CATALOG.len())];
    debug!(quiz = quiz.name, "picked quiz");
    quiz
}
