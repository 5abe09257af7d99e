//! CLI frontend for the Trivium trivia quiz.

mod chart;
mod commands;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tv_core::Role;

#[derive(Parser)]
#[command(
    name = "trivium",
    about = "Trivia and memory drills from the terminal",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log quiz and generator selection to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive quiz
    Play {
        /// Quiz to play (default: a random quiz for every question)
        quiz: Option<String>,

        /// Number of questions
        #[arg(short = 'n', long, default_value = "10")]
        rounds: u32,

        /// RNG seed for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Print one question together with its answer
    Ask {
        /// Quiz to draw from (default: a random quiz)
        quiz: Option<String>,

        /// RNG seed for a reproducible question
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the question as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the available quizzes
    List,

    /// Show the annotated fields a quiz builds questions from
    Fields {
        /// Quiz to describe
        quiz: String,

        /// Only show fields with this role (given, guess, or all)
        #[arg(short, long, value_parser = parse_role)]
        role: Option<Role>,
    },

    /// Check every quiz table for annotation mistakes
    Check,
}

fn parse_role(s: &str) -> Result<Role, String> {
    Role::parse(s).ok_or_else(|| format!("expected given, guess, or all, got '{s}'"))
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "tv_core=debug,tv_quiz=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Play { quiz, rounds, seed } => commands::play::run(quiz.as_deref(), rounds, seed),
        Commands::Ask { quiz, seed, json } => commands::ask::run(quiz.as_deref(), seed, json),
        Commands::List => commands::list::run(),
        Commands::Fields { quiz, role } => commands::fields::run(&quiz, role),
        Commands::Check => commands::check::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
