//! Command-line driver for the analytic signed tableau solver.
//!
//! Reads a `.tab` sequent file, runs the tableau engine, and prints a single
//! result line: a validity verdict or a countermodel.

use clap::Parser;
use propositional_tableau::error::TableauError;
use propositional_tableau::tableau::{self, Branch, Sign, SignedFormula, Verdict};
use propositional_tableau::{io, report};

use std::path::PathBuf;
use std::process::ExitCode;

/// Structure to collect CLI arguments.
#[derive(Parser)]
#[clap(
    author = "Analytic Tableaux Contributors",
    version,
    about = "Decide validity of a propositional sequent via analytic signed tableau."
)]
struct Arguments {
    /// Path to a `.tab` file containing the sequent to check.
    path: PathBuf,

    /// Increase log verbosity; repeat for more detail (-v, -vv, -vvv).
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    simple_logger::SimpleLogger::new()
        .with_level(level)
        .init()
        .unwrap();
}

fn run(args: &Arguments) -> Result<Verdict, TableauError> {
    let sequent = io::load_tab_file(&args.path)?;

    let mut branch = Branch::new();
    for premise in sequent.premises {
        branch.append(SignedFormula::new(Sign::T, premise));
    }
    branch.append(SignedFormula::new(Sign::F, sequent.conclusion));

    Ok(tableau::run(branch))
}

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(verdict) => {
            report::print_verdict(&verdict);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
