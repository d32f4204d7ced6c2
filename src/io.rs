//! Reads a `.tab` input file: a premise count, the premises, and a conclusion.

use crate::error::{SourceLocation, TableauError};
use crate::formula::{self, Formula};
use std::fs;
use std::path::Path;

/// The parsed contents of a `.tab` file: premises and the conclusion, each
/// already parsed into a [`Formula`].
pub struct Sequent {
    pub premises: Vec<Formula>,
    pub conclusion: Formula,
}

/// Loads and parses a `.tab` file.
///
/// Line 1 is the premise count `n`. Lines 2 through `n+1` are the premises.
/// The last line is the conclusion. Lines between the last premise and the
/// conclusion are ignored. Trailing whitespace on each line is stripped.
pub fn load_tab_file(path: &Path) -> Result<Sequent, TableauError> {
    let display_path = path.display().to_string();

    if path.extension().and_then(|ext| ext.to_str()) != Some("tab") {
        return Err(TableauError::Input(format!(
            "{display_path}: expected a '.tab' file"
        )));
    }

    let contents = fs::read_to_string(path)
        .map_err(|e| TableauError::Input(format!("{display_path}: {e}")))?;

    let lines: Vec<&str> = contents.lines().map(|l| l.trim_end()).collect();

    if lines.is_empty() {
        return Err(TableauError::Input(format!(
            "{display_path}: empty file, expected a premise count on line 1"
        )));
    }

    let n: usize = lines[0].trim().parse().map_err(|_| {
        TableauError::Input(format!(
            "{display_path}:1: malformed header, expected a non-negative integer, found '{}'",
            lines[0]
        ))
    })?;

    if lines.len() < n + 2 {
        return Err(TableauError::Input(format!(
            "{display_path}: expected at least {} lines ({n} premises plus a conclusion), found {}",
            n + 2,
            lines.len()
        )));
    }

    let mut premises = Vec::with_capacity(n);
    for (offset, line) in lines[1..=n].iter().enumerate() {
        let line_number = offset + 2;
        premises.push(parse_line(&display_path, line_number, line)?);
    }

    let conclusion_line_number = lines.len();
    let conclusion = parse_line(&display_path, conclusion_line_number, lines[lines.len() - 1])?;

    Ok(Sequent { premises, conclusion })
}

fn parse_line(path: &str, line_number: usize, text: &str) -> Result<Formula, TableauError> {
    formula::parse(text).map_err(|source| TableauError::Parse {
        location: SourceLocation {
            path: path.to_string(),
            line: line_number,
        },
        source,
    })
}
