//! Renders a [`Verdict`] to the single output line the driver prints.

use crate::tableau::{Sign, Verdict};
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

const VALID_LINE: &str = "SA\u{cd}DA: Sequente V\u{e1}lido";

/// The output line for a verdict, without a trailing newline.
pub fn render(verdict: &Verdict) -> String {
    match verdict {
        Verdict::Valid => VALID_LINE.to_string(),
        Verdict::Countermodel(atoms) => {
            let tokens: Vec<String> = atoms
                .iter()
                .map(|(name, sign)| format!("{sign}{name}"))
                .collect();
            format!("SA\u{cd}DA: {}", tokens.join(" "))
        }
    }
}

/// Prints the rendered verdict to stdout, green for valid and yellow for a
/// countermodel.
pub fn print_verdict(verdict: &Verdict) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let color = match verdict {
        Verdict::Valid => Color::Green,
        Verdict::Countermodel(_) => Color::Yellow,
    };
    stdout
        .set_color(ColorSpec::new().set_fg(Some(color)))
        .unwrap();
    writeln!(&mut stdout, "{}", render(verdict)).unwrap();
    stdout.reset().unwrap();
}
