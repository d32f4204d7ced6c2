//! The propositional formula AST and its canonical string form.

use std::fmt;

/// An immutable propositional-logic formula.
///
/// Formulas are built bottom-up by the parser and never mutated afterwards;
/// sharing a subformula between two parents means cloning it (formulas in
/// this domain are small, so a deep clone is cheap).
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Formula {
    /// A propositional variable, e.g. `p`, `x1`, `has_foo`.
    Atom(String),
    Not(Box<Formula>),
    And(Box<Formula>, Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
    Impl(Box<Formula>, Box<Formula>),
}

impl Formula {
    pub fn mk_atom(name: impl Into<String>) -> Formula {
        Formula::Atom(name.into())
    }

    pub fn mk_not(child: Formula) -> Formula {
        Formula::Not(Box::new(child))
    }

    pub fn mk_and(left: Formula, right: Formula) -> Formula {
        Formula::And(Box::new(left), Box::new(right))
    }

    pub fn mk_or(left: Formula, right: Formula) -> Formula {
        Formula::Or(Box::new(left), Box::new(right))
    }

    pub fn mk_impl(left: Formula, right: Formula) -> Formula {
        Formula::Impl(Box::new(left), Box::new(right))
    }

    /// Length (in chars) of the canonical string form. Used only as the β-selection
    /// heuristic key; it has no bearing on soundness or completeness.
    pub fn size(&self) -> usize {
        self.to_string().chars().count()
    }
}

impl fmt::Display for Formula {
    /// Canonical form: negation binds tightly and carries no parentheses of
    /// its own, binary connectives are always fully parenthesized.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Atom(name) => write!(f, "{name}"),
            Formula::Not(child) => write!(f, "\u{ac}{child}"),
            Formula::And(l, r) => write!(f, "({l}&{r})"),
            Formula::Or(l, r) => write!(f, "({l}|{r})"),
            Formula::Impl(l, r) => write!(f, "({l}->{r})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_display() {
        let f = Formula::mk_impl(
            Formula::mk_and(Formula::mk_atom("a"), Formula::mk_atom("b")),
            Formula::mk_not(Formula::mk_atom("c")),
        );
        assert_eq!(f.to_string(), "((a&b)->\u{ac}c)");
    }

    #[test]
    fn size_counts_chars_not_bytes() {
        let f = Formula::mk_not(Formula::mk_atom("a"));
        // "¬a" is 2 chars but 3 bytes (¬ is a 2-byte UTF-8 sequence).
        assert_eq!(f.size(), 2);
        assert_eq!(f.to_string().len(), 3);
    }

    #[test]
    fn structural_equality_ignores_construction_path() {
        let a = Formula::mk_and(Formula::mk_atom("x"), Formula::mk_atom("y"));
        let b = Formula::And(
            Box::new(Formula::Atom("x".to_string())),
            Box::new(Formula::Atom("y".to_string())),
        );
        assert_eq!(a, b);
    }
}
