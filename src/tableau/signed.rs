//! Signed formulas and the Smullyan-style α/β/atom classification.

use crate::formula::Formula;
use std::fmt;

/// A truth sign attached to a formula: `T` asserts it, `F` denies it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Sign {
    T,
    F,
}

impl Sign {
    pub fn flip(self) -> Sign {
        match self {
            Sign::T => Sign::F,
            Sign::F => Sign::T,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::T => write!(f, "T"),
            Sign::F => write!(f, "F"),
        }
    }
}

/// What a one-step expansion of a signed formula looks like.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Classification {
    Atom,
    Alpha,
    Beta,
}

/// A `(sign, formula)` pair. Never mutated; new signed formulas are produced
/// by seeding, α-expansion, or β-expansion.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SignedFormula {
    pub sign: Sign,
    pub formula: Formula,
}

impl SignedFormula {
    pub fn new(sign: Sign, formula: Formula) -> SignedFormula {
        SignedFormula { sign, formula }
    }

    /// The signed formula obtained by flipping the sign, formula unchanged.
    pub fn conjugate(&self) -> SignedFormula {
        SignedFormula::new(self.sign.flip(), self.formula.clone())
    }

    /// Pure function of sign and root connective.
    pub fn classify(&self) -> Classification {
        use Classification::*;
        use Formula::*;
        use Sign::*;
        match (self.sign, &self.formula) {
            (_, Atom(_)) => Atom,
            (T, Not(_)) | (F, Not(_)) => Alpha,
            (T, And(..)) => Alpha,
            (F, And(..)) => Beta,
            (T, Or(..)) => Beta,
            (F, Or(..)) => Alpha,
            (T, Impl(..)) => Beta,
            (F, Impl(..)) => Alpha,
        }
    }

    /// The one-step expansion. For α-rows both outputs belong on the current
    /// branch; for β-rows the first element is the one that stays on the
    /// current branch and the second becomes the pending backtrack frame —
    /// the order is fixed by sign and connective, not chosen by a heuristic.
    ///
    /// # Panics
    ///
    /// Panics if called on an atomic signed formula; the engine only ever
    /// calls this after checking [`SignedFormula::classify`] is not `Atom`.
    pub fn expand(&self) -> Vec<SignedFormula> {
        use Formula::*;
        use Sign::*;
        match (self.sign, &self.formula) {
            (T, Not(x)) => vec![SignedFormula::new(F, (**x).clone())],
            (F, Not(x)) => vec![SignedFormula::new(T, (**x).clone())],
            (T, And(a, b)) => vec![
                SignedFormula::new(T, (**a).clone()),
                SignedFormula::new(T, (**b).clone()),
            ],
            (F, And(a, b)) => vec![
                SignedFormula::new(F, (**a).clone()),
                SignedFormula::new(F, (**b).clone()),
            ],
            (T, Or(a, b)) => vec![
                SignedFormula::new(T, (**a).clone()),
                SignedFormula::new(T, (**b).clone()),
            ],
            (F, Or(a, b)) => vec![
                SignedFormula::new(F, (**a).clone()),
                SignedFormula::new(F, (**b).clone()),
            ],
            (T, Impl(a, b)) => vec![
                SignedFormula::new(F, (**a).clone()),
                SignedFormula::new(T, (**b).clone()),
            ],
            (F, Impl(a, b)) => vec![
                SignedFormula::new(T, (**a).clone()),
                SignedFormula::new(F, (**b).clone()),
            ],
            (_, Atom(_)) => unreachable!("expand() called on an atomic signed formula"),
        }
    }

    /// Heuristic key for β-selection: length of the underlying formula's
    /// canonical string.
    pub fn size(&self) -> usize {
        self.formula.size()
    }
}

impl fmt::Display for SignedFormula {
    /// Renders as the sign directly followed by the formula, e.g. `Tx`/`Fx`,
    /// with no separator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.sign, self.formula)
    }
}
