//! The state of a single tableau branch.
//!
//! A branch is the ordered list of signed formulas placed on it so far, plus
//! two auxiliary indices kept in lockstep so closure testing and β-selection
//! stay cheap: a parallel "is this entry a β-formula not yet split" flag
//! vector, and a `(sign, atom name) -> count` occurrence index.

use crate::tableau::signed::{Classification, Sign, SignedFormula};
use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
pub struct Branch {
    entries: Vec<SignedFormula>,
    beta_flags: Vec<bool>,
    atom_counts: HashMap<(Sign, String), usize>,
}

impl Branch {
    pub fn new() -> Branch {
        Branch::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, index: usize) -> &SignedFormula {
        &self.entries[index]
    }

    /// Appends a signed formula, recording whether it is an unsplit β-formula
    /// and bumping the atom index if it is atomic.
    pub fn append(&mut self, sf: SignedFormula) {
        let is_beta = matches!(sf.classify(), Classification::Beta);
        if let crate::formula::Formula::Atom(name) = &sf.formula {
            *self.atom_counts.entry((sf.sign, name.clone())).or_insert(0) += 1;
        }
        self.entries.push(sf);
        self.beta_flags.push(is_beta);
    }

    /// Truncates the branch back to `new_len` entries, undoing the atom-index
    /// bookkeeping for every removed entry. Used when a backtrack frame
    /// rewinds the branch to the point the β-split happened.
    pub fn truncate(&mut self, new_len: usize) {
        while self.entries.len() > new_len {
            let sf = self.entries.pop().expect("len checked above");
            self.beta_flags.pop();
            if let crate::formula::Formula::Atom(name) = &sf.formula {
                let key = (sf.sign, name.clone());
                if let Some(count) = self.atom_counts.get_mut(&key) {
                    *count -= 1;
                    if *count == 0 {
                        self.atom_counts.remove(&key);
                    }
                }
            }
        }
    }

    /// A branch is closed iff it contains some atom both signed `T` and `F`.
    pub fn is_closed(&self) -> bool {
        self.atom_counts
            .keys()
            .any(|(sign, name)| self.atom_counts.contains_key(&(sign.flip(), name.clone())))
    }

    pub fn any_beta_unsplit(&self) -> bool {
        self.beta_flags.iter().any(|&flag| flag)
    }

    /// Clears the β-flag at `index` once that entry has been split and its
    /// second disjunct pushed onto the backtrack stack.
    pub fn clear_beta_flag(&mut self, index: usize) {
        self.beta_flags[index] = false;
    }

    pub fn beta_flags_snapshot(&self) -> Vec<bool> {
        self.beta_flags.clone()
    }

    pub fn restore_beta_flags(&mut self, flags: Vec<bool>) {
        self.beta_flags = flags;
    }

    /// Picks the index of the unsplit β-formula with the smallest canonical
    /// string length, left-biased on ties (strict `<` against the running
    /// best). Returns `None` if there is no unsplit β-formula.
    pub fn pick_beta(&self) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;
        for (i, &flag) in self.beta_flags.iter().enumerate() {
            if !flag {
                continue;
            }
            let size = self.entries[i].size();
            match best {
                Some((_, best_size)) if size < best_size => best = Some((i, size)),
                None => best = Some((i, size)),
                _ => {}
            }
        }
        best.map(|(i, _)| i)
    }

    /// Distinct atom names that appear on the branch, paired with the sign
    /// they carry (a closed branch would have both; an open branch's result
    /// is used to build the countermodel). Sorted by name then sign so the
    /// result is identical across runs regardless of hash-map iteration
    /// order.
    pub fn atoms(&self) -> Vec<(String, Sign)> {
        let mut out: Vec<(String, Sign)> = self
            .atom_counts
            .keys()
            .map(|(sign, name)| (name.clone(), *sign))
            .collect();
        out.sort();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::Formula;

    fn atom(sign: Sign, name: &str) -> SignedFormula {
        SignedFormula::new(sign, Formula::mk_atom(name))
    }

    #[test]
    fn detects_closure_on_matching_atom() {
        let mut b = Branch::new();
        b.append(atom(Sign::T, "p"));
        assert!(!b.is_closed());
        b.append(atom(Sign::F, "p"));
        assert!(b.is_closed());
    }

    #[test]
    fn truncate_undoes_closure() {
        let mut b = Branch::new();
        b.append(atom(Sign::T, "p"));
        b.append(atom(Sign::F, "p"));
        assert!(b.is_closed());
        b.truncate(1);
        assert!(!b.is_closed());
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn pick_beta_prefers_smallest_left_biased() {
        let mut b = Branch::new();
        b.append(SignedFormula::new(
            Sign::T,
            Formula::mk_or(Formula::mk_atom("aa"), Formula::mk_atom("bb")),
        ));
        b.append(SignedFormula::new(
            Sign::T,
            Formula::mk_or(Formula::mk_atom("c"), Formula::mk_atom("d")),
        ));
        // Both have the same size() as formulas of equal shape and atom-name
        // length do, so add one that is strictly smaller.
        b.append(SignedFormula::new(
            Sign::T,
            Formula::mk_or(Formula::mk_atom("x"), Formula::mk_atom("y")),
        ));
        assert_eq!(b.pick_beta(), Some(1));
    }

    #[test]
    fn atoms_sorted_deterministically() {
        let mut b = Branch::new();
        b.append(atom(Sign::F, "z"));
        b.append(atom(Sign::T, "a"));
        assert_eq!(
            b.atoms(),
            vec![("a".to_string(), Sign::T), ("z".to_string(), Sign::F)]
        );
    }
}
