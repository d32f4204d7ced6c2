//! The tableau search engine: α-saturation, β-splitting, closure, backtracking.

use crate::tableau::branch::Branch;
use crate::tableau::signed::{Classification, Sign, SignedFormula};
use log::{debug, trace};

/// Result of running the tableau to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Every branch closed: the sequent is valid.
    Valid,
    /// The first surviving open, saturated branch, as its signed atoms.
    Countermodel(Vec<(String, Sign)>),
}

/// The untried alternative from a β-split: the signed formula still to be
/// appended, the branch length to truncate back to, and the β-flag vector
/// to restore, so the alternative branch resumes exactly where it split.
struct BacktrackFrame {
    pending: SignedFormula,
    prefix_length: usize,
    saved_flags: Vec<bool>,
}

/// Scans left-to-right with a moving cursor, replacing every non-atom,
/// non-β entry with its α-expansion appended to the tail. Terminates because
/// each replacement strictly decreases the connective count of unsaturated
/// entries.
fn saturate(branch: &mut Branch) {
    let mut cursor = 0;
    while cursor < branch.len() {
        let classification = branch.entry(cursor).classify();
        if classification == Classification::Alpha {
            let sf = branch.entry(cursor).clone();
            let tail: Vec<SignedFormula> = ((cursor + 1)..branch.len())
                .map(|i| branch.entry(i).clone())
                .collect();
            branch.truncate(cursor);
            for entry in tail {
                branch.append(entry);
            }
            for child in sf.expand() {
                branch.append(child);
            }
        } else {
            cursor += 1;
        }
    }
}

/// Runs the tableau to completion for a seeded branch (premises signed `T`,
/// conclusion signed `F`, already appended by the caller).
pub fn run(mut branch: Branch) -> Verdict {
    let mut stack: Vec<BacktrackFrame> = Vec::new();

    loop {
        saturate(&mut branch);
        trace!("saturated branch of length {}", branch.len());

        if branch.is_closed() {
            debug!("branch closed at length {}", branch.len());
            match stack.pop() {
                None => return Verdict::Valid,
                Some(frame) => {
                    branch.truncate(frame.prefix_length);
                    branch.restore_beta_flags(frame.saved_flags);
                    branch.append(frame.pending);
                    continue;
                }
            }
        }

        if !branch.any_beta_unsplit() {
            debug!("open saturated branch found, length {}", branch.len());
            return Verdict::Countermodel(branch.atoms());
        }

        let i = branch
            .pick_beta()
            .expect("any_beta_unsplit() is true, so some entry must be an unsplit beta");
        let expansion = branch.entry(i).expand();
        let (first, second) = (expansion[0].clone(), expansion[1].clone());
        branch.clear_beta_flag(i);
        let saved_flags = branch.beta_flags_snapshot();
        let prefix_length = branch.len();
        stack.push(BacktrackFrame {
            pending: second,
            prefix_length,
            saved_flags,
        });
        branch.append(first);
        debug!("beta-split at index {i}, stack depth now {}", stack.len());
    }
}
