//! The tableau search engine: signed formulas, branch state, and the
//! α-saturation / β-split / backtrack main loop.

pub mod branch;
pub mod engine;
pub mod signed;

pub use branch::Branch;
pub use engine::{run, Verdict};
pub use signed::{Classification, Sign, SignedFormula};
