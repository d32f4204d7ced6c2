//! Top-level error type. Every fallible operation above the formula parser
//! reports through this type so the CLI driver can turn it into a located
//! diagnostic line and the right exit code.

use crate::formula::FormulaError;
use thiserror::Error;

/// Where in the input file a [`TableauError::Parse`] was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub path: String,
    pub line: usize,
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.path, self.line)
    }
}

#[derive(Debug, Error)]
pub enum TableauError {
    /// The `.tab` file could not be read at all, or was structurally wrong
    /// (wrong premise count, missing conclusion line).
    #[error("{0}")]
    Input(String),

    /// A formula on a specific line failed to tokenize or parse.
    #[error("{location}: {source}")]
    Parse {
        location: SourceLocation,
        #[source]
        source: FormulaError,
    },

    /// An invariant the engine relies on was violated; this indicates a bug
    /// rather than bad input.
    #[error("internal error: {0}")]
    Internal(String),
}

impl TableauError {
    /// Exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            TableauError::Input(_) => 2,
            TableauError::Parse { .. } => 2,
            TableauError::Internal(_) => 3,
        }
    }
}
