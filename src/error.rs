use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Classifies pattern validation failures for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternErrorKind {
    /// Two or more wildcard characters in one pattern
    MultipleWildcards,
    /// A single wildcard that is not the last character
    MisplacedWildcard,
}

/// Construction-time validation error.
///
/// `index` is the position of the offending pattern in the input sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Pattern {index} invalid: at most one wildcard allowed")]
    MultipleWildcards { index: usize },

    #[error("Pattern {index} invalid: wildcard must be at end")]
    MisplacedWildcard { index: usize },
}

impl PatternError {
    /// Position of the offending pattern in the input sequence.
    pub fn index(&self) -> usize {
        match self {
            PatternError::MultipleWildcards { index } | PatternError::MisplacedWildcard { index } => {
                *index
            }
        }
    }

    pub fn kind(&self) -> PatternErrorKind {
        match self {
            PatternError::MultipleWildcards { .. } => PatternErrorKind::MultipleWildcards,
            PatternError::MisplacedWildcard { .. } => PatternErrorKind::MisplacedWildcard,
        }
    }

    /// Short human-readable reason, without the index.
    pub fn reason(&self) -> &'static str {
        match self.kind() {
            PatternErrorKind::MultipleWildcards => "at most one wildcard allowed",
            PatternErrorKind::MisplacedWildcard => "wildcard must be at end",
        }
    }
}

/// Crate-level error: pattern validation plus pattern list loading.
#[derive(Error, Debug)]
pub enum MatchError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error("Failed to read patterns file '{}': {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, MatchError>;
